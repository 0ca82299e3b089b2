// Host-side tests for the pure key mapping.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod keymap {
    include!("../src/events/keymap.rs");
}

use keymap::*;

#[test]
fn mapped_keys_ignore_case() {
    for (key, action) in [
        ("c", KeyAction::CyclePalette),
        ("C", KeyAction::CyclePalette),
        ("r", KeyAction::Reset),
        ("R", KeyAction::Reset),
        ("h", KeyAction::ToggleHint),
        ("H", KeyAction::ToggleHint),
        ("Escape", KeyAction::Stop),
    ] {
        assert_eq!(action_for_key(key), Some(action), "{}", key);
    }
}

#[test]
fn other_keys_do_nothing() {
    for key in ["a", "x", " ", "Enter", "escape", "ArrowUp", ""] {
        assert_eq!(action_for_key(key), None, "{:?}", key);
    }
}

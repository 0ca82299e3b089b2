/// What a key press asks the app to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    CyclePalette,
    Reset,
    ToggleHint,
    Stop,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "c" | "C" => Some(KeyAction::CyclePalette),
        "r" | "R" => Some(KeyAction::Reset),
        "h" | "H" => Some(KeyAction::ToggleHint),
        "Escape" => Some(KeyAction::Stop),
        _ => None,
    }
}

pub mod keyboard;
pub mod keymap;

use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keyboard shortcuts. `on_stop` runs once when Escape is pressed.
pub fn wire_global_keydown(
    frame_ctx: Rc<RefCell<FrameContext>>,
    mut on_stop: impl FnMut() + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if keyboard::handle_global_keydown(&ev, &frame_ctx) {
            on_stop();
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Run `handler` when the page is being unloaded or put into the bfcache.
pub fn wire_pagehide(mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

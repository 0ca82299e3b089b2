use super::keymap::{action_for_key, KeyAction};
use crate::frame::FrameContext;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Handle one keydown. Returns true when the app should shut down.
pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    frame_ctx: &Rc<RefCell<FrameContext>>,
) -> bool {
    if ev.repeat() {
        return false;
    }
    let Some(action) = action_for_key(&ev.key()) else {
        return false;
    };
    log::info!("[keys] {:?}", action);
    match action {
        KeyAction::CyclePalette => frame_ctx.borrow_mut().cycle_palette(),
        KeyAction::Reset => frame_ctx.borrow_mut().reset(),
        KeyAction::ToggleHint => {
            if let Some(document) = crate::dom::window_document() {
                overlay::toggle_hint(&document);
            }
        }
        KeyAction::Stop => return true,
    }
    ev.prevent_default();
    false
}

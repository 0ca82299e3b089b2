use crate::constants::{HINT_ID, STATUS_ID};
use web_sys as web;

/// Show a message over the video (camera denied, tracker missing, ...).
pub fn show_status(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id(STATUS_ID) {
        el.set_text_content(Some(message));
        _ = el.class_list().remove_1("hidden");
        _ = el.set_attribute("style", "");
    }
}

pub fn hide_status(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(STATUS_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hint_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

pub fn toggle_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        if is_hint_hidden(document) {
            _ = el.class_list().remove_1("hidden");
            _ = el.set_attribute("style", "");
        } else {
            _ = el.class_list().add_1("hidden");
            _ = el.set_attribute("style", "display:none");
        }
    }
}

/// Refresh the key/gesture cheat sheet with the active palette name.
pub fn update_hint(document: &web::Document, palette_name: &str) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        let hint_html = format!(
            "<div style='color: #cfe7ff; font: 13px system-ui; background: rgba(10, 14, 24, 0.8); padding: 8px 12px; border-radius: 6px; border: 1px solid rgba(80, 110, 150, 0.35);'>\
             Fist: lightning • Pinch-cup: charge • Peace: arrow • Open: palette • Heart: burst<br>\
             C palette ({}) • R reset • H hide • Esc stop</div>",
            palette_name
        );
        el.set_inner_html(&hint_html);
    }
}

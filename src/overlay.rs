use crate::constants::{MODE_LABEL_ID, STATUS_OVERLAY_ID, STATUS_TEXT_ID};
use crate::dom;
use viewer_core::ViewMode;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(STATUS_OVERLAY_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(STATUS_OVERLAY_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Show `message` in the status overlay, or hide it when there is nothing to say.
pub fn set_status(document: &web::Document, message: Option<&str>) {
    match message {
        Some(text) => {
            dom::set_text(document, STATUS_TEXT_ID, text);
            show(document);
        }
        None => hide(document),
    }
}

pub fn set_mode_label(document: &web::Document, mode: ViewMode) {
    let text = match mode {
        ViewMode::ThreeD => "3D View",
        ViewMode::TwoD => "2D View (top-down)",
    };
    dom::set_text(document, MODE_LABEL_ID, text);
}

use crate::constants::{HINT_SELECTOR, ROTATION_SLIDER_IDS, VIEW_2D_BUTTON_ID, VIEW_3D_BUTTON_ID};
use crate::{dom, overlay};
use std::cell::Cell;
use std::rc::Rc;
use viewer_core::{DualCoordinator, ObjectSlot, RotationParameter, ViewMode, ViewerSnapshot};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn toggle_hint_visibility(document: &web::Document) {
    if let Ok(Some(el)) = document.query_selector(HINT_SELECTOR) {
        let show = !matches!(el.get_attribute("data-visible").as_deref(), Some("1"));
        _ = el.set_attribute("data-visible", if show { "1" } else { "0" });
        _ = el.set_attribute("style", if show { "" } else { "display:none" });
    }
}

/// Switch the presented camera. Model state is untouched.
pub fn apply_view_mode(document: &web::Document, view_mode: &Cell<ViewMode>, mode: ViewMode) {
    if view_mode.replace(mode) != mode {
        log::info!("[view] switched to {mode}");
    }
    overlay::set_mode_label(document, mode);
    for (id, active) in [
        (VIEW_3D_BUTTON_ID, mode == ViewMode::ThreeD),
        (VIEW_2D_BUTTON_ID, mode == ViewMode::TwoD),
    ] {
        if let Some(el) = document.get_element_by_id(id) {
            let cl = el.class_list();
            _ = if active {
                cl.add_1("active")
            } else {
                cl.remove_1("active")
            };
        }
    }
}

pub fn wire_view_buttons(document: &web::Document, view_mode: Rc<Cell<ViewMode>>) {
    for (id, mode) in [
        (VIEW_3D_BUTTON_ID, ViewMode::ThreeD),
        (VIEW_2D_BUTTON_ID, ViewMode::TwoD),
    ] {
        let view_mode = view_mode.clone();
        dom::add_click_listener(document, id, move || {
            if let Some(doc) = dom::window_document() {
                apply_view_mode(&doc, &view_mode, mode);
            }
        });
    }
}

/// Every slider change persists immediately.
pub fn wire_rotation_sliders(document: &web::Document, viewer: Rc<DualCoordinator>) {
    for slot in ObjectSlot::ALL {
        let Some(slider) = dom::input_element(document, ROTATION_SLIDER_IDS[slot.index()]) else {
            log::warn!("[ui] missing rotation slider for {slot:?}");
            continue;
        };
        slider.set_disabled(true);
        let viewer = viewer.clone();
        let input = slider.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            let Ok(value) = input.value().parse::<f32>() else {
                return;
            };
            viewer.set_rotation(slot, RotationParameter::new(value));
        }) as Box<dyn FnMut()>);
        _ = slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Push hydrated rotations into the sliders and enable them.
pub fn sync_rotation_sliders(document: &web::Document, snapshot: &ViewerSnapshot) {
    for object in &snapshot.objects {
        if let Some(slider) = dom::input_element(document, ROTATION_SLIDER_IDS[object.slot.index()])
        {
            slider.set_value(&format!("{}", object.rotation.value()));
            slider.set_disabled(false);
        }
    }
}

use crate::input::{key_action, KeyAction};
use crate::ui;
use std::cell::Cell;
use std::rc::Rc;
use viewer_core::ViewMode;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, view_mode: &Cell<ViewMode>) {
    // leave typing in form fields alone
    if let Some(target) = ev.target() {
        if target.dyn_ref::<web::HtmlInputElement>().is_some() {
            return;
        }
    }
    let Some(action) = key_action(&ev.key()) else {
        return;
    };
    let Some(document) = crate::dom::window_document() else {
        return;
    };
    match action {
        KeyAction::SetView(mode) => ui::apply_view_mode(&document, view_mode, mode),
        KeyAction::ToggleView => {
            ui::apply_view_mode(&document, view_mode, view_mode.get().toggled())
        }
        KeyAction::ToggleHint => ui::toggle_hint_visibility(&document),
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(view_mode: Rc<Cell<ViewMode>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &view_mode);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

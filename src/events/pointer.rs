use crate::constants::{CLICK_SLOP_PX, WHEEL_PX_PER_STEP};
use crate::dom;
use crate::input::{self, PointerState};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use viewer_core::{DualCoordinator, PointerControls, Ray, ViewMode};
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub viewer: Rc<DualCoordinator>,
    pub controls: Rc<RefCell<PointerControls>>,
    pub view_mode: Rc<Cell<ViewMode>>,
    pub pointer: Rc<RefCell<PointerState>>,
}

impl InputWiring {
    fn ray_at(&self, at: glam::Vec2) -> Option<Ray> {
        let viewport = dom::canvas_viewport(&self.canvas);
        let camera = self.controls.borrow().orbit.camera(self.view_mode.get());
        Ray::from_screen(&camera, &viewport, at)
    }

    fn refresh_cursor(&self) {
        dom::set_cursor(&self.canvas, self.controls.borrow().cursor);
    }
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_pointerleave(&w);
    wire_wheel(&w);
    wire_contextmenu(&w);
}

fn listen<E: FromWasmAbi + 'static>(
    canvas: &web::HtmlCanvasElement,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "pointermove", move |ev: web::PointerEvent| {
        let pos = dom::pointer_client(&ev);
        let (delta, orbiting, button) = {
            let mut p = w.pointer.borrow_mut();
            let delta = p.move_to(pos);
            (delta, p.orbiting, p.button)
        };
        if w.viewer.is_loading() {
            return;
        }
        let mode = w.view_mode.get();
        if orbiting {
            let mut controls = w.controls.borrow_mut();
            if input::is_pan_gesture(button, ev.shift_key()) {
                controls.orbit.pan(mode, delta);
            } else {
                controls.orbit.rotate(mode, delta);
            }
            return;
        }
        let ray = w.ray_at(pos);
        w.viewer
            .pointer_moved(ray, &mut *w.controls.borrow_mut());
        w.refresh_cursor();
    });
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "pointerdown", move |ev: web::PointerEvent| {
        let pos = dom::pointer_client(&ev);
        // presses off the models orbit the camera unless a drag is in progress
        let on_model = w.ray_at(pos).and_then(|r| w.viewer.pick(&r)).is_some();
        let orbiting = !w.viewer.any_dragging() && !on_model;
        w.pointer.borrow_mut().press(pos, ev.button(), orbiting);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
    });
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "pointerup", move |ev: web::PointerEvent| {
        let pos = dom::pointer_client(&ev);
        let down = w.pointer.borrow_mut().release(pos);
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
        let Some(down) = down else {
            return;
        };
        if ev.button() != 0 || !input::is_click(down, pos, CLICK_SLOP_PX) {
            return;
        }
        if w.viewer.is_loading() {
            log::debug!("[input] click ignored while loading");
            return;
        }
        let ray = w.ray_at(pos);
        w.viewer.click(ray, &mut *w.controls.borrow_mut());
        w.refresh_cursor();
    });
}

fn wire_pointerleave(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "pointerleave", move |_ev: web::PointerEvent| {
        w.pointer.borrow_mut().cancel();
        w.viewer.pointer_left(&mut *w.controls.borrow_mut());
        w.refresh_cursor();
    });
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "wheel", move |ev: web::WheelEvent| {
        ev.prevent_default();
        let steps = input::wheel_steps(ev.delta_y(), WHEEL_PX_PER_STEP);
        w.controls
            .borrow_mut()
            .orbit
            .zoom(w.view_mode.get(), steps);
    });
}

fn wire_contextmenu(w: &InputWiring) {
    listen(&w.canvas, "contextmenu", move |ev: web::Event| {
        ev.prevent_default();
    });
}

use crate::dom;
use crate::overlay;
use crate::render::Renderer;
use crate::ui;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use viewer_core::{DualCoordinator, PointerControls, ViewMode, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub renderer: Renderer,

    pub viewer: Rc<DualCoordinator>,
    pub controls: Rc<RefCell<PointerControls>>,
    pub view_mode: Rc<Cell<ViewMode>>,

    /// Last text pushed to the status overlay, to avoid touching the DOM every frame.
    pub last_status: Option<Option<String>>,
    pub sliders_synced: bool,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let snapshot = self.viewer.snapshot();

        let status = snapshot.status_message();
        if self.last_status.as_ref() != Some(&status) {
            overlay::set_status(&self.document, status.as_deref());
            self.last_status = Some(status);
        }
        if !snapshot.is_loading && !self.sliders_synced {
            ui::sync_rotation_sliders(&self.document, &snapshot);
            self.sliders_synced = true;
        }

        let client = dom::canvas_viewport(&self.canvas);
        // canvas-local CSS pixels; the renderer scales by the device pixel ratio
        let viewport = Viewport::from_size(client.width, client.height);
        let mode = self.view_mode.get();
        let camera = self.controls.borrow().orbit.camera(mode);
        self.renderer.draw(
            &viewport,
            dom::device_pixel_ratio(),
            &camera,
            mode,
            &snapshot,
        );
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

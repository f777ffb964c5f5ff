#![cfg(target_arch = "wasm32")]
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use viewer_core::{DualCoordinator, PointerControls, SyncChannel, ViewerConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod shapes;
mod store;
mod ui;

use constants::{CANVAS_ID, DEFAULT_STORE_URL, STORE_URL_ATTR};

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("viewer-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let store_url = canvas
        .get_attribute(STORE_URL_ATTR)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_STORE_URL.to_string());
    log::info!("[store] documents at {store_url}");

    let config = ViewerConfig::default();
    let sync = SyncChannel::new(
        Rc::new(store::HttpDocumentStore::new(store_url)),
        Rc::new(store::WasmSpawner),
        Rc::new(store::JsClock),
    );
    let viewer = Rc::new(DualCoordinator::new(&config, sync));
    viewer.hydrate();

    let controls = Rc::new(RefCell::new(PointerControls::default()));
    let view_mode = Rc::new(Cell::new(config.view_mode));
    ui::apply_view_mode(&document, &view_mode, config.view_mode);
    ui::wire_view_buttons(&document, view_mode.clone());
    ui::wire_rotation_sliders(&document, viewer.clone());

    events::wire_global_keydown(view_mode.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        viewer: viewer.clone(),
        controls: controls.clone(),
        view_mode: view_mode.clone(),
        pointer: Rc::new(RefCell::new(input::PointerState::default())),
    });

    let renderer = render::Renderer::new(&canvas)?;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        document,
        canvas,
        renderer,
        viewer,
        controls,
        view_mode,
        last_status: None,
        sliders_synced: false,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}


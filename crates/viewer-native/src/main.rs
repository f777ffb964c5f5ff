use std::rc::Rc;

use futures::executor::LocalPool;
use glam::Vec2;
use winit::event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::{CursorIcon, Window, WindowBuilder};

use viewer_core::{
    Cursor, DualCoordinator, FileStore, ObjectSlot, PointerControls, Ray, RotationParameter,
    SyncChannel, SystemClock, ViewMode, Viewport,
};

mod config;
mod gpu;
mod scene;

use gpu::{GpuState, Uniforms};

/// Max pointer travel in physical pixels that still counts as a click.
const CLICK_SLOP_PX: f32 = 4.0;
/// Pixels of trackpad scroll per zoom step.
const PIXELS_PER_SCROLL_LINE: f32 = 40.0;
/// Rotation slider change per key press.
const ROTATION_KEY_STEP: f32 = 5.0;

#[derive(Default)]
struct PointerState {
    position: Option<Vec2>,
    down_at: Option<Vec2>,
    button: Option<MouseButton>,
    orbiting: bool,
    shift: bool,
}

struct App {
    viewer: DualCoordinator,
    controls: PointerControls,
    view_mode: ViewMode,
    pointer: PointerState,
    /// Target of keyboard rotation changes.
    selected: ObjectSlot,
    title: String,
}

impl App {
    fn viewport(&self, gpu: &GpuState) -> Viewport {
        Viewport::from_size(gpu.width as f32, gpu.height as f32)
    }

    fn ray_at(&self, gpu: &GpuState, at: Vec2) -> Option<Ray> {
        let camera = self.controls.orbit.camera(self.view_mode);
        Ray::from_screen(&camera, &self.viewport(gpu), at)
    }

    fn cursor_moved(&mut self, gpu: &GpuState, at: Vec2) {
        let delta = self.pointer.position.map(|p| at - p).unwrap_or(Vec2::ZERO);
        self.pointer.position = Some(at);
        if self.viewer.is_loading() {
            return;
        }
        if self.pointer.orbiting {
            let pan = self.pointer.button == Some(MouseButton::Right)
                || (self.pointer.button == Some(MouseButton::Left) && self.pointer.shift);
            if pan {
                self.controls.orbit.pan(self.view_mode, delta);
            } else {
                self.controls.orbit.rotate(self.view_mode, delta);
            }
            return;
        }
        let ray = self.ray_at(gpu, at);
        self.viewer.pointer_moved(ray, &mut self.controls);
    }

    fn pressed(&mut self, gpu: &GpuState, button: MouseButton) {
        let Some(at) = self.pointer.position else {
            return;
        };
        let hit = self.ray_at(gpu, at).and_then(|r| self.viewer.pick(&r));
        if let Some(slot) = hit {
            self.selected = slot;
        }
        self.pointer.down_at = Some(at);
        self.pointer.button = Some(button);
        self.pointer.orbiting = !self.viewer.any_dragging() && hit.is_none();
    }

    fn released(&mut self, gpu: &GpuState, button: MouseButton) {
        let down = self.pointer.down_at.take();
        self.pointer.button = None;
        self.pointer.orbiting = false;
        let (Some(down), Some(at)) = (down, self.pointer.position) else {
            return;
        };
        if button != MouseButton::Left || down.distance(at) > CLICK_SLOP_PX {
            return;
        }
        if self.viewer.is_loading() {
            log::debug!("[input] click ignored while loading");
            return;
        }
        let ray = self.ray_at(gpu, at);
        self.viewer.click(ray, &mut self.controls);
    }

    fn cursor_left(&mut self) {
        self.pointer = PointerState {
            shift: self.pointer.shift,
            ..PointerState::default()
        };
        self.viewer.pointer_left(&mut self.controls);
    }

    fn set_view_mode(&mut self, mode: ViewMode) {
        if self.view_mode != mode {
            log::info!("[view] switched to {mode}");
        }
        self.view_mode = mode;
    }

    fn nudge_rotation(&mut self, steps: f32) {
        if self.viewer.is_loading() {
            return;
        }
        let current = self.viewer.object(self.selected).rotation.value();
        let next = RotationParameter::new(current + steps * ROTATION_KEY_STEP);
        self.viewer.set_rotation(self.selected, next);
    }

    fn key_pressed(&mut self, key: &Key) {
        match key {
            Key::Character(c) => match c.as_str() {
                "2" => self.set_view_mode(ViewMode::TwoD),
                "3" => self.set_view_mode(ViewMode::ThreeD),
                "v" | "V" => self.set_view_mode(self.view_mode.toggled()),
                "[" => self.nudge_rotation(-1.0),
                "]" => self.nudge_rotation(1.0),
                _ => {}
            },
            Key::Named(NamedKey::Tab) => self.selected = self.selected.other(),
            Key::Named(NamedKey::ArrowLeft) => self.nudge_rotation(-1.0),
            Key::Named(NamedKey::ArrowRight) => self.nudge_rotation(1.0),
            _ => {}
        }
    }

    fn uniforms(&self, gpu: &GpuState) -> Uniforms {
        let camera = self.controls.orbit.camera(self.view_mode);
        Uniforms {
            view_proj: camera
                .view_projection(&self.viewport(gpu))
                .to_cols_array_2d(),
            grid: scene::grid_params(),
        }
    }

    fn frame(&mut self, gpu: &mut GpuState) -> Result<(), wgpu::SurfaceError> {
        let snapshot = self.viewer.snapshot();
        let title = scene::window_title(&snapshot, self.view_mode);
        if title != self.title {
            gpu.window.set_title(&title);
            self.title = title;
        }
        gpu.window.set_cursor_icon(cursor_icon(self.controls.cursor));

        let eye = self.controls.orbit.camera(self.view_mode).eye;
        let instances = scene::build_instances(&snapshot, self.view_mode, eye);
        let uniforms = self.uniforms(gpu);
        gpu.render(&uniforms, &instances)
    }
}

fn cursor_icon(cursor: Cursor) -> CursorIcon {
    match cursor {
        Cursor::Auto => CursorIcon::Default,
        Cursor::Grab => CursorIcon::Grab,
        Cursor::Grabbing => CursorIcon::Grabbing,
    }
}

fn scroll_steps(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_SCROLL_LINE,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cfg = config::NativeConfig::from_env();
    log::info!(
        "[store] documents under {} (view {})",
        cfg.store_dir.display(),
        cfg.viewer.view_mode
    );

    // Loads and saves run on this pool, pumped once per frame
    let mut pool = LocalPool::new();
    let sync = SyncChannel::new(
        Rc::new(FileStore::new(cfg.store_dir.clone())),
        Rc::new(pool.spawner()),
        Rc::new(SystemClock),
    );
    let viewer = DualCoordinator::new(&cfg.viewer, sync);
    viewer.hydrate();

    let mut app = App {
        viewer,
        controls: PointerControls::default(),
        view_mode: cfg.viewer.view_mode,
        pointer: PointerState::default(),
        selected: ObjectSlot::First,
        title: String::new(),
    };

    let event_loop = EventLoop::new()?;
    let window: Window = WindowBuilder::new()
        .with_title("Model placement viewer")
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => state.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::ModifiersChanged(m) => app.pointer.shift = m.state().shift_key(),
            WindowEvent::CursorMoved { position, .. } => {
                app.cursor_moved(&state, Vec2::new(position.x as f32, position.y as f32))
            }
            WindowEvent::CursorLeft { .. } => app.cursor_left(),
            WindowEvent::MouseInput {
                state: button_state,
                button,
                ..
            } => match button_state {
                ElementState::Pressed => app.pressed(&state, button),
                ElementState::Released => app.released(&state, button),
            },
            WindowEvent::MouseWheel { delta, .. } => {
                app.controls
                    .orbit
                    .zoom(app.view_mode, scroll_steps(delta));
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                app.key_pressed(&event.logical_key)
            }
            _ => {}
        },
        Event::AboutToWait => {
            pool.run_until_stalled();
            match app.frame(&mut state) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(_) => {}
            }
        }
        _ => {}
    })?;
    Ok(())
}

use glam::Vec2;
use viewer_core::ViewMode;

/// Pointer bookkeeping between events, in client CSS pixels.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    /// Where a button went down, while it is held.
    pub down_at: Option<Vec2>,
    pub button: i16,
    /// The press started off the models, so moves with it held drive the orbit.
    pub orbiting: bool,
}

impl PointerState {
    pub fn press(&mut self, at: Vec2, button: i16, orbiting: bool) {
        self.position = at;
        self.down_at = Some(at);
        self.button = button;
        self.orbiting = orbiting;
    }

    /// Returns the travel since the last known position.
    pub fn move_to(&mut self, at: Vec2) -> Vec2 {
        let delta = at - self.position;
        self.position = at;
        delta
    }

    /// Returns where the press started, if one was in progress.
    pub fn release(&mut self, at: Vec2) -> Option<Vec2> {
        self.position = at;
        self.orbiting = false;
        self.down_at.take()
    }

    pub fn cancel(&mut self) {
        self.down_at = None;
        self.orbiting = false;
    }
}

/// A press and release close enough together to count as a click rather than an orbit drag.
#[inline]
pub fn is_click(down: Vec2, up: Vec2, slop_px: f32) -> bool {
    down.distance(up) <= slop_px
}

/// Right button or shift+left pans; plain left rotates.
#[inline]
pub fn is_pan_gesture(button: i16, shift: bool) -> bool {
    button == 2 || (button == 0 && shift)
}

/// Wheel delta in pixels to zoom steps; scrolling up zooms in.
#[inline]
pub fn wheel_steps(delta_y: f64, px_per_step: f32) -> f32 {
    if px_per_step <= 0.0 {
        return 0.0;
    }
    -(delta_y as f32) / px_per_step
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    SetView(ViewMode),
    ToggleView,
    ToggleHint,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "2" => Some(KeyAction::SetView(ViewMode::TwoD)),
        "3" => Some(KeyAction::SetView(ViewMode::ThreeD)),
        "v" | "V" => Some(KeyAction::ToggleView),
        "h" | "H" => Some(KeyAction::ToggleHint),
        _ => None,
    }
}

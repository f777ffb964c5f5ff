//! Camera description, view modes and the orbit rig.
//!
//! These types avoid platform-specific APIs so both the web and native
//! frontends build their view/projection matrices from the same source.
//! Depth maps to `[0, 1]` (glam `*_rh` conventions), which the projector
//! relies on when unprojecting the near and far planes.

use std::fmt;
use std::str::FromStr;

use glam::{Mat4, Vec2, Vec3};

use crate::constants::{
    CAMERA_ZFAR, CAMERA_ZNEAR, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_PAN_SPEED,
    ORBIT_PITCH_LIMIT, ORBIT_ROTATE_SPEED, ORBIT_ZOOM_STEP, ORTHO_MAX_ZOOM, ORTHO_MIN_ZOOM,
    PERSPECTIVE_EYE, PERSPECTIVE_FOVY_DEGREES, TOP_DOWN_EYE, TOP_DOWN_ZOOM,
};
use crate::drag::{Cursor, InteractionHost};

/// Which camera the viewer presents. Owned by the presentation layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    #[default]
    ThreeD,
    TwoD,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::ThreeD => "3d",
            ViewMode::TwoD => "2d",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::ThreeD => ViewMode::TwoD,
            ViewMode::TwoD => ViewMode::ThreeD,
        }
    }

    /// Orbit rotation and panning are only offered in the perspective view.
    pub fn allows_orbit(self) -> bool {
        matches!(self, ViewMode::ThreeD)
    }

    /// The top-down view draws a helper grid over the ground.
    pub fn shows_grid(self) -> bool {
        matches!(self, ViewMode::TwoD)
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "3d" => Ok(ViewMode::ThreeD),
            "2d" => Ok(ViewMode::TwoD),
            other => Err(format!("unknown view mode '{other}'")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    Perspective { fovy_radians: f32 },
    /// `zoom` is in screen pixels per world unit.
    Orthographic { zoom: f32 },
}

/// Screen rectangle the scene is drawn into, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Convert a screen-space point into normalized device coordinates
    /// (`x` right, `y` up, both in `[-1, 1]` inside the rectangle).
    pub fn to_ndc(&self, screen: Vec2) -> Option<Vec2> {
        if self.is_empty() {
            return None;
        }
        let x = ((screen.x - self.left) / self.width) * 2.0 - 1.0;
        let y = -((screen.y - self.top) / self.height) * 2.0 + 1.0;
        Some(Vec2::new(x, y))
    }

    /// Inverse of [`to_ndc`](Self::to_ndc).
    pub fn to_screen(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            self.left + (ndc.x + 1.0) * 0.5 * self.width,
            self.top + (1.0 - ndc.y) * 0.5 * self.height,
        )
    }
}

/// Simple right-handed camera description.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub projection: Projection,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn perspective(eye: Vec3, target: Vec3, fovy_radians: f32) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            projection: Projection::Perspective { fovy_radians },
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Looking straight down at `target`; screen-up is world `-Z`.
    pub fn top_down(eye: Vec3, target: Vec3, zoom: f32) -> Self {
        Self {
            eye,
            target,
            up: Vec3::NEG_Z,
            projection: Projection::Orthographic { zoom },
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn is_orthographic(&self) -> bool {
        matches!(self.projection, Projection::Orthographic { .. })
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self, viewport: &Viewport) -> Mat4 {
        match self.projection {
            Projection::Perspective { fovy_radians } => {
                Mat4::perspective_rh(fovy_radians, viewport.aspect(), self.znear, self.zfar)
            }
            Projection::Orthographic { zoom } => {
                let half_w = viewport.width.max(1.0) / (2.0 * zoom);
                let half_h = viewport.height.max(1.0) / (2.0 * zoom);
                Mat4::orthographic_rh(-half_w, half_w, -half_h, half_h, self.znear, self.zfar)
            }
        }
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self, viewport: &Viewport) -> Mat4 {
        self.projection_matrix(viewport) * self.view_matrix()
    }

    /// Project a world point into viewport pixels. `None` when it is behind the camera.
    pub fn world_to_screen(&self, viewport: &Viewport, world: Vec3) -> Option<Vec2> {
        let clip = self.view_projection(viewport) * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(viewport.to_screen(Vec2::new(ndc.x, ndc.y)))
    }
}

/// Orbit-style camera controller around a ground target.
///
/// `enabled` is the switch the drag machine flips so that a pointer move is
/// never interpreted by both the camera and a drag at the same time.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitRig {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub ortho_zoom: f32,
    enabled: bool,
}

impl Default for OrbitRig {
    fn default() -> Self {
        let offset = Vec3::from(PERSPECTIVE_EYE);
        let distance = offset.length();
        Self {
            target: Vec3::ZERO,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).asin(),
            distance,
            ortho_zoom: TOP_DOWN_ZOOM,
            enabled: true,
        }
    }
}

impl OrbitRig {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + Vec3::new(cp * sy, sp, cp * cy) * self.distance
    }

    /// Camera for the given view mode; the top-down view ignores yaw/pitch/pan.
    pub fn camera(&self, mode: ViewMode) -> Camera {
        match mode {
            ViewMode::ThreeD => Camera::perspective(
                self.eye(),
                self.target,
                PERSPECTIVE_FOVY_DEGREES.to_radians(),
            ),
            ViewMode::TwoD => {
                Camera::top_down(Vec3::from(TOP_DOWN_EYE), Vec3::ZERO, self.ortho_zoom)
            }
        }
    }

    /// Rotate by a pointer delta in pixels. Ignored while disabled or in the top-down view.
    pub fn rotate(&mut self, mode: ViewMode, delta_px: Vec2) -> bool {
        if !self.enabled || !mode.allows_orbit() {
            return false;
        }
        self.yaw -= delta_px.x * ORBIT_ROTATE_SPEED;
        self.pitch = (self.pitch + delta_px.y * ORBIT_ROTATE_SPEED)
            .clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
        true
    }

    /// Slide the target across the ground plane by a pointer delta in pixels.
    pub fn pan(&mut self, mode: ViewMode, delta_px: Vec2) -> bool {
        if !self.enabled || !mode.allows_orbit() {
            return false;
        }
        let (sy, cy) = self.yaw.sin_cos();
        let right = Vec3::new(cy, 0.0, -sy);
        let forward = Vec3::new(-sy, 0.0, -cy);
        let scale = ORBIT_PAN_SPEED * self.distance / 10.0;
        self.target += (right * -delta_px.x + forward * delta_px.y) * scale;
        true
    }

    /// Zoom by wheel steps (positive zooms in). Allowed in both views.
    pub fn zoom(&mut self, mode: ViewMode, steps: f32) -> bool {
        if !self.enabled {
            return false;
        }
        let factor = ORBIT_ZOOM_STEP.powf(steps);
        match mode {
            ViewMode::ThreeD => {
                self.distance =
                    (self.distance / factor).clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
            }
            ViewMode::TwoD => {
                self.ortho_zoom = (self.ortho_zoom * factor).clamp(ORTHO_MIN_ZOOM, ORTHO_MAX_ZOOM);
            }
        }
        true
    }
}

/// Orbit rig plus cursor: the input-side state a frontend hands to drags.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointerControls {
    pub orbit: OrbitRig,
    pub cursor: Cursor,
}

impl InteractionHost for PointerControls {
    fn set_orbit_enabled(&mut self, enabled: bool) {
        self.orbit.set_enabled(enabled);
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }
}

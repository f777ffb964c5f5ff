//! Tracked models and their slider-facing rotation unit.

use std::cell::RefCell;
use std::f32::consts::TAU;
use std::rc::Weak;

use glam::{Quat, Vec3};

use crate::collision::CollisionRule;
use crate::config::ObjectConfig;
use crate::constants::{ROTATION_PARAM_MAX, ROTATION_PARAM_MIN};
use crate::drag::{Cursor, DragMachine, PositionQuery};
use crate::feedback::{cursor_for, material_tint, Indicator, Rgba};

/// Rotation about the vertical axis as a slider value in `[0, 100]`,
/// where 100 is one full turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct RotationParameter(f32);

impl RotationParameter {
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(ROTATION_PARAM_MIN, ROTATION_PARAM_MAX))
    }

    pub fn value(self) -> f32 {
        self.0
    }

    pub fn radians(self) -> f32 {
        self.0 / ROTATION_PARAM_MAX * TAU
    }

    pub fn quat(self) -> Quat {
        Quat::from_rotation_y(self.radians())
    }
}

impl From<f32> for RotationParameter {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Pending,
    Loaded,
}

/// One draggable model for the lifetime of the view.
pub struct TrackedObject {
    pub id: String,
    pub label: String,
    pub drag: DragMachine,
    pub rotation: RotationParameter,
    pub hovered: bool,
    pub load: LoadStatus,
    pub error: Option<String>,
}

impl TrackedObject {
    pub fn new(config: &ObjectConfig, rule: CollisionRule) -> Self {
        Self {
            id: config.id.clone(),
            label: config.label.clone(),
            drag: DragMachine::new(config.default_position, rule),
            rotation: config.default_rotation,
            hovered: false,
            load: LoadStatus::Pending,
            error: None,
        }
    }

    /// Where the model is drawn: the live position during a drag.
    pub fn rendered_position(&self) -> Vec3 {
        self.drag.live()
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadStatus::Pending
    }

    pub fn indicator(&self) -> Indicator {
        Indicator::derive(self.drag.state(), self.hovered)
    }

    pub fn tint(&self) -> Rgba {
        material_tint(
            self.drag.collision_warning(),
            self.drag.is_dragging(),
            self.hovered,
        )
    }

    pub fn cursor(&self) -> Cursor {
        cursor_for(self.drag.state(), self.hovered)
    }
}

/// Lets one model see the other's live position without owning it.
pub struct PeerPosition(pub Weak<RefCell<TrackedObject>>);

impl PositionQuery for PeerPosition {
    fn current_position(&self) -> Option<Vec3> {
        let peer = self.0.upgrade()?;
        let peer = peer.try_borrow().ok()?;
        Some(peer.rendered_position())
    }
}

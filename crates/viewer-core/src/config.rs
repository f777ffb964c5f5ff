//! Viewer configuration: which models exist and how they interact.

use glam::Vec3;

use crate::camera::ViewMode;
use crate::collision::CollisionRule;
use crate::constants::{
    default_model_position, DEFAULT_MODEL_IDS, DEFAULT_MODEL_LABELS, PICK_SPHERE_RADIUS,
};
use crate::model::RotationParameter;

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectConfig {
    /// Remote storage key.
    pub id: String,
    pub label: String,
    pub default_position: Vec3,
    pub default_rotation: RotationParameter,
}

impl ObjectConfig {
    pub fn new(id: impl Into<String>, label: impl Into<String>, default_position: Vec3) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            default_position,
            default_rotation: RotationParameter::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub objects: [ObjectConfig; 2],
    pub collision: CollisionRule,
    pub pick_radius: f32,
    pub view_mode: ViewMode,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            objects: [0, 1].map(|i| {
                ObjectConfig::new(
                    DEFAULT_MODEL_IDS[i],
                    DEFAULT_MODEL_LABELS[i],
                    default_model_position(i),
                )
            }),
            collision: CollisionRule::default(),
            pick_radius: PICK_SPHERE_RADIUS,
            view_mode: ViewMode::default(),
        }
    }
}

impl ViewerConfig {
    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }
}

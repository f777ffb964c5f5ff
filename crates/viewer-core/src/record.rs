//! Remote document layout: `{ position: {x, y, z}, rotation, updatedAt }`.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StoreError;
use crate::model::RotationParameter;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<Vec3> for StoredPosition {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x as f64,
            y: v.y as f64,
            z: v.z as f64,
        }
    }
}

impl From<StoredPosition> for Vec3 {
    fn from(p: StoredPosition) -> Self {
        Vec3::new(p.x as f32, p.y as f32, p.z as f32)
    }
}

/// Complete snapshot written on every save; never a partial update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedRecord {
    pub position: StoredPosition,
    pub rotation: f64,
    /// Milliseconds since the Unix epoch.
    pub updated_at: u64,
}

impl PersistedRecord {
    pub fn new(position: Vec3, rotation: RotationParameter, updated_at: u64) -> Self {
        Self {
            position: position.into(),
            rotation: rotation.value() as f64,
            updated_at,
        }
    }

    /// Equal position and rotation, ignoring the timestamp.
    pub fn same_content(&self, other: &PersistedRecord) -> bool {
        self.position == other.position && self.rotation == other.rotation
    }
}

/// Lenient read-side view of a stored document.
///
/// Documents written by other clients may lack a field or carry a
/// non-numeric rotation; such fields are reported as absent so hydration
/// keeps the local default for them.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDocument {
    #[serde(default)]
    position: Option<StoredPosition>,
    #[serde(default)]
    rotation: Option<Value>,
    #[serde(default)]
    updated_at: Option<Value>,
}

impl StoredDocument {
    /// `None` when absent or when a coordinate does not fit a finite `f32`.
    pub fn position(&self) -> Option<Vec3> {
        self.position.map(Vec3::from).filter(|p| p.is_finite())
    }

    /// Reject documents whose present fields cannot be applied.
    pub fn validate(&self) -> Result<(), StoreError> {
        match self.position {
            Some(p) if !Vec3::from(p).is_finite() => Err(StoreError::OutOfRange("position")),
            _ => Ok(()),
        }
    }

    pub fn rotation(&self) -> Option<RotationParameter> {
        self.rotation
            .as_ref()
            .and_then(Value::as_f64)
            .map(|r| RotationParameter::new(r as f32))
    }

    pub fn updated_at(&self) -> Option<u64> {
        self.updated_at.as_ref().and_then(Value::as_u64)
    }
}

//! Proximity guard between two models on the ground plane.
//!
//! Each model owns a circular footprint of radius `R`. Two models collide
//! when the planar distance between their origins is strictly less than
//! `2R + margin`; a distance exactly equal to the threshold is allowed.

use glam::{Vec2, Vec3};

use crate::constants::{COLLISION_MARGIN, FOOTPRINT_RADIUS};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionRule {
    pub footprint_radius: f32,
    pub margin: f32,
}

impl Default for CollisionRule {
    fn default() -> Self {
        Self {
            footprint_radius: FOOTPRINT_RADIUS,
            margin: COLLISION_MARGIN,
        }
    }
}

impl CollisionRule {
    pub fn new(footprint_radius: f32, margin: f32) -> Self {
        Self {
            footprint_radius,
            margin,
        }
    }

    /// Smallest planar distance two models may keep between each other.
    #[inline]
    pub fn min_distance(&self) -> f32 {
        self.footprint_radius * 2.0 + self.margin
    }

    #[inline]
    pub fn is_colliding(&self, candidate: Vec3, other: Vec3) -> bool {
        planar_distance(candidate, other) < self.min_distance()
    }

    /// Same as [`is_colliding`](Self::is_colliding) but an absent peer never collides.
    #[inline]
    pub fn check_against(&self, candidate: Vec3, other: Option<Vec3>) -> bool {
        other.is_some_and(|o| self.is_colliding(candidate, o))
    }
}

/// Distance between two points after dropping their height.
#[inline]
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    Vec2::new(a.x, a.z).distance(Vec2::new(b.x, b.z))
}

/// Collision check with the default footprint radius and margin.
#[inline]
pub fn is_colliding(candidate: Vec3, other: Vec3) -> bool {
    CollisionRule::default().is_colliding(candidate, other)
}

//! Pointer-to-ground projection.
//!
//! A pointer position is turned into a world-space ray by unprojecting the
//! near and far planes through the inverse view-projection matrix. This is
//! the same for perspective and orthographic cameras: only the origin and
//! direction of the resulting ray differ.

use glam::{Vec2, Vec3};

use crate::camera::{Camera, Viewport};
use crate::constants::RAY_PLANE_EPSILON;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    /// Compute a world-space ray through a point given in normalized device coordinates.
    pub fn from_ndc(camera: &Camera, viewport: &Viewport, ndc: Vec2) -> Option<Self> {
        let inv = camera.view_projection(viewport).inverse();
        let near = inv.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        if !near.is_finite() || !far.is_finite() {
            return None;
        }
        Ray::new(near, far - near)
    }

    /// Compute a world-space ray from a screen-space pointer position.
    pub fn from_screen(camera: &Camera, viewport: &Viewport, screen: Vec2) -> Option<Self> {
        let ndc = viewport.to_ndc(screen)?;
        Ray::from_ndc(camera, viewport, ndc)
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Intersection with the horizontal plane `y = 0`.
    ///
    /// `None` when the ray runs parallel to the plane or only crosses it
    /// behind its origin.
    pub fn intersect_ground(&self) -> Option<Vec3> {
        let denom = self.direction.y;
        if denom.abs() < RAY_PLANE_EPSILON {
            return None;
        }
        let t = -self.origin.y / denom;
        if t < 0.0 {
            return None;
        }
        let hit = self.at(t);
        Some(Vec3::new(hit.x, 0.0, hit.z))
    }

    /// Distance along the ray to the first forward hit with a sphere.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.dot(oc) - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let root = disc.sqrt();
        let near = -b - root;
        if near >= 0.0 {
            return Some(near);
        }
        // origin inside the sphere
        let far = -b + root;
        (far >= 0.0).then_some(far)
    }
}

/// Where on the ground plane the pointer currently points, if anywhere.
pub fn project_to_ground(camera: &Camera, viewport: &Viewport, screen: Vec2) -> Option<Vec3> {
    Ray::from_screen(camera, viewport, screen)?.intersect_ground()
}

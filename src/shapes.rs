// World-space outlines sampled for the Canvas2D renderer.

use glam::Vec3;

/// Points on a horizontal circle, counter-clockwise seen from above.
pub fn circle_points(center: Vec3, radius: f32, height: f32, segments: usize) -> Vec<Vec3> {
    let n = segments.max(3);
    (0..n)
        .map(|i| {
            let a = i as f32 / n as f32 * std::f32::consts::TAU;
            Vec3::new(
                center.x + radius * a.cos(),
                height,
                center.z - radius * a.sin(),
            )
        })
        .collect()
}

/// Corners of the square ground slab.
pub fn ground_corners(half_extent: f32, height: f32) -> [Vec3; 4] {
    [
        Vec3::new(-half_extent, height, -half_extent),
        Vec3::new(half_extent, height, -half_extent),
        Vec3::new(half_extent, height, half_extent),
        Vec3::new(-half_extent, height, half_extent),
    ]
}

/// Grid line segments covering the slab, `divisions` cells per side.
pub fn grid_lines(half_extent: f32, height: f32, divisions: u32) -> Vec<(Vec3, Vec3)> {
    let divisions = divisions.max(1);
    let step = half_extent * 2.0 / divisions as f32;
    let mut lines = Vec::with_capacity(2 * (divisions as usize + 1));
    for i in 0..=divisions {
        let v = -half_extent + step * i as f32;
        lines.push((
            Vec3::new(v, height, -half_extent),
            Vec3::new(v, height, half_extent),
        ));
        lines.push((
            Vec3::new(-half_extent, height, v),
            Vec3::new(half_extent, height, v),
        ));
    }
    lines
}

/// Tip of the heading marker for a model turned `radians` about +Y.
pub fn heading_tip(center: Vec3, radians: f32, length: f32) -> Vec3 {
    let (s, c) = radians.sin_cos();
    Vec3::new(center.x + s * length, center.y, center.z + c * length)
}

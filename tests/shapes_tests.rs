// Host-side tests for the world-space outlines the Canvas2D renderer draws.

#![allow(dead_code)]
mod shapes {
    include!("../src/shapes.rs");
}

use glam::Vec3;
use shapes::*;

const EPS: f32 = 1e-5;

#[test]
fn circle_points_lie_on_the_circle_at_height() {
    let center = Vec3::new(-3.0, 0.0, 1.0);
    let pts = circle_points(center, 2.0, -0.45, 48);
    assert_eq!(pts.len(), 48);
    for p in &pts {
        assert!((p.y + 0.45).abs() < EPS);
        let planar = ((p.x - center.x).powi(2) + (p.z - center.z).powi(2)).sqrt();
        assert!((planar - 2.0).abs() < 1e-4);
    }
}

#[test]
fn circle_is_counter_clockwise_from_above() {
    let pts = circle_points(Vec3::ZERO, 1.0, 0.0, 4);
    // +X, then -Z (away from a viewer looking down with -Z up on screen)
    assert!((pts[0] - Vec3::X).length() < EPS);
    assert!((pts[1] - Vec3::NEG_Z).length() < EPS);
}

#[test]
fn circle_has_at_least_three_points() {
    assert_eq!(circle_points(Vec3::ZERO, 1.0, 0.0, 0).len(), 3);
}

#[test]
fn ground_corners_span_the_slab() {
    let c = ground_corners(5.0, -1.0);
    assert_eq!(c[0], Vec3::new(-5.0, -1.0, -5.0));
    assert_eq!(c[2], Vec3::new(5.0, -1.0, 5.0));
}

#[test]
fn grid_has_one_line_per_division_edge_each_way() {
    let lines = grid_lines(5.0, -1.0, 20);
    assert_eq!(lines.len(), 42);
    assert!(lines.iter().all(|(a, b)| a.y == -1.0 && b.y == -1.0));
    let (a, b) = lines[lines.len() - 1];
    assert!((a.z - 5.0).abs() < EPS && (b.z - 5.0).abs() < EPS);
}

#[test]
fn heading_tip_follows_rotation_about_y() {
    let center = Vec3::new(3.0, 0.0, 0.0);
    let tip = heading_tip(center, 0.0, 1.4);
    assert!((tip - Vec3::new(3.0, 0.0, 1.4)).length() < EPS);
    let half = heading_tip(center, std::f32::consts::PI, 1.4);
    assert!((half - Vec3::new(3.0, 0.0, -1.4)).length() < 1e-4);
    let quarter = heading_tip(center, std::f32::consts::FRAC_PI_2, 1.0);
    assert!((quarter - Vec3::new(4.0, 0.0, 0.0)).length() < 1e-4);
}

// Host-side tests for the proximity guard.

use glam::Vec3;
use viewer_core::{is_colliding, planar_distance, CollisionRule};

#[test]
fn threshold_is_twice_radius_plus_margin() {
    let rule = CollisionRule::default();
    assert!((rule.min_distance() - 4.2).abs() < 1e-6);
}

#[test]
fn exactly_at_threshold_is_not_colliding() {
    let a = Vec3::ZERO;
    let b = Vec3::new(4.2, 0.0, 0.0);
    assert!(!is_colliding(a, b));
    assert!(!is_colliding(b, a));
}

#[test]
fn just_inside_threshold_collides() {
    let a = Vec3::ZERO;
    let b = Vec3::new(4.19, 0.0, 0.0);
    assert!(is_colliding(a, b));
}

#[test]
fn distance_is_measured_on_the_ground_plane() {
    let raised = Vec3::new(0.0, 5.0, 0.0);
    assert!(is_colliding(raised, Vec3::new(1.0, 0.0, 0.0)));
    assert!(!is_colliding(raised, Vec3::new(4.3, 0.0, 0.0)));
    assert!((planar_distance(Vec3::new(3.0, 9.0, 0.0), Vec3::new(0.0, -2.0, 4.0)) - 5.0).abs() < 1e-6);
}

#[test]
fn collision_is_symmetric() {
    let samples = [-6.0f32, -4.2, -3.0, -1.0, 0.0, 0.5, 2.1, 4.2, 7.3];
    for &ax in &samples {
        for &az in &samples {
            for &bx in &samples {
                let a = Vec3::new(ax, 0.0, az);
                let b = Vec3::new(bx, 0.0, -az * 0.5);
                assert_eq!(
                    is_colliding(a, b),
                    is_colliding(b, a),
                    "asymmetric result for {a:?} / {b:?}"
                );
            }
        }
    }
}

#[test]
fn absent_peer_never_collides() {
    let rule = CollisionRule::default();
    assert!(!rule.check_against(Vec3::ZERO, None));
    assert!(rule.check_against(Vec3::ZERO, Some(Vec3::new(1.0, 0.0, 1.0))));
}

#[test]
fn scenario_distances_from_right_model() {
    let b = Vec3::new(3.0, 0.0, 0.0);
    assert!(is_colliding(Vec3::new(-0.2, 0.0, 0.0), b)); // 3.2 apart
    assert!(!is_colliding(Vec3::new(-4.3, 0.0, 0.0), b)); // 7.3 apart
    assert!(!is_colliding(Vec3::new(-3.0, 0.0, 0.0), b)); // defaults are 6 apart
}

#[test]
fn custom_rule_uses_its_own_radius() {
    let rule = CollisionRule::new(0.5, 0.0);
    assert!(!rule.is_colliding(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)));
    assert!(rule.is_colliding(Vec3::ZERO, Vec3::new(0.99, 0.0, 0.0)));
}

// Host-side tests for pointer-to-ground projection in both camera modes.

use glam::{Vec2, Vec3};
use viewer_core::{project_to_ground, Camera, OrbitRig, Ray, ViewMode, Viewport};

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-3
}

#[test]
fn viewport_maps_corners_to_ndc() {
    let vp = Viewport::new(10.0, 20.0, 200.0, 100.0);
    assert_eq!(vp.to_ndc(Vec2::new(10.0, 20.0)), Some(Vec2::new(-1.0, 1.0)));
    assert_eq!(vp.to_ndc(Vec2::new(210.0, 120.0)), Some(Vec2::new(1.0, -1.0)));
    assert_eq!(vp.to_ndc(Vec2::new(110.0, 70.0)), Some(Vec2::new(0.0, 0.0)));
    assert_eq!(vp.to_screen(Vec2::new(0.0, 0.0)), Vec2::new(110.0, 70.0));
}

#[test]
fn empty_viewport_has_no_ndc() {
    let vp = Viewport::from_size(0.0, 300.0);
    assert!(vp.to_ndc(Vec2::new(0.0, 0.0)).is_none());
}

#[test]
fn top_down_camera_maps_pixels_to_ground_units() {
    let camera = OrbitRig::default().camera(ViewMode::TwoD);
    let vp = Viewport::from_size(800.0, 600.0);

    let center = project_to_ground(&camera, &vp, Vec2::new(400.0, 300.0)).unwrap();
    assert!(approx(center, Vec3::ZERO), "center hit {center:?}");

    // zoom is 100 px per unit; screen right is +X, screen up is -Z
    let right = project_to_ground(&camera, &vp, Vec2::new(500.0, 300.0)).unwrap();
    assert!(approx(right, Vec3::new(1.0, 0.0, 0.0)), "right hit {right:?}");
    let up = project_to_ground(&camera, &vp, Vec2::new(400.0, 200.0)).unwrap();
    assert!(approx(up, Vec3::new(0.0, 0.0, -1.0)), "up hit {up:?}");
}

#[test]
fn top_down_rays_are_parallel() {
    let camera = OrbitRig::default().camera(ViewMode::TwoD);
    let vp = Viewport::from_size(800.0, 600.0);
    let a = Ray::from_screen(&camera, &vp, Vec2::new(10.0, 10.0)).unwrap();
    let b = Ray::from_screen(&camera, &vp, Vec2::new(700.0, 500.0)).unwrap();
    assert!((a.direction - b.direction).length() < 1e-4);
    assert!((a.direction - Vec3::NEG_Y).length() < 1e-4);
}

#[test]
fn perspective_center_ray_hits_orbit_target() {
    let rig = OrbitRig::default();
    let camera = rig.camera(ViewMode::ThreeD);
    assert!(approx(camera.eye, Vec3::new(0.0, 4.0, 12.0)));
    let vp = Viewport::from_size(1280.0, 720.0);
    let hit = project_to_ground(&camera, &vp, Vec2::new(640.0, 360.0)).unwrap();
    assert!(approx(hit, Vec3::ZERO), "center hit {hit:?}");
}

#[test]
fn perspective_lower_screen_lands_closer_to_camera() {
    let camera = OrbitRig::default().camera(ViewMode::ThreeD);
    let vp = Viewport::from_size(1280.0, 720.0);
    let hit = project_to_ground(&camera, &vp, Vec2::new(640.0, 600.0)).unwrap();
    assert!(hit.z > 0.0 && hit.z < 12.0, "hit {hit:?}");
    assert_eq!(hit.y, 0.0);
}

#[test]
fn ray_parallel_to_ground_has_no_hit() {
    let camera = Camera::perspective(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, 1.0);
    let vp = Viewport::from_size(400.0, 400.0);
    assert!(project_to_ground(&camera, &vp, Vec2::new(200.0, 200.0)).is_none());
}

#[test]
fn ray_pointing_above_horizon_has_no_hit() {
    let camera = OrbitRig::default().camera(ViewMode::ThreeD);
    let vp = Viewport::from_size(1280.0, 720.0);
    assert!(project_to_ground(&camera, &vp, Vec2::new(640.0, 0.0)).is_none());
}

#[test]
fn world_to_screen_inverts_projection() {
    let camera = OrbitRig::default().camera(ViewMode::ThreeD);
    let vp = Viewport::from_size(1280.0, 720.0);
    let world = Vec3::new(-3.0, 0.0, 1.0);
    let screen = camera.world_to_screen(&vp, world).unwrap();
    let back = project_to_ground(&camera, &vp, screen).unwrap();
    assert!(approx(back, world), "round trip {back:?}");
}

#[test]
fn ray_sphere_hits_front_and_from_inside() {
    let ray = Ray::new(Vec3::ZERO, Vec3::Z).unwrap();
    let t = ray.intersect_sphere(Vec3::new(0.0, 0.0, 5.0), 2.0).unwrap();
    assert!((t - 3.0).abs() < 1e-5);
    let inside = ray.intersect_sphere(Vec3::ZERO, 1.5).unwrap();
    assert!((inside - 1.5).abs() < 1e-5);
    assert!(ray.intersect_sphere(Vec3::new(0.0, 0.0, -5.0), 1.0).is_none());
    assert!(ray.intersect_sphere(Vec3::new(5.0, 0.0, 5.0), 1.0).is_none());
}

#[test]
fn zero_direction_is_not_a_ray() {
    assert!(Ray::new(Vec3::ONE, Vec3::ZERO).is_none());
}

// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;
use viewer_core::ViewMode;

#[test]
fn press_then_release_returns_press_point() {
    let mut p = PointerState::default();
    p.press(Vec2::new(10.0, 20.0), 0, true);
    assert!(p.orbiting);
    assert_eq!(p.release(Vec2::new(12.0, 21.0)), Some(Vec2::new(10.0, 20.0)));
    assert!(!p.orbiting);
    assert_eq!(p.release(Vec2::ZERO), None);
}

#[test]
fn move_reports_delta_since_last_position() {
    let mut p = PointerState::default();
    p.move_to(Vec2::new(100.0, 100.0));
    assert_eq!(p.move_to(Vec2::new(103.0, 96.0)), Vec2::new(3.0, -4.0));
    assert_eq!(p.position, Vec2::new(103.0, 96.0));
}

#[test]
fn cancel_drops_the_press() {
    let mut p = PointerState::default();
    p.press(Vec2::ONE, 2, true);
    p.cancel();
    assert_eq!(p.down_at, None);
    assert!(!p.orbiting);
}

#[test]
fn small_travel_is_a_click() {
    let down = Vec2::new(50.0, 50.0);
    assert!(is_click(down, down, 4.0));
    assert!(is_click(down, Vec2::new(53.0, 50.0), 4.0));
    assert!(!is_click(down, Vec2::new(55.0, 50.0), 4.0));
}

#[test]
fn pan_gesture_is_right_button_or_shift_left() {
    assert!(is_pan_gesture(2, false));
    assert!(is_pan_gesture(0, true));
    assert!(!is_pan_gesture(0, false));
    assert!(!is_pan_gesture(1, true));
}

#[test]
fn wheel_up_zooms_in() {
    assert!(wheel_steps(-100.0, 100.0) > 0.0);
    assert!(wheel_steps(100.0, 100.0) < 0.0);
    assert_eq!(wheel_steps(250.0, 100.0), -2.5);
    assert_eq!(wheel_steps(100.0, 0.0), 0.0);
}

#[test]
fn view_keys_map_to_actions() {
    assert_eq!(key_action("2"), Some(KeyAction::SetView(ViewMode::TwoD)));
    assert_eq!(key_action("3"), Some(KeyAction::SetView(ViewMode::ThreeD)));
    assert_eq!(key_action("v"), Some(KeyAction::ToggleView));
    assert_eq!(key_action("V"), Some(KeyAction::ToggleView));
    assert_eq!(key_action("h"), Some(KeyAction::ToggleHint));
    assert_eq!(key_action("x"), None);
    assert_eq!(key_action("Enter"), None);
}

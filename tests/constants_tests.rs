// Host-side tests for web presentation constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn ground_sits_below_the_drag_plane() {
    // models and drags live at y = 0; the drawn slab is beneath them
    assert!(GROUND_Y < 0.0);
    assert!(MODEL_BODY_RADIUS < viewer_core::PICK_SPHERE_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pointer_tunables_are_positive() {
    assert!(CLICK_SLOP_PX > 0.0);
    assert!(WHEEL_PX_PER_STEP > 0.0);
    assert!(CIRCLE_SEGMENTS >= 3);
}

#[test]
fn element_ids_are_distinct() {
    let mut ids = vec![
        CANVAS_ID,
        STATUS_OVERLAY_ID,
        STATUS_TEXT_ID,
        MODE_LABEL_ID,
        VIEW_3D_BUTTON_ID,
        VIEW_2D_BUTTON_ID,
    ];
    ids.extend(ROTATION_SLIDER_IDS);
    let n = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), n);
}

#[test]
fn store_url_default_is_relative_api_root() {
    assert_eq!(STORE_URL_ATTR, "data-store-url");
    assert_eq!(DEFAULT_STORE_URL, "/api");
}

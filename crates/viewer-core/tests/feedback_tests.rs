// Host-side tests for cosmetic feedback derived from drag state.

use viewer_core::{cursor_for, material_tint, Cursor, DragState, Indicator, Rgba};

#[test]
fn indicator_follows_state_then_hover() {
    assert_eq!(Indicator::derive(DragState::Idle, false), Indicator::None);
    assert_eq!(Indicator::derive(DragState::Idle, true), Indicator::Hover);
    assert_eq!(Indicator::derive(DragState::Dragging, true), Indicator::DraggingOk);
    assert_eq!(
        Indicator::derive(DragState::DragRejected, false),
        Indicator::DraggingWarning
    );
}

#[test]
fn drag_indicators_draw_three_rings() {
    assert!(Indicator::None.rings().is_empty());
    let hover = Indicator::Hover.rings();
    assert_eq!(hover.len(), 1);
    assert_eq!(hover[0].inner_radius, 1.4);
    assert_eq!(hover[0].outer_radius, 1.6);

    let ok = Indicator::DraggingOk.rings();
    let warn = Indicator::DraggingWarning.rings();
    assert_eq!(ok.len(), 3);
    assert_eq!(warn.len(), 3);
    // the footprint disc matches the collision radius
    assert_eq!(ok[0].outer_radius, viewer_core::FOOTPRINT_RADIUS);
    assert!(warn[1].color.r > warn[1].color.g);
    assert!(ok[1].color.g > ok[1].color.r);
}

#[test]
fn tint_priority_is_warning_then_drag_then_hover() {
    assert_eq!(material_tint(true, true, true), Rgba::from_hex(0xff4444, 0.8));
    assert_eq!(material_tint(false, true, true), Rgba::from_hex(0x4caf50, 0.9));
    assert_eq!(material_tint(false, false, true), Rgba::from_hex(0x2196f3, 0.9));
    assert_eq!(material_tint(false, false, false), Rgba::WHITE);
}

#[test]
fn cursor_reflects_interaction() {
    assert_eq!(cursor_for(DragState::Idle, false), Cursor::Auto);
    assert_eq!(cursor_for(DragState::Idle, true), Cursor::Grab);
    assert_eq!(cursor_for(DragState::DragRejected, false), Cursor::Grabbing);
    assert_eq!(Cursor::Grabbing.css(), "grabbing");
}

#[test]
fn rgba_css_uses_byte_channels() {
    assert_eq!(Rgba::from_hex(0x4f7df3, 0.6).css(), "rgba(79, 125, 243, 0.6)");
}

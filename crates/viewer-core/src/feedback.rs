//! Cosmetic feedback derived from drag/hover state.
//!
//! Nothing here feeds back into the drag machine; frontends read these
//! values to pick cursor, tint and the rings drawn under a model.

use smallvec::{smallvec, SmallVec};

use crate::drag::{Cursor, DragState};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// `0xRRGGBB` plus opacity.
    pub fn from_hex(rgb: u32, alpha: f32) -> Self {
        let channel = |shift: u32| ((rgb >> shift) & 0xff) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0), alpha)
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn css(self) -> String {
        let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "rgba({}, {}, {}, {})",
            to_u8(self.r),
            to_u8(self.g),
            to_u8(self.b),
            self.a
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Indicator {
    #[default]
    None,
    Hover,
    DraggingOk,
    DraggingWarning,
}

/// Flat annulus drawn on the ground under a model, in model-local units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingSpec {
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Offset below the model origin.
    pub depth: f32,
    pub color: Rgba,
}

impl RingSpec {
    const fn disc(radius: f32, depth: f32, color: Rgba) -> Self {
        Self {
            inner_radius: 0.0,
            outer_radius: radius,
            depth,
            color,
        }
    }
}

impl Indicator {
    pub fn derive(state: DragState, hovered: bool) -> Self {
        match state {
            DragState::DragRejected => Indicator::DraggingWarning,
            DragState::Dragging => Indicator::DraggingOk,
            DragState::Idle if hovered => Indicator::Hover,
            DragState::Idle => Indicator::None,
        }
    }

    /// Rings to draw, back to front.
    pub fn rings(self) -> SmallVec<[RingSpec; 3]> {
        let (soft, solid) = match self {
            Indicator::None => return SmallVec::new(),
            Indicator::Hover => {
                return smallvec![RingSpec {
                    inner_radius: 1.4,
                    outer_radius: 1.6,
                    depth: 0.45,
                    color: Rgba::from_hex(0x4f7df3, 0.6),
                }];
            }
            Indicator::DraggingOk => (0x44ff44, 0x00ff00),
            Indicator::DraggingWarning => (0xff4444, 0xff0000),
        };
        smallvec![
            RingSpec::disc(2.0, 0.45, Rgba::from_hex(soft, 0.3)),
            RingSpec {
                inner_radius: 1.6,
                outer_radius: 2.0,
                depth: 0.44,
                color: Rgba::from_hex(soft, 0.8),
            },
            RingSpec::disc(0.3, 0.4, Rgba::from_hex(solid, 0.7)),
        ]
    }
}

/// Model tint; a collision warning wins over dragging, which wins over hover.
pub fn material_tint(collision_warning: bool, dragging: bool, hovered: bool) -> Rgba {
    if collision_warning {
        Rgba::from_hex(0xff4444, 0.8)
    } else if dragging {
        Rgba::from_hex(0x4caf50, 0.9)
    } else if hovered {
        Rgba::from_hex(0x2196f3, 0.9)
    } else {
        Rgba::WHITE
    }
}

pub fn cursor_for(state: DragState, hovered: bool) -> Cursor {
    if state.is_dragging() {
        Cursor::Grabbing
    } else if hovered {
        Cursor::Grab
    } else {
        Cursor::Auto
    }
}

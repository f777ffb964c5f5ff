//! Flat instanced geometry for the native renderer.
//!
//! Everything in the scene lies parallel to the ground, so a single quad
//! pipeline covers the slab, indicator rings, model bodies and heading dots.

use glam::Vec3;
use viewer_core::{
    ObjectView, Rgba, ViewMode, ViewerSnapshot, GRID_DIVISIONS, GROUND_HALF_EXTENT,
};

pub const GROUND_Y: f32 = -1.0;
pub const MODEL_BODY_RADIUS: f32 = 1.0;
pub const HEADING_LENGTH: f32 = 1.4;
pub const HEADING_DOT_RADIUS: f32 = 0.2;
pub const GRID_LINE_HALF_WIDTH: f32 = 0.02;
pub const MAX_INSTANCES: usize = 32;

pub const KIND_DISC: f32 = 0.0;
pub const KIND_SLAB: f32 = 1.0;
pub const KIND_GRID_SLAB: f32 = 2.0;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub center: [f32; 3],
    pub outer: f32,
    pub color: [f32; 4],
    pub inner: f32,
    pub kind: f32,
}

impl InstanceData {
    fn disc(center: Vec3, inner: f32, outer: f32, color: Rgba) -> Self {
        Self {
            center: center.to_array(),
            outer,
            color: color.to_array(),
            inner,
            kind: KIND_DISC,
        }
    }
}

/// Instances back to front. The ground slab comes first, then each model
/// (farthest from `eye` first) with its rings, body and heading dot.
pub fn build_instances(
    snapshot: &ViewerSnapshot,
    mode: ViewMode,
    eye: Vec3,
) -> Vec<InstanceData> {
    let mut out = Vec::with_capacity(MAX_INSTANCES);
    out.push(InstanceData {
        center: [0.0, GROUND_Y, 0.0],
        outer: GROUND_HALF_EXTENT,
        color: Rgba::from_hex(0x333333, 0.3).to_array(),
        inner: 0.0,
        kind: if mode.shows_grid() {
            KIND_GRID_SLAB
        } else {
            KIND_SLAB
        },
    });

    let mut order: Vec<&ObjectView> = snapshot.objects.iter().collect();
    order.sort_by(|a, b| {
        b.position
            .distance_squared(eye)
            .total_cmp(&a.position.distance_squared(eye))
    });
    for object in order {
        let center = object.position;
        for ring in object.indicator.rings() {
            out.push(InstanceData::disc(
                center - Vec3::Y * ring.depth,
                ring.inner_radius,
                ring.outer_radius,
                ring.color,
            ));
        }
        out.push(InstanceData::disc(center, 0.0, MODEL_BODY_RADIUS, object.tint));
        let (s, c) = object.rotation.radians().sin_cos();
        let tip = center + Vec3::new(s, 0.0, c) * HEADING_LENGTH;
        out.push(InstanceData::disc(tip, 0.0, HEADING_DOT_RADIUS, Rgba::WHITE));
    }
    out.truncate(MAX_INSTANCES);
    out
}

/// Grid cell size and line half-width, in world units.
pub fn grid_params() -> [f32; 4] {
    [
        GROUND_HALF_EXTENT * 2.0 / GRID_DIVISIONS as f32,
        GRID_LINE_HALF_WIDTH,
        0.0,
        0.0,
    ]
}

/// Window title: labels plus loading/error status.
pub fn window_title(snapshot: &ViewerSnapshot, mode: ViewMode) -> String {
    let base = format!(
        "{} / {} [{}]",
        snapshot.objects[0].label,
        snapshot.objects[1].label,
        mode.as_str()
    );
    match snapshot.status_message() {
        Some(status) => format!("{base} - {status}"),
        None => base,
    }
}

pub const SCENE_WGSL: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    grid: vec4<f32>,
};
@group(0) @binding(0) var<uniform> u: Uniforms;

struct VsOut {
    @builtin(position) clip: vec4<f32>,
    @location(0) local: vec2<f32>,
    @location(1) color: vec4<f32>,
    @location(2) inner_ratio: f32,
    @location(3) kind: f32,
    @location(4) world_xz: vec2<f32>,
};

@vertex
fn vs_main(
    @location(0) q: vec2<f32>,
    @location(1) center: vec3<f32>,
    @location(2) outer: f32,
    @location(3) color: vec4<f32>,
    @location(4) inner: f32,
    @location(5) kind: f32,
) -> VsOut {
    var out: VsOut;
    let world = center + vec3<f32>(q.x * outer, 0.0, q.y * outer);
    out.clip = u.view_proj * vec4<f32>(world, 1.0);
    out.local = q;
    out.color = color;
    out.inner_ratio = inner / max(outer, 1e-6);
    out.kind = kind;
    out.world_xz = world.xz;
    return out;
}

@fragment
fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
    if (in.kind < 0.5) {
        let r = length(in.local);
        if (r > 1.0 || r < in.inner_ratio) {
            discard;
        }
        return in.color;
    }
    if (in.kind > 1.5) {
        let cell = u.grid.x;
        let g = abs(fract(in.world_xz / cell + 0.5) - 0.5) * cell;
        if (min(g.x, g.y) < u.grid.y) {
            return vec4<f32>(0.27, 0.27, 0.27, 1.0);
        }
    }
    return in.color;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::LocalPool;
    use std::rc::Rc;
    use viewer_core::{
        DualCoordinator, FixedClock, MemoryStore, PointerControls, SyncChannel, ViewerConfig,
    };

    const EYE_3D: Vec3 = Vec3::new(0.0, 4.0, 12.0);

    fn viewer() -> (LocalPool, DualCoordinator) {
        let pool = LocalPool::new();
        let sync = SyncChannel::new(
            Rc::new(MemoryStore::new()),
            Rc::new(pool.spawner()),
            Rc::new(FixedClock::new(0)),
        );
        (pool, DualCoordinator::new(&ViewerConfig::default(), sync))
    }

    #[test]
    fn idle_scene_is_slab_bodies_and_heading_dots() {
        let (_pool, viewer) = viewer();
        let instances = build_instances(&viewer.snapshot(), ViewMode::ThreeD, EYE_3D);
        assert_eq!(instances.len(), 5);
        assert_eq!(instances[0].kind, KIND_SLAB);
        assert!(instances[1..].iter().all(|i| i.kind == KIND_DISC));
    }

    #[test]
    fn top_down_slab_carries_the_grid() {
        let (_pool, viewer) = viewer();
        let instances = build_instances(&viewer.snapshot(), ViewMode::TwoD, Vec3::Y * 10.0);
        assert_eq!(instances[0].kind, KIND_GRID_SLAB);
    }

    #[test]
    fn dragging_adds_three_rings_below_the_model() {
        let (mut pool, viewer) = viewer();
        viewer.hydrate();
        pool.run_until_stalled();
        let mut controls = PointerControls::default();
        viewer.toggle_drag(viewer_core::ObjectSlot::First, &mut controls);

        let instances = build_instances(&viewer.snapshot(), ViewMode::ThreeD, EYE_3D);
        assert_eq!(instances.len(), 8);
        let rings: Vec<_> = instances
            .iter()
            .filter(|i| i.center[1] < 0.0 && i.kind == KIND_DISC)
            .collect();
        assert_eq!(rings.len(), 3);
        assert!(rings.iter().all(|r| r.center[0] == -3.0));
    }

    #[test]
    fn title_reports_loading_until_hydrated() {
        let (mut pool, viewer) = viewer();
        viewer.hydrate();
        let title = window_title(&viewer.snapshot(), ViewMode::ThreeD);
        assert!(title.ends_with("Loading models..."));
        pool.run_until_stalled();
        assert_eq!(
            window_title(&viewer.snapshot(), ViewMode::ThreeD),
            "Bust of Rhetorician / Lion Crushing Serpent [3d]"
        );
    }
}

//! Two draggable models sharing one ground plane.
//!
//! The coordinator owns both models, hands each drag machine a read-only
//! view of the other's live position, routes pointer input, triggers
//! replication on commits and rotation changes, and exposes a combined read
//! model to the presentation layer.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use glam::{Vec2, Vec3};
use log::{info, warn};

use crate::camera::{Camera, Viewport};
use crate::config::ViewerConfig;
use crate::drag::{Cursor, DragOutcome, DragState, InteractionHost};
use crate::feedback::{Indicator, Rgba};
use crate::model::{PeerPosition, RotationParameter, TrackedObject};
use crate::projection::Ray;
use crate::sync::SyncChannel;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectSlot {
    First,
    Second,
}

impl ObjectSlot {
    pub const ALL: [ObjectSlot; 2] = [ObjectSlot::First, ObjectSlot::Second];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            ObjectSlot::First => 0,
            ObjectSlot::Second => 1,
        }
    }

    #[inline]
    pub fn other(self) -> ObjectSlot {
        match self {
            ObjectSlot::First => ObjectSlot::Second,
            ObjectSlot::Second => ObjectSlot::First,
        }
    }
}

/// Presentation-facing snapshot of one model.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectView {
    pub slot: ObjectSlot,
    pub id: String,
    pub label: String,
    pub position: Vec3,
    pub committed_position: Vec3,
    pub rotation: RotationParameter,
    pub drag_state: DragState,
    pub collision_warning: bool,
    pub hovered: bool,
    pub is_loading: bool,
    pub error: Option<String>,
    pub indicator: Indicator,
    pub tint: Rgba,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewerSnapshot {
    pub objects: [ObjectView; 2],
    /// True until both loads have completed.
    pub is_loading: bool,
    /// The first model error, if any.
    pub error: Option<String>,
}

impl ViewerSnapshot {
    /// Overlay text: loading wins over errors, `None` once everything is fine.
    pub fn status_message(&self) -> Option<String> {
        if self.is_loading {
            Some("Loading models...".to_string())
        } else {
            self.error
                .as_ref()
                .map(|e| format!("Error loading models: {e}"))
        }
    }
}

pub struct DualCoordinator {
    objects: [Rc<RefCell<TrackedObject>>; 2],
    sync: SyncChannel,
    pick_radius: f32,
}

impl DualCoordinator {
    pub fn new(config: &ViewerConfig, sync: SyncChannel) -> Self {
        let objects = [0, 1].map(|i| {
            Rc::new(RefCell::new(TrackedObject::new(
                &config.objects[i],
                config.collision,
            )))
        });
        for slot in ObjectSlot::ALL {
            let peer = PeerPosition(Rc::downgrade(&objects[slot.other().index()]));
            objects[slot.index()]
                .borrow_mut()
                .drag
                .attach_peer(Rc::new(peer));
        }
        Self {
            objects,
            sync,
            pick_radius: config.pick_radius,
        }
    }

    /// Kick off the one-time load for both models.
    pub fn hydrate(&self) {
        for object in &self.objects {
            self.sync.hydrate(object);
        }
    }

    /// True until both models have finished loading.
    pub fn is_loading(&self) -> bool {
        self.objects.iter().any(|o| o.borrow().is_loading())
    }

    pub fn any_dragging(&self) -> bool {
        self.objects.iter().any(|o| o.borrow().drag.is_dragging())
    }

    pub fn object(&self, slot: ObjectSlot) -> Ref<'_, TrackedObject> {
        self.objects[slot.index()].borrow()
    }

    /// Front-most model whose pick sphere the ray hits.
    pub fn pick(&self, ray: &Ray) -> Option<ObjectSlot> {
        let mut best = None::<(ObjectSlot, f32)>;
        for slot in ObjectSlot::ALL {
            let center = self.object(slot).rendered_position();
            if let Some(t) = ray.intersect_sphere(center, self.pick_radius) {
                match best {
                    Some((_, bt)) if t >= bt => {}
                    _ => best = Some((slot, t)),
                }
            }
        }
        best.map(|(slot, _)| slot)
    }

    /// A click in the scene. Only clicks landing on a model toggle its drag.
    pub fn click(
        &self,
        ray: Option<Ray>,
        host: &mut dyn InteractionHost,
    ) -> Option<(ObjectSlot, DragOutcome)> {
        let slot = self.pick(&ray?)?;
        Some((slot, self.toggle_drag(slot, host)))
    }

    /// Start or end a drag on one model, replicating on commit.
    pub fn toggle_drag(&self, slot: ObjectSlot, host: &mut dyn InteractionHost) -> DragOutcome {
        let handle = &self.objects[slot.index()];
        let (id, outcome) = {
            let mut object = handle.borrow_mut();
            let outcome = object.drag.toggle(host);
            (object.id.clone(), outcome)
        };
        match outcome {
            DragOutcome::Started => info!("[drag] begin drag on {id}"),
            DragOutcome::Committed(p) => {
                info!("[drag] committed {id} at {p:?}");
                self.sync.replicate(handle);
            }
            DragOutcome::Reverted(p) => warn!("[drag] {id} too close to its peer, reverted to {p:?}"),
        }
        if !matches!(outcome, DragOutcome::Started) {
            // the other model may still be mid-drag
            host.set_orbit_enabled(!self.any_dragging());
            host.set_cursor(self.cursor());
        }
        outcome
    }

    /// Route a pointer move: dragging models follow the ground hit, idle
    /// ones update their hover flag. The host cursor is refreshed.
    pub fn pointer_moved(&self, ray: Option<Ray>, host: &mut dyn InteractionHost) {
        let ground = ray.as_ref().and_then(Ray::intersect_ground);
        if self.any_dragging() {
            for slot in ObjectSlot::ALL {
                if self.object(slot).drag.is_dragging() {
                    self.drag_to(slot, ground);
                }
            }
        } else {
            let hit = ray.as_ref().and_then(|r| self.pick(r));
            for slot in ObjectSlot::ALL {
                self.objects[slot.index()].borrow_mut().hovered = hit == Some(slot);
            }
        }
        host.set_cursor(self.cursor());
    }

    /// Project a screen-space pointer and route it like [`pointer_moved`](Self::pointer_moved).
    pub fn pointer_moved_screen(
        &self,
        camera: &Camera,
        viewport: &Viewport,
        screen: Vec2,
        host: &mut dyn InteractionHost,
    ) {
        self.pointer_moved(Ray::from_screen(camera, viewport, screen), host);
    }

    /// Feed a ground candidate to one model's drag. Returns its collision warning.
    pub fn drag_to(&self, slot: ObjectSlot, candidate: Option<Vec3>) -> bool {
        self.objects[slot.index()]
            .borrow_mut()
            .drag
            .pointer_moved(candidate)
    }

    /// Pointer left the scene: nothing is hovered any more.
    pub fn pointer_left(&self, host: &mut dyn InteractionHost) {
        for object in &self.objects {
            object.borrow_mut().hovered = false;
        }
        host.set_cursor(self.cursor());
    }

    pub fn set_position(&self, slot: ObjectSlot, position: Vec3) {
        let handle = &self.objects[slot.index()];
        handle.borrow_mut().drag.set_committed(position);
        self.sync.replicate(handle);
    }

    pub fn set_rotation(&self, slot: ObjectSlot, rotation: RotationParameter) {
        let handle = &self.objects[slot.index()];
        handle.borrow_mut().rotation = rotation;
        self.sync.replicate(handle);
    }

    pub fn cursor(&self) -> Cursor {
        let cursors = ObjectSlot::ALL.map(|slot| self.object(slot).cursor());
        if cursors.contains(&Cursor::Grabbing) {
            Cursor::Grabbing
        } else if cursors.contains(&Cursor::Grab) {
            Cursor::Grab
        } else {
            Cursor::Auto
        }
    }

    pub fn view(&self, slot: ObjectSlot) -> ObjectView {
        let object = self.object(slot);
        ObjectView {
            slot,
            id: object.id.clone(),
            label: object.label.clone(),
            position: object.rendered_position(),
            committed_position: object.drag.committed(),
            rotation: object.rotation,
            drag_state: object.drag.state(),
            collision_warning: object.drag.collision_warning(),
            hovered: object.hovered,
            is_loading: object.is_loading(),
            error: object.error.clone(),
            indicator: object.indicator(),
            tint: object.tint(),
        }
    }

    pub fn snapshot(&self) -> ViewerSnapshot {
        let objects = ObjectSlot::ALL.map(|slot| self.view(slot));
        let is_loading = objects.iter().any(|o| o.is_loading);
        let error = objects.iter().find_map(|o| o.error.clone());
        ViewerSnapshot {
            objects,
            is_loading,
            error,
        }
    }
}

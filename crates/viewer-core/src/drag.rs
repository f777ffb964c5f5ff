//! Click-to-toggle drag state machine for a single model.
//!
//! A first click on an idle model starts a drag, a second click ends it.
//! While dragging, every pointer move updates the live position and
//! re-evaluates the collision guard against the peer model. On release a
//! colliding live position is discarded and the committed one restored;
//! otherwise the live position is committed.

use std::rc::Rc;

use glam::Vec3;

use crate::collision::CollisionRule;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
    /// Still dragging, but the live position is too close to the peer.
    DragRejected,
}

impl DragState {
    #[inline]
    pub fn is_dragging(self) -> bool {
        !matches!(self, DragState::Idle)
    }
}

/// Pointer cursor requested by the interaction layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cursor {
    #[default]
    Auto,
    Grab,
    Grabbing,
}

impl Cursor {
    pub fn css(self) -> &'static str {
        match self {
            Cursor::Auto => "auto",
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        }
    }
}

/// Side of the input boundary a drag has to switch while it is active.
pub trait InteractionHost {
    /// Camera orbit/pan input. Must be off for the whole duration of a drag.
    fn set_orbit_enabled(&mut self, enabled: bool);
    fn set_cursor(&mut self, cursor: Cursor);
}

/// Read-only capability to ask where another model currently is.
pub trait PositionQuery {
    fn current_position(&self) -> Option<Vec3>;
}

impl PositionQuery for Vec3 {
    fn current_position(&self) -> Option<Vec3> {
        Some(*self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragOutcome {
    Started,
    Committed(Vec3),
    /// Released while colliding; carries the restored committed position.
    Reverted(Vec3),
}

#[derive(Clone)]
pub struct DragMachine {
    state: DragState,
    committed: Vec3,
    live: Vec3,
    rule: CollisionRule,
    peer: Option<Rc<dyn PositionQuery>>,
}

impl DragMachine {
    pub fn new(committed: Vec3, rule: CollisionRule) -> Self {
        let committed = on_ground(committed);
        Self {
            state: DragState::Idle,
            committed,
            live: committed,
            rule,
            peer: None,
        }
    }

    pub fn attach_peer(&mut self, peer: Rc<dyn PositionQuery>) {
        self.peer = Some(peer);
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn collision_warning(&self) -> bool {
        matches!(self.state, DragState::DragRejected)
    }

    pub fn committed(&self) -> Vec3 {
        self.committed
    }

    pub fn live(&self) -> Vec3 {
        self.live
    }

    pub fn rule(&self) -> CollisionRule {
        self.rule
    }

    /// A click on the model: start when idle, end when dragging.
    pub fn toggle(&mut self, host: &mut dyn InteractionHost) -> DragOutcome {
        if self.is_dragging() {
            self.finish(host)
        } else {
            self.begin(host);
            DragOutcome::Started
        }
    }

    /// Returns `false` if a drag was already in progress.
    pub fn start(&mut self, host: &mut dyn InteractionHost) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.begin(host);
        true
    }

    /// Returns `None` if no drag was in progress.
    pub fn end(&mut self, host: &mut dyn InteractionHost) -> Option<DragOutcome> {
        self.is_dragging().then(|| self.finish(host))
    }

    /// Feed a projected pointer position. `None` (no ground hit) keeps the
    /// previous live position. Returns the current collision warning.
    pub fn pointer_moved(&mut self, candidate: Option<Vec3>) -> bool {
        if !self.is_dragging() {
            return false;
        }
        let Some(candidate) = candidate else {
            return self.collision_warning();
        };
        self.live = on_ground(candidate);
        let other = self.peer.as_ref().and_then(|p| p.current_position());
        self.state = if self.rule.check_against(self.live, other) {
            DragState::DragRejected
        } else {
            DragState::Dragging
        };
        self.collision_warning()
    }

    /// Replace the committed position from outside a drag (hydration or an
    /// explicit setter). An active drag keeps its live position.
    pub fn set_committed(&mut self, position: Vec3) {
        self.committed = on_ground(position);
        if !self.is_dragging() {
            self.live = self.committed;
        }
    }

    fn begin(&mut self, host: &mut dyn InteractionHost) {
        self.state = DragState::Dragging;
        self.live = self.committed;
        host.set_orbit_enabled(false);
        host.set_cursor(Cursor::Grabbing);
    }

    fn finish(&mut self, host: &mut dyn InteractionHost) -> DragOutcome {
        let outcome = if self.collision_warning() {
            self.live = self.committed;
            DragOutcome::Reverted(self.committed)
        } else {
            self.committed = self.live;
            DragOutcome::Committed(self.committed)
        };
        self.state = DragState::Idle;
        host.set_orbit_enabled(true);
        host.set_cursor(Cursor::Auto);
        outcome
    }
}

#[inline]
fn on_ground(p: Vec3) -> Vec3 {
    Vec3::new(p.x, 0.0, p.z)
}

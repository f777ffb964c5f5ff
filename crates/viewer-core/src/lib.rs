//! Placement logic for two draggable models on a shared ground plane.
//!
//! Pointer input is projected onto the ground, checked against a minimum
//! clearance to the other model, committed or reverted on release, and
//! replicated to a document store. Rendering and platform input live in the
//! frontends.

pub mod camera;
pub mod collision;
pub mod config;
pub mod constants;
pub mod coordinator;
pub mod drag;
pub mod error;
pub mod feedback;
pub mod model;
pub mod projection;
pub mod record;
pub mod store;
pub mod sync;

pub use camera::*;
pub use collision::*;
pub use config::*;
pub use constants::*;
pub use coordinator::*;
pub use drag::*;
pub use error::*;
pub use feedback::*;
pub use model::*;
pub use projection::*;
pub use record::*;
pub use store::*;
pub use sync::*;

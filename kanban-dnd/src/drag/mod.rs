//! Drag session handling
//!
//! A drag moves through three states. [`DragController`] interprets
//! [`DragEvent`]s against a [`BoardStore`](crate::BoardStore) and applies the
//! resulting reorders and reassignments; [`PointerSensor`] decides when a
//! pointer press has travelled far enough to count as a drag.

mod controller;
mod event;
mod overlay;
mod sensor;
mod state;

pub use controller::{DragController, DragOutcome};
pub use event::DragEvent;
pub use overlay::DragOverlay;
pub use sensor::{Point, PointerSensor, Release};
pub use state::{DragKind, DragState};

//! Core types for the board engine

mod entity;
mod group;
mod ids;
mod item;

// Re-export all types
pub use entity::{DragRef, EntityKind};
pub use group::Group;
pub use ids::{GroupId, ItemId};
pub use item::Item;

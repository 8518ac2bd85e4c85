//! What follows the pointer during a drag

use crate::types::{Group, Item};
use serde::Serialize;

/// Render data for the floating copy of the dragged entity.
///
/// A dragged group carries its items so the overlay shows the whole column.
/// A dragged item reflects its live group, which changes as it crosses columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragOverlay {
    Group { group: Group, items: Vec<Item> },
    Item { item: Item },
}

impl DragOverlay {
    /// Title or content shown on the overlay
    pub fn label(&self) -> &str {
        match self {
            Self::Group { group, .. } => &group.title,
            Self::Item { item } => &item.content,
        }
    }
}

//! Drag session state

use crate::types::{DragRef, Group, Item};
use serde::{Deserialize, Serialize};

/// What kind of drag is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragKind {
    Group,
    Item,
}

/// The drag session.
///
/// The dragged entity is an owned copy taken when the drag started. It is
/// only used for reporting; every decision re-reads the live board by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    DraggingGroup(Group),
    DraggingItem(Item),
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Kind of the active drag, if any
    pub fn kind(&self) -> Option<DragKind> {
        match self {
            Self::Idle => None,
            Self::DraggingGroup(_) => Some(DragKind::Group),
            Self::DraggingItem(_) => Some(DragKind::Item),
        }
    }

    /// Reference to the dragged entity, if any
    pub fn active_ref(&self) -> Option<DragRef> {
        match self {
            Self::Idle => None,
            Self::DraggingGroup(group) => Some(DragRef::Group(group.id.clone())),
            Self::DraggingItem(item) => Some(DragRef::Item(item.id.clone())),
        }
    }
}

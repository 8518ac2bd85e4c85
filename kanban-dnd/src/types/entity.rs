//! References to draggable board entities

use super::ids::{GroupId, ItemId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two kinds of entity a drag can carry or land on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Group,
    Item,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group => f.write_str("group"),
            Self::Item => f.write_str("item"),
        }
    }
}

/// A kind-tagged reference to a group or an item.
///
/// Hosts pass these for the dragged entity and for whatever is under the
/// pointer. Only the id is carried; the entity itself is always resolved
/// against the current board so a reference can never go stale silently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum DragRef {
    Group(GroupId),
    Item(ItemId),
}

impl DragRef {
    /// Reference a group
    pub fn group(id: impl Into<GroupId>) -> Self {
        Self::Group(id.into())
    }

    /// Reference an item
    pub fn item(id: impl Into<ItemId>) -> Self {
        Self::Item(id.into())
    }

    /// Kind of the referenced entity
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Group(_) => EntityKind::Group,
            Self::Item(_) => EntityKind::Item,
        }
    }

    /// The group id, if this references a group
    pub fn as_group(&self) -> Option<&GroupId> {
        match self {
            Self::Group(id) => Some(id),
            Self::Item(_) => None,
        }
    }

    /// The item id, if this references an item
    pub fn as_item(&self) -> Option<&ItemId> {
        match self {
            Self::Item(id) => Some(id),
            Self::Group(_) => None,
        }
    }

    /// Raw id string regardless of kind
    pub fn id_str(&self) -> &str {
        match self {
            Self::Group(id) => id.as_str(),
            Self::Item(id) => id.as_str(),
        }
    }
}

impl fmt::Display for DragRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.id_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_id_different_kind_is_not_equal() {
        assert_ne!(DragRef::group("x"), DragRef::item("x"));
        assert_eq!(DragRef::item("x"), DragRef::item("x"));
    }

    #[test]
    fn test_serde_shape() {
        let value = serde_json::to_value(DragRef::item("t1")).unwrap();
        assert_eq!(value, serde_json::json!({"kind": "item", "id": "t1"}));

        let parsed: DragRef = serde_json::from_str(r#"{"kind":"group","id":"g1"}"#).unwrap();
        assert_eq!(parsed, DragRef::group("g1"));
    }

    #[test]
    fn test_display() {
        assert_eq!(DragRef::group("g1").to_string(), "group:g1");
    }
}

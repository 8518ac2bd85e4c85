//! Item: a card filed under exactly one group

use super::ids::{GroupId, ItemId};
use serde::{Deserialize, Serialize};

/// A work item on the board.
///
/// Items of every group share one ordered sequence; `group_id` decides which
/// column an item renders in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub group_id: GroupId,
    #[serde(default)]
    pub content: String,
}

impl Item {
    /// Create a new item in the given group
    pub fn new(
        id: impl Into<ItemId>,
        group_id: impl Into<GroupId>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            group_id: group_id.into(),
            content: content.into(),
        }
    }

    /// Return a copy filed under another group
    pub fn in_group(&self, group_id: GroupId) -> Self {
        Self {
            group_id,
            ..self.clone()
        }
    }

    /// Return a copy with different content
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..self.clone()
        }
    }

    /// Check whether the item is filed under the given group
    pub fn belongs_to(&self, group_id: &GroupId) -> bool {
        &self.group_id == group_id
    }
}

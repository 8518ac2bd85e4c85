//! Group: a named column that items are filed under

use super::ids::GroupId;
use serde::{Deserialize, Serialize};

/// A group defines one column of the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub title: String,
}

impl Group {
    /// Create a new group
    pub fn new(id: impl Into<GroupId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// Return a copy with a different title
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            id: self.id.clone(),
            title: title.into(),
        }
    }
}

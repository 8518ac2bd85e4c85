//! Immutable board snapshots and the pure transforms between them
//!
//! Every transform takes `&self` and returns a new snapshot. Unknown ids make a
//! transform return an unchanged copy rather than fail, so a stale reference
//! coming from the view layer can never break an interaction.

use crate::error::{DndError, Result};
use crate::reorder::move_by_key;
use crate::types::{Group, GroupId, Item, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The ordered groups and the single ordered item sequence of a board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl BoardSnapshot {
    /// An empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from existing sequences
    pub fn from_parts(groups: Vec<Group>, items: Vec<Item>) -> Self {
        Self { groups, items }
    }

    pub fn group(&self, id: &GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| &g.id == id)
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|t| &t.id == id)
    }

    pub fn has_group(&self, id: &GroupId) -> bool {
        self.group(id).is_some()
    }

    /// Items filed under a group, in global sequence order
    pub fn items_in<'a>(&'a self, group_id: &'a GroupId) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.iter().filter(move |t| t.belongs_to(group_id))
    }

    pub fn item_count(&self, group_id: &GroupId) -> usize {
        self.items_in(group_id).count()
    }

    /// Append a group
    pub fn with_group(&self, group: Group) -> Self {
        let mut groups = self.groups.clone();
        groups.push(group);
        Self {
            groups,
            items: self.items.clone(),
        }
    }

    /// Remove a group and, in the same step, every item filed under it
    pub fn without_group(&self, id: &GroupId) -> Self {
        Self {
            groups: self.groups.iter().filter(|g| &g.id != id).cloned().collect(),
            items: self
                .items
                .iter()
                .filter(|t| !t.belongs_to(id))
                .cloned()
                .collect(),
        }
    }

    pub fn with_group_title(&self, id: &GroupId, title: &str) -> Self {
        Self {
            groups: self
                .groups
                .iter()
                .map(|g| if &g.id == id { g.with_title(title) } else { g.clone() })
                .collect(),
            items: self.items.clone(),
        }
    }

    /// Append an item; unchanged when its group is not on the board
    pub fn with_item(&self, item: Item) -> Self {
        if !self.has_group(&item.group_id) {
            return self.clone();
        }
        let mut items = self.items.clone();
        items.push(item);
        Self {
            groups: self.groups.clone(),
            items,
        }
    }

    pub fn without_item(&self, id: &ItemId) -> Self {
        Self {
            groups: self.groups.clone(),
            items: self.items.iter().filter(|t| &t.id != id).cloned().collect(),
        }
    }

    pub fn with_item_content(&self, id: &ItemId, content: &str) -> Self {
        self.map_item(id, |t| t.with_content(content))
    }

    /// File an item under another group without moving it in the sequence.
    ///
    /// Unchanged when the target group does not exist, so no item can ever
    /// point at a missing group.
    pub fn with_item_group(&self, id: &ItemId, group_id: &GroupId) -> Self {
        if !self.has_group(group_id) {
            return self.clone();
        }
        self.map_item(id, |t| t.in_group(group_id.clone()))
    }

    /// Move `source` to the position currently held by `target`
    pub fn with_groups_reordered(&self, source: &GroupId, target: &GroupId) -> Self {
        match move_by_key(&self.groups, source, target, |g| &g.id) {
            Some(groups) => Self {
                groups,
                items: self.items.clone(),
            },
            None => self.clone(),
        }
    }

    /// Move `source` to the position currently held by `target` in the item sequence
    pub fn with_items_reordered(&self, source: &ItemId, target: &ItemId) -> Self {
        match move_by_key(&self.items, source, target, |t| &t.id) {
            Some(items) => Self {
                groups: self.groups.clone(),
                items,
            },
            None => self.clone(),
        }
    }

    fn map_item(&self, id: &ItemId, f: impl Fn(&Item) -> Item) -> Self {
        Self {
            groups: self.groups.clone(),
            items: self
                .items
                .iter()
                .map(|t| if &t.id == id { f(t) } else { t.clone() })
                .collect(),
        }
    }

    /// Verify ids are unique per kind and every item points at a live group
    pub fn check_integrity(&self) -> Result<()> {
        let mut group_ids = HashSet::new();
        for group in &self.groups {
            if !group_ids.insert(&group.id) {
                return Err(DndError::duplicate_id("group", group.id.as_str()));
            }
        }

        let mut item_ids = HashSet::new();
        for item in &self.items {
            if !item_ids.insert(&item.id) {
                return Err(DndError::duplicate_id("item", item.id.as_str()));
            }
            if !group_ids.contains(&item.group_id) {
                return Err(DndError::DanglingItem {
                    item: item.id.to_string(),
                    group: item.group_id.to_string(),
                });
            }
        }

        Ok(())
    }
}

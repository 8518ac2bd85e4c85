//! Board state store
//!
//! [`BoardStore`] owns the current [`BoardSnapshot`] and replaces it with the
//! result of a pure transform on every mutation. Each mutation reports whether
//! the board actually changed, and the store keeps a revision counter that
//! only moves when it did, so a view can skip re-rendering after a no-op.

use crate::config::BoardConfig;
use crate::error::Result;
use crate::generator::{IdGenerator, UlidIds};
use crate::snapshot::BoardSnapshot;
use crate::types::{Group, GroupId, Item, ItemId};
use tracing::debug;

/// The single owner of a board's groups and items
#[derive(Debug, Clone)]
pub struct BoardStore<G = UlidIds> {
    current: BoardSnapshot,
    ids: G,
    config: BoardConfig,
    revision: u64,
}

impl BoardStore<UlidIds> {
    /// An empty board with ULID ids and default configuration
    pub fn new() -> Self {
        Self::with_ids(BoardConfig::default(), UlidIds)
    }
}

impl Default for BoardStore<UlidIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> BoardStore<G> {
    /// An empty board using the given configuration and id generator
    pub fn with_ids(config: BoardConfig, ids: G) -> Self {
        Self {
            current: BoardSnapshot::new(),
            ids,
            config,
            revision: 0,
        }
    }

    /// Start from an existing snapshot.
    ///
    /// Fails with [`DndError::DanglingItem`](crate::DndError::DanglingItem) or
    /// [`DndError::DuplicateId`](crate::DndError::DuplicateId) when the
    /// snapshot is not a valid board.
    pub fn from_snapshot(snapshot: BoardSnapshot, config: BoardConfig, ids: G) -> Result<Self> {
        snapshot.check_integrity()?;
        Ok(Self {
            current: snapshot,
            ids,
            config,
            revision: 0,
        })
    }

    /// The current snapshot
    pub fn snapshot(&self) -> &BoardSnapshot {
        &self.current
    }

    /// Number of mutations that changed the board
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn groups(&self) -> &[Group] {
        &self.current.groups
    }

    pub fn items(&self) -> &[Item] {
        &self.current.items
    }

    pub fn group(&self, id: &GroupId) -> Option<&Group> {
        self.current.group(id)
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.current.item(id)
    }

    /// Items filed under a group, in board order
    pub fn items_in<'a>(&'a self, group_id: &'a GroupId) -> impl Iterator<Item = &'a Item> + 'a {
        self.current.items_in(group_id)
    }

    pub fn item_count(&self, group_id: &GroupId) -> usize {
        self.current.item_count(group_id)
    }

    /// Append a new group with a default title
    pub fn create_group(&mut self) -> Group {
        let group = Group::new(
            self.ids.next_group_id(),
            self.config.group_title(self.current.groups.len() + 1),
        );
        let next = self.current.with_group(group.clone());
        self.replace(next);
        debug!(group = %group.id, title = %group.title, "created group");
        group
    }

    /// Delete a group together with all of its items
    pub fn delete_group(&mut self, id: &GroupId) -> bool {
        let next = self.current.without_group(id);
        let removed_items = self.current.items.len() - next.items.len();
        let changed = self.replace(next);
        if changed {
            debug!(group = %id, removed_items, "deleted group");
        }
        changed
    }

    pub fn rename_group(&mut self, id: &GroupId, title: impl AsRef<str>) -> bool {
        let next = self.current.with_group_title(id, title.as_ref());
        self.replace(next)
    }

    /// Append a new item to a group.
    ///
    /// Returns `None` without touching the board if the group does not exist.
    pub fn create_item(&mut self, group_id: &GroupId) -> Option<Item> {
        if !self.current.has_group(group_id) {
            debug!(group = %group_id, "ignoring item creation for unknown group");
            return None;
        }
        let item = Item::new(
            self.ids.next_item_id(),
            group_id.clone(),
            self.config.item_content(self.current.items.len() + 1),
        );
        let next = self.current.with_item(item.clone());
        self.replace(next);
        debug!(item = %item.id, group = %group_id, "created item");
        Some(item)
    }

    pub fn delete_item(&mut self, id: &ItemId) -> bool {
        let next = self.current.without_item(id);
        self.replace(next)
    }

    pub fn edit_item_content(&mut self, id: &ItemId, content: impl AsRef<str>) -> bool {
        let next = self.current.with_item_content(id, content.as_ref());
        self.replace(next)
    }

    /// Move a group to the position currently held by `target`
    pub fn reorder_groups(&mut self, source: &GroupId, target: &GroupId) -> bool {
        let next = self.current.with_groups_reordered(source, target);
        let changed = self.replace(next);
        if changed {
            debug!(source = %source, target = %target, "reordered groups");
        }
        changed
    }

    /// Move an item to the position currently held by `target`
    pub fn reorder_items(&mut self, source: &ItemId, target: &ItemId) -> bool {
        let next = self.current.with_items_reordered(source, target);
        let changed = self.replace(next);
        if changed {
            debug!(source = %source, target = %target, "reordered items");
        }
        changed
    }

    /// File an item under another group, keeping its place in the sequence
    pub fn reassign_item_group(&mut self, item: &ItemId, group: &GroupId) -> bool {
        let next = self.current.with_item_group(item, group);
        let changed = self.replace(next);
        if changed {
            debug!(item = %item, group = %group, "reassigned item");
        }
        changed
    }

    fn replace(&mut self, next: BoardSnapshot) -> bool {
        if next == self.current {
            return false;
        }
        debug_assert!(
            next.check_integrity().is_ok(),
            "board integrity violated: {:?}",
            next.check_integrity()
        );
        self.current = next;
        self.revision += 1;
        true
    }
}

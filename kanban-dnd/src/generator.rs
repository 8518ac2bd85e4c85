//! Identifier generation
//!
//! The store never invents ids itself; it asks an [`IdGenerator`]. Callers are
//! responsible for the generator handing out values that are unique among the
//! live entities of each kind.

use crate::types::{GroupId, ItemId};

/// Source of fresh group and item ids
pub trait IdGenerator {
    /// Next id for a newly created group
    fn next_group_id(&mut self) -> GroupId;

    /// Next id for a newly created item
    fn next_item_id(&mut self) -> ItemId;
}

/// ULID-backed generator, the default for live boards
#[derive(Debug, Default, Clone, Copy)]
pub struct UlidIds;

impl IdGenerator for UlidIds {
    fn next_group_id(&mut self) -> GroupId {
        GroupId::new()
    }

    fn next_item_id(&mut self) -> ItemId {
        ItemId::new()
    }
}

/// Deterministic counter-based generator: `g1, g2, ...` and `t1, t2, ...`.
///
/// Handy for tests and demos where stable ids make assertions readable.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    groups: u64,
    items: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_group_id(&mut self) -> GroupId {
        self.groups += 1;
        GroupId::from_string(format!("g{}", self.groups))
    }

    fn next_item_id(&mut self) -> ItemId {
        self.items += 1;
        ItemId::from_string(format!("t{}", self.items))
    }
}

//! Drag session controller
//!
//! Interprets drag events against the live board:
//!
//! - item over item: adopt the target's group if it differs, then take the
//!   target's place in the item sequence
//! - item over group: adopt the group, keep the place in the item sequence
//! - group drags do nothing while moving; the group order changes on drop
//!
//! Item moves happen while the pointer is still down so the card already sits
//! in its destination column before it is released.

use super::event::DragEvent;
use super::overlay::DragOverlay;
use super::state::{DragKind, DragState};
use crate::generator::IdGenerator;
use crate::store::BoardStore;
use crate::types::{DragRef, Group, Item};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Result of feeding one event to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Nothing changed: no state transition and no board mutation
    Ignored,
    /// A drag of the given kind began
    Started(DragKind),
    /// The board changed while the drag continues
    BoardChanged,
    /// The session is over; `board_changed` tells whether the drop mutated the board
    Finished { board_changed: bool },
}

impl DragOutcome {
    /// Whether the host needs to re-render the board
    pub fn board_changed(&self) -> bool {
        matches!(
            self,
            Self::BoardChanged
                | Self::Finished {
                    board_changed: true
                }
        )
    }
}

/// The drag state machine.
///
/// The controller never owns the board; the store is passed to every call.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
    disabled: HashSet<DragRef>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        !self.state.is_idle()
    }

    /// The group being dragged, as it was when the drag began
    pub fn active_group(&self) -> Option<&Group> {
        match &self.state {
            DragState::DraggingGroup(group) => Some(group),
            _ => None,
        }
    }

    /// The item being dragged, as of its last move
    pub fn active_item(&self) -> Option<&Item> {
        match &self.state {
            DragState::DraggingItem(item) => Some(item),
            _ => None,
        }
    }

    /// Stop an entity from starting drags, e.g. while its title is being edited
    pub fn disable(&mut self, entity: DragRef) {
        self.disabled.insert(entity);
    }

    /// Allow an entity to start drags again
    pub fn enable(&mut self, entity: &DragRef) -> bool {
        self.disabled.remove(entity)
    }

    pub fn is_disabled(&self, entity: &DragRef) -> bool {
        self.disabled.contains(entity)
    }

    /// Feed one event to the state machine
    pub fn handle<G: IdGenerator>(
        &mut self,
        store: &mut BoardStore<G>,
        event: &DragEvent,
    ) -> DragOutcome {
        trace!(event = event.name(), state = ?self.state.kind(), "drag event");
        match event {
            DragEvent::Start { dragged } => self.drag_start(store, dragged.as_ref()),
            DragEvent::Over { active, over } => self.drag_over(store, active, over.as_ref()),
            DragEvent::End { active, over } => self.drag_end(store, active, over.as_ref()),
            DragEvent::Cancel => self.cancel(),
        }
    }

    /// Begin a drag. A start while another drag is active replaces it.
    pub fn drag_start<G: IdGenerator>(
        &mut self,
        store: &BoardStore<G>,
        dragged: Option<&DragRef>,
    ) -> DragOutcome {
        if let Some(previous) = self.state.active_ref() {
            debug!(previous = %previous, "drag restarted before previous drag ended");
        }
        self.state = DragState::Idle;

        let Some(dragged) = dragged else {
            return DragOutcome::Ignored;
        };
        if self.is_disabled(dragged) {
            debug!(entity = %dragged, "drag start on disabled entity");
            return DragOutcome::Ignored;
        }

        self.state = match dragged {
            DragRef::Group(id) => match store.group(id) {
                Some(group) => DragState::DraggingGroup(group.clone()),
                None => DragState::Idle,
            },
            DragRef::Item(id) => match store.item(id) {
                Some(item) => DragState::DraggingItem(item.clone()),
                None => DragState::Idle,
            },
        };

        match self.state.kind() {
            Some(kind) => {
                debug!(entity = %dragged, "drag started");
                DragOutcome::Started(kind)
            }
            None => {
                trace!(entity = %dragged, "drag start on unknown entity");
                DragOutcome::Ignored
            }
        }
    }

    /// Pointer moved over `over` while dragging `active`
    pub fn drag_over<G: IdGenerator>(
        &mut self,
        store: &mut BoardStore<G>,
        active: &DragRef,
        over: Option<&DragRef>,
    ) -> DragOutcome {
        if self.state.kind() != Some(DragKind::Item) {
            return DragOutcome::Ignored;
        }
        if self.state.active_ref().as_ref() != Some(active) {
            trace!(active = %active, "over event for an entity that is not being dragged");
            return DragOutcome::Ignored;
        }
        let Some(over) = over else {
            return DragOutcome::Ignored;
        };
        if active == over {
            return DragOutcome::Ignored;
        }
        let Some(active_id) = active.as_item() else {
            return DragOutcome::Ignored;
        };
        let Some(active_group) = store.item(active_id).map(|t| t.group_id.clone()) else {
            return DragOutcome::Ignored;
        };

        let changed = match over {
            DragRef::Item(over_id) => {
                let Some(over_group) = store.item(over_id).map(|t| t.group_id.clone()) else {
                    return DragOutcome::Ignored;
                };
                let mut changed = false;
                if active_group != over_group {
                    changed |= store.reassign_item_group(active_id, &over_group);
                }
                changed | store.reorder_items(active_id, over_id)
            }
            DragRef::Group(group_id) => store.reassign_item_group(active_id, group_id),
        };

        if !changed {
            return DragOutcome::Ignored;
        }
        if let Some(item) = store.item(active_id) {
            self.state = DragState::DraggingItem(item.clone());
        }
        DragOutcome::BoardChanged
    }

    /// Pointer released over `over`. Always ends the session.
    pub fn drag_end<G: IdGenerator>(
        &mut self,
        store: &mut BoardStore<G>,
        active: &DragRef,
        over: Option<&DragRef>,
    ) -> DragOutcome {
        let started = std::mem::take(&mut self.state);
        let kind = match started.active_ref() {
            Some(recorded) if &recorded == active => started.kind(),
            _ => None,
        };

        let board_changed = match over {
            Some(over) if over != active && kind == Some(DragKind::Group) => {
                match (active.as_group(), over.as_group()) {
                    (Some(source), Some(target)) => store.reorder_groups(source, target),
                    _ => false,
                }
            }
            _ => false,
        };

        debug!(active = %active, board_changed, "drag ended");
        DragOutcome::Finished { board_changed }
    }

    /// Abandon the session without touching the board
    pub fn cancel(&mut self) -> DragOutcome {
        match std::mem::take(&mut self.state).active_ref() {
            Some(active) => {
                debug!(active = %active, "drag cancelled");
                DragOutcome::Finished {
                    board_changed: false,
                }
            }
            None => DragOutcome::Ignored,
        }
    }

    /// Render data for the dragged entity, resolved against the live board
    pub fn overlay<G: IdGenerator>(&self, store: &BoardStore<G>) -> Option<DragOverlay> {
        match &self.state {
            DragState::Idle => None,
            DragState::DraggingGroup(group) => {
                let group = store.group(&group.id)?.clone();
                let items = store.items_in(&group.id).cloned().collect();
                Some(DragOverlay::Group { group, items })
            }
            DragState::DraggingItem(item) => store
                .item(&item.id)
                .cloned()
                .map(|item| DragOverlay::Item { item }),
        }
    }
}

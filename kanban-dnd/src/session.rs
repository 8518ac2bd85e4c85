//! One interactive board: store, drag controller, pointer sensor and the
//! currently open inline edit, wired together for a host view.

use crate::config::BoardConfig;
use crate::drag::{
    DragController, DragEvent, DragOutcome, DragOverlay, Point, PointerSensor, Release,
};
use crate::edit::{EditTarget, InlineEdit};
use crate::error::Result;
use crate::generator::{IdGenerator, UlidIds};
use crate::store::BoardStore;
use crate::types::DragRef;
use tracing::debug;

/// What the host should do after a pointer release
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerUp {
    /// The press never became a drag: handle it as a click on the target
    Click(DragRef),
    /// A drag finished
    Dropped(DragOutcome),
    /// Nothing was pressed
    Nothing,
}

/// An interactive board session
#[derive(Debug)]
pub struct BoardSession<G = UlidIds> {
    store: BoardStore<G>,
    controller: DragController,
    sensor: PointerSensor,
    editing: Option<InlineEdit>,
}

impl BoardSession<UlidIds> {
    /// A new empty board with ULID ids
    pub fn new(config: BoardConfig) -> Result<Self> {
        Self::with_ids(config, UlidIds)
    }
}

impl<G: IdGenerator> BoardSession<G> {
    /// A new empty board using the given id generator
    pub fn with_ids(config: BoardConfig, ids: G) -> Result<Self> {
        Self::with_store(BoardStore::with_ids(config, ids))
    }

    /// Wrap an existing store, validating its configuration
    pub fn with_store(store: BoardStore<G>) -> Result<Self> {
        store.config().validate()?;
        let sensor = PointerSensor::new(store.config().activation_distance);
        Ok(Self {
            store,
            controller: DragController::new(),
            sensor,
            editing: None,
        })
    }

    pub fn store(&self) -> &BoardStore<G> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut BoardStore<G> {
        &mut self.store
    }

    pub fn controller(&self) -> &DragController {
        &self.controller
    }

    pub fn overlay(&self) -> Option<DragOverlay> {
        self.controller.overlay(&self.store)
    }

    /// Feed a drag event straight to the controller
    pub fn dispatch(&mut self, event: &DragEvent) -> DragOutcome {
        self.controller.handle(&mut self.store, event)
    }

    /// Pointer went down on a draggable entity
    pub fn pointer_down(&mut self, target: DragRef, at: Point) {
        self.sensor.press(target, at);
    }

    /// Pointer moved above `over`.
    ///
    /// Before activation this may start a drag; afterwards every sample is an
    /// `Over` event for the active entity.
    pub fn pointer_move(&mut self, at: Point, over: Option<DragRef>) -> DragOutcome {
        if let Some(active) = self.sensor.active().cloned() {
            return self.dispatch(&DragEvent::over(active, over));
        }
        match self.sensor.motion(at) {
            Some(start) => {
                let outcome = self.dispatch(&start);
                if outcome == DragOutcome::Ignored {
                    // The controller refused the drag (disabled or unknown
                    // entity); stop the sensor from feeding it further.
                    self.sensor.reset();
                }
                outcome
            }
            None => DragOutcome::Ignored,
        }
    }

    /// Pointer went up above `over`
    pub fn pointer_up(&mut self, over: Option<DragRef>) -> PointerUp {
        match self.sensor.release() {
            Release::Drag(active) => {
                PointerUp::Dropped(self.dispatch(&DragEvent::end(active, over)))
            }
            Release::Click(target) => PointerUp::Click(target),
            Release::Nothing => PointerUp::Nothing,
        }
    }

    /// The gesture left the interactive surface without a drop
    pub fn pointer_cancel(&mut self) -> DragOutcome {
        self.sensor.reset();
        self.dispatch(&DragEvent::Cancel)
    }

    /// The edit currently open, if any
    pub fn editing(&self) -> Option<&InlineEdit> {
        self.editing.as_ref()
    }

    /// Open an inline edit, committing any edit that was already open.
    ///
    /// The edited entity cannot be dragged until the edit is closed.
    pub fn begin_edit(&mut self, target: EditTarget) -> bool {
        self.commit_edit();
        match InlineEdit::begin(&self.store, target) {
            Some(edit) => {
                self.controller.disable(edit.target().drag_ref());
                self.editing = Some(edit);
                true
            }
            None => false,
        }
    }

    pub fn set_edit_draft(&mut self, text: impl Into<String>) {
        if let Some(edit) = self.editing.as_mut() {
            edit.set_draft(text);
        }
    }

    /// Close the open edit, writing the draft if it changed
    pub fn commit_edit(&mut self) -> bool {
        let Some(edit) = self.editing.take() else {
            return false;
        };
        self.controller.enable(&edit.target().drag_ref());
        edit.commit(&mut self.store)
    }

    /// Close the open edit without writing
    pub fn cancel_edit(&mut self) {
        if let Some(edit) = self.editing.take() {
            let target = edit.cancel();
            debug!(edit = ?target, "cancelled inline edit");
            self.controller.enable(&target.drag_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DndError;
    use crate::generator::SequentialIds;
    use crate::types::{GroupId, ItemId};

    fn session() -> BoardSession<SequentialIds> {
        let mut session =
            BoardSession::with_ids(BoardConfig::default(), SequentialIds::new()).unwrap();
        let store = session.store_mut();
        let g1 = store.create_group();
        let g2 = store.create_group();
        store.create_item(&g1.id);
        store.create_item(&g2.id);
        session
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = BoardConfig::default().with_activation_distance(-5.0);
        assert!(BoardSession::with_ids(config, SequentialIds::new()).is_err());
    }

    #[test]
    fn test_click_does_not_drag() {
        let mut s = session();
        s.pointer_down(DragRef::item("t1"), Point::new(0.0, 0.0));
        assert_eq!(
            s.pointer_move(Point::new(3.0, 3.0), Some(DragRef::item("t1"))),
            DragOutcome::Ignored
        );
        assert_eq!(s.pointer_up(None), PointerUp::Click(DragRef::item("t1")));
        assert!(!s.controller().is_dragging());
    }

    #[test]
    fn test_pointer_drag_moves_item_across_groups() {
        let mut s = session();
        s.pointer_down(DragRef::item("t1"), Point::new(0.0, 0.0));
        assert!(matches!(
            s.pointer_move(Point::new(40.0, 0.0), None),
            DragOutcome::Started(_)
        ));
        assert_eq!(
            s.pointer_move(Point::new(400.0, 0.0), Some(DragRef::group("g2"))),
            DragOutcome::BoardChanged
        );
        assert_eq!(
            s.store().item(&ItemId::from("t1")).unwrap().group_id,
            GroupId::from("g2")
        );
        assert_eq!(
            s.pointer_up(Some(DragRef::group("g2"))),
            PointerUp::Dropped(DragOutcome::Finished {
                board_changed: false
            })
        );
        assert!(!s.controller().is_dragging());
    }

    #[test]
    fn test_editing_group_blocks_drag() {
        let mut s = session();
        assert!(s.begin_edit(EditTarget::GroupTitle("g1".into())));
        s.pointer_down(DragRef::group("g1"), Point::default());
        assert_eq!(
            s.pointer_move(Point::new(100.0, 0.0), None),
            DragOutcome::Ignored
        );
        assert!(!s.controller().is_dragging());
        assert_eq!(s.pointer_up(None), PointerUp::Nothing);

        s.set_edit_draft("Doing");
        assert!(s.commit_edit());
        assert_eq!(s.store().groups()[0].title, "Doing");

        s.pointer_down(DragRef::group("g1"), Point::default());
        assert!(matches!(
            s.pointer_move(Point::new(100.0, 0.0), None),
            DragOutcome::Started(_)
        ));
    }

    #[test]
    fn test_cancel_edit_reenables_drag() {
        let mut s = session();
        s.begin_edit(EditTarget::ItemContent("t2".into()));
        s.set_edit_draft("ignored");
        s.cancel_edit();
        assert!(s.editing().is_none());
        assert_eq!(s.store().item(&"t2".into()).unwrap().content, "Task 2");
        assert!(!s.controller().is_disabled(&DragRef::item("t2")));
    }

    #[test]
    fn test_pointer_cancel_clears_drag() {
        let mut s = session();
        s.pointer_down(DragRef::group("g2"), Point::default());
        s.pointer_move(Point::new(0.0, 50.0), None);
        assert!(s.overlay().is_some());
        assert_eq!(
            s.pointer_cancel(),
            DragOutcome::Finished {
                board_changed: false
            }
        );
        assert!(s.overlay().is_none());
        assert_eq!(s.pointer_up(None), PointerUp::Nothing);
    }

    #[test]
    fn test_with_store_rejects_invalid_config() {
        let config = BoardConfig::default().with_activation_distance(-1.0);
        let store = BoardStore::with_ids(config, SequentialIds::new());
        let err = BoardSession::with_store(store).unwrap_err();
        assert!(matches!(
            err,
            DndError::InvalidValue { ref field, .. } if field == "activation_distance"
        ));
    }

    #[test]
    fn test_with_store_keeps_existing_board() {
        let mut store = BoardStore::with_ids(BoardConfig::default(), SequentialIds::new());
        let g1 = store.create_group();
        store.create_item(&g1.id);
        let s = BoardSession::with_store(store).unwrap();
        assert_eq!(s.store().item_count(&g1.id), 1);
        assert!(!s.controller().is_dragging());
    }
}

//! In-place editing of group titles and item content
//!
//! An edit starts from the stored text, collects keystrokes in a draft and
//! writes back on commit only when the draft differs from what is stored.

use crate::generator::IdGenerator;
use crate::store::BoardStore;
use crate::types::{DragRef, GroupId, ItemId};
use tracing::debug;

/// The text field being edited
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EditTarget {
    GroupTitle(GroupId),
    ItemContent(ItemId),
}

impl EditTarget {
    /// The entity that must not be dragged while the edit is open
    pub fn drag_ref(&self) -> DragRef {
        match self {
            Self::GroupTitle(id) => DragRef::Group(id.clone()),
            Self::ItemContent(id) => DragRef::Item(id.clone()),
        }
    }

    fn current_text<G: IdGenerator>(&self, store: &BoardStore<G>) -> Option<String> {
        match self {
            Self::GroupTitle(id) => store.group(id).map(|g| g.title.clone()),
            Self::ItemContent(id) => store.item(id).map(|t| t.content.clone()),
        }
    }
}

/// An open edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineEdit {
    target: EditTarget,
    draft: String,
}

impl InlineEdit {
    /// Open an edit seeded with the stored text. `None` if the target is gone.
    pub fn begin<G: IdGenerator>(store: &BoardStore<G>, target: EditTarget) -> Option<Self> {
        let draft = target.current_text(store)?;
        Some(Self { target, draft })
    }

    pub fn target(&self) -> &EditTarget {
        &self.target
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Write the draft back. Returns whether the board changed.
    pub fn commit<G: IdGenerator>(self, store: &mut BoardStore<G>) -> bool {
        match self.target.current_text(store) {
            Some(current) if current != self.draft => {}
            _ => return false,
        }
        let changed = match &self.target {
            EditTarget::GroupTitle(id) => store.rename_group(id, &self.draft),
            EditTarget::ItemContent(id) => store.edit_item_content(id, &self.draft),
        };
        debug!(edit = ?self.target, changed, "committed inline edit");
        changed
    }

    /// Discard the draft
    pub fn cancel(self) -> EditTarget {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use crate::generator::SequentialIds;

    fn store() -> BoardStore<SequentialIds> {
        let mut store = BoardStore::with_ids(BoardConfig::default(), SequentialIds::new());
        let g = store.create_group();
        store.create_item(&g.id);
        store
    }

    #[test]
    fn test_commit_changed_title() {
        let mut s = store();
        let mut edit = InlineEdit::begin(&s, EditTarget::GroupTitle("g1".into())).unwrap();
        assert_eq!(edit.draft(), "Column 1");
        edit.set_draft("Backlog");
        assert!(edit.commit(&mut s));
        assert_eq!(s.groups()[0].title, "Backlog");
    }

    #[test]
    fn test_commit_unchanged_is_noop() {
        let mut s = store();
        let revision = s.revision();
        let edit = InlineEdit::begin(&s, EditTarget::ItemContent("t1".into())).unwrap();
        assert!(!edit.commit(&mut s));
        assert_eq!(s.revision(), revision);
    }

    #[test]
    fn test_begin_missing_target() {
        let s = store();
        assert!(InlineEdit::begin(&s, EditTarget::ItemContent("t9".into())).is_none());
    }

    #[test]
    fn test_commit_after_target_deleted() {
        let mut s = store();
        let mut edit = InlineEdit::begin(&s, EditTarget::ItemContent("t1".into())).unwrap();
        edit.set_draft("Changed");
        s.delete_item(&"t1".into());
        assert!(!edit.commit(&mut s));
    }

    #[test]
    fn test_cancel_keeps_text() {
        let s = store();
        let mut edit = InlineEdit::begin(&s, EditTarget::GroupTitle("g1".into())).unwrap();
        edit.set_draft("Nope");
        assert_eq!(edit.cancel(), EditTarget::GroupTitle("g1".into()));
        assert_eq!(s.groups()[0].title, "Column 1");
    }
}

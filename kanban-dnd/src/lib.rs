//! Drag-and-drop reconciliation engine for kanban boards
//!
//! This crate holds the state behind an interactive board: an ordered list of
//! groups (columns), one shared ordered sequence of items (cards), and a drag
//! session state machine that turns pointer gestures into reorders and
//! reassignments. Rendering and pointer capture belong to the host.
//!
//! ## Overview
//!
//! - **One item sequence** - Items of every group live in a single ordered
//!   list; a column shows the items whose `group_id` matches it. Moving a card
//!   to another column is a reassignment plus one reorder.
//! - **Pure snapshots** - Every mutation produces a new [`BoardSnapshot`];
//!   unknown ids are no-ops, never errors.
//! - **Live cross-column moves** - Items change column while still being
//!   dragged; groups reorder on drop.
//!
//! ## Basic Usage
//!
//! ```rust
//! use kanban_dnd::{BoardStore, DragController, DragEvent, DragRef};
//!
//! let mut store = BoardStore::new();
//! let todo = store.create_group();
//! let done = store.create_group();
//! let card = store.create_item(&todo.id).unwrap();
//!
//! let mut drag = DragController::new();
//! drag.handle(&mut store, &DragEvent::start(DragRef::Item(card.id.clone())));
//! drag.handle(
//!     &mut store,
//!     &DragEvent::over(DragRef::Item(card.id.clone()), DragRef::Group(done.id.clone())),
//! );
//! drag.handle(&mut store, &DragEvent::end(DragRef::Item(card.id.clone()), None));
//!
//! assert_eq!(store.item(&card.id).unwrap().group_id, done.id);
//! ```

pub mod config;
pub mod drag;
pub mod edit;
mod error;
pub mod generator;
pub mod reorder;
pub mod session;
pub mod snapshot;
mod store;
pub mod types;

pub use config::BoardConfig;
pub use drag::{DragController, DragEvent, DragKind, DragOutcome, DragOverlay, DragState};
pub use edit::{EditTarget, InlineEdit};
pub use error::{DndError, Result};
pub use generator::{IdGenerator, SequentialIds, UlidIds};
pub use session::{BoardSession, PointerUp};
pub use snapshot::BoardSnapshot;
pub use store::BoardStore;

// Re-export commonly used types
pub use types::{DragRef, EntityKind, Group, GroupId, Item, ItemId};

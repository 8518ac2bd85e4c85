//! Drag session events delivered by the host

use crate::types::DragRef;
use serde::{Deserialize, Serialize};

/// One step of a drag gesture.
///
/// `over` is whatever droppable the pointer is above, or `None` when it is
/// outside every drop target. Events serialize as internally tagged JSON so a
/// web view can forward them verbatim:
///
/// ```json
/// {"type": "over", "active": {"kind": "item", "id": "t1"}, "over": {"kind": "group", "id": "g2"}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DragEvent {
    /// The pointer picked something up
    Start {
        #[serde(default)]
        dragged: Option<DragRef>,
    },
    /// The pointer moved over a (possibly absent) target
    Over {
        active: DragRef,
        #[serde(default)]
        over: Option<DragRef>,
    },
    /// The pointer was released
    End {
        active: DragRef,
        #[serde(default)]
        over: Option<DragRef>,
    },
    /// The gesture was abandoned without a drop
    Cancel,
}

impl DragEvent {
    pub fn start(dragged: DragRef) -> Self {
        Self::Start {
            dragged: Some(dragged),
        }
    }

    pub fn over(active: DragRef, over: impl Into<Option<DragRef>>) -> Self {
        Self::Over {
            active,
            over: over.into(),
        }
    }

    pub fn end(active: DragRef, over: impl Into<Option<DragRef>>) -> Self {
        Self::End {
            active,
            over: over.into(),
        }
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start { .. } => "start",
            Self::Over { .. } => "over",
            Self::End { .. } => "end",
            Self::Cancel => "cancel",
        }
    }
}

use std::num::NonZero;

use wordsurgery_core::{PlacementRecord, PoolWord, TargetWord};
use wordsurgery_detect::DetectedWord;

use crate::undo_stack::UndoStack;

/// A full copy of the mutable session state at one point in time.
///
/// Snapshots are taken before every undoable action; restoring one replaces
/// the live state wholesale. All components are copy-on-write values, so a
/// snapshot is independent of later mutations by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Snapshot {
    pub(crate) target: TargetWord,
    pub(crate) pool: PoolWord,
    pub(crate) placement: PlacementRecord,
    pub(crate) detected: Vec<DetectedWord>,
}

/// Undo history with special handling for drags.
///
/// Tap removals and word harvests push their pre-mutation snapshot
/// immediately. A drag instead parks a *tentative* snapshot: only a drag
/// that ends in a successful placement promotes it onto the stack, so an
/// aborted drag leaves the history untouched. At most one tentative
/// snapshot can be outstanding; a second `begin_drag` before the first
/// resolves is ignored.
#[derive(Debug, Clone)]
pub(crate) struct History {
    stack: UndoStack<Snapshot>,
    pending_drag: Option<Snapshot>,
    drag_in_progress: bool,
}

impl History {
    pub(crate) const fn default_capacity() -> NonZero<usize> {
        NonZero::new(5000).unwrap()
    }

    #[must_use]
    pub(crate) fn with_capacity(capacity: NonZero<usize>) -> Self {
        Self {
            stack: UndoStack::new(capacity),
            pending_drag: None,
            drag_in_progress: false,
        }
    }

    /// Pushes a snapshot for an immediately-committed action.
    pub(crate) fn record(&mut self, snapshot: Snapshot) {
        self.stack.push(snapshot);
    }

    /// Parks the tentative snapshot for a starting drag.
    pub(crate) fn begin_drag(&mut self, snapshot: Snapshot) {
        if self.drag_in_progress {
            return;
        }
        self.pending_drag = Some(snapshot);
        self.drag_in_progress = true;
    }

    /// Resolves the outstanding drag: promotes the tentative snapshot when a
    /// letter was placed, discards it otherwise.
    pub(crate) fn end_drag(&mut self, placed: bool) {
        let pending = self.pending_drag.take();
        if placed && let Some(snapshot) = pending {
            self.stack.push(snapshot);
        }
        self.drag_in_progress = false;
    }

    #[must_use]
    pub(crate) fn can_undo(&self) -> bool {
        !self.stack.is_empty()
    }

    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.stack.len()
    }

    /// Pops the most recent snapshot. Any outstanding drag is discarded.
    pub(crate) fn undo(&mut self) -> Option<Snapshot> {
        self.pending_drag = None;
        self.drag_in_progress = false;
        self.stack.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.stack.clear();
        self.pending_drag = None;
        self.drag_in_progress = false;
    }
}

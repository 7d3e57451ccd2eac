use std::{collections::VecDeque, num::NonZero};

/// Bounded LIFO of saved states.
///
/// Pushing beyond capacity evicts the oldest entry, so the deepest undo
/// silently stops at the horizon instead of growing without bound.
#[derive(Debug, Clone)]
pub(crate) struct UndoStack<T> {
    stack: VecDeque<T>,
    capacity: NonZero<usize>,
}

impl<T> UndoStack<T> {
    #[must_use]
    pub(crate) fn new(capacity: NonZero<usize>) -> Self {
        Self {
            stack: VecDeque::new(),
            capacity,
        }
    }

    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub(crate) fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub(crate) fn push(&mut self, item: T) {
        if self.stack.len() == self.capacity.get() {
            self.stack.pop_front();
        }
        self.stack.push_back(item);
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        self.stack.pop_back()
    }

    pub(crate) fn clear(&mut self) {
        self.stack.clear();
    }
}

//! Tracking of where placed pool letters currently sit in the target word.

use std::collections::BTreeMap;

/// Mapping from a pool letter's original index to its live position in the
/// target word, plus the insertion-order list of placed original indexes.
///
/// All mutators return a new record; a shared record is never mutated in
/// place, so history snapshots stay independent without deep copies.
///
/// The positions stored here shift with every target mutation: inserting a
/// letter shifts every recorded position at or after the insertion point up
/// by one, and removals shift positions past the removal point back down.
///
/// # Examples
///
/// ```
/// use wordsurgery_core::PlacementRecord;
///
/// let record = PlacementRecord::new()
///     .with_placed(1, 2)
///     .with_placed(0, 2); // inserting before shifts letter 1 to position 3
///
/// assert_eq!(record.position_of(0), Some(2));
/// assert_eq!(record.position_of(1), Some(3));
/// assert_eq!(record.placed(), &[1, 0]);
/// assert!(record.is_contiguous());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementRecord {
    positions: BTreeMap<usize, usize>,
    placed_order: Vec<usize>,
}

impl PlacementRecord {
    /// Creates an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: BTreeMap::new(),
            placed_order: Vec::new(),
        }
    }

    /// Returns whether no pool letter is currently placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the number of currently placed pool letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns the target position of the letter with `original_index`,
    /// if it is placed.
    #[must_use]
    pub fn position_of(&self, original_index: usize) -> Option<usize> {
        self.positions.get(&original_index).copied()
    }

    /// Returns the placed original indexes in insertion order.
    ///
    /// Insertion order matters for display only; lookups go through
    /// [`Self::position_of`].
    #[must_use]
    pub fn placed(&self) -> &[usize] {
        &self.placed_order
    }

    /// Returns the smallest placed original index (the low end of the chain).
    #[must_use]
    pub fn min_placed(&self) -> Option<usize> {
        self.positions.keys().next().copied()
    }

    /// Returns the largest placed original index (the high end of the chain).
    #[must_use]
    pub fn max_placed(&self) -> Option<usize> {
        self.positions.keys().next_back().copied()
    }

    /// Returns whether the placed original indexes form a gap-free run in
    /// pool-order space.
    ///
    /// This is the chain invariant the constraint engine maintains; an empty
    /// record is trivially contiguous.
    #[must_use]
    pub fn is_contiguous(&self) -> bool {
        match (self.min_placed(), self.max_placed()) {
            (Some(min), Some(max)) => max - min + 1 == self.positions.len(),
            _ => true,
        }
    }

    /// Returns a new record with `original_index` placed at `target_index`.
    ///
    /// Every previously recorded position at or after `target_index` shifts
    /// up by one, mirroring the insertion into the target sequence.
    #[must_use]
    pub fn with_placed(&self, original_index: usize, target_index: usize) -> Self {
        let mut positions: BTreeMap<usize, usize> = self
            .positions
            .iter()
            .map(|(&index, &position)| {
                if position >= target_index {
                    (index, position + 1)
                } else {
                    (index, position)
                }
            })
            .collect();
        positions.insert(original_index, target_index);

        let mut placed_order = self.placed_order.clone();
        placed_order.push(original_index);

        Self {
            positions,
            placed_order,
        }
    }

    /// Returns a new record with `original_index` no longer placed.
    ///
    /// Every recorded position past the removed letter shifts down by one.
    /// Returns an unchanged clone if the letter is not placed.
    #[must_use]
    pub fn with_removed(&self, original_index: usize) -> Self {
        let Some(removed_position) = self.position_of(original_index) else {
            return self.clone();
        };

        let positions = self
            .positions
            .iter()
            .filter(|&(&index, _)| index != original_index)
            .map(|(&index, &position)| {
                if position > removed_position {
                    (index, position - 1)
                } else {
                    (index, position)
                }
            })
            .collect();

        let mut placed_order = self.placed_order.clone();
        placed_order.retain(|&index| index != original_index);

        Self {
            positions,
            placed_order,
        }
    }

    /// Returns a new record with every entry inside the inclusive target
    /// range `start..=end` dropped.
    ///
    /// Positions past the range shift down by the removed span length,
    /// mirroring a harvested word's removal from the target sequence.
    #[must_use]
    pub fn with_range_removed(&self, start: usize, end: usize) -> Self {
        if start > end {
            return self.clone();
        }
        let span = end - start + 1;

        let positions: BTreeMap<usize, usize> = self
            .positions
            .iter()
            .filter(|&(_, &position)| !(start..=end).contains(&position))
            .map(|(&index, &position)| {
                if position > end {
                    (index, position - span)
                } else {
                    (index, position)
                }
            })
            .collect();

        let mut placed_order = self.placed_order.clone();
        placed_order.retain(|index| positions.contains_key(index));

        Self {
            positions,
            placed_order,
        }
    }
}

//! The placement-constraint engine.
//!
//! Pool letters may only be placed in an order consistent with their
//! original relative order in the pool word: the placed set must always be
//! a contiguous run in pool-order space, growable from either end. Both
//! "which letters may move" and "where may they land" are derived from one
//! canonical computation, [`ChainRule::drop_target`], so the two predicates
//! cannot drift apart.

use crate::placement::PlacementRecord;

/// Where a pool letter may currently be dropped in the target word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum DropTarget {
    /// No pool letter has been placed yet; every insertion point
    /// `0..=target_len` is valid.
    Anywhere,
    /// Exactly one insertion point is valid.
    At(usize),
    /// The letter is not adjacent to the placed chain and cannot move.
    Blocked,
}

/// Legality oracle for chain extensions, computed over a [`PlacementRecord`].
///
/// # Examples
///
/// ```
/// use wordsurgery_core::{ChainRule, DropTarget, PlacementRecord};
///
/// let record = PlacementRecord::new().with_placed(1, 3);
/// let rule = ChainRule::new(&record);
///
/// assert!(rule.is_letter_eligible(0));
/// assert!(rule.is_letter_eligible(2));
/// assert!(!rule.is_letter_eligible(3));
///
/// // Lower pool neighbor goes immediately before, higher immediately after.
/// assert_eq!(rule.drop_target(0), DropTarget::At(3));
/// assert_eq!(rule.drop_target(2), DropTarget::At(4));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ChainRule<'a> {
    record: &'a PlacementRecord,
}

impl<'a> ChainRule<'a> {
    /// Creates a rule over the given placement record.
    #[must_use]
    pub const fn new(record: &'a PlacementRecord) -> Self {
        Self { record }
    }

    /// Canonical legal-chain-extension computation.
    ///
    /// With an empty record every insertion point is valid. Otherwise the
    /// letter must be pool-adjacent (±1) to a placed letter; a lower
    /// neighbor's only destination is immediately before that letter's
    /// current target position, a higher neighbor's immediately after.
    #[must_use]
    pub fn drop_target(&self, original_index: usize) -> DropTarget {
        if self.record.is_empty() {
            return DropTarget::Anywhere;
        }

        let lower = original_index
            .checked_sub(1)
            .and_then(|adjacent| self.record.position_of(adjacent));
        if let Some(position) = lower {
            return DropTarget::At(position + 1);
        }

        if let Some(position) = self.record.position_of(original_index + 1) {
            return DropTarget::At(position);
        }

        DropTarget::Blocked
    }

    /// Returns whether the pool letter with `original_index` may currently
    /// be picked up.
    #[must_use]
    pub fn is_letter_eligible(&self, original_index: usize) -> bool {
        !self.drop_target(original_index).is_blocked()
    }

    /// Returns whether `insert_index` is a legal destination for the letter
    /// with `original_index`, given a target word of `target_len` letters.
    #[must_use]
    pub fn is_destination_valid(
        &self,
        original_index: usize,
        insert_index: usize,
        target_len: usize,
    ) -> bool {
        match self.drop_target(original_index) {
            DropTarget::Anywhere => insert_index <= target_len,
            DropTarget::At(position) => insert_index == position,
            DropTarget::Blocked => false,
        }
    }
}

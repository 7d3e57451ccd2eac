//! Copy-on-write letter sequences for the target word and the pool.

use crate::letter::{PoolLetter, PoolLetterState, TargetLetter};

/// The word under construction.
///
/// An ordered sequence of [`TargetLetter`]s in left-to-right reading order.
/// All mutators return a new sequence instead of mutating in place, so a
/// history snapshot is just a clone of the previous value.
///
/// # Examples
///
/// ```
/// use wordsurgery_core::{TargetLetter, TargetWord};
///
/// let word = TargetWord::backbone("dot");
/// let word = word.with_inserted(
///     TargetLetter::Inserted {
///         value: 'c',
///         original_index: 0,
///     },
///     0,
/// );
/// assert_eq!(word.text(), "cdot");
/// assert_eq!(word.inserted_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetWord {
    letters: Vec<TargetLetter>,
}

impl TargetWord {
    /// Creates a target word whose letters are all backbone letters, with
    /// `initial_position` set to each letter's index in `word`.
    #[must_use]
    pub fn backbone(word: &str) -> Self {
        let letters = word
            .chars()
            .enumerate()
            .map(|(initial_position, value)| TargetLetter::Backbone {
                value,
                initial_position,
            })
            .collect();
        Self { letters }
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns whether the word has no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns the letter at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TargetLetter> {
        self.letters.get(index)
    }

    /// Iterates over the letters in reading order.
    pub fn iter(&self) -> impl Iterator<Item = &TargetLetter> {
        self.letters.iter()
    }

    /// Returns the lowercase string currently spelled by the word.
    #[must_use]
    pub fn text(&self) -> String {
        self.letters
            .iter()
            .flat_map(|letter| letter.value().to_lowercase())
            .collect()
    }

    /// Returns the number of inserted (non-backbone) letters.
    #[must_use]
    pub fn inserted_count(&self) -> usize {
        self.letters
            .iter()
            .filter(|letter| letter.is_inserted())
            .count()
    }

    /// Returns whether any letter in `start..=end` is an inserted letter.
    ///
    /// Out-of-range indices are treated as absent.
    #[must_use]
    pub fn has_inserted_in(&self, start: usize, end: usize) -> bool {
        self.letters
            .iter()
            .enumerate()
            .any(|(i, letter)| i >= start && i <= end && letter.is_inserted())
    }

    /// Returns a new word with `letter` inserted at `index`.
    ///
    /// An out-of-range index is clamped to the end of the word.
    #[must_use]
    pub fn with_inserted(&self, letter: TargetLetter, index: usize) -> Self {
        let index = index.min(self.letters.len());
        let mut letters = self.letters.clone();
        letters.insert(index, letter);
        Self { letters }
    }

    /// Returns a new word with the letter at `index` removed.
    ///
    /// Returns an unchanged clone if `index` is out of range.
    #[must_use]
    pub fn with_removed(&self, index: usize) -> Self {
        let mut letters = self.letters.clone();
        if index < letters.len() {
            letters.remove(index);
        }
        Self { letters }
    }

    /// Returns a new word with the inclusive range `start..=end` removed.
    ///
    /// The range is clamped to the word bounds; an inverted range leaves the
    /// word unchanged.
    #[must_use]
    pub fn with_range_removed(&self, start: usize, end: usize) -> Self {
        let mut letters = self.letters.clone();
        if start < letters.len() && start <= end {
            let end = end.min(letters.len() - 1);
            letters.drain(start..=end);
        }
        Self { letters }
    }
}

impl<'a> IntoIterator for &'a TargetWord {
    type Item = &'a TargetLetter;
    type IntoIter = std::slice::Iter<'a, TargetLetter>;

    fn into_iter(self) -> Self::IntoIter {
        self.letters.iter()
    }
}

/// The pool of letters available for insertion.
///
/// The sequence order is the fixed original-word order used by the
/// constraint engine's adjacency checks; each letter's `original_index`
/// equals its position here. Letters are never removed from the pool, only
/// transitioned between [`PoolLetterState`]s, and every mutator returns a
/// new sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolWord {
    letters: Vec<PoolLetter>,
}

impl PoolWord {
    /// Creates a pool from `word`, with all letters available and
    /// `original_index` set to each letter's position.
    #[must_use]
    pub fn new(word: &str) -> Self {
        let letters = word
            .chars()
            .enumerate()
            .map(|(original_index, value)| PoolLetter::new(value, original_index))
            .collect();
        Self { letters }
    }

    /// Returns the number of letters in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns whether the pool has no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns the letter with the given original index, if any.
    #[must_use]
    pub fn get(&self, original_index: usize) -> Option<&PoolLetter> {
        let letter = self.letters.get(original_index)?;
        debug_assert_eq!(letter.original_index(), original_index);
        Some(letter)
    }

    /// Iterates over the letters in original-word order.
    pub fn iter(&self) -> impl Iterator<Item = &PoolLetter> {
        self.letters.iter()
    }

    /// Returns the number of letters currently available for dragging.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.letters
            .iter()
            .filter(|letter| letter.is_available())
            .count()
    }

    /// Returns a new pool with the state of the letter at `original_index`
    /// replaced.
    ///
    /// Returns an unchanged clone if the index is out of range.
    #[must_use]
    pub fn with_state(&self, original_index: usize, state: PoolLetterState) -> Self {
        let mut letters = self.letters.clone();
        if let Some(letter) = letters.get_mut(original_index) {
            *letter = letter.with_state(state);
        }
        Self { letters }
    }
}

impl<'a> IntoIterator for &'a PoolWord {
    type Item = &'a PoolLetter;
    type IntoIter = std::slice::Iter<'a, PoolLetter>;

    fn into_iter(self) -> Self::IntoIter {
        self.letters.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inserted(value: char, original_index: usize) -> TargetLetter {
        TargetLetter::Inserted {
            value,
            original_index,
        }
    }

    #[test]
    fn backbone_word_positions_match_indices() {
        let word = TargetWord::backbone("dot");
        assert_eq!(word.len(), 3);
        assert_eq!(word.text(), "dot");
        for (i, letter) in word.iter().enumerate() {
            assert_eq!(letter.initial_position(), Some(i));
        }
        assert_eq!(word.inserted_count(), 0);
    }

    #[test]
    fn with_inserted_is_copy_on_write() {
        let word = TargetWord::backbone("dt");
        let grown = word.with_inserted(inserted('c', 0), 0);

        assert_eq!(word.text(), "dt");
        assert_eq!(grown.text(), "cdt");
        assert_eq!(grown.inserted_count(), 1);
    }

    #[test]
    fn with_inserted_clamps_out_of_range_index() {
        let word = TargetWord::backbone("dt");
        let grown = word.with_inserted(inserted('c', 0), 99);
        assert_eq!(grown.text(), "dtc");
    }

    #[test]
    fn with_removed_ignores_out_of_range_index() {
        let word = TargetWord::backbone("dot");
        assert_eq!(word.with_removed(1).text(), "dt");
        assert_eq!(word.with_removed(9).text(), "dot");
    }

    #[test]
    fn with_range_removed_clamps_to_bounds() {
        let word = TargetWord::backbone("cardt");
        assert_eq!(word.with_range_removed(0, 2).text(), "dt");
        assert_eq!(word.with_range_removed(3, 99).text(), "car");
        assert_eq!(word.with_range_removed(9, 12).text(), "cardt");
        assert_eq!(word.with_range_removed(0, 4).text(), "");
    }

    #[test]
    fn has_inserted_in_checks_only_the_range() {
        let word = TargetWord::backbone("dt").with_inserted(inserted('c', 0), 0);
        assert!(word.has_inserted_in(0, 0));
        assert!(word.has_inserted_in(0, 2));
        assert!(!word.has_inserted_in(1, 2));
    }

    #[test]
    fn pool_word_state_updates_are_copy_on_write() {
        let pool = PoolWord::new("car");
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.available_count(), 3);

        let placed = pool.with_state(1, PoolLetterState::Placed);
        assert_eq!(pool.available_count(), 3);
        assert_eq!(placed.available_count(), 2);
        assert!(placed.get(1).is_some_and(|l| l.state().is_placed()));

        // Out-of-range index leaves the pool unchanged.
        assert_eq!(placed.with_state(9, PoolLetterState::Completed), placed);
    }
}

//! The pre-resolved word set consumed by detection and generation.

use std::collections::HashSet;

/// A case-insensitive set of dictionary words.
///
/// The core performs no I/O; collaborators resolve, fetch, and filter their
/// word list however they like and hand the result in here. Words are
/// normalized to lowercase on construction and lookups lowercase the query,
/// so `contains` is case-insensitive.
///
/// # Examples
///
/// ```
/// use wordsurgery_core::Dictionary;
///
/// let dictionary: Dictionary = ["cat", "car", "art"].into_iter().collect();
/// assert!(dictionary.contains("car"));
/// assert!(dictionary.contains("CAR"));
/// assert!(!dictionary.contains("cab"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `word` is a dictionary member, ignoring case.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        let lowered = word.to_lowercase();
        lowered != word && self.words.contains(&lowered)
    }

    /// Returns the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns whether the dictionary holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the stored lowercase words in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|word| word.as_ref().to_lowercase())
            .collect();
        Self { words }
    }
}

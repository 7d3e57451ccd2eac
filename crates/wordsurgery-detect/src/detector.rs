//! Divide-and-conquer substring detection with per-call memoization.

use std::collections::HashMap;

use wordsurgery_core::{Dictionary, TargetWord};

/// Minimum length for a substring to count as a detected word.
pub const MIN_WORD_LENGTH: usize = 3;

/// A maximal dictionary match within the target word.
///
/// `start` and `end` are inclusive letter indexes into the target sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DetectedWord {
    /// The matched lowercase word.
    pub word: String,
    /// Index of the first letter of the match.
    pub start: usize,
    /// Index of the last letter of the match (inclusive).
    pub end: usize,
}

impl DetectedWord {
    /// Returns whether this match lies strictly inside `other` (same-range
    /// matches do not contain each other).
    #[must_use]
    fn is_contained_in(&self, other: &Self) -> bool {
        self.start >= other.start
            && self.end <= other.end
            && (self.start, self.end) != (other.start, other.end)
    }
}

/// Finds maximal dictionary matches in a target word.
///
/// The detector borrows the dictionary per call rather than caching anything
/// across calls: the memo table is scoped to a single [`detect`] invocation,
/// so swapping dictionaries between calls can never serve stale results.
///
/// # Examples
///
/// ```
/// use wordsurgery_core::{Dictionary, TargetLetter, TargetWord};
/// use wordsurgery_detect::{DetectedWord, WordDetector};
///
/// let dictionary: Dictionary = ["cat", "car", "art"].into_iter().collect();
/// let target = TargetWord::backbone("dt")
///     .with_inserted(TargetLetter::Inserted { value: 'c', original_index: 0 }, 0)
///     .with_inserted(TargetLetter::Inserted { value: 'a', original_index: 1 }, 1)
///     .with_inserted(TargetLetter::Inserted { value: 'r', original_index: 2 }, 2);
///
/// let detected = WordDetector::new(&dictionary).detect(&target);
/// assert_eq!(
///     detected,
///     vec![DetectedWord { word: "car".into(), start: 0, end: 2 }]
/// );
/// ```
///
/// [`detect`]: WordDetector::detect
#[derive(Debug, Clone, Copy)]
pub struct WordDetector<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> WordDetector<'a> {
    /// Creates a detector over the given dictionary.
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    /// Returns all maximal dictionary matches in `target` that contain at
    /// least one inserted letter.
    ///
    /// The result is deterministic for a given target and dictionary, holds
    /// no match strictly contained in another, and holds no duplicates. An
    /// empty or too-short target, or a target without any inserted letter,
    /// yields an empty result.
    #[must_use]
    pub fn detect(&self, target: &TargetWord) -> Vec<DetectedWord> {
        if target.is_empty() || target.len() < MIN_WORD_LENGTH {
            return Vec::new();
        }
        if target.inserted_count() == 0 {
            return Vec::new();
        }

        // One lowercase char per letter slot, so match indexes always line
        // up with target letter indexes.
        let text: Vec<char> = target
            .iter()
            .map(|letter| {
                letter
                    .value()
                    .to_lowercase()
                    .next()
                    .unwrap_or_else(|| letter.value())
            })
            .collect();

        let mut cache = HashMap::new();
        let raw = self.detect_range(&text, target, 0, text.len() - 1, &mut cache);
        log::trace!("raw detection produced {} match(es)", raw.len());

        // Deduplicate exact ranges (the two recursion branches overlap),
        // then drop matches strictly contained in a longer match.
        let mut unique: Vec<DetectedWord> = Vec::new();
        for matched in &raw {
            if !unique.contains(matched) {
                unique.push(matched.clone());
            }
        }
        unique.retain(|candidate| {
            !raw.iter()
                .any(|other| candidate.is_contained_in(other))
        });
        unique
    }

    /// Recursive matcher over the inclusive letter range `start..=end`.
    ///
    /// A matching range reports itself and stops recursing; below that, the
    /// range is split one letter at a time from each side and the results
    /// are unioned. The cache is keyed by `(start, end)` and lives only for
    /// the duration of one `detect` call.
    fn detect_range(
        &self,
        text: &[char],
        target: &TargetWord,
        start: usize,
        end: usize,
        cache: &mut HashMap<(usize, usize), Vec<DetectedWord>>,
    ) -> Vec<DetectedWord> {
        if let Some(cached) = cache.get(&(start, end)) {
            return cached.clone();
        }

        let substring: String = text[start..=end].iter().collect();
        if self.dictionary.contains(&substring) && target.has_inserted_in(start, end) {
            log::trace!("found {substring:?} at {start}..={end}");
            let result = vec![DetectedWord {
                word: substring,
                start,
                end,
            }];
            cache.insert((start, end), result.clone());
            return result;
        }

        if end - start + 1 <= MIN_WORD_LENGTH {
            cache.insert((start, end), Vec::new());
            return Vec::new();
        }

        let mut combined = self.detect_range(text, target, start, end - 1, cache);
        combined.extend(self.detect_range(text, target, start + 1, end, cache));
        cache.insert((start, end), combined.clone());
        combined
    }
}

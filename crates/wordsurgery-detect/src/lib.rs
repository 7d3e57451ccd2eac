//! Dictionary-word detection over a target word.
//!
//! Given the current [`TargetWord`] and a [`Dictionary`], the detector finds
//! every maximal dictionary-matching substring that contains at least one
//! player-inserted letter. Matches fully contained inside a longer match are
//! filtered out, so only the longest covering matches are reported.
//!
//! Detection is a pure read over the target: it never mutates game state,
//! and running it any number of times on the same target yields the same
//! result. Callers decide when to re-run it (typically after every target
//! mutation, optionally debounced).
//!
//! [`TargetWord`]: wordsurgery_core::TargetWord
//! [`Dictionary`]: wordsurgery_core::Dictionary

mod detector;

pub use self::detector::{DetectedWord, MIN_WORD_LENGTH, WordDetector};

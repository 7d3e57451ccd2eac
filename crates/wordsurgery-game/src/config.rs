//! Session construction options.

use std::num::NonZero;

use wordsurgery_generator::{DEFAULT_LENGTH_MAX, DEFAULT_LENGTH_MIN};

use crate::history::History;

/// Default countdown duration for a new session, in seconds.
pub const DEFAULT_GAME_DURATION_SECS: u32 = 120;

/// Options controlling how a session is created.
///
/// # Example
///
/// ```
/// use wordsurgery_game::SessionConfig;
///
/// let config = SessionConfig::default()
///     .length_band(4, 6)
///     .duration_secs(60)
///     .seed(42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub(crate) length_min: usize,
    pub(crate) length_max: usize,
    pub(crate) duration_secs: u32,
    pub(crate) history_capacity: NonZero<usize>,
    pub(crate) seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            length_min: DEFAULT_LENGTH_MIN,
            length_max: DEFAULT_LENGTH_MAX,
            duration_secs: DEFAULT_GAME_DURATION_SECS,
            history_capacity: History::default_capacity(),
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Sets the word-length band for generated pairs.
    #[must_use]
    pub const fn length_band(mut self, length_min: usize, length_max: usize) -> Self {
        self.length_min = length_min;
        self.length_max = length_max;
        self
    }

    /// Sets the countdown duration in seconds.
    #[must_use]
    pub const fn duration_secs(mut self, duration_secs: u32) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    /// Sets the maximum number of undo entries kept.
    #[must_use]
    pub const fn history_capacity(mut self, capacity: NonZero<usize>) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Fixes the RNG seed used for the initial word pair, making session
    /// creation reproducible. Resets always draw a fresh seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

//! Letter slots for the target word and the letter pool.

/// A letter occupying a slot in the target word.
///
/// A letter is either part of the immovable backbone (the original target
/// word) or a player-inserted letter that came from the pool. The two kinds
/// carry mutually exclusive bookkeeping: a backbone letter remembers its
/// position in the original word, an inserted letter remembers its fixed
/// index in the original pool word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TargetLetter {
    /// An immutable letter belonging to the original target word.
    Backbone {
        /// The character value.
        value: char,
        /// Position in the original target word.
        initial_position: usize,
    },
    /// A player-inserted letter from the pool.
    Inserted {
        /// The character value.
        value: char,
        /// Fixed index of this letter in the original pool word.
        original_index: usize,
    },
}

impl TargetLetter {
    /// Returns the character value of this letter.
    #[must_use]
    pub const fn value(&self) -> char {
        match *self {
            Self::Backbone { value, .. } | Self::Inserted { value, .. } => value,
        }
    }

    /// Returns the pool index for inserted letters, `None` for backbone letters.
    #[must_use]
    pub const fn original_index(&self) -> Option<usize> {
        match *self {
            Self::Backbone { .. } => None,
            Self::Inserted { original_index, .. } => Some(original_index),
        }
    }

    /// Returns the original-word position for backbone letters, `None` for
    /// inserted letters.
    #[must_use]
    pub const fn initial_position(&self) -> Option<usize> {
        match *self {
            Self::Backbone {
                initial_position, ..
            } => Some(initial_position),
            Self::Inserted { .. } => None,
        }
    }
}

/// Availability state of a pool letter.
///
/// State transitions: `Available -> Placed` on insertion into the target,
/// `Placed -> Available` on edge-letter tap removal, and
/// `Placed -> Completed` when the letter is consumed by a harvested word.
/// `Completed` is terminal; a harvested letter can never be dragged again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PoolLetterState {
    /// The letter sits in the pool and may be dragged.
    Available,
    /// The letter currently occupies a slot in the target word.
    Placed,
    /// The letter was consumed as part of a harvested word.
    Completed,
}

/// A letter in the pool word.
///
/// Pool letters are never removed from the pool sequence; they only change
/// [`PoolLetterState`]. The `original_index` equals the letter's position in
/// the original pool word and is the key used by the constraint engine's
/// adjacency checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolLetter {
    value: char,
    original_index: usize,
    state: PoolLetterState,
}

impl PoolLetter {
    /// Creates an available pool letter.
    #[must_use]
    pub const fn new(value: char, original_index: usize) -> Self {
        Self {
            value,
            original_index,
            state: PoolLetterState::Available,
        }
    }

    /// Returns the character value of this letter.
    #[must_use]
    pub const fn value(&self) -> char {
        self.value
    }

    /// Returns this letter's fixed index in the original pool word.
    #[must_use]
    pub const fn original_index(&self) -> usize {
        self.original_index
    }

    /// Returns the current availability state.
    #[must_use]
    pub const fn state(&self) -> PoolLetterState {
        self.state
    }

    /// Returns whether the letter may currently be dragged.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.state.is_available()
    }

    /// Returns a copy of this letter with the given state.
    #[must_use]
    pub const fn with_state(self, state: PoolLetterState) -> Self {
        Self { state, ..self }
    }
}

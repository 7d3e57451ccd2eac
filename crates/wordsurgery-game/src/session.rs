//! The game session controller.

use wordsurgery_core::{
    ChainRule, Dictionary, PlacementRecord, PoolLetter, PoolLetterState, PoolWord, TargetLetter,
    TargetWord,
};
use wordsurgery_detect::{DetectedWord, WordDetector};
use wordsurgery_generator::PairGenerator;

use crate::{
    SessionConfig,
    history::{History, Snapshot},
};

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GamePhase {
    /// Commands are accepted and the timer is running.
    Active,
    /// The player won: the board was cleared.
    Completed,
    /// The countdown expired while the game was still active.
    TimedOut,
}

/// Why a command left the session unchanged.
///
/// Commands never panic and never partially apply: a blocked command is a
/// no-op, and the reason is informational so callers can disable the
/// corresponding control rather than handle a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CommandBlocked {
    /// The session is in a terminal phase.
    #[display("the game is not active")]
    GameOver,
    /// No letter exists at the given index.
    #[display("no letter at that index")]
    NoSuchLetter,
    /// The pool letter is placed or already consumed by a harvest.
    #[display("the pool letter is not available")]
    LetterUnavailable,
    /// The pool letter is not adjacent to the placed chain.
    #[display("the pool letter is not adjacent to the placed chain")]
    IneligibleLetter,
    /// The insertion point is not the chain's unique growth point.
    #[display("the insertion point is not a legal destination")]
    InvalidDestination,
    /// A drag is already outstanding.
    #[display("a drag is already in progress")]
    DragInProgress,
    /// The command needs an active drag and none is outstanding.
    #[display("no drag is in progress")]
    NoActiveDrag,
    /// The target letter belongs to the immovable backbone.
    #[display("the letter belongs to the backbone")]
    BackboneLetter,
    /// Only the two ends of the placed chain may be tapped out.
    #[display("the letter is not at an end of the placed chain")]
    NotChainEnd,
    /// The detected word no longer matches the current target.
    #[display("the detected word is stale")]
    StaleWord,
    /// The undo stack is empty.
    #[display("nothing to undo")]
    NothingToUndo,
}

/// An interactive Word Surgery session.
///
/// Holds the target word, the letter pool, the placement record, the
/// detected-word list, the undo history, and the countdown. Every command
/// re-validates against current state before mutating, so out-of-order
/// gesture events degrade to blocked no-ops instead of corrupting state.
///
/// # Example
///
/// ```
/// use wordsurgery_core::Dictionary;
/// use wordsurgery_game::{GameSession, SessionConfig};
///
/// let dictionary: Dictionary = ["cat", "car", "art"].into_iter().collect();
/// let mut session =
///     GameSession::from_words(dictionary, "dt", "car", SessionConfig::default());
///
/// session.insert_letter(0, 0).unwrap(); // "cdt"
/// session.insert_letter(1, 1).unwrap(); // "cadt"
/// session.insert_letter(2, 2).unwrap(); // "cardt"
///
/// let detected = session.detected_words().to_vec();
/// assert_eq!(detected[0].word, "car");
/// session.remove_detected_word(&detected[0]).unwrap();
/// assert_eq!(session.target().text(), "dt");
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    dictionary: Dictionary,
    config: SessionConfig,
    target: TargetWord,
    pool: PoolWord,
    placement: PlacementRecord,
    detected: Vec<DetectedWord>,
    history: History,
    dragged: Option<usize>,
    time_remaining: u32,
    phase: GamePhase,
}

impl GameSession {
    /// Creates a session with a randomly generated word pair.
    ///
    /// `word_pool` is the caller's source of candidate words; `config`
    /// controls the length band, duration, and (optionally) the RNG seed.
    /// Pair generation never fails: a degenerate word pool falls back to a
    /// built-in pair.
    #[must_use]
    pub fn new(dictionary: Dictionary, word_pool: &[String], config: SessionConfig) -> Self {
        let generator = PairGenerator::with_lengths(config.length_min, config.length_max);
        let pair = match config.seed {
            Some(seed) => generator.generate_with_seed(word_pool, seed),
            None => generator.generate(word_pool),
        };
        log::debug!(
            "new session: target={:?} pool={:?} seed={}",
            pair.target,
            pair.pool,
            pair.seed
        );
        Self::from_words(dictionary, &pair.target, &pair.pool, config)
    }

    /// Creates a session from an explicit word pair.
    ///
    /// Useful for scripted play and tests; `new` goes through the pair
    /// generator instead.
    #[must_use]
    pub fn from_words(
        dictionary: Dictionary,
        target: &str,
        pool: &str,
        config: SessionConfig,
    ) -> Self {
        let mut session = Self {
            dictionary,
            config,
            target: TargetWord::backbone(target),
            pool: PoolWord::new(pool),
            placement: PlacementRecord::new(),
            detected: Vec::new(),
            history: History::with_capacity(config.history_capacity),
            dragged: None,
            time_remaining: config.duration_secs,
            phase: GamePhase::Active,
        };
        // The starting state is itself an undo point, so the player can
        // always unwind to the very beginning.
        let snapshot = session.snapshot();
        session.history.record(snapshot);
        session
    }

    /// Returns the word under construction.
    #[must_use]
    pub fn target(&self) -> &TargetWord {
        &self.target
    }

    /// Returns the letter pool.
    #[must_use]
    pub fn pool(&self) -> &PoolWord {
        &self.pool
    }

    /// Returns the placement record of currently placed pool letters.
    #[must_use]
    pub fn placement(&self) -> &PlacementRecord {
        &self.placement
    }

    /// Returns the most recently computed detected words.
    #[must_use]
    pub fn detected_words(&self) -> &[DetectedWord] {
        &self.detected
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the remaining time in seconds.
    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Returns whether an undo entry is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns the number of undo entries currently held.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// Returns the original index of the letter being dragged, if any.
    #[must_use]
    pub fn dragged_letter(&self) -> Option<usize> {
        self.dragged
    }

    /// Returns whether the pool letter at `original_index` may currently be
    /// picked up.
    ///
    /// True only for available letters that extend the placed chain (or any
    /// available letter while nothing is placed), and only while the game
    /// is active.
    #[must_use]
    pub fn is_letter_eligible(&self, original_index: usize) -> bool {
        self.phase.is_active()
            && self
                .pool
                .get(original_index)
                .is_some_and(PoolLetter::is_available)
            && ChainRule::new(&self.placement).is_letter_eligible(original_index)
    }

    /// Returns whether `insert_index` is a legal destination for the letter
    /// currently being dragged.
    ///
    /// Destinations only exist while a drag is active; without one this
    /// returns false for every index.
    #[must_use]
    pub fn is_destination_valid(&self, insert_index: usize) -> bool {
        let Some(original_index) = self.dragged else {
            return false;
        };
        ChainRule::new(&self.placement).is_destination_valid(
            original_index,
            insert_index,
            self.target.len(),
        )
    }

    /// Starts a drag of the pool letter at `original_index`.
    ///
    /// Parks the tentative undo snapshot; if the drag never ends in a valid
    /// placement, [`abort_drag`](Self::abort_drag) discards it and the undo
    /// stack is left untouched.
    ///
    /// # Errors
    ///
    /// Blocked when the game is over, a drag is already outstanding, or the
    /// letter is missing, unavailable, or ineligible. The session is
    /// unchanged on error.
    pub fn begin_drag(&mut self, original_index: usize) -> Result<(), CommandBlocked> {
        self.try_begin_drag(original_index).inspect_err(|reason| {
            log::debug!("drag of pool letter {original_index} blocked: {reason}");
        })
    }

    fn try_begin_drag(&mut self, original_index: usize) -> Result<(), CommandBlocked> {
        self.ensure_active()?;
        if self.dragged.is_some() {
            return Err(CommandBlocked::DragInProgress);
        }
        let letter = self
            .pool
            .get(original_index)
            .ok_or(CommandBlocked::NoSuchLetter)?;
        if !letter.is_available() {
            return Err(CommandBlocked::LetterUnavailable);
        }
        if !ChainRule::new(&self.placement).is_letter_eligible(original_index) {
            return Err(CommandBlocked::IneligibleLetter);
        }

        let snapshot = self.snapshot();
        self.history.begin_drag(snapshot);
        self.dragged = Some(original_index);
        log::debug!("drag started for pool letter {original_index}");
        Ok(())
    }

    /// Ends the outstanding drag without a placement.
    ///
    /// The tentative undo snapshot is discarded. Tolerates stray drag-end
    /// events: calling this with no drag outstanding is a no-op.
    pub fn abort_drag(&mut self) {
        if self.dragged.take().is_some() {
            log::debug!("drag aborted");
        }
        self.history.end_drag(false);
    }

    /// Places the pool letter at `original_index` into the target at
    /// `target_index`.
    ///
    /// If the letter is not already being dragged this behaves as a
    /// complete drag gesture (start, drop); if it is, this is the drop. On
    /// success the tentative snapshot becomes an undo entry, the placement
    /// record shifts, detection re-runs, and the win condition is checked.
    ///
    /// # Errors
    ///
    /// Blocked under the [`begin_drag`](Self::begin_drag) conditions, or
    /// when `target_index` is not the chain's unique growth point. The
    /// session is unchanged on error, and an implicitly started drag is
    /// aborted so no undo entry is created.
    pub fn insert_letter(
        &mut self,
        original_index: usize,
        target_index: usize,
    ) -> Result<(), CommandBlocked> {
        self.try_insert_letter(original_index, target_index)
            .inspect_err(|reason| {
                log::debug!(
                    "insert of pool letter {original_index} at {target_index} blocked: {reason}"
                );
            })
    }

    fn try_insert_letter(
        &mut self,
        original_index: usize,
        target_index: usize,
    ) -> Result<(), CommandBlocked> {
        if self.dragged != Some(original_index) {
            self.try_begin_drag(original_index)?;
        }
        match self.place_dragged(target_index) {
            Ok(()) => Ok(()),
            Err(reason) => {
                self.abort_drag();
                Err(reason)
            }
        }
    }

    fn place_dragged(&mut self, target_index: usize) -> Result<(), CommandBlocked> {
        self.ensure_active()?;
        let original_index = self.dragged.ok_or(CommandBlocked::NoActiveDrag)?;
        let letter = self
            .pool
            .get(original_index)
            .ok_or(CommandBlocked::NoSuchLetter)?;
        if !letter.is_available() {
            return Err(CommandBlocked::LetterUnavailable);
        }
        if !self.is_destination_valid(target_index) {
            return Err(CommandBlocked::InvalidDestination);
        }

        let inserted = TargetLetter::Inserted {
            value: letter.value(),
            original_index,
        };
        self.target = self.target.with_inserted(inserted, target_index);
        self.pool = self.pool.with_state(original_index, PoolLetterState::Placed);
        self.placement = self.placement.with_placed(original_index, target_index);
        debug_assert!(self.placement.is_contiguous());

        self.dragged = None;
        self.history.end_drag(true);
        self.refresh_detection();
        self.check_completion();
        log::debug!("placed pool letter {original_index} at {target_index}");
        Ok(())
    }

    /// Taps an inserted letter back out of the target.
    ///
    /// Only the two ends of the placed chain (by pool order) may be
    /// removed, preserving the chain invariant. The letter returns to the
    /// pool as available, unlike a harvested letter.
    ///
    /// # Errors
    ///
    /// Blocked when the game is over, the index is out of range, the letter
    /// is backbone, or it is not a chain end. The session is unchanged on
    /// error.
    pub fn remove_edge_letter(&mut self, target_index: usize) -> Result<(), CommandBlocked> {
        self.try_remove_edge_letter(target_index).inspect_err(|reason| {
            log::debug!("tap removal at {target_index} blocked: {reason}");
        })
    }

    fn try_remove_edge_letter(&mut self, target_index: usize) -> Result<(), CommandBlocked> {
        self.ensure_active()?;
        let letter = *self
            .target
            .get(target_index)
            .ok_or(CommandBlocked::NoSuchLetter)?;
        let TargetLetter::Inserted { original_index, .. } = letter else {
            return Err(CommandBlocked::BackboneLetter);
        };
        let is_chain_end = self.placement.min_placed() == Some(original_index)
            || self.placement.max_placed() == Some(original_index);
        if !is_chain_end {
            return Err(CommandBlocked::NotChainEnd);
        }

        let snapshot = self.snapshot();
        self.history.record(snapshot);

        self.target = self.target.with_removed(target_index);
        self.placement = self.placement.with_removed(original_index);
        self.pool = self
            .pool
            .with_state(original_index, PoolLetterState::Available);
        debug_assert!(self.placement.is_contiguous());

        self.refresh_detection();
        self.check_completion();
        log::debug!("tapped out pool letter {original_index} from {target_index}");
        Ok(())
    }

    /// Re-runs word detection on the current target and returns the result.
    ///
    /// Detection is recomputed after every mutating command already; this
    /// exists for collaborators that defer or debounce detection and want
    /// to converge on the latest target.
    pub fn detect_words(&mut self) -> Vec<DetectedWord> {
        self.refresh_detection();
        self.detected.clone()
    }

    /// Harvests a detected word.
    ///
    /// Removes the word's whole range from the target, backbone letters
    /// included. Every inserted letter in the range permanently retires its
    /// pool counterpart; recorded positions past the range shift down by
    /// the removed span.
    ///
    /// # Errors
    ///
    /// Blocked when the game is over or `word` is not in the current
    /// detected set (e.g. it was computed against an older target). The
    /// session is unchanged on error.
    pub fn remove_detected_word(&mut self, word: &DetectedWord) -> Result<(), CommandBlocked> {
        self.try_remove_detected_word(word).inspect_err(|reason| {
            log::debug!("harvest of {:?} blocked: {reason}", word.word);
        })
    }

    fn try_remove_detected_word(&mut self, word: &DetectedWord) -> Result<(), CommandBlocked> {
        self.ensure_active()?;
        if !self.detected.contains(word) {
            return Err(CommandBlocked::StaleWord);
        }

        let snapshot = self.snapshot();
        self.history.record(snapshot);

        let mut pool = self.pool.clone();
        for index in word.start..=word.end {
            if let Some(TargetLetter::Inserted { original_index, .. }) = self.target.get(index) {
                pool = pool.with_state(*original_index, PoolLetterState::Completed);
            }
        }
        self.pool = pool;
        self.target = self.target.with_range_removed(word.start, word.end);
        self.placement = self.placement.with_range_removed(word.start, word.end);
        debug_assert!(self.placement.is_contiguous());

        self.detected.clear();
        self.refresh_detection();
        self.check_completion();
        log::debug!(
            "harvested {:?} spanning {}..={}",
            word.word,
            word.start,
            word.end
        );
        Ok(())
    }

    /// Restores the state saved before the most recent undoable action.
    ///
    /// Target, pool, placement record, and detected words are replaced
    /// wholesale; an outstanding drag is dropped.
    ///
    /// # Errors
    ///
    /// Blocked when the game is over or the undo stack is empty. Callers
    /// should disable the undo control via [`can_undo`](Self::can_undo).
    pub fn undo(&mut self) -> Result<(), CommandBlocked> {
        self.try_undo()
            .inspect_err(|reason| log::debug!("undo blocked: {reason}"))
    }

    fn try_undo(&mut self) -> Result<(), CommandBlocked> {
        self.ensure_active()?;
        let snapshot = self.history.undo().ok_or(CommandBlocked::NothingToUndo)?;
        self.dragged = None;
        self.target = snapshot.target;
        self.pool = snapshot.pool;
        self.placement = snapshot.placement;
        self.detected = snapshot.detected;
        log::debug!("undo applied");
        Ok(())
    }

    /// Advances the countdown by `elapsed_secs` and returns the phase.
    ///
    /// The collaborator owns the actual clock; this only consumes elapsed
    /// time. Reaching zero while active ends the game as [`GamePhase::TimedOut`].
    pub fn tick(&mut self, elapsed_secs: u32) -> GamePhase {
        if self.phase.is_active() {
            self.time_remaining = self.time_remaining.saturating_sub(elapsed_secs);
            if self.time_remaining == 0 {
                self.phase = GamePhase::TimedOut;
                self.dragged = None;
                self.history.end_drag(false);
                log::debug!("countdown expired");
            }
        }
        self.phase
    }

    /// Starts a fresh game in place: a new word pair, a cleared history,
    /// and a re-armed timer.
    ///
    /// The pair is drawn with fresh entropy even when the session was
    /// created with a fixed seed.
    pub fn reset(&mut self, word_pool: &[String]) {
        let generator = PairGenerator::with_lengths(self.config.length_min, self.config.length_max);
        let pair = generator.generate(word_pool);
        log::debug!(
            "reset: target={:?} pool={:?} seed={}",
            pair.target,
            pair.pool,
            pair.seed
        );

        self.target = TargetWord::backbone(&pair.target);
        self.pool = PoolWord::new(&pair.pool);
        self.placement = PlacementRecord::new();
        self.detected = Vec::new();
        self.history.clear();
        self.dragged = None;
        self.time_remaining = self.config.duration_secs;
        self.phase = GamePhase::Active;

        let snapshot = self.snapshot();
        self.history.record(snapshot);
    }

    fn ensure_active(&self) -> Result<(), CommandBlocked> {
        if self.phase.is_active() {
            Ok(())
        } else {
            Err(CommandBlocked::GameOver)
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            target: self.target.clone(),
            pool: self.pool.clone(),
            placement: self.placement.clone(),
            detected: self.detected.clone(),
        }
    }

    fn refresh_detection(&mut self) {
        self.detected = WordDetector::new(&self.dictionary).detect(&self.target);
    }

    /// The player wins when the target is emptied, or when every pool
    /// letter has been retired with none left on the board.
    fn check_completion(&mut self) {
        let board_cleared = self.target.is_empty();
        let pool_exhausted = !self.pool.is_empty()
            && self.pool.available_count() == 0
            && self.placement.is_empty()
            && self.target.inserted_count() == 0;
        if board_cleared || pool_exhausted {
            self.phase = GamePhase::Completed;
            self.dragged = None;
            self.history.end_drag(false);
            log::debug!("game completed");
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use wordsurgery_core::{DropTarget, PoolLetterState};

    use super::*;
    use crate::DEFAULT_GAME_DURATION_SECS;

    fn dictionary(words: &[&str]) -> Dictionary {
        words.iter().copied().collect()
    }

    fn session(words: &[&str], target: &str, pool: &str) -> GameSession {
        GameSession::from_words(dictionary(words), target, pool, SessionConfig::default())
    }

    fn states(session: &GameSession) -> Vec<PoolLetterState> {
        session.pool().iter().map(PoolLetter::state).collect()
    }

    #[test]
    fn insert_builds_a_chain_in_pool_order() {
        let mut game = session(&["cat", "car", "art"], "dt", "car");

        game.insert_letter(0, 0).unwrap();
        assert_eq!(game.target().text(), "cdt");
        game.insert_letter(1, 1).unwrap();
        assert_eq!(game.target().text(), "cadt");
        game.insert_letter(2, 2).unwrap();
        assert_eq!(game.target().text(), "cardt");

        assert!(game.placement().is_contiguous());
        assert_eq!(game.pool().available_count(), 0);
    }

    #[test]
    fn non_adjacent_letter_is_blocked() {
        let mut game = session(&[], "dt", "car");
        game.insert_letter(0, 0).unwrap();

        // 'r' (index 2) has no placed neighbor; only 'a' (index 1) extends
        // the chain.
        assert_eq!(
            game.insert_letter(2, 1),
            Err(CommandBlocked::IneligibleLetter)
        );
        assert!(game.is_letter_eligible(1));
        assert!(!game.is_letter_eligible(2));
        assert_eq!(game.target().text(), "cdt");
    }

    #[test]
    fn wrong_destination_is_blocked_without_side_effects() {
        let mut game = session(&[], "dt", "car");
        game.insert_letter(0, 0).unwrap();
        let undo_depth = game.undo_depth();

        // 'a' must land immediately after 'c'.
        assert_eq!(
            game.insert_letter(1, 0),
            Err(CommandBlocked::InvalidDestination)
        );

        assert_eq!(game.target().text(), "cdt");
        assert_eq!(game.undo_depth(), undo_depth);
        assert_eq!(game.dragged_letter(), None);
    }

    #[test]
    fn first_letter_may_land_anywhere() {
        for index in 0..=2 {
            let mut game = session(&[], "dt", "car");
            assert!(game.is_letter_eligible(0));
            game.insert_letter(0, index).unwrap();
            assert_eq!(game.target().len(), 3);
        }
    }

    #[test]
    fn aborted_drag_changes_nothing() {
        let mut game = session(&[], "dt", "car");
        let before = game.snapshot();
        let undo_depth = game.undo_depth();

        game.begin_drag(0).unwrap();
        assert_eq!(game.dragged_letter(), Some(0));
        assert_eq!(game.begin_drag(1), Err(CommandBlocked::DragInProgress));
        game.abort_drag();

        assert_eq!(game.snapshot(), before);
        assert_eq!(game.undo_depth(), undo_depth);
        assert_eq!(game.dragged_letter(), None);

        // A stray drag-end with no drag outstanding is tolerated.
        game.abort_drag();
    }

    #[test]
    fn destination_validity_requires_an_active_drag() {
        let mut game = session(&[], "dt", "car");
        assert!(!game.is_destination_valid(0));

        game.begin_drag(0).unwrap();
        assert!(game.is_destination_valid(0));
        assert!(game.is_destination_valid(2));

        game.abort_drag();
        assert!(!game.is_destination_valid(0));
    }

    #[test]
    fn edge_letter_returns_to_the_pool() {
        let mut game = session(&[], "dt", "car");
        game.insert_letter(0, 0).unwrap();
        game.insert_letter(1, 1).unwrap();

        // 'c' at target index 0 is the low end of the chain.
        game.remove_edge_letter(0).unwrap();

        assert_eq!(game.target().text(), "adt");
        assert!(game.pool().get(0).is_some_and(PoolLetter::is_available));
        assert_eq!(game.placement().placed(), &[1]);
    }

    #[test]
    fn middle_and_backbone_letters_cannot_be_tapped_out() {
        let mut game = session(&[], "dt", "car");
        game.insert_letter(0, 0).unwrap();
        game.insert_letter(1, 1).unwrap();
        game.insert_letter(2, 2).unwrap();

        // Target is "cardt": 'a' sits between the chain ends.
        assert_eq!(game.remove_edge_letter(1), Err(CommandBlocked::NotChainEnd));
        assert_eq!(game.remove_edge_letter(3), Err(CommandBlocked::BackboneLetter));
        assert_eq!(game.remove_edge_letter(9), Err(CommandBlocked::NoSuchLetter));
        assert_eq!(game.target().text(), "cardt");
    }

    #[test]
    fn harvest_retires_letters_and_completes_the_game() {
        let mut game = session(&["cat", "car", "art"], "dt", "car");
        game.insert_letter(0, 0).unwrap();
        game.insert_letter(1, 1).unwrap();
        game.insert_letter(2, 2).unwrap();

        let detected = game.detected_words().to_vec();
        assert_eq!(detected.len(), 1);
        assert_eq!(detected[0].word, "car");
        assert_eq!((detected[0].start, detected[0].end), (0, 2));

        game.remove_detected_word(&detected[0]).unwrap();

        assert_eq!(game.target().text(), "dt");
        assert!(game.placement().is_empty());
        assert_eq!(
            states(&game),
            [
                PoolLetterState::Completed,
                PoolLetterState::Completed,
                PoolLetterState::Completed,
            ]
        );
        // Every pool letter is retired and none remains on the board.
        assert_eq!(game.phase(), GamePhase::Completed);
    }

    #[test]
    fn harvest_shifts_surviving_placements_down() {
        let mut game = session(&["art"], "ar", "tx");
        game.insert_letter(0, 2).unwrap(); // "art"
        game.insert_letter(1, 3).unwrap(); // "artx"

        let detected = game.detected_words().to_vec();
        assert_eq!(detected[0].word, "art");
        game.remove_detected_word(&detected[0]).unwrap();

        assert_eq!(game.target().text(), "x");
        assert_eq!(game.placement().position_of(1), Some(0));
        assert!(game.placement().is_contiguous());
        assert!(game.pool().get(0).is_some_and(|l| l.state().is_completed()));
        assert_eq!(game.phase(), GamePhase::Active);
    }

    #[test]
    fn tapping_out_the_last_letter_clears_the_board() {
        let mut game = session(&["art"], "ar", "tx");
        game.insert_letter(0, 2).unwrap(); // "art"
        game.insert_letter(1, 3).unwrap(); // "artx"

        let detected = game.detected_words().to_vec();
        game.remove_detected_word(&detected[0]).unwrap();
        assert_eq!(game.target().text(), "x");
        assert_eq!(game.phase(), GamePhase::Active);

        // The whole backbone was harvested away; tapping out the one
        // remaining letter empties the board.
        game.remove_edge_letter(0).unwrap();

        assert!(game.target().is_empty());
        assert_eq!(game.phase(), GamePhase::Completed);
    }

    #[test]
    fn stale_detected_word_is_rejected() {
        let mut game = session(&["cat", "car", "art"], "dt", "car");
        game.insert_letter(0, 0).unwrap();
        game.insert_letter(1, 1).unwrap();
        game.insert_letter(2, 2).unwrap();

        let detected = game.detected_words().to_vec();
        game.remove_edge_letter(0).unwrap();

        assert_eq!(
            game.remove_detected_word(&detected[0]),
            Err(CommandBlocked::StaleWord)
        );
        assert_eq!(game.target().text(), "ardt");
    }

    #[test]
    fn emptying_the_target_wins() {
        let mut game = session(&["cat"], "ct", "a");
        game.insert_letter(0, 1).unwrap();

        let detected = game.detected_words().to_vec();
        assert_eq!(detected[0].word, "cat");
        game.remove_detected_word(&detected[0]).unwrap();

        assert!(game.target().is_empty());
        assert_eq!(game.phase(), GamePhase::Completed);
        assert_eq!(game.insert_letter(0, 0), Err(CommandBlocked::GameOver));
    }

    #[test]
    fn undo_restores_the_previous_state() {
        let mut game = session(&["cat", "car", "art"], "dt", "car");
        game.insert_letter(0, 0).unwrap();
        let after_first = game.snapshot();

        game.insert_letter(1, 1).unwrap();
        game.undo().unwrap();

        assert_eq!(game.snapshot(), after_first);
        assert!(game.pool().get(1).is_some_and(PoolLetter::is_available));
    }

    #[test]
    fn undo_unwinds_all_the_way_to_the_start() {
        let mut game = session(&[], "dt", "car");
        let start = game.snapshot();
        game.insert_letter(0, 0).unwrap();

        game.undo().unwrap();
        assert_eq!(game.snapshot(), start);

        // The initial snapshot is itself an undo point.
        assert!(game.can_undo());
        game.undo().unwrap();
        assert_eq!(game.snapshot(), start);
        assert_eq!(game.undo(), Err(CommandBlocked::NothingToUndo));
    }

    #[test]
    fn undo_drops_an_outstanding_drag() {
        let mut game = session(&[], "dt", "car");
        game.insert_letter(0, 0).unwrap();
        game.begin_drag(1).unwrap();

        game.undo().unwrap();

        assert_eq!(game.dragged_letter(), None);
        assert_eq!(game.target().text(), "dt");
    }

    #[test]
    fn countdown_expiry_ends_the_game() {
        let mut game = session(&[], "dt", "car");
        assert_eq!(game.tick(30), GamePhase::Active);
        assert_eq!(game.time_remaining(), 90);

        assert_eq!(game.tick(1000), GamePhase::TimedOut);
        assert_eq!(game.time_remaining(), 0);
        assert_eq!(game.begin_drag(0), Err(CommandBlocked::GameOver));
        assert_eq!(game.undo(), Err(CommandBlocked::GameOver));

        // Further ticks keep reporting the terminal phase.
        assert_eq!(game.tick(1), GamePhase::TimedOut);
    }

    #[test]
    fn reset_starts_a_fresh_game() {
        let words: Vec<String> = ["planet", "stream"].iter().map(ToString::to_string).collect();
        let mut game = session(&[], "dt", "car");
        game.insert_letter(0, 0).unwrap();
        game.tick(50);

        game.reset(&words);

        assert_eq!(game.phase(), GamePhase::Active);
        assert_eq!(game.time_remaining(), DEFAULT_GAME_DURATION_SECS);
        assert!(game.placement().is_empty());
        assert_eq!(game.target().inserted_count(), 0);
        assert_eq!(game.pool().available_count(), game.pool().len());
        // Only the fresh initial snapshot remains.
        assert_eq!(game.undo_depth(), 1);
    }

    #[test]
    fn seeded_sessions_are_reproducible() {
        let words: Vec<String> = ["planet", "stream", "copper", "silver"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let config = SessionConfig::default().seed(7);

        let first = GameSession::new(dictionary(&[]), &words, config);
        let second = GameSession::new(dictionary(&[]), &words, config);

        assert_eq!(first.target().text(), second.target().text());
        assert_eq!(first.pool().len(), second.pool().len());
    }

    /// Plays one randomly chosen legal insertion and returns whether a
    /// letter was placed.
    fn play_random_insertion(
        game: &mut GameSession,
        choice: proptest::sample::Index,
    ) -> Result<bool, proptest::test_runner::TestCaseError> {
        let eligible: Vec<usize> = (0..game.pool().len())
            .filter(|&index| game.is_letter_eligible(index))
            .collect();
        if eligible.is_empty() {
            return Ok(false);
        }
        let original_index = eligible[choice.index(eligible.len())];
        let target_index = match ChainRule::new(game.placement()).drop_target(original_index) {
            DropTarget::Anywhere => choice.index(game.target().len() + 1),
            DropTarget::At(position) => position,
            DropTarget::Blocked => unreachable!("eligible letter has a drop target"),
        };
        prop_assert!(game.insert_letter(original_index, target_index).is_ok());
        Ok(true)
    }

    proptest! {
        /// Any sequence of legal insertions keeps the placed pool letters a
        /// contiguous run in pool-order space.
        #[test]
        fn random_legal_insertions_keep_the_chain_contiguous(
            backbone in "[a-z]{1,4}",
            pool in "[a-z]{1,8}",
            choices in proptest::collection::vec(any::<proptest::sample::Index>(), 0..12),
        ) {
            let mut game = session(&[], &backbone, &pool);
            for choice in choices {
                if !play_random_insertion(&mut game, choice)? {
                    break;
                }
                prop_assert!(game.placement().is_contiguous());
            }
        }

        /// Undoing as many times as letters were placed restores the full
        /// starting state: target, pool, placement record, and detections.
        #[test]
        fn undo_rewinds_random_play_to_the_start(
            pool in "[a-z]{2,6}",
            choices in proptest::collection::vec(any::<proptest::sample::Index>(), 1..8),
        ) {
            let mut game = session(&[], "dt", &pool);
            let start = game.snapshot();

            let mut placed = 0;
            for choice in choices {
                if !play_random_insertion(&mut game, choice)? {
                    break;
                }
                placed += 1;
            }

            for _ in 0..placed {
                prop_assert!(game.undo().is_ok());
            }
            prop_assert_eq!(game.snapshot(), start);
        }
    }
}

//! Word Surgery session management.
//!
//! A [`GameSession`] owns everything a running game needs: the target word
//! and letter pool, the placement-constraint engine, word detection, a
//! bounded undo history, and the countdown. It exposes gesture-shaped
//! commands (`begin_drag`, `insert_letter`, `remove_edge_letter`,
//! `remove_detected_word`, `undo`) that validate against current state and
//! reject out-of-order events as no-ops, so the session stays consistent no
//! matter how a frontend sequences its input.
//!
//! ```
//! use wordsurgery_core::Dictionary;
//! use wordsurgery_game::{GamePhase, GameSession, SessionConfig};
//!
//! let dictionary: Dictionary = ["cat"].into_iter().collect();
//! let mut session =
//!     GameSession::from_words(dictionary, "ct", "a", SessionConfig::default());
//!
//! session.insert_letter(0, 1).unwrap();
//! let word = session.detected_words()[0].clone();
//! session.remove_detected_word(&word).unwrap();
//! assert_eq!(session.phase(), GamePhase::Completed);
//! ```

mod config;
mod history;
mod session;
mod undo_stack;

pub use wordsurgery_detect::DetectedWord;

pub use self::{
    config::{DEFAULT_GAME_DURATION_SECS, SessionConfig},
    session::{CommandBlocked, GamePhase, GameSession},
};

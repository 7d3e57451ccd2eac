//! Core data structures for the Word Surgery puzzle.
//!
//! This crate provides the data model and the placement-constraint engine
//! shared by the detection, generation, and game-session components.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Letters** - Type-safe letter slots
//!    - [`letter`]: [`TargetLetter`] (backbone vs. inserted) and
//!      [`PoolLetter`] with its availability state.
//!
//! 2. **Sequences** - Copy-on-write ordered letter collections
//!    - [`word`]: [`TargetWord`] (the word under construction) and
//!      [`PoolWord`] (the fixed-order letter pool). Every mutation yields a
//!      new value, so history snapshots are independent by construction.
//!    - [`placement`]: [`PlacementRecord`], the mapping from a pool letter's
//!      original index to its live position in the target.
//!
//! 3. **Constraint engine** - Chain-ordering legality
//!    - [`chain`]: [`ChainRule`], which decides both which pool letters may
//!      currently move and where they may land, derived from a single
//!      canonical drop-target computation.
//!
//! The [`dictionary`] module holds the pre-resolved, case-insensitive word
//! set that collaborators pass in; this crate performs no I/O.
//!
//! # Examples
//!
//! ```
//! use wordsurgery_core::{ChainRule, DropTarget, PlacementRecord};
//!
//! let record = PlacementRecord::new();
//!
//! // Before any placement, every pool letter may go anywhere.
//! assert_eq!(ChainRule::new(&record).drop_target(2), DropTarget::Anywhere);
//!
//! // After placing pool letter 2 at target position 4, only its pool
//! // neighbors may move, each to exactly one position.
//! let record = record.with_placed(2, 4);
//! let rule = ChainRule::new(&record);
//! assert_eq!(rule.drop_target(1), DropTarget::At(4));
//! assert_eq!(rule.drop_target(3), DropTarget::At(5));
//! assert_eq!(rule.drop_target(0), DropTarget::Blocked);
//! ```

pub mod chain;
pub mod dictionary;
pub mod letter;
pub mod placement;
pub mod word;

// Re-export commonly used types
pub use self::{
    chain::{ChainRule, DropTarget},
    dictionary::Dictionary,
    letter::{PoolLetter, PoolLetterState, TargetLetter},
    placement::PlacementRecord,
    word::{PoolWord, TargetWord},
};

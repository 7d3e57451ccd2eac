//! Random word-pair generation for new game sessions.
//!
//! A session needs two independent words drawn from the caller's word pool:
//! the backbone (target) word and the pool word whose letters the player
//! relocates. This crate picks them at random within a configured length
//! band, with a bounded attempt budget and a fixed built-in fallback pair,
//! so pair generation never fails even for degenerate word pools.
//!
//! Generation is reproducible: every generated pair carries the seed that
//! produced it, and [`PairGenerator::generate_with_seed`] replays it.
//!
//! # Examples
//!
//! ```
//! use wordsurgery_generator::PairGenerator;
//!
//! let words: Vec<String> = ["planet", "bridge", "candle"]
//!     .into_iter()
//!     .map(str::to_owned)
//!     .collect();
//!
//! let generator = PairGenerator::new();
//! let pair = generator.generate(&words);
//! let replayed = generator.generate_with_seed(&words, pair.seed);
//! assert_eq!(pair.target, replayed.target);
//! assert_eq!(pair.pool, replayed.pool);
//! ```

mod pair;

pub use self::pair::{
    DEFAULT_LENGTH_MAX, DEFAULT_LENGTH_MIN, FALLBACK_POOL, FALLBACK_TARGET, GeneratedPair,
    PairGenerator,
};

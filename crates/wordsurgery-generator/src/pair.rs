//! Seeded selection of a target/pool word pair.

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

/// Default minimum word length for generated pairs.
pub const DEFAULT_LENGTH_MIN: usize = 5;
/// Default maximum word length for generated pairs.
pub const DEFAULT_LENGTH_MAX: usize = 8;

/// Built-in fallback target word, used when the word pool yields no
/// qualifying word within the attempt budget.
pub const FALLBACK_TARGET: &str = "caravan";
/// Built-in fallback pool word.
pub const FALLBACK_POOL: &str = "mineral";

const MAX_ATTEMPTS: usize = 1000;

/// A generated target/pool word pair together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPair {
    /// The backbone (target) word.
    pub target: String,
    /// The pool word whose letters the player relocates.
    pub pool: String,
    /// RNG seed; replaying it through
    /// [`PairGenerator::generate_with_seed`] reproduces this pair.
    pub seed: u64,
}

impl GeneratedPair {
    /// Returns whether this is the built-in fallback pair.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.target == FALLBACK_TARGET && self.pool == FALLBACK_POOL
    }
}

/// Picks two independent random words from a word pool within a length band.
///
/// Lengths are measured in characters. Words shorter than `length_min` or
/// longer than `length_max` are skipped; after 1000 draws without a
/// qualifying word, the built-in fallback pair is used so a session always
/// exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairGenerator {
    length_min: usize,
    length_max: usize,
}

impl Default for PairGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PairGenerator {
    /// Creates a generator with the default 5-8 length band.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            length_min: DEFAULT_LENGTH_MIN,
            length_max: DEFAULT_LENGTH_MAX,
        }
    }

    /// Creates a generator with a custom length band.
    ///
    /// An inverted band (`length_min > length_max`) matches no word and
    /// always produces the fallback pair.
    #[must_use]
    pub const fn with_lengths(length_min: usize, length_max: usize) -> Self {
        Self {
            length_min,
            length_max,
        }
    }

    /// Generates a pair with a fresh OS-entropy seed.
    #[must_use]
    pub fn generate(&self, words: &[String]) -> GeneratedPair {
        let seed = rand::rng().random();
        self.generate_with_seed(words, seed)
    }

    /// Generates the pair determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, words: &[String], seed: u64) -> GeneratedPair {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);

        let target = self.pick_word(words, &mut rng);
        let pool = self.pick_word(words, &mut rng);

        match (target, pool) {
            (Some(target), Some(pool)) => GeneratedPair { target, pool, seed },
            _ => {
                log::warn!(
                    "no qualifying word pair within {MAX_ATTEMPTS} attempts, \
                     using fallback pair"
                );
                GeneratedPair {
                    target: FALLBACK_TARGET.to_owned(),
                    pool: FALLBACK_POOL.to_owned(),
                    seed,
                }
            }
        }
    }

    fn pick_word(&self, words: &[String], rng: &mut Pcg64Mcg) -> Option<String> {
        if words.is_empty() {
            return None;
        }
        for _ in 0..MAX_ATTEMPTS {
            let candidate = &words[rng.random_range(0..words.len())];
            let len = candidate.chars().count();
            if len >= self.length_min && len <= self.length_max {
                return Some(candidate.to_lowercase());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_pool(words: &[&str]) -> Vec<String> {
        words.iter().map(|&word| word.to_owned()).collect()
    }

    #[test]
    fn generated_words_respect_the_length_band() {
        let words = word_pool(&["a", "be", "planet", "bridge", "encyclopedia"]);
        let generator = PairGenerator::new();

        for seed in 0..50 {
            let pair = generator.generate_with_seed(&words, seed);
            assert!(!pair.is_fallback());
            for word in [&pair.target, &pair.pool] {
                let len = word.chars().count();
                assert!((DEFAULT_LENGTH_MIN..=DEFAULT_LENGTH_MAX).contains(&len));
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_pair() {
        let words = word_pool(&["planet", "bridge", "candle", "stream"]);
        let generator = PairGenerator::new();

        let first = generator.generate_with_seed(&words, 42);
        let second = generator.generate_with_seed(&words, 42);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_word_pool_falls_back() {
        let generator = PairGenerator::new();
        let pair = generator.generate_with_seed(&[], 7);
        assert!(pair.is_fallback());
        assert_eq!(pair.target, FALLBACK_TARGET);
        assert_eq!(pair.pool, FALLBACK_POOL);
    }

    #[test]
    fn band_with_no_qualifying_word_falls_back() {
        let words = word_pool(&["hi", "to", "at"]);
        let pair = PairGenerator::new().generate_with_seed(&words, 3);
        assert!(pair.is_fallback());
    }

    #[test]
    fn inverted_band_falls_back() {
        let words = word_pool(&["planet"]);
        let pair = PairGenerator::with_lengths(8, 5).generate_with_seed(&words, 1);
        assert!(pair.is_fallback());
    }

    #[test]
    fn picked_words_are_lowercased() {
        let words = word_pool(&["PLANET"]);
        let pair = PairGenerator::new().generate_with_seed(&words, 9);
        assert_eq!(pair.target, "planet");
        assert_eq!(pair.pool, "planet");
    }
}

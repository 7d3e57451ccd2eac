//! Example demonstrating word-pair generation.
//!
//! This example shows how to:
//! - Create a `PairGenerator` with a custom length band
//! - Generate a random pair from a word list file
//! - Replay a pair from its seed
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_pair -- --words /usr/share/dict/words
//! ```
//!
//! Replay a specific seed:
//!
//! ```sh
//! cargo run --example generate_pair -- --words /usr/share/dict/words --seed 42
//! ```
//!
//! Adjust the length band:
//!
//! ```sh
//! cargo run --example generate_pair -- --words /usr/share/dict/words --min 4 --max 6
//! ```

use std::{fs, path::PathBuf, process};

use clap::Parser;
use wordsurgery_generator::PairGenerator;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to a newline-separated word list.
    #[arg(long, value_name = "FILE")]
    words: PathBuf,

    /// Seed to replay; a fresh one is drawn when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Minimum word length.
    #[arg(long, value_name = "LEN", default_value_t = 5)]
    min: usize,

    /// Maximum word length.
    #[arg(long, value_name = "LEN", default_value_t = 8)]
    max: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let words = match fs::read_to_string(&args.words) {
        Ok(contents) => contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect::<Vec<_>>(),
        Err(err) => {
            eprintln!("failed to read {}: {err}", args.words.display());
            process::exit(1);
        }
    };

    let generator = PairGenerator::with_lengths(args.min, args.max);
    let pair = match args.seed {
        Some(seed) => generator.generate_with_seed(&words, seed),
        None => generator.generate(&words),
    };

    println!("Seed:");
    println!("  {}", pair.seed);
    println!();
    println!("Target:");
    println!("  {}", pair.target);
    println!();
    println!("Pool:");
    println!("  {}", pair.pool);
    if pair.is_fallback() {
        println!();
        println!("(built-in fallback pair)");
    }
}

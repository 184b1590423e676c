//! Example demonstrating seeded puzzle generation.
//!
//! Generates the puzzle for a seed string (a calendar date in the daily
//! deployment) and prints the question view, the answer view, and the
//! serialized wire form.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle -- 2026-08-25
//! ```
//!
//! Increase the retry bound for adversarial seeds:
//!
//! ```sh
//! cargo run --example generate_puzzle -- 2026-08-25 --max-attempts 100000
//! ```

use std::process;

use clap::Parser;
use crossmath_generator::{PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed string, e.g. a calendar date.
    #[arg(default_value = "2026-08-25")]
    seed: String,

    /// Maximum salted attempts before giving up.
    #[arg(long, value_name = "COUNT", default_value_t = PuzzleGenerator::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let generator = PuzzleGenerator::default().max_attempts(args.max_attempts);
    let seed = PuzzleSeed::new(args.seed);
    let generated = match generator.generate(&seed) {
        Ok(generated) => generated,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    println!("seed: {} (salt {})", generated.seed(), generated.salt());
    println!();
    println!("question:");
    println!("{}", generated.problem());
    println!("answer:");
    println!("{}", generated.puzzle());
    println!("wire form: {:?}", generated.puzzle().to_data());
}

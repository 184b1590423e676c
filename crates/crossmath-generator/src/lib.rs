//! Seeded generation of solvable cross-math puzzles.
//!
//! A [`PuzzleGenerator`] turns a seed string (for example a calendar
//! date) into a puzzle that is guaranteed to be solvable by the solver's
//! technique set and whose six targets are whole numbers within the
//! playable range. Generation is a deterministic function of the seed:
//! unsuitable draws are rejected and retried with an incrementing salt
//! appended to the seed, so the same seed always yields the same puzzle.
//!
//! # Examples
//!
//! ```
//! use crossmath_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::default();
//! let seed = PuzzleSeed::new("2026-08-25");
//!
//! let puzzle = generator.generate(&seed)?;
//! let again = generator.generate(&seed)?;
//! assert_eq!(puzzle, again);
//! # Ok::<(), crossmath_generator::GenerateError>(())
//! ```

mod generator;
mod seed;

pub use self::{
    generator::{GeneratedPuzzle, GenerateError, PuzzleGenerator, TARGET_RANGE},
    seed::PuzzleSeed,
};

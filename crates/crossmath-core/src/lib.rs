//! Core value types for 3×3 cross-math puzzles.
//!
//! A cross-math puzzle places the digits 1–9 into a 3×3 grid, each digit
//! used exactly once, so that six equations hold: one per row and one per
//! column, each of the form `(a OP1 b) OP2 c` evaluated strictly left to
//! right with no operator precedence.
//!
//! This crate defines the data model shared by the solver and generator:
//!
//! - [`DigitSet`] — the set of digits still possible for one cell
//! - [`CandidateGrid`] — the 3×3 grid of candidate sets
//! - [`Operator`] and [`Ratio`] — exact left-to-right expression arithmetic
//! - [`Line`] and [`LineSpec`] — one row or column equation
//! - [`Puzzle`] — a complete puzzle instance with its wire form
//!   [`PuzzleData`]
//!
//! # Examples
//!
//! ```
//! use crossmath_core::{LineSpec, Operator, Ratio};
//!
//! // (8 - 6) * 7 == 14
//! let spec = LineSpec::new([Operator::Sub, Operator::Mul], 14);
//! assert!(spec.is_satisfied([8, 6, 7]));
//!
//! // Division is true division, never truncating.
//! let spec = LineSpec::new([Operator::Div, Operator::Add], 5);
//! assert_eq!(spec.evaluate([7, 2, 1]), Ratio::new(9, 2));
//! assert!(!spec.is_satisfied([7, 2, 1]));
//! ```

mod digit_set;
mod grid;
mod line;
mod operator;
mod puzzle;
mod ratio;

pub use self::{
    digit_set::{DigitSet, DigitSetIter},
    grid::CandidateGrid,
    line::{Line, LineSpec},
    operator::Operator,
    puzzle::{Puzzle, PuzzleData, StructuralError},
    ratio::Ratio,
};

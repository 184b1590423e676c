//! Constraint propagation and bounded speculative search for cross-math
//! puzzles.
//!
//! The solver works in three layers:
//!
//! - [`propagate`] runs fixpoint constraint propagation: grid-wide
//!   elimination of fixed digits (the solved grid is a permutation of
//!   1–9, so a digit fixed anywhere is impossible everywhere else) plus
//!   narrowing of each line whose equation has only one unknown left.
//! - [`prune_by_assumption`] performs depth-bounded what-if elimination:
//!   tentatively fix a cell in an isolated branch, propagate, and remove
//!   candidates whose branches run into contradiction. A [`Budget`]
//!   limits the number of scan passes.
//! - [`Solver`] orchestrates: propagate to fixpoint, then escalate the
//!   assumption depth (0, 1, 2), restarting from propagation after every
//!   change, until the puzzle is solved or no rule makes progress.
//!
//! # Examples
//!
//! ```
//! use crossmath_core::{Operator::*, Puzzle};
//! use crossmath_solver::Solver;
//!
//! let mut puzzle = Puzzle::with_full_candidates(
//!     [[Sub, Mul], [Add, Div], [Mul, Sub]],
//!     [[Sub, Sub, Add], [Sub, Add, Div]],
//!     [14, 2, 4],
//!     [5, 11, 2],
//! );
//!
//! let solved = Solver::new().solve(&mut puzzle)?;
//! assert!(solved);
//! assert_eq!(
//!     puzzle.fixed_digits(),
//!     Some([[8, 6, 7], [2, 4, 3], [1, 9, 5]])
//! );
//! # Ok::<(), crossmath_solver::SolverError>(())
//! ```

mod assumption;
mod error;
mod propagate;
mod solver;

pub use self::{
    assumption::{Budget, prune_by_assumption},
    error::SolverError,
    propagate::propagate,
    solver::{Solver, is_solved},
};

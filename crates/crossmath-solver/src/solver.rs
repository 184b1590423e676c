//! The escalation orchestrator.

use crossmath_core::Puzzle;
use log::debug;

use crate::{Budget, SolverError, propagate, prune_by_assumption};

/// Solves a puzzle by escalating from pure propagation through ever
/// deeper assumption search.
///
/// One solve attempt runs propagation to fixpoint, then assumption
/// search at depth 0, 1, and finally 2, restarting from propagation
/// whenever any stage changes the grid. The attempt ends solved when
/// every cell is fixed (and the propagation pass that just ran from that
/// state is the consistency re-validation), or stuck when no stage makes
/// progress — an ambiguous or under-constrained puzzle.
///
/// # Examples
///
/// ```
/// use crossmath_core::{Operator::*, Puzzle};
/// use crossmath_solver::Solver;
///
/// let mut puzzle = Puzzle::with_full_candidates(
///     [[Sub, Mul], [Add, Div], [Mul, Sub]],
///     [[Sub, Sub, Add], [Sub, Add, Div]],
///     [14, 2, 4],
///     [5, 11, 2],
/// );
/// assert!(Solver::new().solve(&mut puzzle)?);
/// # Ok::<(), crossmath_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solver {
    budget_limit: u32,
    max_depth: u8,
}

impl Solver {
    /// Creates a solver with the standard limits: a budget of
    /// [`Budget::DEFAULT_LIMIT`] scan passes and escalation up to
    /// depth 2.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            budget_limit: Budget::DEFAULT_LIMIT,
            max_depth: 2,
        }
    }

    /// Creates a solver with explicit limits.
    #[must_use]
    pub const fn with_limits(budget_limit: u32, max_depth: u8) -> Self {
        Self {
            budget_limit,
            max_depth,
        }
    }

    /// Runs one solve attempt on the puzzle, mutating it in place.
    ///
    /// Returns `Ok(true)` if the puzzle ended fully solved, `Ok(false)`
    /// if every stage stalled without a detected contradiction.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] or
    /// [`SolverError::BudgetExhausted`]; either way the attempt failed
    /// and the puzzle is left in its partially mutated state.
    pub fn solve(&self, puzzle: &mut Puzzle) -> Result<bool, SolverError> {
        let mut budget = Budget::new(self.budget_limit);
        loop {
            propagate(puzzle)?;
            if puzzle.is_complete() {
                debug!("solved with {} budget remaining", budget.remaining());
                return Ok(true);
            }
            let before = *puzzle.grid();
            let mut changed = false;
            for depth in 0..=self.max_depth {
                debug!(
                    "stalled, assumption search at depth {depth} ({} budget remaining)",
                    budget.remaining()
                );
                prune_by_assumption(puzzle, depth, &mut budget)?;
                if *puzzle.grid() != before {
                    changed = true;
                    break;
                }
            }
            if !changed {
                debug!("no stage made progress, giving up");
                return Ok(false);
            }
        }
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns `true` if the puzzle is fully solved *and* consistent.
///
/// This runs propagation from the current state as the consistency
/// check, so it mutates the puzzle. Use [`Puzzle::is_complete`] for the
/// pure cardinality half of the question.
pub fn is_solved(puzzle: &mut Puzzle) -> bool {
    puzzle.is_complete() && propagate(puzzle).is_ok()
}

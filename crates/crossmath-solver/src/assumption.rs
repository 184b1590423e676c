//! Depth-bounded what-if candidate elimination.

use crossmath_core::{CandidateGrid, DigitSet, Puzzle};
use log::trace;

use crate::{SolverError, propagate};

/// Iteration budget for one solve attempt's assumption searches.
///
/// Every outer scan pass of [`prune_by_assumption`] spends one unit. The
/// budget is shared across all escalation depths of one attempt, and
/// speculative branches inherit a *copy* of whatever remains when they
/// are created (not a fresh budget), so deep recursion chains deplete
/// faster than independent siblings. Spending from an empty budget is
/// [`SolverError::BudgetExhausted`], which aborts the whole attempt.
///
/// # Examples
///
/// ```
/// use crossmath_solver::{Budget, SolverError};
///
/// let mut budget = Budget::new(2);
/// assert!(budget.spend().is_ok());
/// assert!(budget.spend().is_ok());
/// assert_eq!(budget.spend(), Err(SolverError::BudgetExhausted));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    remaining: u32,
}

impl Budget {
    /// The default number of scan passes allowed per solve attempt.
    pub const DEFAULT_LIMIT: u32 = 5;

    /// Creates a budget allowing `limit` scan passes.
    #[must_use]
    pub const fn new(limit: u32) -> Self {
        Self { remaining: limit }
    }

    /// Consumes one unit of budget.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::BudgetExhausted`] if nothing remains.
    pub fn spend(&mut self) -> Result<(), SolverError> {
        if self.remaining == 0 {
            return Err(SolverError::BudgetExhausted);
        }
        self.remaining -= 1;
        Ok(())
    }

    /// Returns the number of scan passes left.
    #[must_use]
    pub const fn remaining(self) -> u32 {
        self.remaining
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT)
    }
}

/// Prunes candidates that provably lead to contradiction.
///
/// For every cell with two or more candidates, each candidate is tried
/// in an isolated branch (a copy of the puzzle): the cell is fixed to the
/// candidate and the branch is propagated; with `depth > 0` a feasible
/// branch is additionally searched one level deeper. A branch that runs
/// into contradiction proves the candidate impossible, so it is removed
/// from the original cell — the single-digit lookahead behind the "naked
/// candidate" proof technique. A feasible branch proves nothing.
///
/// The scan repeats until a full pass changes nothing. This routine never
/// propagates the *original* puzzle; the orchestrator re-propagates
/// between calls so that fresh eliminations can unlock line narrowing.
///
/// # Errors
///
/// - [`SolverError::Contradiction`] if pruning empties a cell.
/// - [`SolverError::BudgetExhausted`] if the scan passes (including
///   those of recursive branches) exceed the budget.
pub fn prune_by_assumption(
    puzzle: &mut Puzzle,
    depth: u8,
    budget: &mut Budget,
) -> Result<(), SolverError> {
    loop {
        budget.spend()?;
        let before = *puzzle.grid();
        for (row, col) in CandidateGrid::positions() {
            let candidates = puzzle.grid().candidates(row, col);
            if candidates.len() < 2 {
                continue;
            }
            for candidate in candidates {
                let mut branch = *puzzle;
                branch
                    .grid_mut()
                    .set_candidates(row, col, DigitSet::from_elem(candidate));
                if explore(&mut branch, depth, *budget)? {
                    continue;
                }
                trace!("candidate {candidate} at ({row}, {col}) proven impossible");
                puzzle.grid_mut().remove_candidate(row, col, candidate);
                if puzzle.grid().candidates(row, col).is_empty() {
                    return Err(SolverError::Contradiction { row, col });
                }
            }
        }
        if *puzzle.grid() == before {
            return Ok(());
        }
    }
}

/// Tests one speculative branch for feasibility.
///
/// `Ok(false)` means the branch hit a contradiction; budget exhaustion is
/// not a verdict on the candidate and bubbles up as an error.
fn explore(branch: &mut Puzzle, depth: u8, budget: Budget) -> Result<bool, SolverError> {
    match propagate(branch) {
        Ok(()) => {}
        Err(SolverError::Contradiction { .. }) => return Ok(false),
        Err(err) => return Err(err),
    }
    if depth == 0 {
        return Ok(true);
    }
    let mut budget = budget;
    match prune_by_assumption(branch, depth - 1, &mut budget) {
        Ok(()) => Ok(true),
        Err(SolverError::Contradiction { .. }) => Ok(false),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use crossmath_core::Operator::{Add, Div, Mul, Sub};

    use super::*;

    fn worked_example() -> Puzzle {
        Puzzle::with_full_candidates(
            [[Sub, Mul], [Add, Div], [Mul, Sub]],
            [[Sub, Sub, Add], [Sub, Add, Div]],
            [14, 2, 4],
            [5, 11, 2],
        )
    }

    #[test]
    fn budget_contract() {
        let mut budget = Budget::new(Budget::DEFAULT_LIMIT);
        for _ in 0..5 {
            assert!(budget.spend().is_ok());
        }
        assert_eq!(budget.spend(), Err(SolverError::BudgetExhausted));
    }

    #[test]
    fn empty_budget_aborts_immediately() {
        let mut puzzle = worked_example();
        let mut budget = Budget::new(0);
        assert_eq!(
            prune_by_assumption(&mut puzzle, 0, &mut budget),
            Err(SolverError::BudgetExhausted)
        );
    }

    #[test]
    fn branches_do_not_refund_the_parent() {
        let mut puzzle = worked_example();
        let mut budget = Budget::new(Budget::DEFAULT_LIMIT);
        prune_by_assumption(&mut puzzle, 1, &mut budget).unwrap();
        // recursive branches spent copies; only the outer passes are
        // charged against the caller's budget
        assert!(budget.remaining() < Budget::DEFAULT_LIMIT);
    }

    #[test]
    fn depth_zero_draws_no_conclusions_on_a_full_grid() {
        let mut puzzle = worked_example();
        let snapshot = *puzzle.grid();
        let mut budget = Budget::default();
        prune_by_assumption(&mut puzzle, 0, &mut budget).unwrap();
        // every branch fixes a single cell, which leaves every line with
        // at most one fixed cell: nothing can be refuted, and feasible
        // branches prove nothing
        assert_eq!(*puzzle.grid(), snapshot);
        assert_eq!(budget.remaining(), Budget::DEFAULT_LIMIT - 1);
    }

    #[test]
    fn depth_one_prunes_candidates() {
        let mut puzzle = worked_example();
        let before = *puzzle.grid();
        let mut budget = Budget::default();
        prune_by_assumption(&mut puzzle, 1, &mut budget).unwrap();
        let after = *puzzle.grid();
        assert_ne!(before, after, "depth-1 pruning should make progress");
        // e.g. 1 at (0, 0) forces (1 - b) * c = 14 with 1 - b negative
        // for every remaining b, so lookahead refutes it
        assert!(!after.candidates(0, 0).contains(1));
        // pruning only ever removes candidates
        for (row, col) in CandidateGrid::positions() {
            for digit in after.candidates(row, col) {
                assert!(before.candidates(row, col).contains(digit));
            }
        }
    }
}

/// Failure of one solve attempt.
///
/// Both variants abort the attempt; neither is recoverable except by
/// abandoning the current puzzle state (the generator does exactly that
/// and retries with a fresh salt). Partial mutations are not rolled back:
/// callers needing atomicity snapshot the grid first, which is how
/// assumption branches are isolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// A cell's candidate set was emptied: the current state is
    /// infeasible.
    #[display("no candidates left at row {row}, column {col}")]
    Contradiction {
        /// Row of the emptied cell.
        row: usize,
        /// Column of the emptied cell.
        col: usize,
    },
    /// The assumption search spent its whole iteration budget without
    /// converging.
    #[display("assumption search budget exhausted")]
    BudgetExhausted,
}

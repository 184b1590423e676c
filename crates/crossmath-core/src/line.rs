//! Row and column equations.

use crate::{Operator, Ratio};

/// One of the six lines of the puzzle: a row or a column.
///
/// # Examples
///
/// ```
/// use crossmath_core::Line;
///
/// assert_eq!(Line::ALL.len(), 6);
/// assert_eq!(Line::Row(1).cells(), [(1, 0), (1, 1), (1, 2)]);
/// assert_eq!(Line::Column(2).cells(), [(0, 2), (1, 2), (2, 2)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// A row identified by its index (0–2).
    Row(usize),
    /// A column identified by its index (0–2).
    Column(usize),
}

impl Line {
    /// All six lines, rows first, then columns.
    pub const ALL: [Self; 6] = [
        Self::Row(0),
        Self::Row(1),
        Self::Row(2),
        Self::Column(0),
        Self::Column(1),
        Self::Column(2),
    ];

    /// Returns the `(row, col)` coordinates of the line's three cells, in
    /// evaluation order.
    #[must_use]
    pub const fn cells(self) -> [(usize, usize); 3] {
        match self {
            Self::Row(row) => [(row, 0), (row, 1), (row, 2)],
            Self::Column(col) => [(0, col), (1, col), (2, col)],
        }
    }
}

/// One line equation: two operators and an integer target.
///
/// The equation `(v0 OP1 v1) OP2 v2 == target` is evaluated strictly left
/// to right; there is no operator precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpec {
    ops: [Operator; 2],
    target: i32,
}

impl LineSpec {
    /// Creates a line specification.
    #[must_use]
    pub const fn new(ops: [Operator; 2], target: i32) -> Self {
        Self { ops, target }
    }

    /// Returns the two operators, in application order.
    #[must_use]
    pub const fn ops(self) -> [Operator; 2] {
        self.ops
    }

    /// Returns the target value.
    #[must_use]
    pub const fn target(self) -> i32 {
        self.target
    }

    /// Evaluates `(v0 OP1 v1) OP2 v2` exactly, left to right.
    #[must_use]
    pub fn evaluate(self, values: [u8; 3]) -> Ratio {
        let first = self.ops[0].apply(values[0].into(), values[1].into());
        self.ops[1].apply(first, values[2].into())
    }

    /// Returns `true` if the three values hit the target exactly.
    #[must_use]
    pub fn is_satisfied(self, values: [u8; 3]) -> bool {
        self.evaluate(values) == Ratio::from(self.target)
    }
}

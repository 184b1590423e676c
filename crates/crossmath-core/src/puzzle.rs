//! A complete puzzle instance and its wire form.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{CandidateGrid, DigitSet, Line, LineSpec, Operator};

/// A cross-math puzzle instance.
///
/// Aggregates the candidate grid with the six line equations: a 3×2 table
/// of row operators, a 2×3 table of column operators (the first table row
/// applies between grid rows 0 and 1 of each column, the second between
/// the intermediate result and grid row 2), and the three row and three
/// column targets.
///
/// The typed constructors cannot produce a malformed shape; externally
/// supplied puzzles arrive through [`PuzzleData`], whose conversion
/// validates shape and rejects with [`StructuralError`]. Neither path
/// validates solvability.
///
/// # Examples
///
/// ```
/// use crossmath_core::{Line, Operator::*, Puzzle};
///
/// let puzzle = Puzzle::with_full_candidates(
///     [[Sub, Mul], [Add, Div], [Mul, Sub]],
///     [[Sub, Sub, Add], [Sub, Add, Div]],
///     [14, 2, 4],
///     [5, 11, 2],
/// );
///
/// let spec = puzzle.spec(Line::Row(0));
/// assert_eq!(spec.ops(), [Sub, Mul]);
/// assert_eq!(spec.target(), 14);
/// assert!(spec.is_satisfied([8, 6, 7]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    grid: CandidateGrid,
    row_ops: [[Operator; 2]; 3],
    col_ops: [[Operator; 3]; 2],
    row_targets: [i32; 3],
    col_targets: [i32; 3],
}

impl Puzzle {
    /// Creates a puzzle from a grid and the six line equations.
    #[must_use]
    pub const fn new(
        grid: CandidateGrid,
        row_ops: [[Operator; 2]; 3],
        col_ops: [[Operator; 3]; 2],
        row_targets: [i32; 3],
        col_targets: [i32; 3],
    ) -> Self {
        Self {
            grid,
            row_ops,
            col_ops,
            row_targets,
            col_targets,
        }
    }

    /// Creates a puzzle whose every cell still allows every digit.
    ///
    /// This is the starting state for solving an externally supplied
    /// question: only the operators and targets are known.
    #[must_use]
    pub const fn with_full_candidates(
        row_ops: [[Operator; 2]; 3],
        col_ops: [[Operator; 3]; 2],
        row_targets: [i32; 3],
        col_targets: [i32; 3],
    ) -> Self {
        Self::new(CandidateGrid::FULL, row_ops, col_ops, row_targets, col_targets)
    }

    /// Returns the candidate grid.
    #[must_use]
    pub const fn grid(&self) -> &CandidateGrid {
        &self.grid
    }

    /// Returns the candidate grid mutably.
    pub fn grid_mut(&mut self) -> &mut CandidateGrid {
        &mut self.grid
    }

    /// Returns the equation of one row or column.
    #[must_use]
    pub fn spec(&self, line: Line) -> LineSpec {
        match line {
            Line::Row(row) => LineSpec::new(self.row_ops[row], self.row_targets[row]),
            Line::Column(col) => LineSpec::new(
                [self.col_ops[0][col], self.col_ops[1][col]],
                self.col_targets[col],
            ),
        }
    }

    /// Returns the 3×2 row operator table.
    #[must_use]
    pub const fn row_operators(&self) -> [[Operator; 2]; 3] {
        self.row_ops
    }

    /// Returns the 2×3 column operator table.
    #[must_use]
    pub const fn column_operators(&self) -> [[Operator; 3]; 2] {
        self.col_ops
    }

    /// Returns the three row targets.
    #[must_use]
    pub const fn row_targets(&self) -> [i32; 3] {
        self.row_targets
    }

    /// Returns the three column targets.
    #[must_use]
    pub const fn column_targets(&self) -> [i32; 3] {
        self.col_targets
    }

    /// Returns `true` if every cell is fixed.
    ///
    /// Pure cardinality check; consistency with the line equations is a
    /// separate question answered by running propagation.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.grid.is_complete()
    }

    /// Returns the concrete digit matrix, if every cell is fixed.
    #[must_use]
    pub fn fixed_digits(&self) -> Option<[[u8; 3]; 3]> {
        self.grid.to_digits()
    }

    /// Converts the puzzle into its serializable wire form.
    #[must_use]
    pub fn to_data(&self) -> PuzzleData {
        PuzzleData::from(self)
    }
}

/// Structural validation failure when converting [`PuzzleData`] into a
/// [`Puzzle`].
///
/// These are fail-fast errors: a malformed instance must not be solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StructuralError {
    /// The candidate matrix is not 3 rows of 3 cells.
    #[display("matrix must be 3x3")]
    MatrixShape,
    /// The row operator table is not 3 rows of 2 operators.
    #[display("row operators must be 3x2")]
    RowOperatorShape,
    /// The column operator table is not 2 rows of 3 operators.
    #[display("column operators must be 2x3")]
    ColumnOperatorShape,
    /// There are not exactly 3 row targets.
    #[display("row targets must have 3 entries")]
    RowTargetCount,
    /// There are not exactly 3 column targets.
    #[display("column targets must have 3 entries")]
    ColumnTargetCount,
    /// An operator code is not in the range 1–4.
    #[display("invalid operator code {code}")]
    InvalidOperatorCode {
        /// The rejected code.
        code: u8,
    },
    /// A candidate digit is not in the range 1–9.
    #[display("digit {digit} out of range at row {row}, column {col}")]
    InvalidDigit {
        /// The rejected digit.
        digit: u8,
        /// Cell row.
        row: usize,
        /// Cell column.
        col: usize,
    },
}

/// Serializable wire form of a [`Puzzle`].
///
/// Each cell of `matrix` is the list of candidate digits; operator tables
/// carry the stable codes 1–4 from [`Operator::code`]. Serialized keys
/// are camelCase (`rowOperators`, `columnTargets`, ...). Consumers strip
/// `matrix` for a "question" view and everything except `matrix` for an
/// "answer" view.
///
/// # Examples
///
/// ```
/// use crossmath_core::{Puzzle, PuzzleData, Operator::*};
///
/// let puzzle = Puzzle::with_full_candidates(
///     [[Sub, Mul], [Add, Div], [Mul, Sub]],
///     [[Sub, Sub, Add], [Sub, Add, Div]],
///     [14, 2, 4],
///     [5, 11, 2],
/// );
/// let data = puzzle.to_data();
/// assert_eq!(data.row_operators[0], vec![2, 3]);
///
/// let restored = Puzzle::try_from(data)?;
/// assert_eq!(restored, puzzle);
/// # Ok::<(), crossmath_core::StructuralError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleData {
    /// 3×3 matrix of candidate digit lists.
    pub matrix: Vec<Vec<Vec<u8>>>,
    /// 3×2 table of row operator codes.
    pub row_operators: Vec<Vec<u8>>,
    /// 2×3 table of column operator codes.
    pub column_operators: Vec<Vec<u8>>,
    /// The three row targets.
    pub row_targets: Vec<i32>,
    /// The three column targets.
    pub column_targets: Vec<i32>,
}

impl From<&Puzzle> for PuzzleData {
    fn from(puzzle: &Puzzle) -> Self {
        let matrix = (0..3)
            .map(|row| {
                (0..3)
                    .map(|col| puzzle.grid.candidates(row, col).iter().collect())
                    .collect()
            })
            .collect();
        Self {
            matrix,
            row_operators: puzzle
                .row_ops
                .iter()
                .map(|ops| ops.iter().map(|op| op.code()).collect())
                .collect(),
            column_operators: puzzle
                .col_ops
                .iter()
                .map(|ops| ops.iter().map(|op| op.code()).collect())
                .collect(),
            row_targets: puzzle.row_targets.to_vec(),
            column_targets: puzzle.col_targets.to_vec(),
        }
    }
}

fn parse_operator(code: u8) -> Result<Operator, StructuralError> {
    Operator::from_code(code).ok_or(StructuralError::InvalidOperatorCode { code })
}

impl TryFrom<PuzzleData> for Puzzle {
    type Error = StructuralError;

    fn try_from(data: PuzzleData) -> Result<Self, Self::Error> {
        if data.matrix.len() != 3 || data.matrix.iter().any(|row| row.len() != 3) {
            return Err(StructuralError::MatrixShape);
        }
        if data.row_operators.len() != 3 || data.row_operators.iter().any(|ops| ops.len() != 2) {
            return Err(StructuralError::RowOperatorShape);
        }
        if data.column_operators.len() != 2
            || data.column_operators.iter().any(|ops| ops.len() != 3)
        {
            return Err(StructuralError::ColumnOperatorShape);
        }
        if data.row_targets.len() != 3 {
            return Err(StructuralError::RowTargetCount);
        }
        if data.column_targets.len() != 3 {
            return Err(StructuralError::ColumnTargetCount);
        }

        let mut grid = CandidateGrid::FULL;
        for (row, cells) in data.matrix.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let mut candidates = DigitSet::new();
                for &digit in cell {
                    if !(1..=9).contains(&digit) {
                        return Err(StructuralError::InvalidDigit { digit, row, col });
                    }
                    candidates.insert(digit);
                }
                grid.set_candidates(row, col, candidates);
            }
        }

        let mut row_ops = [[Operator::Add; 2]; 3];
        for (row, ops) in data.row_operators.iter().enumerate() {
            for (i, &code) in ops.iter().enumerate() {
                row_ops[row][i] = parse_operator(code)?;
            }
        }
        let mut col_ops = [[Operator::Add; 3]; 2];
        for (row, ops) in data.column_operators.iter().enumerate() {
            for (i, &code) in ops.iter().enumerate() {
                col_ops[row][i] = parse_operator(code)?;
            }
        }

        let mut row_targets = [0; 3];
        let mut col_targets = [0; 3];
        for (dst, &src) in row_targets.iter_mut().zip(&data.row_targets) {
            *dst = src;
        }
        for (dst, &src) in col_targets.iter_mut().zip(&data.column_targets) {
            *dst = src;
        }

        Ok(Self::new(grid, row_ops, col_ops, row_targets, col_targets))
    }
}

const FULLWIDTH_DIGITS: [char; 10] =
    ['０', '１', '２', '３', '４', '５', '６', '７', '８', '９'];

/// Full-width glyph for small numbers, plain decimal otherwise.
fn fullwidth(value: i32) -> String {
    usize::try_from(value)
        .ok()
        .and_then(|i| FULLWIDTH_DIGITS.get(i))
        .map_or_else(|| value.to_string(), char::to_string)
}

impl Display for Puzzle {
    /// Plain-text debug rendering.
    ///
    /// Fixed cells render as full-width digits, emptied cells as `×`,
    /// two-candidate cells as both digits condensed, wider cells as a
    /// full-width space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let cell = self.grid.candidates(row, col);
                if cell.is_empty() {
                    write!(f, "×")?;
                } else if let Some(digit) = cell.as_single() {
                    write!(f, "{}", fullwidth(i32::from(digit)))?;
                } else if cell.len() == 2 {
                    for digit in cell {
                        write!(f, "{digit}")?;
                    }
                } else {
                    write!(f, "　")?;
                }
                if col < 2 {
                    write!(f, "{}", self.row_ops[row][col])?;
                }
            }
            writeln!(f, "＝{}", fullwidth(self.row_targets[row]))?;
            if row < 2 {
                for col in 0..3 {
                    write!(f, "{}　", self.col_ops[row][col])?;
                }
                writeln!(f)?;
            }
        }
        writeln!(f, "＝　＝　＝")?;
        for col in 0..3 {
            write!(f, "{}", fullwidth(self.col_targets[col]))?;
            if col < 2 {
                write!(f, "　")?;
            }
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Operator::{Add, Div, Mul, Sub};

    fn worked_example() -> Puzzle {
        Puzzle::with_full_candidates(
            [[Sub, Mul], [Add, Div], [Mul, Sub]],
            [[Sub, Sub, Add], [Sub, Add, Div]],
            [14, 2, 4],
            [5, 11, 2],
        )
    }

    #[test]
    fn specs_per_line() {
        let puzzle = worked_example();
        assert_eq!(puzzle.spec(Line::Row(2)).ops(), [Mul, Sub]);
        assert_eq!(puzzle.spec(Line::Row(2)).target(), 4);
        // column spec: first table row between grid rows 0 and 1,
        // second between the intermediate result and grid row 2
        assert_eq!(puzzle.spec(Line::Column(2)).ops(), [Add, Div]);
        assert_eq!(puzzle.spec(Line::Column(2)).target(), 2);
    }

    #[test]
    fn data_round_trip() {
        let puzzle = worked_example();
        let data = puzzle.to_data();
        assert_eq!(data.matrix[0][0], (1..=9).collect::<Vec<_>>());
        assert_eq!(data.row_operators, vec![vec![2, 3], vec![1, 4], vec![3, 2]]);
        assert_eq!(data.column_operators, vec![vec![2, 2, 1], vec![2, 1, 4]]);
        assert_eq!(Puzzle::try_from(data), Ok(puzzle));
    }

    #[test]
    fn structural_rejection() {
        let mut data = worked_example().to_data();
        data.matrix.pop();
        assert_eq!(Puzzle::try_from(data), Err(StructuralError::MatrixShape));

        let mut data = worked_example().to_data();
        data.row_operators[1] = vec![1, 2, 3];
        assert_eq!(Puzzle::try_from(data), Err(StructuralError::RowOperatorShape));

        let mut data = worked_example().to_data();
        data.column_operators[0][2] = 9;
        assert_eq!(
            Puzzle::try_from(data),
            Err(StructuralError::InvalidOperatorCode { code: 9 })
        );

        let mut data = worked_example().to_data();
        data.matrix[1][2] = vec![0];
        assert_eq!(
            Puzzle::try_from(data),
            Err(StructuralError::InvalidDigit {
                digit: 0,
                row: 1,
                col: 2
            })
        );

        let mut data = worked_example().to_data();
        data.column_targets = vec![5, 11];
        assert_eq!(Puzzle::try_from(data), Err(StructuralError::ColumnTargetCount));
    }

    #[test]
    fn wire_keys_are_camel_case() {
        let json = serde_json::to_value(worked_example().to_data()).unwrap();
        let object = json.as_object().unwrap();
        for key in [
            "matrix",
            "rowOperators",
            "columnOperators",
            "rowTargets",
            "columnTargets",
        ] {
            assert!(object.contains_key(key), "missing wire key {key}");
        }
        assert_eq!(object.len(), 5);
        assert_eq!(json["rowTargets"], serde_json::json!([14, 2, 4]));

        let restored: PuzzleData = serde_json::from_value(json).unwrap();
        assert_eq!(restored, worked_example().to_data());
    }

    #[test]
    fn render_solved_grid() {
        let mut puzzle = worked_example();
        *puzzle.grid_mut() = CandidateGrid::from_digits([[8, 6, 7], [2, 4, 3], [1, 9, 5]]);
        let expected = "８－６×７＝14\n\
                        －　－　＋　\n\
                        ２＋４÷３＝２\n\
                        －　＋　÷　\n\
                        １×９－５＝４\n\
                        ＝　＝　＝\n\
                        ５　11　２\n";
        assert_eq!(puzzle.to_string(), expected);
    }

    #[test]
    fn render_markers() {
        let mut puzzle = worked_example();
        puzzle.grid_mut().set_candidates(0, 0, DigitSet::EMPTY);
        puzzle
            .grid_mut()
            .set_candidates(0, 1, DigitSet::from_iter([2, 7]));
        let text = puzzle.to_string();
        let first_line = text.lines().next().unwrap();
        // blocked cell, condensed pair, undecided cell
        assert_eq!(first_line, "×－27×　＝14");
    }
}

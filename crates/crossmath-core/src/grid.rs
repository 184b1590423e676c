//! The 3×3 grid of candidate sets.

use crate::DigitSet;

/// A 3×3 grid where each cell holds a [`DigitSet`] of still-possible
/// digits.
///
/// A cell is *fixed* when its candidate set has exactly one element. The
/// grid is `Copy`, so change detection and speculative branches are plain
/// snapshots rather than deep clones.
///
/// Reducing a cell to the empty set is not an error at this layer;
/// callers detect emptied cells and signal contradiction themselves.
///
/// # Examples
///
/// ```
/// use crossmath_core::{CandidateGrid, DigitSet};
///
/// let mut grid = CandidateGrid::FULL;
/// assert!(!grid.is_fixed(0, 0));
///
/// grid.set_candidates(0, 0, DigitSet::from_elem(8));
/// assert!(grid.is_fixed(0, 0));
/// assert_eq!(grid.fixed_value(0, 0), Some(8));
/// assert_eq!(grid.fixed_values(), DigitSet::from_elem(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateGrid {
    cells: [[DigitSet; Self::SIZE]; Self::SIZE],
}

impl CandidateGrid {
    /// The grid side length.
    pub const SIZE: usize = 3;

    /// A grid where every cell still allows every digit.
    pub const FULL: Self = Self {
        cells: [[DigitSet::FULL; Self::SIZE]; Self::SIZE],
    };

    /// Creates a grid of fixed cells from a concrete digit matrix.
    ///
    /// # Panics
    ///
    /// Panics if any digit is not in the range 1–9.
    #[must_use]
    pub fn from_digits(digits: [[u8; Self::SIZE]; Self::SIZE]) -> Self {
        Self {
            cells: digits.map(|row| row.map(DigitSet::from_elem)),
        }
    }

    /// Returns the candidate set of a cell.
    #[must_use]
    pub fn candidates(&self, row: usize, col: usize) -> DigitSet {
        self.cells[row][col]
    }

    /// Replaces the candidate set of a cell.
    pub fn set_candidates(&mut self, row: usize, col: usize, candidates: DigitSet) {
        self.cells[row][col] = candidates;
    }

    /// Removes a single candidate from a cell. No-op if absent.
    pub fn remove_candidate(&mut self, row: usize, col: usize, digit: u8) {
        self.cells[row][col].remove(digit);
    }

    /// Returns `true` if the cell's candidate set has exactly one element.
    #[must_use]
    pub fn is_fixed(&self, row: usize, col: usize) -> bool {
        self.cells[row][col].len() == 1
    }

    /// Returns the cell's sole candidate, if the cell is fixed.
    #[must_use]
    pub fn fixed_value(&self, row: usize, col: usize) -> Option<u8> {
        self.cells[row][col].as_single()
    }

    /// Returns the set of every fixed cell's value, anywhere in the grid.
    #[must_use]
    pub fn fixed_values(&self) -> DigitSet {
        let mut fixed = DigitSet::new();
        for (row, col) in Self::positions() {
            if let Some(digit) = self.fixed_value(row, col) {
                fixed.insert(digit);
            }
        }
        fixed
    }

    /// Returns `true` if every cell is fixed.
    ///
    /// This is the pure cardinality check; it says nothing about whether
    /// the fixed values are consistent with the line equations.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Self::positions().all(|(row, col)| self.is_fixed(row, col))
    }

    /// Returns the concrete digit matrix, if every cell is fixed.
    #[must_use]
    pub fn to_digits(&self) -> Option<[[u8; Self::SIZE]; Self::SIZE]> {
        let mut digits = [[0; Self::SIZE]; Self::SIZE];
        for (row, col) in Self::positions() {
            digits[row][col] = self.fixed_value(row, col)?;
        }
        Some(digits)
    }

    /// Iterates over all cell coordinates in row-major order.
    pub fn positions() -> impl Iterator<Item = (usize, usize)> {
        (0..Self::SIZE).flat_map(|row| (0..Self::SIZE).map(move |col| (row, col)))
    }
}

impl Default for CandidateGrid {
    fn default() -> Self {
        Self::FULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_grid() {
        let grid = CandidateGrid::FULL;
        for (row, col) in CandidateGrid::positions() {
            assert_eq!(grid.candidates(row, col), DigitSet::FULL);
            assert!(!grid.is_fixed(row, col));
        }
        assert!(grid.fixed_values().is_empty());
        assert!(!grid.is_complete());
        assert_eq!(grid.to_digits(), None);
    }

    #[test]
    fn from_digits_is_complete() {
        let digits = [[8, 6, 7], [2, 4, 3], [1, 9, 5]];
        let grid = CandidateGrid::from_digits(digits);
        assert!(grid.is_complete());
        assert_eq!(grid.fixed_values(), DigitSet::FULL);
        assert_eq!(grid.to_digits(), Some(digits));
    }

    #[test]
    fn cell_mutation_is_local() {
        let mut grid = CandidateGrid::FULL;
        grid.remove_candidate(1, 2, 4);
        assert_eq!(grid.candidates(1, 2).len(), 8);
        // no side effects beyond the targeted cell
        for (row, col) in CandidateGrid::positions().filter(|&p| p != (1, 2)) {
            assert_eq!(grid.candidates(row, col), DigitSet::FULL);
        }

        // removing an absent candidate is a no-op
        grid.remove_candidate(1, 2, 4);
        assert_eq!(grid.candidates(1, 2).len(), 8);
    }

    #[test]
    fn emptied_cell_is_not_an_error() {
        let mut grid = CandidateGrid::FULL;
        grid.set_candidates(2, 2, DigitSet::EMPTY);
        assert!(grid.candidates(2, 2).is_empty());
        assert!(!grid.is_fixed(2, 2));
        assert_eq!(grid.fixed_value(2, 2), None);
    }

    #[test]
    fn positions_are_row_major() {
        let all: Vec<_> = CandidateGrid::positions().collect();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], (0, 0));
        assert_eq!(all[1], (0, 1));
        assert_eq!(all[3], (1, 0));
        assert_eq!(all[8], (2, 2));
    }
}

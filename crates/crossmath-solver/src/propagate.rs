//! Fixpoint constraint propagation.

use crossmath_core::{CandidateGrid, DigitSet, Line, Puzzle};

use crate::SolverError;

/// Runs constraint propagation to fixpoint.
///
/// Alternates two rules until a full pass changes nothing:
///
/// 1. **Digit elimination** — every value fixed anywhere in the grid is
///    removed from every other, non-fixed cell. This is grid-wide, not
///    per line: a solved grid uses each digit exactly once.
/// 2. **Line narrowing** — for each line with exactly two fixed cells,
///    the free cell keeps only candidates that hit the target exactly.
///
/// On contradiction the puzzle is left as mutated so far; callers that
/// need the prior state snapshot the (`Copy`) grid beforehand.
///
/// # Errors
///
/// Returns [`SolverError::Contradiction`] if any cell's candidate set is
/// emptied.
pub fn propagate(puzzle: &mut Puzzle) -> Result<(), SolverError> {
    loop {
        let before = *puzzle.grid();
        eliminate_fixed_digits(puzzle)?;
        if *puzzle.grid() != before {
            continue;
        }
        narrow_lines(puzzle)?;
        if *puzzle.grid() != before {
            continue;
        }
        return Ok(());
    }
}

/// Removes every fixed value from every other cell's candidates.
fn eliminate_fixed_digits(puzzle: &mut Puzzle) -> Result<(), SolverError> {
    let fixed = puzzle.grid().fixed_values();
    let grid = puzzle.grid_mut();
    for (row, col) in CandidateGrid::positions() {
        if grid.is_fixed(row, col) {
            continue;
        }
        let mut cell = grid.candidates(row, col);
        for digit in fixed {
            cell.remove(digit);
        }
        grid.set_candidates(row, col, cell);
        if cell.is_empty() {
            return Err(SolverError::Contradiction { row, col });
        }
    }
    Ok(())
}

fn narrow_lines(puzzle: &mut Puzzle) -> Result<(), SolverError> {
    for line in Line::ALL {
        narrow_line(puzzle, line)?;
    }
    Ok(())
}

/// Narrows the one free cell of a line with exactly two fixed cells.
///
/// Lines with three unknowns cannot be narrowed by enumerating one cell,
/// and fully fixed lines need no narrowing; both are skipped.
fn narrow_line(puzzle: &mut Puzzle, line: Line) -> Result<(), SolverError> {
    let spec = puzzle.spec(line);
    let cells = line.cells();
    let sets = cells.map(|(row, col)| puzzle.grid().candidates(row, col));

    let fixed_count = sets.iter().filter(|set| set.len() == 1).count();
    if fixed_count != 2 {
        return Ok(());
    }
    let Some(free) = (0..3).find(|&i| sets[i].len() != 1) else {
        return Ok(());
    };

    let mut values = [0; 3];
    for (value, set) in values.iter_mut().zip(&sets) {
        if let Some(digit) = set.as_single() {
            *value = digit;
        }
    }

    let mut kept = DigitSet::new();
    for candidate in sets[free] {
        values[free] = candidate;
        if spec.is_satisfied(values) {
            kept.insert(candidate);
        }
    }

    let (row, col) = cells[free];
    if kept.is_empty() {
        return Err(SolverError::Contradiction { row, col });
    }
    puzzle.grid_mut().set_candidates(row, col, kept);
    Ok(())
}

//! The retry-driven puzzle generator.

use std::ops::RangeInclusive;

use crossmath_core::{CandidateGrid, Line, LineSpec, Operator, Puzzle};
use crossmath_solver::Solver;
use log::{debug, trace};
use rand::{RngExt as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

use crate::PuzzleSeed;

/// The playable range for line targets.
///
/// Draws whose targets are negative, above 50, or not whole numbers are
/// rejected and retried with the next salt.
pub const TARGET_RANGE: RangeInclusive<i32> = 0..=50;

/// Generation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// No attempt produced a solvable, range-constrained puzzle.
    #[display("no solvable puzzle found after {attempts} attempts")]
    AttemptsExhausted {
        /// Number of salted attempts made.
        attempts: u32,
    },
}

/// A generated puzzle together with its provenance.
///
/// The carried [`Puzzle`] holds the concrete solution grid (every cell a
/// fixed digit); [`problem`](Self::problem) derives the full-candidate
/// instance a player or solver would start from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    puzzle: Puzzle,
    solution: [[u8; 3]; 3],
    seed: PuzzleSeed,
    salt: u32,
}

impl GeneratedPuzzle {
    /// Returns the puzzle with its concrete solution grid (the "answer"
    /// view).
    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the solved digit matrix.
    #[must_use]
    pub const fn solution(&self) -> [[u8; 3]; 3] {
        self.solution
    }

    /// Returns the same equations with every cell reset to full
    /// candidates (the "question" view).
    #[must_use]
    pub fn problem(&self) -> Puzzle {
        Puzzle::with_full_candidates(
            self.puzzle.row_operators(),
            self.puzzle.column_operators(),
            self.puzzle.row_targets(),
            self.puzzle.column_targets(),
        )
    }

    /// Returns the seed the puzzle was generated from.
    #[must_use]
    pub const fn seed(&self) -> &PuzzleSeed {
        &self.seed
    }

    /// Returns the salt of the successful attempt.
    #[must_use]
    pub const fn salt(&self) -> u32 {
        self.salt
    }
}

/// Generates solvable puzzles from seed strings.
///
/// Each attempt lays a random permutation of 1–9 into the grid, draws
/// random operators, and computes the six targets with exact arithmetic.
/// The attempt is kept only if every target is a whole number inside
/// [`TARGET_RANGE`] *and* the solver can fully solve the puzzle from
/// full candidates; otherwise the salt is incremented and the attempt
/// redrawn, up to a configurable bound.
///
/// # Examples
///
/// ```
/// use crossmath_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::default();
/// let generated = generator.generate(&PuzzleSeed::new("2026-08-25"))?;
///
/// let digits: Vec<u8> = generated.solution().into_iter().flatten().collect();
/// let mut sorted = digits.clone();
/// sorted.sort_unstable();
/// assert_eq!(sorted, (1..=9).collect::<Vec<_>>());
/// # Ok::<(), crossmath_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    solver: Solver,
    max_attempts: u32,
}

impl PuzzleGenerator {
    /// The default bound on salted attempts per seed.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

    /// Creates a generator that validates solvability with the given
    /// solver.
    #[must_use]
    pub const fn new(solver: Solver) -> Self {
        Self {
            solver,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Replaces the bound on salted attempts per seed.
    #[must_use]
    pub const fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Generates the puzzle for a seed.
    ///
    /// Deterministic: the same seed always produces the same puzzle,
    /// because the retry salts are tried in the same order and each
    /// attempt's randomness is a pure function of `seed` and salt.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::AttemptsExhausted`] if no attempt within
    /// the bound yields a solvable, range-constrained puzzle.
    pub fn generate(&self, seed: &PuzzleSeed) -> Result<GeneratedPuzzle, GenerateError> {
        for salt in 0..self.max_attempts {
            let mut rng = seed.rng(salt);
            let Some((puzzle, solution)) = draw_puzzle(&mut rng) else {
                trace!("seed {seed} salt {salt}: targets out of range");
                continue;
            };

            let mut working = Puzzle::with_full_candidates(
                puzzle.row_operators(),
                puzzle.column_operators(),
                puzzle.row_targets(),
                puzzle.column_targets(),
            );
            match self.solver.solve(&mut working) {
                Ok(true) => {
                    debug!("seed {seed}: solvable puzzle at salt {salt}");
                    return Ok(GeneratedPuzzle {
                        puzzle,
                        solution,
                        seed: seed.clone(),
                        salt,
                    });
                }
                Ok(false) => trace!("seed {seed} salt {salt}: ambiguous, solver stalled"),
                Err(err) => trace!("seed {seed} salt {salt}: solver failed: {err}"),
            }
        }
        Err(GenerateError::AttemptsExhausted {
            attempts: self.max_attempts,
        })
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new(Solver::new())
    }
}

/// Draws one candidate puzzle, or `None` if a target misses the playable
/// range.
///
/// Draw order is part of the seed contract: the digit permutation first,
/// then the 3×2 row operators row-major, then the 2×3 column operators
/// row-major.
fn draw_puzzle(rng: &mut Pcg64) -> Option<(Puzzle, [[u8; 3]; 3])> {
    let mut digits: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    digits.shuffle(rng);
    let matrix = [
        [digits[0], digits[1], digits[2]],
        [digits[3], digits[4], digits[5]],
        [digits[6], digits[7], digits[8]],
    ];

    let mut row_ops = [[Operator::Add; 2]; 3];
    for ops in &mut row_ops {
        for op in ops {
            *op = draw_operator(rng);
        }
    }
    let mut col_ops = [[Operator::Add; 3]; 2];
    for ops in &mut col_ops {
        for op in ops {
            *op = draw_operator(rng);
        }
    }

    let mut row_targets = [0; 3];
    let mut col_targets = [0; 3];
    for line in Line::ALL {
        let ops = match line {
            Line::Row(row) => row_ops[row],
            Line::Column(col) => [col_ops[0][col], col_ops[1][col]],
        };
        let values = line.cells().map(|(row, col)| matrix[row][col]);
        let target = line_target(ops, values)?;
        match line {
            Line::Row(row) => row_targets[row] = target,
            Line::Column(col) => col_targets[col] = target,
        }
    }

    let puzzle = Puzzle::new(
        CandidateGrid::from_digits(matrix),
        row_ops,
        col_ops,
        row_targets,
        col_targets,
    );
    Some((puzzle, matrix))
}

fn draw_operator(rng: &mut Pcg64) -> Operator {
    Operator::ALL[rng.random_range(0..Operator::ALL.len())]
}

/// Evaluates one line exactly and keeps only whole targets in range.
fn line_target(ops: [Operator; 2], values: [u8; 3]) -> Option<i32> {
    let value = LineSpec::new(ops, 0).evaluate(values).to_integer()?;
    let target = i32::try_from(value).ok()?;
    TARGET_RANGE.contains(&target).then_some(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic() {
        let generator = PuzzleGenerator::default();
        let seed = PuzzleSeed::new("2026-01-01");
        let a = generator.generate(&seed).unwrap();
        let b = generator.generate(&seed).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn solution_is_a_permutation_of_one_to_nine() {
        let generator = PuzzleGenerator::default();
        let generated = generator.generate(&PuzzleSeed::new("2026-01-02")).unwrap();
        let mut digits: Vec<u8> = generated.solution().into_iter().flatten().collect();
        digits.sort_unstable();
        assert_eq!(digits, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn targets_are_whole_and_in_range() {
        let generator = PuzzleGenerator::default();
        let generated = generator.generate(&PuzzleSeed::new("2026-01-03")).unwrap();
        let puzzle = generated.puzzle();
        for target in puzzle
            .row_targets()
            .into_iter()
            .chain(puzzle.column_targets())
        {
            assert!(TARGET_RANGE.contains(&target), "target {target} out of range");
        }
    }

    #[test]
    fn every_line_equation_holds() {
        let generator = PuzzleGenerator::default();
        let generated = generator.generate(&PuzzleSeed::new("2026-01-04")).unwrap();
        let puzzle = generated.puzzle();
        let solution = generated.solution();
        for line in Line::ALL {
            let values = line.cells().map(|(row, col)| solution[row][col]);
            assert!(
                puzzle.spec(line).is_satisfied(values),
                "{line:?} not satisfied by {values:?}"
            );
        }
    }

    #[test]
    fn answer_view_carries_the_concrete_grid() {
        let generator = PuzzleGenerator::default();
        let generated = generator.generate(&PuzzleSeed::new("2026-01-05")).unwrap();
        // the returned instance holds the original permutation, not the
        // solver's working copy
        assert_eq!(generated.puzzle().fixed_digits(), Some(generated.solution()));
    }

    #[test]
    fn problem_view_resets_candidates_and_stays_solvable() {
        let generator = PuzzleGenerator::default();
        let generated = generator.generate(&PuzzleSeed::new("2026-01-06")).unwrap();
        let mut problem = generated.problem();
        assert!(!problem.is_complete());
        assert_eq!(problem.row_targets(), generated.puzzle().row_targets());

        let solved = Solver::new().solve(&mut problem).unwrap();
        assert!(solved);
        assert_eq!(problem.fixed_digits(), Some(generated.solution()));
    }

    #[test]
    fn zero_attempts_exhausts() {
        let generator = PuzzleGenerator::default().max_attempts(0);
        assert_eq!(
            generator.generate(&PuzzleSeed::new("2026-01-07")),
            Err(GenerateError::AttemptsExhausted { attempts: 0 })
        );
    }
}

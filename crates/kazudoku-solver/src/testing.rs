//! Test utilities for solver behavior.
//!
//! [`SolveTester`] runs the exhaustive search on a puzzle and exposes fluent
//! assertions over the outcome; [`assert_complete_and_valid`] checks a grid
//! against the Sudoku constraints directly.
//!
//! # Example
//!
//! ```
//! use kazudoku_solver::testing::SolveTester;
//!
//! SolveTester::from_str(
//!     "
//!     _4_ 8__ 2__
//!     53_ ___ __4
//!     8__ 5_9 _1_
//!     2__ ___ _45
//!     49_ ___ 83_
//!     ___ ___ 1_6
//!     3__ _2_ 5__
//!     1__ _6_ _2_
//!     _6_ __5 3__
//!     ",
//! )
//! .assert_solution_count(1)
//! .assert_backtracking_needed(true)
//! .assert_all_solutions_valid();
//! ```

use std::str::FromStr as _;

use kazudoku_core::{DigitSet, House, PuzzleGrid};

use crate::{BacktrackingSolver, SolveOutcome};

/// Asserts that a grid is completely filled and satisfies every Sudoku
/// constraint: each row, column, and box holds the digits 1-9 exactly once.
///
/// # Panics
///
/// Panics with the offending position or house on violation.
#[track_caller]
pub fn assert_complete_and_valid(grid: &PuzzleGrid) {
    for house in House::ALL {
        let mut seen = DigitSet::new();
        for pos in house.positions() {
            let Some(digit) = grid.value(pos) else {
                panic!("Expected a complete grid, but {pos} is empty");
            };
            assert!(
                !seen.contains(digit),
                "Expected a valid grid, but {digit} appears twice in {house}"
            );
            seen.insert(digit);
        }
    }
}

/// A test harness that solves a puzzle once and lets assertions chain over
/// the outcome.
///
/// All assertion methods return `self` and use `#[track_caller]` so failures
/// report the calling test's location.
#[derive(Debug)]
pub struct SolveTester {
    outcome: SolveOutcome<PuzzleGrid>,
}

impl SolveTester {
    /// Solves a puzzle grid and wraps the outcome.
    #[must_use]
    pub fn new(puzzle: &PuzzleGrid) -> Self {
        let outcome = BacktrackingSolver::new().solve(puzzle);
        Self { outcome }
    }

    /// Parses a grid string (the format of [`PuzzleGrid::from_str`]) and
    /// solves it.
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a grid.
    #[track_caller]
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        let puzzle = PuzzleGrid::from_str(s).unwrap();
        Self::new(&puzzle)
    }

    /// Asserts the number of solutions found.
    ///
    /// # Panics
    ///
    /// Panics if the count differs.
    #[track_caller]
    #[must_use]
    pub fn assert_solution_count(self, expected: usize) -> Self {
        let found = self.outcome.solutions().len();
        assert_eq!(
            found, expected,
            "Expected {expected} solution(s), found {found}"
        );
        self
    }

    /// Asserts whether the search had to leave pure propagation.
    ///
    /// # Panics
    ///
    /// Panics if the flag differs.
    #[track_caller]
    #[must_use]
    pub fn assert_backtracking_needed(self, expected: bool) -> Self {
        assert_eq!(
            self.outcome.backtracking_needed(),
            expected,
            "Expected backtracking_needed to be {expected}"
        );
        self
    }

    /// Asserts that every solution is complete and satisfies the Sudoku
    /// constraints.
    ///
    /// # Panics
    ///
    /// Panics on the first violating solution.
    #[track_caller]
    #[must_use]
    pub fn assert_all_solutions_valid(self) -> Self {
        for solution in self.outcome.solutions() {
            assert_complete_and_valid(solution.grid());
        }
        self
    }

    /// Asserts the exact text rendering of the solution at `index`.
    ///
    /// # Panics
    ///
    /// Panics if there is no such solution or the rendering differs.
    #[track_caller]
    #[must_use]
    pub fn assert_solution_rendering(self, index: usize, expected: &str) -> Self {
        let solution = self
            .outcome
            .solutions()
            .get(index)
            .unwrap_or_else(|| panic!("No solution at index {index}"));
        assert_eq!(solution.grid().to_string(), expected);
        self
    }

    /// Unwraps the outcome for assertions the fluent surface does not cover.
    #[must_use]
    pub fn into_outcome(self) -> SolveOutcome<PuzzleGrid> {
        self.outcome
    }
}

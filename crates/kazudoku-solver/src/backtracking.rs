//! Exhaustive depth-first search with copy-on-branch isolation.

use log::debug;

use crate::{SolverGrid, SolverStep, fill_single_candidates};

/// One fully-filled, constraint-satisfying completion of a puzzle, together
/// with the ordered steps that derived it.
///
/// Solutions are immutable once emitted and share no mutable state with
/// each other: every bifurcation in the search works on its own grid copy.
#[derive(Debug, Clone)]
pub struct Solution<G> {
    grid: G,
    steps: Vec<SolverStep>,
}

impl<G> Solution<G> {
    /// Returns the solved grid.
    #[must_use]
    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// Returns the fills that produced this solution, in chronological
    /// order.
    #[must_use]
    pub fn steps(&self) -> &[SolverStep] {
        &self.steps
    }

    /// Consumes the solution, returning the grid and its step trail.
    #[must_use]
    pub fn into_parts(self) -> (G, Vec<SolverStep>) {
        (self.grid, self.steps)
    }
}

/// The result of an exhaustive solve: every solution found, plus whether
/// any branch had to leave pure propagation.
#[derive(Debug, Clone)]
pub struct SolveOutcome<G> {
    solutions: Vec<Solution<G>>,
    backtracking_needed: bool,
}

impl<G> SolveOutcome<G> {
    /// Returns the solutions in traversal order.
    #[must_use]
    pub fn solutions(&self) -> &[Solution<G>] {
        &self.solutions
    }

    /// Returns `true` iff at least one branch required guessing: the
    /// puzzle was not solvable by single-candidate deduction alone,
    /// even if every branch then finished via a cascade of deductions after
    /// one guess.
    #[must_use]
    pub fn backtracking_needed(&self) -> bool {
        self.backtracking_needed
    }

    /// Consumes the outcome, returning the solutions.
    #[must_use]
    pub fn into_solutions(self) -> Vec<Solution<G>> {
        self.solutions
    }
}

/// An exhaustive Sudoku solver: single-candidate propagation first,
/// depth-first backtracking search where deduction stalls.
///
/// The search enumerates *every* completion consistent with the puzzle's
/// constraints; there is no solution cap and no time budget. For
/// well-formed puzzles this is fast, but under-constrained inputs (fewer
/// than 17 givens) can have astronomically many completions and may not
/// terminate in practical time. That is accepted behavior; callers needing
/// bounded latency must impose a cutoff by other means.
///
/// # Examples
///
/// ```
/// use kazudoku_core::PuzzleGrid;
/// use kazudoku_solver::BacktrackingSolver;
///
/// let puzzle: PuzzleGrid = "
///     _4_ 8__ 2__
///     53_ ___ __4
///     8__ 5_9 _1_
///     2__ ___ _45
///     49_ ___ 83_
///     ___ ___ 1_6
///     3__ _2_ 5__
///     1__ _6_ _2_
///     _6_ __5 3__
/// "
/// .parse()?;
///
/// let outcome = BacktrackingSolver::new().solve(&puzzle);
/// assert_eq!(outcome.solutions().len(), 1);
/// assert!(outcome.backtracking_needed());
/// # Ok::<(), kazudoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        BacktrackingSolver
    }

    /// Finds every completion of a puzzle.
    ///
    /// The search starts from the puzzle's cleared copy: pre-existing
    /// guesses are discarded, givens are kept. Each branch runs the
    /// single-candidate pass, then either emits a solution, fills a sole
    /// remaining candidate in place, or bifurcates into one independent
    /// grid copy per candidate of the first empty cell, explored
    /// depth-first in ascending digit order. A branch whose cell has no
    /// candidates is a dead end and is dropped without emitting anything.
    ///
    /// Branch exploration order only affects the order solutions are
    /// emitted, never the set: the branch guessing the smallest candidate
    /// is fully resolved before its next sibling starts.
    pub fn solve<G>(&self, puzzle: &G) -> SolveOutcome<G>
    where
        G: SolverGrid,
    {
        let mut outcome = SolveOutcome {
            solutions: Vec::new(),
            backtracking_needed: false,
        };
        Self::explore(puzzle.cleared_copy(), Vec::new(), &mut outcome);
        debug!(
            "search finished: {} solution(s), backtracking needed: {}",
            outcome.solutions.len(),
            outcome.backtracking_needed
        );
        outcome
    }

    fn explore<G>(mut grid: G, mut steps: Vec<SolverStep>, outcome: &mut SolveOutcome<G>)
    where
        G: SolverGrid,
    {
        loop {
            let (solved, fills) = fill_single_candidates(&mut grid);
            steps.extend(fills);
            if solved {
                debug!("solution found after {} steps", steps.len());
                outcome.solutions.push(Solution { grid, steps });
                return;
            }
            outcome.backtracking_needed = true;

            let Some(pos) = grid.first_empty_cell() else {
                return;
            };
            let candidates = grid.available_guesses(pos);
            if candidates.is_empty() {
                debug!("dead end at {pos}");
                return;
            }
            if let Some(digit) = candidates.as_single() {
                // A sole candidate is no real bifurcation; fill in place
                // instead of cloning.
                grid.set_guess(pos, digit);
                steps.push(SolverStep::backtracking(pos, digit));
                continue;
            }

            debug!("bifurcating at {pos} into {} branches", candidates.len());
            for digit in candidates {
                let mut branch = grid.snapshot_copy();
                branch.set_guess(pos, digit);
                let mut branch_steps = steps.clone();
                branch_steps.push(SolverStep::backtracking(pos, digit));
                Self::explore(branch, branch_steps, outcome);
            }
            return;
        }
    }
}

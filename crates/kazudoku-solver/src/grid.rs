//! The grid capability surface the solver depends on.

use std::fmt::Debug;

use kazudoku_core::{Digit, DigitSet, Position, PuzzleGrid};

/// The capability set a grid must offer to be solvable.
///
/// The propagation pass and the backtracking search are generic over this
/// trait and never name a concrete grid type, so the algorithms stay
/// reusable for any grid shape that can answer these queries.
/// [`PuzzleGrid`] is the one implementation today.
///
/// Cells are addressed by [`Position`] throughout: a position identifies the
/// same logical cell in every copy of a grid, which is what lets a branch
/// re-target the cell it is guessing into after taking a snapshot.
pub trait SolverGrid: Debug {
    /// Returns the first empty cell in scan order, or `None` if every cell
    /// has a value.
    fn first_empty_cell(&self) -> Option<Position>;

    /// Returns the first empty cell strictly after `pos` in scan order.
    ///
    /// Running past the end of the grid yields `None`; this is a normal
    /// end-of-scan signal, never an error.
    fn next_empty_cell(&self, pos: Position) -> Option<Position>;

    /// Returns the candidate digits for the cell at `pos`; empty if the
    /// cell already has a value.
    fn available_guesses(&self, pos: Position) -> DigitSet;

    /// Writes a guess into the cell at `pos`.
    fn set_guess(&mut self, pos: Position, digit: Digit);

    /// Returns an independent copy carrying the same givens and the current
    /// guesses, safe to mutate without affecting `self`.
    fn snapshot_copy(&self) -> Self;

    /// Returns an independent copy carrying the same givens and no guesses.
    fn cleared_copy(&self) -> Self;
}

impl SolverGrid for PuzzleGrid {
    fn first_empty_cell(&self) -> Option<Position> {
        self.first_empty_cell()
    }

    fn next_empty_cell(&self, pos: Position) -> Option<Position> {
        self.next_empty_cell(pos)
    }

    fn available_guesses(&self, pos: Position) -> DigitSet {
        self.available_guesses(pos)
    }

    fn set_guess(&mut self, pos: Position, digit: Digit) {
        self.set_guess(pos, digit);
    }

    fn snapshot_copy(&self) -> Self {
        self.clone()
    }

    fn cleared_copy(&self) -> Self {
        self.cleared_copy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The trait must resolve to the inherent grid behavior, including the
    // two copy flavors keeping their distinct layering semantics.
    #[test]
    fn test_puzzle_grid_implements_the_capability_set() {
        fn probe<G: SolverGrid>(grid: &G) -> (Option<Position>, DigitSet) {
            let first = grid.first_empty_cell();
            let candidates = first.map_or(DigitSet::EMPTY, |pos| grid.available_guesses(pos));
            (first, candidates)
        }

        let mut grid: PuzzleGrid = "
            12_ 456 789
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        "
        .parse()
        .unwrap();

        let (first, candidates) = probe(&grid);
        assert_eq!(first, Some(Position::new(2, 0)));
        assert_eq!(candidates, DigitSet::from_elem(Digit::D3));

        SolverGrid::set_guess(&mut grid, Position::new(2, 0), Digit::D3);

        let snapshot = grid.snapshot_copy();
        assert_eq!(snapshot.value(Position::new(2, 0)), Some(Digit::D3));
        let cleared = SolverGrid::cleared_copy(&grid);
        assert_eq!(cleared.value(Position::new(2, 0)), None);
        assert_eq!(cleared.value(Position::new(0, 0)), Some(Digit::D1));
    }
}

//! The single-candidate propagation pass.

use log::trace;

use crate::{SolverGrid, SolverStep};

/// Repeatedly fills every cell that has exactly one candidate.
///
/// The grid is mutated in place. Empty cells are scanned in row-major order;
/// when a cell's candidate set has exactly one member, that digit is
/// assigned immediately, a [`SolverStep`] is recorded, and the scan restarts
/// from the grid's first empty cell. A fill can create new single-candidate
/// cells *earlier* in scan order, and restarting (rather than continuing
/// linearly) is what makes repeated runs produce the same fills in the same
/// order. A cell with any other candidate count moves the scan to the next
/// empty cell.
///
/// Returns whether the pass left the grid fully solved, plus the fills it
/// performed in chronological order. A grid with no empty cells at entry
/// reports solved with an empty step list. A cell with *no* candidates is
/// skipped like any other non-single cell: a stalled path is the caller's
/// concern, not an error.
///
/// # Examples
///
/// ```
/// use kazudoku_core::PuzzleGrid;
/// use kazudoku_solver::fill_single_candidates;
///
/// let mut grid: PuzzleGrid = "
///     6_2 41_ __8
///     _15 7_3 __9
///     734 __8 _6_
///     5_3 2_4 ___
///     __8 _9_ __5
///     __6 _57 _3_
///     _5_ _7_ 9_4
///     4_9 ___ 25_
///     _87 ___ 6_3
/// "
/// .parse()?;
///
/// let (solved, steps) = fill_single_candidates(&mut grid);
/// assert!(solved);
/// assert_eq!(steps.len(), 43);
/// # Ok::<(), kazudoku_core::ParseGridError>(())
/// ```
pub fn fill_single_candidates<G>(grid: &mut G) -> (bool, Vec<SolverStep>)
where
    G: SolverGrid,
{
    let mut steps = Vec::new();
    let mut solved = true;
    let mut cursor = grid.first_empty_cell();
    while let Some(pos) = cursor {
        let candidates = grid.available_guesses(pos);
        if let Some(digit) = candidates.as_single() {
            grid.set_guess(pos, digit);
            trace!("single candidate {digit} at {pos}");
            steps.push(SolverStep::single_candidate(pos, digit));
            solved = true;
            cursor = grid.first_empty_cell();
        } else {
            solved = false;
            cursor = grid.next_empty_cell(pos);
        }
    }
    (solved, steps)
}

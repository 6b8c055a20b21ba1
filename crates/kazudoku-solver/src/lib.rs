//! Solving for kazudoku puzzles.
//!
//! Two cooperating pieces, both generic over the [`SolverGrid`] capability
//! trait:
//!
//! 1. [`fill_single_candidates`]: the propagation pass that fills every
//!    cell with exactly one candidate, restarting its scan after each fill.
//! 2. [`BacktrackingSolver`]: the exhaustive depth-first search that runs
//!    propagation on every branch and bifurcates (one grid copy per
//!    candidate) where deduction stalls, collecting *every* valid
//!    completion.
//!
//! Each fill is recorded as a [`SolverStep`], so every [`Solution`] carries
//! an audit trail of how it was derived: which cells were deduced
//! (`single-candidate`) and which were guessed (`backtracking`).
//!
//! Branch isolation comes from copy-on-branch, not synchronization: no grid
//! is ever shared for mutation between two live branches. The search logs
//! branch events through the [`log`] facade; binaries decide the sink.
//!
//! # Examples
//!
//! ```
//! use kazudoku_core::PuzzleGrid;
//! use kazudoku_solver::BacktrackingSolver;
//!
//! let puzzle: PuzzleGrid = "
//!     6_2 41_ __8
//!     _15 7_3 __9
//!     734 __8 _6_
//!     5_3 2_4 ___
//!     __8 _9_ __5
//!     __6 _57 _3_
//!     _5_ _7_ 9_4
//!     4_9 ___ 25_
//!     _87 ___ 6_3
//! "
//! .parse()?;
//!
//! let outcome = BacktrackingSolver::new().solve(&puzzle);
//! assert_eq!(outcome.solutions().len(), 1);
//! // This one falls to deduction alone.
//! assert!(!outcome.backtracking_needed());
//!
//! for step in outcome.solutions()[0].steps() {
//!     println!("{step}");
//! }
//! # Ok::<(), kazudoku_core::ParseGridError>(())
//! ```

pub mod backtracking;
pub mod grid;
pub mod single_candidate;
pub mod step;
pub mod testing;

pub use self::{
    backtracking::{BacktrackingSolver, SolveOutcome, Solution},
    grid::SolverGrid,
    single_candidate::fill_single_candidates,
    step::{SolveTechnique, SolverStep},
};

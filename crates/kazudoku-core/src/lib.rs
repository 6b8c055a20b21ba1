//! Core data structures for the kazudoku solver.
//!
//! This crate provides the grid data model shared by everything that solves
//! or displays puzzles:
//!
//! - [`digit`]: type-safe digits 1-9
//! - [`digit_set`]: 9-bit sets of digits with ascending iteration
//! - [`position`]: board coordinates with a fixed row-major scan order
//! - [`house`]: rows, columns, and 3×3 boxes
//! - [`grid`]: the two-layer (given/guess) puzzle grid with candidate
//!   queries, text parsing, and fixed-width rendering
//!
//! The grid keeps the puzzle's original *given* digits separate from the
//! *guesses* a solver fills in. Givens are immutable for the lifetime of a
//! grid; copies preserve the distinction, which is what makes copy-on-branch
//! search isolation cheap and safe.
//!
//! # Examples
//!
//! ```
//! use kazudoku_core::{Digit, Position, PuzzleGrid};
//!
//! let mut grid: PuzzleGrid = "
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
//! // The cell at column 1, row 4 can only hold 2, 4, or 7.
//! let candidates = grid.available_guesses(Position::new(1, 4));
//! assert_eq!(candidates.len(), 3);
//!
//! grid.set_guess(Position::new(1, 0), Digit::D9);
//! assert_eq!(grid.value(Position::new(1, 0)), Some(Digit::D9));
//! # Ok::<(), kazudoku_core::ParseGridError>(())
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{Cell, InvalidGivensError, ParseGridError, PuzzleGrid},
    house::House,
    position::Position,
};

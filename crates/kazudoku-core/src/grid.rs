//! The puzzle grid: given and guessed cell layers, scans, and candidate
//! queries.
//!
//! [`PuzzleGrid`] keeps two layers per cell: the immutable *given* digits the
//! puzzle started with, and the mutable *guess* digits a solver fills in.
//! The distinction is never collapsed: copying a grid preserves givens as
//! givens and guesses as guesses, so a branch copy can always be traced back
//! to the original puzzle.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Digit, DigitSet, House, Position};

/// A single cell: an immutable `given` layer and a mutable `guess` layer.
///
/// The cell's *effective value* is the given if present, else the guess.
/// A cell is *fillable* iff it has no given; it is *empty* iff it has no
/// effective value at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    given: Option<Digit>,
    guess: Option<Digit>,
}

impl Cell {
    const fn from_given(given: Option<Digit>) -> Self {
        Self { given, guess: None }
    }

    /// Returns the given digit, if any.
    #[must_use]
    pub const fn given(self) -> Option<Digit> {
        self.given
    }

    /// Returns the guessed digit, if any.
    #[must_use]
    pub const fn guess(self) -> Option<Digit> {
        self.guess
    }

    /// Returns the effective value: the given if present, else the guess.
    #[must_use]
    pub const fn value(self) -> Option<Digit> {
        match self.given {
            Some(digit) => Some(digit),
            None => self.guess,
        }
    }

    /// Returns `true` if the cell may be written to (it has no given).
    #[must_use]
    pub const fn is_fillable(self) -> bool {
        self.given.is_none()
    }

    /// Returns `true` if the cell has no effective value.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.value().is_none()
    }
}

/// A 9×9 Sudoku grid.
///
/// # Examples
///
/// ```
/// use kazudoku_core::{Digit, Position, PuzzleGrid};
///
/// let grid: PuzzleGrid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// assert_eq!(grid.value(Position::new(0, 0)), Digit::new(5));
/// assert_eq!(grid.first_empty_cell(), Some(Position::new(2, 0)));
/// # Ok::<(), kazudoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleGrid {
    cells: [Cell; 81],
}

impl PuzzleGrid {
    /// Creates a grid from a 9×9 matrix of raw digits in row-major order
    /// (outer index is the row).
    ///
    /// A `0` entry marks an empty cell; raw input formats commonly cannot
    /// distinguish "digit 0" from "no value", and this constructor adopts
    /// that reading.
    ///
    /// # Panics
    ///
    /// Panics if any entry is greater than 9.
    #[must_use]
    pub fn from_givens(givens: &[[u8; 9]; 9]) -> Self {
        let mut cells = [Cell::default(); 81];
        for pos in Position::ALL {
            let raw = givens[usize::from(pos.y())][usize::from(pos.x())];
            assert!(raw <= 9, "given at {pos} out of range: {raw}");
            cells[usize::from(pos.cell_index())] = Cell::from_given(Digit::new(raw));
        }
        Self { cells }
    }

    /// Returns the cell at a position.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.cell_index() as usize]
    }

    /// Returns the effective value at a position.
    #[must_use]
    pub const fn value(&self, pos: Position) -> Option<Digit> {
        self.cell(pos).value()
    }

    /// Writes a guess into a fillable cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell holds a given; givens are immutable for the
    /// lifetime of the grid.
    pub fn set_guess(&mut self, pos: Position, digit: Digit) {
        let cell = &mut self.cells[usize::from(pos.cell_index())];
        assert!(cell.given.is_none(), "cannot guess the given cell at {pos}");
        cell.guess = Some(digit);
    }

    /// Returns the first empty cell in row-major order, or `None` if every
    /// cell has an effective value.
    ///
    /// Guessed cells are skipped even though they remain fillable; the scan
    /// looks for cells that still need a value. The row-major order is
    /// deterministic and is what makes solver-step ordering reproducible.
    #[must_use]
    pub fn first_empty_cell(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self.cell(pos).is_empty())
    }

    /// Returns the first empty cell strictly after `pos` in row-major order.
    ///
    /// Running past the end of the grid is a normal end-of-scan signal and
    /// yields `None`, never an error.
    #[must_use]
    pub fn next_empty_cell(&self, pos: Position) -> Option<Position> {
        Position::ALL
            .into_iter()
            .skip(usize::from(pos.cell_index()) + 1)
            .find(|&pos| self.cell(pos).is_empty())
    }

    /// Returns the digits not yet effective anywhere in a house.
    #[must_use]
    pub fn candidates_in(&self, house: House) -> DigitSet {
        let mut candidates = DigitSet::FULL;
        for pos in house.positions() {
            if let Some(digit) = self.value(pos) {
                candidates.remove(digit);
            }
        }
        candidates
    }

    /// Returns the candidate digits for a cell: the intersection of the
    /// row, column, and box candidate sets.
    ///
    /// A cell that already has an effective value needs no guess and gets
    /// the empty set. The tri-intersection realization (three per-house
    /// sets, each starting from the full set, intersected) is the invariant
    /// the search logic depends on: a digit absent from any one of the
    /// three sets is absent from the result.
    ///
    /// Cost is constant per call: 27 cell reads.
    #[must_use]
    pub fn available_guesses(&self, pos: Position) -> DigitSet {
        if self.value(pos).is_some() {
            return DigitSet::EMPTY;
        }
        let [row, column, r#box] = House::containing(pos);
        self.candidates_in(row) & self.candidates_in(column) & self.candidates_in(r#box)
    }

    /// Returns a pristine copy: the same givens, no guesses.
    #[must_use]
    pub fn cleared_copy(&self) -> Self {
        let mut cells = self.cells;
        for cell in &mut cells {
            cell.guess = None;
        }
        Self { cells }
    }

    /// Returns `true` if every cell has an effective value.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Checks that no digit is given twice in any row, column, or box.
    ///
    /// The solving algorithms do not call this: a contradictory given layout
    /// is outside their contract and simply yields zero solutions. Callers
    /// that want to reject such input up front can run this first.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGivensError`] naming the offending house and digit.
    pub fn check_givens(&self) -> Result<(), InvalidGivensError> {
        for house in House::ALL {
            let mut seen = DigitSet::new();
            for pos in house.positions() {
                if let Some(digit) = self.cell(pos).given() {
                    if seen.contains(digit) {
                        return Err(InvalidGivensError { house, digit });
                    }
                    seen.insert(digit);
                }
            }
        }
        Ok(())
    }
}

impl Display for PuzzleGrid {
    /// Renders the grid in a fixed-width 13-line layout.
    ///
    /// A `-------------` separator precedes rows 0, 3, and 6 and follows
    /// row 8; each data row is `|` + three cells + `|` + three cells + `|` +
    /// three cells + `|`, a cell being its effective digit or a space.
    /// There is no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y % 3 == 0 {
                f.write_str("-------------\n")?;
            }
            for x in 0..9 {
                if x % 3 == 0 {
                    f.write_str("|")?;
                }
                match self.value(Position::new(x, y)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_str(" ")?,
                }
            }
            f.write_str("|\n")?;
        }
        f.write_str("-------------")
    }
}

impl FromStr for PuzzleGrid {
    type Err = ParseGridError;

    /// Parses a grid from a string of 81 cells in row-major order.
    ///
    /// Digits `1`-`9` fill cells; `.`, `_`, and `0` mark empty cells;
    /// whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let mut cells = [Cell::default(); 81];
        let mut count = 0;
        for character in s.chars().filter(|c| !c.is_whitespace()) {
            let given = match character {
                '.' | '_' | '0' => None,
                '1'..='9' => Digit::new(character as u8 - b'0'),
                _ => return Err(ParseGridError::UnexpectedCharacter { character }),
            };
            if count < 81 {
                cells[count] = Cell::from_given(given);
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { count });
        }
        Ok(Self { cells })
    }
}

/// An error parsing a grid string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The string contained something other than a digit, an empty-cell
    /// marker, or whitespace.
    #[display("unexpected character {character:?} in grid string")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
    },
    /// The string did not contain exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    WrongCellCount {
        /// The number of cells found.
        count: usize,
    },
}

/// A given layout that already violates Sudoku uniqueness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid givens: {digit} appears more than once in {house}")]
pub struct InvalidGivensError {
    /// The house containing the duplicate.
    pub house: House,
    /// The duplicated digit.
    pub digit: Digit,
}

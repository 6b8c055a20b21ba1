//! Audit records of solver progress.

use std::fmt::{self, Display};

use kazudoku_core::{Digit, Position};

/// The technique that produced a fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum SolveTechnique {
    /// The cell had exactly one candidate and was filled by direct deduction.
    #[display("single-candidate")]
    SingleCandidate,
    /// The cell was filled by the search, as one branch among its candidates.
    #[display("backtracking")]
    Backtracking,
}

/// An immutable record of one fill event.
///
/// The ordered list of steps attached to a solution is its audit trail:
/// replaying the steps against the pristine puzzle reproduces the solution.
///
/// # Examples
///
/// ```
/// use kazudoku_core::{Digit, Position};
/// use kazudoku_solver::{SolveTechnique, SolverStep};
///
/// let step = SolverStep::new(
///     SolveTechnique::SingleCandidate,
///     Position::new(1, 0),
///     Digit::D9,
/// );
/// assert_eq!(step.to_string(), "single-candidate: 9 at (1, 0)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverStep {
    technique: SolveTechnique,
    position: Position,
    digit: Digit,
}

impl SolverStep {
    /// Creates a step record.
    #[must_use]
    pub const fn new(technique: SolveTechnique, position: Position, digit: Digit) -> Self {
        Self {
            technique,
            position,
            digit,
        }
    }

    pub(crate) const fn single_candidate(position: Position, digit: Digit) -> Self {
        Self::new(SolveTechnique::SingleCandidate, position, digit)
    }

    pub(crate) const fn backtracking(position: Position, digit: Digit) -> Self {
        Self::new(SolveTechnique::Backtracking, position, digit)
    }

    /// Returns the technique that produced the fill.
    #[must_use]
    pub const fn technique(self) -> SolveTechnique {
        self.technique
    }

    /// Returns the position that was filled.
    #[must_use]
    pub const fn position(self) -> Position {
        self.position
    }

    /// Returns the digit that was assigned.
    #[must_use]
    pub const fn digit(self) -> Digit {
        self.digit
    }
}

impl Display for SolverStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} at {}", self.technique, self.digit, self.position)
    }
}

//! Newly proposed letter placements.

use std::fmt::{self, Display};

use crate::Letter;

/// A letter proposed for the current move, with its target cell.
///
/// Coordinates are signed so that placements off the top or left edge can be represented
/// (and then rejected) rather than failing to parse. The JSON field for the column is
/// `col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Candidate {
    /// Target row.
    pub row: i64,
    /// Target column.
    #[serde(rename = "col")]
    pub column: i64,
    /// The letter being placed.
    pub letter: Letter,
}

impl Candidate {
    /// Creates a new candidate.
    #[must_use]
    pub const fn new(row: i64, column: i64, letter: Letter) -> Self {
        Self {
            row,
            column,
            letter,
        }
    }

    /// Returns `true` if this candidate targets the given cell.
    #[must_use]
    pub fn targets(&self, row: usize, column: usize) -> bool {
        i64::try_from(row).is_ok_and(|r| r == self.row)
            && i64::try_from(column).is_ok_and(|c| c == self.column)
    }
}

impl Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) {}", self.row, self.column, self.letter)
    }
}

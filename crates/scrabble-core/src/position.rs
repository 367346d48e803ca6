//! Board position representation.

use std::fmt::{self, Display};

/// A cell coordinate on a [`Board`](crate::Board).
///
/// Rows are counted from the top and columns from the left, both starting at 0.
/// A `Position` is only handed out by [`Board::position`](crate::Board::position)
/// once the coordinate has been checked against the board extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Returns the row index.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    pub const fn column(self) -> usize {
        self.column
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

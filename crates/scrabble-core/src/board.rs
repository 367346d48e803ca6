//! Rectangular letter grid.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{CoreError, Letter, Position};

/// The contents of a single board cell: empty, or holding a letter.
pub type Cell = Option<Letter>;

/// A rectangular grid of cells.
///
/// Every row has the same length; [`Board::new`] refuses ragged input, so code holding a
/// `Board` can index any [`Position`] obtained from [`Board::position`] without further
/// checks.
///
/// The JSON form is an array of rows, each an array of strings where `""` is an empty
/// cell and a one-character string is a letter.
///
/// # Examples
///
/// ```
/// use scrabble_core::{Board, Letter, Position};
///
/// let mut board = Board::empty(3, 4);
/// let pos = board.position(1, 2).expect("in bounds");
/// board[pos] = Some(Letter::try_from('x')?);
///
/// assert_eq!(board.letter_count(), 1);
/// assert_eq!(board.position(3, 0), None);
/// # Ok::<(), scrabble_core::CoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct Board {
    rows: Vec<Vec<Cell>>,
    width: usize,
}

impl Board {
    /// Creates a board from rows of cells.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RaggedRows`] if any row differs in length from the first row.
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self, CoreError> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(CoreError::RaggedRows {
                row,
                expected: width,
                found: cells.len(),
            });
        }
        Ok(Self { rows, width })
    }

    /// Creates a board of the given size with every cell empty.
    #[must_use]
    pub fn empty(height: usize, width: usize) -> Self {
        Self {
            rows: vec![vec![None; width]; height],
            width,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of cells in each row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Converts a signed coordinate into a [`Position`] if it lies on the board.
    ///
    /// Returns `None` for negative coordinates and for coordinates at or beyond the
    /// board extent.
    #[must_use]
    pub fn position(&self, row: i64, column: i64) -> Option<Position> {
        let row = usize::try_from(row).ok()?;
        let column = usize::try_from(column).ok()?;
        (row < self.height() && column < self.width()).then(|| Position::new(row, column))
    }

    /// Returns the cell at `pos`, or `None` if `pos` is outside the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.rows.get(pos.row())?.get(pos.column())
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Returns the number of non-empty cells.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count()
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    fn index(&self, pos: Position) -> &Self::Output {
        &self.rows[pos.row()][pos.column()]
    }
}

impl IndexMut<Position> for Board {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.rows[pos.row()][pos.column()]
    }
}

impl TryFrom<Vec<Vec<String>>> for Board {
    type Error = CoreError;

    fn try_from(rows: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|text| {
                        if text.is_empty() {
                            Ok(None)
                        } else {
                            text.parse().map(Some)
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rows)
    }
}

impl From<Board> for Vec<Vec<String>> {
    fn from(board: Board) -> Self {
        board
            .rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| cell.map(String::from).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

/// Parses a board from a compact text grid.
///
/// Each non-blank line is one row. `_` and `.` denote empty cells, any other
/// non-whitespace character is a letter, and whitespace inside a line is ignored.
impl FromStr for Board {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|ch| !ch.is_whitespace())
                    .map(|ch| match ch {
                        '_' | '.' => Ok(None),
                        ch => Letter::try_from(ch).map(Some),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .filter(|row| !matches!(row, Ok(cells) if cells.is_empty()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rows)
    }
}

/// Formats the board in the same compact form accepted by [`FromStr`].
impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for cell in row {
                match cell {
                    Some(letter) => write!(f, "{letter}")?,
                    None => f.write_str("_")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

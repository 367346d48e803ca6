//! A board snapshot paired with the candidates of the move under consideration.

use std::fmt::{self, Display};

use crate::{Board, Candidate};

/// A board snapshot and the candidate set proposed for one move.
///
/// This is the unit handed out by board providers and consumed by the move validator.
///
/// # Examples
///
/// ```
/// use scrabble_core::BoardState;
///
/// let state: BoardState = serde_json::from_str(r#"{
///     "board": [["c", "a", "t", ""]],
///     "candidate": [{ "row": 0, "col": 3, "letter": "s" }]
/// }"#)?;
/// assert_eq!(state.candidates.len(), 1);
/// assert_eq!(state.candidates[0].column, 3);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct BoardState {
    /// The board as it stands before the move.
    pub board: Board,
    /// The letters proposed this turn.
    #[serde(rename = "candidate", default)]
    pub candidates: Vec<Candidate>,
}

impl BoardState {
    /// Creates a new board state.
    #[must_use]
    pub fn new(board: Board, candidates: Vec<Candidate>) -> Self {
        Self { board, candidates }
    }
}

/// Renders the board as a bordered grid followed by the candidate list.
impl Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board:")?;
        let separator = "-".repeat(self.board.width() * 2);
        for row in self.board.rows() {
            writeln!(f, "{separator}")?;
            for cell in row {
                match cell {
                    Some(letter) => write!(f, "|{letter}")?,
                    None => f.write_str("| ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        write!(f, "Candidate:")?;
        for candidate in &self.candidates {
            write!(f, "\n  {candidate}")?;
        }
        Ok(())
    }
}

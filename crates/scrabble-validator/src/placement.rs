//! Placement check: every candidate must target an in-bounds, empty cell.

use scrabble_core::{Board, Candidate, Position};

use crate::Rejection;

/// Resolves each candidate to a board position, rejecting the whole move on the first
/// candidate that is off the board or targets an occupied cell.
///
/// The returned positions are in the same order as `candidates`. The board is only read.
///
/// # Errors
///
/// Returns [`Rejection::OutOfBounds`] for a candidate outside the board, or
/// [`Rejection::Occupied`] for a candidate whose cell already holds a letter.
pub fn placement_positions(
    board: &Board,
    candidates: &[Candidate],
) -> Result<Vec<Position>, Rejection> {
    candidates
        .iter()
        .map(|candidate| {
            let position = board
                .position(candidate.row, candidate.column)
                .ok_or(Rejection::OutOfBounds {
                    row: candidate.row,
                    column: candidate.column,
                })?;
            if board[position].is_some() {
                return Err(Rejection::Occupied { position });
            }
            Ok(position)
        })
        .collect()
}

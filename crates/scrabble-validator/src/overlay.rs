use std::ops::Deref;

use scrabble_core::{Board, Cell, Letter, Position};

/// A scoped overlay of candidate letters onto a board.
///
/// The letters are written when the overlay is created and the previous cell contents are
/// put back when it is dropped, whichever way the enclosing scope exits.
#[derive(Debug)]
pub(crate) struct Overlay<'a> {
    board: &'a mut Board,
    saved: Vec<(Position, Cell)>,
}

impl<'a> Overlay<'a> {
    /// Writes each letter to its position.
    ///
    /// Positions must lie on the board.
    pub(crate) fn apply<I>(board: &'a mut Board, placements: I) -> Self
    where
        I: IntoIterator<Item = (Position, Letter)>,
    {
        let mut saved = Vec::new();
        for (pos, letter) in placements {
            saved.push((pos, board[pos].replace(letter)));
        }
        Self { board, saved }
    }
}

impl Deref for Overlay<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        &*self.board
    }
}

impl Drop for Overlay<'_> {
    fn drop(&mut self) {
        // reverse order so repeated positions end with their original contents
        for (pos, cell) in self.saved.drain(..).rev() {
            self.board[pos] = cell;
        }
    }
}

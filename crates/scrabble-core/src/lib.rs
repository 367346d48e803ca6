//! Core data structures for the word-placement grid game.
//!
//! This crate provides the in-memory model shared by the move validator, the board
//! providers, and the level runner.
//!
//! # Overview
//!
//! - [`letter`]: A single letter tile ([`Letter`]).
//! - [`position`]: In-bounds grid coordinates ([`Position`]).
//! - [`board`]: A rectangular grid of optional letters ([`Board`]).
//! - [`candidate`]: A newly proposed letter placement ([`Candidate`]).
//! - [`board_state`]: A board snapshot together with the candidates of the
//!   current move ([`BoardState`]).
//!
//! All types round-trip through the JSON shape used by the board service:
//!
//! ```json
//! {
//!   "board": [["c", "a", "t", ""], ["", "", "", ""]],
//!   "candidate": [{ "row": 0, "col": 3, "letter": "s" }]
//! }
//! ```
//!
//! # Examples
//!
//! ```
//! use scrabble_core::{Board, BoardState, Candidate, Letter, Position};
//!
//! let board: Board = "
//!     cat_
//!     ____
//! "
//! .parse()?;
//! let state = BoardState::new(board, vec![Candidate::new(0, 3, Letter::try_from('s')?)]);
//!
//! assert_eq!(state.board.height(), 2);
//! assert_eq!(state.board.width(), 4);
//! assert_eq!(state.board[Position::new(0, 1)], Some(Letter::try_from('a')?));
//! assert_eq!(state.board.position(0, 3), Some(Position::new(0, 3)));
//! assert_eq!(state.board.position(-1, 3), None);
//! # Ok::<(), scrabble_core::CoreError>(())
//! ```

pub mod board;
pub mod board_state;
pub mod candidate;
mod error;
pub mod letter;
pub mod position;

// Re-export commonly used types
pub use self::{
    board::{Board, Cell},
    board_state::BoardState,
    candidate::Candidate,
    error::CoreError,
    letter::Letter,
    position::Position,
};

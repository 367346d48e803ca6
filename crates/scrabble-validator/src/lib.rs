//! Move validation for the word-placement grid game.
//!
//! Given a [`BoardState`] (a board snapshot plus the candidates proposed this turn),
//! [`MoveValidator`] decides whether the move is legal and whether every word it forms
//! is a real word. The checks run as a pipeline, each stage a precondition for the next:
//!
//! 1. [`alignment`]: candidates lie on one row or one column with no gaps.
//! 2. [`placement`]: every candidate targets an in-bounds, empty cell.
//! 3. [`words`]: candidates are overlaid on the board and every maximal run of two or
//!    more letters along a row or column is collected.
//! 4. Isolation: a move whose formed word consists of exactly the new letters and
//!    nothing else is rejected.
//! 5. Every formed word is checked against a [`WordOracle`].
//!
//! The board is mutated only transiently during step 3 and is always restored before
//! validation returns.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashSet;
//!
//! use scrabble_core::{BoardState, Candidate, Letter};
//! use scrabble_validator::MoveValidator;
//!
//! let dictionary: HashSet<String> = ["cats".to_owned()].into();
//! let validator = MoveValidator::new(dictionary);
//!
//! let mut state = BoardState::new(
//!     "cat_\n____".parse()?,
//!     vec![Candidate::new(0, 3, Letter::try_from('s')?)],
//! );
//! assert!(validator.validate_move(&mut state));
//!
//! // The board is left exactly as it was.
//! assert_eq!(state.board.to_string(), "cat_\n____\n");
//! # Ok::<(), scrabble_core::CoreError>(())
//! ```
//!
//! [`BoardState`]: scrabble_core::BoardState

pub use self::{
    alignment::Alignment,
    oracle::WordOracle,
    validator::{MoveValidator, Rejection, Verdict},
    words::{ExtractedWord, FormedWords, MIN_WORD_LEN},
};

pub mod alignment;
mod oracle;
mod overlay;
pub mod placement;
mod validator;
pub mod words;

#[cfg(test)]
mod testing;

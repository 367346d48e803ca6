//! Board providers and word checkers for the level runner.
//!
//! A [`ScrabbleClient`] supplies three things: the [`BoardState`] for a level, a
//! verdict on whether an answer for that level is correct, and whether a string is a
//! valid word. Two implementations are provided:
//!
//! - [`LocalClient`]: reads level files from a directory and words from a word list.
//! - [`MockClient`]: a fixed board that accepts every word and every answer.
//!
//! [`ClientOracle`] adapts any client into a [`WordOracle`] for the move validator,
//! treating client failures as "not a word".
//!
//! [`BoardState`]: scrabble_core::BoardState
//! [`WordOracle`]: scrabble_validator::WordOracle

pub use self::{
    client::{CheckParams, CheckResponse, ScrabbleClient},
    error::ClientError,
    local::LocalClient,
    mock::MockClient,
    oracle::ClientOracle,
    word_list::WordList,
};

mod client;
mod error;
mod local;
mod mock;
mod oracle;
mod word_list;

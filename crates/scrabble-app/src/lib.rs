//! Level runner for the word-placement grid game.
//!
//! Fetches each level's board from a [`ScrabbleClient`], validates the proposed move,
//! and submits the verdict back to the client as the level's answer.
//!
//! [`ScrabbleClient`]: scrabble_client::ScrabbleClient

pub mod config;
pub mod play;

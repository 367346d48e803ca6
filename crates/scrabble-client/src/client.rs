use scrabble_core::BoardState;

use crate::ClientError;

/// An answer submitted for a level.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CheckParams {
    /// The level being answered.
    pub level: String,
    /// Whether the level's move was judged valid.
    pub valid: bool,
}

/// The provider's judgement of a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    /// Whether the submitted answer was correct.
    pub correct: bool,
    /// The level to play next, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_level: Option<String>,
    /// A human-readable message.
    #[serde(default)]
    pub message: String,
}

/// A source of levels, answer checks, and word checks.
pub trait ScrabbleClient {
    /// Returns the board and candidates for `level`.
    ///
    /// # Errors
    ///
    /// Returns an error if the level does not exist or cannot be loaded.
    fn board(&self, level: &str) -> Result<BoardState, ClientError>;

    /// Checks whether `params.valid` is the correct answer for `params.level`.
    ///
    /// # Errors
    ///
    /// Returns an error if the level does not exist or cannot be loaded.
    fn check(&self, params: &CheckParams) -> Result<CheckResponse, ClientError>;

    /// Returns whether `word` is a valid word.
    ///
    /// # Errors
    ///
    /// Returns an error if the word source cannot be consulted.
    fn is_valid_word(&self, word: &str) -> Result<bool, ClientError>;
}

impl<T> ScrabbleClient for &T
where
    T: ScrabbleClient + ?Sized,
{
    fn board(&self, level: &str) -> Result<BoardState, ClientError> {
        (**self).board(level)
    }

    fn check(&self, params: &CheckParams) -> Result<CheckResponse, ClientError> {
        (**self).check(params)
    }

    fn is_valid_word(&self, word: &str) -> Result<bool, ClientError> {
        (**self).is_valid_word(word)
    }
}

impl<T> ScrabbleClient for Box<T>
where
    T: ScrabbleClient + ?Sized,
{
    fn board(&self, level: &str) -> Result<BoardState, ClientError> {
        (**self).board(level)
    }

    fn check(&self, params: &CheckParams) -> Result<CheckResponse, ClientError> {
        (**self).check(params)
    }

    fn is_valid_word(&self, word: &str) -> Result<bool, ClientError> {
        (**self).is_valid_word(word)
    }
}

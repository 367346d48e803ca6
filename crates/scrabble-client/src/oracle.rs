use scrabble_validator::WordOracle;

use crate::ScrabbleClient;

/// Adapts a [`ScrabbleClient`] into a [`WordOracle`].
///
/// A client error is logged and the word is reported as invalid.
#[derive(Debug, Clone)]
pub struct ClientOracle<C> {
    client: C,
}

impl<C> ClientOracle<C>
where
    C: ScrabbleClient,
{
    /// Wraps `client`.
    #[must_use]
    pub const fn new(client: C) -> Self {
        Self { client }
    }
}

impl<C> WordOracle for ClientOracle<C>
where
    C: ScrabbleClient,
{
    fn is_valid_word(&self, word: &str) -> bool {
        match self.client.is_valid_word(word) {
            Ok(valid) => valid,
            Err(e) => {
                log::warn!("word check for {word:?} failed, treating as invalid: {e}");
                false
            }
        }
    }
}

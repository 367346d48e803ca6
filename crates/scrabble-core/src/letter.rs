//! Letter tile representation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::CoreError;

/// A single letter tile placed on the board.
///
/// Any non-whitespace, non-control character is accepted; the game does not restrict
/// the alphabet, and case is preserved as given.
///
/// # Examples
///
/// ```
/// use scrabble_core::Letter;
///
/// let letter: Letter = "s".parse()?;
/// assert_eq!(letter.as_char(), 's');
/// assert!("st".parse::<Letter>().is_err());
/// assert!("".parse::<Letter>().is_err());
/// # Ok::<(), scrabble_core::CoreError>(())
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Letter(char);

impl Letter {
    /// Creates a letter, returning `None` for whitespace or control characters.
    #[must_use]
    pub fn new(ch: char) -> Option<Self> {
        (!ch.is_whitespace() && !ch.is_control()).then_some(Self(ch))
    }

    /// Returns the underlying character.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Letter {
    type Error = CoreError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::new(ch).ok_or_else(|| CoreError::InvalidLetter {
            text: ch.to_string(),
        })
    }
}

impl FromStr for Letter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::new(ch),
            _ => None,
        };
        letter.ok_or_else(|| CoreError::InvalidLetter { text: s.into() })
    }
}

impl TryFrom<String> for Letter {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Letter> for String {
    fn from(letter: Letter) -> Self {
        letter.0.to_string()
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.0
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

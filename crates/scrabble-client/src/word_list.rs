use std::{collections::HashSet, fs, path::Path};

use scrabble_validator::WordOracle;

use crate::ClientError;

/// A case-insensitive set of valid words.
///
/// The text form has one word per line. Surrounding whitespace is trimmed, and blank
/// lines and lines starting with `#` are skipped.
///
/// # Examples
///
/// ```
/// use scrabble_client::WordList;
/// use scrabble_validator::WordOracle as _;
///
/// let words = WordList::parse("# animals\ncat\n\n  Dog \n");
/// assert_eq!(words.len(), 2);
/// assert!(words.is_valid_word("dog"));
/// assert!(words.is_valid_word("CAT"));
/// assert!(!words.is_valid_word("cow"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Parses a word list from its text form.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    /// Loads a word list from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Io`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, ClientError> {
        let text = fs::read_to_string(path).map_err(|source| ClientError::Io {
            path: path.to_owned(),
            source,
        })?;
        let words = Self::parse(&text);
        log::debug!("loaded {} words from {}", words.len(), path.display());
        Ok(words)
    }

    /// Returns `true` if `word` is in the list, ignoring case.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Returns the number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the list holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S> FromIterator<S> for WordList
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }
}

impl WordOracle for WordList {
    fn is_valid_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let words = WordList::parse("#header\n\ncats\n# arts\nsaps\n\n");
        assert_eq!(words, WordList::from_iter(["cats", "saps"]));
    }

    #[test]
    fn test_duplicates_collapse_case_insensitively() {
        let words = WordList::from_iter(["At", "at", "AT"]);
        assert_eq!(words.len(), 1);
        assert!(words.contains("aT"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cat\ncats").unwrap();
        let words = WordList::load(file.path()).unwrap();
        assert_eq!(words.len(), 2);
        assert!(words.contains("cats"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = WordList::load(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, ClientError::Io { .. }));
    }
}

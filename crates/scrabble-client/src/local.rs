use std::{
    fs, io,
    path::{Path, PathBuf},
};

use scrabble_core::BoardState;

use crate::{CheckParams, CheckResponse, ClientError, ScrabbleClient, WordList};

/// On-disk level format: a board state plus the expected answer.
///
/// ```json
/// {
///   "board": [["c", "a", "t", ""]],
///   "candidate": [{ "row": 0, "col": 3, "letter": "s" }],
///   "answer": true,
///   "nextLevel": "overrun"
/// }
/// ```
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct LevelFile {
    #[serde(flatten)]
    state: BoardState,
    answer: bool,
    #[serde(default)]
    next_level: Option<String>,
}

/// A client that serves levels from a directory of JSON files.
///
/// Level `name` is read from `<levels_dir>/<name>.json`. Word checks are answered from
/// a [`WordList`].
#[derive(Debug, Clone)]
pub struct LocalClient {
    levels_dir: PathBuf,
    words: WordList,
}

impl LocalClient {
    /// Creates a client over `levels_dir` using `words` for word checks.
    #[must_use]
    pub fn new(levels_dir: impl Into<PathBuf>, words: WordList) -> Self {
        Self {
            levels_dir: levels_dir.into(),
            words,
        }
    }

    /// Creates a client over `levels_dir`, loading the word list from `words_path`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Io`] if the word list cannot be read.
    pub fn open(levels_dir: impl Into<PathBuf>, words_path: &Path) -> Result<Self, ClientError> {
        Ok(Self::new(levels_dir, WordList::load(words_path)?))
    }

    /// Returns the directory levels are read from.
    #[must_use]
    pub fn levels_dir(&self) -> &Path {
        &self.levels_dir
    }

    fn level_path(&self, level: &str) -> Result<PathBuf, ClientError> {
        let plain = !level.is_empty()
            && level
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
        if !plain {
            return Err(ClientError::UnknownLevel {
                level: level.to_owned(),
            });
        }
        Ok(self.levels_dir.join(format!("{level}.json")))
    }

    fn load_level(&self, level: &str) -> Result<LevelFile, ClientError> {
        let path = self.level_path(level)?;
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ClientError::UnknownLevel {
                    level: level.to_owned(),
                });
            }
            Err(source) => return Err(ClientError::Io { path, source }),
        };
        log::debug!("loaded level {level:?} from {}", path.display());
        serde_json::from_str(&text).map_err(|source| ClientError::Json { path, source })
    }
}

impl ScrabbleClient for LocalClient {
    fn board(&self, level: &str) -> Result<BoardState, ClientError> {
        Ok(self.load_level(level)?.state)
    }

    fn check(&self, params: &CheckParams) -> Result<CheckResponse, ClientError> {
        let level = self.load_level(&params.level)?;
        let correct = level.answer == params.valid;
        log::debug!(
            "level {:?}: answered {}, expected {}",
            params.level,
            params.valid,
            level.answer
        );
        let response = if correct {
            CheckResponse {
                correct,
                message: match &level.next_level {
                    Some(next) => format!("correct, next level is {next}"),
                    None => "correct, no levels remain".to_owned(),
                },
                next_level: level.next_level,
            }
        } else {
            CheckResponse {
                correct,
                next_level: None,
                message: format!("incorrect, the move is {}", validity(level.answer)),
            }
        };
        Ok(response)
    }

    fn is_valid_word(&self, word: &str) -> Result<bool, ClientError> {
        Ok(self.words.contains(word))
    }
}

fn validity(valid: bool) -> &'static str {
    if valid { "valid" } else { "invalid" }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = r#"{
        "board": [["c", "a", "t", ""], ["", "", "", ""]],
        "candidate": [{ "row": 0, "col": 3, "letter": "s" }],
        "answer": true,
        "nextLevel": "overrun"
    }"#;

    fn client_with(levels: &[(&str, &str)]) -> (tempfile::TempDir, LocalClient) {
        let dir = tempfile::tempdir().unwrap();
        for (name, text) in levels {
            fs::write(dir.path().join(format!("{name}.json")), text).unwrap();
        }
        let client = LocalClient::new(dir.path(), WordList::from_iter(["cats"]));
        (dir, client)
    }

    #[test]
    fn test_board_reads_level_file() {
        let (_dir, client) = client_with(&[("start", START)]);
        let state = client.board("start").unwrap();
        assert_eq!(state.board.to_string(), "cat_\n____\n");
        assert_eq!(state.candidates.len(), 1);
    }

    #[test]
    fn test_check_compares_with_answer() {
        let (_dir, client) = client_with(&[("start", START)]);
        let right = client
            .check(&CheckParams {
                level: "start".to_owned(),
                valid: true,
            })
            .unwrap();
        assert!(right.correct);
        assert_eq!(right.next_level.as_deref(), Some("overrun"));

        let wrong = client
            .check(&CheckParams {
                level: "start".to_owned(),
                valid: false,
            })
            .unwrap();
        assert!(!wrong.correct);
        assert_eq!(wrong.next_level, None);
    }

    #[test]
    fn test_word_checks_use_word_list() {
        let (_dir, client) = client_with(&[]);
        assert!(client.is_valid_word("cats").unwrap());
        assert!(!client.is_valid_word("catx").unwrap());
    }

    #[test]
    fn test_missing_and_malformed_levels() {
        let (_dir, client) = client_with(&[(
            "ragged",
            r#"{ "board": [["a"], []], "answer": false }"#,
        )]);
        assert!(matches!(
            client.board("missing"),
            Err(ClientError::UnknownLevel { .. })
        ));
        assert!(matches!(
            client.board("ragged"),
            Err(ClientError::Json { .. })
        ));
    }

    #[test]
    fn test_level_names_cannot_escape_directory() {
        let (_dir, client) = client_with(&[("start", START)]);
        for name in ["../start", "a/b", "", "start.json"] {
            assert!(
                matches!(client.board(name), Err(ClientError::UnknownLevel { .. })),
                "{name:?} should be rejected"
            );
        }
    }
}

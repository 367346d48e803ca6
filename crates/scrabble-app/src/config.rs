//! Runner configuration.

use std::path::PathBuf;

/// The level played when none is requested.
pub const DEFAULT_LEVEL: &str = "start";

/// Upper bound on levels played in one run when following `nextLevel` links.
pub const DEFAULT_MAX_LEVELS: usize = 32;

/// Where boards, answers, and word checks come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientSource {
    /// The fixed mock board that accepts everything.
    Mock,
    /// Level files in a directory plus a word list file.
    Local {
        /// Directory holding `<level>.json` files.
        levels_dir: PathBuf,
        /// Newline-separated word list.
        words: PathBuf,
    },
}

impl Default for ClientSource {
    fn default() -> Self {
        Self::Local {
            levels_dir: PathBuf::from("levels"),
            words: PathBuf::from("words.txt"),
        }
    }
}

/// Settings for one run of the level runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayConfig {
    /// Levels to play, in order.
    pub levels: Vec<String>,
    /// Client backing the run.
    pub source: ClientSource,
    /// Keep playing the provider's next level after each correct answer.
    pub follow: bool,
    /// Maximum number of levels played in total.
    pub max_levels: usize,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            levels: vec![DEFAULT_LEVEL.to_owned()],
            source: ClientSource::default(),
            follow: false,
            max_levels: DEFAULT_MAX_LEVELS,
        }
    }
}

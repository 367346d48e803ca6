//! Command-line level runner.
//!
//! Plays one or more levels: fetches the board, validates the proposed move, submits the
//! verdict, and prints the outcome.
//!
//! # Usage
//!
//! ```sh
//! cargo run -- --level start
//! ```
//!
//! Play every level reachable from `start`:
//!
//! ```sh
//! cargo run -- --follow
//! ```
//!
//! Use the built-in mock board instead of level files:
//!
//! ```sh
//! cargo run -- --mock
//! ```
//!
//! Set `RUST_LOG=debug` to see each validation stage.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use scrabble_app::{
    config::{ClientSource, DEFAULT_LEVEL, DEFAULT_MAX_LEVELS, PlayConfig},
    play::{self, PlaySummary},
};
use scrabble_client::{ClientError, LocalClient, MockClient, ScrabbleClient};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Level to play. Repeatable.
    #[arg(short, long = "level", value_name = "NAME", default_value = DEFAULT_LEVEL)]
    levels: Vec<String>,

    /// Directory containing `<level>.json` files.
    #[arg(long, value_name = "DIR", default_value = "levels")]
    levels_dir: PathBuf,

    /// Word list used for word checks, one word per line.
    #[arg(long, value_name = "FILE", default_value = "words.txt")]
    words: PathBuf,

    /// Use the built-in mock board, which accepts every word and answer.
    #[arg(long, conflicts_with_all = ["levels_dir", "words"])]
    mock: bool,

    /// After a correct answer, continue with the next level.
    #[arg(long)]
    follow: bool,

    /// Maximum number of levels to play.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_MAX_LEVELS)]
    max_levels: usize,
}

impl From<Args> for PlayConfig {
    fn from(args: Args) -> Self {
        let source = if args.mock {
            ClientSource::Mock
        } else {
            ClientSource::Local {
                levels_dir: args.levels_dir,
                words: args.words,
            }
        };
        Self {
            levels: args.levels,
            source,
            follow: args.follow,
            max_levels: args.max_levels,
        }
    }
}

fn run(config: &PlayConfig) -> Result<PlaySummary, ClientError> {
    let client: Box<dyn ScrabbleClient> = match &config.source {
        ClientSource::Mock => Box::new(MockClient::new()),
        ClientSource::Local { levels_dir, words } => {
            Box::new(LocalClient::open(levels_dir.clone(), words)?)
        }
    };
    play::play(&client, config, |report| println!("{report}\n"))
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let config = PlayConfig::from(Args::parse());
    log::debug!("{config:?}");

    match run(&config) {
        Ok(summary) if summary.all_correct() => ExitCode::SUCCESS,
        Ok(summary) => {
            eprintln!(
                "{} of {} levels answered incorrectly",
                summary.played - summary.correct,
                summary.played
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

//! Playing levels against a client.

use std::fmt::{self, Display};

use scrabble_client::{CheckParams, CheckResponse, ClientError, ClientOracle, ScrabbleClient};
use scrabble_core::BoardState;
use scrabble_validator::MoveValidator;

use crate::config::PlayConfig;

/// The outcome of playing one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelReport {
    /// Level name.
    pub level: String,
    /// The board and candidates served for the level.
    pub state: BoardState,
    /// Whether the validator judged the move valid.
    pub is_valid: bool,
    /// The client's judgement of that answer.
    pub response: CheckResponse,
}

impl Display for LevelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "level: {}", self.level)?;
        let outcome = if self.response.correct {
            "correct"
        } else {
            "incorrect"
        };
        writeln!(f, "{outcome} answer")?;
        writeln!(f, "{}", self.state)?;
        write!(f, "isValid:{}", self.is_valid)
    }
}

/// Totals for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaySummary {
    /// Levels played.
    pub played: usize,
    /// Levels answered correctly.
    pub correct: usize,
}

impl PlaySummary {
    /// Returns `true` if every level played was answered correctly.
    #[must_use]
    pub fn all_correct(&self) -> bool {
        self.played == self.correct
    }
}

/// Fetches `level`, validates its move, and submits the verdict.
///
/// Word checks go through the same client; a failed word check counts as an invalid
/// word.
///
/// # Errors
///
/// Returns an error if the board cannot be fetched or the answer cannot be checked.
pub fn play_level<C>(client: &C, level: &str) -> Result<LevelReport, ClientError>
where
    C: ScrabbleClient + ?Sized,
{
    let validator = MoveValidator::new(ClientOracle::new(client));
    let mut state = client.board(level)?;
    let is_valid = validator.validate_move(&mut state);
    log::info!("level {level}: move is valid: {is_valid}");

    let response = client.check(&CheckParams {
        level: level.to_owned(),
        valid: is_valid,
    })?;
    log::debug!("level {level}: {}", response.message);

    Ok(LevelReport {
        level: level.to_owned(),
        state,
        is_valid,
        response,
    })
}

/// Plays every level in `config`, passing each report to `on_report` as it completes.
///
/// With `config.follow`, each correctly answered level is followed by the next level the
/// client names. At most `config.max_levels` levels are played.
///
/// # Errors
///
/// Stops at the first client error and returns it.
pub fn play<C, F>(
    client: &C,
    config: &PlayConfig,
    mut on_report: F,
) -> Result<PlaySummary, ClientError>
where
    C: ScrabbleClient + ?Sized,
    F: FnMut(&LevelReport),
{
    let mut summary = PlaySummary::default();
    for first in &config.levels {
        let mut next = Some(first.clone());
        while let Some(level) = next.take() {
            if summary.played >= config.max_levels {
                log::warn!("stopping after {} levels", summary.played);
                return Ok(summary);
            }
            let report = play_level(client, &level)?;
            summary.played += 1;
            if report.response.correct {
                summary.correct += 1;
            }
            on_report(&report);
            if config.follow && report.response.correct {
                next = report.response.next_level;
            }
        }
    }
    Ok(summary)
}

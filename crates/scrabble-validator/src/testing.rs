//! Test utilities for move validation.
//!
//! [`MoveTester`] builds a board state, runs the validator against a
//! [`RecordingOracle`], and checks both the verdict and the words the oracle was asked
//! about. Every validation run also asserts that the board state came back unchanged.

use std::{cell::RefCell, collections::HashSet};

use scrabble_core::{Board, BoardState, Candidate, Letter};

use crate::{MoveValidator, Rejection, Verdict, WordOracle};

/// A word oracle that answers from a fixed word set and records every query.
///
/// The default oracle knows no words.
#[derive(Debug)]
pub(crate) struct RecordingOracle {
    // `None` accepts everything
    words: Option<HashSet<String>>,
    calls: RefCell<Vec<String>>,
}

impl Default for RecordingOracle {
    fn default() -> Self {
        Self::with_words(&[])
    }
}

impl RecordingOracle {
    /// Creates an oracle that accepts every word.
    pub(crate) fn accepting_all() -> Self {
        Self {
            words: None,
            calls: RefCell::default(),
        }
    }

    /// Creates an oracle that accepts exactly `words`.
    pub(crate) fn with_words(words: &[&str]) -> Self {
        Self {
            words: Some(words.iter().map(|&w| w.to_owned()).collect()),
            calls: RefCell::default(),
        }
    }

    /// Returns the words queried so far, in order.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl WordOracle for RecordingOracle {
    fn is_valid_word(&self, word: &str) -> bool {
        self.calls.borrow_mut().push(word.to_owned());
        self.words.as_ref().is_none_or(|words| words.contains(word))
    }
}

/// A chaining test harness around [`MoveValidator`].
#[derive(Debug)]
pub(crate) struct MoveTester {
    state: BoardState,
    validator: MoveValidator<RecordingOracle>,
}

impl MoveTester {
    /// Creates a tester for `board` with no candidates and an oracle that knows no words.
    pub(crate) fn new(board: Board) -> Self {
        Self {
            state: BoardState::new(board, Vec::new()),
            validator: MoveValidator::new(RecordingOracle::default()),
        }
    }

    /// Creates a tester from a board in the compact text form (`_` for empty cells).
    ///
    /// # Panics
    ///
    /// Panics if the board cannot be parsed.
    #[track_caller]
    pub(crate) fn from_str(s: &str) -> Self {
        Self::new(s.parse().unwrap())
    }

    /// Adds a candidate.
    #[track_caller]
    pub(crate) fn place(mut self, row: i64, column: i64, letter: char) -> Self {
        let letter = Letter::try_from(letter).unwrap();
        self.state
            .candidates
            .push(Candidate::new(row, column, letter));
        self
    }

    /// Replaces the oracle with one that accepts exactly `words`.
    pub(crate) fn with_words(mut self, words: &[&str]) -> Self {
        self.validator = MoveValidator::new(RecordingOracle::with_words(words));
        self
    }

    /// Asserts that the move is accepted.
    #[track_caller]
    pub(crate) fn assert_accepted(self) -> Self {
        self.assert_verdict(&Verdict::Accepted)
    }

    /// Asserts that the move is rejected for `rejection`.
    #[track_caller]
    pub(crate) fn assert_rejected(self, rejection: &Rejection) -> Self {
        self.assert_verdict(&Verdict::Rejected(rejection.clone()))
    }

    /// Asserts the words queried by the most recent validation run.
    #[track_caller]
    pub(crate) fn assert_oracle_calls(self, expected: &[&str]) -> Self {
        let calls = self.validator.oracle().calls();
        assert_eq!(calls, expected, "unexpected oracle queries");
        self
    }

    #[track_caller]
    fn assert_verdict(mut self, expected: &Verdict) -> Self {
        let before = self.state.clone();

        let valid = self.validator.validate_move(&mut self.state);
        assert_eq!(
            valid,
            expected.is_accepted(),
            "unexpected decision for\n{before}"
        );

        self.validator.oracle().clear();
        let verdict = self.validator.verdict(&mut self.state);
        assert_eq!(&verdict, expected, "unexpected verdict for\n{before}");

        assert_eq!(self.state, before, "validation changed the board state");
        self
    }
}

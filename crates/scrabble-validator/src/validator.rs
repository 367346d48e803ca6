use scrabble_core::{BoardState, Position};

use crate::{
    ExtractedWord, FormedWords, WordOracle, alignment::alignment,
    placement::placement_positions, words,
};

/// Why a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Rejection {
    /// The candidate set is empty, spans several rows and columns, or has a gap.
    #[display("candidates are not on one consecutive row or column")]
    NotAligned,
    /// A candidate lies outside the board.
    #[display("candidate ({row}, {column}) is off the board")]
    OutOfBounds {
        /// Candidate row.
        row: i64,
        /// Candidate column.
        column: i64,
    },
    /// A candidate targets a cell that already holds a letter.
    #[display("cell {position} is already occupied")]
    Occupied {
        /// The occupied cell.
        position: Position,
    },
    /// The move forms a word made only of new letters.
    #[display("word {word:?} does not connect to any existing letter")]
    Isolated {
        /// The isolated word.
        word: String,
    },
    /// A formed word was not accepted by the word oracle.
    #[display("{word:?} is not a word")]
    UnknownWord {
        /// The rejected word.
        word: String,
    },
}

/// The outcome of validating one move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Verdict {
    /// The move is legal and every formed word is valid.
    #[display("accepted")]
    Accepted,
    /// The move is invalid.
    #[display("rejected: {_0}")]
    Rejected(Rejection),
}

impl Verdict {
    /// Returns the rejection reason, if any.
    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Verdict::Accepted => None,
            Verdict::Rejected(rejection) => Some(rejection),
        }
    }
}

impl From<Result<(), Rejection>> for Verdict {
    fn from(result: Result<(), Rejection>) -> Self {
        match result {
            Ok(()) => Verdict::Accepted,
            Err(rejection) => Verdict::Rejected(rejection),
        }
    }
}

/// Validates single moves against a word oracle.
///
/// The validator is stateless apart from its oracle. Each call takes exclusive access to
/// the [`BoardState`] because candidate letters are written onto the board while words
/// are extracted; the board is restored before the call returns, so the caller observes
/// no change. Run concurrent validations on separate board states.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
///
/// use scrabble_core::{BoardState, Candidate, Letter};
/// use scrabble_validator::{MoveValidator, Rejection, Verdict};
///
/// let validator = MoveValidator::new(HashSet::from(["at".to_owned()]));
/// let a = Letter::try_from('a')?;
/// let t = Letter::try_from('t')?;
///
/// // Two new letters on an empty board touch nothing.
/// let mut state = BoardState::new(
///     "__\n__".parse()?,
///     vec![Candidate::new(0, 0, a), Candidate::new(0, 1, t)],
/// );
/// assert_eq!(
///     validator.verdict(&mut state),
///     Verdict::Rejected(Rejection::Isolated { word: "at".to_owned() }),
/// );
/// # Ok::<(), scrabble_core::CoreError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MoveValidator<O> {
    oracle: O,
}

impl<O> MoveValidator<O>
where
    O: WordOracle,
{
    /// Creates a validator that checks formed words with `oracle`.
    #[must_use]
    pub const fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Returns the word oracle.
    #[must_use]
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Returns `true` if the move described by `state` is valid.
    ///
    /// Equivalent to `self.verdict(state).is_accepted()`.
    pub fn validate_move(&self, state: &mut BoardState) -> bool {
        self.verdict(state).is_accepted()
    }

    /// Validates the move described by `state` and reports why it was rejected.
    ///
    /// The stages run in order and stop at the first failure: alignment, placement,
    /// word extraction with the isolation rule, then one oracle query per formed word.
    /// A move that forms no word of two or more letters is accepted without consulting
    /// the oracle.
    pub fn verdict(&self, state: &mut BoardState) -> Verdict {
        let verdict = Verdict::from(self.check(state));
        log::info!("move verdict: {verdict}");
        verdict
    }

    /// Returns the words the move would form and the outcome of the isolation rule,
    /// without consulting the oracle.
    ///
    /// # Errors
    ///
    /// Returns the alignment or placement [`Rejection`] if the move cannot be overlaid.
    pub fn formed_words(&self, state: &mut BoardState) -> Result<FormedWords, Rejection> {
        alignment(&state.candidates).ok_or(Rejection::NotAligned)?;
        let positions = placement_positions(&state.board, &state.candidates)?;
        Ok(words::formed_words(
            &mut state.board,
            &state.candidates,
            &positions,
        ))
    }

    fn check(&self, state: &mut BoardState) -> Result<(), Rejection> {
        let alignment = alignment(&state.candidates).ok_or(Rejection::NotAligned)?;
        log::debug!("alignment: {alignment}");

        let positions = placement_positions(&state.board, &state.candidates)?;
        log::debug!("candidates have valid placement");

        let formed = words::formed_words(&mut state.board, &state.candidates, &positions);
        if let Some(word) = formed.isolated() {
            return Err(Rejection::Isolated {
                word: word.text().to_owned(),
            });
        }
        log::debug!(
            "formed words: {:?}",
            formed.words().iter().map(ExtractedWord::text).collect::<Vec<_>>()
        );

        for word in formed.words() {
            let valid = self.oracle.is_valid_word(word.text());
            log::debug!("word {:?} valid: {valid}", word.text());
            if !valid {
                return Err(Rejection::UnknownWord {
                    word: word.text().to_owned(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use scrabble_core::{Board, Candidate, Letter};

    use super::*;
    use crate::{
        MIN_WORD_LEN,
        testing::{MoveTester, RecordingOracle},
    };

    #[test]
    fn test_single_letter_on_empty_board_is_accepted() {
        MoveTester::from_str(
            "
            ____
            ____
            ____
            ____
        ",
        )
        .place(0, 0, 'a')
        .assert_accepted()
        .assert_oracle_calls(&[]);
    }

    #[test]
    fn test_extension_asks_oracle() {
        MoveTester::from_str("cat_")
            .place(0, 3, 's')
            .with_words(&["cats"])
            .assert_accepted()
            .assert_oracle_calls(&["cats"]);
    }

    #[test]
    fn test_extension_with_unknown_word() {
        MoveTester::from_str("cat_")
            .place(0, 3, 'x')
            .with_words(&["cats"])
            .assert_rejected(&Rejection::UnknownWord {
                word: "catx".to_owned(),
            })
            .assert_oracle_calls(&["catx"]);
    }

    #[test]
    fn test_isolated_pair_skips_oracle() {
        MoveTester::from_str("__\n__")
            .place(0, 0, 'a')
            .place(0, 1, 't')
            .with_words(&["at"])
            .assert_rejected(&Rejection::Isolated {
                word: "at".to_owned(),
            })
            .assert_oracle_calls(&[]);
    }

    #[test]
    fn test_isolated_column_pair_skips_oracle() {
        MoveTester::new(Board::empty(3, 3))
            .place(2, 1, 'o')
            .place(1, 1, 't')
            .with_words(&["to"])
            .assert_rejected(&Rejection::Isolated {
                word: "to".to_owned(),
            })
            .assert_oracle_calls(&[]);
    }

    #[test]
    fn test_isolated_word_rejected_despite_cross_word() {
        MoveTester::from_str("__\nx_")
            .place(0, 0, 'a')
            .place(0, 1, 't')
            .with_words(&["at", "ax"])
            .assert_rejected(&Rejection::Isolated {
                word: "at".to_owned(),
            })
            .assert_oracle_calls(&[]);
    }

    #[test]
    fn test_diagonal_is_rejected() {
        MoveTester::from_str("__\n__")
            .place(0, 0, 'a')
            .place(1, 1, 'b')
            .assert_rejected(&Rejection::NotAligned);
    }

    #[test]
    fn test_gap_is_rejected() {
        MoveTester::from_str("___")
            .place(0, 0, 'a')
            .place(0, 2, 'b')
            .assert_rejected(&Rejection::NotAligned);
    }

    #[test]
    fn test_gap_filled_by_existing_letter_is_still_rejected() {
        MoveTester::from_str("_a_")
            .place(0, 0, 'b')
            .place(0, 2, 'd')
            .with_words(&["bad"])
            .assert_rejected(&Rejection::NotAligned);
    }

    #[test]
    fn test_empty_candidate_set_is_rejected() {
        MoveTester::from_str("ab").assert_rejected(&Rejection::NotAligned);
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        MoveTester::new(Board::empty(4, 4))
            .place(5, 5, 'x')
            .assert_rejected(&Rejection::OutOfBounds { row: 5, column: 5 });
        MoveTester::new(Board::empty(4, 4))
            .place(-1, 0, 'x')
            .assert_rejected(&Rejection::OutOfBounds { row: -1, column: 0 });
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        MoveTester::from_str("ab_")
            .place(0, 1, 'c')
            .place(0, 2, 'd')
            .assert_rejected(&Rejection::Occupied {
                position: Position::new(0, 1),
            });
    }

    #[test]
    fn test_duplicate_candidates_are_rejected_by_alignment() {
        MoveTester::from_str("a__")
            .place(0, 1, 'b')
            .place(0, 1, 'b')
            .with_words(&["ab"])
            .assert_rejected(&Rejection::NotAligned);
    }

    #[test]
    fn test_cross_word_is_checked_after_main_word() {
        MoveTester::from_str(
            "
            c___
            _x__
        ",
        )
        .place(0, 1, 'a')
        .place(0, 2, 't')
        .with_words(&["cat"])
        .assert_rejected(&Rejection::UnknownWord {
            word: "ax".to_owned(),
        })
        .assert_oracle_calls(&["cat", "ax"]);
    }

    #[test]
    fn test_oracle_short_circuits_on_first_unknown_word() {
        MoveTester::from_str(
            "
            c___
            _x__
        ",
        )
        .place(0, 1, 'a')
        .place(0, 2, 't')
        .with_words(&["ax"])
        .assert_rejected(&Rejection::UnknownWord {
            word: "cat".to_owned(),
        })
        .assert_oracle_calls(&["cat"]);
    }

    #[test]
    fn test_move_forming_main_and_cross_word() {
        MoveTester::from_str(
            "
            c___
            _x__
        ",
        )
        .place(0, 2, 't')
        .place(0, 1, 'a')
        .with_words(&["cat", "ax"])
        .assert_accepted()
        .assert_oracle_calls(&["cat", "ax"]);
    }

    #[test]
    fn test_column_extension() {
        MoveTester::from_str(
            "
            c_
            a_
            __
            __
        ",
        )
        .place(3, 0, 's')
        .place(2, 0, 't')
        .with_words(&["cats"])
        .assert_accepted()
        .assert_oracle_calls(&["cats"]);
    }

    #[test]
    fn test_mock_board_extends_two_words() {
        MoveTester::from_str(
            "
            cats
            _r_a
            _t_p
            _s__
        ",
        )
        .place(3, 3, 's')
        .with_words(&["cats", "arts", "saps"])
        .assert_accepted()
        .assert_oracle_calls(&["cats", "arts", "saps"]);
    }

    #[test]
    fn test_formed_words_reports_without_oracle() {
        let validator = MoveValidator::new(RecordingOracle::default());
        let mut state = BoardState::new(
            "cat_".parse().unwrap(),
            vec![Candidate::new(0, 3, Letter::try_from('s').unwrap())],
        );
        let formed = validator.formed_words(&mut state).unwrap();
        assert_eq!(formed.words().len(), 1);
        assert_eq!(formed.words()[0].text(), "cats");
        assert!(formed.is_connected());
        assert!(validator.oracle().calls().is_empty());
        assert_eq!(state.board.to_string(), "cat_\n");
    }

    #[test]
    fn test_formed_words_flags_isolated_word() {
        let validator = MoveValidator::new(RecordingOracle::accepting_all());
        let t = Letter::try_from('t').unwrap();
        let o = Letter::try_from('o').unwrap();
        let mut state = BoardState::new(
            Board::empty(3, 3),
            vec![Candidate::new(1, 1, t), Candidate::new(2, 1, o)],
        );
        let formed = validator.formed_words(&mut state).unwrap();
        assert!(!formed.is_connected());
        assert_eq!(formed.isolated().map(ExtractedWord::text), Some("to"));
        assert!(validator.oracle().calls().is_empty());
    }

    #[test]
    fn test_caller_candidate_order_is_preserved() {
        let validator = MoveValidator::new(RecordingOracle::accepting_all());
        let letter = Letter::try_from('a').unwrap();
        let candidates = vec![
            Candidate::new(0, 2, letter),
            Candidate::new(0, 1, letter),
            Candidate::new(0, 3, letter),
        ];
        let mut state = BoardState::new("a___".parse().unwrap(), candidates.clone());
        assert!(validator.validate_move(&mut state));
        assert_eq!(state.candidates, candidates);
    }

    fn arbitrary_state() -> impl Strategy<Value = BoardState> {
        let board = prop::collection::vec(prop::collection::vec(prop::option::of(0u8..3), 4), 4)
            .prop_map(|rows| {
                let rows = rows
                    .into_iter()
                    .map(|row| {
                        row.into_iter()
                            .map(|cell| cell.and_then(|i| Letter::new(char::from(b'a' + i))))
                            .collect::<Vec<_>>()
                    })
                    .collect::<Vec<_>>();
                Board::new(rows).unwrap()
            });
        let candidates = prop::collection::vec((-1i64..5, -1i64..5, 0u8..3), 0..4).prop_map(
            |coords| {
                coords
                    .into_iter()
                    .filter_map(|(row, column, i)| {
                        Letter::new(char::from(b'a' + i)).map(|l| Candidate::new(row, column, l))
                    })
                    .collect::<Vec<_>>()
            },
        );
        (board, candidates).prop_map(|(board, candidates)| BoardState::new(board, candidates))
    }

    proptest! {
        #[test]
        fn prop_validation_leaves_state_unchanged(mut state in arbitrary_state()) {
            let before = state.clone();
            let validator = MoveValidator::new(RecordingOracle::accepting_all());
            let _ = validator.verdict(&mut state);
            prop_assert_eq!(state, before);
        }

        #[test]
        fn prop_accepted_iff_every_formed_word_is_valid(
            mut state in arbitrary_state(),
            accept_all in any::<bool>(),
        ) {
            let oracle = if accept_all {
                RecordingOracle::accepting_all()
            } else {
                RecordingOracle::default()
            };
            let validator = MoveValidator::new(oracle);
            let verdict = validator.verdict(&mut state);
            let formed = validator
                .formed_words(&mut state)
                .ok()
                .filter(FormedWords::is_connected);
            match formed {
                Some(formed) => {
                    prop_assert_eq!(
                        verdict.is_accepted(),
                        accept_all || formed.words().is_empty()
                    );
                }
                None => prop_assert!(verdict.is_rejected()),
            }
        }

        #[test]
        fn prop_formed_words_have_at_least_two_letters(mut state in arbitrary_state()) {
            let validator = MoveValidator::new(RecordingOracle::accepting_all());
            if let Ok(formed) = validator.formed_words(&mut state) {
                for word in formed.words() {
                    prop_assert!(word.len() >= MIN_WORD_LEN);
                    prop_assert_eq!(word.text().chars().count(), word.len());
                }
            }
        }
    }
}

use scrabble_core::{Board, BoardState, Candidate, Letter, Position};

use crate::{CheckParams, CheckResponse, ClientError, ScrabbleClient};

const MOCK_ROWS: [&str; 4] = ["cats", "_r_a", "_t_p", "_s__"];

/// A client that serves one fixed board and agrees with everything.
///
/// Every level returns the same 4×4 board, where the candidate `s` at row 3, column 3
/// extends the vertical word `sap`. Every word is valid and every answer is correct.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockClient;

impl MockClient {
    /// Creates a new mock client.
    #[must_use]
    pub const fn new() -> Self {
        MockClient
    }
}

impl ScrabbleClient for MockClient {
    fn board(&self, level: &str) -> Result<BoardState, ClientError> {
        log::debug!("serving mock board for level {level:?}");
        let mut board = Board::empty(4, 4);
        for (row, line) in MOCK_ROWS.iter().enumerate() {
            for (column, ch) in line.chars().enumerate() {
                board[Position::new(row, column)] = Letter::new(ch).filter(|_| ch != '_');
            }
        }
        let candidates = Letter::new('s')
            .map(|letter| Candidate::new(3, 3, letter))
            .into_iter()
            .collect();
        Ok(BoardState::new(board, candidates))
    }

    fn check(&self, _params: &CheckParams) -> Result<CheckResponse, ClientError> {
        Ok(CheckResponse {
            correct: true,
            next_level: None,
            message: "mock client accepts every answer".to_owned(),
        })
    }

    fn is_valid_word(&self, _word: &str) -> Result<bool, ClientError> {
        Ok(true)
    }
}

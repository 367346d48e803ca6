//! Word extraction: maximal runs of letters along rows and columns.

use std::mem;

use scrabble_core::{Board, Candidate, Letter, Position};

use crate::overlay::Overlay;

/// Minimum number of letters in a run for it to count as a formed word.
pub const MIN_WORD_LEN: usize = 2;

/// A maximal run of letters along one row or column.
///
/// Derived per validation and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedWord {
    positions: Vec<Position>,
    text: String,
}

impl ExtractedWord {
    /// Returns the cells spelling this word, in reading order.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Returns the word text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the word has no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns `true` if this word is made of every candidate and nothing else.
    ///
    /// Such a word touches no letter that was already on the board along its own axis,
    /// which is how a placement that does not connect to existing words is detected.
    /// Only a single word matching the whole candidate set triggers this; a
    /// disconnected move that forms no word of two or more letters passes.
    #[must_use]
    pub fn is_isolated(&self, candidates: &[Candidate]) -> bool {
        let new_letters = self
            .positions
            .iter()
            .map(|pos| {
                candidates
                    .iter()
                    .filter(|c| c.targets(pos.row(), pos.column()))
                    .count()
            })
            .sum::<usize>();
        new_letters == candidates.len() && self.len() == new_letters
    }

    fn push(&mut self, pos: Position, letter: Letter) {
        self.positions.push(pos);
        self.text.push(letter.as_char());
    }
}

/// The words a move forms, with the outcome of the isolation rule.
///
/// Produced by overlaying the candidates on the board and scanning it. Derived per
/// validation and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormedWords {
    words: Vec<ExtractedWord>,
    isolated: Option<usize>,
}

impl FormedWords {
    fn new(words: Vec<ExtractedWord>, candidates: &[Candidate]) -> Self {
        let isolated = words.iter().position(|w| w.is_isolated(candidates));
        Self { words, isolated }
    }

    /// Returns the formed words in scan order.
    #[must_use]
    pub fn words(&self) -> &[ExtractedWord] {
        &self.words
    }

    /// Returns the first word made only of new letters, if any.
    #[must_use]
    pub fn isolated(&self) -> Option<&ExtractedWord> {
        self.isolated.map(|i| &self.words[i])
    }

    /// Returns `true` if the move passes the isolation rule.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.isolated.is_none()
    }

    /// Consumes `self`, returning the formed words.
    #[must_use]
    pub fn into_words(self) -> Vec<ExtractedWord> {
        self.words
    }
}

/// Collects every formed word on `board`.
///
/// Rows are scanned top to bottom, each left to right, followed by columns left to
/// right, each top to bottom. Runs shorter than [`MIN_WORD_LEN`] are skipped.
///
/// # Examples
///
/// ```
/// use scrabble_core::Board;
/// use scrabble_validator::words::scan;
///
/// let board: Board = "
///     cats
///     _r_a
///     _t_p
///     _s__
/// "
/// .parse()?;
/// let words = scan(&board).iter().map(|w| w.text().to_owned()).collect::<Vec<_>>();
/// assert_eq!(words, ["cats", "arts", "sap"]);
/// # Ok::<(), scrabble_core::CoreError>(())
/// ```
#[must_use]
pub fn scan(board: &Board) -> Vec<ExtractedWord> {
    let mut words = Vec::new();
    for row in 0..board.height() {
        collect_runs(
            board,
            (0..board.width()).map(|column| Position::new(row, column)),
            &mut words,
        );
    }
    for column in 0..board.width() {
        collect_runs(
            board,
            (0..board.height()).map(|row| Position::new(row, column)),
            &mut words,
        );
    }
    words
}

/// Overlays the candidates at their resolved positions, scans, restores the board, and
/// applies the isolation rule.
///
/// `positions[i]` must be the in-bounds cell for `candidates[i]`.
pub(crate) fn formed_words(
    board: &mut Board,
    candidates: &[Candidate],
    positions: &[Position],
) -> FormedWords {
    let placements = positions
        .iter()
        .copied()
        .zip(candidates.iter().map(|c| c.letter));
    let words = {
        let overlay = Overlay::apply(board, placements);
        scan(&overlay)
    };
    FormedWords::new(words, candidates)
}

fn collect_runs<I>(board: &Board, line: I, words: &mut Vec<ExtractedWord>)
where
    I: IntoIterator<Item = Position>,
{
    let mut run = ExtractedWord::default();
    for pos in line {
        match board[pos] {
            Some(letter) => run.push(pos, letter),
            None => close_run(&mut run, words),
        }
    }
    close_run(&mut run, words);
}

fn close_run(run: &mut ExtractedWord, words: &mut Vec<ExtractedWord>) {
    let run = mem::take(run);
    if run.len() >= MIN_WORD_LEN {
        words.push(run);
    }
}

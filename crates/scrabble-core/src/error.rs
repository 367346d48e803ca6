/// Errors produced while building the core data structures.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CoreError {
    /// A cell or candidate letter was not exactly one non-whitespace character.
    #[display("invalid letter {text:?}: expected a single non-whitespace character")]
    InvalidLetter {
        /// The rejected text.
        #[error(not(source))]
        text: String,
    },
    /// A board row has a different length from the first row.
    #[display("ragged board: row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
}

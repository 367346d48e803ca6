//! Alignment check: candidates must occupy consecutive cells along one row or column.

use scrabble_core::Candidate;

/// The axis along which a move's candidates lie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Alignment {
    /// All candidates share one row; columns vary.
    #[display("row")]
    Row,
    /// All candidates share one column; rows vary.
    #[display("column")]
    Column,
}

impl Alignment {
    /// Returns the coordinate of `candidate` that varies along this axis.
    #[must_use]
    pub fn varying(self, candidate: &Candidate) -> i64 {
        match self {
            Alignment::Row => candidate.column,
            Alignment::Column => candidate.row,
        }
    }
}

/// Determines the alignment of a candidate set.
///
/// Returns `None` ("not aligned") when the set is empty, when the candidates span more
/// than one row and more than one column, or when their coordinates along the shared
/// axis are not consecutive once sorted. A single candidate is row-aligned.
///
/// The candidates are compared in a locally sorted order; the caller's slice is not
/// reordered.
///
/// # Examples
///
/// ```
/// use scrabble_core::{Candidate, Letter};
/// use scrabble_validator::{Alignment, alignment::alignment};
///
/// let a = Letter::try_from('a')?;
/// let row = [Candidate::new(2, 5, a), Candidate::new(2, 3, a), Candidate::new(2, 4, a)];
/// assert_eq!(alignment(&row), Some(Alignment::Row));
///
/// let gap = [Candidate::new(0, 1, a), Candidate::new(0, 3, a)];
/// assert_eq!(alignment(&gap), None);
/// # Ok::<(), scrabble_core::CoreError>(())
/// ```
#[must_use]
pub fn alignment(candidates: &[Candidate]) -> Option<Alignment> {
    let (first, rest) = candidates.split_first()?;

    let alignment = if rest.iter().all(|c| c.row == first.row) {
        Alignment::Row
    } else if rest.iter().all(|c| c.column == first.column) {
        Alignment::Column
    } else {
        return None;
    };

    let mut sorted = candidates.iter().collect::<Vec<_>>();
    sorted.sort_by_key(|c| alignment.varying(c));

    // sorted candidates must step by exactly one cell
    let start = alignment.varying(sorted[0]);
    let consecutive = sorted.iter().enumerate().all(|(i, c)| {
        i64::try_from(i)
            .ok()
            .and_then(|offset| start.checked_add(offset))
            == Some(alignment.varying(c))
    });
    consecutive.then_some(alignment)
}

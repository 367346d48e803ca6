use std::{
    collections::{BTreeSet, HashSet},
    hash::BuildHasher,
};

/// A capability that answers whether a string is a valid word.
///
/// The validator sees only the boolean answer; an implementation backed by a remote
/// service is expected to report transport failures as `false`.
pub trait WordOracle {
    /// Returns `true` if `word` is a valid dictionary word.
    fn is_valid_word(&self, word: &str) -> bool;
}

impl<T> WordOracle for &T
where
    T: WordOracle + ?Sized,
{
    fn is_valid_word(&self, word: &str) -> bool {
        (**self).is_valid_word(word)
    }
}

impl<T> WordOracle for Box<T>
where
    T: WordOracle + ?Sized,
{
    fn is_valid_word(&self, word: &str) -> bool {
        (**self).is_valid_word(word)
    }
}

impl<S> WordOracle for HashSet<String, S>
where
    S: BuildHasher,
{
    fn is_valid_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl WordOracle for BTreeSet<String> {
    fn is_valid_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_oracles_match_exact_text() {
        let hash: HashSet<String> = ["at".to_owned()].into();
        let tree: BTreeSet<String> = ["at".to_owned()].into();
        for oracle in [&hash as &dyn WordOracle, &tree] {
            assert!(oracle.is_valid_word("at"));
            assert!(!oracle.is_valid_word("AT"));
            assert!(!oracle.is_valid_word("ta"));
        }
    }

    #[test]
    fn test_boxed_oracle_delegates() {
        let oracle: Box<dyn WordOracle> = Box::new(HashSet::from(["cats".to_owned()]));
        assert!(oracle.is_valid_word("cats"));
        assert!(!oracle.is_valid_word("dogs"));
    }
}

//! Case-sensitive stop-word set
//!
//! Stop words are excluded from indexing and from query matching entirely.
//! The set can be built from any collection of strings or parsed from a
//! single space-separated string.

use crate::tokenizer::{has_control_characters, split_into_words};
use lexis_core::{Error, Result};
use std::collections::BTreeSet;

/// Owned, case-sensitive set of words excluded from indexing and querying.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    /// Build a stop-word set from a collection of strings.
    ///
    /// Empty strings and duplicates are skipped. Any word containing a
    /// control character fails with [`Error::InvalidArgument`] and nothing
    /// is constructed.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() || set.contains(word) {
                continue;
            }
            if has_control_characters(word) {
                return Err(Error::InvalidArgument(format!(
                    "control character in stop word {word:?}"
                )));
            }
            set.insert(word.to_string());
        }
        Ok(StopWords { words: set })
    }

    /// Build a stop-word set from one space-separated string.
    pub fn parse(text: &str) -> Result<Self> {
        Self::new(split_into_words(text))
    }

    /// True when `word` is a stop word. Comparison is case-sensitive.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the set holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_from_collection() {
        let stop = StopWords::new(["and", "the", "in"]).unwrap();
        assert_eq!(stop.len(), 3);
        assert!(stop.contains("and"));
        assert!(!stop.contains("cat"));
    }

    #[test]
    fn test_duplicates_and_empties_are_skipped() {
        let stop = StopWords::new(["and", "", "and", "the"]).unwrap();
        assert_eq!(stop.len(), 2);
    }

    #[test]
    fn test_parse_space_separated() {
        let stop = StopWords::parse("  and   the ").unwrap();
        assert_eq!(stop.len(), 2);
        assert!(stop.contains("the"));
    }

    #[test]
    fn test_case_sensitive() {
        let stop = StopWords::new(["And"]).unwrap();
        assert!(stop.contains("And"));
        assert!(!stop.contains("and"));
    }

    #[test]
    fn test_control_character_rejected() {
        let err = StopWords::new(["and", "th\u{2}e"]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_empty_set() {
        let stop = StopWords::new(Vec::<String>::new()).unwrap();
        assert!(stop.is_empty());
    }
}

//! Query parsing and validation
//!
//! A raw query is a space-separated list of tokens. A leading `-` marks a
//! minus word: any document containing it is excluded from results. All
//! other tokens are plus words. Tokens are validated before use; the whole
//! query is rejected on the first malformed token and no partial parse is
//! ever used for scoring.

use crate::stop_words::StopWords;
use crate::tokenizer::{has_control_characters, split_into_words};
use lexis_core::{Error, InvalidQueryKind, Result};
use std::collections::BTreeSet;

// ============================================================================
// Query
// ============================================================================

/// A validated, deduplicated query.
///
/// Both sets are ordered, so iteration is deterministic. A word that
/// appears both bare and minus-prefixed resolves to minus, independent of
/// the order the two forms were encountered in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Words whose presence contributes relevance.
    pub plus_words: BTreeSet<String>,
    /// Words whose presence excludes a document entirely.
    pub minus_words: BTreeSet<String>,
}

impl Query {
    /// Parse and validate `text` against the engine's stop words.
    ///
    /// Validation failures, each with its own [`InvalidQueryKind`]:
    /// a bare `-`, a `--` prefix, or a control character inside a token.
    /// Stop words are dropped after the minus prefix is stripped and never
    /// reach either set.
    pub fn parse(text: &str, stop_words: &StopWords) -> Result<Self> {
        let mut plus_words = BTreeSet::new();
        let mut minus_words = BTreeSet::new();

        for token in split_into_words(text) {
            let parsed = parse_query_word(token)?;
            if stop_words.contains(parsed.word) {
                continue;
            }
            if parsed.is_minus {
                minus_words.insert(parsed.word.to_string());
            } else {
                plus_words.insert(parsed.word.to_string());
            }
        }

        // Minus wins over plus regardless of encounter order.
        for word in &minus_words {
            plus_words.remove(word);
        }

        Ok(Query {
            plus_words,
            minus_words,
        })
    }

    /// True when neither plus nor minus words remain after parsing.
    pub fn is_empty(&self) -> bool {
        self.plus_words.is_empty() && self.minus_words.is_empty()
    }
}

struct QueryWord<'a> {
    word: &'a str,
    is_minus: bool,
}

fn parse_query_word(token: &str) -> Result<QueryWord<'_>> {
    let (word, is_minus) = match token.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (token, false),
    };

    let invalid = |kind| Error::InvalidQuery {
        word: token.to_string(),
        kind,
    };
    if is_minus && word.is_empty() {
        return Err(invalid(InvalidQueryKind::EmptyAfterMinus));
    }
    if is_minus && word.starts_with('-') {
        return Err(invalid(InvalidQueryKind::DoubleMinus));
    }
    if has_control_characters(word) {
        return Err(invalid(InvalidQueryKind::ControlCharacter));
    }

    Ok(QueryWord { word, is_minus })
}

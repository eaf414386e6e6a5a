//! Error types for the lexis search engine
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Every error is synchronous and surfaced to the immediate caller; a
//! rejected operation leaves engine state exactly as it was before the call.

use crate::types::DocumentId;
use thiserror::Error;

/// Result type alias for lexis operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the lexis search engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed input at construction or insertion time (control
    /// characters in a stop word or in document text).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `add_document` called with a negative id.
    #[error("document id {0} is negative")]
    NegativeDocumentId(DocumentId),

    /// `add_document` called with an id that is live or was removed.
    #[error("document id {0} already exists in the search engine")]
    DuplicateDocumentId(DocumentId),

    /// Malformed query token; the whole query is rejected.
    #[error("invalid query word {word:?}: {kind}")]
    InvalidQuery {
        /// The offending raw token, as it appeared in the query.
        word: String,
        /// Which validation rule the token broke.
        kind: InvalidQueryKind,
    },

    /// `match_document` or `remove_document` referencing a non-live id.
    #[error("document id {0} is not indexed")]
    DocumentNotFound(DocumentId),
}

/// The specific rule a rejected query token broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidQueryKind {
    /// A bare `-` with nothing following it.
    #[error("nothing follows the minus sign")]
    EmptyAfterMinus,
    /// A second leading `-` after the minus prefix.
    #[error("double minus prefix")]
    DoubleMinus,
    /// A byte below 0x20 inside the token.
    #[error("control character in word")]
    ControlCharacter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_argument() {
        let err = Error::InvalidArgument("control character in stop word".to_string());
        let msg = err.to_string();
        assert!(msg.contains("invalid argument"));
        assert!(msg.contains("control character"));
    }

    #[test]
    fn test_error_display_negative_id() {
        let err = Error::NegativeDocumentId(-4);
        assert!(err.to_string().contains("-4"));
    }

    #[test]
    fn test_error_display_duplicate_id() {
        let err = Error::DuplicateDocumentId(12);
        let msg = err.to_string();
        assert!(msg.contains("12"));
        assert!(msg.contains("already exists"));
    }

    #[test]
    fn test_error_display_invalid_query() {
        let err = Error::InvalidQuery {
            word: "--cat".to_string(),
            kind: InvalidQueryKind::DoubleMinus,
        };
        let msg = err.to_string();
        assert!(msg.contains("--cat"));
        assert!(msg.contains("double minus"));
    }

    #[test]
    fn test_error_display_not_found() {
        let err = Error::DocumentNotFound(99);
        let msg = err.to_string();
        assert!(msg.contains("99"));
        assert!(msg.contains("not indexed"));
    }

    #[test]
    fn test_invalid_query_kind_pattern_matching() {
        let err = Error::InvalidQuery {
            word: "-".to_string(),
            kind: InvalidQueryKind::EmptyAfterMinus,
        };
        match err {
            Error::InvalidQuery { kind, .. } => {
                assert_eq!(kind, InvalidQueryKind::EmptyAfterMinus);
            }
            _ => panic!("Wrong error variant"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }

        assert_eq!(returns_result().unwrap(), 42);
    }
}

//! Core types and traits for lexis
//!
//! This crate defines the foundational types used throughout the system:
//! - DocumentId: caller-assigned document identity
//! - Status: document lifecycle tag
//! - ScoredDocument: ranked query result
//! - ExecutionPolicy: sequential vs. parallel dispatch
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{Error, InvalidQueryKind, Result};
pub use types::{
    DocumentId, ExecutionPolicy, ScoredDocument, Status, MAX_RESULT_COUNT, RELEVANCE_EPSILON,
};

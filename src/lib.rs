//! Lexis - embedded in-memory full-text search engine
//!
//! Lexis indexes short text documents and answers ranked top-K queries
//! under a TF-IDF relevance model with plus/minus word filtering,
//! predicate-based result filtering, exact document removal with duplicate
//! detection, and parallel batch query execution.
//!
//! # Quick Start
//!
//! ```
//! use lexis::{SearchEngine, Status};
//!
//! # fn main() -> lexis::Result<()> {
//! let mut engine = SearchEngine::new(["and", "the"])?;
//!
//! engine.add_document(0, "white cat and long tail", Status::Actual, &[8, -3])?;
//! engine.add_document(1, "fluffy cat fluffy tail", Status::Actual, &[7, 2, 7])?;
//!
//! for doc in engine.find_top_documents("fluffy cat")? {
//!     println!("id {} relevance {:.4} rating {}", doc.id, doc.relevance, doc.rating);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! The facade re-exports the public surface of the member crates:
//! `lexis-core` (types, errors), `lexis-search` (index, ranking, batches),
//! and `lexis-concurrency` (the sharded accumulator map used by the
//! parallel ranking path).

pub use lexis_concurrency::ConcurrentMap;
pub use lexis_core::{
    DocumentId, Error, ExecutionPolicy, InvalidQueryKind, Result, ScoredDocument, Status,
    MAX_RESULT_COUNT, RELEVANCE_EPSILON,
};
pub use lexis_search::{
    process_queries, process_queries_joined, remove_duplicates, Query, SearchEngine, StopWords,
};

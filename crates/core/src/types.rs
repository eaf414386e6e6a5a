//! Foundational data-model types
//!
//! These types form the public vocabulary of the engine: document identity,
//! lifecycle status, ranked results, and the execution-policy switch shared
//! by the ranking and batch-processing entry points.

use serde::{Deserialize, Serialize};

/// Caller-assigned document identifier.
///
/// Ids are non-negative, unique, and never reused; an id once removed stays
/// reserved forever. The signed representation exists so that a negative id
/// can be rejected explicitly instead of wrapping silently.
pub type DocumentId = i32;

/// Maximum number of documents a ranked query returns.
pub const MAX_RESULT_COUNT: usize = 5;

/// Relevance values closer than this are considered tied and fall back to
/// the rating comparison.
pub const RELEVANCE_EPSILON: f64 = 1e-6;

// ============================================================================
// Status
// ============================================================================

/// Document lifecycle tag.
///
/// The engine attaches no behavior to any particular value; statuses only
/// matter through caller-supplied predicates and the status-equality
/// convenience filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Live, ordinary document (the default filter accepts only these).
    Actual,
    /// Kept in the index but no longer considered current.
    Irrelevant,
    /// Administratively hidden.
    Banned,
    /// Scheduled for deletion by an external workflow.
    Removed,
}

// ============================================================================
// ScoredDocument
// ============================================================================

/// A single ranked query result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    /// Id of the matched document.
    pub id: DocumentId,
    /// Accumulated TF-IDF relevance (0.0 on the empty-query path).
    pub relevance: f64,
    /// Truncated average of the ratings supplied at insertion.
    pub rating: i32,
}

impl ScoredDocument {
    /// Create a new scored document.
    pub fn new(id: DocumentId, relevance: f64, rating: i32) -> Self {
        ScoredDocument {
            id,
            relevance,
            rating,
        }
    }
}

// ============================================================================
// ExecutionPolicy
// ============================================================================

/// Selects how ranking work is scheduled.
///
/// Both policies produce the same result set and ordering; only documents
/// with exactly equal relevance and rating may come back in a different
/// relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionPolicy {
    /// Single thread of control (the default).
    #[default]
    Sequential,
    /// Fan work out across the worker pool.
    Parallel,
}

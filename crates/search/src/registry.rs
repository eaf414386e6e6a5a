//! Document registry
//!
//! Tracks per-document attributes (status, rating), per-document word
//! frequencies, and the ordered set of live ids. Word strings in the
//! frequency maps are the index's interned copies.
//!
//! Removed ids are tombstoned: an id, once removed, can never be added
//! again. An external id allocator is assumed.

use lexis_core::{DocumentId, Status};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Status and rating attached to a live document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentAttributes {
    /// Lifecycle tag supplied at insertion.
    pub status: Status,
    /// Truncated average of the insertion-time rating list.
    pub rating: i32,
}

/// Per-document bookkeeping: attributes, word frequencies, live-id set.
#[derive(Debug, Default)]
pub struct DocumentRegistry {
    attributes: BTreeMap<DocumentId, DocumentAttributes>,
    word_freqs: BTreeMap<DocumentId, BTreeMap<Arc<str>, f64>>,
    removed: BTreeSet<DocumentId>,
    // Returned by reference for unknown ids.
    empty_freqs: BTreeMap<Arc<str>, f64>,
}

impl DocumentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a live document with its attributes and word frequencies.
    pub fn insert(
        &mut self,
        id: DocumentId,
        attributes: DocumentAttributes,
        word_freqs: BTreeMap<Arc<str>, f64>,
    ) {
        self.attributes.insert(id, attributes);
        self.word_freqs.insert(id, word_freqs);
    }

    /// Drop a live document, returning its word-frequency map so the
    /// caller can scrub the inverted index. The id is tombstoned.
    pub fn remove(&mut self, id: DocumentId) -> Option<BTreeMap<Arc<str>, f64>> {
        let freqs = self.word_freqs.remove(&id)?;
        self.attributes.remove(&id);
        self.removed.insert(id);
        Some(freqs)
    }

    /// Attributes of a live document.
    pub fn attributes(&self, id: DocumentId) -> Option<DocumentAttributes> {
        self.attributes.get(&id).copied()
    }

    /// True when `id` is live.
    pub fn is_live(&self, id: DocumentId) -> bool {
        self.attributes.contains_key(&id)
    }

    /// True when `id` is live or was removed earlier; such ids may never
    /// be (re)added.
    pub fn is_reserved(&self, id: DocumentId) -> bool {
        self.is_live(id) || self.removed.contains(&id)
    }

    /// Word frequencies of a document; an empty map for unknown ids.
    pub fn word_frequencies(&self, id: DocumentId) -> &BTreeMap<Arc<str>, f64> {
        self.word_freqs.get(&id).unwrap_or(&self.empty_freqs)
    }

    /// Live document ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.attributes.keys().copied()
    }

    /// Number of live documents.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// True when no documents are live.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

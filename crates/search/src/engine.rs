//! The search engine
//!
//! Owns the inverted index, the document registry, and the stop-word set,
//! and implements the full operation surface: document insertion and
//! removal, ranked top-K retrieval with plus/minus filtering, and
//! per-document word matching.
//!
//! # Ranking
//!
//! Relevance of a document is the sum over the query's plus words of
//! `tf * idf`, where `tf` is the fraction of the document's retained words
//! equal to the plus word and `idf = ln(live_count / matching_count)`.
//! Documents containing any minus word are excluded. Results are sorted by
//! relevance descending; relevance values within [`RELEVANCE_EPSILON`] are
//! tied and ordered by rating descending. At most [`MAX_RESULT_COUNT`]
//! results are returned.
//!
//! # Concurrency
//!
//! Mutation takes `&mut self`, so the compiler serializes `add_document`
//! and `remove_document` against queries. Within one parallel query the
//! only shared mutable structure is the relevance accumulator, a
//! [`ConcurrentMap`] keyed by document id.

use crate::index::InvertedIndex;
use crate::query::Query;
use crate::registry::{DocumentAttributes, DocumentRegistry};
use crate::stop_words::StopWords;
use crate::tokenizer::{has_control_characters, split_into_words};
use lexis_concurrency::ConcurrentMap;
use lexis_core::{
    DocumentId, Error, ExecutionPolicy, Result, ScoredDocument, Status, MAX_RESULT_COUNT,
    RELEVANCE_EPSILON,
};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

// Shard count for the relevance accumulator. A few times the typical
// worker-pool width keeps shard collisions rare without bloating the
// snapshot merge.
const ACCUMULATOR_SHARDS: usize = 64;

// ============================================================================
// SearchEngine
// ============================================================================

/// In-memory full-text search engine with TF-IDF ranking.
///
/// # Example
///
/// ```
/// use lexis_search::SearchEngine;
/// use lexis_core::Status;
///
/// let mut engine = SearchEngine::new(["and"]).unwrap();
/// engine
///     .add_document(0, "white cat and long tail", Status::Actual, &[8, -3])
///     .unwrap();
///
/// let results = engine.find_top_documents("cat").unwrap();
/// assert_eq!(results[0].id, 0);
/// ```
#[derive(Debug, Default)]
pub struct SearchEngine {
    stop_words: StopWords,
    index: InvertedIndex,
    registry: DocumentRegistry,
}

impl SearchEngine {
    /// Create an engine with stop words taken from a collection of strings.
    ///
    /// Fails with [`Error::InvalidArgument`] if any stop word contains a
    /// control character.
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(SearchEngine {
            stop_words: StopWords::new(stop_words)?,
            index: InvertedIndex::new(),
            registry: DocumentRegistry::new(),
        })
    }

    /// Create an engine with stop words parsed from one space-separated
    /// string.
    pub fn from_stop_words_text(text: &str) -> Result<Self> {
        Self::new(split_into_words(text))
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Index a document.
    ///
    /// Preconditions, checked in order before any state changes:
    /// the id is non-negative, the id was never used before, and the text
    /// contains no control characters. On failure the engine is untouched.
    ///
    /// The rating stored with the document is the average of `ratings`
    /// truncated toward zero, or 0 for an empty list.
    pub fn add_document(
        &mut self,
        id: DocumentId,
        text: &str,
        status: Status,
        ratings: &[i32],
    ) -> Result<()> {
        if id < 0 {
            return Err(Error::NegativeDocumentId(id));
        }
        if self.registry.is_reserved(id) {
            return Err(Error::DuplicateDocumentId(id));
        }
        if has_control_characters(text) {
            return Err(Error::InvalidArgument(
                "control character in document text".to_string(),
            ));
        }

        let words: Vec<&str> = split_into_words(text)
            .filter(|word| !self.stop_words.contains(word))
            .collect();

        let mut word_freqs: BTreeMap<Arc<str>, f64> = BTreeMap::new();
        if !words.is_empty() {
            let tf = 1.0 / words.len() as f64;
            for word in &words {
                let interned = self.index.add_occurrence(word, id, tf);
                *word_freqs.entry(interned).or_insert(0.0) += tf;
            }
        }

        debug!(id, word_count = words.len(), "indexed document");
        self.registry.insert(
            id,
            DocumentAttributes {
                status,
                rating: average_rating(ratings),
            },
            word_freqs,
        );
        Ok(())
    }

    /// Remove a document, scrubbing it from every posting list, the
    /// per-document frequency map, and the live-id set.
    ///
    /// Fails with [`Error::DocumentNotFound`] if the id is not live;
    /// removing the same id twice is an error, not a no-op. Removed ids
    /// stay reserved forever.
    pub fn remove_document(&mut self, id: DocumentId) -> Result<()> {
        let word_freqs = self
            .registry
            .remove(id)
            .ok_or(Error::DocumentNotFound(id))?;
        self.index.remove_document(id, word_freqs.keys());
        debug!(id, "removed document");
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Ranked search accepting only documents with status
    /// [`Status::Actual`].
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_with_status(raw_query, Status::Actual)
    }

    /// Ranked search accepting only documents with exactly `status`.
    pub fn find_top_documents_with_status(
        &self,
        raw_query: &str,
        status: Status,
    ) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_with(raw_query, move |_, document_status, _| {
            document_status == status
        })
    }

    /// Ranked search with an arbitrary `(id, status, rating)` predicate,
    /// executed sequentially.
    pub fn find_top_documents_with<P>(
        &self,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<ScoredDocument>>
    where
        P: Fn(DocumentId, Status, i32) -> bool + Sync,
    {
        self.find_top_documents_with_policy(ExecutionPolicy::Sequential, raw_query, predicate)
    }

    /// Ranked search with an explicit execution policy.
    ///
    /// Both policies return the same documents in the same order; only
    /// results with exactly equal relevance and rating may swap places.
    pub fn find_top_documents_with_policy<P>(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<ScoredDocument>>
    where
        P: Fn(DocumentId, Status, i32) -> bool + Sync,
    {
        let query = Query::parse(raw_query, &self.stop_words)?;

        let mut results = if query.is_empty() {
            self.all_matching(&predicate)
        } else {
            match policy {
                ExecutionPolicy::Sequential => self.find_all_documents(&query, &predicate),
                ExecutionPolicy::Parallel => self.find_all_documents_parallel(&query, &predicate),
            }
        };

        results.sort_by(rank_order);
        results.truncate(MAX_RESULT_COUNT);
        Ok(results)
    }

    /// Words of the query found in document `id`.
    ///
    /// Returns the sorted distinct plus words present in the document,
    /// together with its status. If any minus word is present the word
    /// list is empty regardless of plus-word overlap.
    ///
    /// Fails with [`Error::DocumentNotFound`] if the id is not live.
    pub fn match_document(
        &self,
        raw_query: &str,
        id: DocumentId,
    ) -> Result<(Vec<String>, Status)> {
        let attributes = self
            .registry
            .attributes(id)
            .ok_or(Error::DocumentNotFound(id))?;
        let query = Query::parse(raw_query, &self.stop_words)?;

        if query
            .minus_words
            .iter()
            .any(|word| self.index.contains(word, id))
        {
            return Ok((Vec::new(), attributes.status));
        }

        let matched = query
            .plus_words
            .iter()
            .filter(|word| self.index.contains(word, id))
            .cloned()
            .collect();
        Ok((matched, attributes.status))
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Number of live documents.
    pub fn document_count(&self) -> usize {
        self.registry.len()
    }

    /// Live document ids in ascending order.
    pub fn document_ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.registry.ids()
    }

    /// Word frequencies of a document; an empty map for unknown ids.
    pub fn word_frequencies(&self, id: DocumentId) -> &BTreeMap<Arc<str>, f64> {
        self.registry.word_frequencies(id)
    }

    // ========================================================================
    // Ranking internals
    // ========================================================================

    fn inverse_document_frequency(&self, matching_documents: usize) -> f64 {
        (self.registry.len() as f64 / matching_documents as f64).ln()
    }

    // Empty-parse path: every live document passing the predicate, at zero
    // relevance.
    fn all_matching<P>(&self, predicate: &P) -> Vec<ScoredDocument>
    where
        P: Fn(DocumentId, Status, i32) -> bool,
    {
        self.registry
            .ids()
            .filter_map(|id| {
                let attributes = self.registry.attributes(id)?;
                predicate(id, attributes.status, attributes.rating)
                    .then(|| ScoredDocument::new(id, 0.0, attributes.rating))
            })
            .collect()
    }

    fn find_all_documents<P>(&self, query: &Query, predicate: &P) -> Vec<ScoredDocument>
    where
        P: Fn(DocumentId, Status, i32) -> bool,
    {
        let mut accumulator: BTreeMap<DocumentId, f64> = BTreeMap::new();

        for word in &query.plus_words {
            let Some(postings) = self.index.postings(word) else {
                continue;
            };
            let idf = self.inverse_document_frequency(postings.len());
            for (&id, &tf) in postings {
                let Some(attributes) = self.registry.attributes(id) else {
                    continue;
                };
                if predicate(id, attributes.status, attributes.rating) {
                    *accumulator.entry(id).or_insert(0.0) += tf * idf;
                }
            }
        }

        for word in &query.minus_words {
            let Some(postings) = self.index.postings(word) else {
                continue;
            };
            for &id in postings.keys() {
                accumulator.remove(&id);
            }
        }

        self.collect_scored(accumulator)
    }

    // Same algorithm with per-word fan-out. The minus phase starts only
    // after the plus phase has fully drained.
    fn find_all_documents_parallel<P>(&self, query: &Query, predicate: &P) -> Vec<ScoredDocument>
    where
        P: Fn(DocumentId, Status, i32) -> bool + Sync,
    {
        let accumulator: ConcurrentMap<DocumentId, f64> = ConcurrentMap::new(ACCUMULATOR_SHARDS);

        query.plus_words.par_iter().for_each(|word| {
            let Some(postings) = self.index.postings(word) else {
                return;
            };
            let idf = self.inverse_document_frequency(postings.len());
            for (&id, &tf) in postings {
                let Some(attributes) = self.registry.attributes(id) else {
                    continue;
                };
                if predicate(id, attributes.status, attributes.rating) {
                    accumulator.with_shard_locked(id, |relevance| *relevance += tf * idf);
                }
            }
        });

        query.minus_words.par_iter().for_each(|word| {
            let Some(postings) = self.index.postings(word) else {
                return;
            };
            for id in postings.keys() {
                accumulator.erase(id);
            }
        });

        self.collect_scored(accumulator.snapshot())
    }

    fn collect_scored(&self, accumulator: BTreeMap<DocumentId, f64>) -> Vec<ScoredDocument> {
        accumulator
            .into_iter()
            .filter_map(|(id, relevance)| {
                let attributes = self.registry.attributes(id)?;
                Some(ScoredDocument::new(id, relevance, attributes.rating))
            })
            .collect()
    }
}

// Relevance descending; near-ties fall back to rating descending.
fn rank_order(lhs: &ScoredDocument, rhs: &ScoredDocument) -> Ordering {
    if (lhs.relevance - rhs.relevance).abs() < RELEVANCE_EPSILON {
        rhs.rating.cmp(&lhs.rating)
    } else {
        rhs.relevance.total_cmp(&lhs.relevance)
    }
}

fn average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&rating| i64::from(rating)).sum();
    (sum / ratings.len() as i64) as i32
}

//! Inverted index with posting maps
//!
//! Maps each word to an ordered posting map of document id to term
//! frequency. Words are interned: the index owns one canonical `Arc<str>`
//! per distinct word, and the registry's per-document frequency maps share
//! those allocations instead of duplicating storage per document.

use lexis_core::DocumentId;
use std::collections::BTreeMap;
use std::sync::Arc;

// ============================================================================
// InvertedIndex
// ============================================================================

/// Word to posting-map index, built incrementally and mutated on removal.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: BTreeMap<Arc<str>, BTreeMap<DocumentId, f64>>,
}

impl InvertedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `word` in `id`, adding `tf` to the posting.
    ///
    /// Returns the canonical interned copy of the word so the caller can
    /// share the allocation.
    pub fn add_occurrence(&mut self, word: &str, id: DocumentId, tf: f64) -> Arc<str> {
        let interned = match self.postings.get_key_value(word) {
            Some((existing, _)) => Arc::clone(existing),
            None => {
                let interned: Arc<str> = Arc::from(word);
                self.postings.insert(Arc::clone(&interned), BTreeMap::new());
                interned
            }
        };
        if let Some(posting) = self.postings.get_mut(word) {
            *posting.entry(id).or_insert(0.0) += tf;
        }
        interned
    }

    /// Posting map for `word`, if the word is indexed.
    pub fn postings(&self, word: &str) -> Option<&BTreeMap<DocumentId, f64>> {
        self.postings.get(word)
    }

    /// True when `word` occurs in document `id`.
    pub fn contains(&self, word: &str, id: DocumentId) -> bool {
        self.postings
            .get(word)
            .is_some_and(|posting| posting.contains_key(&id))
    }

    /// Number of distinct indexed words.
    pub fn word_count(&self) -> usize {
        self.postings.len()
    }

    /// Remove document `id` from the postings of each word in `words`.
    ///
    /// Posting maps emptied by the removal are dropped, so the vocabulary
    /// never retains words no live document contains.
    pub fn remove_document<'a>(
        &mut self,
        id: DocumentId,
        words: impl IntoIterator<Item = &'a Arc<str>>,
    ) {
        for word in words {
            let emptied = match self.postings.get_mut(word.as_ref()) {
                Some(posting) => {
                    posting.remove(&id);
                    posting.is_empty()
                }
                None => false,
            };
            if emptied {
                self.postings.remove(word.as_ref());
            }
        }
    }
}

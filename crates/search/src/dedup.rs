//! Duplicate document detection and removal
//!
//! Two documents are duplicates when their distinct-word sets are equal,
//! frequencies ignored. The document with the smaller id is canonical; all
//! later ids with the same word set are removed.

use crate::engine::SearchEngine;
use lexis_core::{DocumentId, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::info;

/// Remove every duplicate document, keeping the lowest id of each
/// duplicate set, and return the removed ids.
///
/// Live ids are scanned in ascending order, so the first id seen with a
/// given word set is always the canonical one. One `info` event is emitted
/// per removed document.
pub fn remove_duplicates(engine: &mut SearchEngine) -> Result<Vec<DocumentId>> {
    let mut first_seen: BTreeMap<BTreeSet<Arc<str>>, DocumentId> = BTreeMap::new();
    let mut duplicates = Vec::new();

    let ids: Vec<DocumentId> = engine.document_ids().collect();
    for id in ids {
        let words: BTreeSet<Arc<str>> = engine.word_frequencies(id).keys().cloned().collect();
        match first_seen.get(&words) {
            None => {
                first_seen.insert(words, id);
            }
            Some(_) => duplicates.push(id),
        }
    }

    for &id in &duplicates {
        info!(id, "found duplicate document");
        engine.remove_document(id)?;
    }
    Ok(duplicates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexis_core::Status;

    fn engine_with(texts: &[(DocumentId, &str)]) -> SearchEngine {
        let mut engine = SearchEngine::new(["and"]).unwrap();
        for &(id, text) in texts {
            engine.add_document(id, text, Status::Actual, &[1]).unwrap();
        }
        engine
    }

    #[test]
    fn test_exact_duplicate_removed() {
        let mut engine = engine_with(&[(0, "fluffy cat"), (1, "fluffy cat")]);
        let removed = remove_duplicates(&mut engine).unwrap();
        assert_eq!(removed, vec![1]);
        assert_eq!(engine.document_count(), 1);
    }

    #[test]
    fn test_frequency_and_order_ignored() {
        let mut engine = engine_with(&[
            (0, "cat tail"),
            (1, "tail cat tail"),
            (2, "tail tail cat cat cat"),
        ]);
        let removed = remove_duplicates(&mut engine).unwrap();
        assert_eq!(removed, vec![1, 2]);
        assert_eq!(engine.document_ids().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_stop_words_do_not_distinguish() {
        // "and" is a stop word, so both documents index the same set.
        let mut engine = engine_with(&[(3, "cat and tail"), (5, "cat tail")]);
        let removed = remove_duplicates(&mut engine).unwrap();
        assert_eq!(removed, vec![5]);
    }

    #[test]
    fn test_distinct_documents_survive() {
        let mut engine = engine_with(&[(0, "white cat"), (1, "black cat"), (2, "white dog")]);
        let removed = remove_duplicates(&mut engine).unwrap();
        assert!(removed.is_empty());
        assert_eq!(engine.document_count(), 3);
    }

    #[test]
    fn test_second_run_finds_nothing() {
        let mut engine = engine_with(&[(0, "cat"), (1, "cat"), (2, "cat")]);
        let removed = remove_duplicates(&mut engine).unwrap();
        assert_eq!(removed, vec![1, 2]);
        assert!(remove_duplicates(&mut engine).unwrap().is_empty());
    }

    #[test]
    fn test_wordless_documents_are_duplicates() {
        // Both documents consist of stop words only: equal empty word sets.
        let mut engine = engine_with(&[(0, "and"), (1, "and and")]);
        let removed = remove_duplicates(&mut engine).unwrap();
        assert_eq!(removed, vec![1]);
    }
}

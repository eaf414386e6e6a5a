//! Batch query processing
//!
//! Runs independent queries against one engine on the worker pool. The
//! output order always matches the input order; parallel scheduling never
//! reorders the outer list.

use crate::engine::SearchEngine;
use lexis_core::{Result, ScoredDocument};
use rayon::prelude::*;

/// Run each query concurrently with the default
/// [`Status::Actual`](lexis_core::Status::Actual) filter.
///
/// Element `i` of the output holds the results of `queries[i]`. The first
/// malformed query fails the whole batch.
pub fn process_queries<S>(
    engine: &SearchEngine,
    queries: &[S],
) -> Result<Vec<Vec<ScoredDocument>>>
where
    S: AsRef<str> + Sync,
{
    queries
        .par_iter()
        .map(|query| engine.find_top_documents(query.as_ref()))
        .collect()
}

/// Like [`process_queries`], flattened into one sequence: results of query
/// 0, then query 1, and so on, inner order preserved.
pub fn process_queries_joined<S>(
    engine: &SearchEngine,
    queries: &[S],
) -> Result<Vec<ScoredDocument>>
where
    S: AsRef<str> + Sync,
{
    Ok(process_queries(engine, queries)?
        .into_iter()
        .flatten()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexis_core::{Error, Status};

    fn test_engine() -> SearchEngine {
        let mut engine = SearchEngine::new(["and"]).unwrap();
        engine
            .add_document(0, "white cat and long tail", Status::Actual, &[8, -3])
            .unwrap();
        engine
            .add_document(1, "fluffy cat fluffy tail", Status::Actual, &[7, 2, 7])
            .unwrap();
        engine
            .add_document(2, "well-groomed dog talking eyes", Status::Actual, &[5, -12, 2, 1])
            .unwrap();
        engine
    }

    #[test]
    fn test_output_order_matches_input_order() {
        let engine = test_engine();
        let queries = ["dog", "cat", "tail -fluffy"];
        let results = process_queries(&engine, &queries).unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].iter().map(|d| d.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(
            results[1].iter().map(|d| d.id).collect::<Vec<_>>(),
            vec![1, 0]
        );
        assert_eq!(results[2].iter().map(|d| d.id).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_batch_matches_single_queries() {
        let engine = test_engine();
        let queries = ["cat", "dog", "eyes", "tail"];
        let batched = process_queries(&engine, &queries).unwrap();

        for (query, batch_result) in queries.iter().zip(&batched) {
            let single = engine.find_top_documents(query).unwrap();
            assert_eq!(&single, batch_result, "{query:?}");
        }
    }

    #[test]
    fn test_joined_flattens_in_order() {
        let engine = test_engine();
        let queries = ["dog", "cat"];
        let joined = process_queries_joined(&engine, &queries).unwrap();
        assert_eq!(joined.iter().map(|d| d.id).collect::<Vec<_>>(), vec![2, 1, 0]);
    }

    #[test]
    fn test_malformed_query_fails_batch() {
        let engine = test_engine();
        let queries = ["cat", "--dog"];
        let err = process_queries(&engine, &queries).unwrap_err();
        assert!(matches!(err, Error::InvalidQuery { .. }));
    }

    #[test]
    fn test_empty_batch() {
        let engine = test_engine();
        let results = process_queries(&engine, &Vec::<String>::new()).unwrap();
        assert!(results.is_empty());
    }
}

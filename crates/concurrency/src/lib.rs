//! Concurrency layer for lexis
//!
//! This crate implements the sharded aggregation map used by the parallel
//! ranking path:
//! - ConcurrentMap: lock-per-shard map with scoped value access
//! - All-shard snapshot into an ordered map for sorting
//!
//! The index and registry themselves are not covered here; they are mutated
//! under exclusive access only. The accumulator is the one structure many
//! workers touch within a single query.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod map;

pub use map::ConcurrentMap;

//! Sharded concurrent map
//!
//! Keys are hashed into a fixed number of independent shards, each guarded
//! by its own mutex. A worker locks only the shard holding the key it
//! touches, so two workers updating different shards never block each
//! other. Building an ordered snapshot is the only operation that takes
//! every shard lock, and it acquires them in shard-index order.

use parking_lot::Mutex;
use rustc_hash::{FxHashMap, FxHasher};
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

// ============================================================================
// ConcurrentMap
// ============================================================================

/// Lock-per-shard map for concurrent aggregation.
///
/// Access to a value goes through [`ConcurrentMap::with_shard_locked`],
/// which holds the shard lock only for the duration of the supplied
/// closure. No lock guard ever escapes to the caller.
///
/// # Thread Safety
///
/// All operations take `&self`; the map is `Send + Sync` whenever the key
/// and value types are.
#[derive(Debug)]
pub struct ConcurrentMap<K, V> {
    shards: Vec<Mutex<FxHashMap<K, V>>>,
}

impl<K: Eq + Hash, V> ConcurrentMap<K, V> {
    /// Create a map with the given number of shards.
    ///
    /// A shard count of zero is rounded up to one.
    pub fn new(shard_count: usize) -> Self {
        let shard_count = shard_count.max(1);
        ConcurrentMap {
            shards: (0..shard_count)
                .map(|_| Mutex::new(FxHashMap::default()))
                .collect(),
        }
    }

    /// Number of shards the key space is split across.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    fn shard_for(&self, key: &K) -> &Mutex<FxHashMap<K, V>> {
        let mut hasher = FxHasher::default();
        key.hash(&mut hasher);
        let index = (hasher.finish() % self.shards.len() as u64) as usize;
        &self.shards[index]
    }

    /// Run `f` against the value stored under `key`, inserting the default
    /// value first if the key is absent.
    ///
    /// The shard lock is held exactly for the duration of `f` and released
    /// on every exit path.
    pub fn with_shard_locked<R>(&self, key: K, f: impl FnOnce(&mut V) -> R) -> R
    where
        V: Default,
    {
        let mut shard = self.shard_for(&key).lock();
        f(shard.entry(key).or_default())
    }

    /// Remove `key` if present. Locks only the owning shard.
    pub fn erase(&self, key: &K) {
        self.shard_for(key).lock().remove(key);
    }

    /// Total number of entries across all shards.
    ///
    /// Shards are locked one at a time; the count is only exact when no
    /// writers are active.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.lock().len()).sum()
    }

    /// True when no shard holds any entry.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Merge every shard into a single ordered map.
    ///
    /// All shard locks are acquired in shard-index order and held together,
    /// so the snapshot is consistent even with concurrent writers. This is
    /// the only point that serializes across all shards.
    pub fn snapshot(&self) -> BTreeMap<K, V>
    where
        K: Ord + Clone,
        V: Clone,
    {
        let guards: Vec<_> = self.shards.iter().map(|shard| shard.lock()).collect();
        let mut merged = BTreeMap::new();
        for guard in &guards {
            for (key, value) in guard.iter() {
                merged.insert(key.clone(), value.clone());
            }
        }
        merged
    }
}

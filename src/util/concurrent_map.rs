//! Lock-striped concurrent map.
//!
//! `N` independent buckets, each an ordinary map behind its own lock; the
//! bucket for a key is chosen by hash mod `N`. Updates to keys in
//! different buckets never contend. Larger bucket counts reduce
//! contention; smaller counts reduce memory and merge overhead.
//!
//! Merging consumes the map, so the "all writers have finished" barrier is
//! enforced by ownership: a parallel scope borrowing the map must end
//! before [`ConcurrentMap::into_merged`] can run.

use std::hash::{BuildHasher, Hash};

use ahash::{AHashMap, RandomState};
use parking_lot::Mutex;

/// A concurrent accumulator map partitioned into independently-locked
/// buckets.
#[derive(Debug)]
pub struct ConcurrentMap<K, V> {
    buckets: Vec<Mutex<AHashMap<K, V>>>,
    hasher: RandomState,
}

impl<K: Hash + Eq, V: Default> ConcurrentMap<K, V> {
    /// Create a map with the given number of buckets (at least one).
    pub fn new(bucket_count: usize) -> Self {
        let bucket_count = bucket_count.max(1);
        ConcurrentMap {
            buckets: (0..bucket_count).map(|_| Mutex::default()).collect(),
            hasher: RandomState::new(),
        }
    }

    fn bucket(&self, key: &K) -> &Mutex<AHashMap<K, V>> {
        let hash = self.hasher.hash_one(key) as usize;
        &self.buckets[hash % self.buckets.len()]
    }

    /// Apply `f` to the entry for `key`, inserting a default value first
    /// if absent. Only the key's bucket is locked.
    pub fn access<R>(&self, key: K, f: impl FnOnce(&mut V) -> R) -> R {
        let mut bucket = self.bucket(&key).lock();
        f(bucket.entry(key).or_default())
    }

    /// Remove the entry for `key`, if present. Only the key's bucket is
    /// locked.
    pub fn remove(&self, key: &K) {
        self.bucket(key).lock().remove(key);
    }

    /// Number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Drain every bucket into one ordinary map.
    pub fn into_merged(self) -> AHashMap<K, V> {
        let mut merged = AHashMap::new();
        for bucket in self.buckets {
            merged.extend(bucket.into_inner());
        }
        merged
    }
}

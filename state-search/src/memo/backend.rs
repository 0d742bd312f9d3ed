//! Storage backends for the memo table.

use std::collections::HashMap;
use std::hash::Hash;

/// A storage backend for [`MemoTable`](super::MemoTable).
///
/// This trait defines the interface for storing and retrieving memoized
/// values. Implementations can use different data structures (HashMap, Vec)
/// based on the key type requirements.
///
/// # Contract
///
/// - `get_or_insert_with` runs `compute` at most once per key; a present
///   key keeps its stored value untouched
/// - `get` returns `None` for keys that were never inserted; a miss means
///   "never computed", not "computed as absent"
pub trait MemoBackend<K, V>: Default {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &K) -> Option<&V>;

    /// Returns the value for `key`, inserting the result of `compute` first
    /// if the key is absent.
    fn get_or_insert_with<F: FnOnce() -> V>(&mut self, key: K, compute: F) -> &V;

    /// Number of stored entries.
    fn len(&self) -> usize;

    /// Whether the backend holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A HashMap-based backend for arbitrary hashable keys.
///
/// The default choice: suitable for sparse keys and non-integer key types.
#[derive(Debug)]
pub struct HashMapBackend<K, V> {
    data: HashMap<K, V>,
}

impl<K, V> HashMapBackend<K, V> {
    /// Creates a new empty HashMapBackend.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<K, V> Default for HashMapBackend<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> MemoBackend<K, V> for HashMapBackend<K, V> {
    fn get(&self, key: &K) -> Option<&V> {
        self.data.get(key)
    }

    fn get_or_insert_with<F: FnOnce() -> V>(&mut self, key: K, compute: F) -> &V {
        self.data.entry(key).or_insert_with(compute)
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

/// A Vec-based backend for dense `usize` keys.
///
/// Efficient when keys are dense integers starting near 0 (flattened grid
/// cells, small DP indices). The Vec automatically grows to the largest key
/// seen.
#[derive(Debug)]
pub struct DenseBackend<V> {
    data: Vec<Option<V>>,
    filled: usize,
}

impl<V> DenseBackend<V> {
    /// Creates a new empty DenseBackend.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            filled: 0,
        }
    }

    /// Creates a new DenseBackend with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            filled: 0,
        }
    }
}

impl<V> Default for DenseBackend<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> MemoBackend<usize, V> for DenseBackend<V> {
    fn get(&self, key: &usize) -> Option<&V> {
        self.data.get(*key).and_then(|slot| slot.as_ref())
    }

    fn get_or_insert_with<F: FnOnce() -> V>(&mut self, key: usize, compute: F) -> &V {
        if key >= self.data.len() {
            self.data.resize_with(key + 1, || None);
        }
        if self.data[key].is_none() {
            self.filled += 1;
        }
        self.data[key].get_or_insert_with(compute)
    }

    fn len(&self) -> usize {
        self.filled
    }
}

/// A backend that retains nothing; every lookup misses.
///
/// Baseline for measuring what memoization buys: a solve driven through
/// this backend recomputes every state on every visit.
#[derive(Debug)]
pub struct NoMemoBackend<V> {
    scratch: Option<V>,
}

impl<V> NoMemoBackend<V> {
    /// Creates a new NoMemoBackend.
    pub fn new() -> Self {
        Self { scratch: None }
    }
}

impl<V> Default for NoMemoBackend<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> MemoBackend<K, V> for NoMemoBackend<V> {
    fn get(&self, _key: &K) -> Option<&V> {
        None
    }

    fn get_or_insert_with<F: FnOnce() -> V>(&mut self, _key: K, compute: F) -> &V {
        // Only the value from the current call is ever observable
        self.scratch.insert(compute())
    }

    fn len(&self) -> usize {
        0
    }
}

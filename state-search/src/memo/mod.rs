//! Memoization table with insert-once semantics.
//!
//! A [`MemoTable`] maps search states to the results computed for them.
//! Once a key is present its value is never overwritten: re-inserting the
//! same value is a no-op, and inserting a *different* value is reported as
//! an error (see [`MemoError`]) because it means two semantically different
//! states compare equal, violating memoization's one precondition.
//!
//! # Backend Types
//!
//! - [`HashMapBackend`]: arbitrary hashable keys (default)
//! - [`DenseBackend`]: auto-growing Vec for dense `usize` keys
//! - [`NoMemoBackend`]: retains nothing; baseline for benchmarks
//!
//! # Lifecycle
//!
//! A table lives exactly as long as one search: the engines construct a
//! fresh one inside every run, it grows monotonically (bounded only by the
//! reachable state space), and there is no eviction.
//!
//! # Example
//!
//! ```rust
//! use state_search::MemoTable;
//!
//! let mut memo: MemoTable<(u8, u8), u64> = MemoTable::new();
//! memo.insert((0, 1), 10);
//!
//! assert_eq!(memo.try_get(&(0, 1)), Some(&10));
//! assert_eq!(memo.try_get(&(2, 2)), None);
//!
//! // Same value again: silent no-op
//! memo.insert((0, 1), 10);
//!
//! // A different value for a present key is rejected
//! assert!(memo.try_insert((0, 1), 99).is_err());
//! assert_eq!(memo.try_get(&(0, 1)), Some(&10));
//! ```

mod backend;

use std::fmt::Debug;
use std::marker::PhantomData;

pub use backend::{DenseBackend, HashMapBackend, MemoBackend, NoMemoBackend};

use crate::error::MemoError;
use crate::problem::StateKey;

/// A memo table mapping search states to computed results.
///
/// # Type Parameters
///
/// - `K`: Key type (must implement [`StateKey`](crate::StateKey))
/// - `V`: Value type
/// - `B`: Backend storage type (defaults to [`HashMapBackend`])
pub struct MemoTable<K, V, B = HashMapBackend<K, V>>
where
    B: MemoBackend<K, V>,
{
    backend: B,
    _phantom: PhantomData<(K, V)>,
}

impl<K, V, B> MemoTable<K, V, B>
where
    K: StateKey,
    B: MemoBackend<K, V>,
{
    /// Creates an empty table over a default-constructed backend.
    pub fn new() -> Self {
        Self::with_backend(B::default())
    }

    /// Creates an empty table over `backend`.
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            _phantom: PhantomData,
        }
    }

    /// Returns the memoized value for `key`, if one was ever inserted.
    pub fn try_get(&self, key: &K) -> Option<&V> {
        self.backend.get(key)
    }

    /// Returns the value for `key`, running `compute` first if absent.
    ///
    /// `compute` runs at most once per key over the table's lifetime.
    pub fn get_or_insert_with<F: FnOnce() -> V>(&mut self, key: K, compute: F) -> &V {
        self.backend.get_or_insert_with(key, compute)
    }

    /// Number of memoized entries.
    pub fn len(&self) -> usize {
        self.backend.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }
}

impl<K, V, B> MemoTable<K, V, B>
where
    K: StateKey,
    V: PartialEq + Debug,
    B: MemoBackend<K, V>,
{
    /// Inserts `value` for `key` unless the key is already present.
    ///
    /// Re-inserting the stored value is a silent no-op. A *different* value
    /// for a present key debug-asserts; release builds keep the first value
    /// and drop the new one. Use [`try_insert`](Self::try_insert) to handle
    /// the conflict instead.
    pub fn insert(&mut self, key: K, value: V) {
        if let Err(conflict) = self.try_insert(key, value) {
            debug_assert!(false, "{conflict}");
        }
    }

    /// Fallible insert: errors when `key` is present with a different value.
    ///
    /// The stored value is never overwritten either way.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<(), MemoError> {
        if let Some(existing) = self.backend.get(&key) {
            if *existing != value {
                return Err(MemoError::ValueConflict {
                    key: format!("{key:?}"),
                    existing: format!("{existing:?}"),
                    attempted: format!("{value:?}"),
                });
            }
            return Ok(());
        }
        self.backend.get_or_insert_with(key, || value);
        Ok(())
    }
}

impl<K, V, B> Default for MemoTable<K, V, B>
where
    K: StateKey,
    B: MemoBackend<K, V>,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;

//! Tests for the memo module.

use super::*;

use crate::error::{MemoError, SearchError};

#[test]
fn test_try_get_miss_means_never_computed() {
    let memo: MemoTable<u32, u32> = MemoTable::new();
    assert!(memo.is_empty());
    assert_eq!(memo.try_get(&7), None);
}

#[test]
fn test_insert_then_get() {
    let mut memo: MemoTable<(u8, u8), i64> = MemoTable::new();
    memo.insert((1, 2), -5);
    memo.insert((3, 4), 9);

    assert_eq!(memo.try_get(&(1, 2)), Some(&-5));
    assert_eq!(memo.try_get(&(3, 4)), Some(&9));
    assert_eq!(memo.len(), 2);
}

#[test]
fn test_reinserting_same_value_is_silent() {
    let mut memo: MemoTable<u32, u32> = MemoTable::new();
    memo.insert(1, 42);
    memo.insert(1, 42);

    assert_eq!(memo.try_get(&1), Some(&42));
    assert_eq!(memo.len(), 1);
}

#[test]
fn test_conflicting_insert_is_rejected_and_first_value_kept() {
    let mut memo: MemoTable<u32, u32> = MemoTable::new();
    memo.insert(1, 42);

    let err = memo.try_insert(1, 99).unwrap_err();
    assert!(matches!(err, MemoError::ValueConflict { .. }));

    // First value survives the rejected insert
    assert_eq!(memo.try_get(&1), Some(&42));
}

#[test]
fn test_insert_conflict_bubbles_into_search_error() {
    // Adapters driving the table directly lean on the From conversion
    fn fill(memo: &mut MemoTable<u32, u32>) -> Result<(), SearchError> {
        memo.try_insert(1, 42)?;
        memo.try_insert(1, 99)?;
        Ok(())
    }

    let mut memo = MemoTable::new();
    let err = fill(&mut memo).unwrap_err();
    assert!(matches!(
        err,
        SearchError::Memo(MemoError::ValueConflict { .. })
    ));
}

#[test]
fn test_get_or_insert_with_computes_at_most_once() {
    let mut memo: MemoTable<u32, u32> = MemoTable::new();

    let value = *memo.get_or_insert_with(5, || 10);
    assert_eq!(value, 10);

    // Second call must not run the closure
    let value = *memo.get_or_insert_with(5, || panic!("recomputed a present key"));
    assert_eq!(value, 10);
}

// =============================================================================
// Backend tests
// =============================================================================

#[test]
fn test_hashmap_backend_get_or_insert_with() {
    let mut backend: HashMapBackend<String, i32> = HashMapBackend::new();

    let value = backend.get_or_insert_with("key1".to_string(), || 42);
    assert_eq!(*value, 42);

    // Same key again - should return stored value, not recompute
    let value = backend.get_or_insert_with("key1".to_string(), || 999);
    assert_eq!(*value, 42);

    assert_eq!(backend.get(&"key1".to_string()), Some(&42));
    assert_eq!(backend.get(&"key2".to_string()), None);
    assert_eq!(backend.len(), 1);
}

#[test]
fn test_dense_backend_grows_to_largest_key() {
    let mut backend: DenseBackend<i32> = DenseBackend::new();

    let value = backend.get_or_insert_with(5, || 42);
    assert_eq!(*value, 42);

    // Larger key - should not affect existing entries
    let value = backend.get_or_insert_with(10, || 100);
    assert_eq!(*value, 100);
    assert_eq!(backend.get(&5), Some(&42));

    // Gaps stay empty and count reflects only filled slots
    assert_eq!(backend.get(&7), None);
    assert_eq!(backend.len(), 2);
}

#[test]
fn test_dense_backend_keeps_first_value() {
    let mut backend: DenseBackend<i32> = DenseBackend::new();

    backend.get_or_insert_with(3, || 1);
    let value = backend.get_or_insert_with(3, || 2);
    assert_eq!(*value, 1);
    assert_eq!(backend.len(), 1);
}

#[test]
fn test_no_memo_backend_always_misses() {
    let mut backend: NoMemoBackend<i32> = NoMemoBackend::new();

    let value = *backend.get_or_insert_with(1u32, || 5);
    assert_eq!(value, 5);

    // Nothing was retained
    assert_eq!(MemoBackend::<u32, i32>::get(&backend, &1), None);
    assert_eq!(MemoBackend::<u32, i32>::len(&backend), 0);

    // The compute runs again on every visit
    let value = *backend.get_or_insert_with(1u32, || 6);
    assert_eq!(value, 6);
}

#[test]
fn test_memo_table_over_dense_backend() {
    let mut memo: MemoTable<usize, u64, DenseBackend<u64>> = MemoTable::new();
    memo.insert(0, 1);
    memo.insert(9, 2);

    assert_eq!(memo.try_get(&0), Some(&1));
    assert_eq!(memo.try_get(&9), Some(&2));
    assert_eq!(memo.try_get(&4), None);
    assert_eq!(memo.len(), 2);
}

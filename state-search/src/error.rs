//! Error types for the search library

use thiserror::Error;

/// Error type for memo table insertion
#[derive(Debug, Clone, Error)]
pub enum MemoError {
    /// A key was inserted twice with two different values.
    ///
    /// Two call sites disagreeing about the value of one state means two
    /// semantically different states compare equal, an equality/hash bug
    /// in the adapter's state type. The first value stays in the table.
    #[error("conflicting values for key {key}: kept {existing}, rejected {attempted}")]
    ValueConflict {
        /// Debug rendering of the offending key
        key: String,
        /// Debug rendering of the value already stored
        existing: String,
        /// Debug rendering of the value that was rejected
        attempted: String,
    },
}

/// Error type for search runs
#[derive(Debug, Clone, Error)]
pub enum SearchError {
    /// Cycle detection exhausted its step budget without finding a repeat
    /// or reaching the target step
    #[error("no repeat or target within {limit} steps; the process may be unbounded")]
    StepLimitExceeded {
        /// The step limit the run was configured with
        limit: u64,
    },
    /// A memo table rejected an insert.
    ///
    /// Produced through `?` by adapters that drive a
    /// [`MemoTable`](crate::MemoTable) directly; the engines themselves
    /// never construct it.
    #[error("memo error: {0}")]
    Memo(#[from] MemoError),
}

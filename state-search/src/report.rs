//! Search statistics and timed run reports.

use chrono::{DateTime, TimeDelta, Utc};

/// Counters recorded during one search run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States whose successors were generated
    pub expanded: usize,
    /// Successor edges produced by the transition function
    pub transitions: usize,
    /// Lookups answered from the memo / distance table
    pub memo_hits: usize,
    /// Lookups that fell through to a compute or an insert
    pub memo_misses: usize,
    /// Largest number of entries ever queued at once
    pub frontier_peak: usize,
}

/// Result from one search run, including timing information
#[derive(Debug, Clone)]
pub struct SearchReport<T> {
    /// The computed answer
    pub answer: T,
    /// Counters recorded during the run
    pub stats: SearchStats,
    /// When the run started (UTC)
    pub started: DateTime<Utc>,
    /// When the run completed (UTC)
    pub finished: DateTime<Utc>,
}

impl<T> SearchReport<T> {
    /// Get the run duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.finished - self.started
    }
}

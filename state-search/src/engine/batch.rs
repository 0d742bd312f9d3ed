//! Data-parallel helpers for running many independent searches.
//!
//! Parallelism in this library lives strictly *between* searches, never
//! inside one. Each run owns its memo table, distance map and frontier, so
//! the workers below share only the read-only problem: no locks, no
//! cross-contamination. Reports come back in input order.

use rayon::prelude::*;

use crate::engine::{DistanceSearch, DpSolver};
use crate::frontier::Frontier;
use crate::memo::MemoBackend;
use crate::problem::{CostToGo, SearchProblem};
use crate::report::SearchReport;

/// Runs one memoized DP solve per start state across the rayon pool.
///
/// Equivalent to calling [`DpSolver::run_with_backend`] for each start in
/// sequence, but spread over worker threads. Every solve gets its own
/// fresh memo table of type `B`.
///
/// # Example
///
/// ```rust
/// use state_search::{ClosureProblem, Combine, DpSolver, HashMapBackend, dp_batch};
///
/// // Count the ways down from each starting step
/// let staircase = ClosureProblem::new(
///     |n: &u32| match *n {
///         0 => vec![],
///         1 => vec![(0, 0u64)],
///         n => vec![(n - 1, 0), (n - 2, 0)],
///     },
///     |n: &u32| *n == 0,
/// )
/// .with_goal_value(1);
///
/// let solver = DpSolver::new(staircase, Combine::Sum);
/// let starts = [3, 4, 5];
/// let reports = dp_batch::<_, HashMapBackend<_, _>>(&solver, &starts);
///
/// let counts: Vec<_> = reports.iter().map(|r| r.answer).collect();
/// assert_eq!(counts, vec![Some(3), Some(5), Some(8)]);
/// ```
pub fn dp_batch<P, B>(
    solver: &DpSolver<P>,
    starts: &[P::State],
) -> Vec<SearchReport<Option<P::Cost>>>
where
    P: CostToGo + Sync,
    P::State: Sync,
    P::Cost: Send + Sync,
    B: MemoBackend<P::State, Option<P::Cost>>,
{
    starts
        .par_iter()
        .map(|start| solver.run_with_backend::<B>(start))
        .collect()
}

/// Runs one distance search per start state across the rayon pool.
///
/// Every run gets its own fresh frontier and distance table.
pub fn distance_batch<P, F>(
    search: &DistanceSearch<P, F>,
    starts: &[P::State],
) -> Vec<SearchReport<Option<P::Cost>>>
where
    P: SearchProblem + Sync,
    P::State: Sync,
    P::Cost: Send + Sync,
    F: Frontier<P::State, P::Cost> + Sync,
{
    starts.par_iter().map(|start| search.run(start)).collect()
}

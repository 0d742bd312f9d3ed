//! Frontier-driven distance search.

use std::collections::HashMap;
use std::marker::PhantomData;

use chrono::Utc;
use num_traits::{SaturatingAdd, Zero};
use tracing::{debug, instrument, trace};

use crate::frontier::{FifoFrontier, Frontier, FrontierEntry, PriorityFrontier};
use crate::problem::{SearchProblem, Transition};
use crate::report::{SearchReport, SearchStats};

/// Accumulates shortest distances from a start state by expanding a
/// frontier.
///
/// The frontier policy `F` dictates expansion order: FIFO makes the search
/// breadth-first (shortest paths on uniform-cost edges), cost order makes
/// it Dijkstra (non-negative edges). The [`Bfs`] and [`Dijkstra`] aliases
/// pick the policy by name and are the intended front door; the policy's
/// precondition on edge costs is the caller's obligation.
///
/// The search ends the first time a goal state is dequeued (the earliest
/// moment its distance is final under either policy's precondition) or
/// when the frontier is exhausted with the goal unreached, which reports
/// `None`.
///
/// # Example
///
/// ```rust
/// use state_search::{Dijkstra, SearchProblem, Transition};
///
/// /// Two routes from 0 to 3: direct but expensive, or via 1 and 2.
/// struct TollRoads;
///
/// impl Transition for TollRoads {
///     type State = u8;
///     type Cost = u32;
///
///     fn successors(&self, n: &u8) -> Vec<(u8, u32)> {
///         match *n {
///             0 => vec![(3, 10), (1, 2)],
///             1 => vec![(2, 2)],
///             2 => vec![(3, 2)],
///             _ => vec![],
///         }
///     }
/// }
///
/// impl SearchProblem for TollRoads {
///     fn is_goal(&self, n: &u8) -> bool {
///         *n == 3
///     }
/// }
///
/// let report = Dijkstra::new(TollRoads).run(&0);
/// assert_eq!(report.answer, Some(6));
/// ```
pub struct DistanceSearch<P, F>
where
    P: SearchProblem,
    F: Frontier<P::State, P::Cost>,
{
    problem: P,
    _phantom: PhantomData<F>,
}

/// Breadth-first distance search (uniform edge costs).
pub type Bfs<P> =
    DistanceSearch<P, FifoFrontier<<P as Transition>::State, <P as Transition>::Cost>>;

/// Cheapest-first distance search (non-negative edge costs).
pub type Dijkstra<P> =
    DistanceSearch<P, PriorityFrontier<<P as Transition>::State, <P as Transition>::Cost>>;

impl<P, F> DistanceSearch<P, F>
where
    P: SearchProblem,
    F: Frontier<P::State, P::Cost>,
{
    /// Creates a search over `problem`.
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            _phantom: PhantomData,
        }
    }

    /// Runs the search from `start`.
    ///
    /// Frontier and distance table are constructed fresh inside the call;
    /// nothing leaks between runs. The answer is the accumulated cost of
    /// the first goal state dequeued, or `None` when every reachable state
    /// was expanded without finding one.
    #[instrument(skip_all, name = "distance_search", level = "debug")]
    pub fn run(&self, start: &P::State) -> SearchReport<Option<P::Cost>> {
        let started = Utc::now();
        let mut stats = SearchStats::default();
        let mut frontier = F::default();
        let mut distance: HashMap<P::State, P::Cost> = HashMap::new();

        distance.insert(start.clone(), P::Cost::zero());
        frontier.push(FrontierEntry {
            state: start.clone(),
            cost: P::Cost::zero(),
        });
        stats.frontier_peak = 1;

        let mut answer = None;
        while let Some(FrontierEntry { state, cost }) = frontier.pop() {
            // Stale entry: a cheaper route to this state was found after
            // it was queued
            if distance.get(&state).is_some_and(|best| *best < cost) {
                continue;
            }
            if self.problem.is_goal(&state) {
                trace!(?state, ?cost, "goal dequeued");
                answer = Some(cost);
                break;
            }
            stats.expanded += 1;
            for (next, edge) in self.problem.successors(&state) {
                stats.transitions += 1;
                let candidate = cost.saturating_add(&edge);
                let improved = match distance.get(&next) {
                    Some(best) => {
                        stats.memo_hits += 1;
                        candidate < *best
                    }
                    None => {
                        stats.memo_misses += 1;
                        true
                    }
                };
                if improved {
                    distance.insert(next.clone(), candidate);
                    frontier.push(FrontierEntry {
                        state: next,
                        cost: candidate,
                    });
                    stats.frontier_peak = stats.frontier_peak.max(frontier.len());
                }
            }
        }

        debug!(
            reached = answer.is_some(),
            expanded = stats.expanded,
            settled = distance.len(),
            "distance search finished"
        );

        SearchReport {
            answer,
            stats,
            started,
            finished: Utc::now(),
        }
    }
}

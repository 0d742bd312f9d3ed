//! Top-down memoized DP solver.

use chrono::Utc;
use num_traits::SaturatingAdd;
use tracing::{debug, instrument};

use crate::memo::{HashMapBackend, MemoBackend, MemoTable};
use crate::policy::Combine;
use crate::problem::CostToGo;
use crate::report::{SearchReport, SearchStats};

/// Evaluates a [`CostToGo`] problem by structural recursion with
/// memoization.
///
/// Goal states yield their `goal_value`; every other state folds
/// `child value + edge cost` over its successors under the configured
/// [`Combine`] policy. Each state is evaluated exactly once per run and
/// memoized, so shared substructure (diamonds in the transition graph)
/// costs nothing extra.
///
/// Evaluation is `Option`-valued throughout: a state that is not a goal
/// and has no viable way forward evaluates to `None`, and a `None` child
/// never enters its parent's fold. "No path" stays explicit all the way
/// up, never a silent zero, and a legitimate zero-cost route still comes
/// back as `Some(0)`.
///
/// # Warning: No Cycle Detection
///
/// This solver does NOT detect cycles in the transition graph. If a state
/// can reach itself, evaluation recurses forever (stack overflow).
/// **Callers MUST ensure every transition strictly decreases some finite
/// measure**, such as time remaining or cells left in a grid. Cyclic
/// deterministic processes belong to
/// [`CycleDetector`](crate::CycleDetector) instead.
///
/// # Example
///
/// ```rust
/// use state_search::{Combine, CostToGo, DpSolver, SearchProblem, Transition};
///
/// /// Count the ways to descend a staircase taking 1 or 2 steps at a time.
/// struct Staircase;
///
/// impl Transition for Staircase {
///     type State = u32;
///     type Cost = u64;
///
///     fn successors(&self, n: &u32) -> Vec<(u32, u64)> {
///         match *n {
///             0 => vec![],
///             1 => vec![(0, 0)],
///             n => vec![(n - 1, 0), (n - 2, 0)],
///         }
///     }
/// }
///
/// impl SearchProblem for Staircase {
///     fn is_goal(&self, n: &u32) -> bool {
///         *n == 0
///     }
/// }
///
/// impl CostToGo for Staircase {
///     fn goal_value(&self, _n: &u32) -> u64 {
///         1
///     }
/// }
///
/// let solver = DpSolver::new(Staircase, Combine::Sum);
/// // 10 steps: fib(11) = 89 ways
/// assert_eq!(solver.run(&10).answer, Some(89));
/// ```
pub struct DpSolver<P>
where
    P: CostToGo,
{
    problem: P,
    policy: Combine,
}

impl<P> DpSolver<P>
where
    P: CostToGo,
{
    /// Creates a solver over `problem` folding children with `policy`.
    pub fn new(problem: P, policy: Combine) -> Self {
        Self { problem, policy }
    }

    /// Evaluates `start` over a hash-map memo table.
    ///
    /// A fresh table lives and dies inside the call; nothing leaks between
    /// runs. The answer is `None` when no goal is reachable from `start`.
    pub fn run(&self, start: &P::State) -> SearchReport<Option<P::Cost>> {
        self.run_with_backend::<HashMapBackend<P::State, Option<P::Cost>>>(start)
    }

    /// Evaluates `start` over a caller-chosen memo backend.
    ///
    /// The backend type selects the storage strategy
    /// ([`DenseBackend`](crate::DenseBackend) for dense integer states,
    /// [`NoMemoBackend`](crate::NoMemoBackend) as a no-caching baseline);
    /// the instance itself is constructed fresh inside the call.
    #[instrument(skip_all, name = "dp_solve", level = "debug")]
    pub fn run_with_backend<B>(&self, start: &P::State) -> SearchReport<Option<P::Cost>>
    where
        B: MemoBackend<P::State, Option<P::Cost>>,
    {
        let started = Utc::now();
        let mut memo: MemoTable<P::State, Option<P::Cost>, B> = MemoTable::new();
        let mut stats = SearchStats::default();

        let answer = self.evaluate(start, &mut memo, &mut stats);

        debug!(
            ?answer,
            expanded = stats.expanded,
            memoized = memo.len(),
            "dp solve finished"
        );

        SearchReport {
            answer,
            stats,
            started,
            finished: Utc::now(),
        }
    }

    fn evaluate<B>(
        &self,
        state: &P::State,
        memo: &mut MemoTable<P::State, Option<P::Cost>, B>,
        stats: &mut SearchStats,
    ) -> Option<P::Cost>
    where
        B: MemoBackend<P::State, Option<P::Cost>>,
    {
        // Fast path: already computed
        if let Some(value) = memo.try_get(state) {
            stats.memo_hits += 1;
            return *value;
        }
        stats.memo_misses += 1;

        let value = if self.problem.is_goal(state) {
            Some(self.problem.goal_value(state))
        } else {
            stats.expanded += 1;
            let mut acc = None;
            for (child, edge) in self.problem.successors(state) {
                stats.transitions += 1;
                // A dead subtree contributes nothing
                if let Some(child_value) = self.evaluate(&child, memo, stats) {
                    let candidate = child_value.saturating_add(&edge);
                    acc = Some(match acc {
                        Some(folded) => self.policy.fold(folded, candidate),
                        None => candidate,
                    });
                }
            }
            acc
        };

        memo.insert(state.clone(), value);
        value
    }
}

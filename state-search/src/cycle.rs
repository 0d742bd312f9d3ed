//! Cycle detection and extrapolation for deterministic processes.

use std::collections::HashMap;
use std::num::NonZeroU64;

use chrono::Utc;
use tracing::{debug, instrument};

use crate::error::SearchError;
use crate::problem::{Automaton, ClosureAutomaton, StateKey};
use crate::report::{SearchReport, SearchStats};

/// A detected recurrence in a simulated process.
///
/// The state stream enters a repeating tail after `offset` steps and
/// repeats with length `period` from there on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    /// Steps before the periodic tail begins
    pub offset: u64,
    /// Length of the repeating tail
    pub period: u64,
}

/// What a cycle run found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleOutcome<S> {
    /// The state after exactly the requested number of steps
    pub state: S,
    /// The recurrence used to skip ahead, when one surfaced before the
    /// target
    pub cycle: Option<Cycle>,
    /// Steps actually simulated; the rest were skipped modulo the period
    pub steps_simulated: u64,
}

/// Runs a deterministic [`Automaton`] forward and extrapolates across
/// detected cycles.
///
/// The detector simulates step by step, recording each state's first-seen
/// step index. When a state recurs at step `t` after first appearing at
/// step `f`, every later step is determined: the state at any target
/// `N >= f` is the recorded state at `f + (N - f) % (t - f)`. Huge targets
/// therefore cost only `offset + period` simulated steps and memory.
/// Targets reached before any repeat are answered directly from the
/// simulation.
///
/// The process must be a pure function of the state alone. A violated
/// precondition makes extrapolation silently wrong, so debug builds replay
/// one step at the detected repeat and assert it matches the recorded
/// history. A configurable step limit turns a never-repeating process into
/// a typed error instead of an unbounded loop.
///
/// # Example
///
/// ```rust
/// use state_search::CycleDetector;
///
/// // 0, 1, 2, 3, 4, 0, 1, ... repeats with period 5 from the start
/// let detector = CycleDetector::from_step(|n: &u64| (n + 1) % 5);
/// let outcome = detector.run(&0, 1_000_000_007).unwrap().answer;
///
/// assert_eq!(outcome.state, 1_000_000_007 % 5);
/// assert_eq!(outcome.steps_simulated, 5);
/// ```
pub struct CycleDetector<A>
where
    A: Automaton,
{
    process: A,
    step_limit: NonZeroU64,
}

impl<A> CycleDetector<A>
where
    A: Automaton,
{
    /// Default simulation bound: ten million steps.
    pub const DEFAULT_STEP_LIMIT: NonZeroU64 = match NonZeroU64::new(10_000_000) {
        Some(limit) => limit,
        None => unreachable!(),
    };

    /// Creates a detector over `process` with the default step limit.
    pub fn new(process: A) -> Self {
        Self {
            process,
            step_limit: Self::DEFAULT_STEP_LIMIT,
        }
    }

    /// Replaces the simulation bound.
    pub fn with_step_limit(mut self, step_limit: NonZeroU64) -> Self {
        self.step_limit = step_limit;
        self
    }

    /// Advances the process until `target` steps are accounted for.
    ///
    /// Simulation stops at the first recurring state; the remaining steps
    /// are skipped modulo the detected period. Errors with
    /// [`SearchError::StepLimitExceeded`] when neither a repeat nor the
    /// target shows up within the step limit.
    #[instrument(skip_all, name = "cycle_run", level = "debug")]
    pub fn run(
        &self,
        start: &A::State,
        target: u64,
    ) -> Result<SearchReport<CycleOutcome<A::State>>, SearchError> {
        let started = Utc::now();
        let mut stats = SearchStats::default();

        // history[i] is the state after i steps
        let mut history: Vec<A::State> = vec![start.clone()];
        let mut first_seen: HashMap<A::State, u64> = HashMap::new();
        first_seen.insert(start.clone(), 0);

        let outcome = loop {
            let steps_done = history.len() as u64 - 1;
            if steps_done == target {
                break CycleOutcome {
                    state: history[steps_done as usize].clone(),
                    cycle: None,
                    steps_simulated: steps_done,
                };
            }

            let step = steps_done + 1;
            if step > self.step_limit.get() {
                return Err(SearchError::StepLimitExceeded {
                    limit: self.step_limit.get(),
                });
            }

            let next = self.process.step(&history[steps_done as usize]);
            stats.transitions += 1;

            if let Some(&offset) = first_seen.get(&next) {
                let period = step - offset;

                // Determinism spot check: stepping the first occurrence
                // again must reproduce the recorded successor
                #[cfg(debug_assertions)]
                {
                    let replay = self.process.step(&history[offset as usize]);
                    let recorded = history.get(offset as usize + 1).unwrap_or(&next);
                    debug_assert!(
                        replay == *recorded,
                        "process is not deterministic: replaying step {offset} diverged"
                    );
                }

                debug!(offset, period, target, "recurrence found, extrapolating");
                let index = offset + (target - offset) % period;
                break CycleOutcome {
                    state: history[index as usize].clone(),
                    cycle: Some(Cycle { offset, period }),
                    steps_simulated: step,
                };
            }

            first_seen.insert(next.clone(), step);
            history.push(next);
        };

        stats.expanded = outcome.steps_simulated as usize;

        Ok(SearchReport {
            answer: outcome,
            stats,
            started,
            finished: Utc::now(),
        })
    }
}

impl<S, F> CycleDetector<ClosureAutomaton<S, F>>
where
    S: StateKey,
    F: Fn(&S) -> S,
{
    /// Creates a detector directly from a step closure.
    pub fn from_step(step: F) -> Self {
        Self::new(ClosureAutomaton::new(step))
    }
}

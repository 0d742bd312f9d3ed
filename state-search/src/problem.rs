//! Trait-based search problem definitions.

use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use num_traits::{SaturatingAdd, Zero};

/// Types usable as search states.
///
/// A state is an opaque, immutable value: structurally comparable, hashable,
/// and cheap to clone (a tuple of small integers, a bitmask, a short
/// string). Equal states must always produce identical transitions and
/// identical results; that is the precondition memoization rests on.
pub trait StateKey: Clone + Eq + Hash + Debug {}

// Blanket implementation: any structurally comparable, hashable value works
impl<T: Clone + Eq + Hash + Debug> StateKey for T {}

/// Scalar cost/value types the engines can fold.
///
/// `Zero` supplies the starting distance and the default goal value,
/// `SaturatingAdd` keeps accumulated costs from wrapping on overflow, and
/// `Ord` drives both the fold policies and the cost-ordered frontier.
pub trait Scalar: Copy + Ord + Zero + SaturatingAdd + Debug {}

// Blanket implementation over the num-traits bounds
impl<T: Copy + Ord + Zero + SaturatingAdd + Debug> Scalar for T {}

/// A transition relation over search states.
///
/// The implementing struct carries all read-only context (cost tables,
/// adjacency lists, grids) for the duration of a search; `successors` must
/// be pure with respect to that context.
///
/// # Example
///
/// ```rust
/// use state_search::Transition;
///
/// /// Counts down to zero, one or two at a time.
/// struct Countdown;
///
/// impl Transition for Countdown {
///     type State = u32;
///     type Cost = u32;
///
///     fn successors(&self, n: &u32) -> Vec<(u32, u32)> {
///         match *n {
///             0 => vec![],
///             1 => vec![(0, 1)],
///             n => vec![(n - 1, 1), (n - 2, 1)],
///         }
///     }
/// }
/// ```
pub trait Transition {
    /// Search state type
    type State: StateKey;
    /// Edge cost / result value type
    type Cost: Scalar;

    /// Returns every `(successor, edge cost)` reachable in one step.
    ///
    /// An empty vector marks a dead end; the engines supply the failure
    /// semantics for it.
    fn successors(&self, state: &Self::State) -> Vec<(Self::State, Self::Cost)>;
}

/// A transition relation with a goal predicate.
///
/// Enough for frontier-driven distance search: the engine stops the first
/// time a goal state is dequeued.
pub trait SearchProblem: Transition {
    /// Whether `state` is terminal.
    fn is_goal(&self, state: &Self::State) -> bool;
}

/// A search problem evaluated bottom-up as cost-to-go.
///
/// Enough for the top-down DP solver: goal states are worth `goal_value`,
/// everything else folds over its successors.
pub trait CostToGo: SearchProblem {
    /// The value of a goal state. Defaults to zero (no cost left to pay).
    ///
    /// Counting problems return one here, so each goal path contributes a
    /// single unit to a `Sum` fold.
    fn goal_value(&self, _state: &Self::State) -> Self::Cost {
        Self::Cost::zero()
    }
}

/// A deterministic process advanced one step at a time.
///
/// `step` must be a pure function of the state alone, with no hidden clocks
/// or randomness; otherwise cycle extrapolation silently reports wrong
/// answers.
pub trait Automaton {
    /// Process state type
    type State: StateKey;

    /// Computes the state one step ahead of `state`.
    fn step(&self, state: &Self::State) -> Self::State;
}

impl<T: Transition + ?Sized> Transition for &T {
    type State = T::State;
    type Cost = T::Cost;

    fn successors(&self, state: &Self::State) -> Vec<(Self::State, Self::Cost)> {
        (**self).successors(state)
    }
}

impl<T: SearchProblem + ?Sized> SearchProblem for &T {
    fn is_goal(&self, state: &Self::State) -> bool {
        (**self).is_goal(state)
    }
}

impl<T: CostToGo + ?Sized> CostToGo for &T {
    // Forwarded explicitly so custom goal values survive the reference
    fn goal_value(&self, state: &Self::State) -> Self::Cost {
        (**self).goal_value(state)
    }
}

impl<T: Automaton + ?Sized> Automaton for &T {
    type State = T::State;

    fn step(&self, state: &Self::State) -> Self::State {
        (**self).step(state)
    }
}

/// Wrapper to adapt closure functions to the search problem traits.
///
/// For quick prototyping; anything with real context is better off as a
/// struct implementing [`Transition`] directly.
///
/// # Example
///
/// ```rust
/// use state_search::{Bfs, ClosureProblem};
///
/// // March from 0 to 4 one unit at a time
/// let problem = ClosureProblem::new(
///     |n: &u32| if *n < 4 { vec![(n + 1, 1u32)] } else { vec![] },
///     |n: &u32| *n == 4,
/// );
///
/// let report = Bfs::new(problem).run(&0);
/// assert_eq!(report.answer, Some(4));
/// ```
pub struct ClosureProblem<S, C, Succ, Goal>
where
    Succ: Fn(&S) -> Vec<(S, C)>,
    Goal: Fn(&S) -> bool,
{
    succ_fn: Succ,
    goal_fn: Goal,
    goal_value: C,
    _phantom: PhantomData<S>,
}

impl<S, C, Succ, Goal> ClosureProblem<S, C, Succ, Goal>
where
    C: Scalar,
    Succ: Fn(&S) -> Vec<(S, C)>,
    Goal: Fn(&S) -> bool,
{
    /// Creates a problem from a successor function and a goal predicate.
    ///
    /// The goal value defaults to zero; see [`with_goal_value`](Self::with_goal_value).
    pub fn new(successors: Succ, is_goal: Goal) -> Self {
        Self {
            succ_fn: successors,
            goal_fn: is_goal,
            goal_value: C::zero(),
            _phantom: PhantomData,
        }
    }

    /// Sets the value reported at goal states (counting problems want one).
    pub fn with_goal_value(mut self, value: C) -> Self {
        self.goal_value = value;
        self
    }
}

impl<S, C, Succ, Goal> Transition for ClosureProblem<S, C, Succ, Goal>
where
    S: StateKey,
    C: Scalar,
    Succ: Fn(&S) -> Vec<(S, C)>,
    Goal: Fn(&S) -> bool,
{
    type State = S;
    type Cost = C;

    fn successors(&self, state: &S) -> Vec<(S, C)> {
        (self.succ_fn)(state)
    }
}

impl<S, C, Succ, Goal> SearchProblem for ClosureProblem<S, C, Succ, Goal>
where
    S: StateKey,
    C: Scalar,
    Succ: Fn(&S) -> Vec<(S, C)>,
    Goal: Fn(&S) -> bool,
{
    fn is_goal(&self, state: &S) -> bool {
        (self.goal_fn)(state)
    }
}

impl<S, C, Succ, Goal> CostToGo for ClosureProblem<S, C, Succ, Goal>
where
    S: StateKey,
    C: Scalar,
    Succ: Fn(&S) -> Vec<(S, C)>,
    Goal: Fn(&S) -> bool,
{
    fn goal_value(&self, _state: &S) -> C {
        self.goal_value
    }
}

/// Wrapper to adapt a step closure to the [`Automaton`] trait.
pub struct ClosureAutomaton<S, F>
where
    F: Fn(&S) -> S,
{
    step_fn: F,
    _phantom: PhantomData<S>,
}

impl<S, F> ClosureAutomaton<S, F>
where
    F: Fn(&S) -> S,
{
    /// Creates an automaton from a step function.
    pub fn new(step: F) -> Self {
        Self {
            step_fn: step,
            _phantom: PhantomData,
        }
    }
}

impl<S, F> Automaton for ClosureAutomaton<S, F>
where
    S: StateKey,
    F: Fn(&S) -> S,
{
    type State = S;

    fn step(&self, state: &S) -> S {
        (self.step_fn)(state)
    }
}

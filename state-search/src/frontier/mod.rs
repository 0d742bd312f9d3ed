//! Frontier policies: the order in which states get expanded.
//!
//! One trait, two interchangeable policies:
//!
//! - [`FifoFrontier`]: first-in-first-out, making the search breadth-first.
//!   First dequeue equals shortest distance only on uniform-cost edges.
//! - [`PriorityFrontier`]: cheapest accumulated cost first, making the
//!   search Dijkstra. Valid for non-negative edge costs.
//!
//! Picking a policy the edge costs do not satisfy (FIFO over weighted
//! edges, priority order with negative edges) is a contract violation the
//! engine does not detect at runtime.

mod fifo;
mod priority;

pub use fifo::FifoFrontier;
pub use priority::PriorityFrontier;

/// A queued state together with its accumulated cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry<S, C> {
    /// The state awaiting expansion
    pub state: S,
    /// Cost accumulated from the start state to `state`
    pub cost: C,
}

/// Expansion-order policy for distance searches.
///
/// The frontier exclusively owns entries once pushed; the engine pops and
/// discards. Engines construct a fresh frontier per run via `Default`.
pub trait Frontier<S, C>: Default {
    /// Hands `entry` to the policy.
    fn push(&mut self, entry: FrontierEntry<S, C>);

    /// Yields the next entry to expand, or `None` when exhausted.
    fn pop(&mut self) -> Option<FrontierEntry<S, C>>;

    /// Number of queued entries.
    fn len(&self) -> usize;

    /// Whether no entries are queued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Memoized State-Space Search
//!
//! A small reusable core for the search shapes that bounded puzzle domains
//! keep producing: shortest/longest path over an implicit graph, counting
//! terminal configurations by DP, and skipping a deterministic simulation
//! forward across a detected cycle.
//!
//! # Overview
//!
//! This library provides:
//! - Trait-based problem definitions ([`Transition`], [`SearchProblem`],
//!   [`CostToGo`], [`Automaton`]) plus closure adapters for prototyping
//! - A [`MemoTable`] with insert-once semantics over pluggable storage
//!   backends
//! - Two engines: [`DpSolver`] (top-down memoized recursion under a
//!   [`Combine`] policy) and [`DistanceSearch`] (frontier-driven BFS /
//!   Dijkstra via the [`Bfs`] and [`Dijkstra`] aliases)
//! - A [`CycleDetector`] that extrapolates a deterministic process to huge
//!   step counts once a state recurs
//! - Timed [`SearchReport`]s with expansion counters for every run
//!
//! # Quick Example
//!
//! ```rust
//! use state_search::{Bfs, SearchProblem, Transition};
//!
//! /// Walk a walled grid with four-directional unit moves.
//! struct Maze {
//!     walls: Vec<Vec<bool>>,
//!     goal: (usize, usize),
//! }
//!
//! impl Transition for Maze {
//!     type State = (usize, usize);
//!     type Cost = u32;
//!
//!     fn successors(&self, &(r, c): &Self::State) -> Vec<(Self::State, u32)> {
//!         [
//!             (r.wrapping_sub(1), c),
//!             (r + 1, c),
//!             (r, c.wrapping_sub(1)),
//!             (r, c + 1),
//!         ]
//!         .into_iter()
//!         .filter(|&(nr, nc)| {
//!             nr < self.walls.len() && nc < self.walls[0].len() && !self.walls[nr][nc]
//!         })
//!         .map(|cell| (cell, 1))
//!         .collect()
//!     }
//! }
//!
//! impl SearchProblem for Maze {
//!     fn is_goal(&self, state: &Self::State) -> bool {
//!         *state == self.goal
//!     }
//! }
//!
//! let maze = Maze {
//!     walls: vec![
//!         vec![false, false, false],
//!         vec![false, true, false],
//!         vec![false, false, false],
//!     ],
//!     goal: (2, 2),
//! };
//!
//! let report = Bfs::new(maze).run(&(0, 0));
//! assert_eq!(report.answer, Some(4));
//! ```
//!
//! # Key Concepts
//!
//! ## States are values
//!
//! A state is an immutable, hashable key (tuple of small integers,
//! bitmask, short string). Transitions return new states instead of
//! mutating, and equal states must behave identically forever; that
//! equality is the precondition every memo hit relies on.
//!
//! ## One search, one memo
//!
//! Engines construct their memo table, distance map and frontier inside
//! every run. Reusing a memo across logically distinct searches
//! cross-contaminates results; when two sub-searches genuinely share
//! structure, widen the state with an explicit discriminator and run them
//! as one search.
//!
//! ## Termination is the adapter's proof
//!
//! The DP solver carries no cycle guard: its transitions must strictly
//! decrease a finite measure. Cyclic deterministic processes go through
//! [`CycleDetector`], which is guarded and extrapolates instead of
//! recursing.
//!
//! ## Parallelism between searches, never inside one
//!
//! Every search is single-threaded and synchronous. The [`dp_batch`] and
//! [`distance_batch`] helpers fan independent runs over a rayon pool, one
//! private memo/frontier per run.

mod arena;
mod cycle;
mod engine;
mod error;
mod frontier;
mod memo;
mod policy;
mod problem;
mod report;

// Re-export public API
pub use arena::{Arena, NodeId};
pub use cycle::{Cycle, CycleDetector, CycleOutcome};
pub use engine::{Bfs, Dijkstra, DistanceSearch, DpSolver, distance_batch, dp_batch};
pub use error::{MemoError, SearchError};
pub use frontier::{FifoFrontier, Frontier, FrontierEntry, PriorityFrontier};
pub use memo::{DenseBackend, HashMapBackend, MemoBackend, MemoTable, NoMemoBackend};
pub use policy::Combine;
pub use problem::{
    Automaton, ClosureAutomaton, ClosureProblem, CostToGo, Scalar, SearchProblem, StateKey,
    Transition,
};
pub use report::{SearchReport, SearchStats};

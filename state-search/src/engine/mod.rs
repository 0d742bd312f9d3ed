//! Search engines: top-down memoized DP and frontier-driven distance
//! search, plus data-parallel helpers for running many independent
//! searches.

mod batch;
mod distance;
mod dp;

pub use batch::{distance_batch, dp_batch};
pub use distance::{Bfs, Dijkstra, DistanceSearch};
pub use dp::DpSolver;

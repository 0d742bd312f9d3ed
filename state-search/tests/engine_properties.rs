//! Property-based tests for the search engines.
//!
//! Each property pits an engine against a brute-force oracle on small
//! generated inputs: layered DAGs for the DP solver, random unit-cost
//! graphs for the frontier searches, and affine maps for the cycle
//! detector.

use std::collections::HashMap;

use proptest::prelude::*;
use state_search::{
    Bfs, ClosureProblem, Combine, CostToGo, CycleDetector, Dijkstra, DpSolver, FifoFrontier,
    Frontier, FrontierEntry, PriorityFrontier, SearchProblem, Transition,
};

/// Directed graph arranged in layers; edges only cross into the next
/// layer, so DP recursion always terminates.
#[derive(Debug, Clone)]
struct LayeredDag {
    /// `edges[layer][node]` lists `(node in layer + 1, cost)`
    edges: Vec<Vec<Vec<(u8, u64)>>>,
}

impl LayeredDag {
    /// Cheapest cost to the last layer by exhaustive path enumeration.
    fn cheapest_by_enumeration(&self, layer: usize, node: usize) -> Option<u64> {
        if layer == self.edges.len() {
            return Some(0);
        }
        self.edges[layer][node]
            .iter()
            .filter_map(|&(next, cost)| {
                self.cheapest_by_enumeration(layer + 1, next as usize)
                    .map(|rest| rest + cost)
            })
            .min()
    }

    /// Costliest route to the last layer by exhaustive path enumeration.
    fn costliest_by_enumeration(&self, layer: usize, node: usize) -> Option<u64> {
        if layer == self.edges.len() {
            return Some(0);
        }
        self.edges[layer][node]
            .iter()
            .filter_map(|&(next, cost)| {
                self.costliest_by_enumeration(layer + 1, next as usize)
                    .map(|rest| rest + cost)
            })
            .max()
    }

    /// Number of paths to the last layer by exhaustive enumeration.
    fn paths_by_enumeration(&self, layer: usize, node: usize) -> u64 {
        if layer == self.edges.len() {
            return 1;
        }
        self.edges[layer][node]
            .iter()
            .map(|&(next, _)| self.paths_by_enumeration(layer + 1, next as usize))
            .sum()
    }
}

impl Transition for LayeredDag {
    type State = (u8, u8);
    type Cost = u64;

    fn successors(&self, state: &(u8, u8)) -> Vec<((u8, u8), u64)> {
        let (layer, node) = *state;
        match self.edges.get(layer as usize) {
            Some(nodes) => nodes[node as usize]
                .iter()
                .map(|&(next, cost)| ((layer + 1, next), cost))
                .collect(),
            None => vec![],
        }
    }
}

impl SearchProblem for LayeredDag {
    fn is_goal(&self, state: &(u8, u8)) -> bool {
        state.0 as usize == self.edges.len()
    }
}

impl CostToGo for LayeredDag {}

/// One to three layers of three nodes each; every node fans out to zero,
/// one, two or three nodes of the following layer.
fn layered_dag() -> impl Strategy<Value = LayeredDag> {
    let edge = (0u8..3, 0u64..50);
    let node = prop::collection::vec(edge, 0..=3);
    let layer = prop::collection::vec(node, 3);
    prop::collection::vec(layer, 1..=3).prop_map(|edges| LayeredDag { edges })
}

/// Random directed graph on eight nodes with unit-cost edges.
fn unit_cost_edges() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0u8..8, 0u8..8), 0..24)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// **Property: memoized Min equals exhaustive enumeration.**
    /// *For any* layered DAG, the DP solver under `Combine::Min` reports
    /// the same cheapest start-to-goal cost as brute-force enumeration of
    /// every path, including `None` when no path exists.
    #[test]
    fn prop_dp_min_matches_exhaustive_enumeration(dag in layered_dag()) {
        let solver = DpSolver::new(&dag, Combine::Min);
        let report = solver.run(&(0, 0));

        prop_assert_eq!(report.answer, dag.cheapest_by_enumeration(0, 0));
    }

    /// **Property: memoized Max equals exhaustive enumeration.**
    /// *For any* layered DAG, the DP solver under `Combine::Max` reports
    /// the same costliest start-to-goal cost as brute-force enumeration of
    /// every path, including `None` when no path exists. Goal states are
    /// worth zero here, so the solver must keep "a route costing zero"
    /// distinct from "no route at all".
    #[test]
    fn prop_dp_max_matches_exhaustive_enumeration(dag in layered_dag()) {
        let solver = DpSolver::new(&dag, Combine::Max);
        let report = solver.run(&(0, 0));

        prop_assert_eq!(report.answer, dag.costliest_by_enumeration(0, 0));
    }

    /// **Property: memoized Sum counts every path once.**
    /// *For any* layered DAG, the DP solver under `Combine::Sum` with
    /// zero-cost edges and goal value one reports the exact number of
    /// start-to-goal paths (`None` standing for zero).
    #[test]
    fn prop_dp_sum_counts_paths_exactly(dag in layered_dag()) {
        let count = ClosureProblem::new(
            |state: &(u8, u8)| {
                dag.successors(state)
                    .into_iter()
                    .map(|(next, _)| (next, 0u64))
                    .collect()
            },
            |state: &(u8, u8)| dag.is_goal(state),
        )
        .with_goal_value(1);

        let report = DpSolver::new(count, Combine::Sum).run(&(0, 0));

        prop_assert_eq!(
            report.answer.unwrap_or(0),
            dag.paths_by_enumeration(0, 0)
        );
    }

    /// **Property: frontier policies agree on uniform costs.**
    /// *For any* directed graph whose edges all cost one, breadth-first
    /// and cheapest-first expansion find the same shortest distance (or
    /// both find none).
    #[test]
    fn prop_fifo_and_priority_agree_on_unit_costs(edges in unit_cost_edges()) {
        let mut adjacency: HashMap<u8, Vec<(u8, u32)>> = HashMap::new();
        for &(from, to) in &edges {
            adjacency.entry(from).or_default().push((to, 1));
        }

        let graph = ClosureProblem::new(
            move |n: &u8| adjacency.get(n).cloned().unwrap_or_default(),
            |n: &u8| *n == 7,
        );

        let by_fifo = Bfs::new(&graph).run(&0).answer;
        let by_priority = Dijkstra::new(&graph).run(&0).answer;

        prop_assert_eq!(by_fifo, by_priority);
    }

    /// **Property: cycle skipping is invisible in the answer.**
    /// *For any* affine map `x -> (a*x + b) mod m` and target, the detector
    /// reports the same state as stepping the map target times directly,
    /// while simulating no more steps than the map has states.
    #[test]
    fn prop_cycle_skip_matches_direct_simulation(
        a in 0u64..50,
        b in 0u64..50,
        m in 1u64..40,
        seed in 0u64..1000,
        target in 0u64..2000,
    ) {
        let start = seed % m;

        let mut expected = start;
        for _ in 0..target {
            expected = (a * expected + b) % m;
        }

        let report = CycleDetector::from_step(move |x: &u64| (a * x + b) % m)
            .run(&start, target)
            .unwrap();
        let outcome = report.answer;

        prop_assert_eq!(outcome.state, expected);
        // Only m distinct states exist, so a repeat surfaces within m steps
        prop_assert!(outcome.steps_simulated <= m);
        if let Some(cycle) = outcome.cycle {
            prop_assert!(cycle.period >= 1);
            prop_assert!(cycle.offset + cycle.period <= m);
        }
    }

    /// **Property: the cost-ordered frontier drains in nondecreasing
    /// order.** *For any* sequence of pushes, popping everything yields
    /// costs sorted ascending, with no entry lost.
    #[test]
    fn prop_priority_frontier_pops_nondecreasing_costs(
        costs in prop::collection::vec(0u32..1000, 0..50),
    ) {
        let mut frontier: PriorityFrontier<u32, u32> = PriorityFrontier::default();
        for (state, &cost) in costs.iter().enumerate() {
            frontier.push(FrontierEntry { state: state as u32, cost });
        }

        let mut popped = Vec::new();
        while let Some(entry) = frontier.pop() {
            popped.push(entry.cost);
        }

        prop_assert_eq!(popped.len(), costs.len());
        prop_assert!(popped.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    /// **Property: the FIFO frontier preserves push order.**
    #[test]
    fn prop_fifo_frontier_preserves_push_order(
        states in prop::collection::vec(0u32..1000, 0..50),
    ) {
        let mut frontier: FifoFrontier<u32, u32> = FifoFrontier::default();
        for &state in &states {
            frontier.push(FrontierEntry { state, cost: 0 });
        }

        let mut popped = Vec::new();
        while let Some(entry) = frontier.pop() {
            popped.push(entry.state);
        }

        prop_assert_eq!(popped, states);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use state_search::{HashMapBackend, dp_batch};

    /// Anchors the brute-force oracle itself on a hand-checked DAG.
    #[test]
    fn test_enumeration_oracle_on_a_known_dag() {
        let dag = LayeredDag {
            edges: vec![
                vec![vec![(0, 3), (1, 1)], vec![], vec![]],
                vec![vec![(0, 5)], vec![(0, 1), (2, 9)], vec![]],
            ],
        };

        // (0,0) -> (1,0) -> (2,0) costs 8; (0,0) -> (1,1) -> (2,0) costs 2;
        // (0,0) -> (1,1) -> (2,2) costs 10
        assert_eq!(dag.cheapest_by_enumeration(0, 0), Some(2));
        assert_eq!(dag.costliest_by_enumeration(0, 0), Some(10));
        assert_eq!(dag.paths_by_enumeration(0, 0), 3);
    }

    /// The solver agrees with both enumeration oracles on the hand-checked
    /// DAG, with goal states worth the default zero.
    #[test]
    fn test_dp_policies_on_the_anchored_dag() {
        let dag = LayeredDag {
            edges: vec![
                vec![vec![(0, 3), (1, 1)], vec![], vec![]],
                vec![vec![(0, 5)], vec![(0, 1), (2, 9)], vec![]],
            ],
        };

        assert_eq!(DpSolver::new(&dag, Combine::Min).run(&(0, 0)).answer, Some(2));
        assert_eq!(DpSolver::new(&dag, Combine::Max).run(&(0, 0)).answer, Some(10));
        // (0,1) has no way forward under either policy
        assert_eq!(DpSolver::new(&dag, Combine::Min).run(&(0, 1)).answer, None);
        assert_eq!(DpSolver::new(&dag, Combine::Max).run(&(0, 1)).answer, None);
    }

    /// A start whose only route to the goal costs nothing must come back
    /// as `Some(0)`, distinct from the `None` of a dead end.
    #[test]
    fn test_zero_cost_route_is_not_a_dead_end() {
        let dag = LayeredDag {
            edges: vec![vec![vec![(0, 0)], vec![], vec![]]],
        };

        for policy in [Combine::Min, Combine::Max, Combine::Sum] {
            assert_eq!(DpSolver::new(&dag, policy).run(&(0, 0)).answer, Some(0));
            assert_eq!(DpSolver::new(&dag, policy).run(&(0, 1)).answer, None);
        }
    }

    #[test]
    fn test_batched_dp_matches_sequential_runs() {
        let dag = LayeredDag {
            edges: vec![
                vec![vec![(0, 3), (1, 1)], vec![], vec![]],
                vec![vec![(0, 5)], vec![(0, 1), (2, 9)], vec![]],
            ],
        };
        let solver = DpSolver::new(&dag, Combine::Min);
        let starts = [(0u8, 0u8), (0, 1), (0, 2), (1, 0)];

        let batched = dp_batch::<_, HashMapBackend<_, _>>(&solver, &starts);

        assert_eq!(batched.len(), starts.len());
        for (start, report) in starts.iter().zip(&batched) {
            assert_eq!(report.answer, solver.run(start).answer);
        }
    }
}

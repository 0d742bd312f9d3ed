//! Cheapest-first frontier.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::{Frontier, FrontierEntry};

/// Expands the cheapest queued state first: Dijkstra order.
///
/// Ties on cost break toward the earlier insertion, so runs are
/// deterministic without requiring `Ord` on the state type. Valid as a
/// shortest-path order only for non-negative edge costs.
#[derive(Debug)]
pub struct PriorityFrontier<S, C>
where
    C: Ord,
{
    heap: BinaryHeap<HeapSlot<S, C>>,
    next_seq: u64,
}

#[derive(Debug)]
struct HeapSlot<S, C> {
    cost: C,
    seq: u64,
    state: S,
}

impl<S, C: Ord> PartialEq for HeapSlot<S, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl<S, C: Ord> Eq for HeapSlot<S, C> {}

impl<S, C: Ord> Ord for HeapSlot<S, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse so the cheapest, then oldest,
        // entry surfaces first
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<S, C: Ord> PartialOrd for HeapSlot<S, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, C: Ord> PriorityFrontier<S, C> {
    /// Creates a new empty PriorityFrontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<S, C: Ord> Default for PriorityFrontier<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, C: Ord> Frontier<S, C> for PriorityFrontier<S, C> {
    fn push(&mut self, entry: FrontierEntry<S, C>) {
        self.heap.push(HeapSlot {
            cost: entry.cost,
            seq: self.next_seq,
            state: entry.state,
        });
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<FrontierEntry<S, C>> {
        self.heap.pop().map(|slot| FrontierEntry {
            state: slot.state,
            cost: slot.cost,
        })
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_cheapest_first() {
        let mut frontier = PriorityFrontier::new();
        for (state, cost) in [(0u32, 9u32), (1, 3), (2, 7), (3, 1)] {
            frontier.push(FrontierEntry { state, cost });
        }

        let costs: Vec<u32> = std::iter::from_fn(|| frontier.pop())
            .map(|entry| entry.cost)
            .collect();
        assert_eq!(costs, vec![1, 3, 7, 9]);
    }

    #[test]
    fn equal_costs_pop_in_insertion_order() {
        let mut frontier = PriorityFrontier::new();
        for state in 0..5u32 {
            frontier.push(FrontierEntry { state, cost: 2u32 });
        }

        let order: Vec<u32> = std::iter::from_fn(|| frontier.pop())
            .map(|entry| entry.state)
            .collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }
}

//! First-in-first-out frontier.

use std::collections::VecDeque;

use super::{Frontier, FrontierEntry};

/// Expands states in insertion order: breadth-first search.
///
/// On uniform-cost edges the first dequeue of a state carries its shortest
/// distance.
#[derive(Debug)]
pub struct FifoFrontier<S, C> {
    queue: VecDeque<FrontierEntry<S, C>>,
}

impl<S, C> FifoFrontier<S, C> {
    /// Creates a new empty FifoFrontier.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<S, C> Default for FifoFrontier<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, C> Frontier<S, C> for FifoFrontier<S, C> {
    fn push(&mut self, entry: FrontierEntry<S, C>) {
        self.queue.push_back(entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry<S, C>> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_insertion_order() {
        let mut frontier = FifoFrontier::new();
        for n in 0..4u32 {
            frontier.push(FrontierEntry { state: n, cost: 1u32 });
        }

        let order: Vec<u32> = std::iter::from_fn(|| frontier.pop())
            .map(|entry| entry.state)
            .collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
        assert!(frontier.is_empty());
    }
}

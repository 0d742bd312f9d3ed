//! Flat arena for tree-shaped search context.
//!
//! Adapters whose states conceptually carry a growing path or tree (moves
//! taken so far, a parse tree under construction) should not put that
//! structure inside the state itself: it would make equality and hashing
//! expensive and defeat memoization. Instead the tree lives here, as
//! append-only nodes with parent back-references stored as indices, and
//! the state carries only a small copyable [`NodeId`], which is `Eq + Hash`
//! and works as (part of) a search state.

use std::iter;

/// Index of a node in an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The raw index, usable as a dense memo backend key.
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    parent: Option<NodeId>,
}

/// An append-only store of parent-linked nodes.
///
/// Nodes are never removed or reparented, so every `NodeId` handed out
/// stays valid for the arena's lifetime.
#[derive(Debug, Clone)]
pub struct Arena<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Arena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Adds a parentless node and returns its id.
    pub fn push_root(&mut self, value: T) -> NodeId {
        self.push_node(value, None)
    }

    /// Adds a child of `parent` and returns its id.
    pub fn push_child(&mut self, parent: NodeId, value: T) -> NodeId {
        self.push_node(value, Some(parent))
    }

    fn push_node(&mut self, value: T, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { value, parent });
        id
    }

    /// Returns the payload stored at `id`.
    pub fn get(&self, id: NodeId) -> &T {
        &self.nodes[id.0].value
    }

    /// Returns the parent of `id`, or `None` for a root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Walks ids from `id` back to its root, both inclusive.
    pub fn path_to_root(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        iter::successors(Some(id), move |current| self.parent(*current))
    }

    /// Number of nodes ever pushed.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

//! # Directed graph store
//!
//! [`DirectedGraph`] owns a list of [`Node`]s in insertion order and, for each
//! of them, the ordered list of nodes its outgoing edges point to. Edges are
//! usually inferred from the ordering of the wrapped values (see
//! [`DirectedGraph::new`]), but can also be inserted one by one with
//! [`DirectedGraph::add_edge`].
//!
//! Two invariants hold for every graph built through this API:
//! - the outgoing edge count of a node equals the length of its adjacency list,
//! - the incoming edge count of a node equals the number of adjacency slots,
//!   across the whole graph, that point to it.
//!
//! Duplicate edges between the same pair of nodes are allowed and counted
//! separately.

use std::ops::Index;

use ahash::RandomState;
use indexmap::IndexMap;
use thiserror::Error;

use crate::define_indexed_vec;

pub mod inference;
pub mod node;

pub use node::Node;

define_indexed_vec!(
    /// Handle to a node of a [`DirectedGraph`], handed out by
    /// [`DirectedGraph::add_node`].
    ///
    /// Handles are positions in the node list, so a handle is only meaningful
    /// for the graph that produced it.
    pub struct NodeIndex;

    /// A `Vec` indexed by [`NodeIndex`].
    pub struct NodeVec;
);

pub(crate) type AdjacencyMap = IndexMap<NodeIndex, Vec<NodeIndex>, RandomState>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node {0} is not registered in this graph")]
    InvalidHandle(NodeIndex),
}

#[derive(Clone, Debug)]
pub struct DirectedGraph<T> {
    pub(crate) nodes: NodeVec<Node<T>>,
    pub(crate) adjacency: AdjacencyMap,
}

impl<T> Default for DirectedGraph<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> DirectedGraph<T> {
    /// A graph without nodes, for building by hand with
    /// [`add_node`](Self::add_node) and [`add_edge`](Self::add_edge).
    pub fn empty() -> Self {
        DirectedGraph {
            nodes: NodeVec::new(),
            adjacency: AdjacencyMap::default(),
        }
    }

    /// Wraps `value` in a new node and registers it with an empty adjacency list.
    pub fn add_node(&mut self, value: T) -> NodeIndex {
        let index = self.nodes.push(Node::new(value));
        self.adjacency.insert(index, Vec::new());
        index
    }

    /// Inserts the edge `start -> dest`.
    ///
    /// Returns `false` and leaves the graph untouched if either handle is not
    /// registered. Calling it twice with the same handles creates two edges.
    pub fn add_edge(&mut self, start: NodeIndex, dest: NodeIndex) -> bool {
        self.try_add_edge(start, dest).is_ok()
    }

    /// Like [`add_edge`](Self::add_edge), but reports the offending handle.
    pub fn try_add_edge(&mut self, start: NodeIndex, dest: NodeIndex) -> Result<(), GraphError> {
        if !self.contains(dest) {
            return Err(GraphError::InvalidHandle(dest));
        }
        let Some(successors) = self.adjacency.get_mut(&start) else {
            return Err(GraphError::InvalidHandle(start));
        };
        successors.push(dest);
        self.nodes[start].increase_outgoing_edge_count();
        self.nodes[dest].increase_incoming_edge_count();
        Ok(())
    }

    pub fn contains(&self, node: NodeIndex) -> bool {
        self.nodes.contains_index(node) && self.adjacency.contains_key(&node)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// `true` if the node list and the adjacency map register the same nodes.
    pub fn is_consistent(&self) -> bool {
        self.adjacency.len() == self.nodes.len()
    }

    pub fn node(&self, node: NodeIndex) -> Option<&Node<T>> {
        self.nodes.get(node)
    }

    pub fn value(&self, node: NodeIndex) -> Option<&T> {
        self.node(node).map(Node::value)
    }

    /// The destinations of the outgoing edges of `node`, in insertion order.
    pub fn neighbors(&self, node: NodeIndex) -> Option<&[NodeIndex]> {
        self.adjacency.get(&node).map(Vec::as_slice)
    }

    pub fn iter_nodes(&self) -> impl Iterator<Item = (NodeIndex, &Node<T>)> {
        self.nodes.iter()
    }

    /// All edges as `(start, dest)` pairs, grouped by start node.
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(&start, successors)| successors.iter().map(move |&dest| (start, dest)))
    }
}

impl<T> Index<NodeIndex> for DirectedGraph<T> {
    type Output = T;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        self.nodes[index].value()
    }
}

#[cfg(test)]
mod test;

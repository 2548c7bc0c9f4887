//! Edge inference from the ordering of the wrapped values.
//!
//! Every ordered pair `(key, candidate)` of distinct nodes is compared once;
//! when `key` compares as [`Ordering::Less`] than `candidate` the edge
//! `key -> candidate` is inserted. Pairs comparing equal, or incomparable under
//! a partial order, get no edge.
//!
//! The comparator is not checked for transitivity or antisymmetry. A
//! comparator that claims both `a < b` and `b < a` legally yields the cycle
//! `a -> b -> a`, which [`topological_sort`](DirectedGraph::topological_sort)
//! then reports.

use std::cmp::Ordering;

use itertools::Itertools;

use super::{DirectedGraph, NodeIndex};

impl<T: Ord> DirectedGraph<T> {
    /// Builds a graph with one node per value, in input order, and an edge from
    /// every value to every strictly greater one.
    ///
    /// ```
    /// # use ordgraph::directed::DirectedGraph;
    /// let graph = DirectedGraph::new([3, 1, 2]);
    /// assert_eq!(graph.edge_count(), 3);
    /// assert_eq!(graph.topological_sort().unwrap(), vec![1, 2, 3]);
    /// ```
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        Self::with_comparator(values, T::cmp)
    }
}

impl<T: PartialOrd> DirectedGraph<T> {
    /// Like [`new`](DirectedGraph::new), but incomparable pairs get no edge.
    pub fn from_partial_order(values: impl IntoIterator<Item = T>) -> Self {
        Self::with_partial_comparator(values, T::partial_cmp)
    }
}

impl<T> DirectedGraph<T> {
    /// Builds a graph with one node per value and an edge `a -> b` for every
    /// pair where `compare(a, b)` is [`Ordering::Less`].
    ///
    /// ```
    /// # use ordgraph::directed::DirectedGraph;
    /// // Descending: every value points at every smaller one.
    /// let graph = DirectedGraph::with_comparator([3, 1, 2], |a, b| b.cmp(a));
    /// assert_eq!(graph.topological_sort().unwrap(), vec![3, 2, 1]);
    /// ```
    pub fn with_comparator(
        values: impl IntoIterator<Item = T>,
        mut compare: impl FnMut(&T, &T) -> Ordering,
    ) -> Self {
        Self::with_partial_comparator(values, |a, b| Some(compare(a, b)))
    }

    /// Builds a graph from a comparator that may declare pairs incomparable
    /// by returning `None`.
    pub fn with_partial_comparator(
        values: impl IntoIterator<Item = T>,
        compare: impl FnMut(&T, &T) -> Option<Ordering>,
    ) -> Self {
        let mut graph = Self::empty();
        for value in values {
            graph.add_node(value);
        }
        if graph.is_empty() {
            return graph;
        }

        let inferred = graph.infer_edges(compare);
        tracing::debug!(
            nodes = graph.len(),
            edges = inferred,
            "built graph from ordered values"
        );
        graph
    }

    /// Inserts the inferred edges and returns how many were added.
    fn infer_edges(&mut self, mut compare: impl FnMut(&T, &T) -> Option<Ordering>) -> usize {
        let pending: Vec<(NodeIndex, NodeIndex)> = self
            .adjacency
            .keys()
            .copied()
            .cartesian_product(self.nodes.iter().map(|(index, _)| index))
            .filter(|(key, candidate)| key != candidate)
            .filter(|&(key, candidate)| {
                compare(self.nodes[key].value(), self.nodes[candidate].value())
                    == Some(Ordering::Less)
            })
            .collect();

        let mut inserted = 0;
        for (key, candidate) in pending {
            if self.add_edge(key, candidate) {
                tracing::trace!(%key, %candidate, "inferred edge");
                inserted += 1;
            }
        }
        inserted
    }
}

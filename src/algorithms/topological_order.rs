use std::collections::VecDeque;

use thiserror::Error;

use crate::directed::{AdjacencyMap, DirectedGraph, NodeIndex, NodeVec};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopoError {
    #[error("Cycle detected: {emitted} nodes ordered out of {total} total nodes. Remaining nodes with non-zero in-degrees: {remaining:?}")]
    CycleDetected {
        emitted: usize,
        total: usize,
        remaining: Vec<(NodeIndex, usize)>,
    },
}

impl<T> DirectedGraph<T> {
    /// Orders the nodes so that every edge points from an earlier node to a
    /// later one, using a variant of Kahn's algorithm.
    ///
    /// Nodes without any edge come first, in insertion order. Among the
    /// remaining nodes, those that become free at the same time are emitted
    /// in insertion order.
    ///
    /// The graph itself is left untouched: in-degrees are copied before the
    /// sort starts, so sorting the same graph twice yields the same order.
    ///
    /// An empty graph, or one whose node list and adjacency map disagree,
    /// yields an empty order.
    pub fn topological_order(&self) -> Result<Vec<NodeIndex>, TopoError> {
        if self.is_empty() || !self.is_consistent() {
            tracing::debug!(
                nodes = self.nodes.len(),
                adjacency = self.adjacency.len(),
                "empty or inconsistent graph, nothing to sort"
            );
            return Ok(Vec::new());
        }

        let mut indeg: NodeVec<usize> = self
            .nodes
            .iter()
            .map(|(_, node)| node.incoming_edge_count())
            .collect();
        let mut order = Vec::with_capacity(self.nodes.len());

        let mut working = self.adjacency.clone();
        working.retain(|&index, _| {
            if self.nodes[index].has_no_edges() {
                order.push(index);
                false
            } else {
                true
            }
        });

        let mut q = VecDeque::new();
        let mut fuel = working.len();
        while fuel > 0 && !(working.is_empty() && q.is_empty()) {
            working.retain(|&index, _| {
                if indeg[index] == 0 {
                    q.push_back(index);
                    false
                } else {
                    true
                }
            });

            let Some(v) = q.pop_front() else {
                return Err(self.cycle_error(order.len(), &working, &indeg));
            };

            tracing::trace!(node = %v, "emitted");
            order.push(v);
            for &u in &self.adjacency[&v] {
                indeg[u] = indeg[u].saturating_sub(1);
            }
            fuel -= 1;
        }

        if !working.is_empty() || !q.is_empty() {
            return Err(self.cycle_error(order.len(), &working, &indeg));
        }
        Ok(order)
    }

    /// The wrapped values in topological order, see
    /// [`topological_order`](Self::topological_order).
    pub fn topological_sort(&self) -> Result<Vec<T>, TopoError>
    where
        T: Clone,
    {
        Ok(self
            .topological_order()?
            .into_iter()
            .map(|v| self[v].clone())
            .collect())
    }

    /// Consuming variant of [`topological_sort`](Self::topological_sort) that
    /// moves the values out instead of cloning them.
    pub fn into_topological_sort(self) -> Result<Vec<T>, TopoError> {
        let order = self.topological_order()?;
        let mut values: NodeVec<Option<T>> = self
            .nodes
            .into_iter()
            .map(|(_, node)| Some(node.into_value()))
            .collect();
        Ok(order
            .into_iter()
            .filter_map(|v| values[v].take())
            .collect())
    }

    fn cycle_error(
        &self,
        emitted: usize,
        working: &AdjacencyMap,
        indeg: &NodeVec<usize>,
    ) -> TopoError {
        let remaining: Vec<(NodeIndex, usize)> =
            working.keys().map(|&node| (node, indeg[node])).collect();

        tracing::debug!(
            emitted,
            total = self.nodes.len(),
            remaining = remaining.len(),
            "cycle detected"
        );
        TopoError::CycleDetected {
            emitted,
            total: self.nodes.len(),
            remaining,
        }
    }
}

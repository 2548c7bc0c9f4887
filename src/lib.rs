//! # Ordgraph
//!
//! Ordgraph builds a directed graph over a collection of ordered values,
//! inferring the edges from pairwise comparison instead of asking the caller
//! to declare them, and orders the graph topologically.
//!
//! ```
//! use ordgraph::{DirectedGraph, TopoError};
//!
//! let graph = DirectedGraph::new(["pear", "apple", "fig"]);
//! assert_eq!(graph.topological_sort(), Ok(vec!["apple", "fig", "pear"]));
//!
//! let mut cyclic = DirectedGraph::empty();
//! let a = cyclic.add_node('a');
//! let b = cyclic.add_node('b');
//! cyclic.add_edge(a, b);
//! cyclic.add_edge(b, a);
//! assert!(matches!(
//!     cyclic.topological_sort(),
//!     Err(TopoError::CycleDetected { .. })
//! ));
//! ```
//!
//! Edges are only as meaningful as the comparator that produced them: a
//! comparator that is not transitive or not antisymmetric can produce cycles,
//! which the sort reports as [`TopoError::CycleDetected`].

pub mod algorithms;
pub mod directed;
pub mod typed_vec;

#[cfg(test)]
mod test_graphs;

pub use algorithms::topological_order::TopoError;
pub use directed::{DirectedGraph, GraphError, Node, NodeIndex};

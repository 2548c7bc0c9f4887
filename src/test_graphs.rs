use tracing_subscriber::EnvFilter;

use crate::directed::{DirectedGraph, NodeIndex};

/// Installs a test-friendly subscriber once; `RUST_LOG` picks the verbosity.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Hand-built graphs whose edges do not come from a comparator.
pub enum TestGraph {
    /// `0 -> 1 -> .. -> n-1`
    Chain(usize),
    /// `0 -> 1 -> .. -> n-1 -> 0`
    Cycle(usize),
    /// `0 -> {1, 2} -> 3`
    Diamond,
    /// A diamond followed by a two-node cycle hanging off its sink.
    DiamondWithCycle,
    /// `n` nodes and no edges.
    Isolated(usize),
}

impl TestGraph {
    pub fn build(&self) -> (DirectedGraph<usize>, Vec<NodeIndex>) {
        let mut graph = DirectedGraph::empty();
        let edges: Vec<(usize, usize)> = match *self {
            TestGraph::Chain(n) => (1..n).map(|i| (i - 1, i)).collect(),
            TestGraph::Cycle(n) => (0..n).map(|i| (i, (i + 1) % n)).collect(),
            TestGraph::Diamond => vec![(0, 1), (0, 2), (1, 3), (2, 3)],
            TestGraph::DiamondWithCycle => {
                vec![(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (4, 5), (5, 4)]
            }
            TestGraph::Isolated(_) => Vec::new(),
        };
        let n = match *self {
            TestGraph::Chain(n) | TestGraph::Cycle(n) | TestGraph::Isolated(n) => n,
            TestGraph::Diamond => 4,
            TestGraph::DiamondWithCycle => 6,
        };

        let nodes: Vec<NodeIndex> = (0..n).map(|i| graph.add_node(i)).collect();
        for (a, b) in edges {
            assert!(graph.add_edge(nodes[a], nodes[b]));
        }
        (graph, nodes)
    }
}

/// Panics unless `order` is a permutation of the graph's nodes that respects
/// every edge.
pub fn assert_respects_edges<T>(graph: &DirectedGraph<T>, order: &[NodeIndex]) {
    let mut position = vec![None; graph.len()];
    for (i, node) in order.iter().enumerate() {
        assert!(position[node.0].is_none(), "{node} emitted twice");
        position[node.0] = Some(i);
    }
    assert!(
        position.iter().all(Option::is_some),
        "not every node was emitted"
    );

    for (start, dest) in graph.edges() {
        assert!(
            position[start.0] < position[dest.0],
            "edge {start} -> {dest} is violated"
        );
    }
}

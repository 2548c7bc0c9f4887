use super::*;
use crate::test_graphs::TestGraph;

#[test]
fn add_node_registers_in_list_and_map() {
    let mut graph = DirectedGraph::empty();
    let a = graph.add_node("a");
    let b = graph.add_node("a");

    assert_ne!(a, b);
    assert_eq!(graph.len(), 2);
    assert!(graph.is_consistent());
    assert_eq!(graph.neighbors(a), Some(&[][..]));
    assert!(graph.node(b).unwrap().has_no_edges());
    assert_eq!(graph[a], graph[b]);
}

#[test]
fn add_edge_updates_both_counters() {
    let mut graph = DirectedGraph::empty();
    let a = graph.add_node(1);
    let b = graph.add_node(2);

    assert!(graph.add_edge(a, b));

    assert_eq!(graph.node(a).unwrap().outgoing_edge_count(), 1);
    assert_eq!(graph.node(a).unwrap().incoming_edge_count(), 0);
    assert_eq!(graph.node(b).unwrap().incoming_edge_count(), 1);
    assert_eq!(graph.node(b).unwrap().outgoing_edge_count(), 0);
    assert_eq!(graph.neighbors(a).unwrap(), &[b]);
}

#[test]
fn duplicate_edges_are_counted_twice() {
    let mut graph = DirectedGraph::empty();
    let a = graph.add_node(1);
    let b = graph.add_node(2);

    assert!(graph.add_edge(a, b));
    assert!(graph.add_edge(a, b));

    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.neighbors(a).unwrap(), &[b, b]);
    assert_eq!(graph.node(a).unwrap().outgoing_edge_count(), 2);
    assert_eq!(graph.node(b).unwrap().incoming_edge_count(), 2);
}

#[test]
fn invalid_handles_leave_graph_unchanged() {
    let (mut graph, nodes) = TestGraph::Chain(3).build();
    let before = graph.clone();
    let unknown = NodeIndex(17);
    let other = NodeIndex(3);

    assert!(!graph.add_edge(nodes[0], unknown));
    assert!(!graph.add_edge(unknown, nodes[0]));
    assert!(!graph.add_edge(unknown, other));

    assert_eq!(
        graph.try_add_edge(nodes[1], unknown),
        Err(GraphError::InvalidHandle(unknown))
    );
    assert_eq!(
        graph.try_add_edge(other, nodes[1]),
        Err(GraphError::InvalidHandle(other))
    );

    assert_eq!(graph.edge_count(), before.edge_count());
    assert_eq!(graph.edges().collect::<Vec<_>>(), before.edges().collect::<Vec<_>>());
    for (index, node) in graph.iter_nodes() {
        assert_eq!(Some(node), before.node(index));
    }
}

#[test]
fn edges_are_listed_in_insertion_order() {
    let (graph, n) = TestGraph::Diamond.build();

    similar_asserts::assert_eq!(
        graph.edges().collect::<Vec<_>>(),
        vec![(n[0], n[1]), (n[0], n[2]), (n[1], n[3]), (n[2], n[3])]
    );
}

#[test]
fn lookups_outside_the_graph() {
    let graph = DirectedGraph::<u8>::default();

    assert!(graph.is_empty());
    assert!(!graph.contains(NodeIndex(0)));
    assert_eq!(graph.node(NodeIndex(0)), None);
    assert_eq!(graph.value(NodeIndex(0)), None);
    assert_eq!(graph.neighbors(NodeIndex(0)), None);
}

#[test]
fn invalid_handle_message() {
    let err = GraphError::InvalidHandle(NodeIndex(4));
    assert_eq!(err.to_string(), "Node 4 is not registered in this graph");
}

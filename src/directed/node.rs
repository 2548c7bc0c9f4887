/// A vertex of a [`DirectedGraph`](super::DirectedGraph).
///
/// Wraps one caller value together with the number of edges that start and
/// end at it. Two nodes wrapping equal values are still distinct nodes: a node
/// is identified by its [`NodeIndex`](super::NodeIndex), never by its value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    incoming_edge_count: usize,
    outgoing_edge_count: usize,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Node {
            value,
            incoming_edge_count: 0,
            outgoing_edge_count: 0,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn incoming_edge_count(&self) -> usize {
        self.incoming_edge_count
    }

    pub fn outgoing_edge_count(&self) -> usize {
        self.outgoing_edge_count
    }

    /// `true` if no edge starts or ends at this node.
    pub fn has_no_edges(&self) -> bool {
        self.incoming_edge_count == 0 && self.outgoing_edge_count == 0
    }

    pub(crate) fn increase_incoming_edge_count(&mut self) {
        self.incoming_edge_count += 1;
    }

    pub(crate) fn increase_outgoing_edge_count(&mut self) {
        self.outgoing_edge_count += 1;
    }
}

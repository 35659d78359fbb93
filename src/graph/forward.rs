//! Successor-only nodes.
//!
//! [`ForwardNode`] is the cheapest representation: it stores outgoing edges
//! only, with the label embedded by value. Nothing tracks incoming edges, so
//! finding the predecessors of a forward node means scanning every node of the
//! graph; the traversal contract does not offer it.

use crate::graph::{
    edge::{erase, record_at, EdgeList},
    generic::sealed::LinkedNode,
    Direction, Edge, EdgeRef, GenericGraph, GraphNode, LabeledGraph, NodeId, NodeKind, NodeLink,
    SuccessorEdges, Successors,
};

/// A node that knows its successors only.
#[derive(Debug, Clone)]
pub struct ForwardNode<T, L = ()> {
    data: T,
    link: Option<NodeLink>,
    successors: EdgeList<L>,
}

impl<T, L> ForwardNode<T, L> {
    /// Creates an unlinked node without edges, ready for
    /// [`GenericGraph::insert_node`].
    pub fn new(data: T) -> Self {
        ForwardNode {
            data,
            link: None,
            successors: EdgeList::new(),
        }
    }

    fn handle(&self) -> NodeId {
        self.link.map_or(NodeId::UNLINKED, |link| link.node)
    }

    /// Iterates successor handles in insertion order.
    pub fn successors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.successors.iter().map(|edge| edge.neighbor)
    }

    /// Iterates outgoing edges in insertion order.
    pub fn successor_edges(&self) -> impl Iterator<Item = EdgeRef<'_, L>> {
        self.successors.iter().map(Edge::as_ref)
    }

    /// Iterates outgoing edges with mutable labels.
    pub fn successor_edges_mut(&mut self) -> impl Iterator<Item = (NodeId, &mut L)> {
        self.successors
            .iter_mut()
            .map(|edge| (edge.neighbor, &mut edge.label))
    }

    /// Returns the outgoing edge at `position`.
    ///
    /// # Panics
    ///
    /// Aborts if `position` is out of range.
    pub fn successor(&self, position: usize) -> EdgeRef<'_, L> {
        record_at(&self.successors, self.handle(), Direction::Successor, position).as_ref()
    }

    /// Returns `true` if the node has at least one successor.
    pub fn has_successors(&self) -> bool {
        !self.successors.is_empty()
    }

    /// Number of outgoing edges.
    pub fn successor_count(&self) -> usize {
        self.successors.len()
    }

    /// Erases the outgoing edge at `position`, keeping the order of the rest.
    ///
    /// Returns the position to continue iterating from.
    ///
    /// # Panics
    ///
    /// Aborts if `position` is out of range.
    pub fn remove_successor(&mut self, position: usize) -> usize {
        let node = self.handle();
        erase(&mut self.successors, node, Direction::Successor, position)
    }

    /// Keeps only the outgoing edges for which `keep` returns `true`.
    pub fn retain_successors<F>(&mut self, mut keep: F)
    where
        F: FnMut(EdgeRef<'_, L>) -> bool,
    {
        self.successors.retain(|edge| keep(edge.as_ref()));
    }
}

impl<T, L> LinkedNode for ForwardNode<T, L> {
    type Labels = ();

    fn set_link(&mut self, link: Option<NodeLink>) {
        self.link = link;
    }
}

impl<T, L> GraphNode for ForwardNode<T, L> {
    type Data = T;
    type Label = L;
    const KIND: NodeKind = NodeKind::Forward;

    fn from_data(data: T) -> Self {
        Self::new(data)
    }

    fn data(&self) -> &T {
        &self.data
    }

    fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    fn link(&self) -> Option<NodeLink> {
        self.link
    }

    fn edge_records(&self) -> usize {
        self.successors.len()
    }
}

impl<T, L> GenericGraph<ForwardNode<T, L>> {
    /// Adds an edge `from -> to` carrying the default label.
    ///
    /// Duplicate edges are allowed.
    ///
    /// # Panics
    ///
    /// Aborts if either node is not in the graph.
    pub fn add_successor(&mut self, from: NodeId, to: NodeId)
    where
        L: Default,
    {
        self.add_labeled_successor(from, to, L::default());
    }

    /// Adds an edge `from -> to` carrying `label`.
    ///
    /// # Panics
    ///
    /// Aborts if either node is not in the graph.
    pub fn add_labeled_successor(&mut self, from: NodeId, to: NodeId, label: L) {
        graph_assert!(self.has_node(to), crate::Error::InvalidNode(to));
        self.get_mut_or_abort(from)
            .successors
            .push(Edge::new(to, label));
        trace_mutation!(self, from = %from, to = %to, "successor added");
    }
}

impl<T, L> Successors for GenericGraph<ForwardNode<T, L>> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.get_or_abort(node).successors()
    }
}

impl<T, L> LabeledGraph for GenericGraph<ForwardNode<T, L>> {
    type Label = L;
}

impl<T, L> SuccessorEdges for GenericGraph<ForwardNode<T, L>> {
    fn successor_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeRef<'_, L>> {
        self.get_or_abort(node).successor_edges()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBase;

    type Graph = GenericGraph<ForwardNode<char, &'static str>>;

    fn fan_out() -> (Graph, NodeId, NodeId, NodeId) {
        let mut graph = Graph::new();
        let a = graph.add_node('A');
        let b = graph.add_node('B');
        let c = graph.add_node('C');
        graph.add_labeled_successor(a, b, "ab");
        graph.add_labeled_successor(a, c, "ac");
        (graph, a, b, c)
    }

    #[test]
    fn test_successors_in_insertion_order() {
        let (graph, a, b, c) = fan_out();
        assert_eq!(graph[a].successors().collect::<Vec<_>>(), vec![b, c]);
        assert_eq!(graph[a].successor_count(), 2);
        assert!(graph[a].has_successors());
        assert!(!graph[b].has_successors());
        assert_eq!(graph[a].successor(1).neighbor, c);
        assert_eq!(*graph[a].successor(1).label, "ac");
    }

    #[test]
    fn test_duplicate_edges_allowed() {
        let (mut graph, a, b, _) = fan_out();
        graph.add_labeled_successor(a, b, "ab2");
        let to_b = graph[a].successors().filter(|&n| n == b).count();
        assert_eq!(to_b, 2);
    }

    #[test]
    fn test_remove_successor_preserves_order() {
        let (mut graph, a, b, c) = fan_out();
        let d = graph.add_node('D');
        graph.add_labeled_successor(a, d, "ad");

        let next = graph[a].remove_successor(0);
        assert_eq!(next, 0);
        assert_eq!(graph[a].successors().collect::<Vec<_>>(), vec![c, d]);
        assert!(!graph[a].successors().any(|n| n == b));
    }

    #[test]
    fn test_remove_successor_leaves_exactly_c() {
        let (mut graph, a, _, c) = fan_out();
        graph[a].remove_successor(0);
        assert_eq!(graph[a].successors().collect::<Vec<_>>(), vec![c]);
    }

    #[test]
    fn test_remove_while_iterating_by_position() {
        let (mut graph, a, _, c) = fan_out();
        graph.add_labeled_successor(a, c, "ac2");

        let mut position = 0;
        while position < graph[a].successor_count() {
            if graph[a].successor(position).neighbor == c {
                position = graph[a].remove_successor(position);
            } else {
                position += 1;
            }
        }
        assert_eq!(graph[a].successor_count(), 1);
    }

    #[test]
    fn test_retain_successors() {
        let (mut graph, a, b, _) = fan_out();
        graph[a].retain_successors(|edge| *edge.label == "ab");
        assert_eq!(graph[a].successors().collect::<Vec<_>>(), vec![b]);
    }

    #[test]
    fn test_successor_edges_mut() {
        let (mut graph, a, _, c) = fan_out();
        for (neighbor, label) in graph[a].successor_edges_mut() {
            if neighbor == c {
                *label = "patched";
            }
        }
        let labels: Vec<&str> = graph.successor_edges(a).map(|e| *e.label).collect();
        assert_eq!(labels, vec!["ab", "patched"]);
    }

    #[test]
    fn test_default_label() {
        let mut graph: GenericGraph<ForwardNode<(), u8>> = GenericGraph::new();
        let a = graph.add_node(());
        graph.add_successor(a, a);
        assert_eq!(*graph[a].successor(0).label, 0);
        assert_eq!(graph.successors(a).collect::<Vec<_>>(), vec![a]);
    }

    #[test]
    fn test_remove_node_leaves_dangling_successor() {
        let (mut graph, a, b, c) = fan_out();
        graph.remove_node(b);

        // the record on A still names B
        assert_eq!(graph[a].successors().collect::<Vec<_>>(), vec![b, c]);
        assert!(!graph.contains_node(b));
    }

    #[test]
    #[should_panic(expected = "does not exist in this graph")]
    fn test_add_successor_to_unknown_node() {
        let (mut graph, a, _, _) = fan_out();
        graph.add_labeled_successor(a, NodeId::new(99), "x");
    }

    #[test]
    #[should_panic(expected = "successor position 2 is out of range for n0 with 2 edges")]
    fn test_remove_successor_out_of_range() {
        let (mut graph, a, _, _) = fan_out();
        graph[a].remove_successor(2);
    }

    #[test]
    #[should_panic(expected = "out of range for <unlinked>")]
    fn test_unlinked_node_position() {
        let node: ForwardNode<(), ()> = ForwardNode::new(());
        node.successor(0);
    }
}

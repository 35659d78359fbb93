//! Nodes that track predecessors with label copies.
//!
//! Adding an edge to a [`BidirectionalNode`] graph appends a successor record
//! to the source and a predecessor record to the target, each holding its own
//! copy of the label. The copies are independent afterwards: updating one does
//! not update the other.
//!
//! Removal is one-sided. [`BidirectionalNode::remove_successor`] and
//! [`BidirectionalNode::remove_predecessor`] erase a record on the node they are
//! called on and leave the mirrored record on the neighbor in place. Callers
//! that need both halves gone remove both, or use
//! [`MutableEdgeNode`](crate::graph::MutableEdgeNode) instead.

use crate::{
    graph::{
        edge::{erase, record_at, EdgeList},
        generic::sealed::LinkedNode,
        Direction, Edge, EdgeRef, GenericGraph, GraphNode, LabeledGraph, NodeId, NodeKind,
        NodeLink, PredecessorEdges, Predecessors, SuccessorEdges, Successors,
    },
    Error,
};

/// A node with successor and predecessor lists, each holding label copies.
#[derive(Debug, Clone)]
pub struct BidirectionalNode<T, L = ()> {
    data: T,
    link: Option<NodeLink>,
    successors: EdgeList<L>,
    predecessors: EdgeList<L>,
}

impl<T, L> BidirectionalNode<T, L> {
    /// Creates an unlinked node without edges.
    pub fn new(data: T) -> Self {
        BidirectionalNode {
            data,
            link: None,
            successors: EdgeList::new(),
            predecessors: EdgeList::new(),
        }
    }

    fn handle(&self) -> NodeId {
        self.link.map_or(NodeId::UNLINKED, |link| link.node)
    }

    /// Iterates successor handles in insertion order.
    pub fn successors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.successors.iter().map(|edge| edge.neighbor)
    }

    /// Iterates predecessor handles in insertion order.
    pub fn predecessors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.predecessors.iter().map(|edge| edge.neighbor)
    }

    /// Iterates outgoing edges with this node's label copies.
    pub fn successor_edges(&self) -> impl Iterator<Item = EdgeRef<'_, L>> {
        self.successors.iter().map(Edge::as_ref)
    }

    /// Iterates incoming edges with this node's label copies.
    pub fn predecessor_edges(&self) -> impl Iterator<Item = EdgeRef<'_, L>> {
        self.predecessors.iter().map(Edge::as_ref)
    }

    /// Iterates outgoing edges with mutable label copies.
    ///
    /// The copies held by the successors are not affected.
    pub fn successor_edges_mut(&mut self) -> impl Iterator<Item = (NodeId, &mut L)> {
        self.successors
            .iter_mut()
            .map(|edge| (edge.neighbor, &mut edge.label))
    }

    /// Iterates incoming edges with mutable label copies.
    ///
    /// The copies held by the predecessors are not affected.
    pub fn predecessor_edges_mut(&mut self) -> impl Iterator<Item = (NodeId, &mut L)> {
        self.predecessors
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

    /// Returns the incoming edge at `position`.
    ///
    /// # Panics
    ///
    /// Aborts if `position` is out of range.
    pub fn predecessor(&self, position: usize) -> EdgeRef<'_, L> {
        record_at(&self.predecessors, self.handle(), Direction::Predecessor, position).as_ref()
    }

    /// Returns `true` if the node has at least one successor.
    pub fn has_successors(&self) -> bool {
        !self.successors.is_empty()
    }

    /// Returns `true` if the node has at least one predecessor.
    pub fn has_predecessors(&self) -> bool {
        !self.predecessors.is_empty()
    }

    /// Number of outgoing edges.
    pub fn successor_count(&self) -> usize {
        self.successors.len()
    }

    /// Number of incoming edges.
    pub fn predecessor_count(&self) -> usize {
        self.predecessors.len()
    }

    /// Erases the outgoing record at `position`, keeping the order of the rest.
    ///
    /// The successor keeps its predecessor record for this edge. Returns the
    /// position to continue iterating from.
    ///
    /// # Panics
    ///
    /// Aborts if `position` is out of range.
    pub fn remove_successor(&mut self, position: usize) -> usize {
        let node = self.handle();
        erase(&mut self.successors, node, Direction::Successor, position)
    }

    /// Erases the incoming record at `position`, keeping the order of the rest.
    ///
    /// The predecessor keeps its successor record for this edge. Returns the
    /// position to continue iterating from.
    ///
    /// # Panics
    ///
    /// Aborts if `position` is out of range.
    pub fn remove_predecessor(&mut self, position: usize) -> usize {
        let node = self.handle();
        erase(&mut self.predecessors, node, Direction::Predecessor, position)
    }

    /// Keeps only the outgoing records for which `keep` returns `true`.
    pub fn retain_successors<F>(&mut self, mut keep: F)
    where
        F: FnMut(EdgeRef<'_, L>) -> bool,
    {
        self.successors.retain(|edge| keep(edge.as_ref()));
    }

    /// Keeps only the incoming records for which `keep` returns `true`.
    pub fn retain_predecessors<F>(&mut self, mut keep: F)
    where
        F: FnMut(EdgeRef<'_, L>) -> bool,
    {
        self.predecessors.retain(|edge| keep(edge.as_ref()));
    }
}

impl<T, L> LinkedNode for BidirectionalNode<T, L> {
    type Labels = ();

    fn set_link(&mut self, link: Option<NodeLink>) {
        self.link = link;
    }
}

impl<T, L> GraphNode for BidirectionalNode<T, L> {
    type Data = T;
    type Label = L;
    const KIND: NodeKind = NodeKind::Bidirectional;

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
        self.successors.len() + self.predecessors.len()
    }
}

impl<T, L: Clone> GenericGraph<BidirectionalNode<T, L>> {
    /// Adds an edge `from -> to` carrying the default label.
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

    /// Adds an edge `from -> to`; `from` and `to` each keep a copy of `label`.
    ///
    /// # Panics
    ///
    /// Aborts if either node is not in the graph.
    pub fn add_labeled_successor(&mut self, from: NodeId, to: NodeId, label: L) {
        graph_assert!(self.has_node(from), Error::InvalidNode(from));
        graph_assert!(self.has_node(to), Error::InvalidNode(to));

        self.get_mut_or_abort(from)
            .successors
            .push(Edge::new(to, label.clone()));
        self.get_mut_or_abort(to)
            .predecessors
            .push(Edge::new(from, label));
        trace_mutation!(self, from = %from, to = %to, "successor added");
    }

    /// Adds an edge `source -> node` carrying the default label.
    ///
    /// # Panics
    ///
    /// Aborts if either node is not in the graph.
    pub fn add_predecessor(&mut self, node: NodeId, source: NodeId)
    where
        L: Default,
    {
        self.add_labeled_successor(source, node, L::default());
    }

    /// Adds an edge `source -> node`; both ends keep a copy of `label`.
    ///
    /// # Panics
    ///
    /// Aborts if either node is not in the graph.
    pub fn add_labeled_predecessor(&mut self, node: NodeId, source: NodeId, label: L) {
        self.add_labeled_successor(source, node, label);
    }
}

impl<T, L> Successors for GenericGraph<BidirectionalNode<T, L>> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.get_or_abort(node).successors()
    }
}

impl<T, L> Predecessors for GenericGraph<BidirectionalNode<T, L>> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.get_or_abort(node).predecessors()
    }
}

impl<T, L> LabeledGraph for GenericGraph<BidirectionalNode<T, L>> {
    type Label = L;
}

impl<T, L> SuccessorEdges for GenericGraph<BidirectionalNode<T, L>> {
    fn successor_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeRef<'_, L>> {
        self.get_or_abort(node).successor_edges()
    }
}

impl<T, L> PredecessorEdges for GenericGraph<BidirectionalNode<T, L>> {
    fn predecessor_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeRef<'_, L>> {
        self.get_or_abort(node).predecessor_edges()
    }
}

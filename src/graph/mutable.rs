//! Nodes with shared labels and synchronized edge removal.
//!
//! Every edge of a [`MutableEdgeNode`] graph owns exactly one label, kept in the
//! graph's [`LabelArena`]. The successor record on the source and the
//! predecessor record on the target both carry the label's [`EdgeId`], so the
//! label reached from either end is the same value. Two invariants hold at all
//! times:
//!
//! - every successor record `A -> B` has exactly one predecessor record on `B`
//!   naming `A` with the same [`EdgeId`], and vice versa
//! - at most one edge exists per ordered pair of nodes
//!
//! Edge operations that touch both endpoints are methods on the graph. Removal
//! always takes out both halves and frees the label; it swaps the last record
//! into the freed position, so edge-list order does not survive a removal.

use std::marker::PhantomData;

use crate::{
    graph::{
        edge::EdgeList, generic::sealed::LinkedNode, verify::verify_mirrors, Direction, Edge,
        EdgeId, EdgeRef, GenericGraph, GraphNode, LabelArena, LabeledGraph, NodeId, NodeKind,
        NodeLink, PredecessorEdges, Predecessors, SuccessorEdges, Successors,
    },
    Error, Result,
};

/// A node whose edges share one label allocation between both endpoints.
#[derive(Debug)]
pub struct MutableEdgeNode<T, L = ()> {
    data: T,
    link: Option<NodeLink>,
    successors: EdgeList<EdgeId>,
    predecessors: EdgeList<EdgeId>,
    label: PhantomData<fn() -> L>,
}

impl<T, L> MutableEdgeNode<T, L> {
    /// Creates an unlinked node without edges.
    pub fn new(data: T) -> Self {
        MutableEdgeNode {
            data,
            link: None,
            successors: EdgeList::new(),
            predecessors: EdgeList::new(),
            label: PhantomData,
        }
    }

    pub(crate) fn records(&self, direction: Direction) -> &EdgeList<EdgeId> {
        match direction {
            Direction::Successor => &self.successors,
            Direction::Predecessor => &self.predecessors,
        }
    }

    pub(crate) fn records_mut(&mut self, direction: Direction) -> &mut EdgeList<EdgeId> {
        match direction {
            Direction::Successor => &mut self.successors,
            Direction::Predecessor => &mut self.predecessors,
        }
    }

    /// Iterates successor handles.
    pub fn successors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.successors.iter().map(|edge| edge.neighbor)
    }

    /// Iterates predecessor handles.
    pub fn predecessors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.predecessors.iter().map(|edge| edge.neighbor)
    }

    /// Iterates the label handles of outgoing edges.
    pub fn successor_labels(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.successors.iter().map(|edge| edge.label)
    }

    /// Iterates the label handles of incoming edges.
    pub fn predecessor_labels(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.predecessors.iter().map(|edge| edge.label)
    }

    /// Returns the position of the outgoing edge to `target`.
    pub fn find_successor(&self, target: NodeId) -> Option<usize> {
        self.successors.iter().position(|edge| edge.neighbor == target)
    }

    /// Returns the position of the incoming edge from `source`.
    pub fn find_predecessor(&self, source: NodeId) -> Option<usize> {
        self.predecessors
            .iter()
            .position(|edge| edge.neighbor == source)
    }

    /// Returns `true` if an edge to `target` exists.
    pub fn has_successor(&self, target: NodeId) -> bool {
        self.find_successor(target).is_some()
    }

    /// Returns `true` if an edge from `source` exists.
    pub fn has_predecessor(&self, source: NodeId) -> bool {
        self.find_predecessor(source).is_some()
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
}

impl<T, L> LinkedNode for MutableEdgeNode<T, L> {
    type Labels = LabelArena<L>;

    fn set_link(&mut self, link: Option<NodeLink>) {
        self.link = link;
    }

    fn unlink(graph: &mut GenericGraph<Self>, id: NodeId) {
        graph.disconnect(id);
    }

    fn verify_edges(graph: &GenericGraph<Self>) -> Result<()> {
        verify_mirrors(graph)
    }
}

impl<T, L> GraphNode for MutableEdgeNode<T, L> {
    type Data = T;
    type Label = L;
    const KIND: NodeKind = NodeKind::MutableEdge;

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

impl<T, L> GenericGraph<MutableEdgeNode<T, L>> {
    /// Adds an edge `from -> to` carrying the default label.
    ///
    /// # Panics
    ///
    /// Aborts if either node is not in the graph or the edge already exists.
    pub fn add_successor(&mut self, from: NodeId, to: NodeId) -> EdgeId
    where
        L: Default,
    {
        self.add_labeled_successor(from, to, L::default())
    }

    /// Adds an edge `from -> to` owning `label` and returns the label handle.
    ///
    /// # Panics
    ///
    /// Aborts if either node is not in the graph, or if `from` already has an
    /// edge to `to`. The graph is unchanged in either case.
    pub fn add_labeled_successor(&mut self, from: NodeId, to: NodeId, label: L) -> EdgeId {
        graph_assert!(self.has_node(to), Error::InvalidNode(to));
        graph_assert!(
            !self.get_or_abort(from).has_successor(to),
            Error::DuplicateEdge { from, to }
        );

        let edge = self.labels.insert(label);
        self.get_mut_or_abort(from)
            .successors
            .push(Edge::new(to, edge));
        self.get_mut_or_abort(to)
            .predecessors
            .push(Edge::new(from, edge));

        trace_mutation!(self, from = %from, to = %to, edge = %edge, "edge added");
        edge
    }

    /// Adds an edge `source -> node` carrying the default label.
    ///
    /// # Panics
    ///
    /// Aborts if either node is not in the graph or the edge already exists.
    pub fn add_predecessor(&mut self, node: NodeId, source: NodeId) -> EdgeId
    where
        L: Default,
    {
        self.add_labeled_predecessor(node, source, L::default())
    }

    /// Adds an edge `source -> node` owning `label` and returns the label handle.
    ///
    /// # Panics
    ///
    /// Aborts if either node is not in the graph, or if `node` already has an
    /// edge from `source`.
    pub fn add_labeled_predecessor(&mut self, node: NodeId, source: NodeId, label: L) -> EdgeId {
        graph_assert!(self.has_node(source), Error::InvalidNode(source));
        graph_assert!(
            !self.get_or_abort(node).has_predecessor(source),
            Error::DuplicateEdge {
                from: source,
                to: node,
            }
        );
        self.add_labeled_successor(source, node, label)
    }

    /// Returns the label of `edge`.
    ///
    /// # Panics
    ///
    /// Aborts if `edge` does not name a live edge.
    pub fn label(&self, edge: EdgeId) -> &L {
        self.labels
            .get(edge)
            .unwrap_or_else(|| fatal!(Error::InvalidLabel(edge)))
    }

    /// Returns the label of `edge` mutably; the change is seen from both ends.
    ///
    /// # Panics
    ///
    /// Aborts if `edge` does not name a live edge.
    pub fn label_mut(&mut self, edge: EdgeId) -> &mut L {
        self.labels
            .get_mut(edge)
            .unwrap_or_else(|| fatal!(Error::InvalidLabel(edge)))
    }

    /// Returns the outgoing edge from `node` to `target`, if any.
    pub fn successor_edge(&self, node: NodeId, target: NodeId) -> Option<EdgeRef<'_, L>> {
        let owner = self.get_or_abort(node);
        let position = owner.find_successor(target)?;
        Some(self.view(&owner.successors[position]))
    }

    /// Returns the incoming edge of `node` from `source`, if any.
    pub fn predecessor_edge(&self, node: NodeId, source: NodeId) -> Option<EdgeRef<'_, L>> {
        let owner = self.get_or_abort(node);
        let position = owner.find_predecessor(source)?;
        Some(self.view(&owner.predecessors[position]))
    }

    /// Removes the edge `node -> target` from both endpoints and returns its label.
    ///
    /// Returns `None` if there is no such edge.
    ///
    /// # Panics
    ///
    /// Aborts if `node` is not in the graph or the edge has no mirrored half.
    pub fn remove_successor(&mut self, node: NodeId, target: NodeId) -> Option<L> {
        let position = self.get_or_abort(node).find_successor(target)?;
        Some(self.detach(node, Direction::Successor, position))
    }

    /// Removes the edge `source -> node` from both endpoints and returns its label.
    ///
    /// Returns `None` if there is no such edge.
    ///
    /// # Panics
    ///
    /// Aborts if `node` is not in the graph or the edge has no mirrored half.
    pub fn remove_predecessor(&mut self, node: NodeId, source: NodeId) -> Option<L> {
        let position = self.get_or_abort(node).find_predecessor(source)?;
        Some(self.detach(node, Direction::Predecessor, position))
    }

    /// Removes the outgoing edge at `position` of `node` from both endpoints.
    ///
    /// The last record is moved into `position`; the returned position is where
    /// iteration continues.
    ///
    /// # Panics
    ///
    /// Aborts if `position` is out of range or the edge has no mirrored half.
    pub fn remove_successor_at(&mut self, node: NodeId, position: usize) -> usize {
        self.detach(node, Direction::Successor, position);
        position
    }

    /// Removes the incoming edge at `position` of `node` from both endpoints.
    ///
    /// The last record is moved into `position`; the returned position is where
    /// iteration continues.
    ///
    /// # Panics
    ///
    /// Aborts if `position` is out of range or the edge has no mirrored half.
    pub fn remove_predecessor_at(&mut self, node: NodeId, position: usize) -> usize {
        self.detach(node, Direction::Predecessor, position);
        position
    }

    /// Removes every edge incident to `node`, in both directions, and returns
    /// how many edges were removed.
    ///
    /// The node stays in the graph.
    pub fn disconnect(&mut self, node: NodeId) -> usize {
        let mut removed = 0;
        for direction in [Direction::Successor, Direction::Predecessor] {
            while let Some(last) = self.get_or_abort(node).records(direction).len().checked_sub(1) {
                self.detach(node, direction, last);
                removed += 1;
            }
        }

        trace_mutation!(self, node = %node, removed, "node disconnected");
        if self.config().verify_mutations {
            self.assert_consistent();
        }
        removed
    }

    /// Number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.labels.len()
    }

    fn view<'a>(&'a self, record: &Edge<EdgeId>) -> EdgeRef<'a, L> {
        EdgeRef {
            neighbor: record.neighbor,
            label: self.label(record.label),
        }
    }

    /// Takes out the record at `position` of `node` together with its mirror
    /// and frees the label. Every check runs before the first record moves.
    fn detach(&mut self, node: NodeId, direction: Direction, position: usize) -> L {
        let records = self.get_or_abort(node).records(direction);
        let Some(&Edge {
            neighbor,
            label: edge,
        }) = records.get(position)
        else {
            fatal!(Error::InvalidPosition {
                node,
                direction,
                position,
                len: records.len(),
            });
        };

        let Some(far) = self.node(neighbor) else {
            fatal!(Error::DanglingEdge {
                node,
                neighbor,
                direction,
            });
        };
        let Some(mirror) = far
            .records(direction.flip())
            .iter()
            .position(|record| record.neighbor == node && record.label == edge)
        else {
            fatal!(Error::MissingMirror {
                node,
                neighbor,
                direction,
            });
        };
        graph_assert!(self.labels.contains(edge), Error::InvalidLabel(edge));

        self.get_mut_or_abort(neighbor)
            .records_mut(direction.flip())
            .swap_remove(mirror);
        self.get_mut_or_abort(node)
            .records_mut(direction)
            .swap_remove(position);

        trace_mutation!(self, node = %node, neighbor = %neighbor, %direction, edge = %edge, "edge removed");
        self.labels
            .remove(edge)
            .unwrap_or_else(|| fatal!(Error::InvalidLabel(edge)))
    }
}

impl<T, L> Successors for GenericGraph<MutableEdgeNode<T, L>> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.get_or_abort(node).successors()
    }
}

impl<T, L> Predecessors for GenericGraph<MutableEdgeNode<T, L>> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.get_or_abort(node).predecessors()
    }
}

impl<T, L> LabeledGraph for GenericGraph<MutableEdgeNode<T, L>> {
    type Label = L;
}

impl<T, L> SuccessorEdges for GenericGraph<MutableEdgeNode<T, L>> {
    fn successor_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeRef<'_, L>> {
        self.get_or_abort(node)
            .successors
            .iter()
            .map(|record| self.view(record))
    }
}

impl<T, L> PredecessorEdges for GenericGraph<MutableEdgeNode<T, L>> {
    fn predecessor_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeRef<'_, L>> {
        self.get_or_abort(node)
            .predecessors
            .iter()
            .map(|record| self.view(record))
    }
}

//! The owning graph container.
//!
//! [`GenericGraph`] stores every node of a graph in an insertion-ordered arena
//! and addresses them through [`NodeId`] handles. Which node kind the graph is
//! built from is chosen by its type parameter; the kind-specific edge
//! operations live next to each kind ([`forward`](super::forward),
//! [`bidirectional`](super::bidirectional), [`mutable`](super::mutable)).
//!
//! # Ownership
//!
//! A node enters a graph only through [`GenericGraph::add_node`] or
//! [`GenericGraph::insert_node`], which records the owning graph in the node's
//! [`NodeLink`]. It leaves only through [`GenericGraph::remove_node`] or when the
//! graph is dropped. Removing a mutable-edge node disconnects it first; removing
//! a forward or bidirectional node leaves records on other nodes that still name
//! it, and following such a record into the removed node aborts.

use std::ops::{Index, IndexMut};

use indexmap::IndexMap;

use crate::{
    config::GraphConfig,
    graph::{Capabilities, GraphBase, GraphId, NodeId, NodeKind, NodeLink, RootedGraph},
    Error, Result,
};

pub(crate) mod sealed {
    use crate::{
        graph::{GenericGraph, GraphNode, NodeLink},
        Result,
    };

    /// Container-side hooks of a node kind. Not implementable outside the crate.
    pub trait LinkedNode: Sized {
        /// Per-graph storage the kind needs besides its nodes
        type Labels: Default;

        /// Records or clears the owner of the node
        fn set_link(&mut self, link: Option<NodeLink>);

        /// Runs before the node at `id` is taken out of `graph`
        fn unlink(_graph: &mut GenericGraph<Self>, _id: crate::graph::NodeId)
        where
            Self: GraphNode,
        {
        }

        /// Kind-specific edge consistency checks
        fn verify_edges(_graph: &GenericGraph<Self>) -> Result<()>
        where
            Self: GraphNode,
        {
            Ok(())
        }
    }
}

/// A node kind a [`GenericGraph`] can be built from.
///
/// Implemented by [`ForwardNode`](crate::graph::ForwardNode),
/// [`BidirectionalNode`](crate::graph::BidirectionalNode) and
/// [`MutableEdgeNode`](crate::graph::MutableEdgeNode); the set is closed.
pub trait GraphNode: sealed::LinkedNode {
    /// User payload carried by every node
    type Data;
    /// Edge label type
    type Label;
    /// Runtime tag of the kind
    const KIND: NodeKind;

    /// Creates an unlinked node without edges.
    fn from_data(data: Self::Data) -> Self;

    /// Returns the payload.
    fn data(&self) -> &Self::Data;

    /// Returns the payload mutably.
    fn data_mut(&mut self) -> &mut Self::Data;

    /// Returns the back-reference to the owning graph, if the node is stored in one.
    fn link(&self) -> Option<NodeLink>;

    /// Returns the owning graph.
    fn parent(&self) -> Option<GraphId> {
        self.link().map(|link| link.graph)
    }

    /// Returns the handle the owning graph stores this node under.
    fn id(&self) -> Option<NodeId> {
        self.link().map(|link| link.node)
    }

    /// Total number of edge records, in every direction, held by this node.
    fn edge_records(&self) -> usize;
}

/// Owning container of the nodes of one graph.
///
/// # Examples
///
/// ```rust
/// use gengraph::{GenericGraph, MutableEdgeNode};
///
/// let mut graph: GenericGraph<MutableEdgeNode<&str, u32>> = GenericGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// graph.add_labeled_successor(a, b, 1);
/// graph.add_labeled_successor(b, c, 2);
///
/// graph.remove_node(b);
/// assert_eq!(graph[a].successor_count(), 0);
/// assert_eq!(graph[c].predecessor_count(), 0);
/// ```
pub struct GenericGraph<N: GraphNode> {
    id: GraphId,
    config: GraphConfig,
    nodes: IndexMap<NodeId, N>,
    next_node: usize,
    entry: Option<NodeId>,
    pub(crate) labels: N::Labels,
}

impl<N: GraphNode> Default for GenericGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: GraphNode> GenericGraph<N> {
    /// Creates an empty graph with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Creates an empty graph with the given configuration.
    #[must_use]
    pub fn with_config(config: GraphConfig) -> Self {
        GenericGraph {
            id: GraphId::next(),
            config,
            nodes: IndexMap::with_capacity(config.node_capacity),
            next_node: 0,
            entry: None,
            labels: N::Labels::default(),
        }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(GraphConfig::default().with_node_capacity(capacity))
    }

    /// Returns the process-unique identity of this graph.
    #[must_use]
    pub fn id(&self) -> GraphId {
        self.id
    }

    /// Returns the configuration this graph was created with.
    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Returns the node kind this graph is built from.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        N::KIND
    }

    /// Returns the capabilities of this graph: those of its node kind plus node
    /// iteration and the entry node.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        N::KIND.capabilities() | Capabilities::GENERIC_GRAPH
    }

    /// Creates a node from `data`, stores it and returns its handle.
    pub fn add_node(&mut self, data: N::Data) -> NodeId {
        self.insert_node(N::from_data(data))
    }

    /// Takes ownership of an existing node and returns its handle.
    ///
    /// # Panics
    ///
    /// Aborts if the node is already owned by a graph, or if it carries edge
    /// records. The graph is unchanged in either case.
    pub fn insert_node(&mut self, mut node: N) -> NodeId {
        if let Some(owner) = node.parent() {
            fatal!(Error::ForeignNode(owner));
        }
        let records = node.edge_records();
        graph_assert!(records == 0, Error::ConnectedNode(records));

        let id = NodeId::new(self.next_node);
        self.next_node += 1;
        node.set_link(Some(NodeLink {
            graph: self.id,
            node: id,
        }));
        self.nodes.insert(id, node);

        trace_mutation!(self, node = %id, "node added");
        id
    }

    /// Removes the node at `id` and returns it, unlinked.
    ///
    /// Mutable-edge nodes are disconnected first, so no record anywhere names
    /// the node afterwards. Forward and bidirectional nodes are removed as they
    /// are: records on other nodes that point at the removed node stay in place.
    /// Removing the entry node clears the entry designation.
    ///
    /// # Panics
    ///
    /// Aborts if `id` is not a node of this graph.
    pub fn remove_node(&mut self, id: NodeId) -> N {
        graph_assert!(self.nodes.contains_key(&id), Error::InvalidNode(id));

        N::unlink(self, id);
        let Some(mut node) = self.nodes.shift_remove(&id) else {
            fatal!(Error::InvalidNode(id));
        };
        node.set_link(None);

        if self.entry == Some(id) {
            self.entry = None;
            trace_mutation!(self, node = %id, "entry node cleared");
        }
        trace_mutation!(self, node = %id, remaining = self.nodes.len(), "node removed");

        if self.config.verify_mutations {
            self.assert_consistent();
        }
        node
    }

    /// Removes the node at `position` in insertion order.
    ///
    /// Returns `position`, which now holds the node that followed the removed
    /// one, or the node count if the removed node was the last.
    ///
    /// # Panics
    ///
    /// Aborts if `position` is out of range.
    pub fn remove_node_at(&mut self, position: usize) -> usize {
        let Some((&id, _)) = self.nodes.get_index(position) else {
            fatal!(Error::InvalidNodePosition {
                position,
                len: self.nodes.len(),
            });
        };
        self.remove_node(id);
        position
    }

    /// Returns the insertion-order position of `id`, or `None` if the graph does
    /// not contain it.
    #[must_use]
    pub fn find_node(&self, id: NodeId) -> Option<usize> {
        self.nodes.get_index_of(&id)
    }

    /// Returns `true` if the graph contains `id`.
    #[must_use]
    pub fn has_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns the node at `id`.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&N> {
        self.nodes.get(&id)
    }

    /// Returns the node at `id` mutably.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut N> {
        self.nodes.get_mut(&id)
    }

    /// Iterates nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &N)> {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }

    /// Iterates nodes mutably in insertion order.
    pub fn nodes_mut(&mut self) -> impl Iterator<Item = (NodeId, &mut N)> {
        self.nodes.iter_mut().map(|(id, node)| (*id, node))
    }

    /// Iterates node handles in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if the graph has at least one node.
    #[must_use]
    pub fn has_nodes(&self) -> bool {
        !self.is_empty()
    }

    /// Returns the entry node, if one is designated.
    #[must_use]
    pub fn entry_node(&self) -> Option<NodeId> {
        self.entry
    }

    /// Designates `id` as the entry node.
    ///
    /// # Panics
    ///
    /// Aborts if `id` is not a node of this graph.
    pub fn set_entry_node(&mut self, id: NodeId) {
        graph_assert!(self.nodes.contains_key(&id), Error::InvalidNode(id));
        self.entry = Some(id);
        trace_mutation!(self, node = %id, "entry node set");
    }

    /// Clears the entry designation and returns the previous entry node.
    pub fn clear_entry_node(&mut self) -> Option<NodeId> {
        self.entry.take()
    }

    /// Returns `true` if `node` is stored in this graph under the handle its
    /// back-reference names.
    #[must_use]
    pub fn owns(&self, node: &N) -> bool {
        node.link().is_some_and(|link| {
            link.graph == self.id
                && self
                    .nodes
                    .get(&link.node)
                    .is_some_and(|stored| std::ptr::eq(stored, node))
        })
    }

    /// Returns the node at `id` or aborts.
    pub(crate) fn get_or_abort(&self, id: NodeId) -> &N {
        self.nodes
            .get(&id)
            .unwrap_or_else(|| fatal!(Error::InvalidNode(id)))
    }

    /// Returns the node at `id` mutably or aborts.
    pub(crate) fn get_mut_or_abort(&mut self, id: NodeId) -> &mut N {
        self.nodes
            .get_mut(&id)
            .unwrap_or_else(|| fatal!(Error::InvalidNode(id)))
    }

    /// Returns the first violated invariant of this graph.
    ///
    /// Checks that every node's back-reference names this graph and its handle,
    /// then runs the checks specific to the node kind.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, see [`Error`].
    pub fn verify(&self) -> Result<()> {
        crate::graph::verify::verify_links(self)?;
        N::verify_edges(self)
    }

    /// Aborts if [`verify`](Self::verify) finds a violation.
    pub fn assert_consistent(&self) {
        if let Err(error) = self.verify() {
            fatal!(error);
        }
    }
}

impl<N: GraphNode> Index<NodeId> for GenericGraph<N> {
    type Output = N;

    fn index(&self, id: NodeId) -> &N {
        self.get_or_abort(id)
    }
}

impl<N: GraphNode> IndexMut<NodeId> for GenericGraph<N> {
    fn index_mut(&mut self, id: NodeId) -> &mut N {
        self.get_mut_or_abort(id)
    }
}

impl<N: GraphNode> GraphBase for GenericGraph<N> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.nodes.keys().copied()
    }

    fn node_bound(&self) -> usize {
        self.next_node
    }

    fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }
}

impl<N: GraphNode> RootedGraph for GenericGraph<N> {
    fn entry(&self) -> NodeId {
        self.entry
            .unwrap_or_else(|| fatal!(Error::MissingEntryNode))
    }
}

impl<N> std::fmt::Debug for GenericGraph<N>
where
    N: GraphNode + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenericGraph")
            .field("id", &self.id)
            .field("kind", &N::KIND)
            .field("entry", &self.entry)
            .field("nodes", &self.nodes)
            .finish_non_exhaustive()
    }
}

//! Direction-flipping view over a graph.

use crate::{
    graph::{
        EdgeRef, GraphBase, LabeledGraph, NodeId, PredecessorEdges, Predecessors, RootedGraph,
        SuccessorEdges, Successors,
    },
    Error,
};

/// A borrowed view of a graph with every edge reversed.
///
/// The successors of a node in the view are its predecessors in the
/// underlying graph and vice versa, so an algorithm written against
/// [`Successors`] walks the graph backwards when handed an `Inverse`. Only
/// graphs that track predecessors can be inverted.
///
/// # Examples
///
/// ```rust
/// use gengraph::{algorithms, BidirectionalNode, GenericGraph, Inverse};
///
/// let mut graph: GenericGraph<BidirectionalNode<&str>> = GenericGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// graph.add_successor(a, b);
/// graph.add_successor(b, c);
///
/// let backwards: Vec<_> = algorithms::dfs(&Inverse::new(&graph), c).collect();
/// assert_eq!(backwards, vec![c, b, a]);
/// ```
#[derive(Debug)]
pub struct Inverse<'g, G> {
    graph: &'g G,
    entry: Option<NodeId>,
}

impl<G> Clone for Inverse<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for Inverse<'_, G> {}

impl<'g, G: Predecessors> Inverse<'g, G> {
    /// Creates a reversed view without an entry node.
    pub fn new(graph: &'g G) -> Self {
        Inverse { graph, entry: None }
    }

    /// Creates a reversed view whose entry is `node`, typically an exit of the
    /// underlying graph.
    ///
    /// # Panics
    ///
    /// Aborts if `node` is not in the graph.
    pub fn rooted_at(graph: &'g G, node: NodeId) -> Self {
        graph_assert!(graph.contains_node(node), Error::InvalidNode(node));
        Inverse {
            graph,
            entry: Some(node),
        }
    }

    /// Returns the underlying graph.
    pub fn graph(&self) -> &'g G {
        self.graph
    }
}

impl<G: GraphBase> GraphBase for Inverse<'_, G> {
    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.graph.node_ids()
    }

    fn node_bound(&self) -> usize {
        self.graph.node_bound()
    }

    fn contains_node(&self, node: NodeId) -> bool {
        self.graph.contains_node(node)
    }
}

impl<G: Predecessors> Successors for Inverse<'_, G> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.graph.predecessors(node)
    }
}

impl<G: Successors> Predecessors for Inverse<'_, G> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.graph.successors(node)
    }
}

impl<G: LabeledGraph> LabeledGraph for Inverse<'_, G> {
    type Label = G::Label;
}

impl<G: PredecessorEdges> SuccessorEdges for Inverse<'_, G> {
    fn successor_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeRef<'_, G::Label>> {
        self.graph.predecessor_edges(node)
    }
}

impl<G: SuccessorEdges> PredecessorEdges for Inverse<'_, G> {
    fn predecessor_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeRef<'_, G::Label>> {
        self.graph.successor_edges(node)
    }
}

impl<G: GraphBase> RootedGraph for Inverse<'_, G> {
    fn entry(&self) -> NodeId {
        self.entry
            .unwrap_or_else(|| fatal!(Error::MissingEntryNode))
    }
}

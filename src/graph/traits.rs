//! Traversal capability contract.
//!
//! Algorithms are written once against these traits and run unchanged over
//! every node kind a [`GenericGraph`](crate::graph::GenericGraph) can be built
//! from, and over the [`Inverse`](crate::graph::Inverse) view of any graph that
//! tracks predecessors.
//!
//! # Architecture
//!
//! - [`GraphBase`] - Node count and node enumeration
//! - [`Successors`] / [`Predecessors`] - Neighbor enumeration per direction
//! - [`LabeledGraph`] - Names the edge label type
//! - [`SuccessorEdges`] / [`PredecessorEdges`] - Neighbor enumeration with labels
//! - [`RootedGraph`] - A designated entry node
//!
//! | Node kind | Successors | Predecessors | Edge views |
//! |-----------|------------|--------------|------------|
//! | `ForwardNode` | yes | no | successor side |
//! | `BidirectionalNode` | yes | yes | both sides, label copies |
//! | `MutableEdgeNode` | yes | yes | both sides, shared label |
//!
//! Requesting predecessors of a forward-only graph is a type error, not a
//! runtime failure.

use crate::graph::{EdgeRef, NodeId};

/// Core properties every graph exposes.
pub trait GraphBase {
    /// Returns the number of nodes currently in the graph.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node handles, in insertion order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;

    /// Returns one past the largest handle the graph has ever issued.
    ///
    /// Handles of removed nodes are not reissued, so this can exceed
    /// [`node_count`](GraphBase::node_count). Use it to size tables indexed by
    /// [`NodeId::index`].
    fn node_bound(&self) -> usize;

    /// Returns `true` if `node` is a live node of this graph.
    fn contains_node(&self, node: NodeId) -> bool;
}

/// Graphs that can enumerate outgoing edges.
///
/// # Examples
///
/// ```rust
/// use gengraph::{ForwardNode, GenericGraph, NodeId, Successors};
///
/// let mut graph: GenericGraph<ForwardNode<&str>> = GenericGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// graph.add_successor(a, b);
/// graph.add_successor(a, c);
///
/// let successors: Vec<NodeId> = graph.successors(a).collect();
/// assert_eq!(successors, vec![b, c]);
/// ```
pub trait Successors: GraphBase {
    /// Returns an iterator over the successors of `node`, in edge-list order.
    ///
    /// # Panics
    ///
    /// Aborts if `node` is not a live node of the graph.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Graphs that can enumerate incoming edges without scanning every node.
pub trait Predecessors: GraphBase {
    /// Returns an iterator over the predecessors of `node`, in edge-list order.
    ///
    /// # Panics
    ///
    /// Aborts if `node` is not a live node of the graph.
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Graphs whose edges carry a label.
pub trait LabeledGraph: GraphBase {
    /// The edge label type; `()` for unlabeled graphs
    type Label;
}

/// Graphs that can enumerate outgoing edges together with their labels.
pub trait SuccessorEdges: LabeledGraph + Successors {
    /// Returns an iterator over the outgoing edges of `node`.
    ///
    /// # Panics
    ///
    /// Aborts if `node` is not a live node of the graph.
    fn successor_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeRef<'_, Self::Label>>;
}

/// Graphs that can enumerate incoming edges together with their labels.
pub trait PredecessorEdges: LabeledGraph + Predecessors {
    /// Returns an iterator over the incoming edges of `node`.
    ///
    /// # Panics
    ///
    /// Aborts if `node` is not a live node of the graph.
    fn predecessor_edges(&self, node: NodeId)
        -> impl Iterator<Item = EdgeRef<'_, Self::Label>>;
}

/// Graphs with a designated entry (root) node.
pub trait RootedGraph: GraphBase {
    /// Returns the entry node.
    ///
    /// # Panics
    ///
    /// Aborts if the graph has no entry node.
    fn entry(&self) -> NodeId;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Edge-list graph with handles 0..node_count, independent of GenericGraph
    struct TestGraph {
        node_count: usize,
        edges: Vec<(NodeId, NodeId, u32)>,
        entry: NodeId,
    }

    impl GraphBase for TestGraph {
        fn node_count(&self) -> usize {
            self.node_count
        }

        fn node_ids(&self) -> impl Iterator<Item = NodeId> {
            (0..self.node_count).map(NodeId::new)
        }

        fn node_bound(&self) -> usize {
            self.node_count
        }

        fn contains_node(&self, node: NodeId) -> bool {
            node.index() < self.node_count
        }
    }

    impl Successors for TestGraph {
        fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
            self.successor_edges(node).map(|edge| edge.neighbor)
        }
    }

    impl Predecessors for TestGraph {
        fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
            self.predecessor_edges(node).map(|edge| edge.neighbor)
        }
    }

    impl LabeledGraph for TestGraph {
        type Label = u32;
    }

    impl SuccessorEdges for TestGraph {
        fn successor_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeRef<'_, u32>> {
            self.edges
                .iter()
                .filter(move |(src, _, _)| *src == node)
                .map(|(_, dst, label)| EdgeRef {
                    neighbor: *dst,
                    label,
                })
        }
    }

    impl PredecessorEdges for TestGraph {
        fn predecessor_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeRef<'_, u32>> {
            self.edges
                .iter()
                .filter(move |(_, dst, _)| *dst == node)
                .map(|(src, _, label)| EdgeRef {
                    neighbor: *src,
                    label,
                })
        }
    }

    impl RootedGraph for TestGraph {
        fn entry(&self) -> NodeId {
            self.entry
        }
    }

    fn graph() -> TestGraph {
        TestGraph {
            node_count: 4,
            edges: vec![
                (NodeId::new(0), NodeId::new(1), 10),
                (NodeId::new(0), NodeId::new(2), 20),
                (NodeId::new(1), NodeId::new(3), 30),
                (NodeId::new(2), NodeId::new(3), 40),
            ],
            entry: NodeId::new(0),
        }
    }

    #[test]
    fn test_graph_base() {
        let graph = graph();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.node_bound(), 4);
        assert!(graph.contains_node(NodeId::new(3)));
        assert!(!graph.contains_node(NodeId::new(4)));
    }

    #[test]
    fn test_neighbors() {
        let graph = graph();
        let succ: Vec<NodeId> = graph.successors(NodeId::new(0)).collect();
        assert_eq!(succ, vec![NodeId::new(1), NodeId::new(2)]);

        let pred: Vec<NodeId> = graph.predecessors(NodeId::new(3)).collect();
        assert_eq!(pred, vec![NodeId::new(1), NodeId::new(2)]);
        assert_eq!(graph.predecessors(NodeId::new(0)).count(), 0);
    }

    #[test]
    fn test_edge_views_carry_labels() {
        let graph = graph();
        let labels: Vec<u32> = graph
            .predecessor_edges(NodeId::new(3))
            .map(|edge| *edge.label)
            .collect();
        assert_eq!(labels, vec![30, 40]);
        assert_eq!(graph.entry(), NodeId::new(0));
    }
}

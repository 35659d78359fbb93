//! Generic directed graph with three node representations.
//!
//! A [`GenericGraph`] owns its nodes in an arena and hands out [`NodeId`]
//! handles. The node kind, picked through the type parameter, decides how edges
//! are stored:
//!
//! | Kind | Predecessors | Labels | Removal |
//! |------|--------------|--------|---------|
//! | [`ForwardNode`] | not tracked | by value | order-preserving, one record |
//! | [`BidirectionalNode`] | tracked | value copy per side | order-preserving, one side only |
//! | [`MutableEdgeNode`] | tracked | one shared allocation | swap-remove, both sides |
//!
//! All three implement the traversal capability contract ([`Successors`],
//! [`Predecessors`] and the labeled variants), which the [`algorithms`] consume.
//! [`Inverse`] flips edge direction for kinds that track predecessors.
//!
//! # Examples
//!
//! ```rust
//! use gengraph::{algorithms, GenericGraph, MutableEdgeNode, NodeId};
//!
//! // A -> B, A -> C, B -> D, C -> D
//! let mut graph: GenericGraph<MutableEdgeNode<&str, &str>> = GenericGraph::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! let d = graph.add_node("D");
//!
//! graph.add_labeled_successor(a, b, "taken");
//! graph.add_labeled_successor(a, c, "fallthrough");
//! graph.add_labeled_successor(b, d, "jump");
//! graph.add_labeled_successor(c, d, "jump");
//! graph.set_entry_node(a);
//!
//! assert_eq!(graph.edge_count(), 4);
//! assert_eq!(graph[d].predecessor_count(), 2);
//!
//! let order: Vec<NodeId> = algorithms::reverse_postorder(&graph, a);
//! assert_eq!(order.first(), Some(&a));
//! assert_eq!(order.last(), Some(&d));
//! ```

pub mod algorithms;
mod bidirectional;
mod edge;
mod forward;
mod generic;
mod inverse;
mod kind;
mod labels;
mod mutable;
mod node;
mod traits;
pub(crate) mod verify;

pub use bidirectional::BidirectionalNode;
pub use edge::{Edge, EdgeId, EdgeRef};
pub use forward::ForwardNode;
pub use generic::{GenericGraph, GraphNode};
pub use inverse::Inverse;
pub use kind::{Capabilities, Direction, NodeKind};
pub use labels::LabelArena;
pub use mutable::MutableEdgeNode;
pub use node::{GraphId, NodeId, NodeLink};
pub use traits::{
    GraphBase, LabeledGraph, PredecessorEdges, Predecessors, RootedGraph, SuccessorEdges,
    Successors,
};

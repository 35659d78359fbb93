//! # gengraph Prelude
//!
//! The types and traits needed to build, mutate and traverse a graph.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// Invariant violation reported by consistency checks
pub use crate::Error;

/// The result type returned by consistency checks
pub use crate::Result;

/// Graph configuration presets
pub use crate::GraphConfig;

// ================================================================================================
// Container and Node Kinds
// ================================================================================================

/// The owning graph container
pub use crate::graph::GenericGraph;

/// Successor-only nodes
pub use crate::graph::ForwardNode;

/// Bidirectional nodes with per-side label copies
pub use crate::graph::BidirectionalNode;

/// Bidirectional nodes with one shared label per edge
pub use crate::graph::MutableEdgeNode;

/// Common node behavior: payload access and the parent back-reference
pub use crate::graph::GraphNode;

/// Handles and edge views
pub use crate::graph::{EdgeId, EdgeRef, NodeId};

// ================================================================================================
// Traversal Contract
// ================================================================================================

/// Capability traits implemented by every graph
pub use crate::graph::{
    GraphBase, LabeledGraph, PredecessorEdges, Predecessors, RootedGraph, SuccessorEdges,
    Successors,
};

/// Direction-flipping view
pub use crate::graph::Inverse;

/// Traversal algorithms
pub use crate::algorithms;

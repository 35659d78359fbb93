//! Node and graph identity.
//!
//! This module provides the [`NodeId`] handle through which every node of a
//! [`GenericGraph`](crate::graph::GenericGraph) is addressed, the [`GraphId`]
//! identity of a container and the [`NodeLink`] back-reference a node keeps to
//! the container that owns it.

use std::{
    fmt,
    sync::atomic::{AtomicUsize, Ordering},
};

/// A strongly-typed handle of a node within a graph.
///
/// Handles are issued by the owning graph from a monotonic counter when a node
/// is added. A handle is never reissued within the same graph, so the handle of
/// a removed node stays invalid for the lifetime of the graph instead of
/// silently aliasing a newer node.
///
/// # Examples
///
/// ```rust
/// use gengraph::{ForwardNode, GenericGraph, NodeId};
///
/// let mut graph: GenericGraph<ForwardNode<&str>> = GenericGraph::new();
/// let a: NodeId = graph.add_node("A");
/// let b: NodeId = graph.add_node("B");
/// assert_ne!(a, b);
///
/// graph.remove_node(a);
/// let c = graph.add_node("C");
/// assert_ne!(a, c);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Placeholder handle reported for a node that is not stored in any graph
    pub const UNLINKED: NodeId = NodeId(usize::MAX);

    /// Creates a new `NodeId` from a raw index value.
    ///
    /// Primarily intended for tests and for tables keyed by handle; normal
    /// usage obtains handles from [`GenericGraph::add_node`](crate::graph::GenericGraph::add_node).
    ///
    /// # Arguments
    ///
    /// * `index` - The raw handle value
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw index value of this handle.
    ///
    /// Indices are below [`GraphBase::node_bound`](crate::graph::GraphBase::node_bound)
    /// of the issuing graph and can index per-node tables.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::UNLINKED {
            f.write_str("<unlinked>")
        } else {
            write!(f, "n{}", self.0)
        }
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

static NEXT_GRAPH_ID: AtomicUsize = AtomicUsize::new(0);

/// Process-unique identity of a graph container.
///
/// Used by nodes to name their owner without holding a reference to it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct GraphId(usize);

impl GraphId {
    pub(crate) fn next() -> Self {
        GraphId(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw identity value.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// Back-reference from a node to the graph that stores it.
///
/// Set exactly once by the container when the node is inserted. It is a pure
/// lookup relation: dropping or removing a node never goes through it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeLink {
    /// The owning graph
    pub graph: GraphId,
    /// The handle the owning graph stores the node under
    pub node: NodeId,
}

impl fmt::Display for NodeLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.graph, self.node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_node_id_conversions() {
        let node: NodeId = 123usize.into();
        assert_eq!(node.index(), 123);
        let value: usize = NodeId::new(789).into();
        assert_eq!(value, 789);
    }

    #[test]
    fn test_node_id_ordering_and_hash() {
        let mut nodes = vec![NodeId::new(3), NodeId::new(1), NodeId::new(2)];
        nodes.sort();
        assert_eq!(nodes, vec![NodeId::new(1), NodeId::new(2), NodeId::new(3)]);

        let set: HashSet<NodeId> = [NodeId::new(1), NodeId::new(1), NodeId::new(2)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_node_id_formatting() {
        assert_eq!(format!("{:?}", NodeId::new(42)), "NodeId(42)");
        assert_eq!(format!("{}", NodeId::new(42)), "n42");
        assert_eq!(format!("{}", NodeId::UNLINKED), "<unlinked>");
    }

    #[test]
    fn test_graph_ids_are_unique() {
        let ids: HashSet<GraphId> = (0..64).map(|_| GraphId::next()).collect();
        assert_eq!(ids.len(), 64);
    }

    #[test]
    fn test_node_link_display() {
        let graph = GraphId::next();
        let link = NodeLink {
            graph,
            node: NodeId::new(4),
        };
        assert_eq!(link.to_string(), format!("g{}/n4", graph.index()));
    }
}

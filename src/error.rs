use thiserror::Error;

use crate::graph::{Direction, EdgeId, GraphId, NodeId};

/// Every way in which calling code can break a graph.
///
/// None of these conditions depend on data: each one means the graph was built
/// or mutated incorrectly. Mutating operations therefore never return them;
/// they abort through [`crate::diagnostics::abort`]. The only API that returns an `Error` as a
/// value is the consistency checker ([`crate::graph::GenericGraph::verify`]),
/// which reports what it found instead of acting on it.
///
/// # Error Categories
///
/// ## Edge invariants
/// - [`Error::DuplicateEdge`] - A second edge between the same ordered pair
/// - [`Error::MissingMirror`] - One half of a two-sided edge is absent
/// - [`Error::DanglingEdge`] - An edge record names a node that no longer exists
/// - [`Error::InvalidLabel`] - A label handle does not refer to a live allocation
///
/// ## Handle misuse
/// - [`Error::InvalidNode`] - A node handle this graph does not contain
/// - [`Error::InvalidPosition`] - An edge position past the end of an edge list
/// - [`Error::InvalidNodePosition`] - A node position past the end of the node order
/// - [`Error::MissingEntryNode`] - Rooted traversal without an entry node
///
/// ## Ownership
/// - [`Error::ForeignNode`] - Absorbing a node that already has an owner
/// - [`Error::ConnectedNode`] - Absorbing a node that still carries edges
/// - [`Error::WrongParent`] - A node's back-reference names another owner
///
/// # Examples
///
/// ```rust
/// use gengraph::{Error, NodeId};
///
/// let error = Error::DuplicateEdge {
///     from: NodeId::new(0),
///     to: NodeId::new(1),
/// };
/// assert!(error.to_string().contains("only one edge is allowed"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A mutable-edge node already has an edge to the requested neighbor.
    ///
    /// Mutable-edge graphs allow at most one edge per ordered pair of nodes.
    #[error("only one edge is allowed between two nodes: {from} -> {to} already exists")]
    DuplicateEdge {
        /// Source of the rejected edge
        from: NodeId,
        /// Target of the rejected edge
        to: NodeId,
    },

    /// One half of an edge exists without its mirrored counterpart.
    ///
    /// `node` holds a record of the given `direction` naming `neighbor`, but
    /// `neighbor` holds no matching record pointing back. The graph layout is
    /// broken and cannot be repaired locally.
    #[error(
        "half of an edge is missing, graph layout is broken: {node} lists {neighbor} as {direction} without a mirror"
    )]
    MissingMirror {
        /// Node holding the surviving half
        node: NodeId,
        /// Neighbor that should hold the other half
        neighbor: NodeId,
        /// Which list of `node` the surviving half lives in
        direction: Direction,
    },

    /// An edge record refers to a node the graph no longer contains.
    #[error("{node} lists removed node {neighbor} as {direction}")]
    DanglingEdge {
        /// Node holding the record
        node: NodeId,
        /// The missing neighbor
        neighbor: NodeId,
        /// Which list of `node` the record lives in
        direction: Direction,
    },

    /// A label handle does not refer to a live label allocation.
    #[error("edge label {0} is not allocated")]
    InvalidLabel(EdgeId),

    /// A node handle does not exist in the graph.
    #[error("node {0} does not exist in this graph")]
    InvalidNode(NodeId),

    /// An edge position is past the end of the edge list it indexes.
    #[error("{direction} position {position} is out of range for {node} with {len} edges")]
    InvalidPosition {
        /// Node whose edge list was indexed
        node: NodeId,
        /// Which edge list was indexed
        direction: Direction,
        /// The offending position
        position: usize,
        /// Length of the edge list
        len: usize,
    },

    /// A node position is past the end of the graph's node order.
    #[error("node position {position} is out of range for a graph with {len} nodes")]
    InvalidNodePosition {
        /// The offending position
        position: usize,
        /// Number of nodes in the graph
        len: usize,
    },

    /// A rooted traversal was requested but no entry node is designated.
    #[error("graph has no entry node")]
    MissingEntryNode,

    /// The node passed to `insert_node` already belongs to a graph.
    #[error("node is already owned by graph {0}")]
    ForeignNode(GraphId),

    /// The node passed to `insert_node` still carries edges.
    #[error("node carries {0} edge records and cannot be absorbed")]
    ConnectedNode(usize),

    /// A node's back-reference does not match the graph that stores it.
    #[error("{node} is stored in graph {expected} but its back-reference says {found:?}")]
    WrongParent {
        /// Handle under which the node is stored
        node: NodeId,
        /// Graph that stores the node
        expected: GraphId,
        /// Owner recorded in the node, if any
        found: Option<GraphId>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_edge_message() {
        let error = Error::DuplicateEdge {
            from: NodeId::new(1),
            to: NodeId::new(2),
        };
        assert_eq!(
            error.to_string(),
            "only one edge is allowed between two nodes: n1 -> n2 already exists"
        );
    }

    #[test]
    fn test_missing_mirror_message() {
        let error = Error::MissingMirror {
            node: NodeId::new(0),
            neighbor: NodeId::new(3),
            direction: Direction::Successor,
        };
        let message = error.to_string();
        assert!(message.starts_with("half of an edge is missing"));
        assert!(message.contains("n3 as successor"));
    }

    #[test]
    fn test_invalid_position_message() {
        let error = Error::InvalidPosition {
            node: NodeId::new(4),
            direction: Direction::Predecessor,
            position: 7,
            len: 2,
        };
        assert_eq!(
            error.to_string(),
            "predecessor position 7 is out of range for n4 with 2 edges"
        );
    }

    #[test]
    fn test_errors_compare_by_value() {
        assert_eq!(
            Error::InvalidNode(NodeId::new(9)),
            Error::InvalidNode(NodeId::new(9))
        );
        assert_ne!(Error::MissingEntryNode, Error::InvalidLabel(EdgeId::new(0)));
    }
}

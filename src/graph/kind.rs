//! Node kinds, traversal directions and capability sets.

use bitflags::bitflags;
use strum::{Display, EnumCount, EnumIter};

bitflags! {
    /// What a node kind, or a graph built from it, supports.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities : u8 {
        /// Outgoing edges can be enumerated
        const SUCCESSORS = 0x01;
        /// Incoming edges can be enumerated without scanning the graph
        const PREDECESSORS = 0x02;
        /// Both halves of an edge see one label allocation
        const SHARED_LABELS = 0x04;
        /// Removing one half of an edge removes the other half too
        const SYNCHRONIZED_REMOVAL = 0x08;
        /// At most one edge exists per ordered pair of nodes
        const UNIQUE_EDGES = 0x10;
        /// The container can enumerate its nodes
        const NODE_ITERATION = 0x20;
        /// The container can designate an entry node
        const ENTRY_NODE = 0x40;
    }
}

impl Capabilities {
    /// Capabilities every [`GenericGraph`](crate::graph::GenericGraph) adds on top of its node kind
    pub const GENERIC_GRAPH: Self = Self::NODE_ITERATION.union(Self::ENTRY_NODE);
}

/// The three node representations a graph can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
#[strum(serialize_all = "kebab-case")]
pub enum NodeKind {
    /// [`ForwardNode`](crate::graph::ForwardNode): successors only
    Forward,
    /// [`BidirectionalNode`](crate::graph::BidirectionalNode): label copies on both sides
    Bidirectional,
    /// [`MutableEdgeNode`](crate::graph::MutableEdgeNode): one shared label per edge
    MutableEdge,
}

impl NodeKind {
    /// Returns the node-level capabilities of this kind.
    #[must_use]
    pub const fn capabilities(self) -> Capabilities {
        match self {
            NodeKind::Forward => Capabilities::SUCCESSORS,
            NodeKind::Bidirectional => Capabilities::SUCCESSORS.union(Capabilities::PREDECESSORS),
            NodeKind::MutableEdge => Capabilities::SUCCESSORS
                .union(Capabilities::PREDECESSORS)
                .union(Capabilities::SHARED_LABELS)
                .union(Capabilities::SYNCHRONIZED_REMOVAL)
                .union(Capabilities::UNIQUE_EDGES),
        }
    }
}

/// Which edge list of a node an edge record lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// Outgoing edge, stored on the source
    Successor,
    /// Incoming edge, stored on the target
    Predecessor,
}

impl Direction {
    /// Returns the direction the mirrored half of an edge is stored in.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Direction::Successor => Direction::Predecessor,
            Direction::Predecessor => Direction::Successor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_kind_capabilities() {
        assert_eq!(NodeKind::Forward.capabilities(), Capabilities::SUCCESSORS);

        let bidirectional = NodeKind::Bidirectional.capabilities();
        assert!(bidirectional.contains(Capabilities::PREDECESSORS));
        assert!(!bidirectional.contains(Capabilities::SYNCHRONIZED_REMOVAL));

        let mutable = NodeKind::MutableEdge.capabilities();
        assert!(mutable.contains(
            Capabilities::SHARED_LABELS
                | Capabilities::SYNCHRONIZED_REMOVAL
                | Capabilities::UNIQUE_EDGES
        ));
        assert!(!mutable.intersects(Capabilities::GENERIC_GRAPH));
    }

    #[test]
    fn test_every_kind_has_successors() {
        assert_eq!(NodeKind::COUNT, 3);
        for kind in NodeKind::iter() {
            assert!(kind.capabilities().contains(Capabilities::SUCCESSORS));
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(NodeKind::MutableEdge.to_string(), "mutable-edge");
        assert_eq!(Direction::Successor.to_string(), "successor");
        assert_eq!(Direction::Predecessor.to_string(), "predecessor");
    }

    #[test]
    fn test_direction_flip() {
        for direction in Direction::iter() {
            assert_ne!(direction.flip(), direction);
            assert_eq!(direction.flip().flip(), direction);
        }
    }
}

//! Edge records and edge handles.
//!
//! An edge is stored as an [`Edge`] record in the edge list of one or both of
//! its endpoints. Forward and bidirectional nodes embed the label by value in
//! each record; mutable-edge nodes embed an [`EdgeId`] naming the single label
//! allocation both halves of the edge share. [`EdgeRef`] is the read-only view
//! the traversal contract hands out for either storage discipline.

use std::fmt;

use smallvec::SmallVec;

use crate::{
    graph::{Direction, NodeId},
    Error,
};

/// Inline capacity of a node's edge list before it spills to the heap.
pub(crate) const INLINE_EDGES: usize = 2;

/// Edge list of a single node and direction.
pub(crate) type EdgeList<L> = SmallVec<[Edge<L>; INLINE_EDGES]>;

/// A strongly-typed handle of an edge label in a mutable-edge graph.
///
/// Both halves of a mutable edge carry the same `EdgeId`, so the label reached
/// from the source and the label reached from the target are one allocation.
/// The handle is only meaningful while its edge exists: once the edge is
/// removed the slot is recycled for the next edge.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates a new `EdgeId` from a raw slot index.
    ///
    /// # Arguments
    ///
    /// * `index` - The raw label slot (0-based)
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw slot index of this handle.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl From<usize> for EdgeId {
    #[inline]
    fn from(index: usize) -> Self {
        EdgeId(index)
    }
}

impl From<EdgeId> for usize {
    #[inline]
    fn from(edge: EdgeId) -> Self {
        edge.0
    }
}

/// One half of an edge as stored in a node's edge list.
///
/// `neighbor` is the node at the other end: the target for a successor record,
/// the source for a predecessor record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge<L> {
    /// The node at the far end of the edge
    pub neighbor: NodeId,
    /// The label, or the label handle for mutable edges
    pub label: L,
}

impl<L> Edge<L> {
    /// Creates an edge record pointing at `neighbor`.
    pub fn new(neighbor: NodeId, label: L) -> Self {
        Edge { neighbor, label }
    }

    /// Borrows this record as an [`EdgeRef`].
    pub fn as_ref(&self) -> EdgeRef<'_, L> {
        EdgeRef {
            neighbor: self.neighbor,
            label: &self.label,
        }
    }
}

/// Read-only view of an edge: the neighbor and a borrowed label.
#[derive(Debug, PartialEq, Eq)]
pub struct EdgeRef<'a, L> {
    /// The node at the far end of the edge
    pub neighbor: NodeId,
    /// The edge label
    pub label: &'a L,
}

impl<L> Clone for EdgeRef<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for EdgeRef<'_, L> {}

/// Erases the record at `position`, keeping the order of the remaining ones.
///
/// Returns `position`, which now holds the record that followed the erased
/// one, or the list length if the erased record was the last.
pub(crate) fn erase<L>(
    list: &mut EdgeList<L>,
    node: NodeId,
    direction: Direction,
    position: usize,
) -> usize {
    let len = list.len();
    graph_assert!(
        position < len,
        Error::InvalidPosition {
            node,
            direction,
            position,
            len,
        }
    );
    list.remove(position);
    position
}

/// Returns the record at `position`, aborting if it is out of range.
pub(crate) fn record_at<L>(
    list: &EdgeList<L>,
    node: NodeId,
    direction: Direction,
    position: usize,
) -> &Edge<L> {
    list.get(position).unwrap_or_else(|| {
        fatal!(Error::InvalidPosition {
            node,
            direction,
            position,
            len: list.len(),
        })
    })
}

//! Label storage for mutable-edge graphs.
//!
//! Each mutable edge owns exactly one label allocation. The arena hands out an
//! [`EdgeId`] per allocation; the successor record and the predecessor record
//! of the edge both store that handle, so a label updated through one endpoint
//! is observed through the other. Freed slots are reused by later insertions.

use crate::graph::EdgeId;

/// Slot arena of edge labels keyed by [`EdgeId`].
#[derive(Debug, Clone)]
pub struct LabelArena<L> {
    slots: Vec<Option<L>>,
    free: Vec<usize>,
    len: usize,
}

impl<L> Default for LabelArena<L> {
    fn default() -> Self {
        LabelArena {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }
}

impl<L> LabelArena<L> {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `label` and returns the handle of its slot.
    pub fn insert(&mut self, label: L) -> EdgeId {
        self.len += 1;
        if let Some(slot) = self.free.pop() {
            self.slots[slot] = Some(label);
            return EdgeId::new(slot);
        }
        self.slots.push(Some(label));
        EdgeId::new(self.slots.len() - 1)
    }

    /// Frees the slot of `edge` and returns its label.
    ///
    /// Returns `None` if the slot is not allocated.
    pub fn remove(&mut self, edge: EdgeId) -> Option<L> {
        let label = self.slots.get_mut(edge.index())?.take()?;
        self.free.push(edge.index());
        self.len -= 1;
        Some(label)
    }

    /// Returns the label stored under `edge`.
    #[must_use]
    pub fn get(&self, edge: EdgeId) -> Option<&L> {
        self.slots.get(edge.index())?.as_ref()
    }

    /// Returns the label stored under `edge` mutably.
    pub fn get_mut(&mut self, edge: EdgeId) -> Option<&mut L> {
        self.slots.get_mut(edge.index())?.as_mut()
    }

    /// Returns `true` if `edge` names an allocated slot.
    #[must_use]
    pub fn contains(&self, edge: EdgeId) -> bool {
        self.get(edge).is_some()
    }

    /// Number of allocated labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no label is allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates allocated labels in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeId, &L)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, label)| Some((EdgeId::new(slot), label.as_ref()?)))
    }
}

//! Graph configuration
//!
//! This module provides the knobs a [`GenericGraph`](crate::graph::GenericGraph)
//! reads at run time: initial storage size, mutation tracing and the optional
//! consistency check after destructive operations.

/// Configuration for a [`GenericGraph`](crate::graph::GenericGraph)
///
/// The defaults suit graphs built and consumed inside a single analysis pass:
/// room for 16 nodes before the first reallocation, trace events for every
/// structural mutation (free when no subscriber listens at trace level) and
/// no extra verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Number of nodes to reserve storage for when the graph is created
    pub node_capacity: usize,

    /// Emit a `trace` event for every node or edge insertion and removal
    pub trace_mutations: bool,

    /// Run the full consistency check after every node removal and disconnect
    /// Costs O(V + E) per operation; meant for debugging graph construction code
    pub verify_mutations: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            node_capacity: 16,
            trace_mutations: true,
            verify_mutations: false,
        }
    }
}

impl GraphConfig {
    /// Creates a configuration without tracing or verification
    ///
    /// Mutations skip even the cheap check for an interested trace subscriber.
    #[must_use]
    pub fn fast() -> Self {
        Self {
            trace_mutations: false,
            ..Self::default()
        }
    }

    /// Creates a configuration that verifies the whole graph after every
    /// destructive operation
    ///
    /// Any broken mirror or dangling label handle is reported at the operation
    /// that produced it rather than at some later traversal.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            verify_mutations: true,
            ..Self::default()
        }
    }

    /// Returns this configuration with a different initial node capacity
    #[must_use]
    pub fn with_node_capacity(self, node_capacity: usize) -> Self {
        Self {
            node_capacity,
            ..self
        }
    }
}

//! Algorithms written against the traversal capability contract.
//!
//! Each algorithm takes any graph implementing [`Successors`](crate::graph::Successors),
//! so the same code runs over forward, bidirectional and mutable-edge graphs,
//! and backwards over an [`Inverse`](crate::graph::Inverse) view.
//!
//! | Algorithm | Time | Result |
//! |-----------|------|--------|
//! | [`dfs`] / [`bfs`] | O(V + E) | lazy iterator |
//! | [`postorder`] / [`reverse_postorder`] | O(V + E) | `Vec<NodeId>` |
//! | [`reachable`] | O(V + E) | table indexed by handle |
//! | [`is_reachable`] | O(V + E) | stops at the target |

mod reachability;
mod traversal;

pub use reachability::{is_reachable, reachable};
pub use traversal::{bfs, dfs, postorder, reverse_postorder, BfsIterator, DfsIterator};

// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # gengraph
//!
//! An in-memory directed graph for intermediate representations that are
//! built and consumed within a single analysis pass: control-flow graphs,
//! call graphs, dependency graphs.
//!
//! ## Features
//!
//! - **Three node representations** - successor-only, bidirectional with label
//!   copies, and bidirectional with one shared label per edge
//! - **Arena ownership** - the graph owns every node; nodes and edges refer to
//!   each other through stable [`NodeId`] handles
//! - **Synchronized edges** - mutable-edge graphs add and remove both halves of
//!   an edge together and reject duplicate edges
//! - **One algorithm, every representation** - traversals are written against
//!   the [`Successors`] / [`Predecessors`] contract and run backwards through
//!   [`Inverse`]
//!
//! ## Quick Start
//!
//! ```rust
//! use gengraph::prelude::*;
//!
//! let mut graph: GenericGraph<MutableEdgeNode<&str, u32>> = GenericGraph::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! graph.add_labeled_successor(a, b, 10);
//! graph.add_labeled_successor(b, c, 20);
//!
//! assert_eq!(graph[a].successor_count(), 1);
//! assert_eq!(graph[b].predecessor_count(), 1);
//!
//! graph.remove_node(b);
//! assert!(!graph[a].has_successors());
//! assert!(!graph[c].has_predecessors());
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - node kinds, the [`GenericGraph`] container and the traversal contract
//! - [`algorithms`] - traversals written against the contract
//! - [`config`] - [`GraphConfig`] presets
//! - [`diagnostics`] - the fatal-abort path and the verbose logging query
//! - [`Error`] and [`Result`] - invariant violations
//!
//! ## Error Handling
//!
//! Misusing a graph (adding a duplicate mutable edge, removing an edge whose
//! mirrored half is gone, passing a handle of a removed node) is a programming
//! error. Such calls abort through [`diagnostics::abort`], which logs the
//! violation and panics. They never return an [`Error`]; only
//! [`GenericGraph::verify`] does.
//!
//! ## Logging
//!
//! Events go through `tracing` under the `gengraph` target. The crate never
//! installs a subscriber. Run with `RUST_LOG=gengraph=trace` (and a subscriber
//! that reads it) to see every structural mutation.

#[macro_use]
pub(crate) mod macros;

pub(crate) mod error;

/// Graph configuration presets.
pub mod config;

/// The fatal-abort path and the verbose logging query.
pub mod diagnostics;

/// Node kinds, the owning container and the traversal capability contract.
pub mod graph;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use gengraph::prelude::*;
///
/// let mut graph: GenericGraph<ForwardNode<u32>> = GenericGraph::new();
/// let entry = graph.add_node(0);
/// graph.set_entry_node(entry);
/// assert_eq!(graph.entry(), entry);
/// ```
pub mod prelude;

pub use graph::algorithms;

/// `gengraph` Result type
///
/// Returned only by [`GenericGraph::verify`].
pub type Result<T> = std::result::Result<T, Error>;

/// `gengraph` Error type
///
/// Describes a broken graph invariant. See [`diagnostics`] for how violations
/// detected during mutation are reported.
pub use error::Error;

pub use config::GraphConfig;
pub use graph::{
    BidirectionalNode, Capabilities, Direction, Edge, EdgeId, EdgeRef, ForwardNode, GenericGraph,
    GraphBase, GraphId, GraphNode, Inverse, LabeledGraph, MutableEdgeNode, NodeId, NodeKind,
    NodeLink, PredecessorEdges, Predecessors, RootedGraph, SuccessorEdges, Successors,
};

//! Structural consistency checks.
//!
//! [`GenericGraph::verify`] runs [`verify_links`] for every node kind and
//! [`verify_mirrors`] for mutable-edge graphs. When verbose logging is enabled
//! each checked node is dumped at `trace` level first.

use std::collections::HashSet;

use crate::{
    diagnostics::{verbose_enabled, LOG_TARGET},
    graph::{Direction, GenericGraph, GraphNode, MutableEdgeNode, NodeId},
    Error, Result,
};

/// Checks that every node's back-reference names this graph and its handle.
pub(crate) fn verify_links<N: GraphNode>(graph: &GenericGraph<N>) -> Result<()> {
    let verbose = verbose_enabled();
    for (id, node) in graph.nodes() {
        if verbose {
            tracing::trace!(
                target: LOG_TARGET,
                graph = %graph.id(),
                node = %id,
                kind = %N::KIND,
                edges = node.edge_records(),
                "verifying node"
            );
        }

        match node.link() {
            Some(link) if link.graph == graph.id() && link.node == id => {}
            link => {
                return Err(Error::WrongParent {
                    node: id,
                    expected: graph.id(),
                    found: link.map(|link| link.graph),
                })
            }
        }
    }
    Ok(())
}

/// Checks the two-halves and single-edge invariants of a mutable-edge graph.
///
/// Every record must name a live neighbor and a live label, every successor
/// record must have exactly one predecessor record mirroring it (and vice
/// versa), no ordered pair may be connected twice, and the number of live
/// labels must equal the number of edges.
pub(crate) fn verify_mirrors<T, L>(graph: &GenericGraph<MutableEdgeNode<T, L>>) -> Result<()> {
    let mut successor_records = 0;

    for (id, node) in graph.nodes() {
        for direction in [Direction::Successor, Direction::Predecessor] {
            let mut seen: HashSet<NodeId> = HashSet::new();

            for record in node.records(direction) {
                let Some(far) = graph.node(record.neighbor) else {
                    return Err(Error::DanglingEdge {
                        node: id,
                        neighbor: record.neighbor,
                        direction,
                    });
                };
                if !graph.labels.contains(record.label) {
                    return Err(Error::InvalidLabel(record.label));
                }
                if !seen.insert(record.neighbor) {
                    let (from, to) = match direction {
                        Direction::Successor => (id, record.neighbor),
                        Direction::Predecessor => (record.neighbor, id),
                    };
                    return Err(Error::DuplicateEdge { from, to });
                }

                let mirrors = far
                    .records(direction.flip())
                    .iter()
                    .filter(|mirror| mirror.neighbor == id && mirror.label == record.label)
                    .count();
                if mirrors != 1 {
                    return Err(Error::MissingMirror {
                        node: id,
                        neighbor: record.neighbor,
                        direction,
                    });
                }
            }
        }
        successor_records += node.successor_count();
    }

    if successor_records != graph.labels.len() {
        // a live label without an edge: report the first orphan
        let used: HashSet<_> = graph
            .nodes()
            .flat_map(|(_, node)| node.successor_labels())
            .collect();
        if let Some((orphan, _)) = graph.labels.iter().find(|(edge, _)| !used.contains(edge)) {
            return Err(Error::InvalidLabel(orphan));
        }
    }
    Ok(())
}

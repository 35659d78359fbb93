//! Reachability queries.

use crate::graph::{algorithms::dfs, NodeId, Successors};

/// Returns a table indexed by [`NodeId::index`] marking every node reachable
/// from `start`, `start` included.
///
/// The table has [`GraphBase::node_bound`](crate::graph::GraphBase::node_bound)
/// entries. It is all `false` if `start` is not in the graph.
pub fn reachable<G: Successors>(graph: &G, start: NodeId) -> Vec<bool> {
    let mut table = vec![false; graph.node_bound()];
    for node in dfs(graph, start) {
        table[node.index()] = true;
    }
    table
}

/// Returns `true` if a path leads from `from` to `to`.
///
/// Every node reaches itself. Stops as soon as `to` is found.
///
/// # Examples
///
/// ```rust
/// use gengraph::{algorithms::is_reachable, GenericGraph, Inverse, MutableEdgeNode};
///
/// let mut graph: GenericGraph<MutableEdgeNode<u32>> = GenericGraph::new();
/// let entry = graph.add_node(0);
/// let exit = graph.add_node(1);
/// graph.add_successor(entry, exit);
///
/// assert!(is_reachable(&graph, entry, exit));
/// assert!(!is_reachable(&graph, exit, entry));
/// assert!(is_reachable(&Inverse::new(&graph), exit, entry));
/// ```
pub fn is_reachable<G: Successors>(graph: &G, from: NodeId, to: NodeId) -> bool {
    dfs(graph, from).any(|node| node == to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{BidirectionalNode, GenericGraph, Inverse};

    fn chain_with_island() -> (GenericGraph<BidirectionalNode<u8>>, Vec<NodeId>) {
        let mut graph: GenericGraph<BidirectionalNode<u8>> = GenericGraph::new();
        let ids: Vec<NodeId> = (0..4).map(|n| graph.add_node(n)).collect();
        graph.add_successor(ids[0], ids[1]);
        graph.add_successor(ids[1], ids[2]);
        (graph, ids)
    }

    #[test]
    fn test_reachable_table() {
        let (graph, ids) = chain_with_island();
        let table = reachable(&graph, ids[1]);
        assert_eq!(table, vec![false, true, true, false]);
    }

    #[test]
    fn test_reachable_backwards() {
        let (graph, ids) = chain_with_island();
        let table = reachable(&Inverse::new(&graph), ids[1]);
        assert_eq!(table, vec![true, true, false, false]);
    }

    #[test]
    fn test_is_reachable() {
        let (graph, ids) = chain_with_island();
        assert!(is_reachable(&graph, ids[0], ids[2]));
        assert!(is_reachable(&graph, ids[3], ids[3]));
        assert!(!is_reachable(&graph, ids[2], ids[0]));
        assert!(!is_reachable(&graph, ids[0], ids[3]));
    }

    #[test]
    fn test_unknown_start() {
        let (graph, _) = chain_with_island();
        assert!(reachable(&graph, NodeId::new(17)).iter().all(|&r| !r));
        assert!(!is_reachable(&graph, NodeId::new(17), NodeId::new(17)));
    }
}

//! Depth-first and breadth-first traversal.
//!
//! [`dfs`] and [`bfs`] are lazy iterators; [`postorder`] and
//! [`reverse_postorder`] collect, since they need the full traversal anyway.
//! Visited tables are indexed by [`NodeId::index`] and sized by
//! [`GraphBase::node_bound`](crate::graph::GraphBase::node_bound), so graphs
//! with removed nodes are handled without remapping handles.
//!
//! A start node that is not in the graph yields an empty traversal. Following
//! an edge into a node that is no longer in the graph (possible after removing
//! a forward or bidirectional node) aborts.

use std::collections::VecDeque;

use crate::graph::{GraphBase, NodeId, Successors};

/// Per-handle visited set of one traversal.
struct Visited {
    seen: Vec<bool>,
}

impl Visited {
    /// Table sized for `graph`, or `None` if `start` is not one of its nodes.
    fn rooted<G: GraphBase>(graph: &G, start: NodeId) -> Option<Self> {
        graph.contains_node(start).then(|| Visited {
            seen: vec![false; graph.node_bound()],
        })
    }

    fn empty() -> Self {
        Visited { seen: Vec::new() }
    }

    fn contains(&self, node: NodeId) -> bool {
        self.seen[node.index()]
    }

    /// Marks `node` and returns `true` if it was not marked before.
    fn insert(&mut self, node: NodeId) -> bool {
        !std::mem::replace(&mut self.seen[node.index()], true)
    }
}

/// Depth-first pre-order iterator.
///
/// Visits each node reachable from the start exactly once, a node before its
/// descendants, successors in edge-list order.
pub struct DfsIterator<'g, G: Successors> {
    graph: &'g G,
    pending: Vec<NodeId>,
    visited: Visited,
}

impl<G: Successors> Iterator for DfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.pending.pop()?;
            if !self.visited.insert(node) {
                continue;
            }

            // pushed in reverse so the first successor comes out next
            let mark = self.pending.len();
            self.pending.extend(
                self.graph
                    .successors(node)
                    .filter(|&succ| !self.visited.contains(succ)),
            );
            self.pending[mark..].reverse();
            return Some(node);
        }
    }
}

/// Returns a depth-first iterator starting at `start`.
///
/// # Complexity
///
/// O(V + E) time, O(V) space.
///
/// # Examples
///
/// ```rust
/// use gengraph::{algorithms::dfs, ForwardNode, GenericGraph, NodeId};
///
/// let mut graph: GenericGraph<ForwardNode<&str>> = GenericGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// graph.add_successor(a, b);
/// graph.add_successor(b, c);
///
/// let reachable: Vec<NodeId> = dfs(&graph, a).collect();
/// assert_eq!(reachable, vec![a, b, c]);
/// ```
pub fn dfs<G: Successors>(graph: &G, start: NodeId) -> DfsIterator<'_, G> {
    match Visited::rooted(graph, start) {
        Some(visited) => DfsIterator {
            graph,
            pending: vec![start],
            visited,
        },
        None => DfsIterator {
            graph,
            pending: Vec::new(),
            visited: Visited::empty(),
        },
    }
}

/// Breadth-first iterator.
///
/// Visits all nodes at distance d from the start before any node at d + 1.
pub struct BfsIterator<'g, G: Successors> {
    graph: &'g G,
    frontier: VecDeque<NodeId>,
    visited: Visited,
}

impl<G: Successors> Iterator for BfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.frontier.pop_front()?;
        let visited = &mut self.visited;
        self.frontier
            .extend(self.graph.successors(node).filter(|&succ| visited.insert(succ)));
        Some(node)
    }
}

/// Returns a breadth-first iterator starting at `start`.
///
/// # Complexity
///
/// O(V + E) time, O(V) space.
pub fn bfs<G: Successors>(graph: &G, start: NodeId) -> BfsIterator<'_, G> {
    let mut frontier = VecDeque::new();
    let visited = match Visited::rooted(graph, start) {
        Some(mut visited) => {
            visited.insert(start);
            frontier.push_back(start);
            visited
        }
        None => Visited::empty(),
    };
    BfsIterator {
        graph,
        frontier,
        visited,
    }
}

/// Returns the nodes reachable from `start` in postorder: every node after all
/// of its descendants.
pub fn postorder<G: Successors>(graph: &G, start: NodeId) -> Vec<NodeId> {
    let Some(mut visited) = Visited::rooted(graph, start) else {
        return Vec::new();
    };
    let children = |node: NodeId| graph.successors(node).collect::<Vec<_>>().into_iter();

    visited.insert(start);
    let mut order = Vec::with_capacity(graph.node_count());
    let mut frames = vec![(start, children(start))];

    // each frame is a node and the successors it has not descended into yet
    while let Some((node, rest)) = frames.last_mut() {
        match rest.find(|&succ| visited.insert(succ)) {
            Some(succ) => frames.push((succ, children(succ))),
            None => {
                order.push(*node);
                frames.pop();
            }
        }
    }
    order
}

/// Returns the nodes reachable from `start` in reverse postorder: in an acyclic
/// graph, every node before its successors.
///
/// # Examples
///
/// ```rust
/// use gengraph::{algorithms::reverse_postorder, GenericGraph, MutableEdgeNode};
///
/// let mut graph: GenericGraph<MutableEdgeNode<&str>> = GenericGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// graph.add_successor(a, b);
/// graph.add_successor(b, c);
///
/// assert_eq!(reverse_postorder(&graph, a), vec![a, b, c]);
/// ```
pub fn reverse_postorder<G: Successors>(graph: &G, start: NodeId) -> Vec<NodeId> {
    let mut result = postorder(graph, start);
    result.reverse();
    result
}

#[cfg(test)]
mod tests {
    use crate::graph::{
        algorithms::traversal::{bfs, dfs, postorder, reverse_postorder},
        ForwardNode, GenericGraph, MutableEdgeNode, NodeId,
    };

    type Cfg = GenericGraph<ForwardNode<&'static str>>;

    fn build(blocks: &[&'static str], edges: &[(usize, usize)]) -> (Cfg, Vec<NodeId>) {
        let mut graph = Cfg::new();
        let ids: Vec<NodeId> = blocks.iter().map(|&name| graph.add_node(name)).collect();
        for &(from, to) in edges {
            graph.add_successor(ids[from], ids[to]);
        }
        (graph, ids)
    }

    /// `if (cond) { then } else { else }` followed by a join block.
    fn if_else() -> (Cfg, Vec<NodeId>) {
        build(
            &["cond", "then", "else", "join"],
            &[(0, 1), (0, 2), (1, 3), (2, 3)],
        )
    }

    /// `while (header) { body; latch }` with a single exit from the header.
    fn while_loop() -> (Cfg, Vec<NodeId>) {
        build(
            &["entry", "header", "body", "latch", "exit"],
            &[(0, 1), (1, 2), (2, 3), (3, 1), (1, 4)],
        )
    }

    /// A switch on `dispatch` whose arms all fall into `ret`.
    fn switch() -> (Cfg, Vec<NodeId>) {
        build(
            &["dispatch", "case0", "case1", "default", "ret"],
            &[(0, 1), (0, 2), (0, 3), (1, 4), (2, 4), (3, 4)],
        )
    }

    fn rank(order: &[NodeId], node: NodeId) -> usize {
        order.iter().position(|&n| n == node).unwrap()
    }

    #[test]
    fn test_dfs_takes_then_branch_first() {
        let (graph, ids) = if_else();
        let order: Vec<NodeId> = dfs(&graph, ids[0]).collect();
        assert_eq!(order, vec![ids[0], ids[1], ids[3], ids[2]]);
    }

    #[test]
    fn test_dfs_visits_loop_once() {
        let (graph, ids) = while_loop();
        let order: Vec<NodeId> = dfs(&graph, ids[0]).collect();
        assert_eq!(order, vec![ids[0], ids[1], ids[2], ids[3], ids[4]]);
    }

    #[test]
    fn test_dfs_skips_unreachable_blocks() {
        let (graph, ids) = build(&["entry", "ret", "dead"], &[(0, 1), (2, 1)]);
        let order: Vec<NodeId> = dfs(&graph, ids[0]).collect();
        assert_eq!(order, vec![ids[0], ids[1]]);
    }

    #[test]
    fn test_start_outside_graph_is_empty() {
        let (graph, _) = if_else();
        let unknown = NodeId::new(10);
        assert_eq!(dfs(&graph, unknown).count(), 0);
        assert_eq!(bfs(&graph, unknown).count(), 0);
        assert!(postorder(&graph, unknown).is_empty());
        assert!(reverse_postorder(&graph, unknown).is_empty());
    }

    #[test]
    fn test_removed_mutable_node_is_skipped() {
        let mut graph: GenericGraph<MutableEdgeNode<&str>> = GenericGraph::new();
        let cond = graph.add_node("cond");
        let then = graph.add_node("then");
        let other = graph.add_node("else");
        graph.add_successor(cond, then);
        graph.add_successor(cond, other);
        graph.remove_node(then);

        assert_eq!(dfs(&graph, cond).collect::<Vec<_>>(), vec![cond, other]);
        assert_eq!(dfs(&graph, then).count(), 0);
    }

    #[test]
    #[should_panic(expected = "node n1 does not exist in this graph")]
    fn test_traversal_into_removed_forward_node() {
        let (mut graph, ids) = if_else();
        graph.remove_node(ids[1]);
        let _ = dfs(&graph, ids[0]).count();
    }

    #[test]
    fn test_bfs_by_distance() {
        let (graph, ids) = switch();
        let order: Vec<NodeId> = bfs(&graph, ids[0]).collect();
        assert_eq!(order, ids);

        let (graph, ids) = while_loop();
        let order: Vec<NodeId> = bfs(&graph, ids[0]).collect();
        assert_eq!(order, vec![ids[0], ids[1], ids[2], ids[4], ids[3]]);
    }

    #[test]
    fn test_postorder_puts_arms_before_dispatch() {
        let (graph, ids) = switch();
        let order = postorder(&graph, ids[0]);

        assert_eq!(order.len(), 5);
        assert_eq!(order.first(), Some(&ids[4]));
        assert_eq!(order.last(), Some(&ids[0]));
        for arm in &ids[1..4] {
            assert!(rank(&order, ids[4]) < rank(&order, *arm));
        }
    }

    #[test]
    fn test_reverse_postorder_if_else() {
        let (graph, ids) = if_else();
        assert_eq!(
            reverse_postorder(&graph, ids[0]),
            vec![ids[0], ids[2], ids[1], ids[3]]
        );
    }

    #[test]
    fn test_reverse_postorder_loop_header_precedes_body() {
        let (graph, ids) = while_loop();
        let order = reverse_postorder(&graph, ids[0]);
        assert_eq!(order.len(), 5);
        assert!(rank(&order, ids[1]) < rank(&order, ids[2]));
        assert!(rank(&order, ids[2]) < rank(&order, ids[3]));
    }

    #[test]
    fn test_self_loop_block() {
        let (graph, ids) = build(&["spin"], &[(0, 0)]);
        let spin = ids[0];
        assert_eq!(dfs(&graph, spin).collect::<Vec<_>>(), vec![spin]);
        assert_eq!(bfs(&graph, spin).collect::<Vec<_>>(), vec![spin]);
        assert_eq!(postorder(&graph, spin), vec![spin]);
    }

    #[test]
    fn test_dfs_is_lazy() {
        let (graph, ids) = switch();
        let first: Vec<NodeId> = dfs(&graph, ids[0]).take(2).collect();
        assert_eq!(first, vec![ids[0], ids[1]]);
    }
}

//! Benchmarks for graph construction, traversal and teardown.
//!
//! Measures the hot paths of the three node kinds:
//! - Edge insertion (forward, bidirectional, mutable-edge)
//! - Depth-first and reverse-postorder traversal
//! - Mutable-edge disconnect and cascading node removal

extern crate gengraph;

use criterion::{criterion_group, criterion_main, Criterion};
use gengraph::{
    algorithms, BidirectionalNode, ForwardNode, GenericGraph, GraphConfig, MutableEdgeNode,
    NodeId,
};
use std::hint::black_box;

/// Nodes in the generated control-flow shape.
const NODES: usize = 512;

/// Chain with a back edge every 8 nodes and a forward skip every 3.
fn shape() -> Vec<(usize, usize)> {
    let mut edges = Vec::with_capacity(NODES * 3);
    for n in 0..NODES - 1 {
        edges.push((n, n + 1));
        if n % 8 == 7 {
            edges.push((n, n - 7));
        }
        if n % 3 == 0 && n + 2 < NODES {
            edges.push((n, n + 2));
        }
    }
    edges
}

fn mutable_graph(edges: &[(usize, usize)]) -> (GenericGraph<MutableEdgeNode<usize, u32>>, Vec<NodeId>) {
    let mut graph: GenericGraph<MutableEdgeNode<usize, u32>> =
        GenericGraph::with_config(GraphConfig::fast().with_node_capacity(NODES));
    let ids: Vec<NodeId> = (0..NODES).map(|n| graph.add_node(n)).collect();
    for &(from, to) in edges {
        graph.add_labeled_successor(ids[from], ids[to], from as u32);
    }
    (graph, ids)
}

/// Benchmark building a forward graph.
fn bench_build_forward(c: &mut Criterion) {
    let edges = shape();

    c.bench_function("graph_build_forward", |b| {
        b.iter(|| {
            let mut graph: GenericGraph<ForwardNode<usize, u32>> =
                GenericGraph::with_config(GraphConfig::fast().with_node_capacity(NODES));
            let ids: Vec<NodeId> = (0..NODES).map(|n| graph.add_node(n)).collect();
            for &(from, to) in black_box(&edges) {
                graph.add_labeled_successor(ids[from], ids[to], from as u32);
            }
            black_box(graph)
        });
    });
}

/// Benchmark building a bidirectional graph, which copies each label.
fn bench_build_bidirectional(c: &mut Criterion) {
    let edges = shape();

    c.bench_function("graph_build_bidirectional", |b| {
        b.iter(|| {
            let mut graph: GenericGraph<BidirectionalNode<usize, u32>> =
                GenericGraph::with_config(GraphConfig::fast().with_node_capacity(NODES));
            let ids: Vec<NodeId> = (0..NODES).map(|n| graph.add_node(n)).collect();
            for &(from, to) in black_box(&edges) {
                graph.add_labeled_successor(ids[from], ids[to], from as u32);
            }
            black_box(graph)
        });
    });
}

/// Benchmark building a mutable-edge graph, including the duplicate check.
fn bench_build_mutable(c: &mut Criterion) {
    let edges = shape();

    c.bench_function("graph_build_mutable", |b| {
        b.iter(|| black_box(mutable_graph(black_box(&edges))));
    });
}

/// Benchmark a full depth-first walk.
fn bench_dfs(c: &mut Criterion) {
    let (graph, ids) = mutable_graph(&shape());

    c.bench_function("graph_dfs", |b| {
        b.iter(|| black_box(algorithms::dfs(&graph, black_box(ids[0])).count()));
    });
}

/// Benchmark reverse postorder, the usual dataflow iteration order.
fn bench_reverse_postorder(c: &mut Criterion) {
    let (graph, ids) = mutable_graph(&shape());

    c.bench_function("graph_reverse_postorder", |b| {
        b.iter(|| black_box(algorithms::reverse_postorder(&graph, black_box(ids[0]))));
    });
}

/// Benchmark disconnecting every node of a mutable-edge graph.
fn bench_disconnect_all(c: &mut Criterion) {
    let edges = shape();

    c.bench_function("graph_disconnect_all", |b| {
        b.iter_batched(
            || mutable_graph(&edges),
            |(mut graph, ids)| {
                let mut removed = 0;
                for id in ids {
                    removed += graph.disconnect(id);
                }
                black_box(removed)
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

/// Benchmark removing every other node, which cascades edge removal.
fn bench_remove_nodes(c: &mut Criterion) {
    let edges = shape();

    c.bench_function("graph_remove_nodes", |b| {
        b.iter_batched(
            || mutable_graph(&edges),
            |(mut graph, ids)| {
                for &id in ids.iter().step_by(2) {
                    black_box(graph.remove_node(id));
                }
                black_box(graph.edge_count())
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_build_forward,
    bench_build_bidirectional,
    bench_build_mutable,
    bench_dfs,
    bench_reverse_postorder,
    bench_disconnect_all,
    bench_remove_nodes,
);
criterion_main!(benches);

//! Benchmarks for the traversal and path-enumeration core.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use trellis_core::{find_paths, traverse, Graph, Mode, PathReturn};

/// Ring of `n` nodes with chords every `stride` nodes.
fn chorded_ring(n: usize, stride: usize) -> Graph<usize> {
    let mut edges = Vec::new();
    for i in 0..n {
        edges.push((i, (i + 1) % n));
        if stride > 1 {
            edges.push((i, (i + stride) % n));
        }
    }
    Graph::from_edges(edges)
}

fn bench_traverse(c: &mut Criterion) {
    let graph = chorded_ring(1000, 7);

    c.bench_function("traverse_breadth_1k", |b| {
        b.iter(|| traverse(black_box(&graph), &0, Mode::Breadth).unwrap());
    });
    c.bench_function("traverse_depth_1k", |b| {
        b.iter(|| traverse(black_box(&graph), &0, Mode::Depth).unwrap());
    });
}

fn bench_find_paths(c: &mut Criterion) {
    let graph = chorded_ring(40, 5);

    c.bench_function("find_paths_shortest_ring", |b| {
        b.iter(|| find_paths(black_box(&graph), &0, &20, PathReturn::Shortest).unwrap());
    });
}

criterion_group!(benches, bench_traverse, bench_find_paths);
criterion_main!(benches);

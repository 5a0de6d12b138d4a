// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `sprig_tree` layout, hit testing and subtree removal on
//! large synthetic trees.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use sprig_tree::{Node, NodeId, NodeKind, Tree, hit_test, layout};

/// Seeded index picker so every run builds the same trees.
struct Lcg(u64);

impl Lcg {
    /// Next index in `0..len` (always `0` when `len` is `0`).
    fn pick(&mut self, len: usize) -> usize {
        // Knuth's MMIX constants.
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 33) as usize % len.max(1)
    }
}

/// A random tree of `n` nodes where every node picks an earlier node as parent.
fn build_tree(n: usize, seed: u64) -> (Tree, Vec<NodeId>) {
    let mut rng = Lcg(seed);
    let mut tree = Tree::new(Node::new("root", NodeKind::Start));
    let mut ids = vec![tree.root()];
    for i in 1..n {
        let parent = ids[rng.pick(ids.len())];
        let kind = NodeKind::ALL[i % NodeKind::ALL.len()];
        let id = tree
            .attach_branch(parent, Node::new(kind.default_label(), kind))
            .expect("parent is live");
        ids.push(id);
    }
    layout::initial_layout(&mut tree, ids[0], Point::new(600.0, 100.0), 300.0, 150.0);
    (tree, ids)
}

fn bench_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("sprig_tree");
    group.sample_size(50);

    for &n in &[256_usize, 4_096_usize] {
        group.bench_function(format!("initial_layout(n={n})"), |b| {
            b.iter_batched(
                || build_tree(n, 0x5921_0000_0000_0001),
                |(mut tree, ids)| {
                    layout::initial_layout(
                        &mut tree,
                        ids[0],
                        Point::new(600.0, 100.0),
                        300.0,
                        150.0,
                    );
                    black_box(tree);
                },
                BatchSize::LargeInput,
            );
        });

        let (tree, ids) = build_tree(n, 0x5921_0000_0000_0002);
        let root = tree.root();
        let mut rng = Lcg(7);
        let probes: Vec<Point> = (0..64)
            .map(|_| {
                let target = ids[rng.pick(ids.len())];
                tree.get(target).map(|node| node.position).unwrap_or(Point::ZERO)
            })
            .collect();

        group.bench_function(format!("hit_test_hits(n={n})"), |b| {
            b.iter(|| {
                let found = probes
                    .iter()
                    .filter(|&&pt| hit_test::hit_test(&tree, root, pt, 30.0).is_some())
                    .count();
                black_box(found);
            });
        });

        group.bench_function(format!("hit_test_miss(n={n})"), |b| {
            b.iter(|| {
                black_box(hit_test::hit_test(
                    &tree,
                    root,
                    Point::new(-10_000.0, -10_000.0),
                    30.0,
                ));
            });
        });

        group.bench_function(format!("remove_first_branch(n={n})"), |b| {
            b.iter_batched(
                || build_tree(n, 0x5921_0000_0000_0003),
                |(mut tree, ids)| {
                    let first = tree.connections(ids[0]).first().map(|c| c.child);
                    if let Some(child) = first {
                        black_box(tree.remove(child).ok());
                    }
                    black_box(tree);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("move_subtree_to(n={n})"), |b| {
            b.iter_batched(
                || build_tree(n, 0x5921_0000_0000_0004),
                |(mut tree, ids)| {
                    black_box(tree.move_subtree_to(ids[0], Point::new(10.0, 10.0)));
                    black_box(tree);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tree);
criterion_main!(benches);

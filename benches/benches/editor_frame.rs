// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for one editor frame (update then draw) on wide trees.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use sprig_editor::input::{FrameInput, PointerButtons};
use sprig_editor::{Editor, EditorConfig};
use sprig_render_ref::Recorder;
use sprig_tree::{Node, NodeKind, Tree, layout};

/// A condition ladder `depth` levels deep where every condition has two branches.
fn ladder(depth: usize) -> Editor {
    let mut tree = Tree::new(Node::new("Start", NodeKind::Start));
    let root = tree.root();
    let mut tip = root;
    for level in 0..depth {
        let cond = tree
            .attach_branch(tip, Node::new(format!("q{level}"), NodeKind::Condition))
            .expect("tip is live");
        tree.attach_branch(cond, Node::new("act", NodeKind::Action))
            .expect("cond is live");
        tip = tree
            .attach_branch(cond, Node::new("next", NodeKind::Action))
            .expect("cond is live");
    }
    layout::initial_layout(&mut tree, root, Point::new(600.0, 100.0), 300.0, 150.0);
    Editor::from_tree(tree, EditorConfig::default())
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("sprig_editor");

    for &depth in &[32_usize, 512_usize] {
        let mut editor = ladder(depth);
        let hover = FrameInput::at((600.0, 100.0));
        group.bench_function(format!("update_hover(depth={depth})"), |b| {
            b.iter(|| {
                editor.update(1.0 / 60.0, black_box(&hover), false);
            });
        });

        let mut editor = ladder(depth);
        let root_at = Point::new(600.0, 100.0);
        editor.update(
            0.0,
            &FrameInput::at(root_at).press(PointerButtons::PRIMARY),
            false,
        );
        let mut x = 0.0;
        group.bench_function(format!("update_drag_root(depth={depth})"), |b| {
            b.iter(|| {
                x += 1.0;
                let input = FrameInput::at((600.0 + x % 100.0, 100.0)).hold(PointerButtons::PRIMARY);
                editor.update(1.0 / 60.0, &input, false);
            });
        });

        let editor = ladder(depth);
        let mut recorder = Recorder::new();
        group.bench_function(format!("draw(depth={depth})"), |b| {
            b.iter(|| {
                recorder.clear();
                editor.draw(&mut recorder);
                black_box(recorder.events().len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);

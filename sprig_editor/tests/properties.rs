// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end editing scenarios driven through `Editor::update`.

use kurbo::{Point, Vec2};
use sprig_editor::input::{FrameInput, Keys, PointerButtons};
use sprig_editor::{Editor, EditorConfig, Interaction};
use sprig_tree::{Node, NodeId, NodeKind, Tree, hit_test, layout};

const DT: f64 = 1.0 / 60.0;

fn click(editor: &mut Editor, at: Point, button: PointerButtons) {
    editor.update(DT, &FrameInput::at(at).press(button), false);
    editor.update(DT, &FrameInput::at(at).release(button), false);
}

fn position(editor: &Editor, id: NodeId) -> Point {
    editor.tree().get(id).unwrap().position
}

/// Start → check(cond) → { Yes: a → { a1, a2 }, No: b → b1 }, laid out.
fn branching() -> (Editor, Vec<NodeId>) {
    let mut tree = Tree::new(Node::new("start", NodeKind::Start));
    let root = tree.root();
    let check = tree.attach_branch(root, Node::new("check", NodeKind::Condition)).unwrap();
    let a = tree.attach_branch(check, Node::new("a", NodeKind::Action)).unwrap();
    let a1 = tree.attach_branch(a, Node::new("a1", NodeKind::Action)).unwrap();
    let a2 = tree.attach_branch(a, Node::new("a2", NodeKind::End)).unwrap();
    let b = tree.attach_branch(check, Node::new("b", NodeKind::Action)).unwrap();
    let b1 = tree.attach_branch(b, Node::new("b1", NodeKind::End)).unwrap();
    layout::initial_layout(&mut tree, root, Point::new(600.0, 100.0), 300.0, 150.0);
    let editor = Editor::from_tree(tree, EditorConfig::default());
    (editor, vec![root, check, a, a1, a2, b, b1])
}

#[test]
fn deleting_any_node_removes_exactly_its_subtree() {
    let (pristine, ids) = branching();
    for &target in &ids[1..] {
        let (mut editor, _) = branching();
        let subtree: Vec<NodeId> = pristine.tree().pre_order(target).collect();
        let parent = pristine.tree().parent(target).unwrap();

        editor.select(Some(target));
        assert!(editor.delete_selected());
        assert_eq!(editor.selected(), None);

        for &id in &ids {
            let before = pristine.tree().connections(id);
            if subtree.contains(&id) {
                assert!(editor.tree().get(id).is_none());
            } else if id == parent {
                let after = editor.tree().connections(id);
                assert_eq!(after.len() + 1, before.len());
                assert!(after.iter().all(|c| c.child != target));
            } else {
                assert_eq!(editor.tree().connections(id), before);
            }
        }
    }
}

#[test]
fn hit_test_boundary() {
    let editor = Editor::new();
    let root = editor.root();
    let center = position(&editor, root);
    assert_eq!(hit_test::hit_test(editor.tree(), root, center, 30.0), Some(root));
    assert_eq!(
        hit_test::hit_test(editor.tree(), root, Point::new(-10000.0, -10000.0), 30.0),
        None
    );
    // The box edge itself is outside.
    let edge = center + Vec2::new(30.0, 0.0);
    assert_eq!(hit_test::hit_test(editor.tree(), root, edge, 30.0), None);
}

#[test]
fn dragging_moves_subtree_rigidly() {
    let (mut editor, ids) = branching();
    let [root, check, a, a1, a2, b, b1] = ids[..] else {
        unreachable!()
    };
    let before: Vec<Point> = ids.iter().map(|&id| position(&editor, id)).collect();

    let grab = position(&editor, a) + Vec2::new(3.0, -4.0);
    editor.update(DT, &FrameInput::at(grab).press(PointerButtons::PRIMARY), false);
    assert_eq!(editor.selected(), Some(a));

    let delta = Vec2::new(42.0, -17.5);
    for step in 1..=4 {
        let at = grab + delta * (f64::from(step) / 4.0);
        editor.update(DT, &FrameInput::at(at).hold(PointerButtons::PRIMARY), false);
    }
    editor.update(
        DT,
        &FrameInput::at(grab + delta).release(PointerButtons::PRIMARY),
        false,
    );

    for (i, &id) in ids.iter().enumerate() {
        let now = position(&editor, id);
        if [a, a1, a2].contains(&id) {
            let moved = now - before[i];
            assert!((moved.x - delta.x).abs() < 1e-9 && (moved.y - delta.y).abs() < 1e-9);
        } else {
            assert_eq!(now, before[i], "{id:?} should not move");
        }
    }
    assert!([root, check, b, b1].iter().all(|&id| editor.tree().is_alive(id)));
    assert!(!editor.is_dragging());
}

#[test]
fn hover_is_idempotent() {
    let mut editor = Editor::new();
    let check = editor.tree().connections(editor.root())[0].child;
    let pointer = position(&editor, check) + Vec2::new(10.0, 10.0);

    let first = editor.refresh_hover(pointer);
    let second = editor.refresh_hover(pointer);
    assert_eq!(first, Some(check));
    assert_eq!(first, second);

    editor.update(DT, &FrameInput::at(pointer), false);
    editor.update(DT, &FrameInput::at(pointer), false);
    assert_eq!(editor.hovered(), Some(check));
    assert_eq!(editor.interaction(), Interaction::Hovering(check));
}

#[test]
fn secondary_clicks_under_condition_label_branches() {
    let mut tree = Tree::new(Node::new("Start", NodeKind::Start).at(Point::new(600.0, 100.0)));
    let root = tree.root();
    let check = tree
        .attach_branch(
            root,
            Node::new("Cond", NodeKind::Condition).at(Point::new(600.0, 250.0)),
        )
        .unwrap();
    let mut editor = Editor::from_tree(tree, EditorConfig::default());

    for _ in 0..3 {
        click(&mut editor, Point::new(600.0, 250.0), PointerButtons::SECONDARY);
    }
    let labels: Vec<&str> = editor
        .tree()
        .connections(check)
        .iter()
        .map(|c| c.label.as_str())
        .collect();
    assert_eq!(labels, ["Yes", "No", ""]);
}

#[test]
fn condition_scenario() {
    let a_pos = Point::new(600.0, 250.0);
    let mut tree = Tree::new(Node::new("Root", NodeKind::Start).at(Point::new(600.0, 100.0)));
    let root = tree.root();
    let a = tree
        .attach_branch(root, Node::new("A", NodeKind::Condition).at(a_pos))
        .unwrap();
    let mut editor = Editor::from_tree(tree, EditorConfig::default());

    click(&mut editor, a_pos, PointerButtons::SECONDARY);
    click(&mut editor, a_pos, PointerButtons::SECONDARY);
    let conns = editor.tree().connections(a);
    assert_eq!(conns.len(), 2);
    let (b, c) = (conns[0].child, conns[1].child);
    assert_eq!(conns[0].label, "Yes");
    assert_eq!(conns[1].label, "No");
    assert_eq!(position(&editor, b), a_pos + Vec2::new(50.0, 100.0));

    // Give B a child so there is a subtree to lose.
    let b_pos = position(&editor, b);
    click(&mut editor, b_pos, PointerButtons::SECONDARY);
    let grandchild = editor.tree().connections(b)[0].child;

    click(&mut editor, b_pos, PointerButtons::PRIMARY);
    assert_eq!(editor.selected(), Some(b));
    editor.update(DT, &FrameInput::at(b_pos).key(Keys::DELETE), false);

    let conns = editor.tree().connections(a);
    assert_eq!(conns.len(), 1);
    assert_eq!(conns[0].child, c);
    assert_eq!(conns[0].label, "No");
    assert!(!editor.tree().is_alive(b));
    assert!(!editor.tree().is_alive(grandchild));
    assert_eq!(editor.selected(), None);
}

#[test]
fn initial_layout_scenario() {
    let mut tree = Tree::new(Node::new("Root", NodeKind::Start));
    let root = tree.root();
    let left = tree.attach_branch(root, Node::new("L", NodeKind::Action)).unwrap();
    let right = tree.attach_branch(root, Node::new("R", NodeKind::Action)).unwrap();
    let l0 = tree.attach_branch(left, Node::new("l0", NodeKind::End)).unwrap();
    let l1 = tree.attach_branch(left, Node::new("l1", NodeKind::End)).unwrap();

    let mut config = EditorConfig::default();
    config.initial_layout.apply(&mut tree, root);
    config.hit_half_size = 10.0;
    let editor = Editor::from_tree(tree, config);

    assert_eq!(position(&editor, root), Point::new(600.0, 100.0));
    assert_eq!(position(&editor, left), Point::new(450.0, 250.0));
    assert_eq!(position(&editor, right), Point::new(750.0, 250.0));
    assert_eq!(position(&editor, l0), Point::new(375.0, 400.0));
    assert_eq!(position(&editor, l1), Point::new(525.0, 400.0));
    assert_eq!(editor.config().hit_half_size, 10.0);
}

#[test]
fn captured_frames_do_not_edit() {
    let mut editor = Editor::new();
    let root = editor.root();
    let before = editor.tree().len();
    let at = position(&editor, root);

    editor.update(
        DT,
        &FrameInput::at(at)
            .press(PointerButtons::PRIMARY | PointerButtons::SECONDARY)
            .key(Keys::BACKSPACE),
        true,
    );
    assert_eq!(editor.tree().len(), before);
    assert_eq!(editor.selected(), None);
    assert_eq!(editor.hovered(), Some(root));
    assert!(!editor.is_dragging());
}

#[test]
fn drag_survives_capture_until_release() {
    let mut editor = Editor::new();
    let root = editor.root();
    let start = position(&editor, root);
    editor.update(DT, &FrameInput::at(start).press(PointerButtons::PRIMARY), false);

    // A captured frame neither moves nor ends the drag.
    let elsewhere = start + Vec2::new(100.0, 0.0);
    editor.update(DT, &FrameInput::at(elsewhere).hold(PointerButtons::PRIMARY), true);
    assert!(editor.is_dragging());
    assert_eq!(position(&editor, root), start);

    editor.update(DT, &FrameInput::at(elsewhere).hold(PointerButtons::PRIMARY), false);
    assert_eq!(position(&editor, root), elsewhere);
}

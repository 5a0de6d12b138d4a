// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node placement: one-shot fan-out and fixed-offset insertion.
//!
//! [`initial_layout`] places a subtree in rows. Each row sits `v_spacing` below
//! its parent, and siblings are spread `h_spacing` apart, centered under the
//! parent. The horizontal spacing is halved at every level, which narrows deep
//! branches instead of widening the whole tree.
//!
//! The fan-out is meant to run once over a freshly built tree. Later insertions
//! use [`place_child`] with one of the fixed offsets so that editing never
//! moves nodes the user did not touch.
//!
//! ```
//! use kurbo::Point;
//! use sprig_tree::{Node, NodeKind, Tree, layout};
//!
//! let mut tree = Tree::new(Node::new("root", NodeKind::Start));
//! let root = tree.root();
//! let left = tree.add_child(root, Node::new("l", NodeKind::Action), "").unwrap();
//! let right = tree.add_child(root, Node::new("r", NodeKind::Action), "").unwrap();
//!
//! layout::initial_layout(&mut tree, root, Point::new(600.0, 100.0), 300.0, 150.0);
//! assert_eq!(tree.get(left).unwrap().position, Point::new(450.0, 250.0));
//! assert_eq!(tree.get(right).unwrap().position, Point::new(750.0, 250.0));
//! ```

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::{NodeId, Tree};

/// Offset of a child created by a pointer gesture on its parent.
pub const POINTER_PLACEMENT: Vec2 = Vec2::new(50.0, 100.0);

/// Offset of a child created by a host command (toolbar, menu).
pub const COMMAND_PLACEMENT: Vec2 = Vec2::new(50.0, 120.0);

/// Parameters for [`initial_layout`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutParams {
    /// Where the subtree root is placed.
    pub origin: Point,
    /// Distance between siblings in the first row; halved per level.
    pub h_spacing: f64,
    /// Distance between rows.
    pub v_spacing: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            origin: Point::new(600.0, 100.0),
            h_spacing: 300.0,
            v_spacing: 150.0,
        }
    }
}

impl LayoutParams {
    /// Lay out the subtree rooted at `id` with these parameters.
    pub fn apply(&self, tree: &mut Tree, id: NodeId) {
        initial_layout(tree, id, self.origin, self.h_spacing, self.v_spacing);
    }
}

/// Place `id` at `origin` and fan its descendants out below it.
///
/// With `k` children, child `i` lands at
/// `(origin.x - (k - 1) * h_spacing / 2 + i * h_spacing, origin.y + v_spacing)`
/// and its own children are laid out with `h_spacing / 2`.
/// Stale handles are ignored.
pub fn initial_layout(tree: &mut Tree, id: NodeId, origin: Point, h_spacing: f64, v_spacing: f64) {
    let mut pending: Vec<(NodeId, Point, f64)> = vec![(id, origin, h_spacing)];
    while let Some((id, origin, h_spacing)) = pending.pop() {
        let Some(node) = tree.get_mut(id) else {
            continue;
        };
        node.position = origin;

        let children: SmallVec<[NodeId; 4]> =
            tree.connections(id).iter().map(|c| c.child).collect();
        if children.is_empty() {
            continue;
        }
        let span = (children.len() - 1) as f64 * h_spacing;
        let start_x = origin.x - span / 2.0;
        let row_y = origin.y + v_spacing;
        for (i, child) in children.into_iter().enumerate() {
            let x = start_x + i as f64 * h_spacing;
            pending.push((child, Point::new(x, row_y), h_spacing / 2.0));
        }
    }
}

/// Position for a new child of a node at `parent`.
pub fn place_child(parent: Point, offset: Vec2) -> Point {
    parent + offset
}

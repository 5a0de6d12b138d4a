// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing boundary of the editor.
//!
//! The editor does not rasterize anything. [`Editor::draw`](crate::Editor::draw)
//! walks the tree and issues requests to a [`RenderAdapter`] supplied by the host.
//! All visual decisions beyond geometry (fill, outline, selection highlight,
//! fonts) belong to the adapter.
//!
//! ## Request order
//!
//! For each node, visited in pre-order:
//!
//! 1. For each connection, in order:
//!    - [`set_color`](RenderAdapter::set_color) with the edge color, then
//!      [`draw_bezier`](RenderAdapter::draw_bezier) from the parent to the child.
//!    - If the connection has a label: `set_color` with the label color,
//!      [`draw_text`](RenderAdapter::draw_text) at the curve's `t = 0.5` point,
//!      and `set_color` back to the edge color.
//!    - The child's subtree.
//! 2. [`draw_styled_node`](RenderAdapter::draw_styled_node) for the node itself.
//!
//! A node is therefore requested after everything below it, so it paints over
//! the edges that reach it.

use alloc::vec::Vec;

use kurbo::{CubicBez, ParamCurve, Point, Vec2};
use peniko::color::Rgba8;
use sprig_tree::{NodeId, Shape, Tree};

use crate::EditorConfig;

/// Everything an adapter needs to draw one node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StyledNode<'a> {
    /// Handle of the node being drawn.
    pub id: NodeId,
    /// Center in screen space.
    pub center: Point,
    /// Text on the node.
    pub label: &'a str,
    /// Whether this is the editor's selected node.
    pub selected: bool,
    /// Outline to draw.
    pub shape: Shape,
    /// Fill color.
    pub color: Rgba8,
    /// Current eased scale.
    pub scale: f64,
}

/// A drawing surface the editor issues requests to.
pub trait RenderAdapter {
    /// Set the color used by subsequent curve and text requests.
    fn set_color(&mut self, color: Rgba8);

    /// Stroke a cubic Bézier curve.
    fn draw_bezier(&mut self, curve: CubicBez);

    /// Draw `text` anchored at `origin`.
    fn draw_text(&mut self, origin: Point, text: &str);

    /// Draw a node with its own styling.
    fn draw_styled_node(&mut self, node: &StyledNode<'_>);
}

impl<A: RenderAdapter + ?Sized> RenderAdapter for &mut A {
    fn set_color(&mut self, color: Rgba8) {
        (**self).set_color(color);
    }

    fn draw_bezier(&mut self, curve: CubicBez) {
        (**self).draw_bezier(curve);
    }

    fn draw_text(&mut self, origin: Point, text: &str) {
        (**self).draw_text(origin, text);
    }

    fn draw_styled_node(&mut self, node: &StyledNode<'_>) {
        (**self).draw_styled_node(node);
    }
}

/// Curve for an edge from `from` to `to`.
///
/// The control points sit `curvature` below the parent and `curvature` above
/// the child.
pub fn edge_curve(from: Point, to: Point, curvature: f64) -> CubicBez {
    let bend = Vec2::new(0.0, curvature);
    CubicBez::new(from, from + bend, to - bend, to)
}

/// Where an edge label goes: the parametric midpoint of the curve.
pub fn label_anchor(curve: &CubicBez) -> Point {
    curve.eval(0.5)
}

/// Issue draw requests for the whole tree, in the order described above. Read-only.
pub fn draw_tree<A: RenderAdapter + ?Sized>(
    tree: &Tree,
    selected: Option<NodeId>,
    config: &EditorConfig,
    adapter: &mut A,
) {
    // (node, index of the next connection to draw)
    let mut stack: Vec<(NodeId, usize)> = Vec::new();
    if tree.is_alive(tree.root()) {
        stack.push((tree.root(), 0));
    }
    while let Some(top) = stack.last_mut() {
        let (id, next) = *top;
        let Some(node) = tree.get(id) else {
            stack.pop();
            continue;
        };
        if let Some(conn) = node.connections().get(next) {
            top.1 += 1;
            let Some(child) = tree.get(conn.child) else {
                continue;
            };
            let curve = edge_curve(node.position, child.position, config.edge_curvature);
            adapter.set_color(config.edge_color);
            adapter.draw_bezier(curve);
            if !conn.label.is_empty() {
                adapter.set_color(config.label_color);
                adapter.draw_text(label_anchor(&curve), &conn.label);
                adapter.set_color(config.edge_color);
            }
            stack.push((conn.child, 0));
            continue;
        }
        stack.pop();
        adapter.draw_styled_node(&StyledNode {
            id,
            center: node.position,
            label: &node.label,
            selected: selected == Some(id),
            shape: node.shape,
            color: node.color,
            scale: node.scale,
        });
    }
}

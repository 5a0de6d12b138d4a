// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: ownership, structural edits, traversal.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Vec2};
use peniko::color::Rgba8;
use smallvec::SmallVec;

use crate::types::{NodeId, NodeKind, Shape};

/// An owning, optionally labeled edge from a parent to one child.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connection {
    /// The child this connection owns.
    pub child: NodeId,
    /// Text shown at the midpoint of the edge. Empty means no label.
    pub label: String,
}

/// A typed, positioned unit of the decision tree.
#[derive(Clone, Debug)]
pub struct Node {
    /// Text displayed on the node.
    pub label: String,
    /// Outline used when drawing.
    pub shape: Shape,
    /// Fill color.
    pub color: Rgba8,
    /// Center of the node in screen space.
    pub position: Point,
    /// Current eased scale.
    pub scale: f64,
    /// Scale that [`Tree::step_scales`] eases toward.
    pub target_scale: f64,
    kind: NodeKind,
    connections: SmallVec<[Connection; 2]>,
    parent: Option<NodeId>,
}

impl Node {
    /// Create a detached node with the default style for `kind`.
    ///
    /// The node starts at the origin with a scale of `0` and a target of `1`
    /// so that it animates in once attached.
    pub fn new(label: impl Into<String>, kind: NodeKind) -> Self {
        let style = kind.style();
        Self {
            label: label.into(),
            shape: style.shape,
            color: style.color,
            position: Point::ZERO,
            scale: 0.0,
            target_scale: 1.0,
            kind,
            connections: SmallVec::new(),
            parent: None,
        }
    }

    /// Set the initial position.
    pub fn at(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// The node's kind. Fixed at construction.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Outgoing connections in order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// The owning parent, or `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Error returned by structural edits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TreeError {
    /// The handle does not refer to a live node.
    StaleNode(NodeId),
    /// The root cannot be removed.
    RootRemoval,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleNode(id) => write!(f, "node {id:?} is not alive"),
            Self::RootRemoval => f.write_str("the root node cannot be removed"),
        }
    }
}

impl core::error::Error for TreeError {}

/// Strict tree of [`Node`]s with exactly one root.
pub struct Tree {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    root: NodeId,
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("nodes_total", &self.nodes.len())
            .field("nodes_alive", &self.len())
            .field("free_list", &self.free_list.len())
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl Tree {
    /// Create a tree whose root is `root`.
    pub fn new(root: Node) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            root: NodeId::new(0, 1),
        };
        tree.root = tree.alloc(root);
        tree
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(node);
            (idx, generation)
        } else {
            self.nodes.push(Some(node));
            self.generations.push(1);
            (self.nodes.len() - 1, 1)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId indices are 32-bit."
        )]
        NodeId::new(idx as u32, generation)
    }

    /// The root node. Always alive.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    /// Always `false`: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.generations.get(id.idx()) == Some(&id.generation())
            && self.nodes.get(id.idx()).is_some_and(Option::is_some)
    }

    /// Borrow a live node.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if !self.is_alive(id) {
            return None;
        }
        self.nodes.get(id.idx()).and_then(Option::as_ref)
    }

    /// Mutably borrow a live node.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if !self.is_alive(id) {
            return None;
        }
        self.nodes.get_mut(id.idx()).and_then(Option::as_mut)
    }

    /// Parent of a live node; `None` for the root and for stale handles.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::parent)
    }

    /// Outgoing connections of `id`, or an empty slice for stale handles.
    pub fn connections(&self, id: NodeId) -> &[Connection] {
        self.get(id).map(Node::connections).unwrap_or_default()
    }

    /// Append `node` as the last child of `parent`, taking ownership of it.
    ///
    /// No duplicate check is made; every call creates a new node.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        mut node: Node,
        label: impl Into<String>,
    ) -> Result<NodeId, TreeError> {
        if !self.is_alive(parent) {
            return Err(TreeError::StaleNode(parent));
        }
        node.parent = Some(parent);
        let id = self.alloc(node);
        if let Some(p) = self.get_mut(parent) {
            p.connections.push(Connection {
                child: id,
                label: label.into(),
            });
        }
        Ok(id)
    }

    /// Append `node` under `parent`, labeling the edge with the parent kind's
    /// [branch label](NodeKind::branch_label).
    pub fn attach_branch(&mut self, parent: NodeId, node: Node) -> Result<NodeId, TreeError> {
        let label = {
            let p = self.get(parent).ok_or(TreeError::StaleNode(parent))?;
            p.kind.branch_label(p.connections.len())
        };
        self.add_child(parent, node, label)
    }

    /// Remove `id` and its whole subtree, detaching it from its parent.
    ///
    /// Descendants are released before their ancestors. Returns the number of
    /// nodes released.
    pub fn remove(&mut self, id: NodeId) -> Result<usize, TreeError> {
        if !self.is_alive(id) {
            return Err(TreeError::StaleNode(id));
        }
        if id == self.root {
            return Err(TreeError::RootRemoval);
        }
        if let Some(parent) = self.parent(id) {
            self.unlink(parent, id);
        }
        Ok(self.release(id))
    }

    fn unlink(&mut self, parent: NodeId, child: NodeId) {
        if let Some(p) = self.get_mut(parent)
            && let Some(pos) = p.connections.iter().position(|c| c.child == child)
        {
            p.connections.remove(pos);
        }
    }

    fn release(&mut self, id: NodeId) -> usize {
        // Reverse pre-order puts every descendant ahead of its ancestors.
        let doomed: Vec<NodeId> = self.pre_order(id).collect();
        for &n in doomed.iter().rev() {
            if let Some(slot) = self.nodes.get_mut(n.idx()) {
                *slot = None;
                self.free_list.push(n.idx());
            }
        }
        doomed.len()
    }

    /// Iterate `from` and its descendants in pre-order.
    ///
    /// Children are visited in connection order. A stale `from` yields nothing.
    pub fn pre_order(&self, from: NodeId) -> PreOrder<'_> {
        let mut stack = Vec::new();
        if self.is_alive(from) {
            stack.push(from);
        }
        PreOrder { tree: self, stack }
    }

    /// Iterate the descendants of `id` (excluding `id`) in pre-order.
    pub fn descendants(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.pre_order(id).skip(1)
    }

    /// Root→`id` path (inclusive). Empty for stale handles.
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut cursor = Some(id).filter(|&n| self.is_alive(n));
        while let Some(n) = cursor {
            path.push(n);
            cursor = self.parent(n);
        }
        path.reverse();
        path
    }

    /// Move every descendant of `id` by `delta`; `id` itself stays put.
    pub fn translate_descendants(&mut self, id: NodeId, delta: Vec2) {
        let ids: Vec<NodeId> = self.descendants(id).collect();
        for d in ids {
            if let Some(node) = self.get_mut(d) {
                node.position += delta;
            }
        }
    }

    /// Rigidly move the subtree rooted at `id` so that `id` lands on `position`.
    ///
    /// Returns the applied delta, or `None` for a stale handle.
    pub fn move_subtree_to(&mut self, id: NodeId, position: Point) -> Option<Vec2> {
        let node = self.get_mut(id)?;
        let delta = position - node.position;
        node.position = position;
        self.translate_descendants(id, delta);
        Some(delta)
    }

    /// Set every node's target scale: `hover_scale` for `hovered`, `rest_scale` for the rest.
    pub fn set_hover_targets(&mut self, hovered: Option<NodeId>, hover_scale: f64, rest_scale: f64) {
        let hovered_idx = hovered.filter(|&h| self.is_alive(h)).map(NodeId::idx);
        for (idx, slot) in self.nodes.iter_mut().enumerate() {
            if let Some(node) = slot {
                node.target_scale = if hovered_idx == Some(idx) {
                    hover_scale
                } else {
                    rest_scale
                };
            }
        }
    }

    /// Ease every node's scale toward its target by `factor` (0 = frozen, 1 = snap).
    pub fn step_scales(&mut self, factor: f64) {
        for node in self.nodes.iter_mut().flatten() {
            node.scale += (node.target_scale - node.scale) * factor;
        }
    }
}

/// Pre-order traversal returned by [`Tree::pre_order`].
#[derive(Debug)]
pub struct PreOrder<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl Iterator for PreOrder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.connections(id).iter().rev().map(|c| c.child));
        Some(id)
    }
}

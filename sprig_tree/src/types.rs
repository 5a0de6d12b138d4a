// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the decision tree: handles, node kinds, and default styling.

use peniko::color::Rgba8;

/// Identifier for a node in the tree.
///
/// This is a small, copyable handle that stays stable while the node is alive and
/// becomes invalid when the node is removed.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// Use [`Tree::is_alive`](crate::Tree::is_alive) to check whether a `NodeId` still refers
/// to a live node. Stale `NodeId`s never alias a different live node because the
/// generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Generation of the slot this handle was issued for.
    pub const fn generation(self) -> u32 {
        self.1
    }
}

/// The role a node plays in the decision flow.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Entry point of a flow.
    Start,
    /// A step that does something.
    Action,
    /// A branch point; its outgoing edges are auto-labeled `Yes` / `No`.
    Condition,
    /// Terminal node.
    End,
}

impl NodeKind {
    /// Every kind, in palette order.
    pub const ALL: [Self; 4] = [Self::Start, Self::Action, Self::Condition, Self::End];

    /// Label given to a node of this kind when it is created from a command.
    pub const fn default_label(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Action => "Action",
            Self::Condition => "Cond",
            Self::End => "End",
        }
    }

    /// Default shape and color for this kind.
    pub const fn style(self) -> NodeStyle {
        match self {
            Self::Start => NodeStyle::new(Shape::Capsule, 50, 200, 50),
            Self::Action => NodeStyle::new(Shape::Rectangle, 50, 100, 200),
            Self::Condition => NodeStyle::new(Shape::Diamond, 200, 150, 50),
            Self::End => NodeStyle::new(Shape::Capsule, 200, 50, 50),
        }
    }

    /// Edge label for the next child attached under a parent of this kind.
    ///
    /// `existing_children` is the parent's connection count before the new
    /// child is added. Conditions label their first two branches `Yes` and
    /// `No`; everything else (including a condition's third and later
    /// branches) gets an empty label.
    pub const fn branch_label(self, existing_children: usize) -> &'static str {
        match (self, existing_children) {
            (Self::Condition, 0) => "Yes",
            (Self::Condition, 1) => "No",
            _ => "",
        }
    }
}

/// Outline used by the renderer for a node.
///
/// The shape is purely visual; hit testing always uses a fixed square box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Circle.
    Circle,
    /// Axis-aligned square.
    #[default]
    Rectangle,
    /// Square rotated by 45 degrees.
    Diamond,
    /// Rounded pill, twice as wide as it is tall.
    Capsule,
}

/// Shape and fill color assigned to a node at construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeStyle {
    /// Outline drawn for the node.
    pub shape: Shape,
    /// Fill color. Alpha is always opaque.
    pub color: Rgba8,
}

impl NodeStyle {
    /// Gray rectangle used when no kind-specific style applies.
    pub const FALLBACK: Self = Self::new(Shape::Rectangle, 100, 100, 100);

    /// Create a style from a shape and opaque 8-bit channels.
    pub const fn new(shape: Shape, r: u8, g: u8, b: u8) -> Self {
        Self {
            shape,
            color: Rgba8 { r, g, b, a: 255 },
        }
    }
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self::FALLBACK
    }
}

// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sprig_render_ref --heading-base-level=0

//! Sprig Render Reference Adapter.
//!
//! This crate provides [`Recorder`], a stateful [`RenderAdapter`] that logs
//! every request together with the color in effect when it was made.
//!
//! It does **not** rasterize anything. It is meant for tests and debugging that
//! want to assert on what the editor asked to draw, and in what order.
//!
//! ```rust
//! use sprig_editor::Editor;
//! use sprig_render_ref::Recorder;
//!
//! let editor = Editor::new();
//! let mut recorder = Recorder::new();
//! editor.draw(&mut recorder);
//!
//! assert_eq!(recorder.nodes().count(), 4);
//! let labels: Vec<&str> = recorder.texts().map(|(_, text, _)| text).collect();
//! assert_eq!(labels, ["Yes", "No"]);
//! ```

#![no_std]

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{CubicBez, Point};
use peniko::color::Rgba8;
use sprig_editor::{RenderAdapter, StyledNode};
use sprig_tree::{NodeId, Shape};

/// A node draw request with its label copied out of the tree.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedNode {
    /// Handle of the node.
    pub id: NodeId,
    /// Center in screen space.
    pub center: Point,
    /// Node text.
    pub label: String,
    /// Whether the node was drawn as selected.
    pub selected: bool,
    /// Requested outline.
    pub shape: Shape,
    /// Node fill color.
    pub color: Rgba8,
    /// Eased scale at draw time.
    pub scale: f64,
}

impl From<&StyledNode<'_>> for RecordedNode {
    fn from(node: &StyledNode<'_>) -> Self {
        Self {
            id: node.id,
            center: node.center,
            label: node.label.to_string(),
            selected: node.selected,
            shape: node.shape,
            color: node.color,
            scale: node.scale,
        }
    }
}

/// Event recorded by [`Recorder`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawEvent {
    /// The current color changed.
    Color(Rgba8),
    /// A curve was stroked.
    Bezier {
        /// The curve.
        curve: CubicBez,
        /// Color in effect, if any was set.
        color: Option<Rgba8>,
    },
    /// Text was drawn.
    Text {
        /// Anchor point.
        origin: Point,
        /// The text.
        text: String,
        /// Color in effect, if any was set.
        color: Option<Rgba8>,
    },
    /// A node was drawn.
    Node(RecordedNode),
}

/// Recording implementation of [`RenderAdapter`].
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    events: Vec<DrawEvent>,
    color: Option<Rgba8>,
}

impl Recorder {
    /// An empty recorder with no color set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every event, in request order.
    pub fn events(&self) -> &[DrawEvent] {
        &self.events
    }

    /// The color most recently set.
    pub fn current_color(&self) -> Option<Rgba8> {
        self.color
    }

    /// Drop recorded events and the current color, ready for the next frame.
    pub fn clear(&mut self) {
        self.events.clear();
        self.color = None;
    }

    /// Node requests, in order.
    pub fn nodes(&self) -> impl Iterator<Item = &RecordedNode> + '_ {
        self.events.iter().filter_map(|e| match e {
            DrawEvent::Node(node) => Some(node),
            _ => None,
        })
    }

    /// Curve requests and the color each was drawn with.
    pub fn edges(&self) -> impl Iterator<Item = (&CubicBez, Option<Rgba8>)> + '_ {
        self.events.iter().filter_map(|e| match e {
            DrawEvent::Bezier { curve, color } => Some((curve, *color)),
            _ => None,
        })
    }

    /// Text requests: anchor, text, color.
    pub fn texts(&self) -> impl Iterator<Item = (Point, &str, Option<Rgba8>)> + '_ {
        self.events.iter().filter_map(|e| match e {
            DrawEvent::Text {
                origin,
                text,
                color,
            } => Some((*origin, text.as_str(), *color)),
            _ => None,
        })
    }

    /// The node drawn as selected, if any.
    pub fn selected_node(&self) -> Option<&RecordedNode> {
        self.nodes().find(|n| n.selected)
    }
}

impl RenderAdapter for Recorder {
    fn set_color(&mut self, color: Rgba8) {
        self.color = Some(color);
        self.events.push(DrawEvent::Color(color));
    }

    fn draw_bezier(&mut self, curve: CubicBez) {
        self.events.push(DrawEvent::Bezier {
            curve,
            color: self.color,
        });
    }

    fn draw_text(&mut self, origin: Point, text: &str) {
        self.events.push(DrawEvent::Text {
            origin,
            text: text.to_string(),
            color: self.color,
        });
    }

    fn draw_styled_node(&mut self, node: &StyledNode<'_>) {
        self.events.push(DrawEvent::Node(node.into()));
    }
}

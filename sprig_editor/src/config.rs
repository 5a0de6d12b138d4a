// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables for [`Editor`](crate::Editor).

use kurbo::Vec2;
use peniko::color::Rgba8;
use sprig_tree::hit_test::DEFAULT_HIT_HALF_SIZE;
use sprig_tree::layout::{COMMAND_PLACEMENT, LayoutParams, POINTER_PLACEMENT};

/// Editor configuration. [`Default`] gives the stock behavior.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
    /// Half-size of the square hit box around every node.
    pub hit_half_size: f64,
    /// Target scale of the hovered node.
    pub hover_scale: f64,
    /// Target scale of every other node.
    pub rest_scale: f64,
    /// Fraction of the remaining distance to the target scale covered per update.
    pub scale_easing: f64,
    /// Offset of a child created with the secondary button.
    pub pointer_placement: Vec2,
    /// Offset of a child created by [`Editor::create_node`](crate::Editor::create_node).
    pub command_placement: Vec2,
    /// Vertical distance of the edge control points from their anchors.
    pub edge_curvature: f64,
    /// Color set before every edge curve.
    pub edge_color: Rgba8,
    /// Color set before every edge label.
    pub label_color: Rgba8,
    /// Fan-out applied to the starting tree.
    pub initial_layout: LayoutParams,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            hit_half_size: DEFAULT_HIT_HALF_SIZE,
            hover_scale: 1.2,
            rest_scale: 1.0,
            scale_easing: 0.1,
            pointer_placement: POINTER_PLACEMENT,
            command_placement: COMMAND_PLACEMENT,
            edge_curvature: 50.0,
            edge_color: Rgba8 {
                r: 200,
                g: 200,
                b: 200,
                a: 255,
            },
            label_color: Rgba8 {
                r: 255,
                g: 255,
                b: 100,
                a: 255,
            },
            initial_layout: LayoutParams::default(),
        }
    }
}

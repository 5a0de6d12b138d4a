// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sprig_chrome --heading-base-level=0

//! Sprig Chrome: host UI that sits in front of the editor canvas.
//!
//! [`Chrome`] is an ordered list of [`Element`]s (buttons, bars, panels and a
//! text field). Every frame it is given the input before the editor:
//!
//! - Every element is updated, in the order it was added, even after an earlier
//!   one has consumed the input.
//! - The frame counts as captured if any element consumed it.
//! - Elements do not touch the editor directly. They emit
//!   [`EditorCommand`](sprig_editor::EditorCommand)s that the caller applies.
//!
//! [`Shell`] wires a [`Chrome`] to an [`Editor`](sprig_editor::Editor) and runs
//! that sequence for you.
//!
//! ## Minimal example
//!
//! ```rust
//! use sprig_chrome::Shell;
//! use sprig_editor::input::{FrameInput, PointerButtons};
//!
//! let mut shell = Shell::standard(1280.0, 720.0);
//! assert_eq!(shell.editor().tree().len(), 4);
//!
//! // "Add Action" is the second palette button.
//! let click = FrameInput::at((100.0, 150.0)).press(PointerButtons::PRIMARY);
//! let captured = shell.frame(1.0 / 60.0, &click);
//! assert!(captured);
//! assert_eq!(shell.editor().tree().len(), 5);
//! assert_eq!(shell.editor().selected_label(), Some("Action"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use sprig_editor::EditorCommand;
use sprig_editor::input::FrameInput;

mod element;
mod shell;

pub use element::{Element, contains_inclusive};
pub use shell::{INSPECTOR_WIDTH, MENU_BAR_HEIGHT, PALETTE_WIDTH, Shell, TAB_BAR_HEIGHT};

/// Ordered host UI elements.
#[derive(Clone, Debug, Default)]
pub struct Chrome {
    elements: Vec<Element>,
}

impl Chrome {
    /// Empty chrome. Routes nothing and never captures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element after the existing ones.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Elements in update order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Update every element with `input`, collecting their commands.
    ///
    /// Returns `true` if any element consumed the input.
    pub fn route(&mut self, input: &FrameInput, commands: &mut Vec<EditorCommand>) -> bool {
        let mut consumed = false;
        for element in &mut self.elements {
            consumed |= element.update(input, commands);
        }
        consumed
    }

    /// Bind every text field to `text` (the selected node's label, if any).
    pub fn bind_text(&mut self, text: Option<&str>) {
        for element in &mut self.elements {
            element.bind_text(text);
        }
    }

    /// Returns `true` if a text field has keyboard focus.
    pub fn has_focus(&self) -> bool {
        self.elements.iter().any(Element::has_focus)
    }
}

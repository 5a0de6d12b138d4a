// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sprig_editor --heading-base-level=0

//! Sprig Editor: the interaction state machine of the Sprig decision-tree editor.
//!
//! An [`Editor`] owns a [`sprig_tree::Tree`] and advances once per frame:
//!
//! - [`Editor::update`] reads a [`FrameInput`] snapshot, recomputes the hovered
//!   node, eases node scales, and (unless another UI layer captured the input)
//!   handles selection, dragging, creation and deletion.
//! - [`Editor::draw`] walks the tree read-only and issues requests to a
//!   [`RenderAdapter`] supplied by the host.
//!
//! Host UI (menus, palettes, inspectors) talks to the editor through
//! [`EditorCommand`]s and [`Editor::apply`].
//!
//! ## Interaction
//!
//! - Primary press selects the node under the pointer (or clears the selection)
//!   and starts dragging it. While the button is held the node's whole subtree
//!   follows the pointer rigidly.
//! - Secondary press over a node adds an action node beneath it.
//! - Delete or Backspace removes the selected node and its subtree. The root is
//!   never removed.
//!
//! ## Minimal example
//!
//! ```rust
//! use sprig_editor::input::{FrameInput, PointerButtons};
//! use sprig_editor::{Editor, Interaction};
//!
//! let mut editor = Editor::new();
//! let root = editor.root();
//!
//! // The root of the starter tree sits at (600, 100).
//! let press = FrameInput::at((600.0, 100.0)).press(PointerButtons::PRIMARY);
//! editor.update(1.0 / 60.0, &press, false);
//! assert_eq!(editor.selected(), Some(root));
//! assert!(matches!(editor.interaction(), Interaction::Dragging { .. }));
//!
//! // Dragging the root moves the whole tree.
//! let drag = FrameInput::at((650.0, 100.0)).hold(PointerButtons::PRIMARY);
//! editor.update(1.0 / 60.0, &drag, false);
//! assert_eq!(editor.tree().get(root).unwrap().position.x, 650.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod command;
mod config;
mod editor;
pub mod input;
pub mod render;

pub use command::EditorCommand;
pub use config::EditorConfig;
pub use editor::{Editor, Interaction};
pub use input::FrameInput;
pub use render::{RenderAdapter, StyledNode};

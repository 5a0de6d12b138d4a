// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-triggered editor operations.

use alloc::string::String;
use sprig_tree::NodeKind;

/// An operation requested from outside the canvas (toolbar, menu, inspector).
///
/// Commands are collected while chrome processes input and applied with
/// [`Editor::apply`](crate::Editor::apply) before the editor's own update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorCommand {
    /// [`Editor::create_node`](crate::Editor::create_node) with this kind.
    CreateNode(NodeKind),
    /// [`Editor::delete_selected`](crate::Editor::delete_selected).
    DeleteSelected,
    /// [`Editor::set_selected_label`](crate::Editor::set_selected_label).
    SetSelectedLabel(String),
}

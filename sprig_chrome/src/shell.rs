// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Rect;
use log::debug;
use sprig_editor::input::FrameInput;
use sprig_editor::{Editor, EditorCommand, RenderAdapter};
use sprig_tree::NodeKind;

use crate::{Chrome, Element};

/// Height of the menu bar.
pub const MENU_BAR_HEIGHT: f64 = 25.0;
/// Height of the tab bar below the menu bar.
pub const TAB_BAR_HEIGHT: f64 = 35.0;
/// Width of the palette panel on the left.
pub const PALETTE_WIDTH: f64 = 200.0;
/// Width of the inspector panel on the right.
pub const INSPECTOR_WIDTH: f64 = 250.0;

/// An [`Editor`] behind a [`Chrome`] layer.
///
/// Each frame the chrome sees input first. Whatever it consumes is hidden from
/// the editor's interaction logic, and the commands it emits are applied before
/// the editor updates.
#[derive(Debug)]
pub struct Shell {
    editor: Editor,
    chrome: Chrome,
    commands: Vec<EditorCommand>,
}

impl Shell {
    /// A shell over `editor` with the given chrome.
    pub fn new(editor: Editor, chrome: Chrome) -> Self {
        Self {
            editor,
            chrome,
            commands: Vec::new(),
        }
    }

    /// The starter tree behind [`Chrome::standard`].
    pub fn standard(width: f64, height: f64) -> Self {
        Self::new(Editor::new(), Chrome::standard(width, height))
    }

    /// The editor.
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// The chrome.
    pub fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    /// Advance one frame. Returns whether the chrome captured the input.
    pub fn frame(&mut self, delta_time: f64, input: &FrameInput) -> bool {
        self.chrome.bind_text(self.editor.selected_label());

        self.commands.clear();
        let captured = self.chrome.route(input, &mut self.commands);
        for command in self.commands.drain(..) {
            debug!("applying {command:?}");
            self.editor.apply(command);
        }

        self.editor.update(delta_time, input, captured);
        captured
    }

    /// Issue draw requests for the canvas.
    pub fn draw<A: RenderAdapter + ?Sized>(&self, adapter: &mut A) {
        self.editor.draw(adapter);
    }
}

impl Chrome {
    /// The stock layout for a `width` × `height` window.
    ///
    /// A menu bar and a tab bar run across the top. The palette on the left
    /// holds one "Add" button per node kind; the inspector on the right holds a
    /// delete button and the label field.
    pub fn standard(width: f64, height: f64) -> Self {
        let top = MENU_BAR_HEIGHT + TAB_BAR_HEIGHT;

        let palette = NodeKind::ALL
            .iter()
            .enumerate()
            .map(|(i, &kind)| {
                let y = top + 20.0 + i as f64 * 50.0;
                Element::button(
                    Rect::new(20.0, y, 180.0, y + 40.0),
                    palette_label(kind),
                    EditorCommand::CreateNode(kind),
                )
            })
            .collect();

        let left = width - INSPECTOR_WIDTH;
        let inspector = vec![
            Element::button(
                Rect::new(left + 20.0, top + 20.0, left + 230.0, top + 60.0),
                "Delete Selected",
                EditorCommand::DeleteSelected,
            ),
            Element::text_field(Rect::new(left + 20.0, top + 90.0, left + 230.0, top + 120.0)),
        ];

        let mut chrome = Self::new();
        chrome.push(Element::bar(Rect::new(0.0, 0.0, width, MENU_BAR_HEIGHT)));
        chrome.push(Element::bar(Rect::new(0.0, MENU_BAR_HEIGHT, width, top)));
        chrome.push(Element::panel(
            Rect::new(0.0, top, PALETTE_WIDTH, height),
            palette,
        ));
        chrome.push(Element::panel(Rect::new(left, top, width, height), inspector));
        chrome
    }
}

fn palette_label(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Start => "Add Start",
        NodeKind::Action => "Add Action",
        NodeKind::Condition => "Add Condition",
        NodeKind::End => "Add End",
    }
}

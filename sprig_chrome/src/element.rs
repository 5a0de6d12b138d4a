// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome elements and their input consumption rules.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use log::debug;
use sprig_editor::EditorCommand;
use sprig_editor::input::{FrameInput, Keys, PointerButtons};

/// Returns `true` if `pt` lies inside `rect` or on its edge.
pub fn contains_inclusive(rect: Rect, pt: Point) -> bool {
    pt.x >= rect.x0 && pt.x <= rect.x1 && pt.y >= rect.y0 && pt.y <= rect.y1
}

/// One piece of host UI.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    /// Emits `command` when clicked with the primary button.
    ///
    /// Consumes input while the pointer is over it.
    Button {
        /// Screen-space bounds.
        bounds: Rect,
        /// Text on the button.
        label: String,
        /// Command emitted on click.
        command: EditorCommand,
        /// Whether the pointer was over the button last update.
        hovered: bool,
    },
    /// A full-width strip (menu or tab bar).
    ///
    /// Consumes input while the pointer is within its vertical band, whatever
    /// the horizontal position.
    Bar {
        /// Screen-space bounds.
        bounds: Rect,
    },
    /// A container. Consumes input if any child does.
    Panel {
        /// Screen-space bounds.
        bounds: Rect,
        /// Children, updated in order.
        children: Vec<Element>,
    },
    /// An editable single-line field bound to the selected node's label.
    ///
    /// Consumes a primary press inside it, and everything else while it is
    /// focused and bound to a label.
    TextField {
        /// Screen-space bounds.
        bounds: Rect,
        /// Whether keyboard input goes to this field.
        focused: bool,
        /// Current text, or `None` when there is nothing to edit.
        buffer: Option<String>,
    },
}

impl Element {
    /// A button that emits `command`.
    pub fn button(bounds: Rect, label: impl Into<String>, command: EditorCommand) -> Self {
        Self::Button {
            bounds,
            label: label.into(),
            command,
            hovered: false,
        }
    }

    /// A bar covering `bounds`.
    pub fn bar(bounds: Rect) -> Self {
        Self::Bar { bounds }
    }

    /// A panel holding `children`.
    pub fn panel(bounds: Rect, children: Vec<Self>) -> Self {
        Self::Panel { bounds, children }
    }

    /// An unfocused, unbound text field.
    pub fn text_field(bounds: Rect) -> Self {
        Self::TextField {
            bounds,
            focused: false,
            buffer: None,
        }
    }

    /// Screen-space bounds of this element.
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Button { bounds, .. }
            | Self::Bar { bounds }
            | Self::Panel { bounds, .. }
            | Self::TextField { bounds, .. } => *bounds,
        }
    }

    /// Process one frame of input. Returns `true` if the input was consumed.
    ///
    /// Commands triggered by this element are appended to `commands`.
    pub fn update(&mut self, input: &FrameInput, commands: &mut Vec<EditorCommand>) -> bool {
        match self {
            Self::Button {
                bounds,
                label,
                command,
                hovered,
            } => {
                *hovered = contains_inclusive(*bounds, input.pointer);
                if *hovered && input.was_pressed(PointerButtons::PRIMARY) {
                    debug!("button {label:?} clicked");
                    commands.push(command.clone());
                }
                *hovered
            }
            Self::Bar { bounds } => {
                input.pointer.y >= bounds.y0 && input.pointer.y <= bounds.y1
            }
            Self::Panel { children, .. } => {
                let mut consumed = false;
                for child in children {
                    consumed |= child.update(input, commands);
                }
                consumed
            }
            Self::TextField {
                bounds,
                focused,
                buffer,
            } => {
                let inside = contains_inclusive(*bounds, input.pointer);
                let pressed = input.was_pressed(PointerButtons::PRIMARY);
                if pressed && inside != *focused {
                    debug!("text field focus {focused} -> {inside}");
                    *focused = inside;
                }
                if *focused
                    && let Some(text) = buffer
                {
                    let popped = input.key_pressed(Keys::BACKSPACE) && text.pop().is_some();
                    text.push_str(&input.text);
                    if popped || !input.text.is_empty() {
                        commands.push(EditorCommand::SetSelectedLabel(text.clone()));
                    }
                }
                (*focused && buffer.is_some()) || (pressed && inside)
            }
        }
    }

    /// Rebind every text field in this element to `text`.
    pub fn bind_text(&mut self, text: Option<&str>) {
        match self {
            Self::Panel { children, .. } => {
                for child in children {
                    child.bind_text(text);
                }
            }
            Self::TextField { buffer, .. } => *buffer = text.map(String::from),
            Self::Button { .. } | Self::Bar { .. } => {}
        }
    }

    /// Returns `true` if this element is, or contains, a focused text field.
    pub fn has_focus(&self) -> bool {
        match self {
            Self::TextField { focused, .. } => *focused,
            Self::Panel { children, .. } => children.iter().any(Self::has_focus),
            Self::Button { .. } | Self::Bar { .. } => false,
        }
    }
}

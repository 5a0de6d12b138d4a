// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame input snapshots.
//!
//! The editor never polls a device. The host builds one [`FrameInput`] per frame
//! and hands the same snapshot to every consumer, so all of them agree on what
//! was pressed in this frame.
//!
//! Hosts that only know level state (what is held *now*) can use
//! [`InputTracker`] to derive the pressed/released edges:
//!
//! ```
//! use kurbo::Point;
//! use sprig_editor::input::{InputTracker, Keys, PointerButtons};
//!
//! let mut tracker = InputTracker::new();
//! let first = tracker.frame(Point::ZERO, PointerButtons::PRIMARY, Keys::empty(), "");
//! assert!(first.was_pressed(PointerButtons::PRIMARY));
//!
//! // Still held: no new press.
//! let second = tracker.frame(Point::ZERO, PointerButtons::PRIMARY, Keys::empty(), "");
//! assert!(!second.was_pressed(PointerButtons::PRIMARY));
//! assert!(second.is_down(PointerButtons::PRIMARY));
//!
//! // Let go.
//! let third = tracker.frame(Point::ZERO, PointerButtons::empty(), Keys::empty(), "");
//! assert!(third.was_released(PointerButtons::PRIMARY));
//! ```

use alloc::string::String;
use kurbo::Point;

bitflags::bitflags! {
    /// Pointer buttons the editor reacts to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PointerButtons: u8 {
        /// Usually the left mouse button: select and drag.
        const PRIMARY   = 0b0000_0001;
        /// Usually the right mouse button: create a child under the pointer.
        const SECONDARY = 0b0000_0010;
    }
}

impl Default for PointerButtons {
    fn default() -> Self {
        Self::empty()
    }
}

bitflags::bitflags! {
    /// Keys the editor reacts to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Keys: u8 {
        /// Forward delete.
        const DELETE    = 0b0000_0001;
        /// Backspace.
        const BACKSPACE = 0b0000_0010;
    }
}

impl Default for Keys {
    fn default() -> Self {
        Self::empty()
    }
}

/// Everything the editor and chrome may look at during one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Pointer position in screen space.
    pub pointer: Point,
    /// Buttons currently held.
    pub buttons_down: PointerButtons,
    /// Buttons that went down this frame.
    pub buttons_pressed: PointerButtons,
    /// Buttons that went up this frame.
    pub buttons_released: PointerButtons,
    /// Keys that went down this frame.
    pub keys_pressed: Keys,
    /// Text typed this frame.
    pub text: String,
}

impl FrameInput {
    /// An idle frame with the pointer at `pointer`.
    pub fn at(pointer: impl Into<Point>) -> Self {
        Self {
            pointer: pointer.into(),
            ..Self::default()
        }
    }

    /// Mark `buttons` as pressed this frame (and therefore held).
    pub fn press(mut self, buttons: PointerButtons) -> Self {
        self.buttons_down |= buttons;
        self.buttons_pressed |= buttons;
        self
    }

    /// Mark `buttons` as held without a new press.
    pub fn hold(mut self, buttons: PointerButtons) -> Self {
        self.buttons_down |= buttons;
        self
    }

    /// Mark `buttons` as released this frame.
    pub fn release(mut self, buttons: PointerButtons) -> Self {
        self.buttons_down -= buttons;
        self.buttons_released |= buttons;
        self
    }

    /// Mark `keys` as pressed this frame.
    pub fn key(mut self, keys: Keys) -> Self {
        self.keys_pressed |= keys;
        self
    }

    /// Attach typed text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Returns `true` while any of `buttons` is held.
    pub fn is_down(&self, buttons: PointerButtons) -> bool {
        self.buttons_down.intersects(buttons)
    }

    /// Returns `true` if any of `buttons` went down this frame.
    pub fn was_pressed(&self, buttons: PointerButtons) -> bool {
        self.buttons_pressed.intersects(buttons)
    }

    /// Returns `true` if any of `buttons` went up this frame.
    pub fn was_released(&self, buttons: PointerButtons) -> bool {
        self.buttons_released.intersects(buttons)
    }

    /// Returns `true` if any of `keys` went down this frame.
    pub fn key_pressed(&self, keys: Keys) -> bool {
        self.keys_pressed.intersects(keys)
    }

    /// Delete or Backspace went down this frame.
    pub fn delete_pressed(&self) -> bool {
        self.key_pressed(Keys::DELETE | Keys::BACKSPACE)
    }
}

/// Derives edge-triggered input from consecutive level snapshots.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputTracker {
    prev_buttons: PointerButtons,
    prev_keys: Keys,
}

impl InputTracker {
    /// A tracker that assumes nothing was held before the first frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build this frame's snapshot from what is held right now.
    pub fn frame(
        &mut self,
        pointer: Point,
        buttons_down: PointerButtons,
        keys_down: Keys,
        text: &str,
    ) -> FrameInput {
        let input = FrameInput {
            pointer,
            buttons_down,
            buttons_pressed: buttons_down.difference(self.prev_buttons),
            buttons_released: self.prev_buttons.difference(buttons_down),
            keys_pressed: keys_down.difference(self.prev_keys),
            text: String::from(text),
        };
        self.prev_buttons = buttons_down;
        self.prev_keys = keys_down;
        input
    }
}

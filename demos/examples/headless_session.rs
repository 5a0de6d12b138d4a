// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted editing session without a window.
//!
//! Drive the stock shell through a handful of frames (hover, drag,
//! right-click create, palette create, relabel, delete) and print what the
//! editor asked to draw after each step.
//!
//! Run:
//! - `cargo run -p sprig_demos --example headless_session`

use kurbo::Point;
use sprig_chrome::{Element, Shell};
use sprig_editor::input::{InputTracker, Keys, PointerButtons};
use sprig_render_ref::Recorder;

const DT: f64 = 1.0 / 60.0;

struct Script {
    shell: Shell,
    tracker: InputTracker,
    recorder: Recorder,
}

impl Script {
    fn step(&mut self, pointer: impl Into<Point>, buttons: PointerButtons, keys: Keys, text: &str) {
        let input = self.tracker.frame(pointer.into(), buttons, keys, text);
        let captured = self.shell.frame(DT, &input);
        if captured {
            log::trace!("frame captured by chrome");
        }
    }

    fn click(&mut self, at: impl Into<Point> + Copy, button: PointerButtons) {
        self.step(at, button, Keys::empty(), "");
        self.step(at, PointerButtons::empty(), Keys::empty(), "");
    }

    fn report_chrome(&self) {
        println!("== chrome");
        for element in self.shell.chrome().elements() {
            let kind = match element {
                Element::Button { label, .. } => label.as_str(),
                Element::Bar { .. } => "bar",
                Element::Panel { .. } => "panel",
                Element::TextField { .. } => "text field",
            };
            let b = element.bounds();
            println!(
                "  {kind:<16} ({:>6.1}, {:>6.1}) - ({:>6.1}, {:>6.1})",
                b.x0, b.y0, b.x1, b.y1
            );
        }
    }

    fn report(&mut self, title: &str) {
        self.recorder.clear();
        self.shell.draw(&mut self.recorder);
        println!("== {title}");
        for node in self.recorder.nodes() {
            println!(
                "  {:<16} at ({:>6.1}, {:>6.1}) scale {:.2}{}",
                node.label,
                node.center.x,
                node.center.y,
                node.scale,
                if node.selected { "  [selected]" } else { "" }
            );
        }
        for (origin, text, _) in self.recorder.texts() {
            println!("  edge label {text:?} at ({:.1}, {:.1})", origin.x, origin.y);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    sprig_demos::init_logger()?;

    let mut script = Script {
        shell: Shell::standard(1280.0, 720.0),
        tracker: InputTracker::new(),
        recorder: Recorder::new(),
    };
    script.report_chrome();
    script.report("starter tree");

    // Hover the condition for a while so its scale settles.
    for _ in 0..30 {
        script.step((600.0, 250.0), PointerButtons::empty(), Keys::empty(), "");
    }
    script.report("hovering the condition");

    // Drag the condition (and its branches) to the right.
    script.step((600.0, 250.0), PointerButtons::PRIMARY, Keys::empty(), "");
    for i in 1..=10 {
        let x = 600.0 + f64::from(i) * 10.0;
        script.step((x, 260.0), PointerButtons::PRIMARY, Keys::empty(), "");
    }
    script.step((700.0, 260.0), PointerButtons::empty(), Keys::empty(), "");
    script.report("after dragging the condition");

    // Right-click the condition: its third branch gets no label.
    script.click((700.0, 260.0), PointerButtons::SECONDARY);
    script.report("after right-click create");

    // "Add End" in the palette goes under the selected condition.
    script.click((100.0, 250.0), PointerButtons::PRIMARY);
    script.report("after palette create");

    // Rename it through the inspector field.
    script.click((1100.0, 165.0), PointerButtons::PRIMARY);
    for _ in 0.."End".len() {
        script.step((900.0, 600.0), PointerButtons::empty(), Keys::BACKSPACE, "");
        script.step((900.0, 600.0), PointerButtons::empty(), Keys::empty(), "");
    }
    script.step((900.0, 600.0), PointerButtons::empty(), Keys::empty(), "Done");
    script.report("after relabel");

    // Click an empty part of the canvas to drop focus, select the condition
    // again, and delete it with the keyboard.
    script.click((900.0, 600.0), PointerButtons::PRIMARY);
    script.click((700.0, 260.0), PointerButtons::PRIMARY);
    script.step((700.0, 260.0), PointerButtons::empty(), Keys::DELETE, "");
    script.report("after delete");

    Ok(())
}

//! Test support: a canvas that records draw commands instead of painting.
//!
//! Enabled for this crate's own tests and, behind the `testing` feature, for
//! downstream hosts that want to assert on the widget's draw output.

use smallvec::SmallVec;

use crate::canvas::{Canvas, DrawCommand, Rect, Stroke};

/// A [`Canvas`] that captures every command in emission order.
///
/// A paint pass of the widget produces two commands, so the backing store is
/// inline-sized for that.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: SmallVec<[DrawCommand; 2]>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands recorded so far, in emission order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Clears the recording, e.g. between frames.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn draw_oval(&mut self, rect: Rect, stroke: Stroke) {
        self.commands.push(DrawCommand::Oval { rect, stroke });
    }

    fn draw_arc(
        &mut self,
        rect: Rect,
        start_angle: f32,
        sweep_angle: f32,
        use_center: bool,
        stroke: Stroke,
    ) {
        self.commands.push(DrawCommand::Arc {
            rect,
            start_angle,
            sweep_angle,
            use_center,
            stroke,
        });
    }
}

//! Canvas capability.
//!
//! The widget never touches a concrete toolkit type; it emits stroked ovals
//! and arcs through the [`Canvas`] trait and the embedding environment
//! rasterizes them however it likes.

use crate::{Color, Dp};

/// An axis-aligned rectangle in physical pixels, edge-addressed like the
/// bounding boxes graphics APIs take for oval and arc primitives.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Returns the rectangle shrunk by `d` on all four sides.
    pub fn inset(&self, d: f32) -> Self {
        Self {
            left: self.left + d,
            top: self.top + d,
            right: self.right - d,
            bottom: self.bottom - d,
        }
    }
}

/// Stroke style for one ring: immutable until replaced.
///
/// Setters that change a width or color install a whole new record, and the
/// draw pass reads whatever record is current at that moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Stroke width in density-independent pixels.
    pub width: Dp,
    /// Stroke color.
    pub color: Color,
}

impl Stroke {
    pub const fn new(width: Dp, color: Color) -> Self {
        Self { width, color }
    }

    /// A copy of this stroke with a different width.
    pub fn with_width(self, width: Dp) -> Self {
        Self { width, ..self }
    }

    /// A copy of this stroke with a different color.
    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }
}

/// A draw instruction the widget hands to the host canvas.
///
/// Angles are in degrees with 0° at 3 o'clock, increasing clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// A full stroked oval inscribed in `rect`.
    Oval { rect: Rect, stroke: Stroke },
    /// A stroked arc along the oval inscribed in `rect`.
    Arc {
        rect: Rect,
        start_angle: f32,
        sweep_angle: f32,
        /// Whether the arc edges connect to the oval center (wedge shape).
        use_center: bool,
        stroke: Stroke,
    },
}

/// Drawing surface supplied by the embedding environment at paint time.
pub trait Canvas {
    /// Strokes the full oval inscribed in `rect`.
    fn draw_oval(&mut self, rect: Rect, stroke: Stroke);

    /// Strokes an arc of the oval inscribed in `rect`, starting at
    /// `start_angle` and sweeping `sweep_angle` degrees (negative sweeps run
    /// counter-clockwise).
    fn draw_arc(
        &mut self,
        rect: Rect,
        start_angle: f32,
        sweep_angle: f32,
        use_center: bool,
        stroke: Stroke,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_inset() {
        let rect = Rect::new(0.0, 0.0, 200.0, 200.0).inset(5.0);
        assert_eq!(rect, Rect::new(5.0, 5.0, 195.0, 195.0));
        assert_eq!(rect.width(), 190.0);
        assert_eq!(rect.height(), 190.0);
    }

    #[test]
    fn test_stroke_replacement_leaves_original() {
        let stroke = Stroke::new(Dp(4.0), Color::GRAY);
        let wider = stroke.with_width(Dp(10.0));
        assert_eq!(stroke.width, Dp(4.0));
        assert_eq!(wider.width, Dp(10.0));
        assert_eq!(wider.color, Color::GRAY);
    }
}

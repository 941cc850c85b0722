//! The circular progress bar widget.
//!
//! ## Usage
//!
//! A leaf component: the host constructs it from [`CircularProgressBarArgs`],
//! calls [`measure`](CircularProgressBar::measure) whenever its allocation or
//! a stroke width changes, and [`draw`](CircularProgressBar::draw) on every
//! paint pass. Animated transitions go through the host's [`Tweening`]
//! engine and come back in through the plain value setter.

use std::time::Duration;

use derive_builder::Builder;
use tracing::{debug, trace};

use crate::{
    canvas::{Canvas, Rect, Stroke},
    color::Color,
    dp::Dp,
    tween::{DEFAULT_ANIMATION_DURATION, Sample, Tweening, decelerate},
};

/// Arcs start at the top of the circle (0° is at 3 o'clock, increasing
/// clockwise).
const START_ANGLE: f32 = 270.0;

/// Rotational sense of the progress arc.
///
/// The background ring is unaffected; direction only flips the sign and
/// anchor of the drawn sweep.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Clockwise,
    Counterclockwise,
}

impl Direction {
    /// Decodes the 0/1 flag used by host attribute systems
    /// (0 = clockwise, anything else = counter-clockwise).
    pub fn from_attr_flag(flag: i32) -> Self {
        if flag == 0 {
            Direction::Clockwise
        } else {
            Direction::Counterclockwise
        }
    }
}

/// Environment defaults for the widget.
pub struct CircularProgressBarDefaults;

impl CircularProgressBarDefaults {
    /// Default stroke width of the progress arc.
    pub const PROGRESS_STROKE_WIDTH: Dp = Dp(10.0);
    /// Default stroke width of the background ring.
    pub const BACKGROUND_STROKE_WIDTH: Dp = Dp(10.0);
    /// Default color of the progress arc.
    pub const PROGRESS_COLOR: Color = Color::BLACK;
    /// Default color of the background ring.
    pub const BACKGROUND_COLOR: Color = Color::GRAY;
}

/// Construction-time configuration for [`CircularProgressBar`].
///
/// Out-of-range values are accepted as-is here; clamping happens only in
/// [`CircularProgressBar::set_progress_value`].
#[derive(Builder, Clone, Debug)]
#[builder(pattern = "owned")]
pub struct CircularProgressBarArgs {
    /// Rotational sense of the progress arc.
    #[builder(default)]
    pub direction: Direction,

    /// Initial progress value, nominally in `0.0..=100.0`.
    #[builder(default = "0.0")]
    pub progress_value: f32,

    /// Stroke width of the progress arc.
    #[builder(default = "CircularProgressBarDefaults::PROGRESS_STROKE_WIDTH")]
    pub progress_stroke_width: Dp,

    /// Stroke width of the background ring.
    #[builder(default = "CircularProgressBarDefaults::BACKGROUND_STROKE_WIDTH")]
    pub background_stroke_width: Dp,

    /// Color of the progress arc.
    #[builder(default = "CircularProgressBarDefaults::PROGRESS_COLOR")]
    pub progress_color: Color,

    /// Color of the background ring.
    #[builder(default = "CircularProgressBarDefaults::BACKGROUND_COLOR")]
    pub background_color: Color,
}

impl Default for CircularProgressBarArgs {
    fn default() -> Self {
        CircularProgressBarArgsBuilder::default().build().unwrap()
    }
}

/// Configuration for an animated progress transition.
#[derive(Builder, Clone, Debug)]
#[builder(pattern = "owned")]
pub struct AnimationArgs {
    /// Target progress value.
    pub target_value: f32,

    /// Direction to switch to before the transition starts. Defaults to the
    /// widget's current direction.
    #[builder(default, setter(strip_option))]
    pub direction: Option<Direction>,

    /// Transition duration.
    #[builder(default = "DEFAULT_ANIMATION_DURATION")]
    pub duration: Duration,
}

impl AnimationArgs {
    /// Shorthand for a transition to `target_value` with current direction
    /// and default duration.
    pub fn to(target_value: f32) -> Self {
        AnimationArgsBuilder::default()
            .target_value(target_value)
            .build()
            .unwrap()
    }
}

/// A circular progress indicator: a background ring with a directional
/// progress arc over it.
///
/// All state lives on the host's UI thread; setters flag the widget for
/// re-measurement and/or redraw, and the host's layout/paint scheduling
/// calls [`measure`](Self::measure) and [`draw`](Self::draw) in response.
#[derive(Debug, Clone)]
pub struct CircularProgressBar {
    direction: Direction,
    progress_value: f32,
    progress_stroke: Stroke,
    background_stroke: Stroke,
    bounds: Rect,
    needs_layout: bool,
    needs_redraw: bool,
}

impl CircularProgressBar {
    /// Property key under which animated transitions drive the progress
    /// value through a [`Tweening`] engine.
    pub const PROGRESS_VALUE: &'static str = "progress_value";

    pub fn new(args: CircularProgressBarArgs) -> Self {
        Self {
            direction: args.direction,
            progress_value: args.progress_value,
            progress_stroke: Stroke::new(args.progress_stroke_width, args.progress_color),
            background_stroke: Stroke::new(args.background_stroke_width, args.background_color),
            bounds: Rect::default(),
            needs_layout: true,
            needs_redraw: true,
        }
    }

    /// Resolves a measured size from the proposed constraints and recomputes
    /// the bounding rectangle.
    ///
    /// The footprint is always square: both dimensions resolve to
    /// `min(width, height)`. The rectangle is inset by half the larger
    /// stroke width on all sides so neither stroke clips. Must be called
    /// again whenever the allocation or either stroke width changes.
    pub fn measure(&mut self, width: f32, height: f32) -> (f32, f32) {
        let size = width.min(height);
        let inset = self
            .progress_stroke
            .width
            .to_pixels_f32()
            .max(self.background_stroke.width.to_pixels_f32())
            / 2.0;
        self.bounds = Rect::new(inset, inset, size - inset, size - inset);
        self.needs_layout = false;
        trace!(size, inset, "measured");
        (size, size)
    }

    /// Paints the widget: the background ring first, then the progress arc
    /// starting at the top of the circle.
    pub fn draw(&mut self, canvas: &mut impl Canvas) {
        canvas.draw_oval(self.bounds, self.background_stroke);
        canvas.draw_arc(
            self.bounds,
            START_ANGLE,
            self.sweep_angle(),
            false,
            self.progress_stroke,
        );
        self.needs_redraw = false;
    }

    /// The signed sweep of the progress arc in degrees.
    ///
    /// Clockwise sweeps `360·value/100`; counter-clockwise sweeps
    /// `360·value/100 − 360`, the same magnitude in the opposite rotational
    /// sense, anchored so both directions meet at a full circle when the
    /// value reaches 100.
    pub fn sweep_angle(&self) -> f32 {
        let sweep = 360.0 * self.progress_value / 100.0;
        match self.direction {
            Direction::Clockwise => sweep,
            Direction::Counterclockwise => sweep - 360.0,
        }
    }

    /// The bounding rectangle computed by the last [`measure`](Self::measure).
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Whether a setter has invalidated the layout since the last measure.
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Whether a setter has invalidated the pixels since the last draw.
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.invalidate_layout();
    }

    pub fn progress_width(&self) -> Dp {
        self.progress_stroke.width
    }

    pub fn set_progress_width(&mut self, width: Dp) {
        self.progress_stroke = self.progress_stroke.with_width(width);
        self.invalidate_layout();
    }

    pub fn background_width(&self) -> Dp {
        self.background_stroke.width
    }

    pub fn set_background_width(&mut self, width: Dp) {
        self.background_stroke = self.background_stroke.with_width(width);
        self.invalidate_layout();
    }

    pub fn progress_color(&self) -> Color {
        self.progress_stroke.color
    }

    pub fn set_progress_color(&mut self, color: Color) {
        self.progress_stroke = self.progress_stroke.with_color(color);
        self.invalidate_layout();
    }

    pub fn background_color(&self) -> Color {
        self.background_stroke.color
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.background_stroke = self.background_stroke.with_color(color);
        self.invalidate_layout();
    }

    pub fn progress_value(&self) -> f32 {
        self.progress_value
    }

    /// Sets the progress value, clamped to at most 100.
    ///
    /// No lower clamp is applied: negative values are stored as-is and draw
    /// nothing (clockwise) or a reversed arc (counter-clockwise). Only a
    /// redraw is scheduled, never a re-measurement.
    pub fn set_progress_value(&mut self, value: f32) {
        self.progress_value = value.min(100.0);
        self.needs_redraw = true;
    }

    /// Starts an animated transition of the progress value.
    ///
    /// The direction switch (if any) applies immediately; the value then
    /// tweens from its current position to the target under a decelerating
    /// curve. Fire-and-forget: the host's frame scheduler samples the tween
    /// and applies each frame through [`set_progress_value`](Self::set_progress_value),
    /// so redraws occur continuously. A second call while one transition is
    /// in flight starts a concurrent tween on the same property; the engine
    /// resolves contention per frame, last write wins.
    pub fn animate_progress(&mut self, args: AnimationArgs, tweener: &mut impl Tweening) {
        if let Some(direction) = args.direction {
            self.direction = direction;
        }
        debug!(
            from = self.progress_value,
            to = args.target_value,
            duration = ?args.duration,
            "progress transition started"
        );
        tweener.animate(
            Self::PROGRESS_VALUE,
            self.progress_value,
            args.target_value,
            args.duration,
            decelerate,
        );
    }

    /// Routes tween samples back into the widget through the plain setter.
    ///
    /// Hosts driving a [`FrameTweener`](crate::tween::FrameTweener) call
    /// this with each frame's samples; samples for other properties are
    /// ignored.
    pub fn apply_animation(&mut self, samples: impl IntoIterator<Item = Sample>) {
        for sample in samples {
            if sample.property == Self::PROGRESS_VALUE {
                self.set_progress_value(sample.value);
            }
        }
    }

    fn invalidate_layout(&mut self) {
        self.needs_layout = true;
        self.needs_redraw = true;
    }
}

impl Default for CircularProgressBar {
    fn default() -> Self {
        Self::new(CircularProgressBarArgs::default())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        canvas::DrawCommand,
        testing::RecordingCanvas,
        tween::FrameTweener,
    };

    #[test]
    fn test_value_clamps_upper_bound_only() {
        let mut bar = CircularProgressBar::default();

        bar.set_progress_value(150.0);
        assert_eq!(bar.progress_value(), 100.0);

        bar.set_progress_value(100.0);
        assert_eq!(bar.progress_value(), 100.0);

        bar.set_progress_value(42.5);
        assert_eq!(bar.progress_value(), 42.5);

        bar.set_progress_value(-25.0);
        assert_eq!(bar.progress_value(), -25.0);
    }

    #[test]
    fn test_value_setter_schedules_redraw_only() {
        let mut bar = CircularProgressBar::default();
        bar.measure(100.0, 100.0);
        let mut canvas = RecordingCanvas::new();
        bar.draw(&mut canvas);

        bar.set_progress_value(30.0);
        assert!(bar.needs_redraw());
        assert!(!bar.needs_layout());
    }

    #[test]
    fn test_clockwise_sweep_angles() {
        let mut bar = CircularProgressBar::default();
        for (value, sweep) in [(0.0, 0.0), (25.0, 90.0), (50.0, 180.0), (100.0, 360.0)] {
            bar.set_progress_value(value);
            assert_eq!(bar.sweep_angle(), sweep);
        }
    }

    #[test]
    fn test_counterclockwise_sweep_angles() {
        let mut bar = CircularProgressBar::new(
            CircularProgressBarArgsBuilder::default()
                .direction(Direction::Counterclockwise)
                .build()
                .unwrap(),
        );
        for (value, sweep) in [(0.0, -360.0), (25.0, -270.0), (100.0, 0.0)] {
            bar.set_progress_value(value);
            assert_eq!(bar.sweep_angle(), sweep);
        }
    }

    #[test]
    fn test_measure_forces_square() {
        let mut bar = CircularProgressBar::default();
        assert_eq!(bar.measure(300.0, 200.0), (200.0, 200.0));
        assert_eq!(bar.measure(120.0, 480.0), (120.0, 120.0));
        assert!(!bar.needs_layout());
    }

    #[test]
    fn test_bounds_inset_by_half_larger_stroke() {
        let mut bar = CircularProgressBar::default();
        bar.set_progress_width(Dp(10.0));
        bar.set_background_width(Dp(4.0));
        bar.measure(200.0, 200.0);
        assert_eq!(bar.bounds(), Rect::new(5.0, 5.0, 195.0, 195.0));

        // Larger background stroke dominates the inset instead.
        bar.set_background_width(Dp(16.0));
        bar.measure(200.0, 200.0);
        assert_eq!(bar.bounds(), Rect::new(8.0, 8.0, 192.0, 192.0));
    }

    #[test]
    fn test_color_setters_leave_widths_and_bounds() {
        let mut bar = CircularProgressBar::default();
        bar.measure(200.0, 200.0);
        let bounds = bar.bounds();

        bar.set_progress_color(Color::RED);
        bar.set_background_color(Color::BLUE);

        assert_eq!(bar.progress_color(), Color::RED);
        assert_eq!(bar.background_color(), Color::BLUE);
        assert_eq!(bar.progress_width(), CircularProgressBarDefaults::PROGRESS_STROKE_WIDTH);
        assert_eq!(bar.background_width(), CircularProgressBarDefaults::BACKGROUND_STROKE_WIDTH);
        assert_eq!(bar.bounds(), bounds);
    }

    #[test]
    fn test_draw_emits_oval_then_arc() {
        let mut bar = CircularProgressBar::default();
        bar.measure(100.0, 100.0);
        bar.set_progress_value(50.0);

        let mut canvas = RecordingCanvas::new();
        bar.draw(&mut canvas);
        assert!(!bar.needs_redraw());

        let commands = canvas.commands();
        assert_eq!(commands.len(), 2);
        match commands[0] {
            DrawCommand::Oval { rect, stroke } => {
                assert_eq!(rect, bar.bounds());
                assert_eq!(stroke.color, Color::GRAY);
            }
            _ => panic!("background ring must be drawn first"),
        }
        match commands[1] {
            DrawCommand::Arc {
                rect,
                start_angle,
                sweep_angle,
                use_center,
                stroke,
            } => {
                assert_eq!(rect, bar.bounds());
                assert_eq!(start_angle, 270.0);
                assert_eq!(sweep_angle, 180.0);
                assert!(!use_center);
                assert_eq!(stroke.color, Color::BLACK);
            }
            _ => panic!("progress arc must be drawn second"),
        }
    }

    #[test]
    fn test_direction_only_affects_arc() {
        let mut bar = CircularProgressBar::default();
        bar.measure(100.0, 100.0);
        bar.set_progress_value(25.0);

        let mut cw = RecordingCanvas::new();
        bar.draw(&mut cw);
        bar.set_direction(Direction::Counterclockwise);
        let mut ccw = RecordingCanvas::new();
        bar.draw(&mut ccw);

        assert_eq!(cw.commands()[0], ccw.commands()[0]);
        assert_ne!(cw.commands()[1], ccw.commands()[1]);
    }

    #[test]
    fn test_animated_transition_converges_monotonically() {
        let mut bar = CircularProgressBar::default();
        bar.measure(100.0, 100.0);
        let mut canvas = RecordingCanvas::new();
        bar.draw(&mut canvas);

        let mut tweener = FrameTweener::new();
        bar.animate_progress(
            AnimationArgsBuilder::default()
                .target_value(75.0)
                .direction(Direction::Clockwise)
                .duration(Duration::from_millis(1000))
                .build()
                .unwrap(),
            &mut tweener,
        );
        // Direction switches immediately, before the first frame.
        assert_eq!(bar.direction(), Direction::Clockwise);

        let mut last = bar.progress_value();
        let mut frames = 0;
        while !tweener.is_idle() {
            let samples = tweener.advance(Duration::from_millis(50));
            bar.apply_animation(samples);
            assert!(bar.needs_redraw(), "each frame schedules a redraw");
            bar.draw(&mut canvas);

            assert!(bar.progress_value() >= last);
            last = bar.progress_value();
            frames += 1;
        }

        assert_eq!(bar.progress_value(), 75.0);
        assert_eq!(frames, 20);
    }

    #[test]
    fn test_animation_args_defaults() {
        let args = AnimationArgs::to(60.0);
        assert_eq!(args.target_value, 60.0);
        assert_eq!(args.direction, None);
        assert_eq!(args.duration, Duration::from_millis(1500));
    }

    #[test]
    fn test_construction_accepts_out_of_range_value() {
        // Clamping happens only through the setter, not at construction.
        let bar = CircularProgressBar::new(
            CircularProgressBarArgsBuilder::default()
                .progress_value(250.0)
                .build()
                .unwrap(),
        );
        assert_eq!(bar.progress_value(), 250.0);
    }

    #[test]
    fn test_direction_attr_flag() {
        assert_eq!(Direction::from_attr_flag(0), Direction::Clockwise);
        assert_eq!(Direction::from_attr_flag(1), Direction::Counterclockwise);
        assert_eq!(Direction::from_attr_flag(7), Direction::Counterclockwise);
    }
}

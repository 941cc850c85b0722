//! A circular progress indicator widget.
//!
//! The widget renders a background ring and a progress arc over it, supports
//! clockwise and counter-clockwise progress, configurable stroke widths and
//! colors, and an animated transition between progress values. It is a leaf
//! component: the embedding environment supplies the drawing surface and the
//! frame scheduler through the [`Canvas`] and [`Tweening`] capabilities and
//! drives the widget via property setters.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use circular_progress::{
//!     AnimationArgs, CircularProgressBar, CircularProgressBarArgsBuilder, Color, Direction, Dp,
//!     FrameTweener,
//! };
//!
//! let mut bar = CircularProgressBar::new(
//!     CircularProgressBarArgsBuilder::default()
//!         .direction(Direction::Clockwise)
//!         .progress_stroke_width(Dp(10.0))
//!         .progress_color(Color::from_argb_u32(0xFF3366CC))
//!         .build()
//!         .unwrap(),
//! );
//!
//! // Layout: the footprint is always square.
//! let (width, height) = bar.measure(300.0, 200.0);
//! assert_eq!((width, height), (200.0, 200.0));
//!
//! // Kick off an animated transition and drive it frame by frame.
//! let mut tweener = FrameTweener::new();
//! bar.animate_progress(AnimationArgs::to(75.0), &mut tweener);
//! while !tweener.is_idle() {
//!     let samples = tweener.advance(Duration::from_millis(16));
//!     bar.apply_animation(samples);
//! }
//! assert_eq!(bar.progress_value(), 75.0);
//! ```

pub mod canvas;
pub mod color;
pub mod dp;
pub mod progress_bar;
pub mod tween;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use canvas::{Canvas, DrawCommand, Rect, Stroke};
pub use color::Color;
pub use dp::Dp;
pub use progress_bar::{
    AnimationArgs, AnimationArgsBuilder, CircularProgressBar, CircularProgressBarArgs,
    CircularProgressBarArgsBuilder, CircularProgressBarDefaults, Direction,
};
pub use tween::{DEFAULT_ANIMATION_DURATION, Easing, FrameTweener, Sample, Tweening};

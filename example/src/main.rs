//! Demo host for the circular progress bar.
//!
//! Builds a widget, runs an animated transition through the reference tween
//! engine at ~60 fps, and logs every frame's draw commands in place of a
//! real rasterizer.

use std::time::Duration;

use circular_progress::{
    AnimationArgsBuilder, CircularProgressBar, CircularProgressBarArgsBuilder, Color, Direction,
    Dp, FrameTweener, testing::RecordingCanvas,
};
use tracing::info;

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::new("info"),
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() {
    init_tracing();

    let mut bar = CircularProgressBar::new(
        CircularProgressBarArgsBuilder::default()
            .direction(Direction::Clockwise)
            .progress_stroke_width(Dp(10.0))
            .background_stroke_width(Dp(4.0))
            .progress_color(Color::from_argb_u32(0xFF3366CC))
            .background_color(Color::GRAY)
            .build()
            .expect("all args have defaults"),
    );

    let (width, height) = bar.measure(200.0, 200.0);
    info!(width, height, bounds = ?bar.bounds(), "layout");

    let mut tweener = FrameTweener::new();
    bar.animate_progress(
        AnimationArgsBuilder::default()
            .target_value(75.0)
            .duration(Duration::from_millis(1500))
            .build()
            .expect("target value is set"),
        &mut tweener,
    );

    let frame_budget = Duration::from_millis(16);
    let mut canvas = RecordingCanvas::new();
    let mut frame = 0u32;

    while !tweener.is_idle() {
        bar.apply_animation(tweener.advance(frame_budget));
        if bar.needs_redraw() {
            canvas.clear();
            bar.draw(&mut canvas);
            frame += 1;
            info!(
                frame,
                value = bar.progress_value(),
                sweep = bar.sweep_angle(),
                commands = ?canvas.commands(),
                "paint"
            );
        }
    }

    info!(value = bar.progress_value(), "transition finished");
}

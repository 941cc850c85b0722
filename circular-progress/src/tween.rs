//! Tweening capability.
//!
//! Animated property transitions are delegated to the embedding
//! environment's frame scheduler through the [`Tweening`] trait: the widget
//! registers a tween on a named property, the host samples it once per frame
//! and feeds the value back through the plain setter. [`FrameTweener`] is a
//! reference engine for hosts (and tests) that drive frames themselves.

use std::time::Duration;

use tracing::debug;

/// Easing curve mapping linear progress in `[0.0, 1.0]` to eased progress.
pub type Easing = fn(f32) -> f32;

/// Identity curve.
pub fn linear(progress: f32) -> f32 {
    progress.clamp(0.0, 1.0)
}

/// Decelerating curve: fast start, slow finish.
pub fn decelerate(progress: f32) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

fn cubic_bezier(t: f32, a: f32, b: f32, c: f32, d: f32) -> f32 {
    let u = 1.0 - t;
    (u * u * u * a) + (3.0 * u * u * t * b) + (3.0 * u * t * t * c) + (t * t * t * d)
}

fn cubic_bezier_easing(progress: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let x = progress.clamp(0.0, 1.0);
    let mut lo = 0.0;
    let mut hi = 1.0;
    let mut t = x;

    for _ in 0..16 {
        let mid = (lo + hi) * 0.5;
        let mid_x = cubic_bezier(mid, 0.0, x1, x2, 1.0);
        if mid_x < x {
            lo = mid;
        } else {
            hi = mid;
        }
        t = mid;
    }

    cubic_bezier(t, 0.0, y1, y2, 1.0).clamp(0.0, 1.0)
}

/// Standard material easing.
pub fn standard(progress: f32) -> f32 {
    cubic_bezier_easing(progress, 0.2, 0.0, 0.0, 1.0)
}

/// Default animated-transition duration.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(1500);

/// Frame-scheduler capability supplied by the embedding environment.
///
/// Registration is fire-and-forget: there is no completion callback and no
/// cancellation handle. Overlapping registrations on the same property are
/// resolved per frame, last write wins.
pub trait Tweening {
    /// Registers a tween driving `property` from `from` to `to` over
    /// `duration` under `easing`.
    fn animate(
        &mut self,
        property: &'static str,
        from: f32,
        to: f32,
        duration: Duration,
        easing: Easing,
    );
}

struct Tween {
    property: &'static str,
    from: f32,
    to: f32,
    duration: Duration,
    easing: Easing,
    elapsed: Duration,
}

impl Tween {
    fn sample(&self) -> f32 {
        let fraction = if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        self.from + (self.to - self.from) * (self.easing)(fraction)
    }

    fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// One sampled property value for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub property: &'static str,
    pub value: f32,
}

/// Host-driven reference tween engine.
///
/// The host calls [`advance`](Self::advance) once per frame and applies each
/// returned sample through the owning widget's plain setter. Tweens are kept
/// in registration order; when several drive the same property, the one
/// registered last produces the frame's value.
#[derive(Default)]
pub struct FrameTweener {
    tweens: Vec<Tween>,
}

impl FrameTweener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any tween is still running.
    pub fn is_idle(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Advances all tweens by `dt` and returns one sample per property.
    ///
    /// A tween's final frame samples exactly at its target value; finished
    /// tweens are dropped afterwards.
    pub fn advance(&mut self, dt: Duration) -> Vec<Sample> {
        let mut samples: Vec<Sample> = Vec::with_capacity(self.tweens.len());
        for tween in &mut self.tweens {
            tween.elapsed = tween.elapsed.saturating_add(dt);
            let sample = Sample {
                property: tween.property,
                value: tween.sample(),
            };
            match samples.iter_mut().find(|s| s.property == sample.property) {
                Some(existing) => *existing = sample,
                None => samples.push(sample),
            }
        }
        self.tweens.retain(|tween| !tween.finished());
        samples
    }
}

impl Tweening for FrameTweener {
    fn animate(
        &mut self,
        property: &'static str,
        from: f32,
        to: f32,
        duration: Duration,
        easing: Easing,
    ) {
        debug!(property, from, to, ?duration, "tween registered");
        self.tweens.push(Tween {
            property,
            from,
            to,
            duration,
            easing,
            elapsed: Duration::ZERO,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decelerate_endpoints() {
        assert_eq!(decelerate(0.0), 0.0);
        assert_eq!(decelerate(1.0), 1.0);
        // Fast start: halfway through time, more than halfway through value.
        assert!(decelerate(0.5) > 0.5);
    }

    #[test]
    fn test_decelerate_monotone() {
        let mut last = 0.0;
        for step in 0..=100 {
            let eased = decelerate(step as f32 / 100.0);
            assert!(eased >= last);
            last = eased;
        }
    }

    #[test]
    fn test_standard_endpoints() {
        assert!(standard(0.0).abs() < 1e-3);
        assert!((standard(1.0) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_tween_reaches_target() {
        let mut tweener = FrameTweener::new();
        tweener.animate("value", 0.0, 75.0, Duration::from_millis(100), decelerate);

        let mut last = None;
        for _ in 0..10 {
            for sample in tweener.advance(Duration::from_millis(10)) {
                last = Some(sample.value);
            }
        }
        assert_eq!(last, Some(75.0));
        assert!(tweener.is_idle());
    }

    #[test]
    fn test_zero_duration_samples_target_immediately() {
        let mut tweener = FrameTweener::new();
        tweener.animate("value", 10.0, 40.0, Duration::ZERO, linear);

        let samples = tweener.advance(Duration::from_millis(16));
        assert_eq!(samples, vec![Sample { property: "value", value: 40.0 }]);
        assert!(tweener.is_idle());
    }

    #[test]
    fn test_overlapping_tweens_last_write_wins() {
        let mut tweener = FrameTweener::new();
        tweener.animate("value", 0.0, 100.0, Duration::from_millis(100), linear);
        tweener.animate("value", 0.0, 10.0, Duration::from_millis(100), linear);

        let samples = tweener.advance(Duration::from_millis(50));
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].value, 5.0);
    }
}

//! Density-independent lengths.
//!
//! Stroke widths are specified in dp so the widget keeps the same physical
//! size across screen densities. A global scale factor converts dp to
//! physical pixels; until the host sets one, conversions assume 1.0.

use std::sync::OnceLock;

use parking_lot::RwLock;

/// Global dp-to-pixel scale factor, typically set once by the host from the
/// display's density.
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Installs or updates the global scale factor.
pub fn set_scale_factor(factor: f64) {
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(1.0));
    *lock.write() = factor;
}

fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0)
}

/// A length in density-independent pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Creates a dp value; usable in const contexts.
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Converts to physical pixels under the current scale factor.
    pub fn to_pixels_f32(self) -> f32 {
        (self.0 * scale_factor()) as f32
    }

    /// Converts a physical pixel length back to dp.
    pub fn from_pixels_f32(value: f32) -> Self {
        Dp(value as f64 / scale_factor())
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscaled_conversion_is_identity() {
        // The scale factor is process-global, so tests leave it untouched
        // and rely on the 1.0 default.
        assert_eq!(Dp(16.0).to_pixels_f32(), 16.0);
        assert_eq!(Dp::from_pixels_f32(48.0), Dp(48.0));
    }

    #[test]
    fn test_from_f64() {
        let dp: Dp = 24.0.into();
        assert_eq!(dp, Dp(24.0));
    }
}

//! Linear mapping between calibrated ranges.
//!
//! Used for both fingertip distance → volume/brightness and camera → screen
//! coordinates. The mapping always saturates at the output bounds so no
//! effector ever receives a value outside its legal range.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Closed interval `[min, max]`
///
/// `min > max` is allowed and describes a decreasing mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    /// Value at the start of the interval
    pub min: f64,
    /// Value at the end of the interval
    pub max: f64,
}

impl Range {
    /// Create a new range
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Signed width of the interval
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Bounds in ascending order
    #[must_use]
    pub fn ordered(&self) -> (f64, f64) {
        if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        }
    }

    /// Saturate `value` at the interval bounds
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        let (low, high) = self.ordered();
        value.max(low).min(high)
    }

    /// Check the range can be used as a mapping endpoint
    ///
    /// # Errors
    ///
    /// `DegenerateRange` when `min == max`, `ConfigError` when a bound is not finite.
    #[allow(clippy::float_cmp)] // Only an exact collapse makes the mapping undefined
    pub fn validate(&self, name: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(Error::ConfigError(format!(
                "{name} must have finite bounds, got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.min == self.max {
            return Err(Error::DegenerateRange {
                name: name.to_string(),
                value: self.min,
            });
        }
        Ok(())
    }
}

/// Map `value` from `in_range` onto `out_range`, clamped to `out_range`.
///
/// `in_range` must not be degenerate; see [`Range::validate`].
#[must_use]
pub fn map(value: f64, in_range: Range, out_range: Range) -> f64 {
    let t = (value - in_range.min) / in_range.span();
    out_range.clamp(out_range.min + t * out_range.span())
}

/// Maps fingertip positions from the usable camera area to screen pixels.
///
/// A border of `frame_reduction` pixels on every side of the camera frame is a
/// dead zone; the remaining rectangle covers the whole screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMapper {
    camera_x: Range,
    camera_y: Range,
    screen_x: Range,
    screen_y: Range,
}

impl ScreenMapper {
    /// Create a mapper for the given camera and screen geometry
    ///
    /// # Errors
    ///
    /// `ConfigError` if the inset leaves no usable camera area or a dimension is zero.
    pub fn new(
        camera_width: u32,
        camera_height: u32,
        frame_reduction: u32,
        screen_width: u32,
        screen_height: u32,
    ) -> Result<Self> {
        if screen_width == 0 || screen_height == 0 {
            return Err(Error::ConfigError(format!(
                "Screen size must be non-zero, got {screen_width}x{screen_height}"
            )));
        }
        let inset = u64::from(frame_reduction) * 2;
        if inset >= u64::from(camera_width) || inset >= u64::from(camera_height) {
            return Err(Error::ConfigError(format!(
                "Frame reduction {frame_reduction} leaves no usable area in a {camera_width}x{camera_height} camera frame"
            )));
        }

        let reduction = f64::from(frame_reduction);
        Ok(Self {
            camera_x: Range::new(reduction, f64::from(camera_width) - reduction),
            camera_y: Range::new(reduction, f64::from(camera_height) - reduction),
            screen_x: Range::new(0.0, f64::from(screen_width)),
            screen_y: Range::new(0.0, f64::from(screen_height)),
        })
    }

    /// Convert a camera pixel position to a screen position
    #[must_use]
    pub fn to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (
            map(x, self.camera_x, self.screen_x),
            map(y, self.camera_y, self.screen_y),
        )
    }
}

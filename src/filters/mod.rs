//! Pointer smoothing filters.
//!
//! Fingertip positions from the landmark detector jitter by a few pixels every
//! frame. The filters here damp that jitter into continuous pointer motion.

/// Damped exponential smoothing used for the pointer
pub mod damped;

use crate::{constants::DEFAULT_SMOOTHENING, Result};

/// Trait for all cursor filters
///
/// Filters keep their own state across frames and are never reset:
/// the state always equals the last position handed to the pointer.
pub trait CursorFilter: Send + Sync {
    /// Apply filter to a screen-space target and return the position to move to
    fn apply(&mut self, x: f64, y: f64) -> (f64, f64);

    /// Last position returned by [`CursorFilter::apply`]
    fn position(&self) -> (f64, f64);

    /// Get filter name
    fn name(&self) -> &str;
}

/// No-op filter that passes through values unchanged
#[derive(Default)]
pub struct NoFilter {
    last: (f64, f64),
}

impl CursorFilter for NoFilter {
    fn apply(&mut self, x: f64, y: f64) -> (f64, f64) {
        self.last = (x, y);
        self.last
    }

    fn position(&self) -> (f64, f64) {
        self.last
    }

    fn name(&self) -> &str {
        "NoFilter"
    }
}

/// Create a cursor filter from a spec string.
///
/// Accepted forms are `none`, `damped` (factor 7) and `damped:<factor>`.
pub fn create_filter(filter_spec: &str) -> Result<Box<dyn CursorFilter>> {
    let spec = filter_spec.trim().to_lowercase();
    let (name, param) = match spec.split_once(':') {
        Some((name, param)) => (name, Some(param)),
        None => (spec.as_str(), None),
    };

    match (name, param) {
        ("none" | "nofilter", None) => Ok(Box::new(NoFilter::default())),
        ("damped" | "smoothening", None) => Ok(Box::new(damped::DampedFilter::new(DEFAULT_SMOOTHENING))),
        ("damped" | "smoothening", Some(param)) => {
            let factor: f64 = param.parse().map_err(|_| {
                crate::Error::FilterError(format!("Invalid smoothing factor: {param}"))
            })?;
            if !factor.is_finite() || factor <= 1.0 {
                return Err(crate::Error::FilterError(format!(
                    "Smoothing factor must be greater than 1, got {factor}"
                )));
            }
            Ok(Box::new(damped::DampedFilter::new(factor)))
        }
        _ => Err(crate::Error::FilterError(format!("Unknown filter type: {filter_spec}"))),
    }
}

//! Geometry helpers and numeric conversions.

pub mod safe_cast;

/// Euclidean distance between two points in pixel space
#[must_use]
pub fn euclidean_distance(p1: (f64, f64), p2: (f64, f64)) -> f64 {
    (p1.0 - p2.0).hypot(p1.1 - p2.1)
}

/// Midpoint between two points, used for reporting where a pinch happened
#[must_use]
pub fn midpoint(p1: (f64, f64), p2: (f64, f64)) -> (f64, f64) {
    ((p1.0 + p2.0) / 2.0, (p1.1 + p2.1) / 2.0)
}

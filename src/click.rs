//! Pinch-to-click detection.

use crate::utils::euclidean_distance;

/// True when the two fingertips are strictly closer than `threshold` pixels.
///
/// Stateless: a pinch held across frames reports a click on every frame.
#[must_use]
pub fn should_click(p1: (f64, f64), p2: (f64, f64), threshold: f64) -> bool {
    euclidean_distance(p1, p2) < threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        assert!(should_click((0.0, 0.0), (39.9, 0.0), 40.0));
        assert!(!should_click((0.0, 0.0), (40.0, 0.0), 40.0));
        assert!(!should_click((0.0, 0.0), (40.1, 0.0), 40.0));
    }

    #[test]
    fn test_diagonal_distance() {
        // 3-4-5 triangle scaled to 30-40-50
        assert!(!should_click((100.0, 100.0), (130.0, 140.0), 50.0));
        assert!(should_click((100.0, 100.0), (130.0, 140.0), 50.5));
    }

    #[test]
    fn test_same_point_clicks() {
        assert!(should_click((12.0, 34.0), (12.0, 34.0), 40.0));
    }
}

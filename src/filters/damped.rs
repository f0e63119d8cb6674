use super::CursorFilter;

/// Last smoothed pointer position
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SmoothingState {
    /// Previous smoothed x
    pub prev_x: f64,
    /// Previous smoothed y
    pub prev_y: f64,
}

/// Move each axis `1 / factor` of the way from the previous output to the target.
///
/// `state` is overwritten with the returned position.
pub fn smooth(target_x: f64, target_y: f64, state: &mut SmoothingState, factor: f64) -> (f64, f64) {
    let x = state.prev_x + (target_x - state.prev_x) / factor;
    let y = state.prev_y + (target_y - state.prev_y) / factor;

    state.prev_x = x;
    state.prev_y = y;

    (x, y)
}

/// Damped exponential smoothing filter for pointer targets.
///
/// Starts at the screen origin and never resets, so a hand that is lost and
/// found again elsewhere makes the pointer glide from its last position.
pub struct DampedFilter {
    factor: f64,
    state: SmoothingState,
}

impl DampedFilter {
    /// Create a filter starting at the origin
    ///
    /// # Panics
    ///
    /// If `factor` is not a finite number greater than 1.
    pub fn new(factor: f64) -> Self {
        assert!(factor.is_finite() && factor > 1.0, "Smoothing factor must be greater than 1");
        Self {
            factor,
            state: SmoothingState::default(),
        }
    }

    /// Smoothing factor
    pub const fn factor(&self) -> f64 {
        self.factor
    }

    /// Last smoothed position
    pub const fn state(&self) -> SmoothingState {
        self.state
    }
}

impl CursorFilter for DampedFilter {
    fn apply(&mut self, x: f64, y: f64) -> (f64, f64) {
        smooth(x, y, &mut self.state, self.factor)
    }

    fn position(&self) -> (f64, f64) {
        (self.state.prev_x, self.state.prev_y)
    }

    fn name(&self) -> &str {
        "DampedFilter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smooth_moves_fraction_of_distance() {
        let mut state = SmoothingState::default();
        let (x, y) = smooth(700.0, 1400.0, &mut state, 7.0);
        assert_eq!((x, y), (100.0, 200.0));
        assert_eq!(state, SmoothingState { prev_x: 100.0, prev_y: 200.0 });

        let (x, y) = smooth(700.0, 1400.0, &mut state, 7.0);
        assert!((x - (100.0 + 600.0 / 7.0)).abs() < 1e-9);
        assert!((y - (200.0 + 1200.0 / 7.0)).abs() < 1e-9);
    }

    #[test]
    fn test_smooth_at_target_stays_put() {
        let mut state = SmoothingState { prev_x: 50.0, prev_y: 60.0 };
        assert_eq!(smooth(50.0, 60.0, &mut state, 7.0), (50.0, 60.0));
    }

    #[test]
    fn test_damped_filter_tracks_state() {
        let mut filter = DampedFilter::new(4.0);
        assert_eq!(filter.position(), (0.0, 0.0));
        let out = filter.apply(400.0, -400.0);
        assert_eq!(out, (100.0, -100.0));
        assert_eq!(filter.position(), out);
        assert_eq!(filter.state().prev_x, 100.0);
        assert_eq!(filter.factor(), 4.0);
    }

    #[test]
    #[should_panic(expected = "Smoothing factor must be greater than 1")]
    fn test_factor_must_exceed_one() {
        let _ = DampedFilter::new(1.0);
    }
}

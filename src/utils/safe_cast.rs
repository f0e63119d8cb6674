//! Saturating float-to-integer conversions for effector arguments

/// Clamp and convert f64 to i16 for X11 pointer coordinates
///
/// Non-finite values map to 0.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // Clamping ensures safe truncation
pub fn f64_to_i16_clamp(value: f64) -> i16 {
    if !value.is_finite() {
        return 0;
    }

    value.clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
}

/// Convert a brightness value to an integer percent in `[0, 100]`
///
/// The value is truncated toward zero before clamping, so 99.9 becomes 99.
/// Non-finite values map to 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Clamped to [0, 100]
pub fn f64_to_percent(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }

    value.trunc().clamp(0.0, 100.0) as u8
}

/// Round and convert f64 to u32 within `[0, max]`
///
/// Non-finite values map to 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Clamped to [0, max]
pub fn f64_to_u32_clamp(value: f64, max: u32) -> u32 {
    if !value.is_finite() {
        return 0;
    }

    value.round().clamp(0.0, f64::from(max)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_f64_to_i16_clamp() {
        assert_eq!(f64_to_i16_clamp(42.0), 42);
        assert_eq!(f64_to_i16_clamp(-42.7), -42);
        assert_eq!(f64_to_i16_clamp(1e9), i16::MAX);
        assert_eq!(f64_to_i16_clamp(-1e9), i16::MIN);
        assert_eq!(f64_to_i16_clamp(f64::NAN), 0);
        assert_eq!(f64_to_i16_clamp(f64::INFINITY), 0);
    }

    #[test]
    fn test_f64_to_percent() {
        assert_eq!(f64_to_percent(50.0), 50);
        assert_eq!(f64_to_percent(99.9), 99);
        assert_eq!(f64_to_percent(100.0), 100);
        assert_eq!(f64_to_percent(250.0), 100);
        assert_eq!(f64_to_percent(-3.0), 0);
        assert_eq!(f64_to_percent(f64::NAN), 0);
    }

    #[test]
    fn test_f64_to_u32_clamp() {
        assert_eq!(f64_to_u32_clamp(127.4, 255), 127);
        assert_eq!(f64_to_u32_clamp(127.5, 255), 128);
        assert_eq!(f64_to_u32_clamp(300.0, 255), 255);
        assert_eq!(f64_to_u32_clamp(-1.0, 255), 0);
        assert_eq!(f64_to_u32_clamp(f64::NEG_INFINITY, 255), 0);
    }

    // Property-based tests
    proptest! {
        #[test]
        fn prop_percent_always_within_bounds(value in any::<f64>()) {
            prop_assert!(f64_to_percent(value) <= 100);
        }

        #[test]
        fn prop_i16_clamp_preserves_small_integers(value in any::<i16>()) {
            prop_assert_eq!(f64_to_i16_clamp(f64::from(value)), value);
        }

        #[test]
        fn prop_u32_clamp_within_max(value in any::<f64>(), max in any::<u32>()) {
            prop_assert!(f64_to_u32_clamp(value, max) <= max);
        }
    }
}

//! Gesture classification from the finger-up vector.

use crate::landmarks::Fingers;
use std::fmt;

/// Action category selected for a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControlMode {
    /// No recognized gesture
    #[default]
    Idle,
    /// Thumb and index up: thumb-index distance sets the volume
    Volume,
    /// Thumb and middle up: thumb-middle distance sets the brightness
    Brightness,
    /// Index up alone (mouse control on): index tip drives the pointer
    MouseMove,
    /// Index and middle up (mouse control on): pinching them clicks
    MouseClick,
}

impl ControlMode {
    /// Every mode, in classification priority order
    pub const ALL: [Self; 5] = [
        Self::Volume,
        Self::Brightness,
        Self::MouseMove,
        Self::MouseClick,
        Self::Idle,
    ];

    /// Whether this mode drives the pointer
    pub const fn is_mouse(self) -> bool {
        matches!(self, Self::MouseMove | Self::MouseClick)
    }
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "Idle",
            Self::Volume => "Volume",
            Self::Brightness => "Brightness",
            Self::MouseMove => "Mouse move",
            Self::MouseClick => "Mouse click",
        };
        f.write_str(label)
    }
}

/// Map the finger-up vector to exactly one control mode.
///
/// Rules are checked top to bottom and the first match wins. Volume and
/// brightness patterns are honored whether or not mouse control is enabled;
/// mouse patterns are ignored while it is disabled. Ring and pinky are not
/// consulted.
#[must_use]
pub fn classify(fingers: Fingers, mouse_control_enabled: bool) -> ControlMode {
    let [thumb, index, middle, _, _] = fingers;

    match (thumb, index, middle) {
        (true, true, false) => ControlMode::Volume,
        (true, false, true) => ControlMode::Brightness,
        (_, true, false) if mouse_control_enabled => ControlMode::MouseMove,
        (_, true, true) if mouse_control_enabled => ControlMode::MouseClick,
        _ => ControlMode::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_pattern() {
        assert_eq!(classify([true, true, false, false, false], false), ControlMode::Volume);
        assert_eq!(classify([true, true, false, true, true], true), ControlMode::Volume);
    }

    #[test]
    fn test_brightness_pattern() {
        assert_eq!(classify([true, false, true, false, false], false), ControlMode::Brightness);
        assert_eq!(classify([true, false, true, false, false], true), ControlMode::Brightness);
    }

    #[test]
    fn test_mouse_patterns_need_mouse_control() {
        assert_eq!(classify([false, true, false, false, false], false), ControlMode::Idle);
        assert_eq!(classify([false, true, false, false, false], true), ControlMode::MouseMove);
        assert_eq!(classify([false, true, true, false, false], false), ControlMode::Idle);
        assert_eq!(classify([false, true, true, false, false], true), ControlMode::MouseClick);
    }

    #[test]
    fn test_thumb_with_index_and_middle_is_click() {
        assert_eq!(classify([true, true, true, false, false], true), ControlMode::MouseClick);
    }

    #[test]
    fn test_fist_is_idle() {
        assert_eq!(classify([false; 5], true), ControlMode::Idle);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(ControlMode::MouseMove.to_string(), "Mouse move");
        assert!(ControlMode::MouseClick.is_mouse());
        assert!(!ControlMode::Volume.is_mouse());
    }
}

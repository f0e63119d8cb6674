//! Edge-triggered toggle for the mouse-control flag.
//!
//! Holding the toggle key must not make the mode oscillate every frame, so the
//! flag only flips on the frame where the key goes from released to pressed.

/// Mouse-control flag and the key latch that guards it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleState {
    /// Whether mouse gestures are currently interpreted
    pub mouse_control_enabled: bool,
    /// Key state seen on the previous update
    pub key_was_down: bool,
}

impl ToggleState {
    /// Both flags start cleared
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mouse_control_enabled: false,
            key_was_down: false,
        }
    }

    /// Feed the current key state and return the resulting mouse-control flag
    pub fn update(&mut self, key_down_now: bool) -> bool {
        if key_down_now && !self.key_was_down {
            self.mouse_control_enabled = !self.mouse_control_enabled;
        }
        self.key_was_down = key_down_now;

        self.mouse_control_enabled
    }
}

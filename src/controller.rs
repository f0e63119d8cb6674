//! Per-frame gesture interpretation.
//!
//! [`step`] turns one frame of landmarks plus the toggle key into an ordered
//! list of [`Action`]s. It never touches the OS; the application loop performs
//! the actions afterwards, which keeps the decision logic deterministic and
//! testable without hardware.

use crate::{
    click::should_click,
    config::Config,
    constants::{INDEX_TIP, MIDDLE_TIP, THUMB_TIP},
    error::Result,
    filters::CursorFilter,
    gesture::{classify, ControlMode},
    landmarks::LandmarkFrame,
    mapping::{map, Range, ScreenMapper},
    toggle::ToggleState,
    utils::{midpoint, safe_cast::f64_to_percent},
};
use log::debug;

/// Effector call requested by a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Set the master volume, in the device-native range
    SetVolume(f64),
    /// Set the display brightness in percent
    SetBrightness(u8),
    /// Move the pointer to an absolute screen position
    MovePointer {
        /// Screen x in pixels
        x: f64,
        /// Screen y in pixels
        y: f64,
    },
    /// Press and release the primary button
    Click,
}

/// Validated, read-only parameters for [`step`]
#[derive(Debug, Clone, Copy)]
pub struct ControlSettings {
    /// Fingertip distance calibration range
    pub distance_range: Range,
    /// Device volume range
    pub volume_range: Range,
    /// Brightness range in percent
    pub brightness_range: Range,
    /// Camera-to-screen mapping
    pub screen_mapper: ScreenMapper,
    /// Pinch distance below which a click fires
    pub click_threshold: f64,
}

impl ControlSettings {
    /// Build settings from a configuration, validating it first
    ///
    /// # Errors
    ///
    /// Any validation failure of [`Config::validate`], including `DegenerateRange`.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            distance_range: config.mapping.distance_range,
            volume_range: config.mapping.volume_range,
            brightness_range: config.mapping.brightness_range,
            screen_mapper: config.screen_mapper()?,
            click_threshold: config.cursor.click_threshold,
        })
    }
}

/// State carried from one frame to the next
pub struct ControlState {
    /// Mouse-control toggle
    pub toggle: ToggleState,
    /// Pointer smoothing filter and its last output
    pub cursor_filter: Box<dyn CursorFilter>,
}

impl ControlState {
    /// Fresh state: mouse control off, pointer filter at the origin
    pub fn new(cursor_filter: Box<dyn CursorFilter>) -> Self {
        Self {
            toggle: ToggleState::new(),
            cursor_filter,
        }
    }
}

/// What a single frame decided
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    /// Whether a hand was present
    pub hand_present: bool,
    /// Mouse-control flag after this frame
    pub mouse_control_enabled: bool,
    /// Selected mode, `Idle` when no hand was present
    pub mode: ControlMode,
    /// Effector calls to perform, in order
    pub actions: Vec<Action>,
}

/// Interpret one frame.
///
/// A frame without a hand changes nothing: the toggle, the smoothing state
/// and the effectors are all left alone.
pub fn step(
    frame: Option<&LandmarkFrame>,
    key_down: bool,
    state: &mut ControlState,
    settings: &ControlSettings,
) -> StepOutcome {
    let Some(frame) = frame else {
        return StepOutcome {
            hand_present: false,
            mouse_control_enabled: state.toggle.mouse_control_enabled,
            mode: ControlMode::Idle,
            actions: Vec::new(),
        };
    };

    let mouse_control_enabled = state.toggle.update(key_down);
    let mode = classify(frame.fingers(), mouse_control_enabled);

    let mut actions = Vec::new();
    match mode {
        ControlMode::Idle => {}
        ControlMode::Volume => {
            let length = frame.distance(THUMB_TIP, INDEX_TIP);
            let level = map(length, settings.distance_range, settings.volume_range);
            actions.push(Action::SetVolume(level));
        }
        ControlMode::Brightness => {
            let length = frame.distance(THUMB_TIP, MIDDLE_TIP);
            let bright = map(length, settings.distance_range, settings.brightness_range);
            actions.push(Action::SetBrightness(f64_to_percent(bright)));
        }
        ControlMode::MouseMove => {
            let (x1, y1) = frame.point(INDEX_TIP).to_f64();
            let (x3, y3) = settings.screen_mapper.to_screen(x1, y1);
            let (x, y) = state.cursor_filter.apply(x3, y3);
            actions.push(Action::MovePointer { x, y });
        }
        ControlMode::MouseClick => {
            let index = frame.point(INDEX_TIP).to_f64();
            let middle = frame.point(MIDDLE_TIP).to_f64();
            if should_click(index, middle, settings.click_threshold) {
                debug!("Pinch click at {:?}", midpoint(index, middle));
                actions.push(Action::Click);
            }
        }
    }

    StepOutcome {
        hand_present: true,
        mouse_control_enabled,
        mode,
        actions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constants::NUM_HAND_LANDMARKS, filters::create_filter, landmarks::Point};

    fn settings() -> ControlSettings {
        ControlSettings::from_config(&Config::default()).unwrap()
    }

    fn state() -> ControlState {
        ControlState::new(create_filter("damped:7").unwrap())
    }

    fn frame(fingers: [bool; 5], points: &[(usize, Point)]) -> LandmarkFrame {
        let mut landmarks = vec![Point::new(320, 240); NUM_HAND_LANDMARKS];
        for &(index, point) in points {
            landmarks[index] = point;
        }
        LandmarkFrame::new(landmarks, fingers).unwrap()
    }

    #[test]
    fn test_no_hand_is_a_no_op() {
        let mut state = state();
        let outcome = step(None, true, &mut state, &settings());
        assert!(!outcome.hand_present);
        assert_eq!(outcome.mode, ControlMode::Idle);
        assert!(outcome.actions.is_empty());
        assert_eq!(state.toggle, ToggleState::new());
        assert_eq!(state.cursor_filter.position(), (0.0, 0.0));
    }

    #[test]
    fn test_volume_action() {
        let frame = frame(
            [true, true, false, false, false],
            &[(THUMB_TIP, Point::new(100, 100)), (INDEX_TIP, Point::new(215, 100))],
        );
        let outcome = step(Some(&frame), false, &mut state(), &settings());
        assert_eq!(outcome.mode, ControlMode::Volume);
        assert_eq!(outcome.actions, vec![Action::SetVolume(-32.5)]);
    }

    #[test]
    fn test_brightness_action_truncates_percent() {
        // 200 px apart saturates at 100 percent
        let saturated = frame(
            [true, false, true, false, false],
            &[(THUMB_TIP, Point::new(0, 0)), (MIDDLE_TIP, Point::new(0, 250))],
        );
        let outcome = step(Some(&saturated), false, &mut state(), &settings());
        assert_eq!(outcome.actions, vec![Action::SetBrightness(100)]);

        // 116 px is 50.58 percent
        let partial = frame(
            [true, false, true, false, false],
            &[(THUMB_TIP, Point::new(0, 0)), (MIDDLE_TIP, Point::new(116, 0))],
        );
        let outcome = step(Some(&partial), false, &mut state(), &settings());
        assert_eq!(outcome.actions, vec![Action::SetBrightness(50)]);
    }

    #[test]
    fn test_mouse_move_is_smoothed() {
        let mut state = state();
        let settings = settings();
        let frame = frame([false, true, false, false, false], &[(INDEX_TIP, Point::new(540, 380))]);

        let outcome = step(Some(&frame), true, &mut state, &settings);
        assert_eq!(outcome.mode, ControlMode::MouseMove);
        let Action::MovePointer { x, y } = outcome.actions[0] else {
            panic!("Expected MovePointer, got {:?}", outcome.actions);
        };
        assert!((x - 1920.0 / 7.0).abs() < 1e-9);
        assert!((y - 1080.0 / 7.0).abs() < 1e-9);
        assert_eq!(state.cursor_filter.position(), (x, y));
    }

    #[test]
    fn test_click_only_when_pinched() {
        let mut state = state();
        let settings = settings();
        state.toggle.update(true);

        let apart = frame(
            [false, true, true, false, false],
            &[(INDEX_TIP, Point::new(300, 200)), (MIDDLE_TIP, Point::new(360, 200))],
        );
        let outcome = step(Some(&apart), true, &mut state, &settings);
        assert_eq!(outcome.mode, ControlMode::MouseClick);
        assert!(outcome.actions.is_empty());

        let pinched = frame(
            [false, true, true, false, false],
            &[(INDEX_TIP, Point::new(300, 200)), (MIDDLE_TIP, Point::new(320, 200))],
        );
        let outcome = step(Some(&pinched), true, &mut state, &settings);
        assert_eq!(outcome.actions, vec![Action::Click]);
        assert_eq!(state.cursor_filter.position(), (0.0, 0.0));
    }
}

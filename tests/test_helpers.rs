//! Helper functions and test doubles for integration tests

#![allow(dead_code)]

use hand_gesture_control::{
    app::Effectors,
    capabilities::{BrightnessSink, Capture, FrameSource, KeySource, KeyState, PointerSink, VolumeSink},
    constants::NUM_HAND_LANDMARKS,
    error::{AppError, Result},
    landmarks::{Fingers, LandmarkFrame, Point},
};
use std::{cell::RefCell, collections::VecDeque, rc::Rc};

/// Thumb and index up
pub const VOLUME_FINGERS: Fingers = [true, true, false, false, false];
/// Thumb and middle up
pub const BRIGHTNESS_FINGERS: Fingers = [true, false, true, false, false];
/// Index up only
pub const MOVE_FINGERS: Fingers = [false, true, false, false, false];
/// Index and middle up
pub const CLICK_FINGERS: Fingers = [false, true, true, false, false];
/// Fist
pub const FIST: Fingers = [false; 5];

/// One effector call seen by the recording doubles
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Call {
    Volume(f64),
    Brightness(u8),
    Move(f64, f64),
    Click,
}

/// Shared, ordered log of effector calls
pub type CallLog = Rc<RefCell<Vec<Call>>>;

/// Effector double that records every call and optionally fails
pub struct RecordingSink {
    log: CallLog,
    fail: bool,
}

impl RecordingSink {
    fn record(&self, call: Call) -> Result<()> {
        self.log.borrow_mut().push(call);
        if self.fail {
            Err(AppError::CursorControl(format!("{call:?} rejected")))
        } else {
            Ok(())
        }
    }
}

impl VolumeSink for RecordingSink {
    fn set_volume(&mut self, level: f64) -> Result<()> {
        self.record(Call::Volume(level))
    }
}

impl BrightnessSink for RecordingSink {
    fn set_brightness(&mut self, percent: u8) -> Result<()> {
        self.record(Call::Brightness(percent))
    }
}

impl PointerSink for RecordingSink {
    fn move_pointer_to(&mut self, x: f64, y: f64) -> Result<()> {
        self.record(Call::Move(x, y))
    }

    fn click(&mut self) -> Result<()> {
        self.record(Call::Click)
    }
}

/// Effectors that all record into the returned log
pub fn recording_effectors() -> (Effectors, CallLog) {
    effectors_with_failures(false)
}

/// Recording effectors whose calls all fail when `fail` is set
pub fn effectors_with_failures(fail: bool) -> (Effectors, CallLog) {
    let log = CallLog::default();
    let sink = || Box::new(RecordingSink { log: Rc::clone(&log), fail });
    let effectors = Effectors {
        volume: sink(),
        brightness: sink(),
        pointer: sink(),
    };
    (effectors, log)
}

/// Frame source that plays back a fixed script, then ends the stream
pub struct ScriptedFrames {
    script: VecDeque<Result<Capture>>,
}

impl ScriptedFrames {
    pub fn new(script: Vec<Result<Capture>>) -> Self {
        Self { script: script.into() }
    }

    /// Every frame has a hand
    pub fn hands(frames: Vec<LandmarkFrame>) -> Self {
        Self::new(frames.into_iter().map(|f| Ok(Capture::Hand(f))).collect())
    }
}

impl FrameSource for ScriptedFrames {
    fn capture(&mut self) -> Result<Capture> {
        self.script.pop_front().unwrap_or(Ok(Capture::EndOfStream))
    }
}

/// Key source that plays back a fixed script, then reports nothing pressed
pub struct ScriptedKeys {
    script: VecDeque<KeyState>,
}

impl ScriptedKeys {
    pub fn new(script: Vec<KeyState>) -> Self {
        Self { script: script.into() }
    }

    /// Toggle key held on the given frames (0-based)
    pub fn toggle_on(frames: usize, held: &[usize]) -> Self {
        Self::new(
            (0..frames)
                .map(|i| KeyState {
                    toggle_down: held.contains(&i),
                    quit_down: false,
                })
                .collect(),
        )
    }
}

impl KeySource for ScriptedKeys {
    fn poll(&mut self) -> Result<KeyState> {
        Ok(self.script.pop_front().unwrap_or_default())
    }
}

/// Hand frame with every landmark at the camera centre except `points`
pub fn hand_frame(fingers: Fingers, points: &[(usize, (i32, i32))]) -> LandmarkFrame {
    let mut landmarks = vec![Point::new(320, 240); NUM_HAND_LANDMARKS];
    for &(index, (x, y)) in points {
        landmarks[index] = Point::new(x, y);
    }
    LandmarkFrame::new(landmarks, fingers).expect("21 landmarks")
}

//! Main application module: the frame loop.

use crate::{
    capabilities::{BrightnessSink, Capture, FrameSource, KeySource, KeyState, PointerSink, VolumeSink},
    config::Config,
    controller::{step, Action, ControlSettings, ControlState, StepOutcome},
    error::Result,
    gesture::ControlMode,
    landmarks::LandmarkFrame,
};
use log::{debug, error, info, warn};
use std::time::{Duration, Instant};

/// OS effectors driven by the frame loop
pub struct Effectors {
    /// Audio volume
    pub volume: Box<dyn VolumeSink>,
    /// Display brightness
    pub brightness: Box<dyn BrightnessSink>,
    /// Pointer motion and clicks
    pub pointer: Box<dyn PointerSink>,
}

/// Why the frame loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The quit key was pressed
    QuitKey,
    /// The frame source ran out of frames
    EndOfStream,
    /// The frame source failed
    AcquisitionFailure,
    /// The configured frame limit was reached
    FrameLimit,
}

/// Counters reported when the loop stops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Frames processed
    pub frames: u64,
    /// Frames in which a hand was present
    pub hand_frames: u64,
    /// Effector calls performed successfully
    pub actions: u64,
    /// Effector calls that failed
    pub effector_failures: u64,
    /// Why the loop ended
    pub stop_reason: StopReason,
}

/// Main application struct
pub struct GestureApp {
    settings: ControlSettings,
    state: ControlState,
    frames: Box<dyn FrameSource>,
    keys: Box<dyn KeySource>,
    effectors: Effectors,
    max_frames: Option<u64>,
    last_mode: ControlMode,
}

impl GestureApp {
    /// Create a new gesture control application
    ///
    /// # Errors
    ///
    /// Fails on invalid configuration, e.g. a `DegenerateRange`; the loop never starts.
    pub fn new(
        config: &Config,
        frames: Box<dyn FrameSource>,
        keys: Box<dyn KeySource>,
        effectors: Effectors,
    ) -> Result<Self> {
        info!("Initializing hand gesture control");

        let settings = ControlSettings::from_config(config)?;
        let cursor_filter = config.create_filter()?;
        info!(
            "Pointer smoothing: {}, click threshold {} px",
            cursor_filter.name(),
            settings.click_threshold
        );

        Ok(Self {
            settings,
            state: ControlState::new(cursor_filter),
            frames,
            keys,
            effectors,
            max_frames: None,
            last_mode: ControlMode::Idle,
        })
    }

    /// Stop after `max_frames` frames
    pub fn with_max_frames(mut self, max_frames: Option<u64>) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// State carried between frames
    pub const fn state(&self) -> &ControlState {
        &self.state
    }

    /// Run the main application loop
    ///
    /// Runs until the quit key, the end of the frame stream, an acquisition
    /// failure or the frame limit. Effector failures are logged and skipped.
    pub fn run(&mut self) -> Result<RunStats> {
        info!("Starting main application loop");

        let mut stats = RunStats {
            frames: 0,
            hand_frames: 0,
            actions: 0,
            effector_failures: 0,
            stop_reason: StopReason::EndOfStream,
        };
        let start_time = Instant::now();
        let mut last_fps_update = Instant::now();

        loop {
            if self.max_frames.is_some_and(|max| stats.frames >= max) {
                info!("Frame limit of {} reached", stats.frames);
                stats.stop_reason = StopReason::FrameLimit;
                break;
            }

            let capture = match self.frames.capture() {
                Ok(capture) => capture,
                Err(e) => {
                    error!("Failed to acquire frame: {}", e);
                    stats.stop_reason = StopReason::AcquisitionFailure;
                    break;
                }
            };
            let frame = match capture {
                Capture::Hand(frame) => Some(frame),
                Capture::NoHand => None,
                Capture::EndOfStream => {
                    info!("End of landmark stream reached");
                    stats.stop_reason = StopReason::EndOfStream;
                    break;
                }
            };

            let keys = self.keys.poll().unwrap_or_else(|e| {
                warn!("Failed to poll keyboard: {}", e);
                KeyState::default()
            });

            let outcome = self.process_frame(frame.as_ref(), keys.toggle_down);
            stats.frames += 1;
            if outcome.hand_present {
                stats.hand_frames += 1;
            }

            let failures = self.perform(&outcome.actions);
            stats.effector_failures += failures;
            stats.actions += outcome.actions.len() as u64 - failures;

            if last_fps_update.elapsed() >= Duration::from_secs(1) {
                #[allow(clippy::cast_precision_loss)]
                let fps = stats.frames as f64 / start_time.elapsed().as_secs_f64();
                debug!("FPS: {:.1}", fps);
                last_fps_update = Instant::now();
            }

            if keys.quit_down {
                info!("Exit requested by user");
                stats.stop_reason = StopReason::QuitKey;
                break;
            }
        }

        info!(
            "Application shutting down: {} frames ({} with a hand), {} actions, {} effector failures",
            stats.frames, stats.hand_frames, stats.actions, stats.effector_failures
        );
        Ok(stats)
    }

    /// Interpret one frame and report status changes
    fn process_frame(&mut self, frame: Option<&LandmarkFrame>, toggle_down: bool) -> StepOutcome {
        let was_enabled = self.state.toggle.mouse_control_enabled;
        let outcome = step(frame, toggle_down, &mut self.state, &self.settings);

        if outcome.mouse_control_enabled != was_enabled {
            info!(
                "Mouse mode: {}",
                if outcome.mouse_control_enabled { "ON" } else { "OFF" }
            );
        }
        if outcome.mode != self.last_mode {
            debug!("Control mode: {} -> {}", self.last_mode, outcome.mode);
            self.last_mode = outcome.mode;
        }

        outcome
    }

    /// Perform effector calls in order, returning how many failed
    fn perform(&mut self, actions: &[Action]) -> u64 {
        let mut failures = 0;

        for action in actions {
            let result = match *action {
                Action::SetVolume(level) => self.effectors.volume.set_volume(level),
                Action::SetBrightness(percent) => self.effectors.brightness.set_brightness(percent),
                Action::MovePointer { x, y } => self.effectors.pointer.move_pointer_to(x, y),
                Action::Click => self.effectors.pointer.click(),
            };

            if let Err(e) = result {
                warn!("Effector call {:?} failed: {}", action, e);
                failures += 1;
            }
        }

        failures
    }
}

//! Hand gesture control library: volume, screen brightness and the mouse
//! pointer driven by hand landmarks.
//!
//! A hand tracker produces 21 landmarks and a finger-up vector per camera
//! frame. This crate interprets those frames:
//! 1. An edge-triggered toggle key enables or disables mouse control
//! 2. The finger pattern selects a control mode
//! 3. Fingertip distances are mapped linearly onto volume or brightness
//! 4. The index fingertip drives a smoothed pointer, a pinch clicks
//!
//! # Examples
//!
//! ## Interpreting a single frame
//!
//! ```
//! use hand_gesture_control::{
//!     config::Config,
//!     controller::{step, Action, ControlSettings, ControlState},
//!     landmarks::{LandmarkFrame, Point},
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let settings = ControlSettings::from_config(&config)?;
//! let mut state = ControlState::new(config.create_filter()?);
//!
//! // Thumb and index up, tips 115 px apart
//! let mut landmarks = vec![Point::new(320, 240); 21];
//! landmarks[4] = Point::new(100, 100);
//! landmarks[8] = Point::new(215, 100);
//! let frame = LandmarkFrame::new(landmarks, [true, true, false, false, false])?;
//!
//! let outcome = step(Some(&frame), false, &mut state, &settings);
//! assert_eq!(outcome.actions, vec![Action::SetVolume(-32.5)]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Running the loop against a recorded stream
//!
//! ```no_run
//! use hand_gesture_control::{
//!     app::{Effectors, GestureApp},
//!     capabilities::{LogSink, NoKeys},
//!     config::Config,
//!     stream::LandmarkStream,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let effectors = Effectors {
//!     volume: Box::new(LogSink),
//!     brightness: Box::new(LogSink),
//!     pointer: Box::new(LogSink),
//! };
//! let frames = LandmarkStream::from_path("session.landmarks")?;
//!
//! let mut app = GestureApp::new(&config, Box::new(frames), Box::new(NoKeys), effectors)?;
//! let stats = app.run()?;
//! println!("{} frames, {} actions", stats.frames, stats.actions);
//! # Ok(())
//! # }
//! ```

/// Hand landmark frames and finger-up detection
pub mod landmarks;

/// Edge-triggered mouse-control toggle
pub mod toggle;

/// Finger pattern to control mode classification
pub mod gesture;

/// Linear range mapping and camera-to-screen coordinates
pub mod mapping;

/// Pointer smoothing filters
pub mod filters;

/// Pinch click detection
pub mod click;

/// Per-frame interpretation into effector actions
pub mod controller;

/// Frame source, keyboard and effector interfaces
pub mod capabilities;

/// Main application module
pub mod app;

/// Cursor and keyboard control for X11 systems
pub mod cursor_control;

/// Volume control through PulseAudio
pub mod audio;

/// Brightness control through sysfs
pub mod backlight;

/// Landmark frames from a text stream
pub mod stream;

/// Utility functions for geometry and numeric conversions
pub mod utils;

/// Error types and result handling
pub mod error;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};

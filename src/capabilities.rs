//! Narrow interfaces to the hardware the controller reads from and drives.
//!
//! The application loop only talks to these traits, so the real X11, audio
//! and backlight backends can be swapped for recording doubles in tests.

use crate::{error::Result, landmarks::LandmarkFrame};
use log::info;

/// Result of asking the frame source for the next frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capture {
    /// A hand was detected
    Hand(LandmarkFrame),
    /// A frame was captured but no hand was found in it
    NoHand,
    /// The source is exhausted
    EndOfStream,
}

/// Supplies one frame of landmarks per call, blocking until it is available
pub trait FrameSource {
    /// Acquire the next frame
    ///
    /// # Errors
    ///
    /// `Acquisition` when no frame can be produced; the loop stops.
    fn capture(&mut self) -> Result<Capture>;
}

/// Key state sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    /// Mouse-control toggle key is held
    pub toggle_down: bool,
    /// Quit key is held
    pub quit_down: bool,
}

/// Polls the keyboard
pub trait KeySource {
    /// Sample the current key state
    fn poll(&mut self) -> Result<KeyState>;
}

/// Sets the master audio volume
pub trait VolumeSink {
    /// Set the volume, in the device-native range
    fn set_volume(&mut self, level: f64) -> Result<()>;
}

/// Sets the display brightness
pub trait BrightnessSink {
    /// Set brightness in percent, 0 to 100
    fn set_brightness(&mut self, percent: u8) -> Result<()>;
}

/// Moves the pointer and clicks
pub trait PointerSink {
    /// Move the pointer to an absolute screen position
    fn move_pointer_to(&mut self, x: f64, y: f64) -> Result<()>;

    /// Press and release the primary button
    fn click(&mut self) -> Result<()>;
}

/// Key source for when no keyboard can be polled; nothing is ever pressed
#[derive(Debug, Default)]
pub struct NoKeys;

impl KeySource for NoKeys {
    fn poll(&mut self) -> Result<KeyState> {
        Ok(KeyState::default())
    }
}

/// Effector that only logs what it would have done, used for `--dry-run`
#[derive(Debug, Default)]
pub struct LogSink;

impl VolumeSink for LogSink {
    fn set_volume(&mut self, level: f64) -> Result<()> {
        info!("[dry-run] set volume to {:.2}", level);
        Ok(())
    }
}

impl BrightnessSink for LogSink {
    fn set_brightness(&mut self, percent: u8) -> Result<()> {
        info!("[dry-run] set brightness to {}%", percent);
        Ok(())
    }
}

impl PointerSink for LogSink {
    fn move_pointer_to(&mut self, x: f64, y: f64) -> Result<()> {
        info!("[dry-run] move pointer to ({:.1}, {:.1})", x, y);
        Ok(())
    }

    fn click(&mut self) -> Result<()> {
        info!("[dry-run] click");
        Ok(())
    }
}

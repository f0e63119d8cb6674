//! Error types for the hand gesture control library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// `X11` window system operation failed
    #[error("X11 error: {0}")]
    X11(String),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A calibrated range collapses to a single point
    #[error("Degenerate range for {name}: min and max are both {value}")]
    DegenerateRange {
        /// Name of the configured range
        name: String,
        /// The shared bound value
        value: f64,
    },

    /// Filter initialization error
    #[error("Filter error: {0}")]
    FilterError(String),

    /// Setting the audio volume failed
    #[error("Volume control error: {0}")]
    VolumeControl(String),

    /// Setting the display brightness failed
    #[error("Brightness control error: {0}")]
    BrightnessControl(String),

    /// Cursor control operation failed
    #[error("Cursor control error: {0}")]
    CursorControl(String),

    /// The frame source could not produce a frame
    #[error("Frame acquisition error: {0}")]
    Acquisition(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl Error {
    /// Whether the error came from an effector call (volume, brightness, pointer).
    ///
    /// Effector failures are logged and skipped by the frame loop.
    pub const fn is_effector_failure(&self) -> bool {
        matches!(
            self,
            Self::VolumeControl(_) | Self::BrightnessControl(_) | Self::CursorControl(_)
        )
    }
}

/// Application-specific error type (alias for main Error type)
pub type AppError = Error;

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;

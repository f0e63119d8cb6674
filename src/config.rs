//! Configuration management for the gesture controller

use crate::{
    constants::{
        DEFAULT_CAMERA_HEIGHT, DEFAULT_CAMERA_WIDTH, DEFAULT_CLICK_THRESHOLD, DEFAULT_DISTANCE_MAX,
        DEFAULT_DISTANCE_MIN, DEFAULT_FRAME_REDUCTION, DEFAULT_PULSE_SINK, DEFAULT_QUIT_KEY,
        DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, DEFAULT_TOGGLE_KEY, DEFAULT_VOLUME_MAX_DB,
        DEFAULT_VOLUME_MIN_DB, MAX_BRIGHTNESS_PERCENT, MIN_BRIGHTNESS_PERCENT,
    },
    mapping::{Range, ScreenMapper},
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Camera geometry the landmarks are expressed in
    pub camera: CameraConfig,

    /// Screen the pointer moves on
    pub screen: ScreenConfig,

    /// Distance-to-output calibration
    pub mapping: MappingConfig,

    /// Pointer smoothing and clicking
    pub cursor: CursorConfig,

    /// Keyboard bindings
    pub controls: ControlsConfig,

    /// OS effector settings
    pub effectors: EffectorConfig,
}

/// Camera frame geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Frame width in pixels
    pub width: u32,

    /// Frame height in pixels
    pub height: u32,

    /// Dead-zone border on each side of the frame. Larger values let a smaller
    /// hand movement cover the whole screen but make the edges unreachable
    /// near the camera border.
    pub frame_reduction: u32,
}

/// Target screen size
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Screen width in pixels, replaced by the X11 root window size when available
    pub width: u32,

    /// Screen height in pixels, replaced by the X11 root window size when available
    pub height: u32,
}

/// Calibration ranges for the distance-driven controls
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Fingertip distance in pixels that maps onto the output ranges
    pub distance_range: Range,

    /// Device volume range in dB
    pub volume_range: Range,

    /// Brightness range in percent, within [0, 100]
    pub brightness_range: Range,
}

/// Pointer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// Smoothing filter spec: `none`, `damped` or `damped:<factor>`.
    /// Higher factors mean steadier but laggier motion.
    pub filter: String,

    /// Index-middle fingertip distance in pixels below which a click fires
    pub click_threshold: f64,
}

/// Key bindings, as X11 keysym names.
///
/// `Shift`, `Control`, `Alt` and `Super` match either side of the keyboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Key that toggles mouse control on each press
    pub toggle_key: String,

    /// Key that stops the application.
    ///
    /// The keymap is polled globally, so this key is seen while any window
    /// has focus; a printable key such as `q` quits whenever it is typed.
    pub quit_key: String,
}

/// Effector backends
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectorConfig {
    /// PulseAudio sink passed to `pactl`
    pub pulse_sink: String,

    /// Backlight device under `/sys/class/backlight`, first one found when unset
    pub backlight_device: Option<String>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CAMERA_WIDTH,
            height: DEFAULT_CAMERA_HEIGHT,
            frame_reduction: DEFAULT_FRAME_REDUCTION,
        }
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SCREEN_WIDTH,
            height: DEFAULT_SCREEN_HEIGHT,
        }
    }
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            distance_range: Range::new(DEFAULT_DISTANCE_MIN, DEFAULT_DISTANCE_MAX),
            volume_range: Range::new(DEFAULT_VOLUME_MIN_DB, DEFAULT_VOLUME_MAX_DB),
            brightness_range: Range::new(MIN_BRIGHTNESS_PERCENT, MAX_BRIGHTNESS_PERCENT),
        }
    }
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            filter: "damped:7".to_string(),
            click_threshold: DEFAULT_CLICK_THRESHOLD,
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            toggle_key: DEFAULT_TOGGLE_KEY.to_string(),
            quit_key: DEFAULT_QUIT_KEY.to_string(),
        }
    }
}

impl Default for EffectorConfig {
    fn default() -> Self {
        Self {
            pulse_sink: DEFAULT_PULSE_SINK.to_string(),
            backlight_device: None,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Create the pointer smoothing filter from configuration
    pub fn create_filter(&self) -> Result<Box<dyn crate::filters::CursorFilter>> {
        crate::filters::create_filter(&self.cursor.filter)
    }

    /// Create the camera-to-screen mapper from configuration
    pub fn screen_mapper(&self) -> Result<ScreenMapper> {
        ScreenMapper::new(
            self.camera.width,
            self.camera.height,
            self.camera.frame_reduction,
            self.screen.width,
            self.screen.height,
        )
    }

    /// Validate configuration
    ///
    /// Must pass before the frame loop starts.
    pub fn validate(&self) -> Result<()> {
        // Validate calibration ranges
        self.mapping.distance_range.validate("mapping.distance_range")?;
        self.mapping.volume_range.validate("mapping.volume_range")?;
        self.mapping.brightness_range.validate("mapping.brightness_range")?;

        let (low, high) = self.mapping.brightness_range.ordered();
        if low < MIN_BRIGHTNESS_PERCENT || high > MAX_BRIGHTNESS_PERCENT {
            return Err(Error::ConfigError(
                "Brightness range must lie within 0 and 100 percent".to_string(),
            ));
        }

        // Validate camera and screen geometry
        if self.camera.width == 0 || self.camera.height == 0 {
            return Err(Error::ConfigError("Camera size must be non-zero".to_string()));
        }
        self.screen_mapper()?;

        // Validate cursor settings
        if !self.cursor.click_threshold.is_finite() || self.cursor.click_threshold <= 0.0 {
            return Err(Error::ConfigError(
                "Click threshold must be a positive number of pixels".to_string(),
            ));
        }
        self.create_filter()?;

        // Validate key names
        if self.controls.toggle_key.trim().is_empty() || self.controls.quit_key.trim().is_empty() {
            return Err(Error::ConfigError("Key names must not be empty".to_string()));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Hand Gesture Control Configuration

# Camera geometry of the landmark coordinates
camera:
  width: 640
  height: 480
  frame_reduction: 100

# Fallback screen size (the X11 screen size wins when available)
screen:
  width: 1920
  height: 1080

# Fingertip distance calibration
mapping:
  distance_range: { min: 30.0, max: 200.0 }
  volume_range: { min: -65.0, max: 0.0 }
  brightness_range: { min: 0.0, max: 100.0 }

# Pointer control
cursor:
  filter: "damped:7"
  click_threshold: 40.0

# Key bindings (X11 keysym names)
controls:
  toggle_key: "Shift"
  quit_key: "Pause"

# Effectors
effectors:
  pulse_sink: "@DEFAULT_SINK@"
  backlight_device: null
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.camera.frame_reduction, 100);
        assert_eq!(config.mapping.distance_range, Range::new(30.0, 200.0));
        assert_eq!(config.cursor.click_threshold, 40.0);
        assert_eq!(config.controls.toggle_key, "Shift");
        assert_eq!(config.controls.quit_key, "Pause");
    }

    #[test]
    fn test_example_config_matches_defaults() {
        let config = Config::from_yaml(EXAMPLE_CONFIG).unwrap();
        let defaults = Config::default();
        assert_eq!(config.camera.width, defaults.camera.width);
        assert_eq!(config.mapping.volume_range, defaults.mapping.volume_range);
        assert_eq!(config.cursor.filter, defaults.cursor.filter);
        assert_eq!(config.controls.toggle_key, defaults.controls.toggle_key);
        assert_eq!(config.effectors.backlight_device, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_yaml("cursor:\n  click_threshold: 25.0\n").unwrap();
        assert_eq!(config.cursor.click_threshold, 25.0);
        assert_eq!(config.cursor.filter, "damped:7");
        assert_eq!(config.camera.height, 480);
    }

    #[test]
    fn test_degenerate_range_rejected() {
        let mut config = Config::default();
        config.mapping.distance_range = Range::new(50.0, 50.0);
        assert!(matches!(config.validate(), Err(Error::DegenerateRange { .. })));
    }

    #[test]
    fn test_brightness_outside_percent_rejected() {
        let mut config = Config::default();
        config.mapping.brightness_range = Range::new(0.0, 150.0);
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(Config::from_yaml("camera: [1, 2"), Err(Error::ConfigError(_))));
    }
}

//! Constants used throughout the application

/// Number of hand landmarks produced by the detector
pub const NUM_HAND_LANDMARKS: usize = 21;

/// Number of digits in the finger-up vector
pub const NUM_FINGERS: usize = 5;

/// Thumb interphalangeal joint
pub const THUMB_IP: usize = 3;
/// Thumb tip
pub const THUMB_TIP: usize = 4;
/// Index fingertip
pub const INDEX_TIP: usize = 8;
/// Middle fingertip
pub const MIDDLE_TIP: usize = 12;
/// Ring fingertip
pub const RING_TIP: usize = 16;
/// Pinky fingertip
pub const PINKY_TIP: usize = 20;

/// Tip landmark of each digit, thumb first
pub const FINGER_TIPS: [usize; NUM_FINGERS] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// Default camera width in pixels
pub const DEFAULT_CAMERA_WIDTH: u32 = 640;
/// Default camera height in pixels
pub const DEFAULT_CAMERA_HEIGHT: u32 = 480;

/// Default inset excluded from pointer mapping on every side of the camera frame
pub const DEFAULT_FRAME_REDUCTION: u32 = 100;

/// Fallback screen width when no display can be queried
pub const DEFAULT_SCREEN_WIDTH: u32 = 1920;
/// Fallback screen height
pub const DEFAULT_SCREEN_HEIGHT: u32 = 1080;

/// Default pointer smoothing factor
pub const DEFAULT_SMOOTHENING: f64 = 7.0;

/// Default click distance threshold in pixels
pub const DEFAULT_CLICK_THRESHOLD: f64 = 40.0;

/// Fingertip distance mapped to the low end of volume and brightness
pub const DEFAULT_DISTANCE_MIN: f64 = 30.0;
/// Fingertip distance mapped to the high end
pub const DEFAULT_DISTANCE_MAX: f64 = 200.0;

/// Default minimum device volume in dB
pub const DEFAULT_VOLUME_MIN_DB: f64 = -65.0;
/// Default maximum device volume in dB
pub const DEFAULT_VOLUME_MAX_DB: f64 = 0.0;

/// Lowest brightness percent
pub const MIN_BRIGHTNESS_PERCENT: f64 = 0.0;
/// Highest brightness percent
pub const MAX_BRIGHTNESS_PERCENT: f64 = 100.0;

/// Default mouse-control toggle key
pub const DEFAULT_TOGGLE_KEY: &str = "Shift";
/// Default quit key
pub const DEFAULT_QUIT_KEY: &str = "Pause";

/// Default PulseAudio sink
pub const DEFAULT_PULSE_SINK: &str = "@DEFAULT_SINK@";

/// Root of the Linux backlight class
pub const SYSFS_BACKLIGHT_ROOT: &str = "/sys/class/backlight";

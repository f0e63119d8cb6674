//! Per-frame hand landmark data.
//!
//! A [`LandmarkFrame`] holds the 21 keypoints reported by the hand detector for
//! one captured frame together with the finger-up vector. Frames are immutable
//! once built and are dropped after the frame has been processed. A frame in
//! which no hand was found is represented by `None` at the call sites.

use crate::{
    constants::{FINGER_TIPS, NUM_FINGERS, NUM_HAND_LANDMARKS, THUMB_IP, THUMB_TIP},
    error::{Error, Result},
    utils::euclidean_distance,
};
use serde::{Deserialize, Serialize};

/// Extended (`true`) or retracted (`false`) state of each digit, thumb first
pub type Fingers = [bool; NUM_FINGERS];

/// A single keypoint in camera pixel space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal pixel coordinate
    pub x: i32,
    /// Vertical pixel coordinate (grows downward)
    pub y: i32,
}

impl Point {
    /// Create a new point
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinates as floating point
    #[must_use]
    pub fn to_f64(self) -> (f64, f64) {
        (f64::from(self.x), f64::from(self.y))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Which hand the detector saw, as it appears in the (mirrored) image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handedness {
    /// Left hand
    Left,
    /// Right hand
    #[default]
    Right,
}

/// Landmarks and finger states for one frame with a detected hand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandmarkFrame {
    landmarks: Vec<Point>,
    fingers: Fingers,
    handedness: Handedness,
}

impl LandmarkFrame {
    /// Create a frame from detector output
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` unless exactly 21 landmarks are supplied.
    pub fn new(landmarks: Vec<Point>, fingers: Fingers) -> Result<Self> {
        Self::with_handedness(landmarks, fingers, Handedness::default())
    }

    /// Create a frame for a specific hand
    pub fn with_handedness(landmarks: Vec<Point>, fingers: Fingers, handedness: Handedness) -> Result<Self> {
        check_len(&landmarks)?;

        Ok(Self {
            landmarks,
            fingers,
            handedness,
        })
    }

    /// Create a frame and derive the finger-up vector from the landmarks
    pub fn from_landmarks(landmarks: Vec<Point>, handedness: Handedness) -> Result<Self> {
        check_len(&landmarks)?;

        let fingers = fingers_up(&landmarks, handedness);
        Ok(Self {
            landmarks,
            fingers,
            handedness,
        })
    }

    /// All 21 landmarks in detector order
    pub fn landmarks(&self) -> &[Point] {
        &self.landmarks
    }

    /// Finger-up vector
    pub const fn fingers(&self) -> Fingers {
        self.fingers
    }

    /// Detected hand
    pub const fn handedness(&self) -> Handedness {
        self.handedness
    }

    /// Landmark at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= 21`.
    pub fn point(&self, index: usize) -> Point {
        self.landmarks[index]
    }

    /// Euclidean pixel distance between two landmarks
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= 21`.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        euclidean_distance(self.point(i).to_f64(), self.point(j).to_f64())
    }
}

fn check_len(landmarks: &[Point]) -> Result<()> {
    if landmarks.len() != NUM_HAND_LANDMARKS {
        return Err(Error::InvalidInput(format!(
            "Expected {NUM_HAND_LANDMARKS} hand landmarks, got {}",
            landmarks.len()
        )));
    }
    Ok(())
}

/// Derive the finger-up vector from landmark geometry.
///
/// The thumb counts as extended when its tip lies outside the IP joint along
/// x, which is to the right for a right hand and to the left for a left hand.
/// Every other finger counts as extended when its tip is above its PIP joint.
///
/// # Panics
///
/// Panics if fewer than 21 landmarks are given.
#[must_use]
pub fn fingers_up(landmarks: &[Point], handedness: Handedness) -> Fingers {
    let mut fingers = [false; NUM_FINGERS];

    let thumb_tip = landmarks[THUMB_TIP].x;
    let thumb_ip = landmarks[THUMB_IP].x;
    fingers[0] = match handedness {
        Handedness::Right => thumb_tip > thumb_ip,
        Handedness::Left => thumb_tip < thumb_ip,
    };

    for (finger, &tip) in FINGER_TIPS.iter().enumerate().skip(1) {
        fingers[finger] = landmarks[tip].y < landmarks[tip - 2].y;
    }

    fingers
}

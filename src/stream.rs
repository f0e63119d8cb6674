//! Landmark frames read from a line-oriented text stream.
//!
//! An external hand detector writes one record per captured frame, for
//! example:
//!
//! ```text
//! {landmarks: [[312, 401], [340, 380], ...], fingers: [1, 1, 0, 0, 0], hand: right}
//! ~
//! ```
//!
//! Each record is a YAML flow mapping (plain JSON works too). A blank line,
//! `~` or `null` is a frame without a hand; lines starting with `#` are
//! skipped. `fingers` may be omitted, in which case the finger-up vector is
//! derived from the landmarks.

use crate::{
    capabilities::{Capture, FrameSource},
    constants::NUM_FINGERS,
    error::{Error, Result},
    landmarks::{Fingers, Handedness, LandmarkFrame, Point},
};
use serde::Deserialize;
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// One finger state, written as `0`/`1` or `false`/`true`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FingerFlag {
    Bool(bool),
    Int(u8),
}

impl FingerFlag {
    const fn is_up(&self) -> bool {
        match self {
            Self::Bool(up) => *up,
            Self::Int(n) => *n != 0,
        }
    }
}

#[derive(Debug, Deserialize)]
struct FrameRecord {
    landmarks: Vec<(i32, i32)>,
    #[serde(default)]
    fingers: Option<Vec<FingerFlag>>,
    #[serde(default)]
    hand: Option<Handedness>,
}

/// Parse a single stream line.
///
/// Returns `Ok(None)` for a frame without a hand.
///
/// # Errors
///
/// `InvalidInput` for a line that is not a valid record.
pub fn parse_record(line: &str) -> Result<Option<LandmarkFrame>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let record: Option<FrameRecord> =
        serde_yaml::from_str(line).map_err(|e| Error::InvalidInput(format!("Malformed frame record: {e}")))?;
    let Some(record) = record else {
        return Ok(None);
    };

    let landmarks: Vec<Point> = record.landmarks.into_iter().map(Point::from).collect();
    let handedness = record.hand.unwrap_or_default();

    match record.fingers {
        Some(flags) => {
            let fingers: Fingers = flags
                .iter()
                .map(FingerFlag::is_up)
                .collect::<Vec<_>>()
                .try_into()
                .map_err(|v: Vec<bool>| {
                    Error::InvalidInput(format!("Expected {NUM_FINGERS} finger states, got {}", v.len()))
                })?;
            LandmarkFrame::with_handedness(landmarks, fingers, handedness).map(Some)
        }
        None => LandmarkFrame::from_landmarks(landmarks, handedness).map(Some),
    }
}

/// Frame source over any buffered reader
pub struct LandmarkStream<R> {
    reader: R,
    line_number: usize,
    buffer: String,
}

impl<R: BufRead> LandmarkStream<R> {
    /// Read frames from `reader`
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            buffer: String::new(),
        }
    }
}

impl LandmarkStream<BufReader<File>> {
    /// Read frames from a file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl LandmarkStream<io::StdinLock<'static>> {
    /// Read frames from standard input
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> FrameSource for LandmarkStream<R> {
    fn capture(&mut self) -> Result<Capture> {
        loop {
            self.buffer.clear();
            let read = self
                .reader
                .read_line(&mut self.buffer)
                .map_err(|e| Error::Acquisition(format!("Failed to read landmark stream: {e}")))?;
            if read == 0 {
                return Ok(Capture::EndOfStream);
            }
            self.line_number += 1;

            if self.buffer.trim_start().starts_with('#') {
                continue;
            }

            return match parse_record(&self.buffer) {
                Ok(Some(frame)) => Ok(Capture::Hand(frame)),
                Ok(None) => Ok(Capture::NoHand),
                Err(e) => Err(Error::Acquisition(format!("Line {}: {e}", self.line_number))),
            };
        }
    }
}

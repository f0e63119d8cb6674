//! Master volume control through PulseAudio's `pactl`.

use crate::{
    capabilities::VolumeSink,
    error::{AppError, Result},
};
use log::debug;
use std::process::Command;

/// Sets a PulseAudio (or PipeWire-pulse) sink volume in dB
pub struct PulseAudioVolume {
    program: String,
    sink: String,
}

impl PulseAudioVolume {
    /// Control `sink`, e.g. `@DEFAULT_SINK@`
    pub fn new(sink: &str) -> Self {
        Self::with_program("pactl", sink)
    }

    /// Use a different `pactl`-compatible executable
    pub fn with_program(program: &str, sink: &str) -> Self {
        Self {
            program: program.to_string(),
            sink: sink.to_string(),
        }
    }

    /// Arguments for one volume change.
    ///
    /// Volumes below 0 dB start with a minus sign, so option parsing is ended
    /// with `--` before the command.
    pub fn arguments(&self, level: f64) -> Vec<String> {
        vec![
            "--".to_string(),
            "set-sink-volume".to_string(),
            self.sink.clone(),
            format!("{level:.2}dB"),
        ]
    }
}

impl VolumeSink for PulseAudioVolume {
    fn set_volume(&mut self, level: f64) -> Result<()> {
        if !level.is_finite() {
            return Err(AppError::VolumeControl(format!("Refusing non-finite volume {level}")));
        }

        let args = self.arguments(level);
        debug!("Running {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| AppError::VolumeControl(format!("Failed to run {}: {e}", self.program)))?;

        if !output.status.success() {
            return Err(AppError::VolumeControl(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arguments_format_db() {
        let volume = PulseAudioVolume::new("@DEFAULT_SINK@");
        assert_eq!(
            volume.arguments(-32.5),
            vec!["--", "set-sink-volume", "@DEFAULT_SINK@", "-32.50dB"]
        );
        assert_eq!(volume.arguments(0.0)[3], "0.00dB");
    }

    #[test]
    fn test_non_finite_level_rejected() {
        let mut volume = PulseAudioVolume::with_program("true", "sink");
        assert!(matches!(volume.set_volume(f64::NAN), Err(AppError::VolumeControl(_))));
    }

    #[test]
    fn test_missing_program_is_volume_error() {
        let mut volume = PulseAudioVolume::with_program("definitely-not-a-pactl-binary", "sink");
        let err = volume.set_volume(-10.0).unwrap_err();
        assert!(err.is_effector_failure());
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status_checked() {
        assert!(PulseAudioVolume::with_program("true", "sink").set_volume(-10.0).is_ok());
        assert!(PulseAudioVolume::with_program("false", "sink").set_volume(-10.0).is_err());
    }
}

//! Display brightness through the Linux backlight class in sysfs.

use crate::{
    capabilities::BrightnessSink,
    constants::SYSFS_BACKLIGHT_ROOT,
    error::{AppError, Result},
    utils::safe_cast::f64_to_u32_clamp,
};
use log::{debug, info};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Writes `brightness` under a `/sys/class/backlight/<device>` directory
#[derive(Debug)]
pub struct SysfsBacklight {
    device_dir: PathBuf,
    max_brightness: u32,
}

impl SysfsBacklight {
    /// Open a backlight device directory and read its `max_brightness`
    pub fn open<P: AsRef<Path>>(device_dir: P) -> Result<Self> {
        let device_dir = device_dir.as_ref().to_path_buf();
        let raw = fs::read_to_string(device_dir.join("max_brightness"))?;
        let max_brightness: u32 = raw.trim().parse().map_err(|_| {
            AppError::BrightnessControl(format!(
                "Invalid max_brightness {:?} in {}",
                raw.trim(),
                device_dir.display()
            ))
        })?;
        if max_brightness == 0 {
            return Err(AppError::BrightnessControl(format!(
                "{} reports max_brightness 0",
                device_dir.display()
            )));
        }

        info!(
            "Using backlight {} (max brightness {})",
            device_dir.display(),
            max_brightness
        );

        Ok(Self {
            device_dir,
            max_brightness,
        })
    }

    /// Open the named device, or the first one found, under `root`
    pub fn detect<P: AsRef<Path>>(root: P, device: Option<&str>) -> Result<Self> {
        let root = root.as_ref();
        if let Some(device) = device {
            return Self::open(root.join(device));
        }

        let mut devices: Vec<PathBuf> = fs::read_dir(root)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .collect();
        devices.sort();

        let first = devices.into_iter().next().ok_or_else(|| {
            AppError::BrightnessControl(format!("No backlight device under {}", root.display()))
        })?;
        Self::open(first)
    }

    /// Open a device under `/sys/class/backlight`
    pub fn from_system(device: Option<&str>) -> Result<Self> {
        Self::detect(SYSFS_BACKLIGHT_ROOT, device)
    }

    /// Raw device value for a percentage
    pub fn raw_value(&self, percent: u8) -> u32 {
        let fraction = f64::from(percent.min(100)) / 100.0;
        f64_to_u32_clamp(fraction * f64::from(self.max_brightness), self.max_brightness)
    }
}

impl BrightnessSink for SysfsBacklight {
    fn set_brightness(&mut self, percent: u8) -> Result<()> {
        let raw = self.raw_value(percent);
        debug!("Setting backlight to {}% ({})", percent, raw);

        fs::write(self.device_dir.join("brightness"), raw.to_string()).map_err(|e| {
            AppError::BrightnessControl(format!(
                "Failed to write {}: {e}",
                self.device_dir.join("brightness").display()
            ))
        })
    }
}

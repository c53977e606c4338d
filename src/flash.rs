// SPDX-License-Identifier: GPL-3.0-only

//! Flash modes and hardware flash LEDs
//!
//! Every flash capture shows a white screen overlay. Devices that expose a
//! flash LED at `/sys/class/leds/*:flash` additionally get the LED driven in
//! torch mode for the length of the overlay.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::fl;
use crate::media::analysis::LOW_LIGHT_THRESHOLD;

/// Flash operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlashMode {
    Off,
    /// Fire only when the scene is dark
    #[default]
    Auto,
    On,
}

impl FlashMode {
    /// Cycle to the next mode: Off -> Auto -> On -> Off
    pub fn next(self) -> Self {
        match self {
            FlashMode::Off => FlashMode::Auto,
            FlashMode::Auto => FlashMode::On,
            FlashMode::On => FlashMode::Off,
        }
    }

    /// Whether a capture with this mode should fire the flash
    ///
    /// `luminance` is the mean scene luma in 0..1, `None` when unknown.
    /// Auto mode does not fire without a measurement.
    pub fn should_fire(self, luminance: Option<f32>) -> bool {
        match self {
            FlashMode::Off => false,
            FlashMode::On => true,
            FlashMode::Auto => luminance.is_some_and(|l| l < LOW_LIGHT_THRESHOLD),
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            FlashMode::Off => "camera-flash-off-symbolic",
            FlashMode::Auto => "camera-flash-auto-symbolic",
            FlashMode::On => "camera-flash-symbolic",
        }
    }

    pub fn label(self) -> String {
        match self {
            FlashMode::Off => fl!("flash-off"),
            FlashMode::Auto => fl!("flash-auto"),
            FlashMode::On => fl!("flash-on"),
        }
    }
}

/// A writable flash LED discovered via sysfs
#[derive(Debug, Clone)]
pub struct FlashDevice {
    path: PathBuf,
    max_brightness: u32,
    name: String,
}

impl FlashDevice {
    /// Scan `/sys/class/leds/` for `*:flash` entries we can write to
    pub fn discover() -> Vec<FlashDevice> {
        Self::discover_in(Path::new("/sys/class/leds"))
    }

    fn discover_in(leds_dir: &Path) -> Vec<FlashDevice> {
        let Ok(entries) = std::fs::read_dir(leds_dir) else {
            debug!(dir = %leds_dir.display(), "No LED class directory, flash LED disabled");
            return Vec::new();
        };

        let mut devices = Vec::new();
        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(name_str) = name.to_str() else {
                continue;
            };
            if !name_str.ends_with(":flash") {
                continue;
            }

            let led_path = entry.path();
            let max_brightness = match std::fs::read_to_string(led_path.join("max_brightness"))
                .ok()
                .and_then(|s| s.trim().parse::<u32>().ok())
            {
                Some(v) if v > 0 => v,
                _ => {
                    warn!(name = name_str, "Flash LED has no usable max_brightness");
                    continue;
                }
            };

            if let Err(e) = std::fs::OpenOptions::new()
                .write(true)
                .open(led_path.join("brightness"))
            {
                warn!(name = name_str, error = %e, "Flash LED brightness is not writable");
                continue;
            }

            info!(name = name_str, max_brightness, "Discovered flash LED");
            devices.push(FlashDevice {
                path: led_path,
                max_brightness,
                name: name_str.to_string(),
            });
        }

        devices.sort_by(|a, b| a.name.cmp(&b.name));
        devices
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Turn on at a fraction of max brightness (0.0 = off, 1.0 = full)
    pub fn torch(&self, intensity: f32) -> io::Result<()> {
        let value = (intensity.clamp(0.0, 1.0) * self.max_brightness as f32).round() as u32;
        std::fs::write(self.path.join("brightness"), value.min(self.max_brightness).to_string())
    }

    pub fn off(&self) -> io::Result<()> {
        self.torch(0.0)
    }
}

/// Switch all LEDs on or off, logging failures
pub fn set_leds(devices: &[FlashDevice], on: bool) {
    for device in devices {
        let result = if on { device.torch(1.0) } else { device.off() };
        if let Err(e) = result {
            warn!(name = device.name(), error = %e, on, "Failed to drive flash LED");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_wraps_after_three_steps() {
        assert_eq!(FlashMode::Off.next(), FlashMode::Auto);
        assert_eq!(FlashMode::Auto.next(), FlashMode::On);
        assert_eq!(FlashMode::On.next(), FlashMode::Off);
        for mode in [FlashMode::Off, FlashMode::Auto, FlashMode::On] {
            assert_eq!(mode.next().next().next(), mode);
        }
    }

    #[test]
    fn default_is_auto() {
        assert_eq!(FlashMode::default(), FlashMode::Auto);
    }

    #[test]
    fn auto_fires_only_in_low_light() {
        assert!(FlashMode::Auto.should_fire(Some(0.05)));
        assert!(!FlashMode::Auto.should_fire(Some(0.6)));
        assert!(!FlashMode::Auto.should_fire(None));
        assert!(FlashMode::On.should_fire(Some(1.0)));
        assert!(!FlashMode::Off.should_fire(Some(0.0)));
    }

    #[test]
    fn discovery_in_missing_directory_is_empty() {
        let devices = FlashDevice::discover_in(Path::new("/nonexistent/leds"));
        assert!(devices.is_empty());
    }

    #[test]
    fn discovery_finds_writable_flash_entries() {
        let dir = std::env::temp_dir().join(format!("procam-leds-{}", std::process::id()));
        let led = dir.join("white:flash");
        let other = dir.join("green:status");
        std::fs::create_dir_all(&led).unwrap();
        std::fs::create_dir_all(&other).unwrap();
        std::fs::write(led.join("max_brightness"), "255\n").unwrap();
        std::fs::write(led.join("brightness"), "0").unwrap();

        let devices = FlashDevice::discover_in(&dir);
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].name(), "white:flash");

        devices[0].torch(0.5).unwrap();
        assert_eq!(std::fs::read_to_string(led.join("brightness")).unwrap(), "128");

        let _ = std::fs::remove_dir_all(&dir);
    }
}

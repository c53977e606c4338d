// SPDX-License-Identifier: GPL-3.0-only

//! Haptic feedback through the LED-class vibrator interface
//!
//! Phones running mainline Linux expose the vibration motor as
//! `/sys/class/leds/vibrator` with `duration` and `activate` transient
//! trigger files. Missing hardware is not an error; pulses become no-ops.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Pulse length after a successful capture
pub const CAPTURE_PULSE: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub struct Vibrator {
    path: PathBuf,
}

impl Vibrator {
    /// Find the first LED-class entry whose name contains "vibrator"
    pub fn discover() -> Option<Self> {
        Self::discover_in(Path::new("/sys/class/leds"))
    }

    fn discover_in(leds_dir: &Path) -> Option<Self> {
        let entries = std::fs::read_dir(leds_dir).ok()?;
        let mut candidates: Vec<PathBuf> = entries
            .flatten()
            .filter(|e| e.file_name().to_string_lossy().contains("vibrator"))
            .map(|e| e.path())
            .filter(|p| p.join("activate").exists() && p.join("duration").exists())
            .collect();
        candidates.sort();

        let path = candidates.into_iter().next()?;
        debug!(path = %path.display(), "Found vibrator");
        Some(Self { path })
    }

    /// Run the motor once for `duration`
    pub fn pulse(&self, duration: Duration) -> io::Result<()> {
        std::fs::write(self.path.join("duration"), duration.as_millis().to_string())?;
        std::fs::write(self.path.join("activate"), "1")
    }
}

/// Pulse the vibrator if the device has one
///
/// Runs on a blocking thread since sysfs writes can stall.
pub async fn pulse(vibrator: Option<Vibrator>, duration: Duration) {
    let Some(vibrator) = vibrator else {
        debug!("No vibrator available, skipping haptic pulse");
        return;
    };

    let result = tokio::task::spawn_blocking(move || vibrator.pulse(duration)).await;
    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => debug!(error = %e, "Haptic pulse failed"),
        Err(e) => debug!(error = %e, "Haptic task panicked"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_writes_duration_then_activates() {
        let dir = std::env::temp_dir().join(format!("procam-vib-{}", std::process::id()));
        let vib = dir.join("vibrator");
        std::fs::create_dir_all(&vib).unwrap();
        std::fs::write(vib.join("duration"), "").unwrap();
        std::fs::write(vib.join("activate"), "0").unwrap();

        let vibrator = Vibrator::discover_in(&dir).expect("vibrator should be found");
        vibrator.pulse(CAPTURE_PULSE).unwrap();
        assert_eq!(std::fs::read_to_string(vib.join("duration")).unwrap(), "50");
        assert_eq!(std::fs::read_to_string(vib.join("activate")).unwrap(), "1");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_vibrator_is_none() {
        assert!(Vibrator::discover_in(Path::new("/nonexistent/leds")).is_none());
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

use crate::fl;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Video encoder bitrate presets
///
/// Target bitrate scales with the recorded resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BitratePreset {
    /// Smaller files, reduced quality
    Low,
    #[default]
    Medium,
    /// Larger files, better quality
    High,
}

impl BitratePreset {
    pub const ALL: [BitratePreset; 3] = [
        BitratePreset::Low,
        BitratePreset::Medium,
        BitratePreset::High,
    ];

    pub fn display_name(&self) -> String {
        match self {
            BitratePreset::Low => fl!("bitrate-low"),
            BitratePreset::Medium => fl!("bitrate-medium"),
            BitratePreset::High => fl!("bitrate-high"),
        }
    }

    /// Bitrate in kbps for a given frame width
    ///
    /// - SD (below 1280): Low=1, Medium=2, High=4 Mbps
    /// - HD (1280): Low=2.5, Medium=5, High=10 Mbps
    /// - Full HD (1920): Low=4, Medium=8, High=16 Mbps
    /// - 4K (3840): Low=15, Medium=30, High=50 Mbps
    pub fn bitrate_kbps(&self, width: u32) -> u32 {
        let [low, medium, high] = match width {
            w if w >= 3840 => [15_000, 30_000, 50_000],
            w if w >= 1920 => [4_000, 8_000, 16_000],
            w if w >= 1280 => [2_500, 5_000, 10_000],
            _ => [1_000, 2_000, 4_000],
        };
        match self {
            BitratePreset::Low => low,
            BitratePreset::Medium => medium,
            BitratePreset::High => high,
        }
    }
}

/// UI layout constants
pub mod ui {
    /// Outer diameter of the capture button
    pub const CAPTURE_BUTTON_OUTER: f32 = 72.0;

    pub const CAPTURE_BUTTON_INNER: f32 = 58.0;

    /// Alpha for panels floating over the preview
    pub const OVERLAY_BACKGROUND_ALPHA: f32 = 0.6;

    /// Alpha for panels in high contrast mode
    pub const HIGH_CONTRAST_BACKGROUND_ALPHA: f32 = 0.95;

    pub const ICON_BUTTON_WIDTH: f32 = 44.0;

    /// Width of the pro-mode side panel
    pub const PRO_PANEL_WIDTH: f32 = 300.0;

    pub const THUMBNAIL_SIZE: f32 = 64.0;

    /// Base text sizes before the accessibility scale is applied
    pub const TEXT_BODY: u16 = 14;
    pub const TEXT_CAPTION: u16 = 12;
    pub const TEXT_TITLE: u16 = 18;

    pub const SLIDER_LABEL_WIDTH: f32 = 90.0;
    pub const SLIDER_VALUE_WIDTH: f32 = 56.0;
}

/// GStreamer pipeline constants
pub mod pipeline {
    /// Maximum buffer queue size (keep small for low latency)
    pub const MAX_BUFFERS: u32 = 2;

    pub const OUTPUT_FORMAT: &str = "RGBA";

    /// Ideal preview resolution requested from the camera
    pub const IDEAL_WIDTH: u32 = 1920;
    pub const IDEAL_HEIGHT: u32 = 1080;
}

/// Timing constants
pub mod timing {
    use super::Duration;

    /// Frame counter modulo for periodic logging
    pub const FRAME_LOG_INTERVAL: u64 = 120;

    /// Time to wait for EOS when finalizing a recording
    pub const STOP_TIMEOUT_SECS: u64 = 5;

    /// Time to wait for a pipeline to reach PLAYING
    pub const START_TIMEOUT_SECS: u64 = 5;

    /// How long the screen flash is shown before the shutter
    pub const FLASH_DURATION: Duration = Duration::from_millis(150);

    /// Period of the REC dot pulse
    pub const REC_BLINK_INTERVAL: Duration = Duration::from_millis(500);
}

/// Capture constants
pub mod capture {
    pub const DEFAULT_JPEG_QUALITY: u8 = 92;

    /// Frames kept for stabilized capture
    pub const STABILIZATION_FRAMES: usize = 5;

    /// Seconds to wait for a first frame in headless capture
    pub const HEADLESS_FRAME_TIMEOUT_SECS: u64 = 5;

    /// Frames skipped before a headless capture so auto exposure settles
    pub const HEADLESS_WARMUP_FRAMES: usize = 10;
}

/// Application information utilities
pub mod app_info {
    use std::path::Path;

    /// Application version from build-time environment
    pub fn version() -> &'static str {
        env!("PROCAM_BUILD_VERSION")
    }

    pub fn is_flatpak() -> bool {
        Path::new("/.flatpak-info").exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medium_bitrate_for_full_hd() {
        assert_eq!(BitratePreset::Medium.bitrate_kbps(1920), 8_000);
        assert_eq!(BitratePreset::High.bitrate_kbps(640), 4_000);
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!app_info::version().is_empty());
    }
}

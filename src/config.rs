// SPDX-License-Identifier: GPL-3.0-only

use crate::constants::BitratePreset;
use crate::flash::FlashMode;
use crate::media::{AspectRatio, CompositionGuide};
use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use cosmic::{Theme, theme};
use serde::{Deserialize, Serialize};

/// Application theme preference
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum AppTheme {
    /// Follow system theme
    #[default]
    System,
    Dark,
    Light,
}

impl AppTheme {
    pub const ALL: [AppTheme; 3] = [AppTheme::System, AppTheme::Dark, AppTheme::Light];

    /// Get the COSMIC theme for this app theme preference
    pub fn theme(&self) -> Theme {
        match self {
            Self::Dark => {
                let mut theme = theme::system_dark();
                theme.theme_type.prefer_dark(Some(true));
                theme
            }
            Self::Light => {
                let mut theme = theme::system_light();
                theme.theme_type.prefer_dark(Some(false));
                theme
            }
            Self::System => theme::system_preference(),
        }
    }
}

/// Text scale used across the interface
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum TextSize {
    #[default]
    Normal,
    Large,
    Extra,
}

impl TextSize {
    pub const ALL: [TextSize; 3] = [TextSize::Normal, TextSize::Large, TextSize::Extra];

    pub fn scale(&self) -> f32 {
        match self {
            TextSize::Normal => 1.0,
            TextSize::Large => 1.25,
            TextSize::Extra => 1.5,
        }
    }

    /// Scale a base point size, rounding to whole points
    pub fn apply(&self, base: u16) -> u16 {
        (base as f32 * self.scale()).round() as u16
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct AccessibilitySettings {
    /// Listen for spoken commands
    pub voice_commands: bool,
    pub text_size: TextSize,
    /// Opaque panels, yellow accent and thicker borders
    pub high_contrast: bool,
}

#[derive(Debug, Clone, CosmicConfigEntry, PartialEq, Serialize, Deserialize)]
#[version = 1]
pub struct Config {
    /// Application theme preference (System, Dark, Light)
    pub app_theme: AppTheme,
    /// Last used camera device path
    pub last_camera_path: Option<String>,
    /// Mirror camera preview horizontally
    pub mirror_preview: bool,
    pub composition_guide: CompositionGuide,
    /// Framing for preview and export
    pub aspect_ratio: AspectRatio,
    /// Capture the sharpest recent frame instead of the latest
    pub stabilization: bool,
    pub flash_mode: FlashMode,
    /// JPEG quality for captures and exports (1-100)
    pub jpeg_quality: u8,
    /// Also write each capture to the pictures directory
    pub save_captures: bool,
    pub bitrate_preset: BitratePreset,
    pub accessibility: AccessibilitySettings,
    /// Speech recognizer command line; must print one transcript per line
    pub voice_recognizer_command: String,
    /// Export folder; empty means the pictures directory
    pub export_directory: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_theme: AppTheme::default(),
            last_camera_path: None,
            // The default stream faces the environment, so no selfie mirroring
            mirror_preview: false,
            composition_guide: CompositionGuide::default(),
            aspect_ratio: AspectRatio::default(),
            stabilization: true,
            flash_mode: FlashMode::default(),
            jpeg_quality: crate::constants::capture::DEFAULT_JPEG_QUALITY,
            save_captures: true,
            bitrate_preset: BitratePreset::default(),
            accessibility: AccessibilitySettings::default(),
            voice_recognizer_command: String::new(),
            export_directory: String::new(),
        }
    }
}

impl Config {
    /// JPEG quality clamped to the encoder's accepted range
    pub fn effective_jpeg_quality(&self) -> u8 {
        self.jpeg_quality.clamp(1, 100)
    }
}

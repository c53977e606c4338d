// SPDX-License-Identifier: GPL-3.0-only

//! Scene presets and manual exposure settings
//!
//! Selecting a scene loads a fixed tuple of ISO, aperture, shutter speed,
//! white balance and exposure compensation. ISO, aperture and shutter are
//! shown and recorded but webcams rarely expose them, so only white balance
//! and exposure compensation change the captured pixels.

use crate::fl;
use crate::media::tone;
use std::fmt;
use std::str::FromStr;

pub const ISO_MIN: u32 = 100;
pub const ISO_MAX: u32 = 6400;
pub const ISO_STEP: u32 = 100;

pub const APERTURE_MIN: f32 = 1.4;
pub const APERTURE_MAX: f32 = 22.0;

pub const EXPOSURE_MIN: f32 = -2.0;
pub const EXPOSURE_MAX: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SceneType {
    #[default]
    Auto,
    Portrait,
    Landscape,
    Macro,
    Night,
    Sport,
}

impl SceneType {
    pub const ALL: [SceneType; 6] = [
        SceneType::Auto,
        SceneType::Portrait,
        SceneType::Landscape,
        SceneType::Macro,
        SceneType::Night,
        SceneType::Sport,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SceneType::Auto => "auto",
            SceneType::Portrait => "portrait",
            SceneType::Landscape => "landscape",
            SceneType::Macro => "macro",
            SceneType::Night => "night",
            SceneType::Sport => "sport",
        }
    }

    pub fn label(&self) -> String {
        match self {
            SceneType::Auto => fl!("scene-auto"),
            SceneType::Portrait => fl!("scene-portrait"),
            SceneType::Landscape => fl!("scene-landscape"),
            SceneType::Macro => fl!("scene-macro"),
            SceneType::Night => fl!("scene-night"),
            SceneType::Sport => fl!("scene-sport"),
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            SceneType::Auto => "camera-photo-symbolic",
            SceneType::Portrait => "avatar-default-symbolic",
            SceneType::Landscape => "image-x-generic-symbolic",
            SceneType::Macro => "zoom-in-symbolic",
            SceneType::Night => "weather-clear-night-symbolic",
            SceneType::Sport => "media-seek-forward-symbolic",
        }
    }

    /// Settings loaded when this scene is chosen in Pro mode
    pub fn preset(&self) -> ManualSettings {
        let (iso, aperture, shutter, white_balance, exposure) = match self {
            SceneType::Portrait => (200, 1.8, 125, WhiteBalance::Daylight, 0.3),
            SceneType::Landscape => (100, 8.0, 250, WhiteBalance::Auto, 0.0),
            SceneType::Macro => (400, 2.8, 125, WhiteBalance::Auto, 0.5),
            SceneType::Night => (3200, 1.4, 30, WhiteBalance::Tungsten, 0.7),
            SceneType::Sport => (800, 4.0, 1000, WhiteBalance::Auto, 0.0),
            SceneType::Auto => (400, 2.8, 125, WhiteBalance::Auto, 0.0),
        };
        ManualSettings {
            iso,
            aperture,
            shutter: ShutterSpeed(shutter),
            white_balance,
            exposure,
        }
    }
}

impl fmt::Display for SceneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SceneType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SceneType::ALL
            .into_iter()
            .find(|scene| scene.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown scene '{}'", s))
    }
}

/// Shutter speed as the denominator of a fraction of a second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShutterSpeed(pub u32);

impl ShutterSpeed {
    pub const ALL: [ShutterSpeed; 7] = [
        ShutterSpeed(30),
        ShutterSpeed(60),
        ShutterSpeed(125),
        ShutterSpeed(250),
        ShutterSpeed(500),
        ShutterSpeed(1000),
        ShutterSpeed(2000),
    ];
}

impl Default for ShutterSpeed {
    fn default() -> Self {
        ShutterSpeed(125)
    }
}

impl fmt::Display for ShutterSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1/{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WhiteBalance {
    #[default]
    Auto,
    Daylight,
    Cloudy,
    Tungsten,
    Fluorescent,
}

impl WhiteBalance {
    pub const ALL: [WhiteBalance; 5] = [
        WhiteBalance::Auto,
        WhiteBalance::Daylight,
        WhiteBalance::Cloudy,
        WhiteBalance::Tungsten,
        WhiteBalance::Fluorescent,
    ];

    pub fn label(&self) -> String {
        match self {
            WhiteBalance::Auto => fl!("wb-auto"),
            WhiteBalance::Daylight => fl!("wb-daylight"),
            WhiteBalance::Cloudy => fl!("wb-cloudy"),
            WhiteBalance::Tungsten => fl!("wb-tungsten"),
            WhiteBalance::Fluorescent => fl!("wb-fluorescent"),
        }
    }

    /// Assumed light source temperature; `None` leaves the camera's balance alone
    pub fn kelvin(&self) -> Option<u32> {
        match self {
            WhiteBalance::Auto => None,
            WhiteBalance::Daylight => Some(5500),
            WhiteBalance::Cloudy => Some(6500),
            WhiteBalance::Tungsten => Some(3200),
            WhiteBalance::Fluorescent => Some(4000),
        }
    }

    /// RGB gains applied to captures
    pub fn gains(&self) -> [f32; 3] {
        self.kelvin()
            .map(tone::white_balance_gains)
            .unwrap_or([1.0; 3])
    }
}

impl fmt::Display for WhiteBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Pro-mode exposure parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManualSettings {
    pub iso: u32,
    pub aperture: f32,
    pub shutter: ShutterSpeed,
    pub white_balance: WhiteBalance,
    /// Exposure compensation in EV
    pub exposure: f32,
}

impl Default for ManualSettings {
    fn default() -> Self {
        SceneType::Auto.preset()
    }
}

fn snap(value: f32, step: f32) -> f32 {
    let snapped = (value / step).round() * step;
    // Avoid displaying "-0.0"
    if snapped == 0.0 { 0.0 } else { snapped }
}

impl ManualSettings {
    pub fn set_iso(&mut self, iso: u32) {
        let clamped = iso.clamp(ISO_MIN, ISO_MAX);
        self.iso = ((clamped + ISO_STEP / 2) / ISO_STEP * ISO_STEP).clamp(ISO_MIN, ISO_MAX);
    }

    pub fn set_aperture(&mut self, aperture: f32) {
        self.aperture = snap(aperture.clamp(APERTURE_MIN, APERTURE_MAX), 0.1);
    }

    pub fn set_exposure(&mut self, exposure: f32) {
        self.exposure = snap(exposure.clamp(EXPOSURE_MIN, EXPOSURE_MAX), 0.1);
    }

    /// `f/2.8`
    pub fn aperture_label(&self) -> String {
        format!("f/{:.1}", self.aperture)
    }

    /// `+0.3`, `0.0`, `-1.0`
    pub fn exposure_label(&self) -> String {
        if self.exposure > 0.0 {
            format!("+{:.1}", self.exposure)
        } else {
            format!("{:.1}", self.exposure)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_snaps_and_clamps() {
        let mut settings = ManualSettings::default();
        settings.set_iso(349);
        assert_eq!(settings.iso, 300);
        settings.set_iso(350);
        assert_eq!(settings.iso, 400);
        settings.set_iso(10);
        assert_eq!(settings.iso, ISO_MIN);
        settings.set_iso(99_999);
        assert_eq!(settings.iso, ISO_MAX);
        settings.set_iso(u32::MAX);
        assert_eq!(settings.iso, ISO_MAX);
    }

    #[test]
    fn aperture_and_exposure_clamp() {
        let mut settings = ManualSettings::default();
        settings.set_aperture(0.5);
        assert!((settings.aperture - APERTURE_MIN).abs() < 1e-5);
        settings.set_exposure(3.7);
        assert!((settings.exposure - EXPOSURE_MAX).abs() < 1e-5);
        settings.set_exposure(-0.04);
        assert_eq!(settings.exposure_label(), "0.0");
    }

    #[test]
    fn labels() {
        let settings = SceneType::Portrait.preset();
        assert_eq!(settings.aperture_label(), "f/1.8");
        assert_eq!(settings.exposure_label(), "+0.3");
        assert_eq!(settings.shutter.to_string(), "1/125");
    }

    #[test]
    fn scene_labels_are_localized_names() {
        assert_eq!(SceneType::Night.label(), "Night");
        assert_eq!(SceneType::Night.to_string(), "night");
        assert_eq!(WhiteBalance::Fluorescent.label(), "Fluorescent");
    }

    #[test]
    fn auto_white_balance_is_neutral() {
        assert_eq!(WhiteBalance::Auto.gains(), [1.0; 3]);
        assert!(WhiteBalance::Tungsten.gains()[2] > 1.0);
    }
}

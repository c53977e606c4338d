// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use procam::Config;
use procam::config::TextSize;
use procam::flash::FlashMode;
use procam::media::{AspectRatio, CompositionGuide};

#[test]
fn test_config_default() {
    let config = Config::default();

    assert!(
        !config.mirror_preview,
        "Environment-facing default stream should not be mirrored"
    );
    assert!(config.stabilization);
    assert!(config.save_captures);
    assert_eq!(config.flash_mode, FlashMode::Auto);
    assert_eq!(config.aspect_ratio, AspectRatio::Widescreen);
    assert_eq!(config.composition_guide, CompositionGuide::default());
}

#[test]
fn test_accessibility_defaults_off() {
    let config = Config::default();
    assert!(!config.accessibility.voice_commands);
    assert!(!config.accessibility.high_contrast);
    assert_eq!(config.accessibility.text_size, TextSize::Normal);
}

#[test]
fn test_jpeg_quality_is_clamped() {
    let mut config = Config::default();
    config.jpeg_quality = 0;
    assert_eq!(config.effective_jpeg_quality(), 1);
    config.jpeg_quality = 255;
    assert_eq!(config.effective_jpeg_quality(), 100);
}

#[test]
fn test_text_size_scales_up() {
    assert_eq!(TextSize::Normal.apply(14), 14);
    assert!(TextSize::Large.apply(14) > 14);
    assert!(TextSize::Extra.apply(14) > TextSize::Large.apply(14));
}

#[test]
fn test_config_survives_json_round_trip() {
    let mut config = Config::default();
    config.accessibility.high_contrast = true;
    config.aspect_ratio = AspectRatio::Square;

    let json = serde_json::to_string(&config).expect("serialize");
    let restored: Config = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, config);
}

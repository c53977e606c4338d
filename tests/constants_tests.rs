// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for constants module

use procam::constants::BitratePreset;

#[test]
fn test_bitrate_preset_values() {
    assert_eq!(BitratePreset::ALL.len(), 3);
    assert_eq!(BitratePreset::default(), BitratePreset::Medium);
}

#[test]
fn test_bitrate_preset_ordering() {
    // Presets are ordered from lowest to highest quality
    let mut prev_bitrate = 0u32;
    for preset in BitratePreset::ALL {
        let bitrate = preset.bitrate_kbps(1920);
        assert!(bitrate > prev_bitrate);
        prev_bitrate = bitrate;
    }
}

#[test]
fn test_bitrate_scales_with_resolution() {
    let sd = BitratePreset::Medium.bitrate_kbps(640);
    let hd = BitratePreset::Medium.bitrate_kbps(1280);
    let fhd = BitratePreset::Medium.bitrate_kbps(1920);
    let uhd = BitratePreset::Medium.bitrate_kbps(3840);

    assert!(sd < hd);
    assert!(hd < fhd);
    assert!(fhd < uhd);
}

#[test]
fn test_bitrate_preset_display_names() {
    let names: Vec<String> = BitratePreset::ALL.iter().map(|p| p.display_name()).collect();
    assert_eq!(names, ["Low", "Medium", "High"]);
}

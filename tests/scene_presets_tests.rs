// SPDX-License-Identifier: GPL-3.0-only

//! Scene presets and manual setting bounds

use procam::scene::{
    APERTURE_MAX, APERTURE_MIN, ISO_MAX, ISO_MIN, ManualSettings, SceneType, ShutterSpeed,
    WhiteBalance,
};

#[test]
fn test_six_scenes() {
    assert_eq!(SceneType::ALL.len(), 6);
}

#[test]
fn test_presets_within_bounds() {
    for scene in SceneType::ALL {
        let preset = scene.preset();
        assert!((ISO_MIN..=ISO_MAX).contains(&preset.iso), "{scene} ISO");
        assert!(
            (APERTURE_MIN..=APERTURE_MAX).contains(&preset.aperture),
            "{scene} aperture"
        );
        assert!(
            ShutterSpeed::ALL.contains(&preset.shutter),
            "{scene} shutter must be selectable"
        );
    }
}

#[test]
fn test_night_preset() {
    let night = SceneType::Night.preset();
    assert_eq!(night.iso, 3200);
    assert_eq!(night.aperture, 1.4);
    assert_eq!(night.shutter, ShutterSpeed(30));
    assert_eq!(night.white_balance, WhiteBalance::Tungsten);
}

#[test]
fn test_sport_uses_fast_shutter() {
    let sport = SceneType::Sport.preset();
    assert_eq!(sport.shutter, ShutterSpeed(1000));
    assert_eq!(sport.shutter.to_string(), "1/1000");
}

#[test]
fn test_default_manual_settings_match_auto() {
    assert_eq!(ManualSettings::default(), SceneType::Auto.preset());
}

#[test]
fn test_manual_values_snap_and_clamp() {
    let mut manual = ManualSettings::default();

    manual.set_iso(149);
    assert_eq!(manual.iso, 100);
    manual.set_iso(10_000);
    assert_eq!(manual.iso, ISO_MAX);

    manual.set_aperture(0.5);
    assert_eq!(manual.aperture_label(), "f/1.4");

    manual.set_exposure(0.04);
    assert_eq!(manual.exposure_label(), "0.0");
    manual.set_exposure(-5.0);
    assert_eq!(manual.exposure_label(), "-2.0");
    manual.set_exposure(0.3);
    assert_eq!(manual.exposure_label(), "+0.3");
}

#[test]
fn test_scene_parses_from_cli_id() {
    assert_eq!("night".parse::<SceneType>(), Ok(SceneType::Night));
    assert!("underwater".parse::<SceneType>().is_err());
}

// SPDX-License-Identifier: GPL-3.0-only

//! Flash mode cycling and firing

use procam::flash::FlashMode;

#[test]
fn test_cycle_order() {
    assert_eq!(FlashMode::Off.next(), FlashMode::Auto);
    assert_eq!(FlashMode::Auto.next(), FlashMode::On);
    assert_eq!(FlashMode::On.next(), FlashMode::Off);
}

#[test]
fn test_three_presses_return_to_start() {
    for mode in [FlashMode::Off, FlashMode::Auto, FlashMode::On] {
        assert_eq!(mode.next().next().next(), mode);
    }
}

#[test]
fn test_should_fire() {
    assert!(!FlashMode::Off.should_fire(Some(0.0)));
    assert!(FlashMode::On.should_fire(Some(1.0)));
    assert!(FlashMode::On.should_fire(None));
    assert!(FlashMode::Auto.should_fire(Some(0.05)));
    assert!(!FlashMode::Auto.should_fire(Some(0.8)));
    assert!(!FlashMode::Auto.should_fire(None));
}

#[test]
fn test_labels() {
    assert_eq!(FlashMode::Off.label(), "Off");
    assert_eq!(FlashMode::Auto.label(), "Auto");
    assert_eq!(FlashMode::On.label(), "On");
}

// SPDX-License-Identifier: GPL-3.0-only

//! Voice command matching

use procam::CameraMode;
use procam::voice::VoiceCommand;

#[test]
fn test_capture_phrases() {
    assert_eq!(VoiceCommand::parse("Capture"), Some(VoiceCommand::Capture));
    assert_eq!(
        VoiceCommand::parse("take a photo please"),
        Some(VoiceCommand::Capture)
    );
}

#[test]
fn test_record_phrases() {
    assert_eq!(
        VoiceCommand::parse("start recording"),
        Some(VoiceCommand::ToggleRecording)
    );
    assert_eq!(
        VoiceCommand::parse("VIDEO"),
        Some(VoiceCommand::ToggleRecording)
    );
}

#[test]
fn test_mode_phrases() {
    assert_eq!(
        VoiceCommand::parse("switch to pro mode"),
        Some(VoiceCommand::SetMode(CameraMode::Pro))
    );
    assert_eq!(
        VoiceCommand::parse("auto mode"),
        Some(VoiceCommand::SetMode(CameraMode::Auto))
    );
}

#[test]
fn test_first_rule_wins() {
    // "photo" is checked before "pro mode"
    assert_eq!(
        VoiceCommand::parse("photo in pro mode"),
        Some(VoiceCommand::Capture)
    );
}

#[test]
fn test_unmatched_transcripts() {
    assert_eq!(VoiceCommand::parse(""), None);
    assert_eq!(VoiceCommand::parse("hello there"), None);
    assert_eq!(VoiceCommand::parse("pro"), None);
}

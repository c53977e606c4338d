// SPDX-License-Identifier: GPL-3.0-only

//! Spoken commands
//!
//! Transcripts are matched by substring, first rule wins:
//!
//! | transcript contains    | command            |
//! |------------------------|--------------------|
//! | `capture` or `photo`   | capture a photo    |
//! | `record` or `video`    | toggle recording   |
//! | `pro mode`             | switch to Pro      |
//! | `auto mode`            | switch to Auto     |

pub mod recognizer;

use crate::app::CameraMode;
use crate::fl;

/// A command recognized from a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceCommand {
    Capture,
    ToggleRecording,
    SetMode(CameraMode),
}

impl VoiceCommand {
    /// Match a transcript against the command rules
    ///
    /// Returns `None` for transcripts that match no rule. At most one command
    /// is produced per transcript.
    pub fn parse(transcript: &str) -> Option<Self> {
        let text = transcript.to_lowercase();

        if text.contains("capture") || text.contains("photo") {
            Some(VoiceCommand::Capture)
        } else if text.contains("record") || text.contains("video") {
            Some(VoiceCommand::ToggleRecording)
        } else if text.contains("pro mode") {
            Some(VoiceCommand::SetMode(CameraMode::Pro))
        } else if text.contains("auto mode") {
            Some(VoiceCommand::SetMode(CameraMode::Auto))
        } else {
            None
        }
    }

    /// Phrases shown in the settings panel
    pub fn hints() -> [(String, String); 4] {
        [
            (fl!("voice-hint-capture-phrase"), fl!("voice-hint-capture")),
            (fl!("voice-hint-record-phrase"), fl!("voice-hint-record")),
            (fl!("voice-hint-pro-phrase"), fl!("voice-hint-pro")),
            (fl!("voice-hint-auto-phrase"), fl!("voice-hint-auto")),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_wins_over_record() {
        assert_eq!(
            VoiceCommand::parse("capture the video"),
            Some(VoiceCommand::Capture)
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            VoiceCommand::parse("Switch to PRO MODE"),
            Some(VoiceCommand::SetMode(CameraMode::Pro))
        );
    }

    #[test]
    fn hints_name_phrases_that_parse() {
        let expected = [
            VoiceCommand::Capture,
            VoiceCommand::ToggleRecording,
            VoiceCommand::SetMode(CameraMode::Pro),
            VoiceCommand::SetMode(CameraMode::Auto),
        ];
        for ((phrase, action), command) in VoiceCommand::hints().iter().zip(expected) {
            assert!(!action.is_empty());
            assert_eq!(VoiceCommand::parse(phrase), Some(command), "{}", phrase);
        }
    }

    #[test]
    fn unrelated_speech_is_ignored() {
        assert_eq!(VoiceCommand::parse("hello there"), None);
        assert_eq!(VoiceCommand::parse(""), None);
    }
}

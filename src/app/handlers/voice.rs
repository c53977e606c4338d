// SPDX-License-Identifier: GPL-3.0-only

//! Speech recognizer event handling

use crate::app::state::{AppModel, Message, VoiceStatus};
use crate::voice::VoiceCommand;
use crate::voice::recognizer::RecognizerEvent;
use cosmic::Task;
use tracing::{debug, info, warn};

impl AppModel {
    pub(crate) fn handle_recognizer_event(
        &mut self,
        event: RecognizerEvent,
    ) -> Task<cosmic::Action<Message>> {
        // Events can still arrive briefly after the toggle is switched off
        if !self.config.accessibility.voice_commands {
            return Task::none();
        }

        match event {
            RecognizerEvent::Listening => {
                self.voice_status = VoiceStatus::Listening;
                Task::none()
            }
            RecognizerEvent::Unavailable(reason) => {
                warn!(reason = %reason, "Voice commands unavailable");
                self.voice_status = VoiceStatus::Unavailable(reason);
                Task::none()
            }
            RecognizerEvent::Transcript(transcript) => {
                self.voice_status = VoiceStatus::Heard(transcript.clone());
                match VoiceCommand::parse(&transcript) {
                    Some(command) => {
                        info!(?command, transcript = %transcript, "Voice command");
                        self.run_voice_command(command)
                    }
                    None => {
                        debug!(transcript = %transcript, "No command in transcript");
                        Task::none()
                    }
                }
            }
        }
    }

    fn run_voice_command(&mut self, command: VoiceCommand) -> Task<cosmic::Action<Message>> {
        match command {
            VoiceCommand::Capture => self.handle_capture(),
            VoiceCommand::ToggleRecording => self.handle_toggle_recording(),
            VoiceCommand::SetMode(mode) => self.handle_set_mode(mode),
        }
    }
}

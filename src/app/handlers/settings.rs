// SPDX-License-Identifier: GPL-3.0-only

//! Settings and accessibility handlers

use crate::app::state::{AppModel, Message, VoiceStatus};
use crate::config::{AppTheme, TextSize};
use crate::constants::BitratePreset;
use cosmic::Task;
use tracing::info;

impl AppModel {
    /// Turning voice on starts the recognizer subscription
    pub(crate) fn handle_toggle_voice_commands(
        &mut self,
        enabled: bool,
    ) -> Task<cosmic::Action<Message>> {
        self.config.accessibility.voice_commands = enabled;
        self.voice_status = if enabled {
            VoiceStatus::Listening
        } else {
            VoiceStatus::Off
        };
        info!(enabled, "Voice commands toggled");
        self.save_config("voice_commands");
        Task::none()
    }

    pub(crate) fn handle_select_text_size(
        &mut self,
        index: usize,
    ) -> Task<cosmic::Action<Message>> {
        let Some(size) = TextSize::ALL.get(index) else {
            return Task::none();
        };
        self.config.accessibility.text_size = *size;
        info!(?size, scale = size.scale(), "Text size changed");
        self.save_config("text_size");
        Task::none()
    }

    pub(crate) fn handle_toggle_high_contrast(
        &mut self,
        enabled: bool,
    ) -> Task<cosmic::Action<Message>> {
        self.config.accessibility.high_contrast = enabled;
        info!(enabled, "High contrast toggled");
        self.save_config("high_contrast");
        Task::none()
    }

    pub(crate) fn handle_set_app_theme(&mut self, index: usize) -> Task<cosmic::Action<Message>> {
        let Some(app_theme) = AppTheme::ALL.get(index).copied() else {
            return Task::none();
        };
        info!(?app_theme, "Setting application theme");
        self.config.app_theme = app_theme;
        self.save_config("app_theme");
        cosmic::command::set_theme(app_theme.theme())
    }

    pub(crate) fn handle_toggle_mirror_preview(
        &mut self,
        enabled: bool,
    ) -> Task<cosmic::Action<Message>> {
        self.config.mirror_preview = enabled;
        self.save_config("mirror_preview");
        Task::none()
    }

    pub(crate) fn handle_toggle_save_captures(
        &mut self,
        enabled: bool,
    ) -> Task<cosmic::Action<Message>> {
        self.config.save_captures = enabled;
        self.save_config("save_captures");
        Task::none()
    }

    /// Applies to the next recording
    pub(crate) fn handle_select_bitrate_preset(
        &mut self,
        index: usize,
    ) -> Task<cosmic::Action<Message>> {
        let Some(preset) = BitratePreset::ALL.get(index).copied() else {
            return Task::none();
        };
        info!(?preset, "Selected bitrate preset");
        self.config.bitrate_preset = preset;
        self.save_config("bitrate_preset");
        Task::none()
    }
}

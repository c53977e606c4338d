// SPDX-License-Identifier: GPL-3.0-only

//! UI navigation handlers
//!
//! Handles context pages, external links and configuration reloads.

use crate::app::state::{AppModel, ContextPage, Message, VoiceStatus};
use cosmic::Task;
use cosmic::cosmic_config::CosmicConfigEntry;
use tracing::{error, info};

impl AppModel {
    /// Create a delayed task that sends a message after the specified duration
    pub(crate) fn delay_task(
        duration: std::time::Duration,
        message: Message,
    ) -> Task<cosmic::Action<Message>> {
        Task::perform(
            async move {
                tokio::time::sleep(duration).await;
                message
            },
            cosmic::Action::App,
        )
    }

    /// Persist the current configuration, logging failures
    pub(crate) fn save_config(&self, what: &str) {
        if let Some(handler) = self.config_handler.as_ref()
            && let Err(err) = self.config.write_entry(handler)
        {
            error!(?err, setting = what, "Failed to save setting");
        }
    }

    pub(crate) fn handle_launch_url(&self, url: String) -> Task<cosmic::Action<Message>> {
        if let Err(err) = open::that_detached(&url) {
            error!(url = %url, error = %err, "Failed to open URL");
        }
        Task::none()
    }

    pub(crate) fn handle_toggle_context_page(
        &mut self,
        context_page: ContextPage,
    ) -> Task<cosmic::Action<Message>> {
        if self.context_page == context_page {
            self.core.window.show_context = !self.core.window.show_context;
        } else {
            self.context_page = context_page;
            self.core.window.show_context = true;
        }
        Task::none()
    }

    pub(crate) fn handle_update_config(
        &mut self,
        config: crate::config::Config,
    ) -> Task<cosmic::Action<Message>> {
        if config == self.config {
            return Task::none();
        }
        info!("Configuration changed externally");

        let theme_changed = config.app_theme != self.config.app_theme;
        let voice_changed =
            config.accessibility.voice_commands != self.config.accessibility.voice_commands;
        self.config = config;

        if voice_changed {
            self.voice_status = if self.config.accessibility.voice_commands {
                VoiceStatus::Listening
            } else {
                VoiceStatus::Off
            };
        }

        if theme_changed {
            return cosmic::command::set_theme(self.config.app_theme.theme());
        }
        Task::none()
    }
}

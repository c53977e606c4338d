// SPDX-License-Identifier: GPL-3.0-only

//! Settings drawer view

use crate::app::state::{AppModel, ContextPage, Message, VoiceStatus};
use crate::config::{AppTheme, TextSize};
use crate::constants::{BitratePreset, app_info, ui};
use crate::fl;
use crate::voice::VoiceCommand;
use cosmic::Element;
use cosmic::app::context_drawer;
use cosmic::iced::{Alignment, Length};
use cosmic::widget;

impl AppModel {
    /// Create the settings view for the context drawer
    ///
    /// Accessibility comes first, followed by camera, capture and app info.
    pub fn settings_view(&self) -> context_drawer::ContextDrawer<'_, Message> {
        let spacing = cosmic::theme::spacing();
        let accessibility = &self.config.accessibility;

        let text_size_index = TextSize::ALL
            .iter()
            .position(|s| *s == accessibility.text_size);
        let theme_index = AppTheme::ALL
            .iter()
            .position(|t| *t == self.config.app_theme);
        let bitrate_index = BitratePreset::ALL
            .iter()
            .position(|p| *p == self.config.bitrate_preset);

        let mut voice_section = widget::column()
            .push(self.toggle_row(
                fl!("voice-commands"),
                accessibility.voice_commands,
                Message::ToggleVoiceCommands,
            ))
            .spacing(spacing.space_xxs);
        if accessibility.voice_commands {
            voice_section = voice_section
                .push(self.build_voice_status())
                .push(self.build_voice_hints());
        }

        let export_dir = crate::storage::export_directory(&self.config.export_directory);

        let version_info = if app_info::is_flatpak() {
            fl!("version-flatpak", version = app_info::version())
        } else {
            fl!("version", version = app_info::version())
        };

        let settings_column: Element<'_, Message> = widget::column()
            .push(self.heading(fl!("accessibility")))
            .push(voice_section)
            .push(self.labeled(
                fl!("text-size"),
                widget::dropdown(
                    &self.text_size_dropdown_options,
                    text_size_index,
                    Message::SelectTextSize,
                ),
            ))
            .push(self.toggle_row(
                fl!("high-contrast"),
                accessibility.high_contrast,
                Message::ToggleHighContrast,
            ))
            .push(widget::divider::horizontal::default())
            .push(self.heading(fl!("camera")))
            .push(widget::dropdown(
                &self.camera_dropdown_options,
                self.current_camera_index(),
                Message::SelectCamera,
            ))
            .push(self.toggle_row(
                fl!("mirror-preview"),
                self.config.mirror_preview,
                Message::ToggleMirrorPreview,
            ))
            .push(widget::divider::horizontal::default())
            .push(self.heading(fl!("capture")))
            .push(self.toggle_row(
                fl!("save-captures"),
                self.config.save_captures,
                Message::ToggleSaveCaptures,
            ))
            .push(self.labeled(
                fl!("video-quality"),
                widget::dropdown(
                    &self.bitrate_dropdown_options,
                    bitrate_index,
                    Message::SelectBitratePreset,
                ),
            ))
            .push(
                widget::column()
                    .push(widget::text(fl!("export-folder")).size(self.text_size(ui::TEXT_BODY)))
                    .push(
                        widget::text(export_dir.display().to_string())
                            .size(self.text_size(ui::TEXT_CAPTION))
                            .class(cosmic::theme::Text::Accent),
                    )
                    .spacing(spacing.space_xxxs),
            )
            .push(widget::divider::horizontal::default())
            .push(self.heading(fl!("appearance")))
            .push(self.labeled(
                fl!("theme"),
                widget::dropdown(
                    &self.theme_dropdown_options,
                    theme_index,
                    Message::SetAppTheme,
                ),
            ))
            .push(widget::divider::horizontal::default())
            .push(
                widget::column()
                    .push(
                        widget::text(fl!("app-title"))
                            .size(self.text_size(ui::TEXT_BODY))
                            .font(cosmic::font::bold()),
                    )
                    .push(
                        widget::text(fl!("app-description"))
                            .size(self.text_size(ui::TEXT_CAPTION)),
                    )
                    .push(
                        widget::text(version_info)
                            .size(self.text_size(ui::TEXT_CAPTION))
                            .class(cosmic::theme::Text::Accent),
                    )
                    .push(
                        widget::button::link(fl!("about"))
                            .on_press(Message::ToggleContextPage(ContextPage::About)),
                    )
                    .spacing(spacing.space_xxxs),
            )
            .spacing(spacing.space_s)
            .into();

        context_drawer::context_drawer(
            settings_column,
            Message::ToggleContextPage(ContextPage::Settings),
        )
        .title(fl!("settings"))
    }

    fn heading(&self, title: String) -> Element<'_, Message> {
        widget::text(title)
            .size(self.text_size(16))
            .font(cosmic::font::bold())
            .into()
    }

    fn toggle_row(
        &self,
        label: String,
        value: bool,
        on_toggle: fn(bool) -> Message,
    ) -> Element<'_, Message> {
        widget::row()
            .push(
                widget::text(label)
                    .size(self.text_size(ui::TEXT_BODY))
                    .width(Length::Fill),
            )
            .push(widget::toggler(value).on_toggle(on_toggle))
            .align_y(Alignment::Center)
            .into()
    }

    fn labeled<'a>(
        &self,
        label: String,
        control: impl Into<Element<'a, Message>>,
    ) -> Element<'a, Message> {
        widget::column()
            .push(widget::text(label).size(self.text_size(ui::TEXT_BODY)))
            .push(control.into())
            .spacing(cosmic::theme::spacing().space_xxs)
            .into()
    }

    fn build_voice_status(&self) -> Element<'_, Message> {
        let text = match &self.voice_status {
            VoiceStatus::Off => {
                return widget::Space::new(Length::Shrink, Length::Shrink).into();
            }
            VoiceStatus::Listening => fl!("voice-listening"),
            VoiceStatus::Heard(transcript) => {
                fl!("voice-heard", transcript = transcript.as_str())
            }
            VoiceStatus::Unavailable(reason) => {
                fl!("voice-unavailable", reason = reason.as_str())
            }
        };
        widget::text(text)
            .size(self.text_size(ui::TEXT_CAPTION))
            .class(cosmic::theme::Text::Accent)
            .into()
    }

    /// Supported phrases and what they do
    fn build_voice_hints(&self) -> Element<'_, Message> {
        let size = self.text_size(ui::TEXT_CAPTION);
        let mut column = widget::column()
            .push(widget::text(fl!("voice-try-saying")).size(size))
            .spacing(2);
        for (phrase, action) in VoiceCommand::hints() {
            column = column.push(
                widget::row()
                    .push(
                        widget::text(phrase)
                            .size(size)
                            .font(cosmic::font::bold())
                            .width(Length::Fixed(ui::SLIDER_LABEL_WIDTH + 20.0)),
                    )
                    .push(widget::text(action).size(size)),
            );
        }
        column.into()
    }
}

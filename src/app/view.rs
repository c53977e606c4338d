// SPDX-License-Identifier: GPL-3.0-only

//! Main application view
//!
//! Composes the camera screen from its parts:
//! - Preview with top bar, REC badge and Pro HUD overlays
//! - Pro mode panel on the left in Pro mode
//! - Capture button and bottom bar
//!
//! The editing suite replaces the camera screen while open.

use crate::app::state::{AppModel, CameraMode, CameraStatus, Message};
use crate::app::style;
use crate::constants::ui;
use crate::fl;
use crate::media::AspectRatio;
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Color, Length};
use cosmic::widget;

impl AppModel {
    /// Build the main application view
    pub fn view(&self) -> Element<'_, Message> {
        // Flash: white screen only, no UI
        if self.flash_active {
            return widget::container(widget::Space::new(Length::Fill, Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(|_theme| widget::container::Style {
                    background: Some(Background::Color(Color::WHITE)),
                    ..Default::default()
                })
                .into();
        }

        if self.editor.open {
            return self.build_editor();
        }

        let spacing = cosmic::theme::spacing();

        let mut preview_stack = cosmic::iced::widget::stack![
            self.build_camera_preview(),
            widget::container(self.build_top_bar())
                .width(Length::Fill)
                .align_y(cosmic::iced::alignment::Vertical::Top)
        ];

        if let Some(hud) = self.build_pro_hud() {
            preview_stack = preview_stack.push(
                widget::container(hud)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(cosmic::iced::alignment::Horizontal::Left)
                    .align_y(cosmic::iced::alignment::Vertical::Bottom)
                    .padding(spacing.space_s),
            );
        }

        let preview = preview_stack.width(Length::Fill).height(Length::Fill);

        let camera_area: Element<'_, Message> = if self.mode == CameraMode::Pro {
            widget::row()
                .push(self.build_pro_panel())
                .push(preview)
                .spacing(spacing.space_xs)
                .padding([0, 0, 0, spacing.space_xs])
                .height(Length::Fill)
                .into()
        } else {
            preview.into()
        };

        let content = widget::column()
            .push(camera_area)
            .push(self.build_capture_button())
            .push(self.build_bottom_bar())
            .width(Length::Fill)
            .height(Length::Fill);

        widget::container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| widget::container::Style {
                background: Some(Background::Color(Color::BLACK)),
                text_color: Some(Color::WHITE),
                ..Default::default()
            })
            .into()
    }

    /// Latest rendered frame, or a placeholder when there is no feed
    fn build_camera_preview(&self) -> Element<'_, Message> {
        if let Some(handle) = &self.preview {
            return widget::image::Image::new(handle.clone())
                .content_fit(cosmic::iced::ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into();
        }

        let spacing = cosmic::theme::spacing();
        let mut column = widget::column()
            .push(widget::icon::from_name("camera-disabled-symbolic").size(48))
            .push(widget::text(fl!("no-camera-feed")).size(self.text_size(ui::TEXT_TITLE)))
            .align_x(Alignment::Center)
            .spacing(spacing.space_xs);

        match &self.camera_status {
            CameraStatus::Starting => {
                column = column.push(
                    widget::text(fl!("camera-starting")).size(self.text_size(ui::TEXT_CAPTION)),
                );
            }
            CameraStatus::Unavailable(reason) => {
                column = column.push(
                    widget::text(fl!("camera-access-denied", reason = reason.as_str()))
                        .size(self.text_size(ui::TEXT_CAPTION)),
                );
            }
            CameraStatus::Streaming => {}
        }

        widget::container(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .into()
    }

    /// Top bar: REC badge on the left; aspect and flash buttons on the right
    fn build_top_bar(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();
        let high_contrast = self.high_contrast();

        let mut row = widget::row()
            .padding(spacing.space_xs)
            .spacing(spacing.space_xs)
            .align_y(Alignment::Center);

        if let Some(indicator) = self.build_recording_indicator() {
            row = row.push(indicator);
        }
        row = row.push(widget::Space::new(Length::Fill, Length::Shrink));

        let aspect = self.config.aspect_ratio;
        let next_aspect = AspectRatio::ALL
            .iter()
            .position(|a| *a == aspect)
            .map(|i| AspectRatio::ALL[(i + 1) % AspectRatio::ALL.len()])
            .unwrap_or_default();
        let aspect_button = widget::button::custom(
            widget::text(aspect.label())
                .size(self.text_size(ui::TEXT_BODY))
                .font(cosmic::font::bold()),
        )
        .padding([spacing.space_xxs, spacing.space_xs])
        .class(cosmic::theme::Button::Text)
        .on_press(Message::SetAspectRatio(next_aspect));

        let flash_mode = self.config.flash_mode;
        let flash_button = widget::button::custom(
            widget::row()
                .push(widget::icon::from_name(flash_mode.icon_name()).size(20))
                .push(widget::text(flash_mode.label()).size(self.text_size(ui::TEXT_CAPTION)))
                .spacing(spacing.space_xxs)
                .align_y(Alignment::Center),
        )
        .padding([spacing.space_xxs, spacing.space_xs])
        .class(cosmic::theme::Button::Text)
        .on_press(Message::CycleFlash);

        let controls = widget::row()
            .push(aspect_button)
            .push(flash_button)
            .spacing(spacing.space_xxs)
            .align_y(Alignment::Center);

        row = row.push(
            widget::container(controls)
                .style(move |theme| style::panel_style(theme, high_contrast)),
        );

        row.into()
    }

    /// Scene and exposure readout shown over the preview in Pro mode
    fn build_pro_hud(&self) -> Option<Element<'_, Message>> {
        if self.mode != CameraMode::Pro {
            return None;
        }

        let spacing = cosmic::theme::spacing();
        let high_contrast = self.high_contrast();
        let size = self.text_size(ui::TEXT_CAPTION);
        let manual = &self.manual;

        let readout = fl!(
            "hud-readout",
            iso = manual.iso,
            aperture = manual.aperture_label(),
            shutter = manual.shutter.to_string(),
            white_balance = manual.white_balance.label()
        );

        let column = widget::column()
            .push(
                widget::text(fl!("hud-scene", scene = self.scene.label()))
                    .size(size)
                    .font(cosmic::font::bold()),
            )
            .push(widget::text(readout).size(size))
            .spacing(spacing.space_xxxs);

        Some(
            widget::container(column)
                .padding([spacing.space_xxs, spacing.space_xs])
                .style(move |theme| style::panel_style(theme, high_contrast))
                .into(),
        )
    }
}

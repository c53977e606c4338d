// SPDX-License-Identifier: GPL-3.0-only

//! Capture button widget implementation

use crate::app::state::{AppModel, CameraMode, CameraStatus, Message};
use crate::app::style::HIGH_CONTRAST_ACCENT;
use crate::constants::ui;
use crate::fl;
use cosmic::Element;
use cosmic::iced::{Background, Border, Color, Length};
use cosmic::widget;

impl AppModel {
    /// Build the capture button widget
    ///
    /// - Auto/Pro: white circle, gray while a capture is in flight
    /// - Video: red circle, shrunk to a darker square-ish button while recording
    /// - High contrast: yellow ring around the button
    pub fn build_capture_button(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();
        let recording = self.recording.is_recording();
        let has_feed = self.camera_status == CameraStatus::Streaming;

        let color = if !has_feed {
            Color::from_rgba(0.5, 0.5, 0.5, 0.3)
        } else if self.mode == CameraMode::Video {
            if recording {
                Color::from_rgb(0.6, 0.05, 0.05)
            } else {
                Color::from_rgb(0.9, 0.1, 0.1)
            }
        } else if self.is_capturing {
            Color::from_rgb(0.7, 0.7, 0.7)
        } else {
            Color::WHITE
        };

        let (inner_size, radius) = if recording {
            (ui::CAPTURE_BUTTON_INNER * 0.55, 6.0)
        } else if self.is_capturing {
            let size = ui::CAPTURE_BUTTON_INNER * 0.85;
            (size, size / 2.0)
        } else {
            (ui::CAPTURE_BUTTON_INNER, ui::CAPTURE_BUTTON_INNER / 2.0)
        };

        let button_inner = widget::container(widget::Space::new(
            Length::Fixed(inner_size),
            Length::Fixed(inner_size),
        ))
        .style(move |_theme| widget::container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: [radius; 4].into(),
                ..Default::default()
            },
            ..Default::default()
        });

        let ring_color = if self.high_contrast() {
            HIGH_CONTRAST_ACCENT
        } else {
            Color::WHITE
        };
        let ring_width = if self.high_contrast() { 4.0 } else { 3.0 };
        let ring = widget::container(button_inner)
            .width(Length::Fixed(ui::CAPTURE_BUTTON_OUTER))
            .height(Length::Fixed(ui::CAPTURE_BUTTON_OUTER))
            .center_x(ui::CAPTURE_BUTTON_OUTER)
            .center_y(ui::CAPTURE_BUTTON_OUTER)
            .style(move |_theme| widget::container::Style {
                border: Border {
                    radius: [ui::CAPTURE_BUTTON_OUTER / 2.0; 4].into(),
                    width: ring_width,
                    color: ring_color,
                },
                ..Default::default()
            });

        let mut button = widget::button::custom(ring)
            .padding(0)
            .class(cosmic::theme::Button::Text);
        if has_feed {
            button = button.on_press(Message::Capture);
        }

        let mut column = widget::column()
            .push(button)
            .align_x(cosmic::iced::Alignment::Center)
            .spacing(spacing.space_xxs);

        if self.mode == CameraMode::Video && !recording {
            column = column.push(
                widget::text(fl!("tap-to-record")).size(self.text_size(ui::TEXT_CAPTION)),
            );
        }

        widget::container(column)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding([spacing.space_xs, 0])
            .into()
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Recording indicator with blinking dot and timer

use crate::app::state::{AppModel, Message, format_duration};
use crate::app::style;
use crate::constants::ui;
use crate::fl;
use cosmic::Element;
use cosmic::iced::{Alignment, Color, Length};
use cosmic::widget;

const DOT_SIZE: f32 = 12.0;

impl AppModel {
    /// Build the REC badge shown over the preview
    ///
    /// Returns None when not recording.
    pub fn build_recording_indicator(&self) -> Option<Element<'_, Message>> {
        if !self.recording.is_recording() {
            return None;
        }

        let spacing = cosmic::theme::spacing();
        let high_contrast = self.high_contrast();

        let dot_color = if self.rec_blink_on {
            Color::from_rgb(1.0, 0.0, 0.0)
        } else {
            Color::from_rgba(1.0, 0.0, 0.0, 0.25)
        };
        let red_dot = widget::container(widget::Space::new(
            Length::Fixed(DOT_SIZE),
            Length::Fixed(DOT_SIZE),
        ))
        .style(move |_theme| style::dot_style(dot_color, DOT_SIZE));

        let duration_text = format_duration(self.recording.elapsed_duration());

        let row = widget::row()
            .push(red_dot)
            .push(
                widget::text(fl!("rec"))
                    .size(self.text_size(ui::TEXT_BODY))
                    .font(cosmic::font::bold()),
            )
            .push(widget::text(duration_text).size(self.text_size(ui::TEXT_BODY)))
            .align_y(Alignment::Center)
            .spacing(spacing.space_xxs);

        Some(
            widget::container(row)
                .padding([spacing.space_xxxs, spacing.space_xs])
                .style(move |_theme| {
                    style::badge_style(Color::from_rgba(0.0, 0.0, 0.0, 0.6), high_contrast)
                })
                .into(),
        )
    }
}

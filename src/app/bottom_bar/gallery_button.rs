// SPDX-License-Identifier: GPL-3.0-only

//! Gallery button widget implementation

use crate::app::state::{AppModel, Message};
use crate::app::style;
use crate::constants::ui;
use cosmic::Element;
use cosmic::iced::{Color, Length};
use cosmic::widget::{self, icon};

const BUTTON_SIZE: f32 = 44.0;

impl AppModel {
    /// Build the gallery button widget
    ///
    /// Shows the latest capture's thumbnail with a count badge, or a
    /// pictures icon when nothing has been captured yet.
    pub fn build_gallery_button(&self) -> Element<'_, Message> {
        let latest = self.media.items().last();

        let content: Element<'_, Message> = if let Some(media) = latest {
            widget::image::Image::new(media.thumbnail.clone())
                .content_fit(cosmic::iced::ContentFit::Cover)
                .width(Length::Fixed(BUTTON_SIZE))
                .height(Length::Fixed(BUTTON_SIZE))
                .into()
        } else {
            widget::container(icon::from_name("folder-pictures-symbolic").size(24))
                .width(Length::Fixed(BUTTON_SIZE))
                .height(Length::Fixed(BUTTON_SIZE))
                .center(BUTTON_SIZE)
                .into()
        };

        let button = widget::button::custom(content)
            .padding(0)
            .width(Length::Fixed(BUTTON_SIZE))
            .height(Length::Fixed(BUTTON_SIZE))
            .class(cosmic::theme::Button::Image)
            .on_press(Message::OpenEditor);

        if self.media.is_empty() {
            return button.into();
        }

        let high_contrast = self.high_contrast();
        let badge = widget::container(
            widget::text(self.media.len().to_string())
                .size(self.text_size(ui::TEXT_CAPTION))
                .font(cosmic::font::bold()),
        )
        .padding([0, 6])
        .style(move |_theme| style::badge_style(Color::from_rgb(0.9, 0.1, 0.1), high_contrast));

        cosmic::iced::widget::stack![
            button,
            widget::container(badge)
                .width(Length::Fixed(BUTTON_SIZE + 8.0))
                .align_x(cosmic::iced::alignment::Horizontal::Right)
        ]
        .into()
    }
}

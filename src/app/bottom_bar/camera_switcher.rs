// SPDX-License-Identifier: GPL-3.0-only

//! Camera switcher button widget implementation

use crate::app::state::{AppModel, Message};
use crate::app::style;
use crate::constants::ui;
use cosmic::Element;
use cosmic::iced::Length;
use cosmic::widget;

impl AppModel {
    /// Build the camera switcher button widget
    ///
    /// Shows a switch button if multiple cameras are available, otherwise an
    /// invisible placeholder to keep the layout stable. Dimmed while
    /// recording since the stream cannot change mid-file.
    pub fn build_camera_switcher(&self) -> Element<'_, Message> {
        if self.available_cameras.len() < 2 {
            return widget::Space::new(Length::Fixed(ui::ICON_BUTTON_WIDTH), Length::Shrink)
                .into();
        }

        let icon = widget::icon::from_name("camera-switch-symbolic").size(28);
        let mut button = widget::button::custom(
            widget::container(icon)
                .width(Length::Fixed(ui::ICON_BUTTON_WIDTH))
                .height(Length::Fixed(ui::ICON_BUTTON_WIDTH))
                .center(Length::Fixed(ui::ICON_BUTTON_WIDTH)),
        )
        .padding(0)
        .class(cosmic::theme::Button::Text);

        if self.recording.is_recording() {
            return widget::container(button)
                .style(style::disabled_style)
                .into();
        }
        button = button.on_press(Message::SwitchCamera);

        let high_contrast = self.high_contrast();
        widget::container(button)
            .style(move |theme| style::panel_style(theme, high_contrast))
            .into()
    }
}

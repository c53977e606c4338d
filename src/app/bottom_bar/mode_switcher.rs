// SPDX-License-Identifier: GPL-3.0-only

//! Mode switcher widget implementation (Auto/Pro/Video)

use crate::app::state::{AppModel, CameraMode, Message};
use crate::constants::ui;
use cosmic::Element;
use cosmic::widget;

impl AppModel {
    /// Build the mode switcher widget
    ///
    /// The active mode is highlighted with a suggested button style.
    pub fn build_mode_switcher(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();
        let size = self.text_size(ui::TEXT_BODY);

        let mut row = widget::row().spacing(spacing.space_xs);
        for mode in CameraMode::ALL {
            let label = widget::text(mode.label())
                .size(size)
                .font(cosmic::font::bold());
            let button = widget::button::custom(label)
                .padding([spacing.space_xxs, spacing.space_s])
                .on_press(Message::SetMode(mode))
                .class(if self.mode == mode {
                    cosmic::theme::Button::Suggested
                } else {
                    cosmic::theme::Button::Text
                });
            row = row.push(button);
        }

        row.into()
    }
}

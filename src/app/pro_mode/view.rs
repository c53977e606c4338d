// SPDX-License-Identifier: GPL-3.0-only

//! Pro mode panel view

use crate::app::state::{AppModel, Message};
use crate::app::style;
use crate::constants::ui;
use crate::fl;
use crate::media::CompositionGuide;
use crate::scene::{
    APERTURE_MAX, APERTURE_MIN, EXPOSURE_MAX, EXPOSURE_MIN, ISO_MAX, ISO_MIN, ISO_STEP, SceneType,
};
use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget;

/// Scenes per row in the scene grid
const SCENE_COLUMNS: usize = 3;

impl AppModel {
    /// Build the Pro mode side panel
    pub fn build_pro_panel(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();
        let high_contrast = self.high_contrast();

        let header = widget::column()
            .push(
                widget::text(fl!("pro-mode-title"))
                    .size(self.text_size(ui::TEXT_TITLE))
                    .font(cosmic::font::bold()),
            )
            .push(
                widget::text(fl!("pro-mode-subtitle"))
                    .size(self.text_size(ui::TEXT_CAPTION))
                    .class(cosmic::theme::Text::Accent),
            )
            .spacing(spacing.space_xxxs);

        let stabilization = widget::row()
            .push(
                widget::text(fl!("image-stabilization"))
                    .size(self.text_size(ui::TEXT_BODY))
                    .width(Length::Fill),
            )
            .push(
                widget::toggler(self.config.stabilization)
                    .on_toggle(Message::ToggleStabilization),
            )
            .align_y(Alignment::Center);

        let column = widget::column()
            .push(header)
            .push(self.section_title(fl!("scene")))
            .push(self.build_scene_grid())
            .push(self.section_title(fl!("composition-guide")))
            .push(self.build_guide_selector())
            .push(self.section_title(fl!("manual-settings")))
            .push(self.build_manual_sliders())
            .push(self.build_manual_dropdowns())
            .push(widget::divider::horizontal::default())
            .push(stabilization)
            .spacing(spacing.space_s)
            .padding(spacing.space_s);

        widget::container(widget::scrollable(column))
            .width(Length::Fixed(ui::PRO_PANEL_WIDTH))
            .height(Length::Fill)
            .style(move |theme| style::panel_style(theme, high_contrast))
            .into()
    }

    fn section_title(&self, title: String) -> Element<'_, Message> {
        widget::text(title)
            .size(self.text_size(ui::TEXT_BODY))
            .font(cosmic::font::bold())
            .into()
    }

    /// Six scene buttons, three per row
    fn build_scene_grid(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();
        let mut grid = widget::column().spacing(spacing.space_xxs);

        for chunk in SceneType::ALL.chunks(SCENE_COLUMNS) {
            let mut row = widget::row().spacing(spacing.space_xxs);
            for scene in chunk {
                let content = widget::column()
                    .push(widget::icon::from_name(scene.icon_name()).size(20))
                    .push(widget::text(scene.label()).size(self.text_size(ui::TEXT_CAPTION)))
                    .align_x(Alignment::Center)
                    .spacing(spacing.space_xxxs);
                let button = widget::button::custom(
                    widget::container(content).width(Length::Fill).center_x(Length::Fill),
                )
                .width(Length::Fill)
                .padding(spacing.space_xxs)
                .on_press(Message::SelectScene(*scene))
                .class(if self.scene == *scene {
                    cosmic::theme::Button::Suggested
                } else {
                    cosmic::theme::Button::Standard
                });
                row = row.push(button);
            }
            grid = grid.push(row);
        }

        grid.into()
    }

    fn build_guide_selector(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();
        let mut grid = widget::column().spacing(spacing.space_xxs);

        for pair in CompositionGuide::ALL.chunks(2) {
            let mut row = widget::row().spacing(spacing.space_xxs);
            for guide in pair {
                let button = widget::button::custom(
                    widget::text(guide.label()).size(self.text_size(ui::TEXT_CAPTION)),
                )
                .width(Length::Fill)
                .padding([spacing.space_xxs, spacing.space_xs])
                .on_press(Message::SetCompositionGuide(*guide))
                .class(if self.config.composition_guide == *guide {
                    cosmic::theme::Button::Suggested
                } else {
                    cosmic::theme::Button::Standard
                });
                row = row.push(button);
            }
            grid = grid.push(row);
        }

        grid.into()
    }

    /// Label, slider and value display
    fn slider_row<'a>(
        &self,
        label: String,
        value_text: String,
        slider: impl Into<Element<'a, Message>>,
    ) -> Element<'a, Message> {
        let spacing = cosmic::theme::spacing();
        widget::row::with_capacity(3)
            .align_y(Alignment::Center)
            .spacing(spacing.space_xxs)
            .push(
                widget::text(label)
                    .size(self.text_size(ui::TEXT_CAPTION))
                    .width(Length::Fixed(ui::SLIDER_LABEL_WIDTH)),
            )
            .push(slider.into())
            .push(
                widget::text(value_text)
                    .size(self.text_size(ui::TEXT_CAPTION))
                    .width(Length::Fixed(ui::SLIDER_VALUE_WIDTH))
                    .align_x(Alignment::End),
            )
            .into()
    }

    fn build_manual_sliders(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();
        let manual = &self.manual;

        let iso = widget::slider(ISO_MIN as f32..=ISO_MAX as f32, manual.iso as f32, |v| {
            Message::SetIso(v.round() as u32)
        })
        .step(ISO_STEP as f32);

        let aperture = widget::slider(APERTURE_MIN..=APERTURE_MAX, manual.aperture, |v| {
            Message::SetAperture(v)
        })
        .step(0.1);

        let exposure = widget::slider(EXPOSURE_MIN..=EXPOSURE_MAX, manual.exposure, |v| {
            Message::SetExposure(v)
        })
        .step(0.1)
        .breakpoints(&[0.0]);

        widget::column()
            .push(self.slider_row(fl!("iso"), manual.iso.to_string(), iso))
            .push(self.slider_row(fl!("aperture"), manual.aperture_label(), aperture))
            .push(self.slider_row(fl!("exposure"), manual.exposure_label(), exposure))
            .spacing(spacing.space_xs)
            .into()
    }

    fn build_manual_dropdowns(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();
        let size = self.text_size(ui::TEXT_CAPTION);

        let shutter = widget::dropdown(
            &self.shutter_dropdown_options,
            self.shutter_index(),
            Message::SelectShutter,
        );
        let white_balance = widget::dropdown(
            &self.white_balance_dropdown_options,
            self.white_balance_index(),
            Message::SelectWhiteBalance,
        );

        widget::column()
            .push(
                widget::row()
                    .push(
                        widget::text(fl!("shutter-speed"))
                            .size(size)
                            .width(Length::Fixed(ui::SLIDER_LABEL_WIDTH)),
                    )
                    .push(shutter)
                    .align_y(Alignment::Center),
            )
            .push(
                widget::row()
                    .push(
                        widget::text(fl!("white-balance"))
                            .size(size)
                            .width(Length::Fixed(ui::SLIDER_LABEL_WIDTH)),
                    )
                    .push(white_balance)
                    .align_y(Alignment::Center),
            )
            .spacing(spacing.space_xs)
            .into()
    }
}

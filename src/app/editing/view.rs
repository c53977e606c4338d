// SPDX-License-Identifier: GPL-3.0-only

//! Editing suite view

use crate::app::state::{AppModel, Message};
use crate::app::style;
use crate::constants::ui;
use crate::fl;
use crate::media::{AspectRatio, ColorGrade, Filter};
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Color, Length};
use cosmic::widget;

impl AppModel {
    /// Build the full-screen editor
    pub fn build_editor(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let body: Element<'_, Message> = if self.media.is_empty() {
            self.build_editor_empty()
        } else {
            let preview = widget::container(self.build_editor_preview())
                .width(Length::Fill)
                .height(Length::Fill);

            let main = widget::row()
                .push(preview)
                .push(self.build_editor_tools())
                .spacing(spacing.space_s)
                .height(Length::Fill);

            widget::column()
                .push(main)
                .push(self.build_thumbnail_strip())
                .spacing(spacing.space_s)
                .into()
        };

        let content = widget::column()
            .push(self.build_editor_header())
            .push(body)
            .spacing(spacing.space_s)
            .padding(spacing.space_s)
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

    fn build_editor_header(&self) -> Element<'_, Message> {
        let close = widget::button::icon(widget::icon::from_name("window-close-symbolic"))
            .on_press(Message::CloseEditor);

        widget::row()
            .push(
                widget::text(fl!("editing-suite"))
                    .size(self.text_size(ui::TEXT_TITLE))
                    .font(cosmic::font::bold())
                    .width(Length::Fill),
            )
            .push(close)
            .align_y(Alignment::Center)
            .into()
    }

    fn build_editor_empty(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();
        let column = widget::column()
            .push(widget::icon::from_name("folder-pictures-symbolic").size(64))
            .push(widget::text(fl!("no-media")).size(self.text_size(ui::TEXT_TITLE)))
            .push(
                widget::button::suggested(fl!("start-shooting")).on_press(Message::CloseEditor),
            )
            .align_x(Alignment::Center)
            .spacing(spacing.space_s);

        widget::container(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .into()
    }

    /// Rendered look of the selected item, falling back to its thumbnail
    fn build_editor_preview(&self) -> Element<'_, Message> {
        let handle = self
            .editor
            .preview
            .clone()
            .or_else(|| self.media.selected().map(|m| m.thumbnail.clone()));

        match handle {
            Some(handle) => widget::image::Image::new(handle)
                .content_fit(cosmic::iced::ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => widget::Space::new(Length::Fill, Length::Fill).into(),
        }
    }

    fn build_thumbnail_strip(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();
        let selected = self.media.selected_index();
        let high_contrast = self.high_contrast();

        let mut row = widget::row().spacing(spacing.space_xxs);
        for (index, media) in self.media.items().iter().enumerate() {
            let thumb = widget::image::Image::new(media.thumbnail.clone())
                .content_fit(cosmic::iced::ContentFit::Cover)
                .width(Length::Fixed(ui::THUMBNAIL_SIZE))
                .height(Length::Fixed(ui::THUMBNAIL_SIZE));
            let button = widget::button::custom(thumb)
                .padding(if index == selected { 3 } else { 0 })
                .class(if index == selected {
                    cosmic::theme::Button::Suggested
                } else {
                    cosmic::theme::Button::Image
                })
                .on_press(Message::SelectMedia(index));
            row = row.push(button);
        }

        widget::container(widget::scrollable::horizontal(row))
            .padding(spacing.space_xxs)
            .width(Length::Fill)
            .style(move |theme| style::panel_style(theme, high_contrast))
            .into()
    }

    /// Side column with look, framing and export controls
    fn build_editor_tools(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();
        let high_contrast = self.high_contrast();

        let filters = self.option_grid(
            Filter::ALL
                .iter()
                .map(|f| (f.label(), *f == self.editor.filter, Message::SetFilter(*f))),
        );
        let grades = self.option_grid(
            ColorGrade::ALL
                .iter()
                .map(|g| (g.label(), *g == self.editor.grade, Message::SetGrade(*g))),
        );
        let aspects = self.option_grid(AspectRatio::ALL.iter().map(|a| {
            (
                a.label().to_string(),
                *a == self.config.aspect_ratio,
                Message::SetAspectRatio(*a),
            )
        }));

        let mut export = widget::button::suggested(if self.editor.exporting {
            fl!("exporting")
        } else {
            fl!("export")
        })
        .width(Length::Fill);
        if !self.editor.exporting {
            export = export.on_press(Message::Export);
        }

        let mut column = widget::column()
            .push(self.editor_section(fl!("filters")))
            .push(filters)
            .push(self.editor_section(fl!("color-grading")))
            .push(grades)
            .push(self.editor_section(fl!("aspect-ratio")))
            .push(aspects)
            .push(widget::divider::horizontal::default())
            .push(export)
            .spacing(spacing.space_xs)
            .padding(spacing.space_s);

        if let Some(path) = &self.editor.last_export {
            let saved = widget::row()
                .push(
                    widget::text(fl!("exported-to", path = path.display().to_string()))
                        .size(self.text_size(ui::TEXT_CAPTION))
                        .width(Length::Fill),
                )
                .push(
                    widget::button::icon(widget::icon::from_name("folder-open-symbolic"))
                        .on_press(Message::OpenExportFolder),
                )
                .align_y(Alignment::Center);
            column = column.push(saved);
        }

        widget::container(widget::scrollable(column))
            .width(Length::Fixed(ui::PRO_PANEL_WIDTH))
            .height(Length::Fill)
            .style(move |theme| style::panel_style(theme, high_contrast))
            .into()
    }

    fn editor_section(&self, title: String) -> Element<'_, Message> {
        widget::text(title)
            .size(self.text_size(ui::TEXT_BODY))
            .font(cosmic::font::bold())
            .into()
    }

    /// Two-column grid of toggle buttons; the active option is highlighted
    fn option_grid(
        &self,
        options: impl Iterator<Item = (String, bool, Message)>,
    ) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();
        let size = self.text_size(ui::TEXT_CAPTION);
        let options: Vec<_> = options.collect();

        let mut grid = widget::column().spacing(spacing.space_xxs);
        for pair in options.chunks(2) {
            let mut row = widget::row().spacing(spacing.space_xxs);
            for (label, active, message) in pair {
                row = row.push(
                    widget::button::custom(widget::text(label.clone()).size(size))
                        .width(Length::Fill)
                        .padding([spacing.space_xxs, spacing.space_xs])
                        .class(if *active {
                            cosmic::theme::Button::Suggested
                        } else {
                            cosmic::theme::Button::Standard
                        })
                        .on_press(message.clone()),
                );
            }
            grid = grid.push(row);
        }
        grid.into()
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Shared container styles for overlay panels
//!
//! High contrast swaps the translucent panels for opaque black ones with a
//! yellow accent border.

use crate::constants::ui::{HIGH_CONTRAST_BACKGROUND_ALPHA, OVERLAY_BACKGROUND_ALPHA};
use cosmic::iced::{Background, Border, Color};
use cosmic::widget;

/// Accent used for borders and highlights in high contrast mode
pub const HIGH_CONTRAST_ACCENT: Color = Color::from_rgb(1.0, 0.85, 0.0);

/// Border width of high contrast panels
const HIGH_CONTRAST_BORDER: f32 = 3.0;

/// Text color for disabled controls on dark overlays
pub const DISABLED_TEXT: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.3);

/// Style for panels floating over the camera preview
pub fn panel_style(theme: &cosmic::Theme, high_contrast: bool) -> widget::container::Style {
    let cosmic = theme.cosmic();

    if high_contrast {
        return widget::container::Style {
            background: Some(Background::Color(Color::from_rgba(
                0.0,
                0.0,
                0.0,
                HIGH_CONTRAST_BACKGROUND_ALPHA,
            ))),
            text_color: Some(Color::WHITE),
            border: Border {
                radius: cosmic.corner_radii.radius_s.into(),
                width: HIGH_CONTRAST_BORDER,
                color: HIGH_CONTRAST_ACCENT,
            },
            ..Default::default()
        };
    }

    let bg = cosmic.bg_color();
    widget::container::Style {
        background: Some(Background::Color(Color::from_rgba(
            bg.red,
            bg.green,
            bg.blue,
            OVERLAY_BACKGROUND_ALPHA,
        ))),
        border: Border {
            radius: cosmic.corner_radii.radius_s.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Small rounded badge, used for the REC label and the gallery count
pub fn badge_style(background: Color, high_contrast: bool) -> widget::container::Style {
    widget::container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: [10.0; 4].into(),
            width: if high_contrast { 2.0 } else { 0.0 },
            color: HIGH_CONTRAST_ACCENT,
        },
        ..Default::default()
    }
}

/// Solid circle of `diameter`, used for dots and markers
pub fn dot_style(color: Color, diameter: f32) -> widget::container::Style {
    widget::container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: [diameter / 2.0; 4].into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed text for controls that are currently inactive
pub fn disabled_style(_theme: &cosmic::Theme) -> widget::container::Style {
    widget::container::Style {
        text_color: Some(DISABLED_TEXT),
        ..Default::default()
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Aspect ratios and center cropping

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output framing shared by the live preview and the editing suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    /// 16:9
    #[default]
    Widescreen,
    /// 2.39:1
    Cinema,
    /// 1:1
    Square,
    /// 4:3
    Classic,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 4] = [
        AspectRatio::Widescreen,
        AspectRatio::Cinema,
        AspectRatio::Square,
        AspectRatio::Classic,
    ];

    /// Width divided by height
    pub fn ratio(&self) -> f32 {
        match self {
            AspectRatio::Widescreen => 16.0 / 9.0,
            AspectRatio::Cinema => 2.39,
            AspectRatio::Square => 1.0,
            AspectRatio::Classic => 4.0 / 3.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Cinema => "2.39:1",
            AspectRatio::Square => "1:1",
            AspectRatio::Classic => "4:3",
        }
    }

    /// Largest centered rectangle with this ratio inside `width` x `height`
    ///
    /// Returns `(x, y, w, h)`. Both dimensions are at least 1 for non-empty
    /// sources.
    pub fn crop_rect(&self, width: u32, height: u32) -> (u32, u32, u32, u32) {
        if width == 0 || height == 0 {
            return (0, 0, width, height);
        }

        let ratio = self.ratio();
        let source_ratio = width as f32 / height as f32;

        let (w, h) = if source_ratio > ratio {
            // Source is wider: trim the sides
            let w = ((height as f32 * ratio).round() as u32).clamp(1, width);
            (w, height)
        } else {
            let h = ((width as f32 / ratio).round() as u32).clamp(1, height);
            (width, h)
        };

        ((width - w) / 2, (height - h) / 2, w, h)
    }

    /// Crop an image to this ratio, returning a new buffer
    pub fn crop(&self, image: &RgbaImage) -> RgbaImage {
        let (x, y, w, h) = self.crop_rect(image.width(), image.height());
        if (x, y, w, h) == (0, 0, image.width(), image.height()) {
            return image.clone();
        }
        image::imageops::crop_imm(image, x, y, w, h).to_image()
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AspectRatio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AspectRatio::ALL
            .into_iter()
            .find(|ratio| ratio.label() == s.trim())
            .ok_or_else(|| {
                format!(
                    "unknown aspect ratio '{}' (expected 16:9, 2.39:1, 1:1 or 4:3)",
                    s
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widescreen_source_is_unchanged_at_16_9() {
        assert_eq!(AspectRatio::Widescreen.crop_rect(1920, 1080), (0, 0, 1920, 1080));
    }

    #[test]
    fn square_crop_is_centered() {
        assert_eq!(AspectRatio::Square.crop_rect(1920, 1080), (420, 0, 1080, 1080));
    }

    #[test]
    fn cinema_crop_trims_top_and_bottom() {
        let (x, y, w, h) = AspectRatio::Cinema.crop_rect(1920, 1080);
        assert_eq!((x, w), (0, 1920));
        assert_eq!(h, 803);
        assert_eq!(y, (1080 - 803) / 2);
    }

    #[test]
    fn classic_crop_on_portrait_source() {
        let (x, y, w, h) = AspectRatio::Classic.crop_rect(720, 1280);
        assert_eq!((x, w), (0, 720));
        assert_eq!(h, 540);
        assert_eq!(y, 370);
    }

    #[test]
    fn crop_produces_requested_dimensions() {
        let image = RgbaImage::new(400, 300);
        let cropped = AspectRatio::Square.crop(&image);
        assert_eq!(cropped.dimensions(), (300, 300));
    }

    #[test]
    fn parses_labels() {
        assert_eq!("2.39:1".parse::<AspectRatio>(), Ok(AspectRatio::Cinema));
        assert!("3:2".parse::<AspectRatio>().is_err());
    }
}

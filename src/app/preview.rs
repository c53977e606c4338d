// SPDX-License-Identifier: GPL-3.0-only

//! Turns raw camera frames into preview images
//!
//! Frames are cropped to the selected aspect ratio, optionally mirrored, and
//! the composition guide is drawn on top. Rendering runs on a blocking task.

use crate::backends::camera::CameraFrame;
use crate::media::{AspectRatio, CompositionGuide};
use cosmic::widget::image::Handle;
use image::RgbaImage;

/// How a frame should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewOptions {
    pub aspect: AspectRatio,
    pub guide: CompositionGuide,
    pub mirror: bool,
}

/// Crop, mirror and annotate a frame
pub fn render_image(frame: &CameraFrame, options: PreviewOptions) -> Option<RgbaImage> {
    let source = frame.to_image()?;
    let mut image = options.aspect.crop(&source);
    if options.mirror {
        image::imageops::flip_horizontal_in_place(&mut image);
    }
    options.guide.draw(&mut image);
    Some(image)
}

/// Render a frame into an image handle for the preview widget
pub fn render(frame: &CameraFrame, options: PreviewOptions) -> Option<Handle> {
    let image = render_image(frame, options)?;
    let (width, height) = image.dimensions();
    Some(Handle::from_rgba(width, height, image.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Instant;

    fn gradient_frame(width: u32, height: u32) -> CameraFrame {
        let data: Vec<u8> = (0..height)
            .flat_map(|_| (0..width).flat_map(|x| [x as u8, 0, 0, 255]))
            .collect();
        CameraFrame {
            width,
            height,
            data: Arc::from(data),
            captured_at: Instant::now(),
        }
    }

    #[test]
    fn preview_is_cropped_to_aspect() {
        let frame = gradient_frame(200, 100);
        let options = PreviewOptions {
            aspect: AspectRatio::Square,
            guide: CompositionGuide::None,
            mirror: false,
        };
        let image = render_image(&frame, options).unwrap();
        assert_eq!(image.dimensions(), (100, 100));
        // Center crop starts at x = 50
        assert_eq!(image.get_pixel(0, 0)[0], 50);
    }

    #[test]
    fn mirror_flips_horizontally() {
        let frame = gradient_frame(64, 36);
        let options = PreviewOptions {
            aspect: AspectRatio::Widescreen,
            guide: CompositionGuide::None,
            mirror: true,
        };
        let image = render_image(&frame, options).unwrap();
        assert_eq!(image.get_pixel(0, 0)[0], 63);
        assert_eq!(image.get_pixel(63, 0)[0], 0);
    }

    #[test]
    fn invalid_frame_renders_nothing() {
        let frame = CameraFrame {
            width: 10,
            height: 10,
            data: Arc::from(vec![0u8; 4]),
            captured_at: Instant::now(),
        };
        let options = PreviewOptions {
            aspect: AspectRatio::Square,
            guide: CompositionGuide::Thirds,
            mirror: false,
        };
        assert!(render_image(&frame, options).is_none());
    }
}

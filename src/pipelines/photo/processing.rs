// SPDX-License-Identifier: GPL-3.0-only

//! Pixel processing for captures and exports

use crate::backends::camera::CameraFrame;
use crate::errors::PhotoError;
use crate::media::analysis;
use crate::media::looks;
use crate::media::tone::ToneTables;
use crate::media::{AspectRatio, ColorGrade, Filter};
use crate::scene::ManualSettings;
use image::RgbaImage;

/// How a frame becomes a captured photo
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureSettings {
    pub aspect: AspectRatio,
    /// Exposure compensation in EV
    pub exposure: f32,
    pub white_balance_gains: [f32; 3],
}

impl CaptureSettings {
    /// Neutral processing, only framing applied
    pub fn neutral(aspect: AspectRatio) -> Self {
        Self {
            aspect,
            exposure: 0.0,
            white_balance_gains: [1.0; 3],
        }
    }

    /// Processing for Pro mode: white balance and exposure from the manual settings
    pub fn pro(aspect: AspectRatio, manual: &ManualSettings) -> Self {
        Self {
            aspect,
            exposure: manual.exposure,
            white_balance_gains: manual.white_balance.gains(),
        }
    }
}

/// Crop to the aspect ratio, then apply white balance and exposure
pub fn process_frame(
    frame: &CameraFrame,
    settings: &CaptureSettings,
) -> Result<RgbaImage, PhotoError> {
    let full = frame.to_image().ok_or_else(|| {
        PhotoError::InvalidFrame(format!(
            "{}x{} frame with {} bytes",
            frame.width,
            frame.height,
            frame.data.len()
        ))
    })?;

    let mut image = settings.aspect.crop(&full);
    ToneTables::new(settings.exposure, settings.white_balance_gains).apply(&mut image);
    Ok(image)
}

/// Apply a filter and grade to a copy of `source`, cropped to `aspect`
pub fn render_look(
    source: &RgbaImage,
    filter: Filter,
    grade: ColorGrade,
    aspect: AspectRatio,
) -> RgbaImage {
    let mut image = aspect.crop(source);
    looks::apply_look(&mut image, filter, grade);
    image
}

/// The frame with the highest Laplacian variance, preferring later frames on ties
pub fn select_sharpest<'a, I>(frames: I) -> Option<&'a CameraFrame>
where
    I: IntoIterator<Item = &'a CameraFrame>,
{
    frames
        .into_iter()
        .filter(|f| f.is_valid())
        .map(|f| (analysis::sharpness(&f.data, f.width, f.height), f))
        .fold(None, |best: Option<(f32, &CameraFrame)>, (score, frame)| match best {
            Some((best_score, _)) if best_score > score => best,
            _ => Some((score, frame)),
        })
        .map(|(_, frame)| frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Instant;

    fn frame(width: u32, height: u32, f: impl Fn(u32, u32) -> u8) -> CameraFrame {
        let data: Vec<u8> = (0..width * height)
            .flat_map(|i| {
                let v = f(i % width, i / width);
                [v, v, v, 255]
            })
            .collect();
        CameraFrame {
            width,
            height,
            data: Arc::from(data),
            captured_at: Instant::now(),
        }
    }

    #[test]
    fn capture_is_cropped_to_aspect() {
        let frame = frame(160, 90, |_, _| 100);
        let image = process_frame(&frame, &CaptureSettings::neutral(AspectRatio::Square)).unwrap();
        assert_eq!(image.dimensions(), (90, 90));
        assert_eq!(image.get_pixel(0, 0)[0], 100);
    }

    #[test]
    fn positive_exposure_brightens_capture() {
        let frame = frame(16, 9, |_, _| 100);
        let settings = CaptureSettings {
            exposure: 1.0,
            ..CaptureSettings::neutral(AspectRatio::Widescreen)
        };
        let image = process_frame(&frame, &settings).unwrap();
        assert!(image.get_pixel(0, 0)[0] > 100);
    }

    #[test]
    fn truncated_frame_is_rejected() {
        let mut bad = frame(4, 4, |_, _| 0);
        bad.data = Arc::from(vec![0u8; 10]);
        assert!(matches!(
            process_frame(&bad, &CaptureSettings::neutral(AspectRatio::Square)),
            Err(PhotoError::InvalidFrame(_))
        ));
    }

    #[test]
    fn sharpest_frame_is_selected() {
        let blurry = frame(32, 32, |_, _| 128);
        let sharp = frame(32, 32, |x, y| if (x + y) % 2 == 0 { 0 } else { 255 });
        let frames = [blurry.clone(), sharp.clone(), blurry];
        let chosen = select_sharpest(frames.iter()).unwrap();
        assert_eq!(chosen.data, sharp.data);
        assert!(select_sharpest(std::iter::empty()).is_none());
    }

    #[test]
    fn render_look_crops_and_filters() {
        let source = RgbaImage::from_pixel(40, 30, image::Rgba([200, 50, 50, 255]));
        let out = render_look(&source, Filter::Noir, ColorGrade::None, AspectRatio::Square);
        assert_eq!(out.dimensions(), (30, 30));
        let px = out.get_pixel(0, 0);
        assert_eq!(px[0], px[1]);
    }
}

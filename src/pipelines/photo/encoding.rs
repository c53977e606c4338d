// SPDX-License-Identifier: GPL-3.0-only

//! JPEG encoding and saving
//!
//! Encoding and disk writes run on blocking tasks.

use crate::errors::PhotoError;
use image::{RgbImage, RgbaImage};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// JPEG encoder with a fixed quality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoEncoder {
    quality: u8,
}

impl PhotoEncoder {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Encode on a blocking task, handing the image back with its JPEG bytes
    pub async fn encode(&self, image: RgbaImage) -> Result<(RgbaImage, Vec<u8>), PhotoError> {
        let quality = self.quality;
        tokio::task::spawn_blocking(move || {
            let data = encode_jpeg(&image, quality)?;
            debug!(size = data.len(), quality, "Encoding complete");
            Ok::<_, PhotoError>((image, data))
        })
        .await
        .map_err(|e| PhotoError::EncodingFailed(format!("Encoding task error: {}", e)))?
    }
}

impl Default for PhotoEncoder {
    fn default() -> Self {
        Self::new(crate::constants::capture::DEFAULT_JPEG_QUALITY)
    }
}

/// Encode RGBA as JPEG, dropping alpha
pub fn encode_jpeg(image: &RgbaImage, quality: u8) -> Result<Vec<u8>, PhotoError> {
    let rgb: RgbImage = image::DynamicImage::ImageRgba8(image.clone()).to_rgb8();

    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, quality);
    encoder.encode(
        rgb.as_raw(),
        rgb.width(),
        rgb.height(),
        image::ExtendedColorType::Rgb8,
    )?;

    Ok(buffer)
}

/// Write encoded bytes to `dir/filename`, creating the directory as needed
///
/// An existing file is never overwritten; a numeric suffix is added instead.
pub async fn save(data: Arc<[u8]>, dir: PathBuf, filename: String) -> Result<PathBuf, PhotoError> {
    tokio::task::spawn_blocking(move || {
        std::fs::create_dir_all(&dir)?;
        let (path, mut file) = crate::storage::create_unique(&dir, &filename)?;
        file.write_all(&data)?;
        info!(path = %path.display(), bytes = data.len(), "Photo saved");
        Ok::<_, PhotoError>(path)
    })
    .await
    .map_err(|e| PhotoError::SaveFailed(format!("Save task error: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jpeg_output_has_soi_marker() {
        let image = RgbaImage::from_pixel(8, 8, image::Rgba([10, 200, 30, 255]));
        let data = encode_jpeg(&image, 90).unwrap();
        assert_eq!(&data[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn quality_is_clamped() {
        assert_eq!(PhotoEncoder::new(0).quality(), 1);
        assert_eq!(PhotoEncoder::new(250).quality(), 100);
        assert_eq!(PhotoEncoder::default().quality(), 92);
    }

    #[tokio::test]
    async fn save_creates_directory() {
        let dir = std::env::temp_dir()
            .join(format!("procam-save-{}", std::process::id()))
            .join("nested");
        let path = save(Arc::from(vec![1u8, 2, 3]), dir.clone(), "x.jpg".into())
            .await
            .unwrap();
        assert_eq!(path, dir.join("x.jpg"));
        assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2, 3]);
        let _ = std::fs::remove_dir_all(dir.parent().unwrap());
    }

    #[tokio::test]
    async fn save_never_overwrites() {
        let dir = std::env::temp_dir().join(format!("procam-save-twice-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let first = save(Arc::from(vec![1u8]), dir.clone(), "x.jpg".into())
            .await
            .unwrap();
        let second = save(Arc::from(vec![2u8]), dir.clone(), "x.jpg".into())
            .await
            .unwrap();
        assert_ne!(first, second);
        assert_eq!(std::fs::read(&first).unwrap(), vec![1]);
        assert_eq!(std::fs::read(&second).unwrap(), vec![2]);
        let _ = std::fs::remove_dir_all(&dir);
    }
}

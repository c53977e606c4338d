// SPDX-License-Identifier: GPL-3.0-only

//! Photo capture and export
//!
//! ```text
//! Frame → process (crop, tone) → encode (JPEG) → media list [→ disk]
//! Media → look (filter, grade, crop) → encode → export folder
//! ```

pub mod encoding;
pub mod processing;

pub use encoding::PhotoEncoder;
pub use processing::{CaptureSettings, render_look, select_sharpest};

use crate::backends::camera::CameraFrame;
use crate::errors::PhotoError;
use crate::media::{AspectRatio, CapturedMedia, ColorGrade, Filter};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Turn a camera frame into a captured media entry
pub async fn capture(
    frame: Arc<CameraFrame>,
    settings: CaptureSettings,
    encoder: PhotoEncoder,
) -> Result<CapturedMedia, PhotoError> {
    let image = tokio::task::spawn_blocking(move || processing::process_frame(&frame, &settings))
        .await
        .map_err(|e| PhotoError::EncodingFailed(format!("Processing task error: {}", e)))??;

    let (image, jpeg) = encoder.encode(image).await?;
    info!(width = image.width(), height = image.height(), bytes = jpeg.len(), "Photo captured");
    Ok(CapturedMedia::new(image, jpeg))
}

/// Write an already encoded capture into `dir` with a timestamped name
pub async fn save_capture(media: &CapturedMedia, dir: &Path) -> Result<PathBuf, PhotoError> {
    let filename = crate::storage::photo_filename(media.captured_at);
    encoding::save(media.encoded_jpeg.clone(), dir.to_path_buf(), filename).await
}

/// Render a capture with a look and framing, then write it to `dir`
pub async fn export(
    media: CapturedMedia,
    filter: Filter,
    grade: ColorGrade,
    aspect: AspectRatio,
    encoder: PhotoEncoder,
    dir: PathBuf,
) -> Result<PathBuf, PhotoError> {
    let source = media.image.clone();
    let rendered = tokio::task::spawn_blocking(move || render_look(&source, filter, grade, aspect))
        .await
        .map_err(|e| PhotoError::EncodingFailed(format!("Render task error: {}", e)))?;

    let (_, jpeg) = encoder.encode(rendered).await?;
    let filename = crate::storage::export_filename(chrono::Local::now());
    let path = encoding::save(Arc::from(jpeg), dir, filename).await?;
    info!(
        path = %path.display(),
        filter = %filter,
        grade = %grade,
        aspect = %aspect,
        "Exported photo"
    );
    Ok(path)
}

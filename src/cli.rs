// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for camera operations
//!
//! - Listing available cameras, as text or JSON
//! - Taking a photo headlessly with a scene preset and a look applied

use futures::channel::mpsc;
use procam::backends::camera::{self, CameraDevice, CameraFrame, StreamRequest};
use procam::constants::capture::{
    DEFAULT_JPEG_QUALITY, HEADLESS_FRAME_TIMEOUT_SECS, HEADLESS_WARMUP_FRAMES,
};
use procam::errors::{AppError, AppResult, CameraError};
use procam::media::{AspectRatio, ColorGrade, Filter, looks};
use procam::pipelines::photo::encoding::encode_jpeg;
use procam::pipelines::photo::processing::process_frame;
use procam::pipelines::photo::CaptureSettings;
use procam::scene::SceneType;
use procam::storage;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Options for `procam photo`
pub struct PhotoOptions {
    pub camera: Option<usize>,
    pub scene: SceneType,
    pub filter: Filter,
    pub grade: ColorGrade,
    pub aspect: AspectRatio,
    pub output: Option<PathBuf>,
}

/// List all available cameras
pub fn list_cameras(json: bool) -> AppResult<()> {
    init_gstreamer()?;

    let cameras = camera::enumerate_cameras()?;

    if json {
        let list: Vec<serde_json::Value> = cameras
            .iter()
            .enumerate()
            .map(|(index, camera)| camera_json(index, camera))
            .collect();
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    if cameras.is_empty() {
        println!("No cameras found.");
        return Ok(());
    }

    println!("Available cameras:");
    println!();
    for (index, camera) in cameras.iter().enumerate() {
        println!("  [{}] {} ({})", index, camera.name, camera.api);

        let resolutions = top_resolutions(camera, 3);
        if !resolutions.is_empty() {
            println!("      Formats: {}", resolutions.join(", "));
        }
        println!();
    }

    Ok(())
}

fn camera_json(index: usize, camera: &CameraDevice) -> serde_json::Value {
    let formats: Vec<serde_json::Value> = camera
        .formats
        .iter()
        .map(|f| {
            serde_json::json!({
                "width": f.width,
                "height": f.height,
                "fps": f.fps(),
                "pixel_format": f.pixel_format,
            })
        })
        .collect();

    serde_json::json!({
        "index": index,
        "name": camera.name,
        "path": camera.path,
        "api": camera.api.to_string(),
        "location": format!("{:?}", camera.location).to_lowercase(),
        "formats": formats,
    })
}

/// Distinct resolutions with their best frame rate, largest first
fn top_resolutions(camera: &CameraDevice, count: usize) -> Vec<String> {
    let mut resolutions: Vec<(u32, u32, u32)> = Vec::new();
    for format in &camera.formats {
        let fps = format.fps().round() as u32;
        if let Some(existing) = resolutions
            .iter_mut()
            .find(|(w, h, _)| *w == format.width && *h == format.height)
        {
            existing.2 = existing.2.max(fps);
        } else {
            resolutions.push((format.width, format.height, fps));
        }
    }

    resolutions.sort_by(|a, b| (b.0 * b.1).cmp(&(a.0 * a.1)));
    resolutions
        .iter()
        .take(count)
        .map(|(w, h, fps)| format!("{}x{}@{}fps", w, h, fps))
        .collect()
}

/// Take a photo using the specified camera
pub fn take_photo(options: PhotoOptions) -> AppResult<()> {
    init_gstreamer()?;

    let cameras = camera::enumerate_cameras()?;
    if cameras.is_empty() {
        return Err(CameraError::NoCameraFound.into());
    }

    let preferred_path = match options.camera {
        Some(index) => Some(
            cameras
                .get(index)
                .ok_or(CameraError::InvalidIndex {
                    index,
                    available: cameras.len(),
                })?
                .path
                .clone(),
        ),
        None => None,
    };

    let (sender, mut receiver) = mpsc::channel(4);
    let (device, pipeline) = camera::open_stream(
        &cameras,
        &StreamRequest::default(),
        preferred_path.as_deref(),
        sender,
    )?;
    println!("Using camera: {}", device.name);

    let frame = wait_for_frame(&mut receiver, &pipeline)?;
    drop(pipeline);

    let manual = options.scene.preset();
    let settings = CaptureSettings::pro(options.aspect, &manual);
    let mut image = process_frame(&frame, &settings)?;
    looks::apply_look(&mut image, options.filter, options.grade);
    let jpeg = encode_jpeg(&image, DEFAULT_JPEG_QUALITY)?;

    let output_path = match options.output {
        // An explicit file name is written as given
        Some(path) if !path.is_dir() => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, &jpeg)?;
            path
        }
        dir => {
            let dir = dir.unwrap_or_else(storage::photo_directory);
            std::fs::create_dir_all(&dir)?;
            let filename = storage::photo_filename(chrono::Local::now());
            let (path, mut file) = storage::create_unique(&dir, &filename)?;
            file.write_all(&jpeg)?;
            path
        }
    };

    println!(
        "Photo saved: {} ({}x{}, scene {}, filter {}, grade {}, {})",
        output_path.display(),
        image.width(),
        image.height(),
        options.scene,
        options.filter,
        options.grade.label(),
        options.aspect
    );
    Ok(())
}

fn init_gstreamer() -> AppResult<()> {
    gstreamer::init().map_err(|e| AppError::Camera(CameraError::AccessDenied(e.to_string())))
}

/// Skip warm-up frames so auto exposure settles, then return the next one
fn wait_for_frame(
    receiver: &mut mpsc::Receiver<CameraFrame>,
    pipeline: &camera::CameraPipeline,
) -> Result<CameraFrame, CameraError> {
    let start = Instant::now();
    let timeout = Duration::from_secs(HEADLESS_FRAME_TIMEOUT_SECS);
    let mut seen = 0usize;
    let mut last: Option<CameraFrame> = None;

    while start.elapsed() < timeout {
        if let Some(err) = pipeline.poll_error() {
            return Err(CameraError::AccessDenied(err));
        }
        match receiver.try_next() {
            Ok(Some(frame)) => {
                seen += 1;
                if seen > HEADLESS_WARMUP_FRAMES {
                    return Ok(frame);
                }
                last = Some(frame);
            }
            Ok(None) => break,
            Err(_) => std::thread::sleep(Duration::from_millis(16)),
        }
    }

    // A slow camera still yields its most recent frame
    last.ok_or(CameraError::NoFrame)
}

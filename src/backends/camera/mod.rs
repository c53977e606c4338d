// SPDX-License-Identifier: GPL-3.0-only

//! Camera backend
//!
//! ```text
//! enumeration ──▶ selection ──▶ pipeline ──▶ FrameSender ──▶ app
//! (DeviceMonitor)  (StreamRequest)  (appsink, RGBA)
//! ```
//!
//! Cameras are discovered through the GStreamer device monitor, which covers
//! both PipeWire and plain V4L2 systems. A [`StreamRequest`] picks the device
//! and format, and a [`CameraPipeline`] streams RGBA frames until dropped.

pub mod enumeration;
pub mod pipeline;
pub mod selection;
pub mod types;

pub use enumeration::enumerate_cameras;
pub use pipeline::CameraPipeline;
pub use selection::{Facing, StreamRequest, select_device, select_format};
pub use types::*;

use tracing::info;

/// Resolve a request against the system's cameras and start streaming
///
/// Returns the opened device along with the running pipeline.
pub fn open_stream(
    cameras: &[CameraDevice],
    request: &StreamRequest,
    preferred_path: Option<&str>,
    frame_sender: FrameSender,
) -> BackendResult<(CameraDevice, CameraPipeline)> {
    let device = select_device(cameras, request.facing, preferred_path)
        .ok_or_else(|| BackendError::DeviceNotFound("no cameras available".to_string()))?
        .clone();
    let format = select_format(&device.formats, request);

    info!(
        device = %device.name,
        format = ?format.map(|f| f.to_string()),
        audio = request.audio,
        "Opening camera stream"
    );

    let pipeline = CameraPipeline::new(&device, format, frame_sender)?;
    Ok((device, pipeline))
}

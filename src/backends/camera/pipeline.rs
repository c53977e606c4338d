// SPDX-License-Identifier: GPL-3.0-only

//! GStreamer preview pipeline delivering RGBA frames

use super::types::*;
use crate::constants::{pipeline, timing};
use gstreamer as gst;
use gstreamer::prelude::*;
use gstreamer_app::AppSink;
use gstreamer_video::VideoInfo;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// JPEG decoders tried in order
const JPEG_DECODERS: &[&str] = &["jpegdec", "avdec_mjpeg"];

/// A running camera stream
///
/// The device is released when the pipeline is dropped.
pub struct CameraPipeline {
    pipeline: gst::Pipeline,
    appsink: AppSink,
}

impl std::fmt::Debug for CameraPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraPipeline")
            .field("name", &self.pipeline.name())
            .finish()
    }
}

/// Source element description for a device
pub fn source_description(device: &CameraDevice) -> String {
    match device.api {
        CameraApi::PipeWire => match device.path.strip_prefix("pipewire-serial-") {
            Some(serial) => format!("pipewiresrc do-timestamp=true target-object={}", serial),
            None => "pipewiresrc do-timestamp=true".to_string(),
        },
        CameraApi::V4l2 => format!("v4l2src device={}", device.path),
    }
}

/// Caps and decoder segment for a format
///
/// Without a known format the stream goes through `decodebin`.
pub fn decode_description(format: Option<&CameraFormat>) -> String {
    let Some(format) = format else {
        return "decodebin".to_string();
    };

    let rate = format
        .framerate
        .map(|r| format!(",framerate={}/{}", r.num, r.denom))
        .unwrap_or_default();

    if format.is_jpeg() {
        let decoder = JPEG_DECODERS
            .iter()
            .find(|name| gst::ElementFactory::find(name).is_some())
            .copied()
            .unwrap_or("decodebin");
        format!(
            "image/jpeg,width={},height={}{} ! {}",
            format.width, format.height, rate, decoder
        )
    } else {
        format!(
            "video/x-raw,format={},width={},height={}{}",
            format.pixel_format, format.width, format.height, rate
        )
    }
}

impl CameraPipeline {
    pub fn new(
        device: &CameraDevice,
        format: Option<&CameraFormat>,
        frame_sender: FrameSender,
    ) -> BackendResult<Self> {
        gst::init().map_err(|e| BackendError::InitializationFailed(e.to_string()))?;

        let description = format!(
            "{} ! {} ! videoconvert ! video/x-raw,format={} ! appsink name=sink",
            source_description(device),
            decode_description(format),
            pipeline::OUTPUT_FORMAT,
        );
        info!(device = %device.name, pipeline = %description, "Creating camera pipeline");

        let pipeline = gst::parse::launch(&description)
            .map_err(|e| BackendError::InitializationFailed(e.to_string()))?
            .dynamic_cast::<gst::Pipeline>()
            .map_err(|_| BackendError::InitializationFailed("Not a pipeline".to_string()))?;

        let appsink = pipeline
            .by_name("sink")
            .ok_or_else(|| BackendError::InitializationFailed("Failed to get appsink".to_string()))?
            .dynamic_cast::<AppSink>()
            .map_err(|_| BackendError::InitializationFailed("Failed to cast appsink".to_string()))?;

        appsink.set_property("emit-signals", true);
        appsink.set_property("sync", false);
        appsink.set_property("max-buffers", pipeline::MAX_BUFFERS);
        appsink.set_property("drop", true);
        appsink.set_property("enable-last-sample", false);

        let frame_counter = Arc::new(AtomicU64::new(0));
        appsink.set_callbacks(
            gstreamer_app::AppSinkCallbacks::builder()
                .new_sample(move |appsink| {
                    let frame_num = frame_counter.fetch_add(1, Ordering::Relaxed);
                    let sample = appsink.pull_sample().map_err(|_| gst::FlowError::Eos)?;

                    let frame = match frame_from_sample(&sample) {
                        Ok(frame) => frame,
                        Err(e) => {
                            if frame_num % timing::FRAME_LOG_INTERVAL == 0 {
                                warn!(frame = frame_num, error = %e, "Dropping unreadable frame");
                            }
                            return Ok(gst::FlowSuccess::Ok);
                        }
                    };

                    if frame_num % timing::FRAME_LOG_INTERVAL == 0 {
                        debug!(
                            frame = frame_num,
                            width = frame.width,
                            height = frame.height,
                            "Frame received"
                        );
                    }

                    let mut sender = frame_sender.clone();
                    if let Err(e) = sender.try_send(frame) {
                        if e.is_disconnected() {
                            return Err(gst::FlowError::Eos);
                        }
                        // Channel full: the UI is behind, drop this frame
                    }

                    Ok(gst::FlowSuccess::Ok)
                })
                .build(),
        );

        pipeline.set_state(gst::State::Playing).map_err(|e| {
            BackendError::InitializationFailed(format!("Failed to start pipeline: {}", e))
        })?;

        // Surface device errors (busy, permission denied) synchronously
        let (result, state, _) =
            pipeline.state(gst::ClockTime::from_seconds(timing::START_TIMEOUT_SECS));
        if let Some(bus) = pipeline.bus()
            && let Some(msg) = bus.pop_filtered(&[gst::MessageType::Error])
            && let gst::MessageView::Error(err) = msg.view()
        {
            error!(error = %err.error(), debug = ?err.debug(), "Camera pipeline error");
            let _ = pipeline.set_state(gst::State::Null);
            return Err(BackendError::InitializationFailed(err.error().to_string()));
        }
        if result.is_err() {
            let _ = pipeline.set_state(gst::State::Null);
            return Err(BackendError::InitializationFailed(
                "Pipeline failed to reach PLAYING".to_string(),
            ));
        }
        debug!(state = ?state, "Camera pipeline started");

        Ok(Self { pipeline, appsink })
    }

    /// Poll the bus for a fatal error raised after startup
    pub fn poll_error(&self) -> Option<String> {
        let bus = self.pipeline.bus()?;
        let msg = bus.pop_filtered(&[gst::MessageType::Error, gst::MessageType::Eos])?;
        match msg.view() {
            gst::MessageView::Error(err) => Some(err.error().to_string()),
            gst::MessageView::Eos(_) => Some("Stream ended".to_string()),
            _ => None,
        }
    }
}

/// Copy a sample into a tightly packed RGBA frame, honoring row stride
fn frame_from_sample(sample: &gst::Sample) -> Result<CameraFrame, String> {
    let captured_at = Instant::now();
    let buffer = sample.buffer().ok_or("No buffer in sample")?;
    let caps = sample.caps().ok_or("No caps in sample")?;
    let info = VideoInfo::from_caps(caps).map_err(|e| e.to_string())?;
    let map = buffer.map_readable().map_err(|e| e.to_string())?;

    let width = info.width();
    let height = info.height();
    let row = width as usize * 4;
    let stride = info.stride()[0] as usize;
    let offset = info.offset()[0];
    let data = map.as_slice();

    if stride == row && offset == 0 && data.len() >= row * height as usize {
        return Ok(CameraFrame {
            width,
            height,
            data: Arc::from(&data[..row * height as usize]),
            captured_at,
        });
    }

    let mut packed = Vec::with_capacity(row * height as usize);
    for y in 0..height as usize {
        let start = offset + y * stride;
        let line = data
            .get(start..start + row)
            .ok_or_else(|| format!("Row {} outside buffer", y))?;
        packed.extend_from_slice(line);
    }

    Ok(CameraFrame {
        width,
        height,
        data: Arc::from(packed),
        captured_at,
    })
}

impl Drop for CameraPipeline {
    fn drop(&mut self) {
        info!("Stopping camera pipeline");
        self.appsink
            .set_callbacks(gstreamer_app::AppSinkCallbacks::builder().build());
        let _ = self.pipeline.set_state(gst::State::Null);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(api: CameraApi, path: &str) -> CameraDevice {
        CameraDevice {
            name: "Test".into(),
            path: path.into(),
            api,
            location: CameraLocation::Unknown,
            formats: Vec::new(),
        }
    }

    #[test]
    fn pipewire_source_targets_serial() {
        assert_eq!(
            source_description(&device(CameraApi::PipeWire, "pipewire-serial-42")),
            "pipewiresrc do-timestamp=true target-object=42"
        );
        assert_eq!(
            source_description(&device(CameraApi::PipeWire, "")),
            "pipewiresrc do-timestamp=true"
        );
    }

    #[test]
    fn v4l2_source_uses_device_path() {
        assert_eq!(
            source_description(&device(CameraApi::V4l2, "/dev/video0")),
            "v4l2src device=/dev/video0"
        );
    }

    #[test]
    fn raw_formats_need_no_decoder() {
        let format = CameraFormat {
            width: 640,
            height: 480,
            framerate: Some(Framerate::from_int(30)),
            pixel_format: "YUY2".into(),
        };
        assert_eq!(
            decode_description(Some(&format)),
            "video/x-raw,format=YUY2,width=640,height=480,framerate=30/1"
        );
        assert_eq!(decode_description(None), "decodebin");
    }
}

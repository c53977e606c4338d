// SPDX-License-Identifier: GPL-3.0-only

//! MP4 recorder fed from preview frames
//!
//! ```text
//! appsrc (RGBA) ! videoconvert ! queue ! <h264 encoder> ! h264parse ! mp4mux ! filesink
//! mic ! queue ! audioconvert ! audioresample ! <aac encoder> ──────────┘
//! ```

use super::encoders::{create_audio_source, select_audio_encoder, select_video_encoder};
use crate::backends::camera::CameraFrame;
use crate::constants::timing;
use crate::errors::RecordingError;
use gstreamer as gst;
use gstreamer::prelude::*;
use gstreamer_app::AppSrc;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Handle for pushing frames into a running recording
///
/// Cheap to clone; frames whose size differs from the first one are dropped.
#[derive(Debug, Clone)]
pub struct RecordingInput {
    appsrc: AppSrc,
    width: u32,
    height: u32,
}

impl RecordingInput {
    /// Queue a frame for encoding, returning false once the recording has ended
    pub fn push(&self, frame: &CameraFrame) -> bool {
        if frame.width != self.width || frame.height != self.height || !frame.is_valid() {
            debug!(
                width = frame.width,
                height = frame.height,
                "Skipping frame with mismatched size"
            );
            return true;
        }

        let buffer = gst::Buffer::from_slice(frame.data.clone());
        self.appsrc.push_buffer(buffer).is_ok()
    }
}

/// A running recording
#[derive(Debug)]
pub struct VideoRecorder {
    pipeline: gst::Pipeline,
    input: RecordingInput,
    file_path: PathBuf,
}

fn make(name: &str) -> Result<gst::Element, RecordingError> {
    gst::ElementFactory::make(name)
        .build()
        .map_err(|e| RecordingError::StartFailed(format!("Failed to create {}: {}", name, e)))
}

fn link_failed(what: &str) -> RecordingError {
    RecordingError::StartFailed(format!("Failed to link {}", what))
}

impl VideoRecorder {
    /// Build and start a recording of `width` x `height` RGBA frames
    pub fn start(
        width: u32,
        height: u32,
        bitrate_kbps: u32,
        with_audio: bool,
        output_path: PathBuf,
    ) -> Result<Self, RecordingError> {
        gst::init().map_err(|e| RecordingError::StartFailed(e.to_string()))?;
        info!(
            width,
            height,
            bitrate_kbps,
            audio = with_audio,
            output = %output_path.display(),
            "Creating video recorder"
        );

        if let Some(dir) = output_path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| RecordingError::StartFailed(e.to_string()))?;
        }

        let pipeline = gst::Pipeline::new();

        let caps = gst::Caps::builder("video/x-raw")
            .field("format", "RGBA")
            .field("width", width as i32)
            .field("height", height as i32)
            .field("framerate", gst::Fraction::new(0, 1))
            .build();
        let appsrc = AppSrc::builder()
            .caps(&caps)
            .format(gst::Format::Time)
            .is_live(true)
            .do_timestamp(true)
            .build();

        let convert = make("videoconvert")?;
        let queue = make("queue")?;
        let encoder = select_video_encoder(bitrate_kbps)?;
        let parser = make("h264parse")?;
        let muxer = make("mp4mux")?;
        let location = output_path.to_str().ok_or_else(|| {
            RecordingError::StartFailed("Output path is not valid UTF-8".to_string())
        })?;
        let filesink = gst::ElementFactory::make("filesink")
            .property("location", location)
            .build()
            .map_err(|e| RecordingError::StartFailed(format!("Failed to create filesink: {}", e)))?;

        pipeline
            .add_many([
                appsrc.upcast_ref::<gst::Element>(),
                &convert,
                &queue,
                &encoder,
                &parser,
                &muxer,
                &filesink,
            ])
            .map_err(|e| RecordingError::StartFailed(e.to_string()))?;
        gst::Element::link_many([
            appsrc.upcast_ref::<gst::Element>(),
            &convert,
            &queue,
            &encoder,
            &parser,
        ])
        .map_err(|_| link_failed("video chain"))?;
        parser.link(&muxer).map_err(|_| link_failed("parser to muxer"))?;
        muxer.link(&filesink).map_err(|_| link_failed("muxer to filesink"))?;

        if with_audio {
            Self::add_audio_branch(&pipeline, &muxer);
        }

        pipeline
            .set_state(gst::State::Playing)
            .map_err(|e| RecordingError::StartFailed(e.to_string()))?;

        // Check for immediate errors
        if let Some(bus) = pipeline.bus()
            && let Some(msg) = bus.timed_pop_filtered(
                gst::ClockTime::from_mseconds(300),
                &[gst::MessageType::Error],
            )
            && let gst::MessageView::Error(err) = msg.view()
        {
            error!(
                error = %err.error(),
                debug = ?err.debug(),
                source = ?err.src().map(|s| s.name()),
                "GStreamer error during recording start"
            );
            let _ = pipeline.set_state(gst::State::Null);
            return Err(RecordingError::StartFailed(err.error().to_string()));
        }

        info!(path = %output_path.display(), "Recording started");
        Ok(Self {
            pipeline,
            input: RecordingInput {
                appsrc,
                width,
                height,
            },
            file_path: output_path,
        })
    }

    /// Microphone branch; failures leave the recording silent
    fn add_audio_branch(pipeline: &gst::Pipeline, muxer: &gst::Element) {
        let Some(source) = create_audio_source() else {
            warn!("No audio source available, recording without audio");
            return;
        };
        let Some(encoder) = select_audio_encoder() else {
            return;
        };
        let (Ok(queue), Ok(convert), Ok(resample)) =
            (make("queue"), make("audioconvert"), make("audioresample"))
        else {
            warn!("Audio conversion elements missing, recording without audio");
            return;
        };

        let elements = [&source, &queue, &convert, &resample, &encoder];
        if pipeline.add_many(elements).is_err() {
            warn!("Failed to add audio branch");
            return;
        }
        if gst::Element::link_many(elements).is_err() || encoder.link(muxer).is_err() {
            warn!("Failed to link audio branch, recording without audio");
            let _ = pipeline.remove_many(elements);
        }
    }

    pub fn input(&self) -> RecordingInput {
        self.input.clone()
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Finish the file: send EOS, wait for it to drain, then shut down
    ///
    /// Blocks for up to the stop timeout; call from a blocking task.
    pub fn stop(self) -> Result<PathBuf, RecordingError> {
        info!("Stopping video recording");

        if !self.pipeline.send_event(gst::event::Eos::new()) {
            warn!("Failed to send EOS event to pipeline");
        }

        let bus = self
            .pipeline
            .bus()
            .ok_or_else(|| RecordingError::StopFailed("No bus available".to_string()))?;
        let result = match bus.timed_pop_filtered(
            gst::ClockTime::from_seconds(timing::STOP_TIMEOUT_SECS),
            &[gst::MessageType::Eos, gst::MessageType::Error],
        ) {
            Some(msg) => match msg.view() {
                gst::MessageView::Eos(_) => {
                    debug!("EOS reached");
                    Ok(())
                }
                gst::MessageView::Error(err) => {
                    Err(RecordingError::StopFailed(err.error().to_string()))
                }
                _ => Ok(()),
            },
            None => {
                warn!("Timed out waiting for EOS, file may be truncated");
                Ok(())
            }
        };

        self.pipeline
            .set_state(gst::State::Null)
            .map_err(|e| RecordingError::StopFailed(e.to_string()))?;

        result?;
        info!(path = %self.file_path.display(), "Recording saved");
        Ok(self.file_path.clone())
    }
}

impl Drop for VideoRecorder {
    fn drop(&mut self) {
        let _ = self.pipeline.set_state(gst::State::Null);
    }
}

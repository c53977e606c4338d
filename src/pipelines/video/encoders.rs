// SPDX-License-Identifier: GPL-3.0-only

//! Encoder selection for MP4 recordings
//!
//! Hardware H.264 encoders are tried first, then software ones. Audio uses
//! the first available AAC encoder; recordings fall back to silent video
//! when none is installed.

use crate::errors::RecordingError;
use gstreamer as gst;
use gstreamer::prelude::*;
use tracing::{debug, info, warn};

/// H.264 encoders in priority order (element, hardware)
pub const VIDEO_ENCODERS: &[(&str, bool)] = &[
    ("vah264enc", true),
    ("vaapih264enc", true),
    ("nvh264enc", true),
    ("v4l2h264enc", true),
    ("x264enc", false),
    ("openh264enc", false),
];

/// AAC encoders in priority order
pub const AUDIO_ENCODERS: &[&str] = &["fdkaacenc", "avenc_aac", "voaacenc", "faac"];

const AUDIO_BITRATE_BPS: i32 = 128_000;

/// Create and configure the best available H.264 encoder
pub fn select_video_encoder(bitrate_kbps: u32) -> Result<gst::Element, RecordingError> {
    for (name, hardware) in VIDEO_ENCODERS {
        let Ok(encoder) = gst::ElementFactory::make(name).build() else {
            continue;
        };
        configure_video_encoder(&encoder, name, bitrate_kbps);
        info!(encoder = %name, hardware, bitrate_kbps, "Selected video encoder");
        return Ok(encoder);
    }

    Err(RecordingError::EncoderNotAvailable(
        "no H.264 encoder found; install x264 or openh264 GStreamer plugins".to_string(),
    ))
}

fn configure_video_encoder(encoder: &gst::Element, name: &str, bitrate_kbps: u32) {
    match name {
        "x264enc" => {
            encoder.set_property_from_str("speed-preset", "veryfast");
            encoder.set_property_from_str("tune", "zerolatency");
            encoder.set_property_from_str("bitrate", &bitrate_kbps.to_string());
        }
        "openh264enc" => {
            encoder.set_property_from_str("rate-control", "bitrate");
            encoder.set_property_from_str("bitrate", &(bitrate_kbps * 1000).to_string());
            encoder.set_property_from_str("usage-type", "camera");
        }
        "vah264enc" | "vaapih264enc" | "nvh264enc" => {
            if encoder.has_property("bitrate") {
                encoder.set_property_from_str("bitrate", &bitrate_kbps.to_string());
            }
        }
        _ => debug!(encoder = %name, "Using encoder defaults"),
    }
}

/// Create the first available AAC encoder, or `None` for silent recordings
pub fn select_audio_encoder() -> Option<gst::Element> {
    for name in AUDIO_ENCODERS {
        let Ok(encoder) = gst::ElementFactory::make(name).build() else {
            continue;
        };
        if encoder.has_property("bitrate") {
            // faac takes kbps, the rest bits per second
            let bitrate = if *name == "faac" {
                AUDIO_BITRATE_BPS / 1000
            } else {
                AUDIO_BITRATE_BPS
            };
            // Property width differs between plugins, so set it from a string
            encoder.set_property_from_str("bitrate", &bitrate.to_string());
        }
        info!(encoder = %name, "Selected audio encoder");
        return Some(encoder);
    }

    warn!("No AAC encoder available, recording without audio");
    None
}

/// Microphone source: PipeWire when present, otherwise the platform default
pub fn create_audio_source() -> Option<gst::Element> {
    for name in ["pipewiresrc", "autoaudiosrc"] {
        let mut builder = gst::ElementFactory::make(name);
        if name == "pipewiresrc" {
            builder = builder.property("do-timestamp", true);
        }
        match builder.build() {
            Ok(source) => return Some(source),
            Err(e) => debug!(element = name, error = %e, "Audio source unavailable"),
        }
    }
    None
}

// SPDX-License-Identifier: GPL-3.0-only

//! Video recording
//!
//! The recorder is fed the same RGBA frames as the preview, so the camera
//! stays open once and the preview keeps running while recording.

pub mod encoders;
pub mod recorder;

pub use recorder::{RecordingInput, VideoRecorder};

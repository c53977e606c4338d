// SPDX-License-Identifier: GPL-3.0-only

//! Hardware access layer
//!
//! - [`camera`]: Camera discovery, stream selection and GStreamer preview pipelines

pub mod camera;

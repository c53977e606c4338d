// SPDX-License-Identifier: GPL-3.0-only

//! Processing pipelines for photo and video capture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────────┐     ┌──────────────┐
//! │ Camera Frame │ ──▶ │  Photo Pipeline   │ ──▶ │ Media list / │
//! │   (RGBA)     │     │  - Crop           │     │  JPEG file   │
//! │              │     │  - WB / exposure  │     │              │
//! │              │     │  - Encoding       │     │              │
//! └──────────────┘     └───────────────────┘     └──────────────┘
//!
//! ┌──────────────┐     ┌───────────────────┐     ┌──────────────┐
//! │ Camera Frame │ ──▶ │  Video Recorder   │ ──▶ │   MP4 File   │
//! │   (RGBA)     │     │  - appsrc         │     │              │
//! │              │     │  - H.264 + AAC    │     │              │
//! └──────────────┘     └───────────────────┘     └──────────────┘
//! ```
//!
//! CPU-bound work runs on blocking tasks so the preview never stalls.

pub mod photo;
pub mod video;

// SPDX-License-Identifier: GPL-3.0-only

//! ProCam - a professional camera application for the COSMIC desktop
//!
//! The crate is organized into several modules:
//!
//! - [`app`]: Application state, message handling and UI
//! - [`backends`]: Camera discovery and GStreamer preview streams
//! - [`media`]: Looks (filters, color grades), framing and composition guides
//! - [`pipelines`]: Photo processing/encoding and video recording
//! - [`scene`]: Scene presets and pro-mode manual settings
//! - [`voice`]: Spoken command parsing and the external recognizer bridge
//! - [`flash`]: Flash modes and hardware flash LEDs
//! - [`haptics`]: Vibration feedback through the LED-class vibrator interface
//! - [`config`]: Persistent user preferences
//! - [`storage`]: Output directories and file naming

pub mod app;
pub mod backends;
pub mod config;
pub mod constants;
pub mod errors;
pub mod flash;
pub mod haptics;
pub mod i18n;
pub mod media;
pub mod pipelines;
pub mod scene;
pub mod storage;
pub mod voice;

pub use app::{AppModel, CameraMode, Message};
pub use config::Config;
pub use constants::BitratePreset;

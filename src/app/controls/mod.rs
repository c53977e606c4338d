// SPDX-License-Identifier: GPL-3.0-only

//! Capture controls module
//!
//! This module handles UI components for photo/video capture:
//! - Capture button (photo/video)
//! - Recording indicator and timer

pub mod capture_button;
pub mod recording_ui;

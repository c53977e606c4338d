// SPDX-License-Identifier: GPL-3.0-only

//! Capture operations handlers
//!
//! Handles mode switching, the capture button, flash and photo completion.

use crate::app::state::{AppModel, CameraMode, CaptureAction, Message};
use crate::backends::camera::CameraFrame;
use crate::constants::timing;
use crate::media::{CapturedMedia, analysis};
use crate::pipelines::photo::{self, CaptureSettings, PhotoEncoder};
use cosmic::Task;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

impl AppModel {
    pub(crate) fn handle_set_mode(&mut self, mode: CameraMode) -> Task<cosmic::Action<Message>> {
        if self.mode == mode {
            return Task::none();
        }
        info!(from = ?self.mode, to = ?mode, "Switching camera mode");

        let stop = if self.mode == CameraMode::Video && self.recording.is_recording() {
            self.stop_recording()
        } else {
            Task::none()
        };
        self.mode = mode;
        stop
    }

    /// Capture button and voice "capture" entry point
    pub(crate) fn handle_capture(&mut self) -> Task<cosmic::Action<Message>> {
        match self.mode.capture_action() {
            CaptureAction::ToggleRecording => self.handle_toggle_recording(),
            CaptureAction::Capture => self.start_photo_capture(),
        }
    }

    pub(crate) fn handle_cycle_flash(&mut self) -> Task<cosmic::Action<Message>> {
        self.config.flash_mode = self.config.flash_mode.next();
        info!(mode = ?self.config.flash_mode, "Flash mode changed");
        self.save_config("flash_mode");
        Task::none()
    }

    /// Decide on flash, then capture either now or after the flash overlay
    fn start_photo_capture(&mut self) -> Task<cosmic::Action<Message>> {
        if self.is_capturing || self.flash_active {
            debug!("Capture already in progress");
            return Task::none();
        }
        let Some(frame) = self.recent_frames.latest() else {
            warn!("No frame available for capture");
            return Task::none();
        };

        let luminance = analysis::mean_luminance(&frame.data, frame.width, frame.height);
        let fire = self.config.flash_mode.should_fire(luminance);
        debug!(?luminance, flash_mode = ?self.config.flash_mode, fire, "Flash decision");

        self.is_capturing = true;
        if fire {
            self.flash_active = true;
            crate::flash::set_leds(&self.flash_devices, true);
            return Self::delay_task(timing::FLASH_DURATION, Message::FlashComplete);
        }
        self.capture_photo()
    }

    pub(crate) fn handle_flash_complete(&mut self) -> Task<cosmic::Action<Message>> {
        self.flash_active = false;
        let task = self.capture_photo();
        crate::flash::set_leds(&self.flash_devices, false);
        task
    }

    /// Pick the frame to keep
    ///
    /// With stabilization on this is the sharpest buffered frame, otherwise
    /// the latest one.
    fn frame_for_capture(&self) -> Option<Arc<CameraFrame>> {
        if self.config.stabilization {
            let sharpest = photo::select_sharpest(self.recent_frames.iter().map(|f| f.as_ref()));
            if let Some(frame) = sharpest {
                return Some(Arc::new(frame.clone()));
            }
        }
        self.recent_frames.latest().cloned()
    }

    fn capture_photo(&mut self) -> Task<cosmic::Action<Message>> {
        let Some(frame) = self.frame_for_capture() else {
            warn!("Frame buffer emptied before capture");
            self.is_capturing = false;
            return Task::none();
        };

        let settings = if self.mode == CameraMode::Pro {
            CaptureSettings::pro(self.config.aspect_ratio, &self.manual)
        } else {
            CaptureSettings::neutral(self.config.aspect_ratio)
        };
        let encoder = PhotoEncoder::new(self.config.effective_jpeg_quality());
        info!(
            mode = ?self.mode,
            aspect = %self.config.aspect_ratio,
            stabilization = self.config.stabilization,
            "Capturing photo"
        );

        Task::perform(photo::capture(frame, settings, encoder), |result| {
            cosmic::Action::App(Message::PhotoCaptured(result.map_err(|e| e.to_string())))
        })
    }

    pub(crate) fn handle_photo_captured(
        &mut self,
        result: Result<CapturedMedia, String>,
    ) -> Task<cosmic::Action<Message>> {
        self.is_capturing = false;

        let media = match result {
            Ok(media) => media,
            Err(err) => {
                error!(error = %err, "Photo capture failed");
                return Task::none();
            }
        };

        let index = self.media.push(media.clone());
        info!(id = %media.id, index, total = self.media.len(), "Photo added to media list");

        let mut tasks = vec![Task::perform(
            crate::haptics::pulse(self.vibrator.clone(), crate::haptics::CAPTURE_PULSE),
            |_| cosmic::Action::App(Message::Noop),
        )];

        if self.config.save_captures {
            let dir = crate::storage::photo_directory();
            tasks.push(Task::perform(
                async move {
                    photo::save_capture(&media, &dir)
                        .await
                        .map_err(|e| e.to_string())
                },
                |result| cosmic::Action::App(Message::PhotoSaved(result)),
            ));
        }

        if self.editor.open {
            tasks.push(self.refresh_editor_preview());
        }

        Task::batch(tasks)
    }

    pub(crate) fn handle_photo_saved(
        &mut self,
        result: Result<PathBuf, String>,
    ) -> Task<cosmic::Action<Message>> {
        match result {
            Ok(path) => info!(path = %path.display(), "Photo saved"),
            Err(err) => error!(error = %err, "Failed to save photo"),
        }
        Task::none()
    }
}

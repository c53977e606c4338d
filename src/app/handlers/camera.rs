// SPDX-License-Identifier: GPL-3.0-only

//! Camera selection and frame handlers

use crate::app::preview::{self, PreviewOptions};
use crate::app::state::{AppModel, CameraStatus, Message};
use crate::backends::camera::{CameraDevice, CameraFrame};
use cosmic::Task;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

impl AppModel {
    /// Presentation options for the live preview
    pub(crate) fn preview_options(&self) -> PreviewOptions {
        PreviewOptions {
            aspect: self.config.aspect_ratio,
            guide: self.config.composition_guide,
            mirror: self.config.mirror_preview,
        }
    }

    /// Drop the current stream and open a new one on the next subscription pass
    pub(crate) fn restart_camera(&mut self) {
        self.camera_generation = self.camera_generation.wrapping_add(1);
        self.camera_status = CameraStatus::Starting;
        self.active_camera = None;
        self.preview = None;
        self.preview_pending = false;
        self.recent_frames.clear();
        info!(generation = self.camera_generation, "Restarting camera stream");
    }

    pub(crate) fn handle_cameras_initialized(
        &mut self,
        cameras: Vec<CameraDevice>,
    ) -> Task<cosmic::Action<Message>> {
        info!(count = cameras.len(), "Cameras initialized");
        for camera in &cameras {
            debug!(
                name = %camera.name,
                path = %camera.path,
                location = ?camera.location,
                formats = camera.formats.len(),
                "Camera detected"
            );
        }

        self.camera_dropdown_options = cameras.iter().map(|c| c.name.clone()).collect();
        self.available_cameras = cameras;
        self.cameras_initialized = true;
        Task::none()
    }

    pub(crate) fn handle_camera_opened(
        &mut self,
        device: CameraDevice,
    ) -> Task<cosmic::Action<Message>> {
        info!(name = %device.name, path = %device.path, "Camera stream opened");
        self.active_camera = Some(device);
        Task::none()
    }

    pub(crate) fn handle_camera_unavailable(
        &mut self,
        reason: String,
    ) -> Task<cosmic::Action<Message>> {
        warn!(reason = %reason, "No camera feed");
        self.camera_status = CameraStatus::Unavailable(reason);
        self.active_camera = None;
        self.preview = None;
        self.recent_frames.clear();

        if self.recording.is_recording() {
            return self.stop_recording();
        }
        Task::none()
    }

    pub(crate) fn handle_camera_frame(
        &mut self,
        frame: Arc<CameraFrame>,
    ) -> Task<cosmic::Action<Message>> {
        self.frame_count += 1;
        if self.camera_status != CameraStatus::Streaming {
            info!(
                width = frame.width,
                height = frame.height,
                "First frame received"
            );
            self.camera_status = CameraStatus::Streaming;
        }
        self.recent_frames.push(Arc::clone(&frame));

        if let Some(input) = self.recording.input()
            && !input.push(&frame)
        {
            debug!("Recorder no longer accepting frames");
        }

        // Skip rendering while the previous frame is still being processed
        if self.preview_pending {
            return Task::none();
        }
        self.preview_pending = true;

        let options = self.preview_options();
        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || preview::render(&frame, options))
                    .await
                    .unwrap_or_else(|e| {
                        error!(error = %e, "Preview render task failed");
                        None
                    })
            },
            |handle| cosmic::Action::App(Message::PreviewRendered(handle)),
        )
    }

    pub(crate) fn handle_preview_rendered(
        &mut self,
        handle: Option<cosmic::widget::image::Handle>,
    ) -> Task<cosmic::Action<Message>> {
        self.preview_pending = false;
        if self.camera_status == CameraStatus::Streaming
            && let Some(handle) = handle
        {
            self.preview = Some(handle);
        }
        Task::none()
    }

    pub(crate) fn handle_switch_camera(&mut self) -> Task<cosmic::Action<Message>> {
        if self.available_cameras.len() < 2 {
            debug!("No other camera to switch to");
            return Task::none();
        }
        let next = self
            .current_camera_index()
            .map(|index| (index + 1) % self.available_cameras.len())
            .unwrap_or(0);
        self.handle_select_camera(next)
    }

    pub(crate) fn handle_select_camera(&mut self, index: usize) -> Task<cosmic::Action<Message>> {
        if self.recording.is_recording() {
            warn!("Cannot switch cameras while recording");
            return Task::none();
        }
        let Some(camera) = self.available_cameras.get(index) else {
            warn!(index, "Camera index out of range");
            return Task::none();
        };
        if self.current_camera_index() == Some(index) {
            return Task::none();
        }

        info!(name = %camera.name, path = %camera.path, "Selecting camera");
        let path = camera.path.clone();
        self.selected_camera_path = Some(path.clone());
        self.config.last_camera_path = Some(path);
        self.save_config("last_camera_path");
        self.restart_camera();
        Task::none()
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Video recording handlers
//!
//! The recorder is fed from preview frames, so the camera stream keeps
//! running while recording.

use crate::app::state::{AppModel, CameraMode, Message, RecordingState};
use crate::constants::timing;
use crate::errors::RecordingError;
use crate::pipelines::video::VideoRecorder;
use cosmic::Task;
use std::path::PathBuf;
use tracing::{error, info};

impl AppModel {
    pub(crate) fn handle_toggle_recording(&mut self) -> Task<cosmic::Action<Message>> {
        if self.recording.is_recording() {
            return self.stop_recording();
        }

        if self.mode != CameraMode::Video {
            info!("Switching to Video mode to record");
            self.mode = CameraMode::Video;
        }
        match self.start_recording() {
            Ok(task) => task,
            Err(e) => {
                error!(error = %e, "Failed to start recording");
                Task::none()
            }
        }
    }

    /// Signal the recorder task to finalize the file
    pub(crate) fn stop_recording(&mut self) -> Task<cosmic::Action<Message>> {
        if let Some(sender) = self.recording.take_stop_sender() {
            info!("Sending stop signal to recorder");
            let _ = sender.send(());
        }
        self.recording = RecordingState::Idle;
        Task::none()
    }

    fn start_recording(&mut self) -> Result<Task<cosmic::Action<Message>>, RecordingError> {
        self.recording.ensure_idle()?;
        let frame = self
            .recent_frames
            .latest()
            .ok_or_else(|| RecordingError::StartFailed("No camera feed to record".to_string()))?;
        let (width, height) = (frame.width, frame.height);

        let video_dir = crate::storage::video_directory();
        let output_path = crate::storage::reserve_video_path(&video_dir, chrono::Local::now())
            .map_err(|e| RecordingError::StartFailed(e.to_string()))?;
        let bitrate_kbps = self.config.bitrate_preset.bitrate_kbps(width);
        let with_audio = self.stream_request().audio;

        let recorder =
            VideoRecorder::start(width, height, bitrate_kbps, with_audio, output_path.clone())
                .inspect_err(|_| {
                    let _ = std::fs::remove_file(&output_path);
                })?;

        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel();
        self.recording = RecordingState::start(output_path.clone(), recorder.input(), stop_tx);
        self.rec_blink_on = true;

        let recording_task = Task::perform(
            async move {
                let _ = stop_rx.await;
                tokio::task::spawn_blocking(move || recorder.stop().map_err(|e| e.to_string()))
                    .await
                    .unwrap_or_else(|e| Err(format!("Task join error: {}", e)))
            },
            |result| cosmic::Action::App(Message::RecordingStopped(result)),
        );

        let start_signal = Task::done(cosmic::Action::App(Message::RecordingStarted(output_path)));

        Ok(Task::batch([start_signal, recording_task]))
    }

    pub(crate) fn handle_recording_started(
        &mut self,
        path: PathBuf,
    ) -> Task<cosmic::Action<Message>> {
        info!(path = %path.display(), "Recording started");
        Self::delay_task(timing::REC_BLINK_INTERVAL, Message::RecordingTick)
    }

    pub(crate) fn handle_recording_stopped(
        &mut self,
        result: Result<PathBuf, String>,
    ) -> Task<cosmic::Action<Message>> {
        match result {
            Ok(path) => info!(path = %path.display(), "Recording saved successfully"),
            Err(err) => error!(error = %err, "Failed to save recording"),
        }
        Task::none()
    }

    /// Blink the REC dot and refresh the timer
    pub(crate) fn handle_recording_tick(&mut self) -> Task<cosmic::Action<Message>> {
        if !self.recording.is_recording() {
            self.rec_blink_on = true;
            return Task::none();
        }
        self.rec_blink_on = !self.rec_blink_on;
        Self::delay_task(timing::REC_BLINK_INTERVAL, Message::RecordingTick)
    }
}


// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! The main `update()` function acts as a dispatcher, while specific handlers
//! are implemented in the `handlers` submodules organized by functional domain.
//!
//! # Handler Modules
//!
//! - `handlers::ui`: Context pages, URLs, config reloads
//! - `handlers::camera`: Camera selection and frame handling
//! - `handlers::capture`: Photo capture, flash and mode switching
//! - `handlers::recording`: Video recording lifecycle
//! - `handlers::pro_mode`: Scene presets and manual settings
//! - `handlers::editing`: Editing suite selection, looks and export
//! - `handlers::settings`: Accessibility and preferences
//! - `handlers::voice`: Speech recognizer events

use crate::app::state::{AppModel, Message};
use cosmic::Task;

impl AppModel {
    /// Main message handler - routes messages to appropriate handler methods.
    pub fn update(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
        match message {
            // ===== UI Navigation =====
            Message::LaunchUrl(url) => self.handle_launch_url(url),
            Message::ToggleContextPage(page) => self.handle_toggle_context_page(page),
            Message::UpdateConfig(config) => self.handle_update_config(config),

            // ===== Control Panel =====
            Message::SetMode(mode) => self.handle_set_mode(mode),
            Message::Capture => self.handle_capture(),
            Message::CycleFlash => self.handle_cycle_flash(),
            Message::SwitchCamera => self.handle_switch_camera(),
            Message::SelectCamera(index) => self.handle_select_camera(index),

            // ===== Camera Stream =====
            Message::CamerasInitialized(cameras) => self.handle_cameras_initialized(cameras),
            Message::CameraOpened(device) => self.handle_camera_opened(device),
            Message::CameraUnavailable(reason) => self.handle_camera_unavailable(reason),
            Message::CameraFrame(frame) => self.handle_camera_frame(frame),
            Message::PreviewRendered(handle) => self.handle_preview_rendered(handle),

            // ===== Photo Capture =====
            Message::FlashComplete => self.handle_flash_complete(),
            Message::PhotoCaptured(result) => self.handle_photo_captured(result),
            Message::PhotoSaved(result) => self.handle_photo_saved(result),

            // ===== Recording =====
            Message::ToggleRecording => self.handle_toggle_recording(),
            Message::RecordingStarted(path) => self.handle_recording_started(path),
            Message::RecordingStopped(result) => self.handle_recording_stopped(result),
            Message::RecordingTick => self.handle_recording_tick(),

            // ===== Pro Mode =====
            Message::SelectScene(scene) => self.handle_select_scene(scene),
            Message::SetCompositionGuide(guide) => self.handle_set_composition_guide(guide),
            Message::SetIso(iso) => self.handle_set_iso(iso),
            Message::SetAperture(aperture) => self.handle_set_aperture(aperture),
            Message::SetExposure(exposure) => self.handle_set_exposure(exposure),
            Message::SelectShutter(index) => self.handle_select_shutter(index),
            Message::SelectWhiteBalance(index) => self.handle_select_white_balance(index),
            Message::ToggleStabilization(enabled) => self.handle_toggle_stabilization(enabled),

            // ===== Editing Suite =====
            Message::OpenEditor => self.handle_open_editor(),
            Message::CloseEditor => self.handle_close_editor(),
            Message::SelectMedia(index) => self.handle_select_media(index),
            Message::SetFilter(filter) => self.handle_set_filter(filter),
            Message::SetGrade(grade) => self.handle_set_grade(grade),
            Message::SetAspectRatio(aspect) => self.handle_set_aspect_ratio(aspect),
            Message::EditorPreviewRendered(generation, handle) => {
                self.handle_editor_preview_rendered(generation, handle)
            }
            Message::Export => self.handle_export(),
            Message::Exported(result) => self.handle_exported(result),
            Message::OpenExportFolder => self.handle_open_export_folder(),

            // ===== Settings =====
            Message::ToggleVoiceCommands(enabled) => self.handle_toggle_voice_commands(enabled),
            Message::SelectTextSize(index) => self.handle_select_text_size(index),
            Message::ToggleHighContrast(enabled) => self.handle_toggle_high_contrast(enabled),
            Message::SetAppTheme(index) => self.handle_set_app_theme(index),
            Message::ToggleMirrorPreview(enabled) => self.handle_toggle_mirror_preview(enabled),
            Message::ToggleSaveCaptures(enabled) => self.handle_toggle_save_captures(enabled),
            Message::SelectBitratePreset(index) => self.handle_select_bitrate_preset(index),

            // ===== Voice =====
            Message::Recognizer(event) => self.handle_recognizer_event(event),

            Message::Noop => Task::none(),
        }
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Application state types

use crate::backends::camera::{CameraDevice, CameraFrame};
use crate::config::Config;
use crate::errors::RecordingError;
use crate::fl;
use crate::flash::FlashDevice;
use crate::haptics::Vibrator;
use crate::media::{AspectRatio, CapturedMedia, ColorGrade, CompositionGuide, Filter, MediaLibrary};
use crate::pipelines::video::RecordingInput;
use crate::scene::{ManualSettings, SceneType, ShutterSpeed, WhiteBalance};
use crate::voice::recognizer::RecognizerEvent;
use cosmic::cosmic_config;
use cosmic::widget::{self, about::About};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Camera operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Point and shoot with neutral processing
    #[default]
    Auto,
    /// Scene presets and manual parameters
    Pro,
    Video,
}

/// What the capture button does in a given mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureAction {
    Capture,
    ToggleRecording,
}

impl CameraMode {
    pub const ALL: [CameraMode; 3] = [CameraMode::Auto, CameraMode::Pro, CameraMode::Video];

    pub fn label(&self) -> String {
        match self {
            CameraMode::Auto => fl!("mode-auto"),
            CameraMode::Pro => fl!("mode-pro"),
            CameraMode::Video => fl!("mode-video"),
        }
    }

    /// Only Video mode records; recording state never changes this
    pub fn capture_action(&self) -> CaptureAction {
        match self {
            CameraMode::Video => CaptureAction::ToggleRecording,
            CameraMode::Auto | CameraMode::Pro => CaptureAction::Capture,
        }
    }
}

/// Video recording state machine
#[derive(Debug, Default)]
pub enum RecordingState {
    /// Not recording
    #[default]
    Idle,
    /// Actively recording
    Recording {
        /// When recording started
        start_time: Instant,
        /// Output file path
        file_path: PathBuf,
        /// Preview frames are forwarded here
        input: RecordingInput,
        /// Channel to signal stop
        stop_sender: Option<tokio::sync::oneshot::Sender<()>>,
    },
}

impl RecordingState {
    pub fn start(
        file_path: PathBuf,
        input: RecordingInput,
        stop_sender: tokio::sync::oneshot::Sender<()>,
    ) -> Self {
        RecordingState::Recording {
            start_time: Instant::now(),
            file_path,
            input,
            stop_sender: Some(stop_sender),
        }
    }

    pub fn is_recording(&self) -> bool {
        matches!(self, RecordingState::Recording { .. })
    }

    /// Refuse to start a second recorder over a running one
    pub fn ensure_idle(&self) -> Result<(), RecordingError> {
        if self.is_recording() {
            Err(RecordingError::AlreadyRecording)
        } else {
            Ok(())
        }
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        match self {
            RecordingState::Idle => None,
            RecordingState::Recording { file_path, .. } => Some(file_path),
        }
    }

    pub fn input(&self) -> Option<&RecordingInput> {
        match self {
            RecordingState::Idle => None,
            RecordingState::Recording { input, .. } => Some(input),
        }
    }

    /// Elapsed recording time in whole seconds
    pub fn elapsed_duration(&self) -> u64 {
        match self {
            RecordingState::Idle => 0,
            RecordingState::Recording { start_time, .. } => start_time.elapsed().as_secs(),
        }
    }

    /// Take the stop sender (consumes it)
    pub fn take_stop_sender(&mut self) -> Option<tokio::sync::oneshot::Sender<()>> {
        match self {
            RecordingState::Idle => None,
            RecordingState::Recording { stop_sender, .. } => stop_sender.take(),
        }
    }
}

/// Format a duration in seconds as `MM:SS`
pub fn format_duration(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// The most recent frames, newest last
#[derive(Debug, Clone)]
pub struct FrameHistory {
    frames: VecDeque<Arc<CameraFrame>>,
    capacity: usize,
}

impl FrameHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, frame: Arc<CameraFrame>) {
        if self.frames.len() == self.capacity {
            self.frames.pop_front();
        }
        self.frames.push_back(frame);
    }

    pub fn latest(&self) -> Option<&Arc<CameraFrame>> {
        self.frames.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<CameraFrame>> {
        self.frames.iter()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

/// Stream acquisition status shown by the preview
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CameraStatus {
    /// Enumerating or opening
    #[default]
    Starting,
    Streaming,
    /// Acquisition failed; carries the reason
    Unavailable(String),
}

/// Speech recognizer status shown in settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VoiceStatus {
    #[default]
    Off,
    Listening,
    /// Last recognized transcript
    Heard(String),
    Unavailable(String),
}

/// Editing suite state
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub open: bool,
    pub filter: Filter,
    pub grade: ColorGrade,
    /// Rendered look of the selected item
    pub preview: Option<widget::image::Handle>,
    /// Bumped on every look change so stale renders are discarded
    pub render_generation: u64,
    pub exporting: bool,
    pub last_export: Option<PathBuf>,
}

/// Context drawer pages
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    Settings,
    About,
}

/// Main application state
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime
    pub core: cosmic::Core,
    /// Display a context drawer with the designated page if defined
    pub context_page: ContextPage,
    pub about: About,
    /// Configuration data that persists between application runs
    pub config: Config,
    /// Configuration handler for saving settings
    pub config_handler: Option<cosmic_config::Config>,

    // Capture state
    pub mode: CameraMode,
    pub scene: SceneType,
    pub manual: ManualSettings,
    pub recording: RecordingState,
    /// Toggled every blink interval while recording
    pub rec_blink_on: bool,
    /// Photo capture in flight
    pub is_capturing: bool,
    /// White screen shown before a flash capture
    pub flash_active: bool,
    pub flash_devices: Vec<FlashDevice>,
    pub vibrator: Option<Vibrator>,

    // Camera state
    pub available_cameras: Vec<CameraDevice>,
    pub cameras_initialized: bool,
    /// Camera the stream was opened on
    pub active_camera: Option<CameraDevice>,
    /// Explicit choice made in this session, overrides the saved camera
    pub selected_camera_path: Option<String>,
    /// Bumped to restart the camera subscription
    pub camera_generation: u64,
    pub camera_status: CameraStatus,
    pub recent_frames: FrameHistory,
    pub frame_count: u64,
    /// Rendered preview of the latest frame
    pub preview: Option<widget::image::Handle>,
    /// A preview render is in flight; newer frames skip rendering
    pub preview_pending: bool,

    // Media and editing
    pub media: MediaLibrary,
    pub editor: EditorState,

    // Voice
    pub voice_status: VoiceStatus,

    // Dropdown labels
    pub camera_dropdown_options: Vec<String>,
    pub shutter_dropdown_options: Vec<String>,
    pub white_balance_dropdown_options: Vec<String>,
    pub theme_dropdown_options: Vec<String>,
    pub text_size_dropdown_options: Vec<String>,
    pub bitrate_dropdown_options: Vec<String>,
}

/// Messages emitted by the application and its widgets
#[derive(Debug, Clone)]
pub enum Message {
    // UI navigation
    LaunchUrl(String),
    ToggleContextPage(ContextPage),
    UpdateConfig(Config),

    // Control panel
    SetMode(CameraMode),
    Capture,
    CycleFlash,
    SwitchCamera,
    SelectCamera(usize),

    // Camera stream
    CamerasInitialized(Vec<CameraDevice>),
    CameraOpened(CameraDevice),
    CameraUnavailable(String),
    CameraFrame(Arc<CameraFrame>),
    PreviewRendered(Option<widget::image::Handle>),

    // Photo capture
    FlashComplete,
    PhotoCaptured(Result<CapturedMedia, String>),
    PhotoSaved(Result<PathBuf, String>),

    // Recording
    ToggleRecording,
    RecordingStarted(PathBuf),
    RecordingStopped(Result<PathBuf, String>),
    RecordingTick,

    // Pro mode
    SelectScene(SceneType),
    SetCompositionGuide(CompositionGuide),
    SetIso(u32),
    SetAperture(f32),
    SetExposure(f32),
    SelectShutter(usize),
    SelectWhiteBalance(usize),
    ToggleStabilization(bool),

    // Editing suite
    OpenEditor,
    CloseEditor,
    SelectMedia(usize),
    SetFilter(Filter),
    SetGrade(ColorGrade),
    SetAspectRatio(AspectRatio),
    EditorPreviewRendered(u64, widget::image::Handle),
    Export,
    Exported(Result<PathBuf, String>),
    OpenExportFolder,

    // Accessibility and settings
    ToggleVoiceCommands(bool),
    SelectTextSize(usize),
    ToggleHighContrast(bool),
    SetAppTheme(usize),
    ToggleMirrorPreview(bool),
    ToggleSaveCaptures(bool),
    SelectBitratePreset(usize),

    // Voice
    Recognizer(RecognizerEvent),

    /// No-op
    Noop,
}

impl AppModel {
    /// Stream request for the current mode
    pub fn stream_request(&self) -> crate::backends::camera::StreamRequest {
        crate::backends::camera::StreamRequest::new(self.mode == CameraMode::Video)
    }

    /// Camera path the next stream should prefer
    pub fn preferred_camera_path(&self) -> Option<String> {
        self.selected_camera_path
            .clone()
            .or_else(|| self.config.last_camera_path.clone())
    }

    pub fn shutter_index(&self) -> Option<usize> {
        ShutterSpeed::ALL.iter().position(|s| *s == self.manual.shutter)
    }

    pub fn white_balance_index(&self) -> Option<usize> {
        WhiteBalance::ALL
            .iter()
            .position(|wb| *wb == self.manual.white_balance)
    }

    /// Index of the active camera in the camera dropdown
    pub fn current_camera_index(&self) -> Option<usize> {
        let active = self.active_camera.as_ref()?;
        self.available_cameras
            .iter()
            .position(|c| c.path == active.path)
    }

    /// Scale a base text size by the accessibility setting
    pub fn text_size(&self, base: u16) -> u16 {
        self.config.accessibility.text_size.apply(base)
    }

    pub fn high_contrast(&self) -> bool {
        self.config.accessibility.high_contrast
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(tag: u8) -> Arc<CameraFrame> {
        Arc::new(CameraFrame {
            width: 1,
            height: 1,
            data: Arc::from(vec![tag, tag, tag, 255]),
            captured_at: Instant::now(),
        })
    }

    #[test]
    fn capture_button_records_only_in_video_mode() {
        assert_eq!(CameraMode::Auto.capture_action(), CaptureAction::Capture);
        assert_eq!(CameraMode::Pro.capture_action(), CaptureAction::Capture);
        assert_eq!(
            CameraMode::Video.capture_action(),
            CaptureAction::ToggleRecording
        );
    }

    #[test]
    fn mode_labels() {
        let labels: Vec<_> = CameraMode::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels, ["AUTO", "PRO", "VIDEO"]);
    }

    #[test]
    fn duration_formats_as_minutes_and_seconds() {
        assert_eq!(format_duration(0), "00:00");
        assert_eq!(format_duration(75), "01:15");
        assert_eq!(format_duration(3600), "60:00");
    }

    #[test]
    fn frame_history_keeps_newest() {
        let mut history = FrameHistory::new(3);
        for tag in 0..5 {
            history.push(frame(tag));
        }
        assert_eq!(history.len(), 3);
        let tags: Vec<u8> = history.iter().map(|f| f.data[0]).collect();
        assert_eq!(tags, [2, 3, 4]);
        assert_eq!(history.latest().map(|f| f.data[0]), Some(4));
    }

    #[test]
    fn idle_recording_has_no_duration() {
        let mut state = RecordingState::default();
        assert!(!state.is_recording());
        assert_eq!(state.elapsed_duration(), 0);
        assert!(state.take_stop_sender().is_none());
        assert!(state.ensure_idle().is_ok());
    }
}

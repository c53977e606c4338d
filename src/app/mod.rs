// SPDX-License-Identifier: GPL-3.0-only

//! Main application module for ProCam
//!
//! # Architecture
//!
//! - `state`: Application state types (AppModel, Message, CameraMode, etc.)
//! - `preview`: Renders camera frames for display (crop, mirror, guide)
//! - `controls`: Capture button and recording indicator
//! - `bottom_bar`: Gallery, mode switcher, camera switcher
//! - `pro_mode`: Scene presets and manual settings panel
//! - `editing`: Post-capture editing suite
//! - `settings`: Settings drawer with accessibility options
//! - `view`: Main view composition
//! - `update`: Message dispatch to `handlers`

mod bottom_bar;
mod controls;
mod editing;
mod handlers;
pub mod preview;
mod pro_mode;
mod settings;
mod state;
mod style;
mod update;
mod view;

use crate::backends::camera::{self, CameraDevice};
use crate::config::Config;
use crate::constants::timing;
use crate::fl;
use crate::voice::recognizer::{self, RecognizerEvent};
use cosmic::app::context_drawer;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::Subscription;
use cosmic::widget::{self, about::About};
use cosmic::{Element, Task};
pub use state::{
    AppModel, CameraMode, CameraStatus, CaptureAction, ContextPage, EditorState, FrameHistory,
    Message, RecordingState, VoiceStatus, format_duration,
};
use std::sync::Arc;
use tracing::{error, info, warn};

const REPOSITORY: &str = "https://github.com/procam-app/procam";

impl cosmic::Application for AppModel {
    type Executor = cosmic::executor::Default;

    type Flags = ();

    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "io.github.procam.ProCam";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    fn init(
        core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::from_name("camera-photo-symbolic").handle())
            .version(crate::constants::app_info::version())
            .links([(fl!("repository"), REPOSITORY)])
            .license(env!("CARGO_PKG_LICENSE"));

        let (config_handler, config) =
            match cosmic_config::Config::new(Self::APP_ID, Config::VERSION) {
                Ok(handler) => {
                    let config = match Config::get_entry(&handler) {
                        Ok(config) => config,
                        Err((errors, config)) => {
                            error!(?errors, "Errors loading config");
                            config
                        }
                    };
                    (Some(handler), config)
                }
                Err(err) => {
                    error!(%err, "Failed to create config handler");
                    (None, Config::default())
                }
            };

        if let Err(e) = gstreamer::init() {
            error!(error = %e, "Failed to initialize GStreamer");
        }

        let flash_devices = crate::flash::FlashDevice::discover();
        let vibrator = crate::haptics::Vibrator::discover();
        info!(
            flash_leds = flash_devices.len(),
            vibrator = vibrator.is_some(),
            "Feedback devices discovered"
        );

        let mut app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            config,
            config_handler,
            mode: CameraMode::default(),
            scene: crate::scene::SceneType::default(),
            manual: crate::scene::ManualSettings::default(),
            recording: RecordingState::default(),
            rec_blink_on: true,
            is_capturing: false,
            flash_active: false,
            flash_devices,
            vibrator,
            available_cameras: Vec::new(),
            cameras_initialized: false,
            active_camera: None,
            selected_camera_path: None,
            camera_generation: 0,
            camera_status: CameraStatus::default(),
            recent_frames: FrameHistory::new(crate::constants::capture::STABILIZATION_FRAMES),
            frame_count: 0,
            preview: None,
            preview_pending: false,
            media: crate::media::MediaLibrary::new(),
            editor: EditorState::default(),
            voice_status: VoiceStatus::default(),
            camera_dropdown_options: Vec::new(),
            shutter_dropdown_options: crate::scene::ShutterSpeed::ALL
                .iter()
                .map(|s| s.to_string())
                .collect(),
            white_balance_dropdown_options: crate::scene::WhiteBalance::ALL
                .iter()
                .map(|wb| wb.label())
                .collect(),
            theme_dropdown_options: vec![
                fl!("theme-system"),
                fl!("theme-dark"),
                fl!("theme-light"),
            ],
            text_size_dropdown_options: vec![
                fl!("text-size-normal"),
                fl!("text-size-large"),
                fl!("text-size-extra"),
            ],
            bitrate_dropdown_options: crate::constants::BitratePreset::ALL
                .iter()
                .map(|p| p.display_name())
                .collect(),
        };
        app.voice_status = if app.config.accessibility.voice_commands {
            VoiceStatus::Listening
        } else {
            VoiceStatus::Off
        };

        // Enumeration can take a while with several devices attached
        let init_task = Task::perform(
            async {
                tokio::task::spawn_blocking(|| match camera::enumerate_cameras() {
                    Ok(cameras) => cameras,
                    Err(e) => {
                        warn!(error = %e, "Camera enumeration failed");
                        Vec::new()
                    }
                })
                .await
                .unwrap_or_default()
            },
            |cameras| cosmic::Action::App(Message::CamerasInitialized(cameras)),
        );

        let theme_task = cosmic::command::set_theme(app.config.app_theme.theme());

        (app, Task::batch([init_task, theme_task]))
    }

    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        vec![]
    }

    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        vec![
            widget::button::icon(widget::icon::from_name("preferences-system-symbolic"))
                .on_press(Message::ToggleContextPage(ContextPage::Settings))
                .into(),
        ]
    }

    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                |url| Message::LaunchUrl(url.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            ),
            ContextPage::Settings => self.settings_view(),
        })
    }

    fn view(&self) -> Element<'_, Self::Message> {
        self.view()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        let config_sub = self
            .core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config));

        let camera_sub = if self.cameras_initialized {
            camera_subscription(
                self.camera_generation,
                self.available_cameras.clone(),
                self.stream_request(),
                self.preferred_camera_path(),
            )
        } else {
            Subscription::none()
        };

        let voice_sub = if self.config.accessibility.voice_commands {
            voice_subscription(self.config.voice_recognizer_command.clone())
        } else {
            Subscription::none()
        };

        Subscription::batch([config_sub, camera_sub, voice_sub])
    }

    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        self.update(message)
    }
}

/// Stream frames from the selected camera
///
/// Restarts only when `generation` changes, so mode switches and recording
/// keep the same stream. A failed acquisition is reported once and not retried.
fn camera_subscription(
    generation: u64,
    cameras: Vec<CameraDevice>,
    request: camera::StreamRequest,
    preferred_path: Option<String>,
) -> Subscription<Message> {
    use cosmic::iced::futures::{SinkExt, StreamExt};

    Subscription::run_with_id(
        ("camera", generation),
        cosmic::iced::stream::channel(100, move |mut output| async move {
            info!(generation, cameras = cameras.len(), "Camera subscription started");

            let (sender, mut receiver) = cosmic::iced::futures::channel::mpsc::channel(4);
            let opened = tokio::task::spawn_blocking(move || {
                camera::open_stream(&cameras, &request, preferred_path.as_deref(), sender)
            })
            .await;

            let (device, pipeline) = match opened {
                Ok(Ok(opened)) => opened,
                Ok(Err(e)) => {
                    error!("Camera access denied: {}", e);
                    let _ = output.send(Message::CameraUnavailable(e.to_string())).await;
                    std::future::pending::<()>().await;
                    return;
                }
                Err(e) => {
                    error!("Camera access denied: {}", e);
                    let _ = output.send(Message::CameraUnavailable(e.to_string())).await;
                    std::future::pending::<()>().await;
                    return;
                }
            };

            if output.send(Message::CameraOpened(device)).await.is_err() {
                return;
            }

            let mut frame_count = 0u64;
            loop {
                if output.is_closed() {
                    info!("Output channel closed, camera subscription cancelled");
                    break;
                }

                match tokio::time::timeout(
                    std::time::Duration::from_millis(500),
                    receiver.next(),
                )
                .await
                {
                    Ok(Some(frame)) => {
                        frame_count += 1;
                        if frame_count % timing::FRAME_LOG_INTERVAL == 0 {
                            info!(
                                frame = frame_count,
                                width = frame.width,
                                height = frame.height,
                                "Received frame from pipeline"
                            );
                        }

                        // Dropping frames is fine for live preview
                        if let Err(e) = output.try_send(Message::CameraFrame(Arc::new(frame))) {
                            if e.is_disconnected() {
                                break;
                            }
                        }
                    }
                    Ok(None) => {
                        let reason = stream_end_reason(pipeline.poll_error());
                        warn!(%reason, "Camera frame stream ended");
                        let _ = output.send(Message::CameraUnavailable(reason)).await;
                        break;
                    }
                    Err(_) => {
                        if let Some(reason) = pipeline.poll_error() {
                            error!("Camera access denied: {}", reason);
                            let _ = output.send(Message::CameraUnavailable(reason)).await;
                            break;
                        }
                    }
                }
            }

            info!("Releasing camera stream");
            drop(pipeline);
            std::future::pending::<()>().await;
        }),
    )
}

/// Run the speech recognizer while voice commands are enabled
fn voice_subscription(command: String) -> Subscription<Message> {
    use cosmic::iced::futures::{SinkExt, StreamExt};

    Subscription::run_with_id(
        ("voice", command.clone()),
        cosmic::iced::stream::channel(16, move |mut output| async move {
            let (sender, mut receiver) =
                cosmic::iced::futures::channel::mpsc::channel::<RecognizerEvent>(16);

            let forward = async move {
                while let Some(event) = receiver.next().await {
                    if output.send(Message::Recognizer(event)).await.is_err() {
                        break;
                    }
                }
            };

            futures::future::join(recognizer::run(command, sender), forward).await;
        }),
    )
}

/// Why the frame stream closed: the pipeline error when there is one
fn stream_end_reason(pipeline_error: Option<String>) -> String {
    pipeline_error.unwrap_or_else(|| fl!("camera-disconnected"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_stream_reports_a_reason() {
        assert_eq!(stream_end_reason(None), "Camera disconnected");
        assert_eq!(stream_end_reason(Some("device lost".into())), "device lost");
    }
}

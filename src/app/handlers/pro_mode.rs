// SPDX-License-Identifier: GPL-3.0-only

//! Pro mode handlers: scene presets and manual settings

use crate::app::state::{AppModel, CameraMode, Message};
use crate::media::CompositionGuide;
use crate::scene::{SceneType, ShutterSpeed, WhiteBalance};
use cosmic::Task;
use tracing::{debug, info};

impl AppModel {
    /// Record the scene; the preset is applied only in Pro mode
    pub(crate) fn handle_select_scene(
        &mut self,
        scene: SceneType,
    ) -> Task<cosmic::Action<Message>> {
        self.scene = scene;
        if self.mode == CameraMode::Pro {
            self.manual = scene.preset();
            info!(scene = %scene, settings = ?self.manual, "Scene preset applied");
        } else {
            debug!(scene = %scene, mode = ?self.mode, "Scene recorded without applying preset");
        }
        Task::none()
    }

    pub(crate) fn handle_set_composition_guide(
        &mut self,
        guide: CompositionGuide,
    ) -> Task<cosmic::Action<Message>> {
        self.config.composition_guide = guide;
        self.save_config("composition_guide");
        Task::none()
    }

    pub(crate) fn handle_set_iso(&mut self, iso: u32) -> Task<cosmic::Action<Message>> {
        self.manual.set_iso(iso);
        Task::none()
    }

    pub(crate) fn handle_set_aperture(&mut self, aperture: f32) -> Task<cosmic::Action<Message>> {
        self.manual.set_aperture(aperture);
        Task::none()
    }

    pub(crate) fn handle_set_exposure(&mut self, exposure: f32) -> Task<cosmic::Action<Message>> {
        self.manual.set_exposure(exposure);
        Task::none()
    }

    pub(crate) fn handle_select_shutter(&mut self, index: usize) -> Task<cosmic::Action<Message>> {
        if let Some(shutter) = ShutterSpeed::ALL.get(index) {
            self.manual.shutter = *shutter;
        }
        Task::none()
    }

    pub(crate) fn handle_select_white_balance(
        &mut self,
        index: usize,
    ) -> Task<cosmic::Action<Message>> {
        if let Some(wb) = WhiteBalance::ALL.get(index) {
            self.manual.white_balance = *wb;
        }
        Task::none()
    }

    pub(crate) fn handle_toggle_stabilization(
        &mut self,
        enabled: bool,
    ) -> Task<cosmic::Action<Message>> {
        self.config.stabilization = enabled;
        info!(enabled, "Image stabilization toggled");
        self.save_config("stabilization");
        Task::none()
    }
}

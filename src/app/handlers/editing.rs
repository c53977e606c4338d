// SPDX-License-Identifier: GPL-3.0-only

//! Editing suite handlers
//!
//! Looks are rendered off the UI thread on a downscaled copy; export renders
//! the full-resolution image.

use crate::app::state::{AppModel, Message};
use crate::media::{AspectRatio, ColorGrade, Filter};
use crate::pipelines::photo::{self, PhotoEncoder};
use cosmic::Task;
use cosmic::widget::image::Handle;
use image::RgbaImage;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Longest edge of the editor preview
const EDITOR_PREVIEW_EDGE: u32 = 1280;

fn render_editor_preview(
    source: &RgbaImage,
    filter: Filter,
    grade: ColorGrade,
    aspect: AspectRatio,
) -> Handle {
    let (w, h) = source.dimensions();
    let longest = w.max(h).max(1);
    let rendered = if longest > EDITOR_PREVIEW_EDGE {
        let scale = EDITOR_PREVIEW_EDGE as f32 / longest as f32;
        let small = image::imageops::thumbnail(
            source,
            ((w as f32 * scale).round() as u32).max(1),
            ((h as f32 * scale).round() as u32).max(1),
        );
        photo::render_look(&small, filter, grade, aspect)
    } else {
        photo::render_look(source, filter, grade, aspect)
    };
    let (width, height) = rendered.dimensions();
    Handle::from_rgba(width, height, rendered.into_raw())
}

impl AppModel {
    /// Re-render the selected item with the current look
    pub(crate) fn refresh_editor_preview(&mut self) -> Task<cosmic::Action<Message>> {
        let Some(media) = self.media.selected() else {
            self.editor.preview = None;
            return Task::none();
        };

        self.editor.render_generation = self.editor.render_generation.wrapping_add(1);
        let generation = self.editor.render_generation;
        let image = media.image.clone();
        let (filter, grade) = (self.editor.filter, self.editor.grade);
        let aspect = self.config.aspect_ratio;

        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || {
                    render_editor_preview(&image, filter, grade, aspect)
                })
                .await
                .ok()
            },
            move |handle| match handle {
                Some(handle) => {
                    cosmic::Action::App(Message::EditorPreviewRendered(generation, handle))
                }
                None => cosmic::Action::App(Message::Noop),
            },
        )
    }

    pub(crate) fn handle_open_editor(&mut self) -> Task<cosmic::Action<Message>> {
        info!(items = self.media.len(), "Opening editing suite");
        self.editor.open = true;
        self.editor.last_export = None;
        self.refresh_editor_preview()
    }

    pub(crate) fn handle_close_editor(&mut self) -> Task<cosmic::Action<Message>> {
        self.editor.open = false;
        self.editor.preview = None;
        Task::none()
    }

    pub(crate) fn handle_select_media(&mut self, index: usize) -> Task<cosmic::Action<Message>> {
        self.media.select(index);
        self.editor.last_export = None;
        self.refresh_editor_preview()
    }

    pub(crate) fn handle_set_filter(&mut self, filter: Filter) -> Task<cosmic::Action<Message>> {
        self.editor.filter = filter;
        self.refresh_editor_preview()
    }

    pub(crate) fn handle_set_grade(&mut self, grade: ColorGrade) -> Task<cosmic::Action<Message>> {
        self.editor.grade = grade;
        self.refresh_editor_preview()
    }

    /// Shared by the live preview and the editor
    pub(crate) fn handle_set_aspect_ratio(
        &mut self,
        aspect: AspectRatio,
    ) -> Task<cosmic::Action<Message>> {
        if self.config.aspect_ratio == aspect {
            return Task::none();
        }
        self.config.aspect_ratio = aspect;
        info!(aspect = %aspect, "Aspect ratio changed");
        self.save_config("aspect_ratio");

        if self.editor.open {
            self.refresh_editor_preview()
        } else {
            Task::none()
        }
    }

    pub(crate) fn handle_editor_preview_rendered(
        &mut self,
        generation: u64,
        handle: Handle,
    ) -> Task<cosmic::Action<Message>> {
        // Stale renders from earlier look changes are dropped
        if generation == self.editor.render_generation && self.editor.open {
            self.editor.preview = Some(handle);
        }
        Task::none()
    }

    pub(crate) fn handle_export(&mut self) -> Task<cosmic::Action<Message>> {
        if self.editor.exporting {
            return Task::none();
        }
        let Some(media) = self.media.selected().cloned() else {
            warn!("Nothing selected to export");
            return Task::none();
        };

        self.editor.exporting = true;
        let dir = crate::storage::export_directory(&self.config.export_directory);
        let encoder = PhotoEncoder::new(self.config.effective_jpeg_quality());
        info!(
            id = %media.id,
            filter = %self.editor.filter,
            grade = %self.editor.grade,
            aspect = %self.config.aspect_ratio,
            dir = %dir.display(),
            "Exporting photo"
        );

        Task::perform(
            photo::export(
                media,
                self.editor.filter,
                self.editor.grade,
                self.config.aspect_ratio,
                encoder,
                dir,
            ),
            |result| cosmic::Action::App(Message::Exported(result.map_err(|e| e.to_string()))),
        )
    }

    pub(crate) fn handle_exported(
        &mut self,
        result: Result<PathBuf, String>,
    ) -> Task<cosmic::Action<Message>> {
        self.editor.exporting = false;
        match result {
            Ok(path) => {
                info!(path = %path.display(), "Photo exported");
                self.editor.last_export = Some(path);
            }
            Err(err) => error!(error = %err, "Export failed"),
        }
        Task::none()
    }

    pub(crate) fn handle_open_export_folder(&self) -> Task<cosmic::Action<Message>> {
        let dir = crate::storage::export_directory(&self.config.export_directory);
        if let Err(err) = open::that_detached(&dir) {
            error!(dir = %dir.display(), error = %err, "Failed to open export folder");
        }
        Task::none()
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! The session's captured media

use chrono::{DateTime, Local};
use cosmic::widget::image::Handle;
use image::RgbaImage;
use std::sync::Arc;
use uuid::Uuid;

/// Longest edge of strip thumbnails, in pixels
const THUMBNAIL_EDGE: u32 = 160;

/// A single captured photo
#[derive(Debug, Clone)]
pub struct CapturedMedia {
    pub id: Uuid,
    pub captured_at: DateTime<Local>,
    /// Full-resolution processed capture
    pub image: Arc<RgbaImage>,
    pub thumbnail: Handle,
    /// JPEG as written at capture time
    pub encoded_jpeg: Arc<[u8]>,
}

impl CapturedMedia {
    pub fn new(image: RgbaImage, encoded_jpeg: Vec<u8>) -> Self {
        let thumbnail = make_thumbnail(&image);
        Self {
            id: Uuid::new_v4(),
            captured_at: Local::now(),
            image: Arc::new(image),
            thumbnail,
            encoded_jpeg: Arc::from(encoded_jpeg),
        }
    }
}

fn make_thumbnail(image: &RgbaImage) -> Handle {
    let (w, h) = image.dimensions();
    let scale = THUMBNAIL_EDGE as f32 / w.max(h).max(1) as f32;
    let thumb = if scale < 1.0 {
        let tw = ((w as f32 * scale).round() as u32).max(1);
        let th = ((h as f32 * scale).round() as u32).max(1);
        image::imageops::thumbnail(image, tw, th)
    } else {
        image.clone()
    };
    let (tw, th) = thumb.dimensions();
    Handle::from_rgba(tw, th, thumb.into_raw())
}

/// Ordered list of captures, oldest first, with a clamped selection
#[derive(Debug, Clone, Default)]
pub struct MediaLibrary {
    items: Vec<CapturedMedia>,
    selected: usize,
}

impl MediaLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one capture and return its index
    pub fn push(&mut self, media: CapturedMedia) -> usize {
        self.items.push(media);
        self.items.len() - 1
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[CapturedMedia] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&CapturedMedia> {
        self.items.get(index)
    }

    /// Select an item, clamping to the valid range
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.items.len().saturating_sub(1));
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&CapturedMedia> {
        self.items.get(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture() -> CapturedMedia {
        CapturedMedia::new(RgbaImage::new(640, 360), vec![0xFF, 0xD8])
    }

    #[test]
    fn push_appends_exactly_one_entry() {
        let mut library = MediaLibrary::new();
        assert!(library.is_empty());
        assert_eq!(library.push(capture()), 0);
        assert_eq!(library.len(), 1);
        assert_eq!(library.push(capture()), 1);
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn ids_are_unique_and_order_is_capture_order() {
        let mut library = MediaLibrary::new();
        let first = capture();
        let second = capture();
        let (a, b) = (first.id, second.id);
        library.push(first);
        library.push(second);
        assert_ne!(a, b);
        assert_eq!(library.items()[0].id, a);
        assert_eq!(library.items()[1].id, b);
    }

    #[test]
    fn selection_is_clamped() {
        let mut library = MediaLibrary::new();
        library.select(5);
        assert_eq!(library.selected_index(), 0);
        assert!(library.selected().is_none());

        library.push(capture());
        library.push(capture());
        library.select(9);
        assert_eq!(library.selected_index(), 1);
        assert!(library.selected().is_some());
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Choosing a camera and capture format for a stream request

use super::types::{CameraDevice, CameraFormat, CameraLocation};
use crate::constants::pipeline::{IDEAL_HEIGHT, IDEAL_WIDTH};

/// Which way the requested camera should point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    /// Towards the user
    User,
    /// Away from the user
    #[default]
    Environment,
}

impl Facing {
    fn location(self) -> CameraLocation {
        match self {
            Facing::User => CameraLocation::Front,
            Facing::Environment => CameraLocation::Back,
        }
    }
}

/// What the app asks of the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamRequest {
    pub facing: Facing,
    pub ideal_width: u32,
    pub ideal_height: u32,
    /// Microphone wanted alongside video
    pub audio: bool,
}

impl StreamRequest {
    /// Environment-facing 1080p stream, with audio only for video capture
    pub fn new(audio: bool) -> Self {
        Self {
            facing: Facing::Environment,
            ideal_width: IDEAL_WIDTH,
            ideal_height: IDEAL_HEIGHT,
            audio,
        }
    }
}

impl Default for StreamRequest {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Pick the camera for a stream
///
/// Order of preference: the camera at `preferred_path`, a camera whose
/// location matches `facing`, then the first camera.
pub fn select_device<'a>(
    cameras: &'a [CameraDevice],
    facing: Facing,
    preferred_path: Option<&str>,
) -> Option<&'a CameraDevice> {
    if let Some(path) = preferred_path
        && let Some(camera) = cameras.iter().find(|c| c.path == path)
    {
        return Some(camera);
    }

    cameras
        .iter()
        .find(|c| c.location == facing.location())
        .or_else(|| cameras.first())
}

/// Pick the format closest to the requested resolution
///
/// Distance is the sum of the width and height differences. Ties go to the
/// higher frame rate, then to raw formats over JPEG.
pub fn select_format<'a>(
    formats: &'a [CameraFormat],
    request: &StreamRequest,
) -> Option<&'a CameraFormat> {
    formats.iter().min_by(|a, b| {
        let distance = |f: &CameraFormat| {
            f.width.abs_diff(request.ideal_width) + f.height.abs_diff(request.ideal_height)
        };
        distance(a)
            .cmp(&distance(b))
            .then_with(|| b.fps().total_cmp(&a.fps()))
            .then_with(|| a.is_jpeg().cmp(&b.is_jpeg()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::camera::types::{CameraApi, Framerate};

    fn camera(name: &str, path: &str, location: CameraLocation) -> CameraDevice {
        CameraDevice {
            name: name.into(),
            path: path.into(),
            api: CameraApi::PipeWire,
            location,
            formats: Vec::new(),
        }
    }

    fn format(width: u32, height: u32, fps: u32, pixel_format: &str) -> CameraFormat {
        CameraFormat {
            width,
            height,
            framerate: Some(Framerate::from_int(fps)),
            pixel_format: pixel_format.into(),
        }
    }

    #[test]
    fn back_camera_is_preferred_for_environment() {
        let cameras = vec![
            camera("Front", "pipewire-serial-1", CameraLocation::Front),
            camera("Back", "pipewire-serial-2", CameraLocation::Back),
        ];
        let chosen = select_device(&cameras, Facing::Environment, None);
        assert_eq!(chosen.map(|c| c.name.as_str()), Some("Back"));
    }

    #[test]
    fn saved_camera_wins_over_facing() {
        let cameras = vec![
            camera("Front", "pipewire-serial-1", CameraLocation::Front),
            camera("Back", "pipewire-serial-2", CameraLocation::Back),
        ];
        let chosen = select_device(&cameras, Facing::Environment, Some("pipewire-serial-1"));
        assert_eq!(chosen.map(|c| c.name.as_str()), Some("Front"));
    }

    #[test]
    fn falls_back_to_first_camera() {
        let cameras = vec![
            camera("Webcam", "/dev/video0", CameraLocation::External),
            camera("Other", "/dev/video2", CameraLocation::Unknown),
        ];
        let chosen = select_device(&cameras, Facing::Environment, Some("/dev/video9"));
        assert_eq!(chosen.map(|c| c.name.as_str()), Some("Webcam"));
        assert!(select_device(&[], Facing::Environment, None).is_none());
    }

    #[test]
    fn closest_resolution_wins() {
        let formats = vec![
            format(640, 480, 30, "YUY2"),
            format(1920, 1080, 30, "MJPG"),
            format(3840, 2160, 30, "MJPG"),
        ];
        let chosen = select_format(&formats, &StreamRequest::default());
        assert_eq!(chosen.map(|f| (f.width, f.height)), Some((1920, 1080)));
    }

    #[test]
    fn ties_prefer_higher_framerate() {
        let formats = vec![
            format(1920, 1080, 30, "MJPG"),
            format(1920, 1080, 60, "MJPG"),
        ];
        let chosen = select_format(&formats, &StreamRequest::default());
        assert_eq!(chosen.map(|f| f.fps() as u32), Some(60));
    }

    #[test]
    fn no_formats_selects_nothing() {
        assert!(select_format(&[], &StreamRequest::default()).is_none());
    }

    #[test]
    fn default_request_is_environment_1080p_without_audio() {
        let request = StreamRequest::default();
        assert_eq!(request.facing, Facing::Environment);
        assert_eq!((request.ideal_width, request.ideal_height), (1920, 1080));
        assert!(!request.audio);
        assert!(StreamRequest::new(true).audio);
    }
}

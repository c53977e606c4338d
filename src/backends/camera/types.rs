// SPDX-License-Identifier: GPL-3.0-only

//! Shared types for the camera backend

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Where a camera sits on the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraLocation {
    /// Faces the user
    Front,
    /// Faces away from the user
    Back,
    /// USB or otherwise detachable
    External,
    #[default]
    Unknown,
}

impl CameraLocation {
    /// Parse a libcamera/PipeWire location property value
    pub fn from_property(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "front" => CameraLocation::Front,
            "back" => CameraLocation::Back,
            "external" => CameraLocation::External,
            _ => CameraLocation::Unknown,
        }
    }
}

/// How the device is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraApi {
    #[default]
    PipeWire,
    V4l2,
}

impl fmt::Display for CameraApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraApi::PipeWire => write!(f, "PipeWire"),
            CameraApi::V4l2 => write!(f, "V4L2"),
        }
    }
}

/// A camera discovered on the system
#[derive(Debug, Clone, PartialEq)]
pub struct CameraDevice {
    pub name: String,
    /// Stable identifier: `pipewire-serial-<n>`, a `/dev/video*` path, or
    /// empty for the platform default
    pub path: String,
    pub api: CameraApi,
    pub location: CameraLocation,
    pub formats: Vec<CameraFormat>,
}

/// A camera capture mode
#[derive(Debug, Clone, PartialEq)]
pub struct CameraFormat {
    pub width: u32,
    pub height: u32,
    pub framerate: Option<Framerate>,
    /// FourCC-style name, e.g. "YUY2", "NV12" or "MJPG"
    pub pixel_format: String,
}

impl CameraFormat {
    pub fn is_jpeg(&self) -> bool {
        matches!(self.pixel_format.as_str(), "MJPG" | "MJPEG" | "JPEG")
    }

    pub fn fps(&self) -> f64 {
        self.framerate.map(|f| f.as_f64()).unwrap_or(0.0)
    }
}

impl fmt::Display for CameraFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} {}", self.width, self.height, self.pixel_format)?;
        if let Some(rate) = self.framerate {
            write!(f, " @ {}", rate)?;
        }
        Ok(())
    }
}

/// Frame rate as a fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Framerate {
    pub num: u32,
    pub denom: u32,
}

impl Framerate {
    pub fn from_int(fps: u32) -> Self {
        Self { num: fps, denom: 1 }
    }

    pub fn as_f64(&self) -> f64 {
        if self.denom == 0 {
            0.0
        } else {
            self.num as f64 / self.denom as f64
        }
    }
}

impl fmt::Display for Framerate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom == 1 {
            write!(f, "{} fps", self.num)
        } else {
            write!(f, "{:.2} fps", self.as_f64())
        }
    }
}

/// A tightly packed RGBA frame
#[derive(Debug, Clone)]
pub struct CameraFrame {
    pub width: u32,
    pub height: u32,
    pub data: Arc<[u8]>,
    pub captured_at: Instant,
}

impl CameraFrame {
    /// Check the buffer holds exactly `width * height` RGBA pixels
    pub fn is_valid(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.data.len() == self.width as usize * self.height as usize * 4
    }

    /// Copy into an owned image buffer
    pub fn to_image(&self) -> Option<image::RgbaImage> {
        if !self.is_valid() {
            return None;
        }
        image::RgbaImage::from_raw(self.width, self.height, self.data.to_vec())
    }
}

/// Channel the preview pipeline pushes frames into
pub type FrameSender = futures::channel::mpsc::Sender<CameraFrame>;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Camera backend errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// GStreamer or a required element is missing
    NotAvailable(String),
    /// Failed to build or start the pipeline
    InitializationFailed(String),
    /// Camera device not found
    DeviceNotFound(String),
    /// Other errors
    Other(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::NotAvailable(msg) => write!(f, "Backend not available: {}", msg),
            BackendError::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            BackendError::DeviceNotFound(msg) => write!(f, "Device not found: {}", msg),
            BackendError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for BackendError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_property_parsing() {
        assert_eq!(CameraLocation::from_property("back"), CameraLocation::Back);
        assert_eq!(CameraLocation::from_property("Front"), CameraLocation::Front);
        assert_eq!(CameraLocation::from_property("side"), CameraLocation::Unknown);
    }

    #[test]
    fn frame_validation_checks_buffer_size() {
        let frame = CameraFrame {
            width: 2,
            height: 2,
            data: Arc::from(vec![0u8; 16]),
            captured_at: Instant::now(),
        };
        assert!(frame.is_valid());
        assert!(frame.to_image().is_some());

        let short = CameraFrame {
            data: Arc::from(vec![0u8; 15]),
            ..frame
        };
        assert!(!short.is_valid());
        assert!(short.to_image().is_none());
    }

    #[test]
    fn format_display() {
        let format = CameraFormat {
            width: 1920,
            height: 1080,
            framerate: Some(Framerate::from_int(30)),
            pixel_format: "MJPG".into(),
        };
        assert_eq!(format.to_string(), "1920x1080 MJPG @ 30 fps");
        assert!(format.is_jpeg());
    }
}

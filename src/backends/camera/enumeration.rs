// SPDX-License-Identifier: GPL-3.0-only

//! Camera discovery through the GStreamer device monitor

use super::types::{
    BackendError, BackendResult, CameraApi, CameraDevice, CameraFormat, CameraLocation, Framerate,
};
use gstreamer as gst;
use gstreamer::prelude::*;
use tracing::{debug, info, warn};

/// Enumerate cameras
///
/// PipeWire nodes are preferred; V4L2 devices are only listed when PipeWire
/// reports none, since both providers see the same hardware. When the
/// monitor finds nothing but `pipewiresrc` exists, a single default camera
/// is returned so PipeWire can pick one itself.
pub fn enumerate_cameras() -> BackendResult<Vec<CameraDevice>> {
    gst::init().map_err(|e| BackendError::NotAvailable(e.to_string()))?;

    let monitor = gst::DeviceMonitor::new();
    let caps = gst::Caps::new_empty_simple("video/x-raw");
    let _ = monitor.add_filter(Some("Video/Source"), Some(&caps));
    let jpeg = gst::Caps::new_empty_simple("image/jpeg");
    let _ = monitor.add_filter(Some("Video/Source"), Some(&jpeg));

    if let Err(e) = monitor.start() {
        warn!(error = %e, "Device monitor failed to start");
    }
    let devices = monitor.devices();
    monitor.stop();

    let mut pipewire = Vec::new();
    let mut v4l2 = Vec::new();
    for device in devices.iter() {
        let Some(camera) = camera_from_device(device) else {
            continue;
        };
        debug!(
            name = %camera.name,
            path = %camera.path,
            api = %camera.api,
            location = ?camera.location,
            formats = camera.formats.len(),
            "Found camera"
        );
        match camera.api {
            CameraApi::PipeWire => pipewire.push(camera),
            CameraApi::V4l2 => v4l2.push(camera),
        }
    }

    let mut cameras = if pipewire.is_empty() { v4l2 } else { pipewire };
    cameras.sort_by(|a, b| a.path.cmp(&b.path));
    cameras.dedup_by(|a, b| a.path == b.path && !a.path.is_empty());

    if cameras.is_empty() && gst::ElementFactory::find("pipewiresrc").is_some() {
        info!("No cameras reported, using PipeWire default camera");
        cameras.push(CameraDevice {
            name: "Default Camera".to_string(),
            path: String::new(),
            api: CameraApi::PipeWire,
            location: CameraLocation::Unknown,
            formats: Vec::new(),
        });
    }

    info!(count = cameras.len(), "Camera enumeration complete");
    Ok(cameras)
}

fn camera_from_device(device: &gst::Device) -> Option<CameraDevice> {
    let name = device.display_name().to_string();
    let props = device.properties();
    let prop = |key: &str| props.as_ref().and_then(|p| structure_string(p, key));

    let (api, path) = if let Some(serial) = prop("object.serial") {
        (CameraApi::PipeWire, format!("pipewire-serial-{}", serial))
    } else if let Some(path) = prop("api.v4l2.path").or_else(|| prop("device.path")) {
        (CameraApi::V4l2, path)
    } else {
        debug!(name = %name, "Skipping device without a usable identifier");
        return None;
    };

    let location = prop("api.libcamera.location")
        .map(|l| CameraLocation::from_property(&l))
        .unwrap_or_else(|| match prop("device.bus").as_deref() {
            Some("usb") => CameraLocation::External,
            _ => CameraLocation::Unknown,
        });

    let formats = device.caps().map(|c| formats_from_caps(&c)).unwrap_or_default();

    Some(CameraDevice {
        name,
        path,
        api,
        location,
        formats,
    })
}

/// Read a property that providers expose either as a string or an integer
fn structure_string(structure: &gst::StructureRef, key: &str) -> Option<String> {
    let value = structure.value(key).ok()?;
    value
        .get::<String>()
        .ok()
        .or_else(|| value.get::<i32>().ok().map(|v| v.to_string()))
        .or_else(|| value.get::<i64>().ok().map(|v| v.to_string()))
        .or_else(|| value.get::<u64>().ok().map(|v| v.to_string()))
}

/// Flatten device caps into concrete formats
///
/// Fixed width/height entries only; ranges are skipped since every camera
/// seen in practice also advertises discrete sizes.
pub fn formats_from_caps(caps: &gst::CapsRef) -> Vec<CameraFormat> {
    let mut formats = Vec::new();

    for s in caps.iter() {
        let (Ok(width), Ok(height)) = (s.get::<i32>("width"), s.get::<i32>("height")) else {
            continue;
        };
        if width <= 0 || height <= 0 {
            continue;
        }

        let pixel_format = match s.name().as_str() {
            "image/jpeg" => "MJPG".to_string(),
            "video/x-raw" => s.get::<String>("format").unwrap_or_else(|_| "RAW".to_string()),
            other => other.to_string(),
        };

        let rates = framerates(s);
        if rates.is_empty() {
            formats.push(CameraFormat {
                width: width as u32,
                height: height as u32,
                framerate: None,
                pixel_format,
            });
        } else {
            for rate in rates {
                formats.push(CameraFormat {
                    width: width as u32,
                    height: height as u32,
                    framerate: Some(rate),
                    pixel_format: pixel_format.clone(),
                });
            }
        }
    }

    formats.dedup();
    formats
}

fn framerates(s: &gst::StructureRef) -> Vec<Framerate> {
    let to_rate = |f: gst::Fraction| {
        (f.numer() > 0 && f.denom() > 0).then(|| Framerate {
            num: f.numer() as u32,
            denom: f.denom() as u32,
        })
    };

    if let Ok(f) = s.get::<gst::Fraction>("framerate") {
        return to_rate(f).into_iter().collect();
    }
    if let Ok(list) = s.get::<gst::List>("framerate") {
        return list
            .iter()
            .filter_map(|v| v.get::<gst::Fraction>().ok())
            .filter_map(to_rate)
            .collect();
    }
    if let Ok(range) = s.get::<gst::FractionRange>("framerate") {
        return to_rate(range.max()).into_iter().collect();
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_with_framerate_lists_expand() {
        gst::init().unwrap();
        let caps: gst::Caps =
            "image/jpeg, width=(int)1920, height=(int)1080, framerate=(fraction){ 30/1, 15/1 }; \
             video/x-raw, format=(string)YUY2, width=(int)640, height=(int)480, framerate=(fraction)30/1"
                .parse()
                .unwrap();

        let formats = formats_from_caps(&caps);
        assert_eq!(formats.len(), 3);
        assert_eq!(formats[0].pixel_format, "MJPG");
        assert_eq!(formats[0].framerate, Some(Framerate::from_int(30)));
        assert_eq!(formats[1].framerate, Some(Framerate::from_int(15)));
        assert_eq!(formats[2].pixel_format, "YUY2");
        assert_eq!((formats[2].width, formats[2].height), (640, 480));
    }

    #[test]
    fn caps_without_fixed_size_are_skipped() {
        gst::init().unwrap();
        let caps: gst::Caps = "video/x-raw, width=(int)[ 1, 4096 ], height=(int)[ 1, 4096 ]"
            .parse()
            .unwrap();
        assert!(formats_from_caps(&caps).is_empty());
    }
}

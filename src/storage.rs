// SPDX-License-Identifier: GPL-3.0-only

//! Output directories and file naming

use chrono::{DateTime, Local};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_FOLDER: &str = "ProCam";

fn home_or_cwd() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Default directory for photos
pub fn photo_directory() -> PathBuf {
    dirs::picture_dir()
        .unwrap_or_else(home_or_cwd)
        .join(APP_FOLDER)
}

/// Default directory for recordings
pub fn video_directory() -> PathBuf {
    dirs::video_dir().unwrap_or_else(home_or_cwd).join(APP_FOLDER)
}

/// Export directory from configuration, falling back to the photo directory
pub fn export_directory(configured: &str) -> PathBuf {
    let configured = configured.trim();
    if configured.is_empty() {
        return photo_directory();
    }

    match configured.strip_prefix("~/") {
        Some(rest) => home_or_cwd().join(rest),
        None => PathBuf::from(configured),
    }
}

/// `IMG_YYYYMMDD_HHMMSS.jpg`
pub fn photo_filename(at: DateTime<Local>) -> String {
    format!("IMG_{}.jpg", at.format("%Y%m%d_%H%M%S"))
}

/// `VID_YYYYMMDD_HHMMSS.mp4`
pub fn video_filename(at: DateTime<Local>) -> String {
    format!("VID_{}.mp4", at.format("%Y%m%d_%H%M%S"))
}

/// `procam-<unix millis>.jpg`
pub fn export_filename(at: DateTime<Local>) -> String {
    format!("procam-{}.jpg", at.timestamp_millis())
}

/// Create a new file in `dir` for `filename`, adding a numeric suffix on collision
///
/// Files are opened with `create_new`, so an existing file is never truncated
/// even when another writer picks the same name concurrently.
pub fn create_unique(dir: &Path, filename: &str) -> io::Result<(PathBuf, File)> {
    let (stem, ext) = match filename.rsplit_once('.') {
        Some((stem, ext)) => (stem, format!(".{}", ext)),
        None => (filename, String::new()),
    };

    for n in 0u32.. {
        let path = if n == 0 {
            dir.join(filename)
        } else {
            dir.join(format!("{}_{}{}", stem, n, ext))
        };
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => {
                if n > 0 {
                    debug!(path = %path.display(), "Resolved file name collision");
                }
                return Ok((path, file));
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e),
        }
    }

    Err(io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!("no free file name for {}", filename),
    ))
}

/// Claim an empty output file for a recording started at `at`
///
/// The recorder later writes into the claimed file, so two recordings started
/// within the same second never share a path.
pub fn reserve_video_path(dir: &Path, at: DateTime<Local>) -> io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let (path, _file) = create_unique(dir, &video_filename(at))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    #[test]
    fn filenames_follow_conventions() {
        let at = fixed_time();
        assert_eq!(photo_filename(at), "IMG_20240309_140507.jpg");
        assert_eq!(video_filename(at), "VID_20240309_140507.mp4");
        assert_eq!(export_filename(at), format!("procam-{}.jpg", at.timestamp_millis()));
    }

    #[test]
    fn empty_export_directory_uses_photos() {
        assert_eq!(export_directory("  "), photo_directory());
        assert_eq!(export_directory("/tmp/out"), PathBuf::from("/tmp/out"));
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("procam-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn create_unique_adds_suffix_and_keeps_existing_file() {
        let dir = scratch_dir("storage");
        std::fs::write(dir.join("a.jpg"), b"x").unwrap();

        let (path, _) = create_unique(&dir, "a.jpg").unwrap();
        assert_eq!(path, dir.join("a_1.jpg"));
        assert_eq!(std::fs::read(dir.join("a.jpg")).unwrap(), b"x");

        let (path, _) = create_unique(&dir, "a.jpg").unwrap();
        assert_eq!(path, dir.join("a_2.jpg"));
        let (path, _) = create_unique(&dir, "b.jpg").unwrap();
        assert_eq!(path, dir.join("b.jpg"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn recordings_in_the_same_second_get_distinct_files() {
        let dir = scratch_dir("videos");
        let at = fixed_time();

        let first = reserve_video_path(&dir, at).unwrap();
        let second = reserve_video_path(&dir, at).unwrap();
        assert_eq!(first, dir.join("VID_20240309_140507.mp4"));
        assert_eq!(second, dir.join("VID_20240309_140507_1.mp4"));
        assert!(first.exists() && second.exists());
        let _ = std::fs::remove_dir_all(&dir);
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Frame statistics used by auto flash and stabilized capture
//!
//! Both functions take tightly packed RGBA buffers and sample a sparse grid,
//! keeping them cheap enough to run on every captured frame.

/// Luma below which auto flash fires
pub const LOW_LIGHT_THRESHOLD: f32 = 0.25;

const SAMPLE_STEP: usize = 4;

fn luma(px: &[u8]) -> f32 {
    (0.2126 * px[0] as f32 + 0.7152 * px[1] as f32 + 0.0722 * px[2] as f32) / 255.0
}

/// Mean Rec. 709 luma in 0..1
///
/// Returns `None` for empty or truncated buffers.
pub fn mean_luminance(data: &[u8], width: u32, height: u32) -> Option<f32> {
    let (w, h) = (width as usize, height as usize);
    if w == 0 || h == 0 || data.len() < w * h * 4 {
        return None;
    }

    let mut sum = 0.0f64;
    let mut count = 0u64;
    for y in (0..h).step_by(SAMPLE_STEP) {
        for x in (0..w).step_by(SAMPLE_STEP) {
            let i = (y * w + x) * 4;
            sum += luma(&data[i..i + 4]) as f64;
            count += 1;
        }
    }

    Some((sum / count as f64) as f32)
}

/// Variance of the Laplacian over the luma plane; higher means sharper
pub fn sharpness(data: &[u8], width: u32, height: u32) -> f32 {
    let (w, h) = (width as usize, height as usize);
    if w < 3 || h < 3 || data.len() < w * h * 4 {
        return 0.0;
    }

    let at = |x: usize, y: usize| luma(&data[(y * w + x) * 4..(y * w + x) * 4 + 4]) * 255.0;

    let mut sum = 0.0f64;
    let mut sum_sq = 0.0f64;
    let mut count = 0u64;
    for y in (1..h - 1).step_by(2) {
        for x in (1..w - 1).step_by(2) {
            let lap = at(x - 1, y) + at(x + 1, y) + at(x, y - 1) + at(x, y + 1) - 4.0 * at(x, y);
            let lap = lap as f64;
            sum += lap;
            sum_sq += lap * lap;
            count += 1;
        }
    }

    if count == 0 {
        return 0.0;
    }
    let mean = sum / count as f64;
    (sum_sq / count as f64 - mean * mean).max(0.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(w: u32, h: u32, value: u8) -> Vec<u8> {
        (0..w * h).flat_map(|_| [value, value, value, 255]).collect()
    }

    #[test]
    fn luminance_of_solid_frames() {
        let black = solid(16, 16, 0);
        let white = solid(16, 16, 255);
        assert_eq!(mean_luminance(&black, 16, 16), Some(0.0));
        let l = mean_luminance(&white, 16, 16).unwrap_or_default();
        assert!((l - 1.0).abs() < 1e-3);
    }

    #[test]
    fn truncated_buffer_has_no_luminance() {
        assert_eq!(mean_luminance(&[0; 8], 4, 4), None);
        assert_eq!(mean_luminance(&[], 0, 0), None);
    }

    #[test]
    fn checkerboard_is_sharper_than_flat() {
        let (w, h) = (32u32, 32u32);
        let checker: Vec<u8> = (0..w * h)
            .flat_map(|i| {
                let (x, y) = (i % w, i / w);
                let v = if (x + y) % 2 == 0 { 0 } else { 255 };
                [v, v, v, 255]
            })
            .collect();
        let flat = solid(w, h, 128);
        assert!(sharpness(&checker, w, h) > sharpness(&flat, w, h));
        assert_eq!(sharpness(&flat, w, h), 0.0);
    }
}

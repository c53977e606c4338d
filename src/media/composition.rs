// SPDX-License-Identifier: GPL-3.0-only

//! Composition guides
//!
//! Guides are drawn straight into the preview pixels after cropping so they
//! line up with the framed image regardless of how the widget scales it.

use crate::fl;
use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

const THIRDS_LINE: [u8; 4] = [255, 255, 255, 77];
const THIRDS_DOT: [u8; 4] = [255, 255, 255, 128];
const GOLDEN_LINE: [u8; 4] = [255, 215, 0, 77];
const CENTER_MARK: [u8; 4] = [255, 255, 255, 77];

/// Overlay drawn on the live preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CompositionGuide {
    None,
    #[default]
    Thirds,
    Golden,
    Center,
}

impl CompositionGuide {
    pub const ALL: [CompositionGuide; 4] = [
        CompositionGuide::None,
        CompositionGuide::Thirds,
        CompositionGuide::Golden,
        CompositionGuide::Center,
    ];

    pub fn label(&self) -> String {
        match self {
            CompositionGuide::None => fl!("guide-none"),
            CompositionGuide::Thirds => fl!("guide-thirds"),
            CompositionGuide::Golden => fl!("guide-golden"),
            CompositionGuide::Center => fl!("guide-center"),
        }
    }

    /// Fractional positions of the guide lines, on both axes
    pub fn line_fractions(&self) -> &'static [f32] {
        match self {
            CompositionGuide::Thirds => &[0.3333, 0.6666],
            CompositionGuide::Golden => &[0.382, 0.618],
            CompositionGuide::None | CompositionGuide::Center => &[],
        }
    }

    /// Draw this guide onto a frame in place
    pub fn draw(&self, image: &mut RgbaImage) {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return;
        }
        let thickness = (width.min(height) / 360).max(1);

        match self {
            CompositionGuide::None => {}
            CompositionGuide::Thirds => {
                draw_grid(image, self.line_fractions(), thickness, THIRDS_LINE);
                let radius = (width.min(height) as f32 * 0.008).max(2.0);
                for fx in self.line_fractions() {
                    for fy in self.line_fractions() {
                        let cx = width as f32 * fx;
                        let cy = height as f32 * fy;
                        fill_circle(image, cx, cy, radius, THIRDS_DOT);
                    }
                }
            }
            CompositionGuide::Golden => {
                draw_grid(image, self.line_fractions(), thickness, GOLDEN_LINE);
            }
            CompositionGuide::Center => {
                let cx = width as f32 / 2.0;
                let cy = height as f32 / 2.0;
                let ring = width.min(height) as f32 * 0.06;
                stroke_circle(image, cx, cy, ring, thickness as f32 * 2.0, CENTER_MARK);

                let arm = ring / 2.0;
                let bar = (thickness * 4) as f32;
                fill_rect(image, cx - bar / 2.0, cy - arm, bar, arm * 2.0, CENTER_MARK);
                fill_rect(image, cx - arm, cy - bar / 2.0, arm * 2.0, bar, CENTER_MARK);
            }
        }
    }
}

fn draw_grid(image: &mut RgbaImage, fractions: &[f32], thickness: u32, color: [u8; 4]) {
    let (width, height) = image.dimensions();
    let t = thickness as f32;
    for fraction in fractions {
        let x = width as f32 * fraction - t / 2.0;
        fill_rect(image, x, 0.0, t, height as f32, color);
        let y = height as f32 * fraction - t / 2.0;
        fill_rect(image, 0.0, y, width as f32, t, color);
    }
}

fn fill_rect(image: &mut RgbaImage, x: f32, y: f32, w: f32, h: f32, color: [u8; 4]) {
    let (width, height) = image.dimensions();
    let x0 = x.max(0.0).round() as u32;
    let y0 = y.max(0.0).round() as u32;
    let x1 = ((x + w).round().max(0.0) as u32).min(width);
    let y1 = ((y + h).round().max(0.0) as u32).min(height);

    for py in y0..y1 {
        for px in x0..x1 {
            blend(image.get_pixel_mut(px, py), color);
        }
    }
}

fn fill_circle(image: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: [u8; 4]) {
    for_each_in_ring(image, cx, cy, 0.0, radius, color);
}

fn stroke_circle(image: &mut RgbaImage, cx: f32, cy: f32, radius: f32, width: f32, color: [u8; 4]) {
    for_each_in_ring(image, cx, cy, (radius - width).max(0.0), radius, color);
}

fn for_each_in_ring(
    image: &mut RgbaImage,
    cx: f32,
    cy: f32,
    inner: f32,
    outer: f32,
    color: [u8; 4],
) {
    let (width, height) = image.dimensions();
    let x0 = (cx - outer).floor().max(0.0) as u32;
    let y0 = (cy - outer).floor().max(0.0) as u32;
    let x1 = ((cx + outer).ceil().max(0.0) as u32).min(width);
    let y1 = ((cy + outer).ceil().max(0.0) as u32).min(height);

    for py in y0..y1 {
        for px in x0..x1 {
            let dx = px as f32 + 0.5 - cx;
            let dy = py as f32 + 0.5 - cy;
            let d = (dx * dx + dy * dy).sqrt();
            if d >= inner && d <= outer {
                blend(image.get_pixel_mut(px, py), color);
            }
        }
    }
}

/// Source-over blend of `color` onto an opaque pixel
fn blend(pixel: &mut Rgba<u8>, color: [u8; 4]) {
    let alpha = color[3] as u32;
    for c in 0..3 {
        let dst = pixel[c] as u32;
        pixel[c] = ((color[c] as u32 * alpha + dst * (255 - alpha) + 127) / 255) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([0, 0, 0, 255]))
    }

    #[test]
    fn none_draws_nothing() {
        let mut image = black(90, 60);
        CompositionGuide::None.draw(&mut image);
        assert!(image.pixels().all(|p| p.0 == [0, 0, 0, 255]));
    }

    #[test]
    fn thirds_lines_cross_at_one_third() {
        let mut image = black(300, 300);
        CompositionGuide::Thirds.draw(&mut image);
        // On the vertical line, away from the horizontal lines and dots
        assert!((98..=101).any(|x| image.get_pixel(x, 20)[0] > 0));
        // Far from any line
        assert_eq!(image.get_pixel(50, 50)[0], 0);
    }

    #[test]
    fn golden_lines_are_gold() {
        let mut image = black(1000, 1000);
        CompositionGuide::Golden.draw(&mut image);
        let px = image.get_pixel(382, 10);
        assert!(px[0] > 0 && px[1] > 0);
        assert_eq!(px[2], 0);
        assert_eq!(image.get_pixel(500, 10)[0], 0);
    }

    #[test]
    fn center_marks_the_middle() {
        let mut image = black(400, 400);
        CompositionGuide::Center.draw(&mut image);
        assert!(image.get_pixel(200, 200)[0] > 0);
        assert_eq!(image.get_pixel(10, 10)[0], 0);
    }

    #[test]
    fn guide_lines_fractions() {
        assert_eq!(CompositionGuide::Thirds.line_fractions(), &[0.3333, 0.6666]);
        assert_eq!(CompositionGuide::Golden.line_fractions(), &[0.382, 0.618]);
        assert!(CompositionGuide::Center.line_fractions().is_empty());
    }

    #[test]
    fn default_guide_is_thirds() {
        assert_eq!(CompositionGuide::default(), CompositionGuide::Thirds);
        assert_eq!(CompositionGuide::Thirds.label(), "Rule of Thirds");
    }
}

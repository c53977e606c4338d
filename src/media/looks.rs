// SPDX-License-Identifier: GPL-3.0-only

//! Filters and color grades
//!
//! Every look is a short list of color operations with CSS filter-function
//! semantics (W3C Filter Effects). Operations always run in a fixed order,
//! brightness, contrast, grayscale, hue-rotate, saturate, sepia, and the
//! result is clamped after each one. A filter runs first, then a grade.

use crate::fl;
use image::RgbaImage;
use std::fmt;
use std::str::FromStr;

/// A single color operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorOp {
    /// Multiply every channel (1.0 = unchanged)
    Brightness(f32),
    /// Scale distance from mid-gray (1.0 = unchanged)
    Contrast(f32),
    /// Blend towards luminance (0.0 = unchanged, 1.0 = gray)
    Grayscale(f32),
    /// Rotate hue by degrees
    HueRotate(f32),
    /// Saturation factor (1.0 = unchanged)
    Saturate(f32),
    /// Blend towards sepia tone (0.0 = unchanged)
    Sepia(f32),
}

impl ColorOp {
    /// Position in the fixed composition order
    pub fn rank(&self) -> u8 {
        match self {
            ColorOp::Brightness(_) => 0,
            ColorOp::Contrast(_) => 1,
            ColorOp::Grayscale(_) => 2,
            ColorOp::HueRotate(_) => 3,
            ColorOp::Saturate(_) => 4,
            ColorOp::Sepia(_) => 5,
        }
    }

    /// Affine form of the operation: `out = M * rgb + offset`, channels in 0..1
    fn matrix(&self) -> ([[f32; 3]; 3], f32) {
        match *self {
            ColorOp::Brightness(b) => ([[b, 0.0, 0.0], [0.0, b, 0.0], [0.0, 0.0, b]], 0.0),
            ColorOp::Contrast(c) => (
                [[c, 0.0, 0.0], [0.0, c, 0.0], [0.0, 0.0, c]],
                0.5 - 0.5 * c,
            ),
            ColorOp::Grayscale(amount) => {
                let a = 1.0 - amount.clamp(0.0, 1.0);
                (
                    [
                        [0.2126 + 0.7874 * a, 0.7152 - 0.7152 * a, 0.0722 - 0.0722 * a],
                        [0.2126 - 0.2126 * a, 0.7152 + 0.2848 * a, 0.0722 - 0.0722 * a],
                        [0.2126 - 0.2126 * a, 0.7152 - 0.7152 * a, 0.0722 + 0.9278 * a],
                    ],
                    0.0,
                )
            }
            ColorOp::HueRotate(degrees) => {
                let (sin, cos) = degrees.to_radians().sin_cos();
                (
                    [
                        [
                            0.213 + cos * 0.787 - sin * 0.213,
                            0.715 - cos * 0.715 - sin * 0.715,
                            0.072 - cos * 0.072 + sin * 0.928,
                        ],
                        [
                            0.213 - cos * 0.213 + sin * 0.143,
                            0.715 + cos * 0.285 + sin * 0.140,
                            0.072 - cos * 0.072 - sin * 0.283,
                        ],
                        [
                            0.213 - cos * 0.213 - sin * 0.787,
                            0.715 - cos * 0.715 + sin * 0.715,
                            0.072 + cos * 0.928 + sin * 0.072,
                        ],
                    ],
                    0.0,
                )
            }
            ColorOp::Saturate(s) => (
                [
                    [0.213 + 0.787 * s, 0.715 - 0.715 * s, 0.072 - 0.072 * s],
                    [0.213 - 0.213 * s, 0.715 + 0.285 * s, 0.072 - 0.072 * s],
                    [0.213 - 0.213 * s, 0.715 - 0.715 * s, 0.072 + 0.928 * s],
                ],
                0.0,
            ),
            ColorOp::Sepia(amount) => {
                let a = 1.0 - amount.clamp(0.0, 1.0);
                (
                    [
                        [0.393 + 0.607 * a, 0.769 - 0.769 * a, 0.189 - 0.189 * a],
                        [0.349 - 0.349 * a, 0.686 + 0.314 * a, 0.168 - 0.168 * a],
                        [0.272 - 0.272 * a, 0.534 - 0.534 * a, 0.131 + 0.869 * a],
                    ],
                    0.0,
                )
            }
        }
    }

    /// Apply to a single normalized RGB triple, clamping the result
    pub fn apply_rgb(&self, rgb: [f32; 3]) -> [f32; 3] {
        let (m, offset) = self.matrix();
        let mut out = [0.0; 3];
        for (row, value) in m.iter().zip(out.iter_mut()) {
            *value = (row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2] + offset).clamp(0.0, 1.0);
        }
        out
    }
}

/// Sort operations into the fixed composition order (stable for equal ranks)
///
/// Ops are ranked rather than kept in the order they are listed. A grade is
/// applied after the filter and layers on top of it; it never replaces the
/// filter's operations.
pub fn ordered(mut ops: Vec<ColorOp>) -> Vec<ColorOp> {
    ops.sort_by_key(ColorOp::rank);
    ops
}

/// Apply an already-ordered list of operations to an image in place
pub fn apply_ops(image: &mut RgbaImage, ops: &[ColorOp]) {
    if ops.is_empty() {
        return;
    }

    for pixel in image.pixels_mut() {
        let mut rgb = [
            pixel[0] as f32 / 255.0,
            pixel[1] as f32 / 255.0,
            pixel[2] as f32 / 255.0,
        ];
        for op in ops {
            rgb = op.apply_rgb(rgb);
        }
        pixel[0] = (rgb[0] * 255.0).round() as u8;
        pixel[1] = (rgb[1] * 255.0).round() as u8;
        pixel[2] = (rgb[2] * 255.0).round() as u8;
    }
}

/// Apply a filter followed by a color grade
pub fn apply_look(image: &mut RgbaImage, filter: Filter, grade: ColorGrade) {
    apply_ops(image, &filter.ops());
    apply_ops(image, &grade.ops());
}

/// Creative filters selectable in the editing suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    None,
    Vivid,
    Dramatic,
    Noir,
    Warm,
    Cool,
    Vintage,
    Cinematic,
}

impl Filter {
    pub const ALL: [Filter; 8] = [
        Filter::None,
        Filter::Vivid,
        Filter::Dramatic,
        Filter::Noir,
        Filter::Warm,
        Filter::Cool,
        Filter::Vintage,
        Filter::Cinematic,
    ];

    /// Identifier used on the command line and in labels
    pub fn id(&self) -> &'static str {
        match self {
            Filter::None => "none",
            Filter::Vivid => "vivid",
            Filter::Dramatic => "dramatic",
            Filter::Noir => "noir",
            Filter::Warm => "warm",
            Filter::Cool => "cool",
            Filter::Vintage => "vintage",
            Filter::Cinematic => "cinematic",
        }
    }

    /// Capitalized name shown in the editor
    pub fn label(&self) -> String {
        match self {
            Filter::None => fl!("filter-none"),
            Filter::Vivid => fl!("filter-vivid"),
            Filter::Dramatic => fl!("filter-dramatic"),
            Filter::Noir => fl!("filter-noir"),
            Filter::Warm => fl!("filter-warm"),
            Filter::Cool => fl!("filter-cool"),
            Filter::Vintage => fl!("filter-vintage"),
            Filter::Cinematic => fl!("filter-cinematic"),
        }
    }

    /// Color operations for this filter, in composition order
    pub fn ops(&self) -> Vec<ColorOp> {
        use ColorOp::*;
        ordered(match self {
            Filter::None => vec![],
            Filter::Vivid => vec![Saturate(1.5), Contrast(1.1)],
            Filter::Dramatic => vec![Contrast(1.25), Brightness(0.9)],
            Filter::Noir => vec![Grayscale(1.0), Contrast(1.5)],
            Filter::Warm => vec![Sepia(0.5), Saturate(1.25)],
            Filter::Cool => vec![HueRotate(15.0), Saturate(1.1)],
            Filter::Vintage => vec![Sepia(0.75), Contrast(0.9), Brightness(1.05)],
            Filter::Cinematic => vec![Contrast(1.1), Saturate(0.9), Brightness(0.95)],
        })
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Filter::ALL
            .into_iter()
            .find(|filter| filter.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown filter '{}'", s))
    }
}

/// Color grades layered on top of a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorGrade {
    #[default]
    None,
    Film,
    TealOrange,
    Moody,
    Bright,
    Desaturate,
}

impl ColorGrade {
    pub const ALL: [ColorGrade; 6] = [
        ColorGrade::None,
        ColorGrade::Film,
        ColorGrade::TealOrange,
        ColorGrade::Moody,
        ColorGrade::Bright,
        ColorGrade::Desaturate,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ColorGrade::None => "none",
            ColorGrade::Film => "film",
            ColorGrade::TealOrange => "teal-orange",
            ColorGrade::Moody => "moody",
            ColorGrade::Bright => "bright",
            ColorGrade::Desaturate => "desaturate",
        }
    }

    pub fn label(&self) -> String {
        match self {
            ColorGrade::None => fl!("grade-none"),
            ColorGrade::Film => fl!("grade-film"),
            ColorGrade::TealOrange => fl!("grade-teal-orange"),
            ColorGrade::Moody => fl!("grade-moody"),
            ColorGrade::Bright => fl!("grade-bright"),
            ColorGrade::Desaturate => fl!("grade-desaturate"),
        }
    }

    pub fn ops(&self) -> Vec<ColorOp> {
        use ColorOp::*;
        ordered(match self {
            ColorGrade::None => vec![],
            ColorGrade::Film => vec![Contrast(1.1), Brightness(0.95)],
            ColorGrade::TealOrange => vec![Contrast(1.15)],
            ColorGrade::Moody => vec![Brightness(0.85), Contrast(1.2)],
            ColorGrade::Bright => vec![Brightness(1.15), Saturate(1.1)],
            ColorGrade::Desaturate => vec![Saturate(0.6)],
        })
    }
}

impl fmt::Display for ColorGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ColorGrade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorGrade::ALL
            .into_iter()
            .find(|grade| grade.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown color grade '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-3)
    }

    #[test]
    fn ops_are_ranked_not_listed_order() {
        use ColorOp::*;
        assert_eq!(
            ordered(vec![Sepia(0.5), Contrast(1.2), Brightness(0.9)]),
            vec![Brightness(0.9), Contrast(1.2), Sepia(0.5)]
        );
    }

    #[test]
    fn grade_layers_on_top_of_filter() {
        let source = RgbaImage::from_pixel(1, 1, image::Rgba([120, 60, 30, 255]));

        let mut noir = source.clone();
        apply_look(&mut noir, Filter::Noir, ColorGrade::None);
        let mut graded = source.clone();
        apply_look(&mut graded, Filter::Noir, ColorGrade::Bright);

        let [r, g, b, _] = graded.get_pixel(0, 0).0;
        assert!(r.abs_diff(g) <= 1 && g.abs_diff(b) <= 1, "filter lost: {:?}", (r, g, b));
        assert!(r > noir.get_pixel(0, 0)[0]);
    }

    #[test]
    fn identity_amounts_leave_colors_untouched() {
        let rgb = [0.2, 0.5, 0.8];
        assert!(approx(ColorOp::Brightness(1.0).apply_rgb(rgb), rgb));
        assert!(approx(ColorOp::Contrast(1.0).apply_rgb(rgb), rgb));
        assert!(approx(ColorOp::Grayscale(0.0).apply_rgb(rgb), rgb));
        assert!(approx(ColorOp::HueRotate(0.0).apply_rgb(rgb), rgb));
        assert!(approx(ColorOp::Saturate(1.0).apply_rgb(rgb), rgb));
        assert!(approx(ColorOp::Sepia(0.0).apply_rgb(rgb), rgb));
    }

    #[test]
    fn full_grayscale_produces_equal_channels() {
        let out = ColorOp::Grayscale(1.0).apply_rgb([0.9, 0.1, 0.3]);
        assert!((out[0] - out[1]).abs() < 1e-4);
        assert!((out[1] - out[2]).abs() < 1e-4);
    }

    #[test]
    fn contrast_pivots_on_mid_gray() {
        let out = ColorOp::Contrast(1.5).apply_rgb([0.5, 0.5, 0.5]);
        assert!(approx(out, [0.5, 0.5, 0.5]));
        let dark = ColorOp::Contrast(1.5).apply_rgb([0.2, 0.2, 0.2]);
        assert!(dark[0] < 0.2);
    }

    #[test]
    fn results_are_clamped() {
        let out = ColorOp::Brightness(3.0).apply_rgb([0.9, 0.9, 0.9]);
        assert_eq!(out, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn filter_ops_follow_composition_order() {
        let ops = Filter::Vintage.ops();
        assert_eq!(
            ops,
            vec![
                ColorOp::Brightness(1.05),
                ColorOp::Contrast(0.9),
                ColorOp::Sepia(0.75)
            ]
        );
        for filter in Filter::ALL {
            let ranks: Vec<u8> = filter.ops().iter().map(ColorOp::rank).collect();
            assert!(ranks.windows(2).all(|w| w[0] <= w[1]), "{filter} out of order");
        }
    }

    #[test]
    fn noir_yields_monochrome_pixels() {
        let mut image = RgbaImage::from_pixel(4, 4, image::Rgba([200, 40, 90, 255]));
        apply_look(&mut image, Filter::Noir, ColorGrade::None);
        let px = image.get_pixel(0, 0);
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
        assert_eq!(px[3], 255);
    }

    #[test]
    fn none_look_is_a_no_op() {
        let mut image = RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 255]));
        let original = image.clone();
        apply_look(&mut image, Filter::None, ColorGrade::None);
        assert_eq!(image, original);
    }

    #[test]
    fn labels_are_capitalized_names() {
        assert_eq!(Filter::Vintage.label(), "Vintage");
        assert_eq!(Filter::None.label(), "None");
        assert_eq!(ColorGrade::TealOrange.label(), "Teal Orange");
        assert_eq!(ColorGrade::Film.label(), "Film");
        for filter in Filter::ALL {
            assert_ne!(filter.label(), filter.id());
        }
    }

    #[test]
    fn looks_parse_from_identifiers() {
        assert_eq!("Cinematic".parse::<Filter>(), Ok(Filter::Cinematic));
        assert_eq!("teal-orange".parse::<ColorGrade>(), Ok(ColorGrade::TealOrange));
        assert!("sparkle".parse::<Filter>().is_err());
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Media list, looks and framing

use image::{Rgba, RgbaImage};
use procam::media::{AspectRatio, CapturedMedia, ColorGrade, Filter, MediaLibrary};
use procam::pipelines::photo::render_look;

fn capture(color: [u8; 4]) -> CapturedMedia {
    CapturedMedia::new(RgbaImage::from_pixel(32, 18, Rgba(color)), vec![0xFF, 0xD8])
}

#[test]
fn test_each_capture_appends_one_entry() {
    let mut library = MediaLibrary::new();
    assert!(library.is_empty());

    assert_eq!(library.push(capture([10, 20, 30, 255])), 0);
    assert_eq!(library.push(capture([40, 50, 60, 255])), 1);
    assert_eq!(library.len(), 2);
    assert_ne!(library.items()[0].id, library.items()[1].id);
}

#[test]
fn test_selection_is_clamped() {
    let mut library = MediaLibrary::new();
    library.push(capture([0, 0, 0, 255]));
    library.push(capture([255, 255, 255, 255]));

    library.select(7);
    assert_eq!(library.selected_index(), 1);
    library.select(0);
    assert!(library.selected().is_some());
}

#[test]
fn test_noir_is_gray() {
    let source = RgbaImage::from_pixel(16, 9, Rgba([200, 40, 40, 255]));
    let out = render_look(&source, Filter::Noir, ColorGrade::None, AspectRatio::Widescreen);
    let px = out.get_pixel(8, 4);
    assert_eq!(px[0], px[1]);
    assert_eq!(px[1], px[2]);
}

#[test]
fn test_no_look_keeps_pixels() {
    let source = RgbaImage::from_pixel(16, 9, Rgba([90, 120, 150, 255]));
    let out = render_look(&source, Filter::None, ColorGrade::None, AspectRatio::Widescreen);
    assert_eq!(out, source);
}

#[test]
fn test_square_crop_is_centered() {
    assert_eq!(AspectRatio::Square.crop_rect(1920, 1080), (420, 0, 1080, 1080));
    let out = render_look(
        &RgbaImage::new(160, 90),
        Filter::None,
        ColorGrade::None,
        AspectRatio::Square,
    );
    assert_eq!(out.dimensions(), (90, 90));
}

#[test]
fn test_look_ids_parse() {
    for filter in Filter::ALL {
        assert_eq!(filter.id().parse::<Filter>(), Ok(filter));
    }
    for grade in ColorGrade::ALL {
        assert_eq!(grade.id().parse::<ColorGrade>(), Ok(grade));
    }
}

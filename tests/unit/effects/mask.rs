use image::Rgba;

use super::*;

fn opaque(w: u32, h: u32) -> Layer {
    Layer::from_fn(w, h, |x, y| Rgba([(x % 256) as u8, (y % 256) as u8, 90, 255]))
}

#[test]
fn radius_formula_matches_slider_scale() {
    assert_eq!(corner_radius_px(1000, 8.0), 32.0);
    assert_eq!(corner_radius_px(500, 0.0), 0.0);
}

#[test]
fn corners_become_transparent() {
    let src = opaque(100, 60);
    let out = round_corners(&src, 20.0);
    for (x, y) in [(0, 0), (99, 0), (0, 59), (99, 59), (2, 3), (96, 57)] {
        assert_eq!(out.get_pixel(x, y).0, [0, 0, 0, 0], "({x},{y})");
    }
}

#[test]
fn interior_is_pixel_identical() {
    let src = opaque(100, 60);
    let out = round_corners(&src, 20.0);
    for (x, y) in [(50, 30), (20, 0), (0, 20), (99, 30), (50, 59), (80, 40)] {
        assert_eq!(out.get_pixel(x, y), src.get_pixel(x, y), "({x},{y})");
    }
}

#[test]
fn mask_and_output_agree_everywhere() {
    let src = opaque(64, 48);
    let radius = corner_radius_px(64, 12.0);
    let mask = rounded_rect_mask(64, 48, radius);
    let out = round_corners(&src, radius);
    for (x, y, m) in mask.enumerate_pixels() {
        if m.0[0] == 255 {
            assert_eq!(out.get_pixel(x, y), src.get_pixel(x, y));
        } else {
            assert_eq!(out.get_pixel(x, y).0[3], 0);
        }
    }
}

#[test]
fn zero_radius_keeps_everything() {
    let src = opaque(10, 10);
    assert_eq!(round_corners(&src, 0.0), src);
}

#[test]
fn huge_radius_is_clamped_to_a_stadium() {
    let src = opaque(40, 20);
    let out = round_corners(&src, 1000.0);
    // Middle column fully kept, corners cut.
    assert_eq!(out.get_pixel(20, 0), src.get_pixel(20, 0));
    assert_eq!(out.get_pixel(20, 19), src.get_pixel(20, 19));
    assert_eq!(out.get_pixel(0, 0).0[3], 0);
    assert_eq!(out.get_pixel(10, 10), src.get_pixel(10, 10));
}

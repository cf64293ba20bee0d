use image::{DynamicImage, Rgba, RgbImage};

use super::*;

fn gradient(w: u32, h: u32) -> Layer {
    Layer::from_fn(w, h, |x, y| {
        Rgba([
            (x * 30) as u8,
            (y * 40) as u8,
            ((x + y) * 10) as u8,
            ((x * 50 + y * 7) % 256) as u8,
        ])
    })
}

#[test]
fn alpha_factor_one_is_identity() {
    let src = gradient(6, 5);
    assert_eq!(adjust_alpha(src.clone(), 1.0), src);
}

#[test]
fn alpha_factor_zero_is_fully_transparent() {
    let out = adjust_alpha(gradient(6, 5), 0.0);
    assert!(out.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn alpha_is_clamped_and_colour_untouched() {
    let src = gradient(6, 5);
    let out = adjust_alpha(src.clone(), 2.0);
    for (a, b) in src.pixels().zip(out.pixels()) {
        assert_eq!(&a.0[..3], &b.0[..3]);
        assert_eq!(u32::from(b.0[3]), (u32::from(a.0[3]) * 2).min(255));
    }
}

#[test]
fn alpha_half_truncates() {
    let src = Layer::from_pixel(1, 1, Rgba([9, 9, 9, 255]));
    assert_eq!(adjust_alpha(src, 0.5).get_pixel(0, 0).0[3], 127);
}

#[test]
fn exposure_scales_and_is_opaque() {
    let mut rgb = RgbImage::new(2, 1);
    rgb.put_pixel(0, 0, image::Rgb([100, 200, 255]));
    rgb.put_pixel(1, 0, image::Rgb([0, 1, 3]));
    let out = adjust_exposure(&DynamicImage::ImageRgb8(rgb), 0.4);
    assert_eq!(out.get_pixel(0, 0).0, [40, 80, 102, 255]);
    assert_eq!(out.get_pixel(1, 0).0, [0, 0, 1, 255]);
}

#[test]
fn exposure_saturates() {
    let rgb = RgbImage::from_pixel(1, 1, image::Rgb([200, 100, 10]));
    let out = adjust_exposure(&DynamicImage::ImageRgb8(rgb), 2.0);
    assert_eq!(out.get_pixel(0, 0).0, [255, 200, 20, 255]);
}

#[test]
fn exposure_drops_alpha() {
    let rgba = Layer::from_pixel(1, 1, Rgba([10, 20, 30, 0]));
    let out = adjust_exposure(&DynamicImage::ImageRgba8(rgba), 1.0);
    assert_eq!(out.get_pixel(0, 0).0, [10, 20, 30, 255]);
}

#[test]
fn contrast_one_is_identity() {
    let src = gradient(4, 4);
    assert_eq!(enhance_contrast(src.clone(), 1.0), src);
}

#[test]
fn contrast_zero_collapses_to_opaque_mean_grey() {
    let mut src = Layer::new(2, 1);
    src.put_pixel(0, 0, Rgba([0, 0, 0, 10]));
    src.put_pixel(1, 0, Rgba([255, 255, 255, 200]));
    let out = enhance_contrast(src, 0.0);
    // L = 0 and 255; mean 127.5 rounds to 128.
    assert_eq!(out.get_pixel(0, 0).0, [128, 128, 128, 255]);
    assert_eq!(out.get_pixel(1, 0).0, [128, 128, 128, 255]);
}

#[test]
fn contrast_pulls_alpha_toward_opaque() {
    let src = Layer::from_pixel(1, 1, Rgba([50, 50, 50, 55]));
    // 255 + 0.5 * (55 - 255) = 155
    assert_eq!(enhance_contrast(src.clone(), 0.5).get_pixel(0, 0).0[3], 155);
    // 255 + 2 * (55 - 255) clamps to 0
    assert_eq!(enhance_contrast(src, 2.0).get_pixel(0, 0).0[3], 0);
}

#[test]
fn contrast_above_one_spreads_values() {
    let mut src = Layer::new(2, 1);
    src.put_pixel(0, 0, Rgba([100, 100, 100, 255]));
    src.put_pixel(1, 0, Rgba([150, 150, 150, 255]));
    let out = enhance_contrast(src, 2.0);
    assert!(out.get_pixel(0, 0).0[0] < 100);
    assert!(out.get_pixel(1, 0).0[0] > 150);
}

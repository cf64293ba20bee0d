use image::Rgba;

use super::*;

fn params(scale: f64, alpha: f32) -> BackdropParams {
    BackdropParams {
        scale_factor: scale,
        contrast_factor: 1.0,
        alpha_factor: alpha,
        blur_radius: 3.0,
    }
}

#[test]
fn output_is_enlarged_size_without_crop() {
    let src = Layer::from_pixel(40, 20, Rgba([50, 60, 70, 255]));
    let out = create_blurred_background(&src, params(1.25, 1.0)).unwrap();
    assert_eq!(out.dimensions(), (50, 25));
    assert_eq!(enlarged_size(1000, 1000, 1.25), (1250, 1250));
    assert_eq!(enlarged_size(33, 10, 1.5), (49, 15));
}

#[test]
fn uniform_source_stays_uniform_and_alpha_scales() {
    let src = Layer::from_pixel(16, 16, Rgba([50, 60, 70, 255]));
    let out = create_blurred_background(&src, params(1.5, 0.5)).unwrap();
    for p in out.pixels() {
        assert_eq!(p.0, [50, 60, 70, 127]);
    }
}

#[test]
fn blur_smooths_a_hard_edge() {
    let src = Layer::from_fn(20, 20, |x, _| {
        if x < 10 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    });
    let out = create_blurred_background(&src, params(1.0, 1.0)).unwrap();
    let mid = out.get_pixel(10, 10).0[0];
    assert!(mid > 20 && mid < 235, "mid={mid}");
}

#[test]
fn rejects_degenerate_scale() {
    let src = Layer::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
    assert!(create_blurred_background(&src, params(0.0, 1.0)).is_err());
    assert!(create_blurred_background(&src, params(0.1, 1.0)).is_err());
}

use image::Rgba;

use super::*;

#[test]
fn blur_radius_0_is_identity() {
    let src = Layer::from_fn(3, 2, |x, y| Rgba([x as u8, y as u8, 7, 200]));
    let out = gaussian_blur(src.clone(), 0.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn blur_constant_image_is_identity() {
    let src = Layer::from_pixel(9, 7, Rgba([10, 20, 30, 40]));
    let out = gaussian_blur(src.clone(), 4.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn blur_radius_larger_than_image_is_stable() {
    let src = Layer::from_pixel(4, 3, Rgba([200, 100, 50, 255]));
    let out = gaussian_blur(src.clone(), 50.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn blur_spreads_energy_from_single_pixel() {
    let mut src = Layer::new(21, 21);
    src.put_pixel(10, 10, Rgba([255, 255, 255, 255]));

    let out = gaussian_blur(src, 2.0).unwrap();

    let nonzero = out.pixels().filter(|px| px.0[3] != 0).count();
    assert!(nonzero > 1);

    let sum_a: u32 = out.pixels().map(|px| u32::from(px.0[3])).sum();
    assert!((sum_a as i32 - 255).abs() <= 40, "sum_a = {sum_a}");

    // Symmetric around the centre, up to rounding.
    let l = i32::from(out.get_pixel(8, 10).0[3]);
    let r = i32::from(out.get_pixel(12, 10).0[3]);
    assert!((l - r).abs() <= 1);
    let t = i32::from(out.get_pixel(10, 8).0[3]);
    let b = i32::from(out.get_pixel(10, 12).0[3]);
    assert!((t - b).abs() <= 1);
}

#[test]
fn blur_rejects_bad_radius() {
    let src = Layer::new(1, 1);
    assert!(gaussian_blur(src.clone(), -1.0).is_err());
    assert!(gaussian_blur(src, f32::NAN).is_err());
}

#[test]
fn extended_box_radius_matches_variance() {
    // Box of integer half-width l plus edge weight a has variance
    // (l(l+1)(2l+1)/3 + 2a(l+1)^2) / (2l+1+2a); three passes add up.
    for sigma in [1.0f64, 2.5, 15.0, 50.0] {
        let r = f64::from(extended_box_radius(sigma as f32, 3));
        assert!(r >= 0.0);
        let l = r.floor();
        let a = r - l;
        let var = (l * (l + 1.0) * (2.0 * l + 1.0) / 3.0 + 2.0 * a * (l + 1.0).powi(2))
            / (2.0 * l + 1.0 + 2.0 * a);
        let total = 3.0 * var;
        assert!(
            (total - sigma * sigma).abs() / (sigma * sigma) < 1e-3,
            "sigma={sigma} r={r} total={total}"
        );
    }
}

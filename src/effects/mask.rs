use kurbo::Shape as _;

use crate::foundation::core::{Layer, Point, RoundedRect};

/// Corner radius in pixels for a given image width and radius coefficient (0..=20 slider).
pub fn corner_radius_px(image_width: u32, coefficient: f64) -> f64 {
    f64::from(image_width) / 50.0 * coefficient / 5.0
}

/// Single-channel coverage mask of a rounded rectangle spanning `[0, 0, width, height]`.
///
/// A pixel is inside (255) when its centre lies in the shape, outside (0) otherwise. The radius is
/// clamped to half the shorter side.
pub fn rounded_rect_mask(width: u32, height: u32, radius: f64) -> image::GrayImage {
    let shape = RoundedRect::new(
        0.0,
        0.0,
        f64::from(width),
        f64::from(height),
        radius.max(0.0),
    );
    image::GrayImage::from_fn(width, height, |x, y| {
        let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
        image::Luma([if shape.contains(center) { 255 } else { 0 }])
    })
}

/// Clip `layer` to a rounded rectangle of the given radius.
///
/// Pixels outside the mask become fully transparent; pixels inside are copied unchanged.
pub fn round_corners(layer: &Layer, radius: f64) -> Layer {
    let (w, h) = layer.dimensions();
    let mask = rounded_rect_mask(w, h, radius);
    let mut out = Layer::new(w, h);
    for ((dst, src), m) in out.pixels_mut().zip(layer.pixels()).zip(mask.pixels()) {
        if m.0[0] == 255 {
            *dst = *src;
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/effects/mask.rs"]
mod tests;

use image::DynamicImage;

use crate::foundation::core::Layer;

/// Multiply every pixel's alpha by `factor`, clamped to `[0, 255]`.
///
/// Colour channels are untouched. Non-finite or negative factors behave as `0.0`.
pub fn adjust_alpha(mut layer: Layer, factor: f32) -> Layer {
    let factor = if factor.is_finite() { factor.max(0.0) } else { 0.0 };
    if factor == 1.0 {
        return layer;
    }
    for px in layer.pixels_mut() {
        px.0[3] = scale_u8_trunc(px.0[3], factor);
    }
    layer
}

/// Linear exposure scaling: `clamp(round(c * factor), 0, 255)` on the colour channels.
///
/// The conversion goes through a 3-channel buffer, so the result is always opaque.
pub fn adjust_exposure(image: &DynamicImage, factor: f32) -> Layer {
    let factor = if factor.is_finite() { factor.max(0.0) } else { 0.0 };
    let rgb = image.to_rgb8();
    let (w, h) = rgb.dimensions();
    let mut out = Layer::new(w, h);
    for (dst, src) in out.pixels_mut().zip(rgb.pixels()) {
        // Per-channel scale: identical in BGR and RGB order.
        let [r, g, b] = src.0;
        dst.0 = [
            scale_u8_round(r, factor),
            scale_u8_round(g, factor),
            scale_u8_round(b, factor),
            255,
        ];
    }
    out
}

/// Contrast enhancement against the image's mean luminance.
///
/// The layer is blended against an opaque grey of its mean luminance: each colour channel becomes
/// `mean + factor * (c - mean)` and alpha becomes `255 + factor * (a - 255)`. `1.0` is identity.
pub fn enhance_contrast(mut layer: Layer, factor: f32) -> Layer {
    if factor == 1.0 || layer.width() == 0 || layer.height() == 0 {
        return layer;
    }
    let mean = f32::from(mean_luma(&layer));
    let degenerate = [mean, mean, mean, 255.0];
    for px in layer.pixels_mut() {
        for (c, base) in px.0.iter_mut().zip(degenerate) {
            let v = base + factor * (f32::from(*c) - base);
            *c = v.round().clamp(0.0, 255.0) as u8;
        }
    }
    layer
}

/// Rounded mean of `L = (299 R + 587 G + 114 B) / 1000` over all pixels.
fn mean_luma(layer: &Layer) -> u8 {
    let mut sum: u64 = 0;
    for px in layer.pixels() {
        let [r, g, b, _] = px.0;
        let l = (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000;
        sum += u64::from(l);
    }
    let n = u64::from(layer.width()) * u64::from(layer.height());
    ((sum as f64 / n as f64) + 0.5).floor().min(255.0) as u8
}

fn scale_u8_trunc(v: u8, factor: f32) -> u8 {
    (f32::from(v) * factor).clamp(0.0, 255.0) as u8
}

fn scale_u8_round(v: u8, factor: f32) -> u8 {
    (f32::from(v) * factor).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/effects/adjust.rs"]
mod tests;

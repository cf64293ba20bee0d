use crate::foundation::core::{Layer, PixelPos};

/// Straight (non-premultiplied) RGBA8 pixel.
pub type StraightRgba8 = [u8; 4];

/// Source-over of straight-alpha pixels, with `src`'s own alpha as the mask.
pub fn over(dst: StraightRgba8, src: StraightRgba8) -> StraightRgba8 {
    let sa = u32::from(src[3]);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let da = mul_div255(u32::from(dst[3]), 255 - sa);
    let oa = sa + da;

    let mut out = [0u8; 4];
    out[3] = oa.min(255) as u8;
    for i in 0..3 {
        let c = u32::from(src[i]) * sa + u32::from(dst[i]) * da;
        out[i] = ((c + oa / 2) / oa).min(255) as u8;
    }
    out
}

/// Paste `src` onto `dst` with its top-left corner at `at`, clipping to `dst`.
///
/// Transparent source pixels leave the destination untouched.
pub fn paste_over(dst: &mut Layer, src: &Layer, at: PixelPos) {
    let (dw, dh) = (i64::from(dst.width()), i64::from(dst.height()));
    let (sw, sh) = (i64::from(src.width()), i64::from(src.height()));

    let x0 = at.x.max(0);
    let y0 = at.y.max(0);
    let x1 = (at.x + sw).min(dw);
    let y1 = (at.y + sh).min(dh);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    for y in y0..y1 {
        for x in x0..x1 {
            let s = src.get_pixel((x - at.x) as u32, (y - at.y) as u32).0;
            let d = dst.get_pixel_mut(x as u32, y as u32);
            d.0 = over(d.0, s);
        }
    }
}

/// Blend a solid `color` into `dst` at one pixel with fractional `coverage` in `[0, 1]`.
///
/// Out-of-bounds coordinates are ignored.
pub fn blend_coverage(dst: &mut Layer, x: i64, y: i64, color: StraightRgba8, coverage: f32) {
    if x < 0 || y < 0 || x >= i64::from(dst.width()) || y >= i64::from(dst.height()) {
        return;
    }
    let cov = coverage.clamp(0.0, 1.0);
    let a = (f32::from(color[3]) * cov).round() as u8;
    if a == 0 {
        return;
    }
    let d = dst.get_pixel_mut(x as u32, y as u32);
    d.0 = over(d.0, [color[0], color[1], color[2], a]);
}

fn mul_div255(x: u32, y: u32) -> u32 {
    (x * y + 127) / 255
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;

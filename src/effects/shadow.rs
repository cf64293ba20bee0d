use kurbo::Shape as _;

use crate::{
    effects::{adjust::adjust_alpha, blur::gaussian_blur, mask::corner_radius_px},
    foundation::{
        core::{Layer, Point, RoundedRect},
        error::BirdcardResult,
    },
};

/// Blur applied to every drop shadow.
pub const SHADOW_BLUR_RADIUS: f32 = 15.0;

/// Shadow layer size: 110% of the foreground, rounded to whole pixels.
pub fn shadow_size(fg_width: u32, fg_height: u32) -> (u32, u32) {
    let grow = |v: u32| (f64::from(v) * 1.1).round() as u32;
    (grow(fg_width), grow(fg_height))
}

/// Soft drop shadow for `foreground`.
///
/// A solid black rounded rectangle the size of the foreground is centred in a transparent layer
/// of [`shadow_size`], blurred by [`SHADOW_BLUR_RADIUS`] and alpha-scaled by `opacity`.
pub fn create_shadow(
    foreground: &Layer,
    corner_coefficient: f64,
    opacity: f32,
) -> BirdcardResult<Layer> {
    let (fw, fh) = foreground.dimensions();
    let (sw, sh) = shadow_size(fw, fh);

    let (cx, cy) = (f64::from(sw) / 2.0, f64::from(sh) / 2.0);
    let (hw, hh) = (f64::from(fw) / 2.0, f64::from(fh) / 2.0);
    let shape = RoundedRect::new(
        cx - hw,
        cy - hh,
        cx + hw,
        cy + hh,
        corner_radius_px(fw, corner_coefficient).max(0.0),
    );

    let shadow = Layer::from_fn(sw, sh, |x, y| {
        let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
        if shape.contains(center) {
            image::Rgba([0, 0, 0, 255])
        } else {
            image::Rgba([0, 0, 0, 0])
        }
    });

    let shadow = gaussian_blur(shadow, SHADOW_BLUR_RADIUS)?;
    Ok(adjust_alpha(shadow, opacity))
}

#[cfg(test)]
#[path = "../../tests/unit/effects/shadow.rs"]
mod tests;

use image::imageops::{self, FilterType};

use crate::{
    effects::{
        adjust::{adjust_alpha, enhance_contrast},
        blur::gaussian_blur,
    },
    foundation::{
        core::Layer,
        error::{BirdcardError, BirdcardResult},
    },
};

/// Knobs for [`create_blurred_background`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackdropParams {
    /// Enlargement factor (>= 1).
    pub scale_factor: f64,
    /// Contrast enhancement factor (1.0 = unchanged).
    pub contrast_factor: f32,
    /// Uniform alpha multiplier.
    pub alpha_factor: f32,
    /// Gaussian blur standard deviation in pixels.
    pub blur_radius: f32,
}

/// Enlarged size: `trunc(w * scale) x trunc(h * scale)`.
pub fn enlarged_size(width: u32, height: u32, scale_factor: f64) -> (u32, u32) {
    (
        (f64::from(width) * scale_factor) as u32,
        (f64::from(height) * scale_factor) as u32,
    )
}

/// Enlarge, blur, contrast-adjust and alpha-scale `source` into a backdrop.
///
/// Output size is the enlarged size; no crop back to the source size is performed.
#[tracing::instrument(skip(source))]
pub fn create_blurred_background(source: &Layer, params: BackdropParams) -> BirdcardResult<Layer> {
    if !params.scale_factor.is_finite() || params.scale_factor <= 0.0 {
        return Err(BirdcardError::validation("scale factor must be > 0"));
    }
    let (w, h) = source.dimensions();
    let (ew, eh) = enlarged_size(w, h, params.scale_factor);
    if ew == 0 || eh == 0 {
        return Err(BirdcardError::image(format!(
            "backdrop of {w}x{h} scaled by {} is empty",
            params.scale_factor
        )));
    }

    let enlarged = imageops::resize(source, ew, eh, FilterType::CatmullRom);
    let blurred = gaussian_blur(enlarged, params.blur_radius)?;
    let contrasted = enhance_contrast(blurred, params.contrast_factor);
    Ok(adjust_alpha(contrasted, params.alpha_factor))
}

#[cfg(test)]
#[path = "../../tests/unit/effects/background.rs"]
mod tests;

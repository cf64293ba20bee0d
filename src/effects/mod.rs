//! Pixel-level image utilities used by the compositor.

/// Alpha, exposure and contrast adjustments.
pub mod adjust;
/// Blurred, enlarged backdrop.
pub mod background;
/// Gaussian blur.
pub mod blur;
/// Straight-alpha source-over and clipped paste.
pub mod composite;
/// Rounded-corner masking.
pub mod mask;
/// Drop shadow generation.
pub mod shadow;

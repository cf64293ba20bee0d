use image::imageops::{self, FilterType};
use qrcode::{Color, EcLevel, QrCode};

use crate::foundation::{
    core::Layer,
    error::{BirdcardError, BirdcardResult},
};

/// Pixels per module before scaling.
pub const MODULE_PX: u32 = 10;
/// Quiet-zone width in modules.
pub const QUIET_ZONE: u32 = 4;

const DARK: image::Rgba<u8> = image::Rgba([0, 0, 0, 255]);
const LIGHT: image::Rgba<u8> = image::Rgba([255, 255, 255, 255]);

/// Encode `data` as a black-on-white QR code (error correction H), scaled to `size` x `size`.
pub fn generate_qr(data: &str, size: u32) -> BirdcardResult<Layer> {
    if data.trim().is_empty() {
        return Err(BirdcardError::qr("nothing to encode"));
    }
    if size == 0 {
        return Err(BirdcardError::qr("QR size must be > 0"));
    }

    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::H)
        .map_err(|e| BirdcardError::qr(format!("encode '{data}': {e}")))?;
    let modules = code.to_colors();
    let n = code.width() as u32;
    let side = (n + 2 * QUIET_ZONE) * MODULE_PX;

    let native = Layer::from_fn(side, side, |x, y| {
        let (mx, my) = (x / MODULE_PX, y / MODULE_PX);
        if mx < QUIET_ZONE || my < QUIET_ZONE {
            return LIGHT;
        }
        let (mx, my) = (mx - QUIET_ZONE, my - QUIET_ZONE);
        if mx >= n || my >= n {
            return LIGHT;
        }
        match modules[(my * n + mx) as usize] {
            Color::Dark => DARK,
            Color::Light => LIGHT,
        }
    });

    if size == side {
        return Ok(native);
    }
    Ok(imageops::resize(&native, size, size, FilterType::Nearest))
}

#[cfg(test)]
#[path = "../../tests/unit/qr/code.rs"]
mod tests;

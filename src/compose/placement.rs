use crate::foundation::core::PixelPos;

/// Inset of the QR code from the bottom-right corner.
pub const QR_MARGIN: i64 = 10;
/// QR side as a fraction of the shorter background edge.
pub const QR_FRACTION: f64 = 0.15;

/// Where each layer lands on the background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Top-left of the rounded photo.
    pub foreground: PixelPos,
    /// Top-left of the shadow layer.
    pub shadow: PixelPos,
}

impl Placement {
    /// Foreground is centred horizontally and sits at half the vertical centring offset.
    /// The shadow is centred for a 110% layer, then shifted by `offset_x` percent of the
    /// foreground width and raised by `offset_y` percent of the background height before the
    /// same vertical halving.
    pub fn compute(
        background: (u32, u32),
        foreground: (u32, u32),
        offset_x: f64,
        offset_y: f64,
    ) -> Self {
        let (bw, bh) = (i64::from(background.0), i64::from(background.1));
        let (fw, fh) = (i64::from(foreground.0), i64::from(foreground.1));

        let fg = PixelPos::new(
            (bw - fw).div_euclid(2),
            ((bh - fh).div_euclid(2) as f64 * 0.5) as i64,
        );

        let (bw, bh) = (bw as f64, bh as f64);
        let (fw, fh) = (fw as f64, fh as f64);
        let sx = ((bw - fw * 1.1) / 2.0).floor() + fw * offset_x / 100.0;
        let sy = (((bh - fh * 1.1) / 2.0).floor() - bh * offset_y / 100.0) * 0.5;

        Self {
            foreground: fg,
            shadow: PixelPos::new(sx as i64, sy as i64),
        }
    }
}

/// QR side length for a background.
pub fn qr_size(background: (u32, u32)) -> u32 {
    let (w, h) = (f64::from(background.0), f64::from(background.1));
    (w * QR_FRACTION).min(h * QR_FRACTION).floor() as u32
}

/// Top-left of a `size` QR code inset from the bottom-right corner.
pub fn qr_origin(background: (u32, u32), size: u32) -> PixelPos {
    let s = i64::from(size);
    PixelPos::new(
        i64::from(background.0) - s - QR_MARGIN,
        i64::from(background.1) - s - QR_MARGIN,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/compose/placement.rs"]
mod tests;

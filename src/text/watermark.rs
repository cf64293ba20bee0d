use chrono::NaiveDate;

use crate::{
    foundation::core::{Layer, TextBox},
    text::{
        fonts::FontPair,
        render::{LineAnchor, TextStyle, draw_mixed_text},
        script::normalize_spacing,
    },
};

/// Separator between order and family on the first line.
pub const TAXON_SEPARATOR: &str = "———";
/// Gap between the place and the date on the third line.
pub const DATE_GAP: &str = "    ";

/// The fields printed on a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WatermarkText {
    /// Taxonomic order.
    pub order: String,
    /// Taxonomic family.
    pub family: String,
    /// Species name.
    pub species: String,
    /// Photographer credit, printed directly before the location.
    pub author: String,
    /// Where the photo was taken.
    pub location: String,
    /// When the photo was taken.
    pub date: NaiveDate,
}

impl WatermarkText {
    /// The three lines, top to bottom.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("{}{TAXON_SEPARATOR}{}", self.order, self.family),
            normalize_spacing(&self.species),
            format!(
                "{}{}{DATE_GAP}{}",
                self.author,
                self.location,
                self.date.format("%Y.%m.%d")
            ),
        ]
    }
}

/// Watermark font size for a background width and the 1..=50 size setting.
pub fn watermark_font_size(background_width: u32, size_setting: f32) -> f32 {
    background_width as f32 / 45.2 * size_setting / 10.0
}

/// Distance of each line's block bottom above the canvas bottom, top line first.
pub fn line_offsets(font_size: f32) -> [f32; 3] {
    [
        font_size * 4.0,
        font_size * 8.0 / 3.0,
        font_size * 4.0 / 3.0,
    ]
}

/// Draw the three centred watermark lines near the bottom of `canvas`.
///
/// Returns the canvas and each line's drawn bounds.
pub fn draw_watermark(
    mut canvas: Layer,
    text: &WatermarkText,
    fonts: &FontPair,
    style: &TextStyle,
) -> (Layer, [TextBox; 3]) {
    let lines = text.lines();
    let offsets = line_offsets(style.font_size);
    let mut boxes = [TextBox::default(); 3];
    for ((line, offset), slot) in lines.iter().zip(offsets).zip(boxes.iter_mut()) {
        *slot = draw_mixed_text(
            &mut canvas,
            line,
            fonts,
            style,
            LineAnchor::AboveBottom(offset),
        );
    }
    (canvas, boxes)
}

#[cfg(test)]
#[path = "../../tests/unit/text/watermark.rs"]
mod tests;

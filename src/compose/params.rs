use chrono::NaiveDate;

use crate::{
    catalog::species::SpeciesRecord,
    effects::background::BackdropParams,
    foundation::{
        core::{Rgba8, VAlign},
        error::{BirdcardError, BirdcardResult},
    },
    text::{
        fonts::{FontLibrary, FontPair},
        render::TextStyle,
    },
};

/// Multiplier applied to the upload before it is blurred into the backdrop.
pub const BACKDROP_EXPOSURE: f32 = 0.4;

/// Every slider and toggle that shapes a card.
///
/// Fields missing from a JSON params file take their [`Default`] value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderParams {
    /// Corner radius coefficient, 0..=20.
    pub corner_radius: f64,
    /// Backdrop enlargement, 1.0..=2.0.
    pub scale_factor: f64,
    /// Backdrop contrast factor (1.0 = unchanged, >= 0).
    pub contrast_factor: f32,
    /// Backdrop alpha multiplier, 0..=1.
    pub alpha_factor: f32,
    /// Backdrop blur standard deviation in pixels.
    pub blur_radius: f32,
    /// Shadow shift as a percentage of the foreground width, -10..=10.
    pub shadow_offset_x: f64,
    /// Shadow shift as a percentage of the background height, -10..=10.
    pub shadow_offset_y: f64,
    /// Shadow alpha multiplier, 0..=2.
    pub shadow_opacity: f32,
    /// Watermark size setting, 1..=50.
    pub font_size: f32,
    /// Extra pixels between glyphs, 0..=10.
    pub letter_spacing: f32,
    /// Watermark fill colour.
    pub text_color: Rgba8,
    /// Paste a QR code of the species' reference URL.
    pub include_qr: bool,
    /// Vertical alignment of script runs within each watermark line.
    pub text_align: VAlign,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            corner_radius: 8.0,
            scale_factor: 1.25,
            contrast_factor: 1.0,
            alpha_factor: 1.0,
            blur_radius: 50.0,
            shadow_offset_x: 1.0,
            shadow_offset_y: 2.0,
            shadow_opacity: 0.8,
            font_size: 12.0,
            letter_spacing: 2.0,
            text_color: Rgba8::WHITE,
            include_qr: true,
            text_align: VAlign::Bottom,
        }
    }
}

fn check_range<T>(name: &str, v: T, lo: T, hi: T) -> BirdcardResult<()>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    // NaN fails both comparisons.
    if v >= lo && v <= hi {
        Ok(())
    } else {
        Err(BirdcardError::validation(format!(
            "{name} must be within {lo}..={hi}, got {v}"
        )))
    }
}

impl RenderParams {
    /// Reject out-of-range or non-finite values.
    pub fn validate(&self) -> BirdcardResult<()> {
        check_range("corner_radius", self.corner_radius, 0.0, 20.0)?;
        check_range("scale_factor", self.scale_factor, 1.0, 2.0)?;
        if !self.contrast_factor.is_finite() || self.contrast_factor < 0.0 {
            return Err(BirdcardError::validation(format!(
                "contrast_factor must be finite and >= 0, got {}",
                self.contrast_factor
            )));
        }
        check_range("alpha_factor", self.alpha_factor, 0.0, 1.0)?;
        if !self.blur_radius.is_finite() || self.blur_radius <= 0.0 {
            return Err(BirdcardError::validation(format!(
                "blur_radius must be > 0, got {}",
                self.blur_radius
            )));
        }
        check_range("shadow_offset_x", self.shadow_offset_x, -10.0, 10.0)?;
        check_range("shadow_offset_y", self.shadow_offset_y, -10.0, 10.0)?;
        check_range("shadow_opacity", self.shadow_opacity, 0.0, 2.0)?;
        check_range("font_size", self.font_size, 1.0, 50.0)?;
        check_range("letter_spacing", self.letter_spacing, 0.0, 10.0)?;
        Ok(())
    }

    /// Backdrop knobs taken from these params.
    pub fn backdrop(&self) -> BackdropParams {
        BackdropParams {
            scale_factor: self.scale_factor,
            contrast_factor: self.contrast_factor,
            alpha_factor: self.alpha_factor,
            blur_radius: self.blur_radius,
        }
    }

    /// Text style for a background of `background_width` pixels.
    pub fn text_style(&self, background_width: u32) -> TextStyle {
        TextStyle {
            font_size: crate::text::watermark::watermark_font_size(
                background_width,
                self.font_size,
            ),
            letter_spacing: self.letter_spacing,
            color: self.text_color,
            align: self.text_align,
        }
    }
}

/// Per-card inputs that are not sliders.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardRequest {
    /// Selected species; `None` renders a card without watermark or QR.
    #[serde(default)]
    pub species: Option<SpeciesRecord>,
    /// Where the photo was taken.
    #[serde(default)]
    pub location: String,
    /// When the photo was taken.
    pub date: NaiveDate,
    /// Printed directly before the location.
    #[serde(default)]
    pub author: String,
    /// Font file for wide-script runs, by name inside the font directory.
    ///
    /// `None` picks the directory's first font file.
    #[serde(default)]
    pub primary_font: Option<String>,
    /// Font file for everything else, chosen like `primary_font`.
    #[serde(default)]
    pub secondary_font: Option<String>,
}

impl CardRequest {
    /// A request without species, author or font selection.
    pub fn new(location: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            species: None,
            location: location.into(),
            date,
            author: String::new(),
            primary_font: None,
            secondary_font: None,
        }
    }

    /// Caption the card with `species`.
    pub fn with_species(mut self, species: SpeciesRecord) -> Self {
        self.species = Some(species);
        self
    }

    /// Credit `author` before the location.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Select fonts by file name inside a [`FontLibrary`].
    pub fn with_fonts(mut self, primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        self.primary_font = Some(primary.into());
        self.secondary_font = Some(secondary.into());
        self
    }

    /// Load the faces this request selects.
    ///
    /// Without a library both classes use the built-in face, and naming a font is a validation
    /// error. An empty library with no names also yields the built-in face. Names that cannot be
    /// loaded degrade to the built-in face (see [`FontLibrary::load_pair`]).
    pub fn resolve_fonts(&self, library: Option<&FontLibrary>) -> BirdcardResult<FontPair> {
        let Some(library) = library else {
            if self.primary_font.is_some() || self.secondary_font.is_some() {
                return Err(BirdcardError::validation(
                    "font names need a font directory",
                ));
            }
            return FontPair::builtin();
        };

        let first = library.files().first();
        let pick = |name: &Option<String>| name.as_ref().or(first).cloned();
        match (pick(&self.primary_font), pick(&self.secondary_font)) {
            (Some(primary), Some(secondary)) => library.load_pair(&primary, &secondary),
            _ => {
                tracing::debug!(dir = %library.dir().display(), "no font files; using built-in font");
                FontPair::builtin()
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/params.rs"]
mod tests;

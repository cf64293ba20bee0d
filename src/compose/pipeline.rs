use std::io::Cursor;

use anyhow::Context;
use chrono::NaiveDate;
use image::DynamicImage;

use crate::{
    catalog::species::SpeciesRecord,
    compose::{
        params::{BACKDROP_EXPOSURE, CardRequest, RenderParams},
        placement::{Placement, qr_origin, qr_size},
    },
    effects::{
        adjust::adjust_exposure,
        background::create_blurred_background,
        composite::paste_over,
        mask::{corner_radius_px, round_corners},
        shadow::create_shadow,
    },
    foundation::{
        core::{Layer, TextBox},
        error::{BirdcardError, BirdcardResult},
    },
    qr::code::generate_qr,
    text::{
        fonts::FontPair,
        script::ideographs_only,
        watermark::{WatermarkText, draw_watermark},
    },
};

/// A finished card: pixels, their PNG encoding, and the suggested download name.
#[derive(Clone, Debug)]
pub struct RenderedCard {
    /// The composed card pixels.
    pub image: Layer,
    /// PNG encoding of `image`.
    pub png: Vec<u8>,
    /// Suggested download name, see [`download_file_name`].
    pub file_name: String,
    /// Non-fatal problems, e.g. a skipped QR code.
    pub warnings: Vec<String>,
    /// Bounds of the three watermark lines, when a species was selected.
    pub text_boxes: Option<[TextBox; 3]>,
}

/// Decode an uploaded JPEG or PNG.
pub fn decode_upload(bytes: &[u8]) -> BirdcardResult<DynamicImage> {
    let img = image::load_from_memory(bytes).context("decode image from memory")?;
    if img.width() == 0 || img.height() == 0 {
        return Err(BirdcardError::image("uploaded image is empty"));
    }
    Ok(img)
}

/// `{ideographs of species}-{location}-{YYYY-MM-DD}.png`
pub fn download_file_name(
    species: Option<&SpeciesRecord>,
    location: &str,
    date: NaiveDate,
) -> String {
    let name = species
        .map(|s| ideographs_only(&s.species))
        .unwrap_or_default();
    format!("{name}-{location}-{}.png", date.format("%Y-%m-%d"))
}

/// Build a card from an uploaded photo.
#[tracing::instrument(skip_all, fields(width = image.width(), height = image.height()))]
pub fn compose(
    image: &DynamicImage,
    params: &RenderParams,
    request: &CardRequest,
    fonts: &FontPair,
) -> BirdcardResult<RenderedCard> {
    params.validate()?;
    if image.width() == 0 || image.height() == 0 {
        return Err(BirdcardError::image("cannot compose an empty image"));
    }

    let radius = corner_radius_px(image.width(), params.corner_radius);
    let foreground = round_corners(&image.to_rgba8(), radius);

    // The backdrop comes from the unmasked upload.
    let darkened = adjust_exposure(image, BACKDROP_EXPOSURE);
    let mut canvas = create_blurred_background(&darkened, params.backdrop())?;
    let shadow = create_shadow(&foreground, params.corner_radius, params.shadow_opacity)?;

    let bg_size = canvas.dimensions();
    let placement = Placement::compute(
        bg_size,
        foreground.dimensions(),
        params.shadow_offset_x,
        params.shadow_offset_y,
    );
    tracing::debug!(?bg_size, ?placement, radius, "placement");

    paste_over(&mut canvas, &shadow, placement.shadow);
    paste_over(&mut canvas, &foreground, placement.foreground);

    let mut warnings = Vec::new();
    let mut text_boxes = None;
    if let Some(species) = &request.species {
        let text = WatermarkText {
            order: species.order.clone(),
            family: species.family.clone(),
            species: species.species.clone(),
            author: request.author.clone(),
            location: request.location.clone(),
            date: request.date,
        };
        let style = params.text_style(bg_size.0);
        let (drawn, boxes) = draw_watermark(canvas, &text, fonts, &style);
        canvas = drawn;
        text_boxes = Some(boxes);

        if params.include_qr {
            let size = qr_size(bg_size);
            match generate_qr(&species.href, size) {
                Ok(code) => paste_over(&mut canvas, &code, qr_origin(bg_size, size)),
                Err(err) => {
                    tracing::warn!(%err, species = %species.species, "skipping QR code");
                    warnings.push(format!("QR code skipped: {err}"));
                }
            }
        }
    }

    let png = encode_png(&canvas)?;
    Ok(RenderedCard {
        file_name: download_file_name(
            request.species.as_ref(),
            &request.location,
            request.date,
        ),
        image: canvas,
        png,
        warnings,
        text_boxes,
    })
}

/// Decode `bytes` and [`compose`] them.
pub fn compose_upload(
    bytes: &[u8],
    params: &RenderParams,
    request: &CardRequest,
    fonts: &FontPair,
) -> BirdcardResult<RenderedCard> {
    let image = decode_upload(bytes)?;
    compose(&image, params, request, fonts)
}

fn encode_png(layer: &Layer) -> BirdcardResult<Vec<u8>> {
    let mut buf = Vec::new();
    layer
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode card as png")?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/pipeline.rs"]
mod tests;

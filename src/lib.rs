//! Birdcard turns a bird photograph into a shareable card.
//!
//! A card is the photo with rounded corners and a soft drop shadow, floating over an enlarged,
//! darkened and blurred copy of itself, captioned with a three-line watermark (taxonomy, species
//! name, place and date) and, optionally, a QR code linking to the species' reference page.
//!
//! # Pipeline overview
//!
//! 1. **Mask**: round the photo's corners ([`round_corners`])
//! 2. **Backdrop**: darken, enlarge, blur and contrast-adjust ([`create_blurred_background`])
//! 3. **Shadow**: a blurred 110% rounded rectangle ([`create_shadow`])
//! 4. **Place**: paste shadow and photo at [`Placement`] offsets
//! 5. **Caption**: mixed-script watermark ([`draw_watermark`]) and QR code ([`generate_qr`])
//! 6. **Deliver**: PNG bytes handed to an [`OutputSink`]
//!
//! [`compose`] runs all of these for one [`RenderParams`] + [`CardRequest`].
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same inputs produce byte-identical PNGs.
//! - **Straight RGBA8**: every layer is a non-premultiplied [`Layer`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod catalog;
mod compose;
mod effects;
mod foundation;
mod qr;
mod text;

pub use catalog::species::{Catalog, SpeciesRecord};
pub use compose::params::{BACKDROP_EXPOSURE, CardRequest, RenderParams};
pub use compose::pipeline::{
    RenderedCard, compose, compose_upload, decode_upload, download_file_name,
};
pub use compose::placement::{Placement, QR_FRACTION, QR_MARGIN, qr_origin, qr_size};
pub use compose::sink::{DirSink, InMemorySink, OutputSink, TempFileSink};
pub use effects::adjust::{adjust_alpha, adjust_exposure, enhance_contrast};
pub use effects::background::{BackdropParams, create_blurred_background, enlarged_size};
pub use effects::blur::gaussian_blur;
pub use effects::composite::{StraightRgba8, blend_coverage, over, paste_over};
pub use effects::mask::{corner_radius_px, round_corners, rounded_rect_mask};
pub use effects::shadow::{SHADOW_BLUR_RADIUS, create_shadow, shadow_size};
pub use foundation::core::{Layer, PixelPos, Point, Rect, Rgba8, RoundedRect, TextBox, VAlign};
pub use foundation::error::{BirdcardError, BirdcardResult};
pub use qr::code::{MODULE_PX, QUIET_ZONE, generate_qr};
pub use text::fonts::{BUILTIN_FONT_BYTES, FontLibrary, FontOrigin, FontPair};
pub use text::render::{
    LineAnchor, LineLayout, PlacedRun, RunMetrics, TextStyle, draw_line, draw_mixed_text,
    layout_line, measure_run,
};
pub use text::script::{
    ScriptClass, ScriptRun, classify, ideographs_only, is_ideograph, normalize_spacing,
    split_runs,
};
pub use text::watermark::{
    DATE_GAP, TAXON_SEPARATOR, WatermarkText, draw_watermark, line_offsets, watermark_font_size,
};

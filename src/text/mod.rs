//! Mixed-script text: classification, fonts, layout and the card watermark.

/// Font directory and face selection.
pub mod fonts;
/// Run layout and glyph drawing.
pub mod render;
/// Script classification and run splitting.
pub mod script;
/// Three-line card watermark.
pub mod watermark;

//! QR code generation.

/// QR codes sized to a pixel square.
pub mod code;

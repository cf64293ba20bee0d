/// Convenience result alias used across the crate.
pub type BirdcardResult<T> = Result<T, BirdcardError>;

#[derive(thiserror::Error, Debug)]
/// Top-level error type for catalog, font, QR and compositing operations.
pub enum BirdcardError {
    #[error("validation error: {0}")]
    /// Invalid user-facing parameters.
    Validation(String),

    #[error("catalog error: {0}")]
    /// Species catalog could not be read or parsed.
    Catalog(String),

    #[error("font error: {0}")]
    /// Font directory or font file problems.
    Font(String),

    #[error("qr error: {0}")]
    /// QR code could not be encoded.
    Qr(String),

    #[error("image error: {0}")]
    /// Pixel buffer shape or encoding problems.
    Image(String),

    #[error(transparent)]
    /// Wrapped lower-level error with context.
    Other(#[from] anyhow::Error),
}

impl BirdcardError {
    /// Build a [`BirdcardError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BirdcardError::Catalog`].
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Build a [`BirdcardError::Font`].
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`BirdcardError::Qr`].
    pub fn qr(msg: impl Into<String>) -> Self {
        Self::Qr(msg.into())
    }

    /// Build a [`BirdcardError::Image`].
    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }
}

use serde::{Deserialize, Serialize};

use crate::foundation::error::{BirdcardError, BirdcardResult};

pub use kurbo::{Point, Rect, RoundedRect};

/// An image layer: straight (non-premultiplied) RGBA8 pixels.
///
/// Layers are produced by value by each compositing step and consumed by the next.
pub type Layer = image::RgbaImage;

/// Integer pixel position; may be negative (pastes clip against the destination).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelPos {
    /// Horizontal offset in pixels.
    pub x: i64,
    /// Vertical offset in pixels.
    pub y: i64,
}

impl PixelPos {
    /// Construct a position.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Straight-alpha RGBA8 colour.
///
/// Serialized as `#RRGGBB` or `#RRGGBBAA`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);

    /// Construct from channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` / `#RRGGBBAA` (leading `#` optional, case-insensitive).
    pub fn parse_hex(s: &str) -> BirdcardResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> BirdcardResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| BirdcardError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        if !s.is_ascii() {
            return Err(BirdcardError::validation(
                "hex color must be #RRGGBB or #RRGGBBAA",
            ));
        }
        match s.len() {
            6 => Ok(Self::rgba(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
                255,
            )),
            8 => Ok(Self::rgba(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
                hex_byte(&s[6..8])?,
            )),
            _ => Err(BirdcardError::validation(
                "hex color must be #RRGGBB or #RRGGBBAA",
            )),
        }
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// As an `image` pixel.
    pub fn to_pixel(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }
}

impl Serialize for Rgba8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Vertical alignment of text runs inside a line's block height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    /// Align run tops.
    Top,
    /// Center runs vertically.
    Center,
    /// Align run bottoms.
    #[default]
    Bottom,
}

/// Axis-aligned integer bounding box (`right`/`bottom` exclusive).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBox {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge.
    pub right: i32,
    /// Bottom edge.
    pub bottom: i32,
}

impl TextBox {
    /// Width in pixels (zero for inverted boxes).
    pub fn width(self) -> i32 {
        (self.right - self.left).max(0)
    }

    /// Height in pixels (zero for inverted boxes).
    pub fn height(self) -> i32 {
        (self.bottom - self.top).max(0)
    }

    /// Smallest box containing both.
    pub fn union(self, other: Self) -> Self {
        Self {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

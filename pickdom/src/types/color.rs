use std::str::FromStr;

use palette::{Srgb, Srgba, WithAlpha};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Paints nothing. Fills and borders with this color are skipped.
    Transparent,
    Rgb { r: u8, g: u8, b: u8 },
}

/// The color string was neither `transparent`, a CSS named color, nor a
/// 3- or 6-digit hex code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized color {0:?}")]
pub struct ColorParseError(pub String);

impl Color {
    pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Parse `transparent`, a CSS named color (`dodgerblue`), or a hex code
    /// with optional leading `#` (`#1e90ff`, `3af`).
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("transparent") {
            return Ok(Self::Transparent);
        }
        if let Some(named) = palette::named::from_str(&trimmed.to_ascii_lowercase()) {
            let (r, g, b) = named.into_components();
            return Ok(Self::Rgb { r, g, b });
        }
        trimmed
            .parse::<Srgb<u8>>()
            .map(|srgb| {
                let (r, g, b) = srgb.into_components();
                Self::Rgb { r, g, b }
            })
            .map_err(|_| ColorParseError(input.to_string()))
    }

    pub const fn is_transparent(&self) -> bool {
        matches!(self, Self::Transparent)
    }

    pub fn to_srgba(&self) -> Srgba<f32> {
        match *self {
            Self::Transparent => Srgba::new(0.0, 0.0, 0.0, 0.0),
            Self::Rgb { r, g, b } => Srgb::new(r, g, b).into_format::<f32>().with_alpha(1.0),
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

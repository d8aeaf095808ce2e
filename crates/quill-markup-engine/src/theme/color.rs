use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Invalid color value for token {token}: {value:?}")]
    InvalidColor { token: String, value: String },
}

/// A string that is not a `#rgb` or `#rrggbb` color. Holds the rejected text.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Not a hex color: {0:?}")]
pub struct ParseColorError(pub String);

/// An sRGB color parsed from a `#rgb` or `#rrggbb` token value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a token value, naming `token` in the error.
    pub fn parse_token(token: &str, value: &str) -> Result<Self, ThemeError> {
        value
            .parse::<Self>()
            .map_err(|ParseColorError(value)| ThemeError::InvalidColor {
                token: token.to_string(),
                value,
            })
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel =
            |i: usize, w: usize| u8::from_str_radix(&hex[i..i + w], 16).map_err(|_| err());
        match hex.len() {
            3 => {
                // #abc is #aabbcc
                let (r, g, b) = (channel(0, 1)?, channel(1, 1)?, channel(2, 1)?);
                Ok(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => Ok(Self::rgb(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
            _ => Err(err()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

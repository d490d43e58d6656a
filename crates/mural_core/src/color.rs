use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("palette color `{0}` is not of the form `#rrggbb`")]
    Malformed(String),
    #[error("palette color `{0}` contains a non-hex digit")]
    BadDigit(String),
}

/// An sRGB triple decoded from a `#rrggbb` palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Parses a strict `#rrggbb` string. Shorthand (`#rgb`) and alpha forms are
/// not part of the catalog, so they are rejected rather than guessed at.
pub fn parse_hex_color(raw: &str) -> Result<PaletteColor, PaletteError> {
    let digits = raw
        .strip_prefix('#')
        .ok_or_else(|| PaletteError::Malformed(raw.to_string()))?;
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(PaletteError::Malformed(raw.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| PaletteError::BadDigit(raw.to_string()))
    };
    Ok(PaletteColor {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

#[cfg(test)]
#[path = "tests/color_tests.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::foundation::{
    core::Rgba8,
    error::{DmdError, DmdResult},
};

/// A color as written in configuration files.
///
/// Accepts `"#RRGGBB"`, `"#RRGGBBAA"`, a handful of names (`black`, `white`, `transparent`),
/// or an `[r, g, b]` / `[r, g, b, a]` byte array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorDef(pub Rgba8);

impl ColorDef {
    /// Opaque black.
    pub const BLACK: Self = Self([0, 0, 0, 255]);

    /// Straight-alpha RGBA8 value.
    pub fn rgba8(self) -> Rgba8 {
        self.0
    }
}

impl Default for ColorDef {
    fn default() -> Self {
        Self::BLACK
    }
}

impl std::str::FromStr for ColorDef {
    type Err = DmdError;

    fn from_str(s: &str) -> DmdResult<Self> {
        parse_color(s).map(Self)
    }
}

impl<'de> Deserialize<'de> for ColorDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(s) => parse_color(&s).map(Self).map_err(serde::de::Error::custom),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self([*r, *g, *b, 255])),
                [r, g, b, a] => Ok(Self([*r, *g, *b, *a])),
                _ => Err(serde::de::Error::custom(
                    "color array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

/// Parse a textual color into straight-alpha RGBA8.
pub fn parse_color(s: &str) -> DmdResult<Rgba8> {
    let s = s.trim();
    match s.to_ascii_lowercase().as_str() {
        "black" => return Ok([0, 0, 0, 255]),
        "white" => return Ok([255, 255, 255, 255]),
        "transparent" | "none" => return Ok([0, 0, 0, 0]),
        _ => {}
    }

    let hex = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> DmdResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| DmdError::config(format!("invalid hex byte \"{pair}\"")))
    }

    if !hex.is_ascii() {
        return Err(DmdError::config(format!("invalid color \"{s}\"")));
    }

    match hex.len() {
        6 => Ok([
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
            255,
        ]),
        8 => Ok([
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
            hex_byte(&hex[6..8])?,
        ]),
        _ => Err(DmdError::config(format!(
            "color \"{s}\" must be #RRGGBB, #RRGGBBAA or a known name"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/parse.rs"]
mod tests;

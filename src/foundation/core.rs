use std::{fmt, str::FromStr};

use crate::foundation::error::{DmdError, DmdResult};

/// Straight (non-premultiplied) RGBA8 pixel.
pub type Rgba8 = [u8; 4];

/// One output resolution, `width × height` pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TargetSize {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl TargetSize {
    /// Build a size, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> DmdResult<Self> {
        if width == 0 || height == 0 {
            return Err(DmdError::config(format!(
                "target size {width}x{height} must have non-zero width and height"
            )));
        }
        Ok(Self { width, height })
    }

    /// Directory name used in the output layout, e.g. `128x32`.
    pub fn dir_name(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for TargetSize {
    type Err = DmdError;

    fn from_str(token: &str) -> DmdResult<Self> {
        let token = token.trim();
        let mut halves = token.split('x');
        let (Some(w), Some(h), None) = (halves.next(), halves.next(), halves.next()) else {
            return Err(DmdError::config(format!(
                "size \"{token}\" must have the form WxH"
            )));
        };
        let width = w
            .trim()
            .parse::<u32>()
            .map_err(|e| DmdError::config(format!("size \"{token}\": bad width: {e}")))?;
        let height = h
            .trim()
            .parse::<u32>()
            .map_err(|e| DmdError::config(format!("size \"{token}\": bad height: {e}")))?;
        Self::new(width, height)
    }
}

/// Aspect-preserving scale strategy for animations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    /// Contain the frame inside the canvas, padding the remainder.
    #[default]
    Fit,
    /// Cover the whole canvas, cropping the overflow.
    Fill,
}

impl FromStr for ScaleMode {
    type Err = DmdError;

    fn from_str(s: &str) -> DmdResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fit" => Ok(Self::Fit),
            "fill" => Ok(Self::Fill),
            other => Err(DmdError::config(format!(
                "scale mode \"{other}\" must be \"fit\" or \"fill\""
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

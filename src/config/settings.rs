use std::{fs::File, io::BufReader, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    color::parse::ColorDef,
    config::{
        conversion::{ConversionConfig, MAX_ANIMATION_COLORS, MIN_ANIMATION_COLORS},
        sizes::{parse_target_sizes, resolve_target_sizes},
    },
    foundation::{
        core::ScaleMode,
        error::{DmdError, DmdResult},
    },
};

/// Output size list as written in the settings file: either `"128x32,256x64"` or
/// `["128x32", "256x64"]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutputSizes {
    /// Comma-separated `WxH` tokens.
    List(String),
    /// One or more entries, each itself a comma list.
    Entries(Vec<String>),
}

impl Default for OutputSizes {
    fn default() -> Self {
        Self::List("128x32".to_owned())
    }
}

/// Logging configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "dmdart=debug,warn").
    pub level: String,
    /// Emit structured JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

/// Raw settings file contents (JSON, camelCase keys).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Root directory for converted output.
    pub output_folder: PathBuf,
    /// Requested output sizes.
    #[serde(default)]
    pub output_sizes: OutputSizes,
    /// Background for static images.
    #[serde(default)]
    pub background_color: ColorDef,
    /// Palette cap for animations.
    #[serde(default = "default_gif_colors")]
    pub gif_colors: u32,
    /// Fit or fill for animations.
    #[serde(default)]
    pub gif_scale_mode: ScaleMode,
    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_gif_colors() -> u32 {
    u32::from(MAX_ANIMATION_COLORS)
}

impl Settings {
    /// Read and deserialize a settings file.
    pub fn from_path(path: &Path) -> DmdResult<Self> {
        let f = File::open(path)
            .map_err(|e| DmdError::io(format!("open settings '{}'", path.display()), e))?;
        serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            DmdError::config(format!("parse settings '{}': {e}", path.display()))
        })
    }

    /// Validate and resolve into the immutable [`ConversionConfig`].
    ///
    /// Malformed size tokens are skipped with a warning. A zero palette is an error; other
    /// out-of-range palette sizes are clamped into `1..=256`. A translucent background color
    /// is used opaque.
    pub fn to_conversion_config(&self) -> DmdResult<ConversionConfig> {
        let target_sizes = match &self.output_sizes {
            OutputSizes::List(list) => parse_target_sizes(list),
            OutputSizes::Entries(entries) => resolve_target_sizes(entries),
        };
        if target_sizes.is_empty() {
            tracing::warn!("no valid output sizes configured; nothing will be converted");
        }

        if self.gif_colors == 0 {
            return Err(DmdError::config(format!(
                "gifColors must be at least {MIN_ANIMATION_COLORS}"
            )));
        }
        let clamped = self
            .gif_colors
            .clamp(u32::from(MIN_ANIMATION_COLORS), u32::from(MAX_ANIMATION_COLORS));
        if clamped != self.gif_colors {
            tracing::warn!(
                requested = self.gif_colors,
                used = clamped,
                "gifColors above the GIF palette limit; clamping"
            );
        }

        let background = self.background_color.rgba8();
        if background[3] != 255 {
            tracing::warn!(
                alpha = background[3],
                "backgroundColor must be opaque; ignoring its alpha"
            );
        }

        Ok(ConversionConfig::new(&self.output_folder)
            .with_target_sizes(target_sizes)
            .with_background(background)
            .with_animation_colors(clamped as u16)
            .with_animation_scale_mode(self.gif_scale_mode))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;

use std::path::PathBuf;

use crate::foundation::core::{Rgba8, ScaleMode, TargetSize};

/// Smallest palette cap; a single color is a valid (if flat) animation.
pub const MIN_ANIMATION_COLORS: u16 = 1;
/// Largest palette a GIF can carry.
pub const MAX_ANIMATION_COLORS: u16 = 256;

/// Immutable settings shared by every conversion job.
///
/// Built once (usually from [`Settings`](crate::Settings)) and passed by reference; jobs never
/// mutate it.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionConfig {
    /// Root of the output tree; each size gets a `WxH` subdirectory.
    pub output_root: PathBuf,
    /// Requested output resolutions, in order.
    pub target_sizes: Vec<TargetSize>,
    /// Fill for static images; always opaque.
    pub background: Rgba8,
    /// Palette cap for animations, within `1..=256`.
    pub animation_colors: u16,
    /// How animations are fitted to the target canvas.
    pub animation_scale_mode: ScaleMode,
}

impl ConversionConfig {
    /// Defaults: a single `128x32` target, black background, 256 colors, `Fit`.
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
            target_sizes: vec![TargetSize {
                width: 128,
                height: 32,
            }],
            background: [0, 0, 0, 255],
            animation_colors: MAX_ANIMATION_COLORS,
            animation_scale_mode: ScaleMode::Fit,
        }
    }

    /// Replace the target size list.
    pub fn with_target_sizes(mut self, sizes: Vec<TargetSize>) -> Self {
        self.target_sizes = sizes;
        self
    }

    /// Replace the static background color. Alpha is forced to 255.
    pub fn with_background(mut self, background: Rgba8) -> Self {
        self.background = [background[0], background[1], background[2], 255];
        self
    }

    /// Replace the palette cap, clamped into the GIF range.
    pub fn with_animation_colors(mut self, colors: u16) -> Self {
        self.animation_colors = colors.clamp(MIN_ANIMATION_COLORS, MAX_ANIMATION_COLORS);
        self
    }

    /// Replace the animation scale mode.
    pub fn with_animation_scale_mode(mut self, mode: ScaleMode) -> Self {
        self.animation_scale_mode = mode;
        self
    }
}

use image::RgbaImage;

use crate::{
    animation::{
        background::derive_background,
        coalesce::{CoalescedFrame, coalesce},
        decode::{LoopCount, decode_gif},
        encode::encode_gif,
        optimize::optimize_deltas,
        quantize::{QuantizedAnimation, quantize_frames},
    },
    color::grade::ColorGrade,
    config::conversion::ConversionConfig,
    foundation::{
        core::{Rgba8, ScaleMode, TargetSize},
        error::{DmdError, DmdResult},
    },
    transform::{Transform, composite::flatten, geometry::scale_to_canvas},
};

/// Color distance under which two colors count as equal during remapping and delta
/// detection, as a fraction of the RGB diagonal.
pub const REMAP_FUZZ: f32 = 0.02;

/// A frame after the per-frame transform, ready for joint quantization.
#[derive(Clone, Debug)]
pub struct PreparedFrame {
    /// Opaque, graded pixels at the target size.
    pub image: RgbaImage,
    /// Display time in hundredths of a second.
    pub delay_cs: u16,
    /// Tolerance used by the remap and delta passes.
    pub fuzz: f32,
}

/// Multi-frame pipeline: coalesce, derive background, per-frame composite/scale/grade,
/// shared-palette quantization, delta optimization, GIF.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimationTransformer;

impl AnimationTransformer {
    /// Composite over `background`, scale per `mode`, attach the remap fuzz, grade.
    pub fn prepare_frame(
        frame: &CoalescedFrame,
        size: TargetSize,
        mode: ScaleMode,
        background: Rgba8,
    ) -> PreparedFrame {
        let flat = flatten(&frame.image, background);
        let mut image = scale_to_canvas(&flat, size, mode, background);
        ColorGrade::DMD.apply(&mut image);
        PreparedFrame {
            image,
            delay_cs: frame.delay_cs,
            fuzz: REMAP_FUZZ,
        }
    }

    /// Coalesce and transform every frame of a GIF without quantizing.
    pub fn prepare(
        source: &[u8],
        size: TargetSize,
        mode: ScaleMode,
    ) -> DmdResult<(Vec<PreparedFrame>, LoopCount)> {
        let decoded = decode_gif(source)?;
        let coalesced = coalesce(&decoded);
        let Some(first) = coalesced.first() else {
            return Err(DmdError::decode("gif contains no frames"));
        };
        let background = derive_background(&first.image);
        tracing::trace!(?background, frames = coalesced.len(), "derived animation background");

        let frames = coalesced
            .iter()
            .map(|f| Self::prepare_frame(f, size, mode, background))
            .collect();
        Ok((frames, decoded.loop_count))
    }

    /// Jointly quantize prepared frames to at most `max_colors` entries.
    pub fn quantize(frames: &[PreparedFrame], max_colors: u16) -> DmdResult<QuantizedAnimation> {
        let fuzz = frames.first().map_or(REMAP_FUZZ, |f| f.fuzz);
        let images: Vec<RgbaImage> = frames.iter().map(|f| f.image.clone()).collect();
        quantize_frames(&images, usize::from(max_colors), fuzz)
    }
}

impl Transform for AnimationTransformer {
    fn name(&self) -> &'static str {
        "animation"
    }

    fn extension(&self) -> &'static str {
        "gif"
    }

    fn transform(
        &self,
        source: &[u8],
        size: TargetSize,
        config: &ConversionConfig,
    ) -> DmdResult<Vec<u8>> {
        if size.width > u32::from(u16::MAX) || size.height > u32::from(u16::MAX) {
            return Err(DmdError::encode(format!("{size} is too large for gif")));
        }

        let (frames, loop_count) = Self::prepare(source, size, config.animation_scale_mode)?;
        let quantized = Self::quantize(&frames, config.animation_colors)?;

        let delays: Vec<u16> = frames.iter().map(|f| f.delay_cs).collect();
        let fuzz = frames.first().map_or(REMAP_FUZZ, |f| f.fuzz);
        let deltas = optimize_deltas(&quantized, &delays, fuzz);
        tracing::debug!(
            frames = frames.len(),
            encoded = deltas.len(),
            colors = quantized.palette.len(),
            "optimized animation"
        );

        encode_gif(
            quantized.width,
            quantized.height,
            &quantized.palette,
            &deltas,
            loop_count,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transformer.rs"]
mod tests;

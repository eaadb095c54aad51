use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::{
    color::grade::ColorGrade,
    config::conversion::ConversionConfig,
    foundation::{
        core::{Rgba8, TargetSize},
        error::{DmdError, DmdResult},
    },
    transform::{
        Transform,
        composite::flatten,
        geometry::{extent_centered, sample},
    },
};

/// Single-frame pipeline: grade, flatten onto the configured background, aspect-preserving
/// sample into the canvas, center extent padded with the background, PNG32.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticImageTransformer;

impl StaticImageTransformer {
    /// Decode source bytes into straight RGBA8.
    ///
    /// Only pixel data is kept; embedded profiles and EXIF never reach the output.
    pub fn decode(bytes: &[u8]) -> DmdResult<RgbaImage> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| DmdError::decode(format!("decode image: {e}")))?;
        Ok(img.to_rgba8())
    }

    /// Run the raster part of the pipeline on an already decoded image.
    ///
    /// The background is always used opaque, so the result has no transparent pixels.
    pub fn render(src: &RgbaImage, size: TargetSize, background: Rgba8) -> RgbaImage {
        let background = [background[0], background[1], background[2], 255];
        let mut graded = src.clone();
        ColorGrade::DMD.apply(&mut graded);
        let flat = flatten(&graded, background);
        let sampled = sample(&flat, size);
        extent_centered(&sampled, size, background)
    }

    /// Encode as 32-bit RGBA PNG.
    pub fn encode_png(img: RgbaImage) -> DmdResult<Vec<u8>> {
        let mut buf = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .map_err(|e| DmdError::encode(format!("encode png: {e}")))?;
        Ok(buf)
    }
}

impl Transform for StaticImageTransformer {
    fn name(&self) -> &'static str {
        "static"
    }

    fn extension(&self) -> &'static str {
        "png"
    }

    fn transform(
        &self,
        source: &[u8],
        size: TargetSize,
        config: &ConversionConfig,
    ) -> DmdResult<Vec<u8>> {
        let src = Self::decode(source)?;
        let out = Self::render(&src, size, config.background);
        Self::encode_png(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/static_image.rs"]
mod tests;

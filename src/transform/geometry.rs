use image::{
    Rgba, RgbaImage,
    imageops::{self, FilterType},
};

use crate::{
    foundation::core::{Rgba8, ScaleMode, TargetSize},
    transform::composite::over_at,
};

/// Nearest-neighbour resample that fits inside `size`, keeping the aspect ratio.
///
/// The result matches `size` on at least one axis; [`extent_centered`] pads the other.
pub fn sample(img: &RgbaImage, size: TargetSize) -> RgbaImage {
    let (sw, sh) = scaled_dimensions(img.dimensions(), size, ScaleMode::Fit);
    if img.dimensions() == (sw, sh) {
        return img.clone();
    }
    imageops::resize(img, sw, sh, FilterType::Nearest)
}

/// Place `img` centered on a `size` canvas filled with `fill`.
///
/// Smaller images are padded, larger ones are cropped; both symmetrically around the center.
pub fn extent_centered(img: &RgbaImage, size: TargetSize, fill: Rgba8) -> RgbaImage {
    if img.dimensions() == (size.width, size.height) {
        return img.clone();
    }
    let mut canvas = RgbaImage::from_pixel(size.width, size.height, Rgba(fill));
    let (left, top) = center_offset(img.dimensions(), size);
    over_at(&mut canvas, img, left, top);
    canvas
}

pub(crate) fn center_offset((w, h): (u32, u32), size: TargetSize) -> (i64, i64) {
    let left = (i64::from(size.width) - i64::from(w)).div_euclid(2);
    let top = (i64::from(size.height) - i64::from(h)).div_euclid(2);
    (left, top)
}

/// Dimensions of `(w, h)` after a uniform scale that contains (`Fit`) or covers (`Fill`)
/// `size`.
pub fn scaled_dimensions((w, h): (u32, u32), size: TargetSize, mode: ScaleMode) -> (u32, u32) {
    if w == 0 || h == 0 {
        return (size.width, size.height);
    }
    let sx = f64::from(size.width) / f64::from(w);
    let sy = f64::from(size.height) / f64::from(h);
    let scale = match mode {
        ScaleMode::Fit => sx.min(sy),
        ScaleMode::Fill => sx.max(sy),
    };

    let sw = (f64::from(w) * scale).round().max(1.0) as u32;
    let sh = (f64::from(h) * scale).round().max(1.0) as u32;
    match mode {
        ScaleMode::Fit => (sw.min(size.width), sh.min(size.height)),
        ScaleMode::Fill => (sw.max(size.width), sh.max(size.height)),
    }
}

/// Aspect-preserving scale followed by a centered pad (`Fit`) or crop (`Fill`) to `size`.
pub fn scale_to_canvas(
    img: &RgbaImage,
    size: TargetSize,
    mode: ScaleMode,
    fill: Rgba8,
) -> RgbaImage {
    let (sw, sh) = scaled_dimensions(img.dimensions(), size, mode);
    let scaled = if (sw, sh) == img.dimensions() {
        img.clone()
    } else {
        imageops::resize(img, sw, sh, FilterType::CatmullRom)
    };
    extent_centered(&scaled, size, fill)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/geometry.rs"]
mod tests;

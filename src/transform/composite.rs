use image::{Rgba, RgbaImage};

use crate::foundation::{
    core::Rgba8,
    math::{mul_div255_u16, mul_div255_u8},
};

type PremulRgba8 = [u8; 4];

fn premultiply(px: Rgba8) -> PremulRgba8 {
    let a = u16::from(px[3]);
    [
        mul_div255_u8(u16::from(px[0]), a),
        mul_div255_u8(u16::from(px[1]), a),
        mul_div255_u8(u16::from(px[2]), a),
        px[3],
    ]
}

fn unpremultiply(px: PremulRgba8) -> Rgba8 {
    let a = u32::from(px[3]);
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let un = |c: u8| ((u32::from(c) * 255 + a / 2) / a).min(255) as u8;
    [un(px[0]), un(px[1]), un(px[2]), px[3]]
}

fn over_premul(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        let dc = mul_div255_u16(u16::from(dst[i]), inv);
        out[i] = (u16::from(src[i]) + dc).min(255) as u8;
    }
    out
}

/// Source-over for straight-alpha pixels.
pub fn over(dst: Rgba8, src: Rgba8) -> Rgba8 {
    match src[3] {
        0 => dst,
        255 => src,
        _ => unpremultiply(over_premul(premultiply(dst), premultiply(src))),
    }
}

/// Composite `img` over a canvas filled with `background`, returning a new image of the
/// same size. An opaque background yields an opaque result.
pub fn flatten(img: &RgbaImage, background: Rgba8) -> RgbaImage {
    let mut out = RgbaImage::from_pixel(img.width(), img.height(), Rgba(background));
    for (dst, src) in out.pixels_mut().zip(img.pixels()) {
        dst.0 = over(dst.0, src.0);
    }
    out
}

/// Composite `src` over `dst` in place at offset `(left, top)`; parts outside `dst` are
/// ignored.
pub fn over_at(dst: &mut RgbaImage, src: &RgbaImage, left: i64, top: i64) {
    for (x, y, px) in src.enumerate_pixels() {
        let dx = left + i64::from(x);
        let dy = top + i64::from(y);
        if dx < 0 || dy < 0 || dx >= i64::from(dst.width()) || dy >= i64::from(dst.height()) {
            continue;
        }
        let d = dst.get_pixel_mut(dx as u32, dy as u32);
        d.0 = over(d.0, px.0);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/composite.rs"]
mod tests;

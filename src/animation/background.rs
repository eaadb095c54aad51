use image::RgbaImage;

use crate::foundation::core::Rgba8;

/// Reduce `frame` to a single opaque pixel: the alpha-weighted area average of its colors.
///
/// A fully transparent frame yields opaque black.
pub fn derive_background(frame: &RgbaImage) -> Rgba8 {
    let mut sums = [0u64; 3];
    let mut weight = 0u64;
    for px in frame.pixels() {
        let a = u64::from(px[3]);
        for (sum, c) in sums.iter_mut().zip(&px.0[..3]) {
            *sum += u64::from(*c) * a;
        }
        weight += a;
    }

    if weight == 0 {
        return [0, 0, 0, 255];
    }
    let avg = |s: u64| ((s + weight / 2) / weight).min(255) as u8;
    [avg(sums[0]), avg(sums[1]), avg(sums[2]), 255]
}

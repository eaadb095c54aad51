use std::collections::HashMap;

use image::RgbaImage;

use crate::foundation::{
    error::{DmdError, DmdResult},
    math::{rgb_distance_sq, within_fuzz},
};

/// Shared color table for every frame of an animation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    /// RGB entries; indices into this vector are what frames store.
    pub colors: Vec<[u8; 3]>,
}

impl Palette {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// `true` when the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Index of the closest entry (lowest index wins ties).
    pub fn nearest(&self, rgb: [u8; 3]) -> u8 {
        let mut best = 0usize;
        let mut best_d = u32::MAX;
        for (i, c) in self.colors.iter().enumerate() {
            let d = rgb_distance_sq(rgb, *c);
            if d < best_d {
                best = i;
                best_d = d;
                if d == 0 {
                    break;
                }
            }
        }
        best as u8
    }
}

/// Palette-indexed frames sharing one [`Palette`].
#[derive(Clone, Debug)]
pub struct QuantizedAnimation {
    /// Canvas width.
    pub width: u32,
    /// Canvas height.
    pub height: u32,
    /// Shared palette, at most the requested number of colors.
    pub palette: Palette,
    /// One index buffer per frame, row-major, `width * height` long.
    pub frames: Vec<Vec<u8>>,
}

#[derive(Clone, Debug)]
struct ColorBox {
    entries: Vec<([u8; 3], u32)>,
}

impl ColorBox {
    fn population(&self) -> u64 {
        self.entries.iter().map(|(_, n)| u64::from(*n)).sum()
    }

    fn widest_channel(&self) -> (usize, u8) {
        let mut best = (0usize, 0u8);
        for ch in 0..3 {
            let (lo, hi) = self
                .entries
                .iter()
                .fold((u8::MAX, u8::MIN), |(lo, hi), (c, _)| {
                    (lo.min(c[ch]), hi.max(c[ch]))
                });
            let range = hi.saturating_sub(lo);
            if range > best.1 {
                best = (ch, range);
            }
        }
        best
    }

    fn split(mut self) -> (ColorBox, ColorBox) {
        let (ch, _) = self.widest_channel();
        self.entries.sort_unstable_by_key(|(c, _)| (c[ch], *c));

        let half = self.population() / 2;
        let mut acc = 0u64;
        let mut cut = 1;
        for (i, (_, n)) in self.entries.iter().enumerate() {
            acc += u64::from(*n);
            if acc >= half {
                cut = i + 1;
                break;
            }
        }
        let cut = cut.clamp(1, self.entries.len() - 1);
        let upper = self.entries.split_off(cut);
        (self, ColorBox { entries: upper })
    }

    fn mean(&self) -> [u8; 3] {
        let total = self.population().max(1);
        let mut sums = [0u64; 3];
        for (c, n) in &self.entries {
            for ch in 0..3 {
                sums[ch] += u64::from(c[ch]) * u64::from(*n);
            }
        }
        sums.map(|s| ((s + total / 2) / total).min(255) as u8)
    }
}

/// Build one palette of at most `max_colors` entries from every pixel of every frame
/// (median cut). When the frames already use few enough colors they are kept exactly.
pub fn build_palette(frames: &[RgbaImage], max_colors: usize) -> Palette {
    let mut histogram: HashMap<[u8; 3], u32> = HashMap::new();
    for frame in frames {
        for px in frame.pixels() {
            *histogram.entry([px[0], px[1], px[2]]).or_default() += 1;
        }
    }
    let mut entries: Vec<([u8; 3], u32)> = histogram.into_iter().collect();
    entries.sort_unstable();

    let max_colors = max_colors.max(1);
    if entries.len() <= max_colors {
        return Palette {
            colors: entries.into_iter().map(|(c, _)| c).collect(),
        };
    }

    let mut boxes = vec![ColorBox { entries }];
    while boxes.len() < max_colors {
        let candidate = boxes
            .iter()
            .enumerate()
            .filter(|(_, b)| b.entries.len() > 1)
            .max_by_key(|(_, b)| (b.widest_channel().1, b.population()))
            .map(|(i, _)| i);
        let Some(i) = candidate else {
            break;
        };
        let (lo, hi) = boxes.swap_remove(i).split();
        boxes.push(lo);
        boxes.push(hi);
    }

    let mut colors: Vec<[u8; 3]> = boxes.iter().map(ColorBox::mean).collect();
    colors.sort_unstable();
    colors.dedup();
    Palette { colors }
}

/// Map `frame` onto `palette` with Floyd–Steinberg error diffusion.
///
/// Source pixels already within `fuzz` of their chosen entry snap to it without spreading
/// error to their neighbours.
pub fn dither_frame(frame: &RgbaImage, palette: &Palette, fuzz: f32) -> Vec<u8> {
    let w = frame.width() as usize;
    let h = frame.height() as usize;
    let mut err = vec![[0f32; 3]; w * h];
    let mut out = vec![0u8; w * h];

    for y in 0..h {
        for x in 0..w {
            let i = y * w + x;
            let px = frame.get_pixel(x as u32, y as u32);
            let src = [px[0], px[1], px[2]];

            let mut want = [0f32; 3];
            for ch in 0..3 {
                want[ch] = (f32::from(src[ch]) + err[i][ch]).clamp(0.0, 255.0);
            }
            let idx = palette.nearest(want.map(|v| v.round() as u8));
            out[i] = idx;

            let chosen = palette.colors[usize::from(idx)];
            if within_fuzz(src, chosen, fuzz) {
                continue;
            }

            let e = [0, 1, 2].map(|ch| want[ch] - f32::from(chosen[ch]));
            let mut spread = |dx: isize, dy: usize, weight: f32| {
                let nx = x as isize + dx;
                let ny = y + dy;
                if nx < 0 || nx as usize >= w || ny >= h {
                    return;
                }
                let j = ny * w + nx as usize;
                for ch in 0..3 {
                    err[j][ch] += e[ch] * weight;
                }
            };
            spread(1, 0, 7.0 / 16.0);
            spread(-1, 1, 3.0 / 16.0);
            spread(0, 1, 5.0 / 16.0);
            spread(1, 1, 1.0 / 16.0);
        }
    }

    out
}

/// Quantize a sequence of equally sized frames to one shared palette.
pub fn quantize_frames(
    frames: &[RgbaImage],
    max_colors: usize,
    fuzz: f32,
) -> DmdResult<QuantizedAnimation> {
    let Some(first) = frames.first() else {
        return Err(DmdError::encode("cannot quantize an animation with no frames"));
    };
    let (width, height) = first.dimensions();
    if frames.iter().any(|f| f.dimensions() != (width, height)) {
        return Err(DmdError::encode("animation frames differ in size"));
    }
    if !(1..=256).contains(&max_colors) {
        return Err(DmdError::encode(format!(
            "palette size {max_colors} outside 1..=256"
        )));
    }

    let palette = build_palette(frames, max_colors);
    let indexed = frames
        .iter()
        .map(|f| dither_frame(f, &palette, fuzz))
        .collect();

    Ok(QuantizedAnimation {
        width,
        height,
        palette,
        frames: indexed,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/animation/quantize.rs"]
mod tests;

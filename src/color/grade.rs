use image::RgbaImage;

/// Multiplicative brightness/saturation/hue modulation in HSL space.
///
/// Factors are ratios (1.0 = unchanged). Hue is a rotation where 2.0 means a full turn,
/// matching the usual "percent modulate" convention where 100% leaves hue alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorGrade {
    /// Lightness multiplier.
    pub brightness: f32,
    /// Saturation multiplier.
    pub saturation: f32,
    /// Hue multiplier (1.0 = no rotation).
    pub hue: f32,
}

impl ColorGrade {
    /// Fixed enhancement applied to every DMD output: saturation +50%, everything else kept.
    pub const DMD: Self = Self {
        brightness: 1.0,
        saturation: 1.5,
        hue: 1.0,
    };

    /// Grade a single straight-alpha pixel. Alpha is passed through untouched.
    pub fn apply_pixel(self, px: [u8; 4]) -> [u8; 4] {
        let (h, s, l) = rgb_to_hsl(px[0], px[1], px[2]);

        let h = (h + (self.hue - 1.0) * 0.5).rem_euclid(1.0);
        let s = (s * self.saturation).clamp(0.0, 1.0);
        let l = (l * self.brightness).clamp(0.0, 1.0);

        let [r, g, b] = hsl_to_rgb(h, s, l);
        [r, g, b, px[3]]
    }

    /// Grade every pixel of `img` in place.
    pub fn apply(self, img: &mut RgbaImage) {
        for px in img.pixels_mut() {
            px.0 = self.apply_pixel(px.0);
        }
    }
}

fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let r = f32::from(r) / 255.0;
    let g = f32::from(g) / 255.0;
    let b = f32::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;
    if d <= f32::EPSILON {
        return (0.0, 0.0, l);
    }

    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h / 6.0, s, l)
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [u8; 3] {
    fn to_u8(x: f32) -> u8 {
        (x.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    if s <= 0.0 {
        let v = to_u8(l);
        return [v, v, v];
    }

    fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    [
        to_u8(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        to_u8(hue_to_rgb(p, q, h)),
        to_u8(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    ]
}

/// HSL saturation of an RGB triple, in `0..=1`.
pub fn saturation_of(rgb: [u8; 3]) -> f32 {
    rgb_to_hsl(rgb[0], rgb[1], rgb[2]).1
}

#[cfg(test)]
#[path = "../../tests/unit/color/grade.rs"]
mod tests;

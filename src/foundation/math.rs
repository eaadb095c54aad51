pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Squared euclidean distance between two RGB triples.
pub(crate) fn rgb_distance_sq(a: [u8; 3], b: [u8; 3]) -> u32 {
    let dr = i32::from(a[0]) - i32::from(b[0]);
    let dg = i32::from(a[1]) - i32::from(b[1]);
    let db = i32::from(a[2]) - i32::from(b[2]);
    (dr * dr + dg * dg + db * db) as u32
}

/// `true` when `a` and `b` are within `fuzz` (0..=1) of the full RGB diagonal.
pub(crate) fn within_fuzz(a: [u8; 3], b: [u8; 3], fuzz: f32) -> bool {
    let max = fuzz.clamp(0.0, 1.0) * 255.0;
    let limit = 3.0 * max * max;
    rgb_distance_sq(a, b) as f32 <= limit
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

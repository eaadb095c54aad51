use image::{Rgba, RgbaImage};

use crate::{
    animation::decode::{DecodedAnimation, Disposal},
    transform::composite::over_at,
};

/// A full-canvas frame, independent of the frames before it.
#[derive(Clone, Debug, PartialEq)]
pub struct CoalescedFrame {
    /// Full logical-screen pixels, straight RGBA8.
    pub image: RgbaImage,
    /// Display time in hundredths of a second.
    pub delay_cs: u16,
}

/// Expand every frame to the full logical screen by drawing it over the accumulated result of
/// the frames before it, honoring each frame's disposal.
pub fn coalesce(anim: &DecodedAnimation) -> Vec<CoalescedFrame> {
    let mut canvas = RgbaImage::new(anim.width, anim.height);
    let mut out = Vec::with_capacity(anim.frames.len());

    for frame in &anim.frames {
        let before = (frame.disposal == Disposal::Previous).then(|| canvas.clone());

        over_at(
            &mut canvas,
            &frame.image,
            i64::from(frame.left),
            i64::from(frame.top),
        );
        out.push(CoalescedFrame {
            image: canvas.clone(),
            delay_cs: frame.delay_cs,
        });

        match frame.disposal {
            Disposal::Keep => {}
            Disposal::Background => clear_region(
                &mut canvas,
                frame.left,
                frame.top,
                frame.image.width(),
                frame.image.height(),
            ),
            Disposal::Previous => {
                if let Some(before) = before {
                    canvas = before;
                }
            }
        }
    }

    out
}

fn clear_region(canvas: &mut RgbaImage, left: u32, top: u32, width: u32, height: u32) {
    let right = left.saturating_add(width).min(canvas.width());
    let bottom = top.saturating_add(height).min(canvas.height());
    for y in top..bottom {
        for x in left..right {
            canvas.put_pixel(x, y, Rgba([0, 0, 0, 0]));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/coalesce.rs"]
mod tests;

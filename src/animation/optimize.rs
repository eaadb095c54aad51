use crate::{animation::quantize::QuantizedAnimation, foundation::math::within_fuzz};

/// One encoded frame: a rectangle of palette indices drawn over what is already displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeltaFrame {
    /// Region left edge.
    pub left: u32,
    /// Region top edge.
    pub top: u32,
    /// Region width.
    pub width: u32,
    /// Region height.
    pub height: u32,
    /// Row-major indices for the region.
    pub indices: Vec<u8>,
    /// Index that leaves the underlying pixel untouched, when the palette has room for one.
    pub transparent: Option<u8>,
    /// Display time in hundredths of a second.
    pub delay_cs: u16,
}

/// Index reserved for "unchanged" pixels, or `None` when the palette is full.
pub fn transparent_index(palette_len: usize) -> Option<u8> {
    u8::try_from(palette_len).ok()
}

/// Re-derive minimal inter-frame deltas for a quantized animation.
///
/// The first frame is emitted whole. Each later frame is cropped to the bounding box of
/// pixels that differ (beyond `fuzz`) from what is on screen; unchanged pixels inside the box
/// use the transparent index. A frame with no visible change is folded into the previous
/// frame's delay. All frames use "keep" disposal, so the decoder's canvas is the running
/// composite this function tracks.
pub fn optimize_deltas(anim: &QuantizedAnimation, delays_cs: &[u16], fuzz: f32) -> Vec<DeltaFrame> {
    let w = anim.width as usize;
    let transparent = transparent_index(anim.palette.len());
    let colors = &anim.palette.colors;
    let delay = |i: usize| delays_cs.get(i).copied().unwrap_or(0);

    let Some(first) = anim.frames.first() else {
        return Vec::new();
    };
    let mut displayed = first.clone();
    let mut out = vec![DeltaFrame {
        left: 0,
        top: 0,
        width: anim.width,
        height: anim.height,
        indices: first.clone(),
        transparent: None,
        delay_cs: delay(0),
    }];

    for (fi, frame) in anim.frames.iter().enumerate().skip(1) {
        let changed = |i: usize| {
            frame[i] != displayed[i]
                && !within_fuzz(
                    colors[usize::from(frame[i])],
                    colors[usize::from(displayed[i])],
                    fuzz,
                )
        };

        let mut bounds: Option<(usize, usize, usize, usize)> = None;
        for i in 0..frame.len() {
            if !changed(i) {
                continue;
            }
            let (x, y) = (i % w, i / w);
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }

        let Some((x0, y0, x1, y1)) = bounds else {
            if let Some(last) = out.last_mut() {
                last.delay_cs = last.delay_cs.saturating_add(delay(fi));
            }
            continue;
        };

        let mut indices = Vec::with_capacity((x1 - x0 + 1) * (y1 - y0 + 1));
        let mut updates = Vec::new();
        for y in y0..=y1 {
            for x in x0..=x1 {
                let i = y * w + x;
                if changed(i) {
                    indices.push(frame[i]);
                    updates.push(i);
                } else {
                    indices.push(transparent.unwrap_or(displayed[i]));
                }
            }
        }
        for i in updates {
            displayed[i] = frame[i];
        }

        out.push(DeltaFrame {
            left: x0 as u32,
            top: y0 as u32,
            width: (x1 - x0 + 1) as u32,
            height: (y1 - y0 + 1) as u32,
            indices,
            transparent,
            delay_cs: delay(fi),
        });
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/animation/optimize.rs"]
mod tests;

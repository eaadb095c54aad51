use std::borrow::Cow;

use crate::{
    animation::{decode::LoopCount, optimize::DeltaFrame, quantize::Palette},
    foundation::error::{DmdError, DmdResult},
};

fn to_u16(v: u32, what: &str) -> DmdResult<u16> {
    u16::try_from(v).map_err(|_| DmdError::encode(format!("gif {what} {v} exceeds 65535")))
}

/// Encode delta frames as a GIF with one global palette.
///
/// The palette gets one extra (unused) entry when any frame carries a transparent index.
pub fn encode_gif(
    width: u32,
    height: u32,
    palette: &Palette,
    frames: &[DeltaFrame],
    loop_count: LoopCount,
) -> DmdResult<Vec<u8>> {
    let mut table: Vec<u8> = palette.colors.iter().flatten().copied().collect();
    if frames.iter().any(|f| f.transparent.is_some()) {
        table.extend_from_slice(&[0, 0, 0]);
    }
    if table.len() / 3 > 256 {
        return Err(DmdError::encode(format!(
            "gif palette has {} entries",
            table.len() / 3
        )));
    }

    let mut encoder = gif::Encoder::new(
        Vec::new(),
        to_u16(width, "width")?,
        to_u16(height, "height")?,
        &table,
    )
    .map_err(|e| DmdError::encode(format!("start gif: {e}")))?;

    let repeat = match loop_count {
        LoopCount::Once => None,
        LoopCount::Times(n) => Some(gif::Repeat::Finite(n)),
        LoopCount::Forever => Some(gif::Repeat::Infinite),
    };
    if let Some(repeat) = repeat {
        encoder
            .set_repeat(repeat)
            .map_err(|e| DmdError::encode(format!("write gif loop count: {e}")))?;
    }

    for (i, f) in frames.iter().enumerate() {
        let frame = gif::Frame {
            left: to_u16(f.left, "frame left")?,
            top: to_u16(f.top, "frame top")?,
            width: to_u16(f.width, "frame width")?,
            height: to_u16(f.height, "frame height")?,
            delay: f.delay_cs,
            dispose: gif::DisposalMethod::Keep,
            transparent: f.transparent,
            buffer: Cow::Borrowed(f.indices.as_slice()),
            ..gif::Frame::default()
        };
        encoder
            .write_frame(&frame)
            .map_err(|e| DmdError::encode(format!("write gif frame {i}: {e}")))?;
    }

    encoder
        .into_inner()
        .map_err(|e| DmdError::encode(format!("finish gif: {e}")))
}

use std::io::Cursor;

use image::RgbaImage;

use crate::foundation::error::{DmdError, DmdResult};

/// What happens to a frame's region before the next frame is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposal {
    /// Leave the frame in place.
    Keep,
    /// Clear the frame's region to transparent.
    Background,
    /// Restore the canvas to its state before the frame was drawn.
    Previous,
}

impl From<gif::DisposalMethod> for Disposal {
    fn from(d: gif::DisposalMethod) -> Self {
        match d {
            gif::DisposalMethod::Any | gif::DisposalMethod::Keep => Self::Keep,
            gif::DisposalMethod::Background => Self::Background,
            gif::DisposalMethod::Previous => Self::Previous,
        }
    }
}

/// How many times the animation plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopCount {
    /// No loop extension: play once.
    Once,
    /// Repeat a fixed number of times.
    Times(u16),
    /// Loop forever.
    Forever,
}

impl From<gif::Repeat> for LoopCount {
    fn from(r: gif::Repeat) -> Self {
        match r {
            gif::Repeat::Infinite => Self::Forever,
            gif::Repeat::Finite(0) => Self::Once,
            gif::Repeat::Finite(n) => Self::Times(n),
        }
    }
}

/// One frame as stored in the file: a possibly partial region over the logical screen.
#[derive(Clone, Debug)]
pub struct RawFrame {
    /// Region offset from the left of the logical screen.
    pub left: u32,
    /// Region offset from the top of the logical screen.
    pub top: u32,
    /// Region pixels, straight RGBA8; transparent palette entries have alpha 0.
    pub image: RgbaImage,
    /// Display time in hundredths of a second.
    pub delay_cs: u16,
    /// Disposal applied after display.
    pub disposal: Disposal,
}

/// A decoded, not yet coalesced animation.
#[derive(Clone, Debug)]
pub struct DecodedAnimation {
    /// Logical screen width.
    pub width: u32,
    /// Logical screen height.
    pub height: u32,
    /// Frames in display order.
    pub frames: Vec<RawFrame>,
    /// Loop behavior of the source.
    pub loop_count: LoopCount,
}

/// Decode GIF bytes into raw frames, keeping each frame's region and disposal.
pub fn decode_gif(bytes: &[u8]) -> DmdResult<DecodedAnimation> {
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::RGBA);
    let mut decoder = options
        .read_info(Cursor::new(bytes))
        .map_err(|e| DmdError::decode(format!("read gif header: {e}")))?;

    let width = u32::from(decoder.width());
    let height = u32::from(decoder.height());

    let mut frames = Vec::new();
    while let Some(frame) = decoder
        .read_next_frame()
        .map_err(|e| DmdError::decode(format!("read gif frame {}: {e}", frames.len())))?
    {
        let image = RgbaImage::from_raw(
            u32::from(frame.width),
            u32::from(frame.height),
            frame.buffer.to_vec(),
        )
        .ok_or_else(|| {
            DmdError::decode(format!(
                "gif frame {} buffer does not match {}x{}",
                frames.len(),
                frame.width,
                frame.height
            ))
        })?;
        frames.push(RawFrame {
            left: u32::from(frame.left),
            top: u32::from(frame.top),
            image,
            delay_cs: frame.delay,
            disposal: frame.dispose.into(),
        });
    }

    if frames.is_empty() {
        return Err(DmdError::decode("gif contains no frames"));
    }
    if width == 0 || height == 0 {
        return Err(DmdError::decode("gif has an empty logical screen"));
    }

    Ok(DecodedAnimation {
        width,
        height,
        frames,
        loop_count: decoder.repeat().into(),
    })
}

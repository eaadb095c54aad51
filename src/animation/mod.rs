//! GIF pipeline: raw frames are coalesced into full canvases, transformed, quantized to one
//! shared palette, then re-compressed into deltas.
//!
//! Partial frames are never scaled on their own: every frame is a full canvas from
//! [`coalesce`] until [`optimize`] turns the final pixels back into deltas.

/// Single-pixel background derivation.
pub mod background;
/// Full-canvas frame expansion.
pub mod coalesce;
/// Raw GIF frame decoding.
pub mod decode;
/// GIF writing.
pub mod encode;
/// Inter-frame delta extraction.
pub mod optimize;
/// Shared-palette median cut and Floyd–Steinberg remapping.
pub mod quantize;
/// The [`Transform`](crate::Transform) implementation for animations.
pub mod transformer;

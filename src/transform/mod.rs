//! Raster transforms shared by both pipelines, and the [`Transform`] seam the orchestrator
//! dispatches through.

use crate::{
    config::conversion::ConversionConfig,
    foundation::{core::TargetSize, error::DmdResult},
};

/// Straight-alpha source-over compositing.
pub mod composite;
/// Sampling, scaling and centered extent.
pub mod geometry;
/// The single-frame PNG pipeline.
pub mod static_image;

/// A conversion pipeline: source bytes in, encoded output bytes out.
///
/// Implementations are stateless; all inputs arrive as arguments, so one instance can serve
/// any number of concurrent jobs.
pub trait Transform: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// File extension of the encoded output (without the dot).
    fn extension(&self) -> &'static str;

    /// Convert `source` into an encoded raster of exactly `size`.
    fn transform(
        &self,
        source: &[u8],
        size: TargetSize,
        config: &ConversionConfig,
    ) -> DmdResult<Vec<u8>>;
}

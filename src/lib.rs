//! dmdart turns artwork into display-ready rasters for low-resolution dot-matrix displays.
//!
//! Given a flat list of [`SourceItem`]s and a [`ConversionConfig`], the engine converts every
//! item at every configured [`TargetSize`] and writes the result under
//! `{output_root}/{W}x{H}/{category}/{item_name}.{png|gif}`.
//!
//! # Pipelines
//!
//! - **Static** ([`StaticImageTransformer`]): saturation boost, flatten onto the configured
//!   background, aspect-preserving nearest-neighbour sample, centered extent, PNG32.
//! - **Animated** ([`AnimationTransformer`]): coalesce GIF frames, derive a background from the
//!   first frame, composite/scale/grade every frame, quantize all frames to one shared palette
//!   with Floyd–Steinberg dithering, re-derive inter-frame deltas, GIF.
//!
//! # Re-runs
//!
//! [`ConversionOrchestrator`] skips a job when its output is at least as new as its source
//! (see [`should_convert`]). Failures are isolated per job and reported in the
//! [`ConversionSummary`].
//!
//! Fetching, catalog parsing and artwork discovery are not part of this crate.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod color;
mod config;
mod convert;
mod foundation;
/// Tracing subscriber setup for binaries.
pub mod logging;
mod transform;

pub use animation::background::derive_background;
pub use animation::coalesce::{CoalescedFrame, coalesce};
pub use animation::decode::{DecodedAnimation, Disposal, LoopCount, RawFrame, decode_gif};
pub use animation::encode::encode_gif;
pub use animation::optimize::{DeltaFrame, optimize_deltas, transparent_index};
pub use animation::quantize::{
    Palette, QuantizedAnimation, build_palette, dither_frame, quantize_frames,
};
pub use animation::transformer::{AnimationTransformer, PreparedFrame, REMAP_FUZZ};
pub use color::grade::{ColorGrade, saturation_of};
pub use color::parse::{ColorDef, parse_color};
pub use config::conversion::{ConversionConfig, MAX_ANIMATION_COLORS, MIN_ANIMATION_COLORS};
pub use config::settings::{LoggingConfig, OutputSizes, Settings};
pub use config::sizes::{parse_target_sizes, resolve_target_sizes};
pub use convert::freshness::{Freshness, check as check_freshness, should_convert};
pub use convert::job::{ConversionJob, JobKind, SourceItem, SourceKind, output_path};
pub use convert::orchestrator::{
    ConversionOrchestrator, ConversionSummary, JobFailure, RunOptions,
};
pub use convert::output::{ensure_parent_dir, write_atomic};
pub use foundation::core::{Rgba8, ScaleMode, TargetSize};
pub use foundation::error::{DmdError, DmdResult};
pub use logging::init_logging;
pub use transform::Transform;
pub use transform::composite::{flatten, over};
pub use transform::geometry::{extent_centered, sample, scale_to_canvas, scaled_dimensions};
pub use transform::static_image::StaticImageTransformer;

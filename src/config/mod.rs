//! Settings file parsing and the resolved, immutable conversion configuration.

/// The resolved configuration handed to every job.
pub mod conversion;
/// Serde model of the settings file.
pub mod settings;
/// `WxH` size-list resolution.
pub mod sizes;

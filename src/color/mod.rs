//! Color parsing and the fixed DMD color grade.

/// HSL modulation used by both the static and animated pipelines.
pub mod grade;
/// Textual and array color definitions from configuration.
pub mod parse;

//! Job enumeration, freshness checks, dispatch and output writing.

/// mtime-based skip decision.
pub mod freshness;
/// Source items, job kinds and output path derivation.
pub mod job;
/// The batch driver.
pub mod orchestrator;
/// Directory creation and atomic writes.
pub mod output;

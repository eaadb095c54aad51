use std::{path::Path, time::SystemTime};

/// Outcome of comparing a source against its derived output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Freshness {
    /// No output yet.
    Missing,
    /// Output exists but is older than the source, or a timestamp could not be read.
    Stale,
    /// Output is at least as new as the source.
    Fresh,
}

impl Freshness {
    /// `true` unless the output is fresh.
    pub fn needs_conversion(self) -> bool {
        self != Self::Fresh
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Compare modification times of `source` and `output`.
///
/// Timestamps only: a touched but unchanged source is stale.
pub fn check(source: &Path, output: &Path) -> Freshness {
    if !output.exists() {
        return Freshness::Missing;
    }
    match (modified(source), modified(output)) {
        (Some(src), Some(out)) if out >= src => Freshness::Fresh,
        _ => Freshness::Stale,
    }
}

/// `false` iff `output` exists and was modified no earlier than `source`.
pub fn should_convert(source: &Path, output: &Path) -> bool {
    check(source, output).needs_conversion()
}

#[cfg(test)]
#[path = "../../tests/unit/convert/freshness.rs"]
mod tests;

use crate::foundation::core::TargetSize;

/// Parse a comma-separated list of `WxH` tokens.
///
/// Malformed tokens are logged and dropped; the remaining tokens are still returned, in order.
/// Duplicates are kept.
pub fn parse_target_sizes(list: &str) -> Vec<TargetSize> {
    list.split(',')
        .filter_map(|token| match token.parse::<TargetSize>() {
            Ok(size) => Some(size),
            Err(err) => {
                tracing::warn!(token = token.trim(), %err, "skipping invalid output size");
                None
            }
        })
        .collect()
}

/// Flatten a list of size strings (each may itself be a comma list) into target sizes.
pub fn resolve_target_sizes<S: AsRef<str>>(entries: &[S]) -> Vec<TargetSize> {
    entries
        .iter()
        .flat_map(|entry| parse_target_sizes(entry.as_ref()))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/config/sizes.rs"]
mod tests;

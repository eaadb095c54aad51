/// Convenience result type used across dmdart.
pub type DmdResult<T> = Result<T, DmdError>;

/// Error taxonomy for configuration and conversion jobs.
///
/// Every variant is recoverable at job granularity: the orchestrator logs it and moves on.
#[derive(thiserror::Error, Debug)]
pub enum DmdError {
    /// Malformed configuration value (size token, color, palette size).
    #[error("config error: {0}")]
    Config(String),

    /// Source bytes could not be decoded as an image or animation.
    #[error("decode error: {0}")]
    Decode(String),

    /// Converted raster could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// Filesystem failure (read, directory creation, write, rename).
    #[error("io error: {context}")]
    Io {
        /// What was being attempted, including the path involved.
        context: String,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Input rejected before any work was done.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DmdError {
    /// Build a [`DmdError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`DmdError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`DmdError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`DmdError::Io`] value.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Build a [`DmdError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

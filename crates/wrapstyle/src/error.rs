//! Error types for the wrapstyle crate.

use thiserror::Error;

/// Errors raised while converting color values.
///
/// This is the only failure the resolver surfaces. Callers are expected to
/// catch it and substitute [`ColorSpec::fallback`](crate::ColorSpec::fallback)
/// so that rendering never aborts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The hex value has the wrong length or contains non-hex characters.
    #[error("invalid color format '{value}': {reason}")]
    InvalidColorFormat {
        /// The offending input, as given.
        value: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

impl ColorError {
    pub(crate) fn invalid(value: &str, reason: &'static str) -> Self {
        ColorError::InvalidColorFormat {
            value: value.to_string(),
            reason,
        }
    }
}

/// Result type for color operations.
pub type Result<T> = std::result::Result<T, ColorError>;

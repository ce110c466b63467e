//! Configuration loading errors.
//!
//! These only occur while reading settings or field configuration. Rendering
//! itself never fails.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when settings or field configuration cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {message}", .path.display())]
    Load { path: PathBuf, message: String },

    /// The content could not be parsed.
    #[error("failed to parse {format} configuration{}: {message}", location(.path))]
    Parse {
        /// `"yaml"` or `"json"`.
        format: &'static str,
        /// Source file, when loaded from disk.
        path: Option<PathBuf>,
        /// Error message from the parser.
        message: String,
    },

    /// The file extension does not name a supported format.
    #[error("unsupported configuration format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

impl ConfigError {
    pub(crate) fn with_path(self, source: &std::path::Path) -> Self {
        match self {
            ConfigError::Parse {
                format, message, ..
            } => ConfigError::Parse {
                format,
                path: Some(source.to_path_buf()),
                message,
            },
            other => other,
        }
    }
}

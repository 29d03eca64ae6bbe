//! Shared error types for report generation.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// File system errors while reading the input or writing the report
    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed input document; propagated unchanged, never papered over
    /// with an empty report
    #[error("Malformed benchmark document {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Every model scored zero (or the document carried no models), so
    /// aggregate statistics are undefined
    #[error("No model produced a usable score; cannot compute summary statistics")]
    NoActiveModels,
}

impl ReportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

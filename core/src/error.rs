//! Error types for man-page generation.
//!
//! Every variant is fatal for a run. Lines the classifier cannot parse are
//! not errors; they are reported as diagnostics and skipped.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating a man page.
#[derive(Debug, Error)]
pub enum GenError {
    /// An input file could not be opened or read.
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the config stream failed part way through.
    #[error("failed to read config input: {0}")]
    Read(#[source] std::io::Error),

    /// Writing the man page or a diagnostic failed.
    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),

    /// The page config file is not valid YAML for [`PageConfig`](crate::PageConfig).
    #[error("invalid page config '{}': {source}", .path.display())]
    PageConfig {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl GenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias for results with [`GenError`].
pub type Result<T> = std::result::Result<T, GenError>;

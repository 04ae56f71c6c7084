//! Remapping error types.

use camino::Utf8PathBuf;
use thiserror::Error;

/// An error that occurred while loading remappings.
#[derive(Debug, Error)]
pub enum RemapError {
    /// The remappings file could not be read.
    #[error("failed to read remappings from {path}: {source}")]
    ReadFailed {
        /// The remappings file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

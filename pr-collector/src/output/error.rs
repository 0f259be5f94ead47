//! Output error types.

use thiserror::Error;

/// Errors that can occur while writing the output document.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to create the output directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the output file.
    #[error("Failed to write file '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

//! Error types for the HTTP server.

use std::path::PathBuf;

/// Server error type.
///
/// Rendering itself cannot fail; these cover startup only.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The markdown document could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    ReadDocument {
        /// Document path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Binding or serving failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

//! Error types for document rendering

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while exporting a rendered document
#[derive(Error, Debug)]
pub enum RenderError {
    /// The document could not be written to disk
    #[error("Failed to write document to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;

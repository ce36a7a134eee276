//! Error type for document export.

use std::path::PathBuf;
use thiserror::Error;

/// Any failure while laying out, drawing or saving a document.
#[derive(Debug, Error)]
pub enum DocumentRenderError {
    #[error("Text wrapping failed: {0}")]
    Wrap(String),

    #[error("Drawing failed: {0}")]
    Draw(String),

    #[error("Could not write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

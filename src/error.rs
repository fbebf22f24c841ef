use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while exporting or saving the drawing
#[derive(Debug, Error)]
pub enum PaintError {
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for export operations
pub type PaintResult<T> = Result<T, PaintError>;

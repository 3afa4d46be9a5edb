//! Rendering error types.

use thiserror::Error;

/// Errors that can occur while exporting rendered data.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Failed to write the output file.
    #[error("failed to save image: {0}")]
    IoError(#[from] std::io::Error),

    /// Image encoding error.
    #[error("image encoding error: {0}")]
    ImageError(#[from] image::ImageError),

    /// Unsupported output image format.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Pixel data does not match the declared dimensions.
    #[error("invalid image data")]
    InvalidImageData,
}

/// A specialized Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;

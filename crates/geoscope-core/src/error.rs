//! Error types for geoscope-rs.

use thiserror::Error;

/// The main error type for geoscope-rs operations.
#[derive(Error, Debug)]
pub enum GeoscopeError {
    /// A focal length that is not positive or that degenerates an angle.
    #[error("invalid intrinsics: focal lengths must be positive and give angles in (0, pi) (fx = {fx}, fy = {fy})")]
    InvalidIntrinsics { fx: f64, fy: f64 },

    /// A field-of-view angle lies outside the open interval (0, pi).
    #[error("invalid field of view: angles must lie in (0, pi) (horizontal = {horizontal}, vertical = {vertical})")]
    InvalidFov { horizontal: f64, vertical: f64 },

    /// An image or texel grid with a zero dimension.
    #[error("invalid image or texel grid: {0}")]
    InvalidImageOrGrid(String),

    /// A planar patch with a non-positive side length.
    #[error("invalid plane extent: sides must be positive (width = {width}, height = {height})")]
    InvalidExtent { width: f64, height: f64 },

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Geoscope has not been initialized.
    #[error("geoscope not initialized - call geoscope::init() first")]
    NotInitialized,

    /// Geoscope has already been initialized.
    #[error("geoscope already initialized")]
    AlreadyInitialized,

    /// A structure with the given name already exists.
    #[error("structure '{0}' already exists")]
    StructureExists(String),

    /// A structure with the given name was not found.
    #[error("structure '{0}' not found")]
    StructureNotFound(String),

    /// Image decoding error.
    #[error("image error: {0}")]
    ImageError(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for geoscope-rs operations.
pub type Result<T> = std::result::Result<T, GeoscopeError>;

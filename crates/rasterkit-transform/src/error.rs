//! Error types for rasterkit-transform

use thiserror::Error;

/// Errors that can occur during resampling
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterkit_core::Error),

    /// Interpolation name not recognised
    #[error("unknown interpolation: {0}")]
    UnknownInterpolation(String),

    /// Invalid transformation parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;

//! Error types for rasterkit-draw

use thiserror::Error;

/// Errors that can occur while drawing
#[derive(Debug, Error)]
pub enum DrawError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterkit_core::Error),

    /// Region error from filling a drawn outline
    #[error("region error: {0}")]
    Region(#[from] rasterkit_region::RegionError),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for drawing operations
pub type DrawResult<T> = Result<T, DrawError>;

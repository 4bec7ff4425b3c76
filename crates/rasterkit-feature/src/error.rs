//! Error types for rasterkit-feature

use thiserror::Error;

/// Errors that can occur during feature detection
#[derive(Debug, Error)]
pub enum FeatureError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterkit_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for feature operations
pub type FeatureResult<T> = Result<T, FeatureError>;

//! Error types for rasterkit-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// rasterkit core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid buffer dimensions
    #[error("invalid buffer dimensions: {rows}x{cols}x{channels}")]
    InvalidDimension {
        rows: usize,
        cols: usize,
        channels: usize,
    },

    /// Index out of bounds
    #[error("index out of bounds: ({row}, {col}, {channel}) in {rows}x{cols}x{channels}")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        channel: usize,
        rows: usize,
        cols: usize,
        channels: usize,
    },

    /// A per-channel value does not match the buffer's channel count
    #[error("channel mismatch: value has {actual} channels, buffer has {expected}")]
    ChannelMismatch { expected: usize, actual: usize },

    /// Buffer dimension mismatch
    #[error("dimension mismatch: expected {}x{}x{}, got {}x{}x{}", .expected.0, .expected.1, .expected.2, .actual.0, .actual.1, .actual.2)]
    DimensionMismatch {
        expected: (usize, usize, usize),
        actual: (usize, usize, usize),
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for rasterkit core operations
pub type Result<T> = std::result::Result<T, Error>;

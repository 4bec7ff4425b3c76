//! rasterkit core - Basic data structures for raster processing
//!
//! This crate provides the fundamental data structures shared by every
//! other rasterkit crate:
//!
//! - [`PixelBuffer`] - multi-channel `f32` image indexed (row, column, channel)
//! - [`PixelValue`] - scalar or per-channel value written by drawing code
//! - [`LabelBuffer`] - per-pixel region labels
//!
//! Buffers are plain owned values. Operations borrow them for the
//! duration of a call and keep nothing afterwards.

pub mod buffer;
pub mod error;
pub mod label;

pub use buffer::{InsertOp, PixelBuffer, PixelValue};
pub use error::{Error, Result};
pub use label::LabelBuffer;

/// The largest value normally written into a buffer
pub const MAX_IMAGE_VALUE: f32 = 255.0;

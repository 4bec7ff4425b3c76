//! LabelBuffer - per-pixel region labels
//!
//! A single-channel `u32` image with the same extent as the buffer it was
//! derived from. Produced by region labeling; consumed by anything that
//! wants to look at one region at a time.

use crate::buffer::PixelBuffer;
use crate::error::{Error, Result};

/// Per-pixel label image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelBuffer {
    rows: usize,
    cols: usize,
    data: Vec<u32>,
}

impl LabelBuffer {
    /// Create a label buffer with every label set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if either extent is 0.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension {
                rows,
                cols,
                channels: 1,
            });
        }
        Ok(LabelBuffer {
            rows,
            cols,
            data: vec![0; rows * cols],
        })
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Label at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[row * self.cols + col])
    }

    /// Set the label at (row, col)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if the coordinate is out of range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, label: u32) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                channel: 0,
                rows: self.rows,
                cols: self.cols,
                channels: 1,
            });
        }
        self.data[row * self.cols + col] = label;
        Ok(())
    }

    /// Raw labels in row-major order
    #[inline]
    pub fn labels(&self) -> &[u32] {
        &self.data
    }

    /// Mutable raw labels in row-major order
    #[inline]
    pub fn labels_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Largest label present
    pub fn max_label(&self) -> u32 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// Number of pixels carrying `label`
    pub fn count(&self, label: u32) -> usize {
        self.data.iter().filter(|&&l| l == label).count()
    }

    /// Convert to a single-channel `f32` buffer
    pub fn to_pixel_buffer(&self) -> PixelBuffer {
        let data = self.data.iter().map(|&l| l as f32).collect();
        PixelBuffer::from_parts(self.rows, self.cols, 1, data)
    }
}

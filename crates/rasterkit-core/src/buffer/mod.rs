//! PixelBuffer - Floating-point multi-channel image
//!
//! `PixelBuffer` is a 3-axis array of `f32` samples indexed by
//! (row, column, channel). Rows play the role of `y`, columns of `x`.
//! Every drawing, labeling, resampling and detection routine in the
//! workspace reads or mutates one of these.
//!
//! See [`blend`] for clipped writes and [`region`] for rectangular
//! helpers.
//!
//! # Examples
//!
//! ```
//! use rasterkit_core::PixelBuffer;
//!
//! // A 100-row, 80-column RGB buffer
//! let mut buf = PixelBuffer::new(100, 80, 3).unwrap();
//!
//! buf.set(10, 20, 1, 0.5).unwrap();
//! assert_eq!(buf.get(10, 20, 1), Some(0.5));
//! assert_eq!(buf.dimensions(), (100, 80, 3));
//! ```

pub mod blend;
pub mod region;
mod value;

pub use region::InsertOp;
pub use value::PixelValue;

use crate::error::{Error, Result};

/// Floating-point multi-channel image
///
/// # Memory Layout
///
/// Data is stored row-major with interleaved channels and no padding.
/// The sample at (row, col, channel) is at index
/// `(row * cols + col) * channels + channel`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    /// Number of rows (height)
    rows: usize,
    /// Number of columns (width)
    cols: usize,
    /// Samples per pixel
    channels: usize,
    /// Sample data
    data: Vec<f32>,
}

impl PixelBuffer {
    /// Create a new buffer with all samples set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if any extent is 0.
    pub fn new(rows: usize, cols: usize, channels: usize) -> Result<Self> {
        Self::new_with_value(rows, cols, channels, 0.0)
    }

    /// Create a new buffer with all samples set to `value`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if any extent is 0.
    pub fn new_with_value(rows: usize, cols: usize, channels: usize, value: f32) -> Result<Self> {
        if rows == 0 || cols == 0 || channels == 0 {
            return Err(Error::InvalidDimension {
                rows,
                cols,
                channels,
            });
        }

        Ok(PixelBuffer {
            rows,
            cols,
            channels,
            data: vec![value; rows * cols * channels],
        })
    }

    /// Create a buffer from raw interleaved data
    ///
    /// # Errors
    ///
    /// Returns an error if any extent is 0 or the data length doesn't match.
    pub fn from_data(rows: usize, cols: usize, channels: usize, data: Vec<f32>) -> Result<Self> {
        if rows == 0 || cols == 0 || channels == 0 {
            return Err(Error::InvalidDimension {
                rows,
                cols,
                channels,
            });
        }

        let expected = rows * cols * channels;
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{}x{} = {}",
                data.len(),
                rows,
                cols,
                channels,
                expected
            )));
        }

        Ok(PixelBuffer {
            rows,
            cols,
            channels,
            data,
        })
    }

    /// Assemble a buffer whose extents the caller has already validated
    pub(crate) fn from_parts(rows: usize, cols: usize, channels: usize, data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), rows * cols * channels);
        PixelBuffer {
            rows,
            cols,
            channels,
            data,
        }
    }

    /// Create a single-channel buffer from nested rows
    ///
    /// Handy for small hand-written fixtures.
    ///
    /// # Errors
    ///
    /// Returns an error if `rows` is empty or ragged.
    ///
    /// ```
    /// use rasterkit_core::PixelBuffer;
    ///
    /// let buf = PixelBuffer::from_rows(&[[0.0f32, 1.0], [2.0, 3.0]]).unwrap();
    /// assert_eq!(buf.get(1, 0, 0), Some(2.0));
    /// ```
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(Error::InvalidParameter(format!(
                    "ragged rows: expected {} columns, got {}",
                    ncols,
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Self::from_data(nrows, ncols, 1, data)
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

    /// Number of channels per pixel
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Extents as (rows, cols, channels)
    #[inline]
    pub fn dimensions(&self) -> (usize, usize, usize) {
        (self.rows, self.cols, self.channels)
    }

    /// Whether the signed coordinate lies inside the buffer
    #[inline]
    pub fn contains(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as u64) < self.rows as u64 && (col as u64) < self.cols as u64
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        (row * self.cols + col) * self.channels
    }

    /// Get one sample, or `None` when out of range
    #[inline]
    pub fn get(&self, row: usize, col: usize, channel: usize) -> Option<f32> {
        if row >= self.rows || col >= self.cols || channel >= self.channels {
            return None;
        }
        Some(self.data[self.offset(row, col) + channel])
    }

    /// Set one sample
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if the coordinate is out of range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, channel: usize, value: f32) -> Result<()> {
        if row >= self.rows || col >= self.cols || channel >= self.channels {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                channel,
                rows: self.rows,
                cols: self.cols,
                channels: self.channels,
            });
        }
        let idx = self.offset(row, col) + channel;
        self.data[idx] = value;
        Ok(())
    }

    /// Get one sample without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if the computed index is outside the data.
    #[inline]
    pub fn get_unchecked(&self, row: usize, col: usize, channel: usize) -> f32 {
        self.data[self.offset(row, col) + channel]
    }

    /// Set one sample without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if the computed index is outside the data.
    #[inline]
    pub fn set_unchecked(&mut self, row: usize, col: usize, channel: usize, value: f32) {
        let idx = self.offset(row, col) + channel;
        self.data[idx] = value;
    }

    /// All channels of one pixel
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> Option<&[f32]> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let start = self.offset(row, col);
        Some(&self.data[start..start + self.channels])
    }

    /// All channels of one pixel, mutably
    #[inline]
    pub fn pixel_mut(&mut self, row: usize, col: usize) -> Option<&mut [f32]> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let start = self.offset(row, col);
        let channels = self.channels;
        Some(&mut self.data[start..start + channels])
    }

    /// Sum of a pixel's channel values
    #[inline]
    pub fn channel_sum(&self, row: usize, col: usize) -> Option<f32> {
        self.pixel(row, col).map(|p| p.iter().sum())
    }

    /// Write `value` to every channel of one pixel
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate is out of range or a per-channel
    /// value does not match the channel count.
    pub fn set_pixel(&mut self, row: usize, col: usize, value: &PixelValue) -> Result<()> {
        value.check_channels(self.channels)?;
        let (rows, cols, channels) = self.dimensions();
        let pixel = self.pixel_mut(row, col).ok_or(Error::IndexOutOfBounds {
            row,
            col,
            channel: 0,
            rows,
            cols,
            channels,
        })?;
        for (c, sample) in pixel.iter_mut().enumerate() {
            *sample = value.channel(c);
        }
        Ok(())
    }

    /// Set every sample of the buffer
    ///
    /// # Errors
    ///
    /// Returns `Error::ChannelMismatch` for a per-channel value of the
    /// wrong length.
    pub fn fill(&mut self, value: &PixelValue) -> Result<()> {
        value.check_channels(self.channels)?;
        for pixel in self.data.chunks_exact_mut(self.channels) {
            for (c, sample) in pixel.iter_mut().enumerate() {
                *sample = value.channel(c);
            }
        }
        Ok(())
    }

    /// Raw access to the sample data
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutable access to the sample data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consume the buffer, returning its sample data
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    /// Minimum and maximum sample over all channels
    pub fn extrema(&self) -> (f32, f32) {
        self.data
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_extent() {
        assert!(PixelBuffer::new(0, 5, 1).is_err());
        assert!(PixelBuffer::new(5, 0, 1).is_err());
        assert!(PixelBuffer::new(5, 5, 0).is_err());
        assert!(PixelBuffer::new(1, 1, 1).is_ok());
    }

    #[test]
    fn test_get_set() {
        let mut buf = PixelBuffer::new(4, 6, 3).unwrap();
        buf.set(3, 5, 2, 7.5).unwrap();
        assert_eq!(buf.get(3, 5, 2), Some(7.5));
        assert_eq!(buf.get(3, 5, 1), Some(0.0));
        assert_eq!(buf.get(4, 0, 0), None);
        assert!(buf.set(0, 6, 0, 1.0).is_err());
        // Interleaved layout
        assert_eq!(buf.data()[(3 * 6 + 5) * 3 + 2], 7.5);
    }

    #[test]
    fn test_from_data_length_mismatch() {
        assert!(PixelBuffer::from_data(2, 2, 1, vec![0.0; 3]).is_err());
        assert!(PixelBuffer::from_data(2, 2, 2, vec![0.0; 8]).is_ok());
    }

    #[test]
    fn test_from_rows_ragged() {
        let rows: Vec<Vec<f32>> = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(PixelBuffer::from_rows(&rows).is_err());
    }

    #[test]
    fn test_pixel_and_channel_sum() {
        let mut buf = PixelBuffer::new(2, 2, 3).unwrap();
        buf.set_pixel(1, 1, &PixelValue::from([1.0f32, 2.0, 3.0])).unwrap();
        assert_eq!(buf.pixel(1, 1), Some(&[1.0, 2.0, 3.0][..]));
        assert_eq!(buf.channel_sum(1, 1), Some(6.0));
        assert_eq!(buf.channel_sum(2, 0), None);
    }

    #[test]
    fn test_set_pixel_channel_mismatch() {
        let mut buf = PixelBuffer::new(2, 2, 3).unwrap();
        let err = buf.set_pixel(0, 0, &PixelValue::from([1.0f32, 2.0])).unwrap_err();
        assert_eq!(
            err,
            Error::ChannelMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let mut buf = PixelBuffer::new(3, 3, 1).unwrap();
        let copy = buf.clone();
        buf.set(1, 1, 0, 9.0).unwrap();
        assert_eq!(copy.get(1, 1, 0), Some(0.0));
    }

    #[test]
    fn test_contains_and_extrema() {
        let mut buf = PixelBuffer::new(3, 4, 1).unwrap();
        assert!(buf.contains(2, 3));
        assert!(!buf.contains(-1, 0));
        assert!(!buf.contains(3, 0));
        buf.set(0, 0, 0, -2.0).unwrap();
        buf.set(2, 3, 0, 5.0).unwrap();
        assert_eq!(buf.extrema(), (-2.0, 5.0));
    }
}

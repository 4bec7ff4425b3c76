//! Clipped pixel writes
//!
//! Drawing code works in signed coordinates and routinely produces points
//! that fall outside the buffer. These primitives silently skip such
//! points instead of failing, so rasterizers never have to clip.

use super::{PixelBuffer, PixelValue};
use crate::error::Result;

impl PixelBuffer {
    /// Composite `value` into the pixel at (row, col)
    ///
    /// Each channel becomes `value * opacity + existing * (1 - opacity)`.
    /// Out-of-bounds coordinates are skipped.
    ///
    /// # Returns
    ///
    /// `true` if a pixel was modified.
    ///
    /// # Errors
    ///
    /// Returns `Error::ChannelMismatch` for a per-channel value of the
    /// wrong length.
    ///
    /// # Examples
    ///
    /// ```
    /// use rasterkit_core::{PixelBuffer, PixelValue};
    ///
    /// let mut buf = PixelBuffer::new_with_value(3, 3, 1, 100.0).unwrap();
    /// buf.blend_pixel(1, 1, &PixelValue::Scalar(200.0), 0.25).unwrap();
    /// assert_eq!(buf.get(1, 1, 0), Some(125.0));
    ///
    /// // Off the buffer: nothing happens
    /// assert!(!buf.blend_pixel(-1, 7, &PixelValue::Scalar(0.0), 1.0).unwrap());
    /// ```
    pub fn blend_pixel(
        &mut self,
        row: i64,
        col: i64,
        value: &PixelValue,
        opacity: f32,
    ) -> Result<bool> {
        value.check_channels(self.channels())?;
        if !self.contains(row, col) {
            return Ok(false);
        }

        let keep = 1.0 - opacity;
        if let Some(pixel) = self.pixel_mut(row as usize, col as usize) {
            for (c, sample) in pixel.iter_mut().enumerate() {
                *sample = value.channel(c) * opacity + keep * *sample;
            }
        }
        Ok(true)
    }

    /// Write `value` into every channel at (row, col), skipping
    /// out-of-bounds coordinates
    ///
    /// # Returns
    ///
    /// `true` if a pixel was modified.
    pub fn set_pixel_clipped(&mut self, row: i64, col: i64, value: &PixelValue) -> Result<bool> {
        value.check_channels(self.channels())?;
        if !self.contains(row, col) {
            return Ok(false);
        }

        if let Some(pixel) = self.pixel_mut(row as usize, col as usize) {
            for (c, sample) in pixel.iter_mut().enumerate() {
                *sample = value.channel(c);
            }
        }
        Ok(true)
    }
}

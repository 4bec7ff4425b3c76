//! Rectangular region helpers
//!
//! - Copying a sub-rectangle out of a buffer
//! - Setting a sub-rectangle to a constant
//! - Inserting one buffer into another, centred on a point
//! - Reducing a multi-channel buffer to a single channel

use super::{PixelBuffer, PixelValue};
use crate::error::{Error, Result};

/// How inserted samples combine with the samples already present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertOp {
    /// Replace the destination
    #[default]
    Assign,
    /// Add to the destination
    Add,
    /// Subtract from the destination
    Subtract,
    /// Multiply the destination
    Multiply,
    /// Divide the destination
    Divide,
}

impl InsertOp {
    #[inline]
    fn apply(self, dst: f32, src: f32) -> f32 {
        match self {
            InsertOp::Assign => src,
            InsertOp::Add => dst + src,
            InsertOp::Subtract => dst - src,
            InsertOp::Multiply => dst * src,
            InsertOp::Divide => dst / src,
        }
    }
}

impl PixelBuffer {
    /// Copy the half-open rectangle `[ylo, yhi) x [xlo, xhi)`
    ///
    /// # Errors
    ///
    /// Returns an error if the rectangle is empty or extends past the buffer.
    pub fn region(&self, ylo: usize, yhi: usize, xlo: usize, xhi: usize) -> Result<PixelBuffer> {
        if ylo >= yhi || xlo >= xhi || yhi > self.rows() || xhi > self.cols() {
            return Err(Error::InvalidParameter(format!(
                "region [{}, {}) x [{}, {}) not inside {}x{}",
                ylo,
                yhi,
                xlo,
                xhi,
                self.rows(),
                self.cols()
            )));
        }

        let channels = self.channels();
        let mut data = Vec::with_capacity((yhi - ylo) * (xhi - xlo) * channels);
        for row in ylo..yhi {
            let start = (row * self.cols() + xlo) * channels;
            let end = (row * self.cols() + xhi) * channels;
            data.extend_from_slice(&self.data()[start..end]);
        }
        PixelBuffer::from_data(yhi - ylo, xhi - xlo, channels, data)
    }

    /// Set the half-open rectangle `[ylo, yhi) x [xlo, xhi)` to `value`
    ///
    /// The rectangle is clipped to the buffer; an empty intersection is
    /// not an error.
    pub fn set_region(
        &mut self,
        ylo: i64,
        xlo: i64,
        yhi: i64,
        xhi: i64,
        value: &PixelValue,
    ) -> Result<()> {
        value.check_channels(self.channels())?;
        let y0 = ylo.max(0) as usize;
        let x0 = xlo.max(0) as usize;
        let y1 = yhi.clamp(0, self.rows() as i64) as usize;
        let x1 = xhi.clamp(0, self.cols() as i64) as usize;

        for row in y0..y1 {
            for col in x0..x1 {
                if let Some(pixel) = self.pixel_mut(row, col) {
                    for (c, sample) in pixel.iter_mut().enumerate() {
                        *sample = value.channel(c);
                    }
                }
            }
        }
        Ok(())
    }

    /// Insert `reg` so that its centre lands on (yc, xc)
    ///
    /// Only the part of `reg` overlapping this buffer is used.
    ///
    /// # Errors
    ///
    /// Returns `Error::ChannelMismatch` if the channel counts differ.
    pub fn insert(&mut self, reg: &PixelBuffer, yc: i64, xc: i64, op: InsertOp) -> Result<()> {
        if reg.channels() != self.channels() {
            return Err(Error::ChannelMismatch {
                expected: self.channels(),
                actual: reg.channels(),
            });
        }

        let ylo = yc - (reg.rows() / 2) as i64;
        let xlo = xc - (reg.cols() / 2) as i64;
        for r in 0..reg.rows() {
            let row = ylo + r as i64;
            for c in 0..reg.cols() {
                let col = xlo + c as i64;
                if !self.contains(row, col) {
                    continue;
                }
                let (Some(src), Some(dst)) =
                    (reg.pixel(r, c), self.pixel_mut(row as usize, col as usize))
                else {
                    continue;
                };
                for (sample, &s) in dst.iter_mut().zip(src) {
                    *sample = op.apply(*sample, s);
                }
            }
        }
        Ok(())
    }

    /// Average the channels into a single-channel buffer
    ///
    /// A single-channel buffer is returned as an unchanged copy.
    pub fn mono(&self) -> PixelBuffer {
        let channels = self.channels();
        if channels == 1 {
            return self.clone();
        }

        let data: Vec<f32> = self
            .data()
            .chunks_exact(channels)
            .map(|p| p.iter().sum::<f32>() / channels as f32)
            .collect();
        PixelBuffer::from_parts(self.rows(), self.cols(), 1, data)
    }
}

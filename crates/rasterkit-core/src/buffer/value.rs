//! Drawing values

use crate::error::{Error, Result};

/// Value written into a pixel
///
/// A scalar is broadcast to every channel; a per-channel value must have
/// exactly as many entries as the target buffer has channels.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelValue {
    /// Same value in every channel
    Scalar(f32),
    /// One value per channel
    Channels(Vec<f32>),
}

impl PixelValue {
    /// Value for channel `c`
    ///
    /// Only meaningful after [`check_channels`](Self::check_channels) has
    /// accepted the target channel count.
    #[inline]
    pub fn channel(&self, c: usize) -> f32 {
        match self {
            PixelValue::Scalar(v) => *v,
            PixelValue::Channels(vs) => vs[c],
        }
    }

    /// Check that this value can be written into `channels` channels
    pub fn check_channels(&self, channels: usize) -> Result<()> {
        match self {
            PixelValue::Scalar(_) => Ok(()),
            PixelValue::Channels(vs) if vs.len() == channels => Ok(()),
            PixelValue::Channels(vs) => Err(Error::ChannelMismatch {
                expected: channels,
                actual: vs.len(),
            }),
        }
    }

    /// Sum of the value over `channels` channels
    ///
    /// This is the quantity compared against a pixel's channel sum.
    pub fn channel_sum(&self, channels: usize) -> f32 {
        match self {
            PixelValue::Scalar(v) => v * channels as f32,
            PixelValue::Channels(vs) => vs.iter().sum(),
        }
    }
}

impl Default for PixelValue {
    fn default() -> Self {
        PixelValue::Scalar(crate::MAX_IMAGE_VALUE)
    }
}

impl From<f32> for PixelValue {
    fn from(v: f32) -> Self {
        PixelValue::Scalar(v)
    }
}

impl From<Vec<f32>> for PixelValue {
    fn from(vs: Vec<f32>) -> Self {
        PixelValue::Channels(vs)
    }
}

impl From<&[f32]> for PixelValue {
    fn from(vs: &[f32]) -> Self {
        PixelValue::Channels(vs.to_vec())
    }
}

impl<const N: usize> From<[f32; N]> for PixelValue {
    fn from(vs: [f32; N]) -> Self {
        PixelValue::Channels(vs.to_vec())
    }
}

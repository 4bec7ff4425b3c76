//! Position markers

use crate::error::{DrawError, DrawResult};
use crate::line::draw_line_fast;
use rasterkit_core::{PixelBuffer, PixelValue};
use rasterkit_feature::Peak;
use std::str::FromStr;

/// Marker shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkSymbol {
    /// A single pixel
    Dot,
    /// Horizontal and vertical strokes
    #[default]
    Plus,
    /// Diagonal strokes
    Cross,
    /// A filled 3x3 square
    Block,
}

impl FromStr for MarkSymbol {
    type Err = DrawError;

    /// Parse the one-character names `.`, `+`, `x` and `o`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "." => Ok(MarkSymbol::Dot),
            "+" => Ok(MarkSymbol::Plus),
            "x" => Ok(MarkSymbol::Cross),
            "o" => Ok(MarkSymbol::Block),
            _ => Err(DrawError::InvalidParameters(format!(
                "unrecognised marker symbol {:?}",
                s
            ))),
        }
    }
}

/// Draw a marker centred on (y, x)
///
/// `size` is the stroke length of `Plus` and `Cross`; it is ignored by
/// `Dot` and `Block`. Parts falling outside the buffer are skipped.
pub fn mark_at_position(
    buf: &mut PixelBuffer,
    y: i32,
    x: i32,
    value: &PixelValue,
    symbol: MarkSymbol,
    size: u32,
) -> DrawResult<()> {
    value.check_channels(buf.channels())?;
    let half = (size / 2) as i32;
    match symbol {
        MarkSymbol::Dot => {
            buf.set_pixel_clipped(y as i64, x as i64, value)?;
        }
        MarkSymbol::Plus => {
            let (top, bottom) = (y.saturating_sub(half), y.saturating_add(half));
            let (left, right) = (x.saturating_sub(half), x.saturating_add(half));
            draw_line_fast(buf, top, x, bottom, x, value)?;
            draw_line_fast(buf, y, left, y, right, value)?;
        }
        MarkSymbol::Cross => {
            let (top, bottom) = (y.saturating_sub(half), y.saturating_add(half));
            let (left, right) = (x.saturating_sub(half), x.saturating_add(half));
            draw_line_fast(buf, top, left, bottom, right, value)?;
            draw_line_fast(buf, top, right, bottom, left, value)?;
        }
        MarkSymbol::Block => {
            let (y, x) = (y as i64, x as i64);
            buf.set_region(y - 1, x - 1, y + 2, x + 2, value)?;
        }
    }
    Ok(())
}

/// Mark every peak position
pub fn mark_peaks(
    buf: &mut PixelBuffer,
    peaks: &[Peak],
    value: &PixelValue,
    symbol: MarkSymbol,
    size: u32,
) -> DrawResult<()> {
    for peak in peaks {
        let row = i32::try_from(peak.row).unwrap_or(i32::MAX);
        let col = i32::try_from(peak.col).unwrap_or(i32::MAX);
        mark_at_position(buf, row, col, value, symbol, size)?;
    }
    Ok(())
}

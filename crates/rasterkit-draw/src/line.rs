//! Line rasterization
//!
//! - [`draw_line_fast`] sets every pixel of a Bresenham line to the value
//! - [`draw_line`] blends a Wu anti-aliased line into the buffer
//!
//! Pixels falling outside the buffer are skipped.

use crate::error::DrawResult;
use rasterkit_core::{PixelBuffer, PixelValue};
use std::mem::swap;

/// Slope used for a line with no extent along its dominant axis
pub const VERTICAL_SLOPE: f64 = 1.0e30;

/// Draw a line with Bresenham's integer algorithm
///
/// Both endpoints are drawn. The endpoints are normalized before
/// stepping, so drawing from either end gives the same pixels.
///
/// # Errors
///
/// Returns an error if `value` does not match the channel count.
pub fn draw_line_fast(
    buf: &mut PixelBuffer,
    y0: i32,
    x0: i32,
    y1: i32,
    x1: i32,
    value: &PixelValue,
) -> DrawResult<()> {
    value.check_channels(buf.channels())?;

    let (y0, x0, y1, x1) = (y0 as i64, x0 as i64, y1 as i64, x1 as i64);
    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    let (mut y0, mut x0, mut y1, mut x1) = if steep {
        (x0, y0, x1, y1)
    } else {
        (y0, x0, y1, x1)
    };
    if x0 > x1 {
        swap(&mut x0, &mut x1);
        swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = (y1 - y0).abs();
    let ystep = if y0 < y1 { 1 } else { -1 };

    // Only major-axis steps that land on the buffer are walked.
    let extent = (if steep { buf.rows() } else { buf.cols() }) as i64;
    let first = x0.max(0);
    let last = x1.min(extent - 1);
    if first > last {
        return Ok(());
    }

    // Minor-axis position and error term after `first - x0` steps.
    let skipped = (first - x0) as i128;
    let (wide_dx, wide_dy) = (dx as i128, dy as i128);
    let rises = if dx == 0 {
        0
    } else {
        (2 * wide_dy * skipped + wide_dx) / (2 * wide_dx)
    };
    let mut y = y0 + ystep * rises as i64;
    let mut err = (2 * wide_dy * skipped - 2 * wide_dx * rises) as i64;

    for x in first..=last {
        if steep {
            buf.set_pixel_clipped(x, y, value)?;
        } else {
            buf.set_pixel_clipped(y, x, value)?;
        }
        err += 2 * dy;
        if err >= dx {
            y += ystep;
            err -= 2 * dx;
        }
    }
    Ok(())
}

/// Draw an anti-aliased line with Wu's algorithm
///
/// Each column along the dominant axis blends the two pixels straddling
/// the ideal line, weighted by proximity. Coordinates may be fractional.
///
/// # Errors
///
/// Returns an error if `value` does not match the channel count.
pub fn draw_line(
    buf: &mut PixelBuffer,
    y0: f64,
    x0: f64,
    y1: f64,
    x1: f64,
    value: &PixelValue,
) -> DrawResult<()> {
    value.check_channels(buf.channels())?;

    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    let (mut y0, mut x0, mut y1, mut x1) = if steep {
        (x0, y0, x1, y1)
    } else {
        (y0, x0, y1, x1)
    };
    if x0 > x1 {
        swap(&mut x0, &mut x1);
        swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = y1 - y0;
    let de = if dx == 0.0 { VERTICAL_SLOPE } else { dy / dx };

    let extent = (if steep { buf.rows() } else { buf.cols() }) as i64;

    // (major, minor) coordinates back to (row, col)
    let mut plot = |major: i64, minor: i64, opacity: f64| -> DrawResult<()> {
        let (row, col) = if steep { (major, minor) } else { (minor, major) };
        buf.blend_pixel(row, col, value, opacity as f32)?;
        Ok(())
    };

    let xpxl1 = (x0 + 0.5).floor();
    let ystart = y0 + de * (xpxl1 - x0);
    let base = ystart.floor();
    plot(xpxl1 as i64, base as i64, 1.0 - (ystart - base))?;
    plot(xpxl1 as i64, (base as i64).saturating_add(1), ystart - base)?;

    let xpxl2 = (x1 + 0.5).floor();
    let yend = y1 + de * (xpxl2 - x1);
    let base = yend.floor();
    plot(xpxl2 as i64, base as i64, 1.0 - (yend - base))?;
    plot(xpxl2 as i64, (base as i64).saturating_add(1), yend - base)?;

    let first = (xpxl1 as i64).saturating_add(1).max(0);
    let last = (xpxl2 as i64).min(extent);
    for x in first..last {
        let intery = ystart + de * (x as f64 - xpxl1);
        let base = intery.floor();
        plot(x, base as i64, 1.0 - (intery - base))?;
        plot(x, (base as i64).saturating_add(1), intery - base)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(buf: &PixelBuffer) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for row in 0..buf.rows() {
            for col in 0..buf.cols() {
                if buf.get(row, col, 0) != Some(0.0) {
                    out.push((row, col));
                }
            }
        }
        out
    }

    #[test]
    fn test_fast_line_endpoints_and_length() {
        let mut buf = PixelBuffer::new(20, 20, 1).unwrap();
        draw_line_fast(&mut buf, 2, 3, 9, 17, &PixelValue::Scalar(1.0)).unwrap();
        let pixels = lit(&buf);
        assert_eq!(pixels.len(), 15);
        assert!(pixels.contains(&(2, 3)));
        assert!(pixels.contains(&(9, 17)));
    }

    #[test]
    fn test_fast_line_reversal_symmetric() {
        let cases = [(0, 0, 7, 3), (5, 1, 0, 13), (3, 3, 15, 9), (12, 2, 1, 2), (4, 4, 4, 4)];
        for &(y0, x0, y1, x1) in &cases {
            let mut a = PixelBuffer::new(16, 16, 1).unwrap();
            let mut b = PixelBuffer::new(16, 16, 1).unwrap();
            draw_line_fast(&mut a, y0, x0, y1, x1, &PixelValue::Scalar(1.0)).unwrap();
            draw_line_fast(&mut b, y1, x1, y0, x0, &PixelValue::Scalar(1.0)).unwrap();
            assert_eq!(a, b, "line {:?}", (y0, x0, y1, x1));
        }
    }

    #[test]
    fn test_fast_line_one_pixel_per_major_step() {
        let mut buf = PixelBuffer::new(30, 10, 1).unwrap();
        draw_line_fast(&mut buf, 1, 2, 25, 7, &PixelValue::Scalar(1.0)).unwrap();
        for row in 1..=25 {
            let count = (0..10).filter(|&c| buf.get(row, c, 0) == Some(1.0)).count();
            assert_eq!(count, 1, "row {}", row);
        }
    }

    #[test]
    fn test_fast_line_clips() {
        let mut buf = PixelBuffer::new(5, 5, 1).unwrap();
        draw_line_fast(&mut buf, -3, -3, 7, 7, &PixelValue::Scalar(1.0)).unwrap();
        assert_eq!(lit(&buf), vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    }

    #[test]
    fn test_fast_line_extreme_endpoints() {
        let mut buf = PixelBuffer::new(4, 6, 1).unwrap();
        draw_line_fast(&mut buf, 0, -2_000_000_000, 0, 2_000_000_000, &PixelValue::Scalar(1.0))
            .unwrap();
        assert_eq!(lit(&buf), (0..6).map(|c| (0, c)).collect::<Vec<_>>());

        let mut buf = PixelBuffer::new(8, 8, 1).unwrap();
        draw_line_fast(&mut buf, i32::MIN, i32::MIN, i32::MAX, i32::MAX, &PixelValue::Scalar(1.0))
            .unwrap();
        assert_eq!(lit(&buf).len(), 8);
        for i in 0..8 {
            assert_eq!(buf.get(i, i, 0), Some(1.0));
        }

        let mut buf = PixelBuffer::new(8, 8, 1).unwrap();
        draw_line_fast(&mut buf, i32::MAX, 0, i32::MIN, 0, &PixelValue::Scalar(1.0)).unwrap();
        assert_eq!(lit(&buf), (0..8).map(|r| (r, 0)).collect::<Vec<_>>());
    }

    #[test]
    fn test_fast_line_clipped_start_matches_full_walk() {
        // A line starting off-buffer lights the same pixels as its on-buffer part.
        let mut clipped = PixelBuffer::new(12, 12, 1).unwrap();
        draw_line_fast(&mut clipped, -7, -20, 9, 11, &PixelValue::Scalar(1.0)).unwrap();

        let mut wide = PixelBuffer::new(40, 40, 1).unwrap();
        draw_line_fast(&mut wide, 13, 0, 29, 31, &PixelValue::Scalar(1.0)).unwrap();
        let expected: Vec<(usize, usize)> = lit(&wide)
            .into_iter()
            .filter(|&(r, c)| (20..32).contains(&c) && (20..32).contains(&r))
            .map(|(r, c)| (r - 20, c - 20))
            .collect();
        assert!(!expected.is_empty());
        assert_eq!(lit(&clipped), expected);
    }

    #[test]
    fn test_aa_line_extreme_endpoints() {
        let mut buf = PixelBuffer::new(4, 6, 1).unwrap();
        draw_line(&mut buf, 1.0, -4.0e12, 1.0, 4.0e12, &PixelValue::Scalar(50.0)).unwrap();
        for col in 0..6 {
            assert_eq!(buf.get(1, col, 0), Some(50.0));
        }

        let mut buf = PixelBuffer::new(4, 4, 1).unwrap();
        draw_line(&mut buf, 0.0, f64::MAX, 3.0, f64::MAX, &PixelValue::Scalar(50.0)).unwrap();
        assert!(lit(&buf).is_empty());
    }

    #[test]
    fn test_aa_line_horizontal_is_solid() {
        let mut buf = PixelBuffer::new(10, 12, 1).unwrap();
        draw_line(&mut buf, 5.0, 2.0, 5.0, 10.0, &PixelValue::Scalar(100.0)).unwrap();
        for col in 2..=10 {
            assert_eq!(buf.get(5, col, 0), Some(100.0));
            assert_eq!(buf.get(6, col, 0), Some(0.0));
        }
        assert_eq!(lit(&buf).len(), 9);
    }

    #[test]
    fn test_aa_line_splits_between_rows() {
        let mut buf = PixelBuffer::new(10, 12, 1).unwrap();
        draw_line(&mut buf, 4.25, 1.0, 4.25, 8.0, &PixelValue::Scalar(100.0)).unwrap();
        for col in 1..=8 {
            let upper = buf.get(4, col, 0).unwrap();
            let lower = buf.get(5, col, 0).unwrap();
            assert!((upper - 75.0).abs() < 1e-3);
            assert!((lower - 25.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_aa_line_steep_and_point() {
        let mut buf = PixelBuffer::new(10, 10, 1).unwrap();
        draw_line(&mut buf, 1.0, 4.0, 8.0, 4.0, &PixelValue::Scalar(10.0)).unwrap();
        for row in 1..=8 {
            assert_eq!(buf.get(row, 4, 0), Some(10.0));
        }

        let mut buf = PixelBuffer::new(4, 4, 1).unwrap();
        draw_line(&mut buf, 2.0, 2.0, 2.0, 2.0, &PixelValue::Scalar(10.0)).unwrap();
        assert_eq!(buf.get(2, 2, 0), Some(10.0));
    }
}

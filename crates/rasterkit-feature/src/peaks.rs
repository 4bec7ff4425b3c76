//! Local maxima

use rasterkit_core::PixelBuffer;
use std::cmp::Ordering;

/// A local maximum: its value and position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Sample value at the peak
    pub value: f32,
    /// Row of the peak
    pub row: usize,
    /// Column of the peak
    pub col: usize,
}

impl Peak {
    /// Create a peak
    pub fn new(value: f32, row: usize, col: usize) -> Self {
        Self { value, row, col }
    }

    /// Descending order by value, then row, then column
    pub fn descending(a: &Peak, b: &Peak) -> Ordering {
        b.value
            .total_cmp(&a.value)
            .then(b.row.cmp(&a.row))
            .then(b.col.cmp(&a.col))
    }
}

/// Find the local maxima of channel 0
///
/// A peak is an interior pixel strictly greater than all eight of its
/// neighbours and than `threshold`. Border pixels are never peaks, so a
/// buffer with fewer than three rows or columns has none.
///
/// # Returns
///
/// Peaks sorted in descending order of value; ties are broken by
/// descending row and then column.
///
/// # Examples
///
/// ```
/// use rasterkit_core::PixelBuffer;
/// use rasterkit_feature::find_peaks;
///
/// let buf = PixelBuffer::from_rows(&[
///     [0.0f32, 0.0, 0.0],
///     [0.0, 5.0, 0.0],
///     [0.0, 0.0, 0.0],
/// ])
/// .unwrap();
/// let peaks = find_peaks(&buf, 1.0);
/// assert_eq!(peaks.len(), 1);
/// assert_eq!((peaks[0].row, peaks[0].col), (1, 1));
/// ```
pub fn find_peaks(buf: &PixelBuffer, threshold: f32) -> Vec<Peak> {
    let rows = buf.rows();
    let cols = buf.cols();
    let mut peaks = Vec::new();
    if rows < 3 || cols < 3 {
        return peaks;
    }

    for row in 1..rows - 1 {
        for col in 1..cols - 1 {
            let v = buf.get_unchecked(row, col, 0);
            if v <= threshold {
                continue;
            }
            let is_peak = (row - 1..=row + 1).all(|r| {
                (col - 1..=col + 1)
                    .all(|c| (r == row && c == col) || v > buf.get_unchecked(r, c, 0))
            });
            if is_peak {
                peaks.push(Peak::new(v, row, col));
            }
        }
    }

    peaks.sort_by(Peak::descending);
    peaks
}

/// Peaks within `factor` of the highest
///
/// Returns the longest prefix of `peaks` whose values are at least
/// `factor * peaks[0].value`. `peaks` must already be sorted in
/// descending order, as returned by [`find_peaks`]; other orderings give
/// an unspecified prefix. An empty list gives an empty result.
pub fn high_peaks(peaks: &[Peak], factor: f32) -> &[Peak] {
    let Some(first) = peaks.first() else {
        return peaks;
    };
    let limit = first.value * factor;
    let n = peaks.iter().take_while(|p| p.value >= limit).count();
    &peaks[..n]
}

//! Connected-component labeling
//!
//! Two labelings of the same partition are provided:
//!
//! - [`label_regions`] treats all-zero pixels as background (label 0)
//!   and numbers the remaining regions `1..=N`
//! - [`label_all_regions`] puts every pixel in some region and numbers
//!   regions `0..N-1`
//!
//! Pixels are connected when they are neighbours under the chosen
//! connectivity and hold equal values in every channel.

use crate::conncomp::{ConnectivityType, EquivalenceTable};
use crate::error::RegionResult;
use rasterkit_core::{LabelBuffer, PixelBuffer};

const UNLABELED: u32 = u32::MAX;

/// Label foreground regions
///
/// Background pixels (zero in every channel) receive label 0. Returns the
/// label buffer and the number of foreground regions `N`; regions are
/// numbered `1..=N` in the raster order of their first pixel.
///
/// # Examples
///
/// ```
/// use rasterkit_core::PixelBuffer;
/// use rasterkit_region::{ConnectivityType, label_regions};
///
/// let buf = PixelBuffer::from_rows(&[
///     [1.0f32, 0.0, 1.0],
///     [1.0, 0.0, 1.0],
/// ])
/// .unwrap();
/// let (labels, n) = label_regions(&buf, ConnectivityType::FourWay).unwrap();
/// assert_eq!(n, 2);
/// assert_eq!(labels.get(1, 0), Some(1));
/// assert_eq!(labels.get(0, 1), Some(0));
/// assert_eq!(labels.get(1, 2), Some(2));
/// ```
pub fn label_regions(
    buf: &PixelBuffer,
    connectivity: ConnectivityType,
) -> RegionResult<(LabelBuffer, usize)> {
    label_impl(buf, connectivity, true)
}

/// Label every pixel
///
/// Returns the label buffer and the number of regions `N`; labels are
/// dense in `0..N` and follow the raster order of each region's first
/// pixel.
pub fn label_all_regions(
    buf: &PixelBuffer,
    connectivity: ConnectivityType,
) -> RegionResult<(LabelBuffer, usize)> {
    label_impl(buf, connectivity, false)
}

/// Mask of a single label
///
/// Returns a single-channel buffer with `fg` where `labels` equals
/// `label` and `bg` elsewhere.
pub fn labelled_region(
    labels: &LabelBuffer,
    label: u32,
    bg: f32,
    fg: f32,
) -> RegionResult<PixelBuffer> {
    let data = labels
        .labels()
        .iter()
        .map(|&l| if l == label { fg } else { bg })
        .collect();
    Ok(PixelBuffer::from_data(labels.rows(), labels.cols(), 1, data)?)
}

fn is_background(pixel: &[f32]) -> bool {
    pixel.iter().all(|&v| v == 0.0)
}

fn label_impl(
    buf: &PixelBuffer,
    connectivity: ConnectivityType,
    skip_background: bool,
) -> RegionResult<(LabelBuffer, usize)> {
    let rows = buf.rows();
    let cols = buf.cols();
    let channels = buf.channels();
    let data = buf.data();
    let offsets = connectivity.causal_offsets();

    let mut provisional = vec![UNLABELED; rows * cols];
    let mut table = EquivalenceTable::new();

    for row in 0..rows {
        for col in 0..cols {
            let idx = row * cols + col;
            let pixel = &data[idx * channels..(idx + 1) * channels];
            if skip_background && is_background(pixel) {
                continue;
            }

            let mut label: Option<u32> = None;
            for &(dr, dc) in offsets {
                let nr = row as i64 + dr;
                let nc = col as i64 + dc;
                if !buf.contains(nr, nc) {
                    continue;
                }
                let nidx = nr as usize * cols + nc as usize;
                let candidate = provisional[nidx];
                if candidate == UNLABELED
                    || &data[nidx * channels..(nidx + 1) * channels] != pixel
                {
                    continue;
                }
                label = match label {
                    None => Some(candidate),
                    Some(current) => Some(table.union(current, candidate)),
                };
            }

            provisional[idx] = match label {
                Some(l) => l,
                None => table.make_label(),
            };
        }
    }

    let (remap, count) = table.compact();
    let base = u32::from(skip_background);

    let mut labels = LabelBuffer::new(rows, cols)?;
    for (dst, &p) in labels.labels_mut().iter_mut().zip(&provisional) {
        *dst = if p == UNLABELED {
            0
        } else {
            remap[p as usize] + base
        };
    }

    log::debug!(
        "labeled {}x{} buffer: {} regions from {} provisional labels",
        rows,
        cols,
        count,
        table.len()
    );
    Ok((labels, count))
}

//! Seed fill
//!
//! Frontier-based flood fill over 4-connected neighbours. Similarity is
//! measured on the channel sum of each pixel relative to the seed.

use crate::error::{RegionError, RegionResult};
use rasterkit_core::{PixelBuffer, PixelValue};

const NEIGHBORS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Flood fill starting from a seed pixel
///
/// Every pixel 4-connected to the seed through pixels whose channel sum
/// differs from the seed's by at most `threshold` is set to `value`.
///
/// The call does nothing and returns 0 when the fill level lies strictly
/// within `threshold` of the seed's channel sum. The fill level of a
/// scalar value is the scalar itself; for a per-channel value it is the
/// sum of its channels.
///
/// # Arguments
///
/// * `buf` - Buffer modified in place
/// * `seed_row`, `seed_col` - Seed position
/// * `value` - Fill value
/// * `threshold` - Largest accepted channel-sum difference
///
/// # Returns
///
/// The number of pixels that were filled.
///
/// # Errors
///
/// Returns `RegionError::InvalidSeed` if the seed is outside the buffer,
/// or a core error if `value` does not match the channel count.
pub fn fill_outline(
    buf: &mut PixelBuffer,
    seed_row: usize,
    seed_col: usize,
    value: &PixelValue,
    threshold: f32,
) -> RegionResult<usize> {
    let channels = buf.channels();
    value.check_channels(channels)?;

    let Some(seed_sum) = buf.channel_sum(seed_row, seed_col) else {
        return Err(RegionError::InvalidSeed {
            row: seed_row,
            col: seed_col,
        });
    };
    if (seed_sum - fill_level(value)).abs() < threshold {
        return Ok(0);
    }

    let rows = buf.rows();
    let cols = buf.cols();
    let mut visited = vec![false; rows * cols];

    visited[seed_row * cols + seed_col] = true;
    buf.set_pixel(seed_row, seed_col, value)?;
    let mut filled = 1;
    let mut frontier = vec![(seed_row, seed_col)];

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for &(row, col) in &frontier {
            for &(dr, dc) in &NEIGHBORS {
                let nr = row as i64 + dr;
                let nc = col as i64 + dc;
                if !buf.contains(nr, nc) {
                    continue;
                }
                let (nr, nc) = (nr as usize, nc as usize);
                let idx = nr * cols + nc;
                if visited[idx] {
                    continue;
                }
                let Some(sum) = buf.channel_sum(nr, nc) else {
                    continue;
                };
                if (sum - seed_sum).abs() <= threshold {
                    visited[idx] = true;
                    buf.set_pixel(nr, nc, value)?;
                    filled += 1;
                    next.push((nr, nc));
                }
            }
        }
        frontier = next;
    }

    Ok(filled)
}

fn fill_level(value: &PixelValue) -> f32 {
    match value {
        PixelValue::Scalar(v) => *v,
        PixelValue::Channels(vs) => vs.iter().sum(),
    }
}

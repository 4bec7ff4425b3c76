//! Straight-line Hough transform
//!
//! Every edge pixel votes, for each quantized angle θ, for the line at
//! signed distance `ρ = (x - xc)·cos θ + (y - yc)·sin θ` from the origin.
//! The accumulator has one row per angle and one column per radial bin,
//! with ρ = 0 at column `radial_bins / 2`. Dominant lines show up as
//! peaks of the accumulator.

use crate::error::{FeatureError, FeatureResult};
use crate::peaks::{Peak, find_peaks};
use rasterkit_core::PixelBuffer;
use std::f64::consts::PI;

/// Options for [`hough_line`]
#[derive(Debug, Clone)]
pub struct HoughOptions {
    /// Number of radial bins (accumulator columns)
    pub radial_bins: usize,
    /// Number of angular bins over `[0, π)` (accumulator rows)
    pub angular_bins: usize,
    /// Origin as (row, col); the buffer centre when `None`
    pub origin: Option<(f64, f64)>,
    /// Minimum vote count for a peak (exclusive)
    pub threshold: f32,
}

impl Default for HoughOptions {
    fn default() -> Self {
        Self {
            radial_bins: 512,
            angular_bins: 512,
            origin: None,
            threshold: 10.0,
        }
    }
}

impl HoughOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of radial bins
    pub fn with_radial_bins(mut self, bins: usize) -> Self {
        self.radial_bins = bins;
        self
    }

    /// Set the number of angular bins
    pub fn with_angular_bins(mut self, bins: usize) -> Self {
        self.angular_bins = bins;
        self
    }

    /// Set the origin as (row, col)
    pub fn with_origin(mut self, row: f64, col: f64) -> Self {
        self.origin = Some((row, col));
        self
    }

    /// Set the peak threshold
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    fn validate(&self) -> FeatureResult<()> {
        if self.radial_bins == 0 || self.angular_bins == 0 {
            return Err(FeatureError::InvalidParameters(format!(
                "Hough bins must be positive, got {} radial x {} angular",
                self.radial_bins, self.angular_bins
            )));
        }
        Ok(())
    }
}

/// A line found by the transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoughLine {
    /// Number of edge pixels that voted for the line
    pub votes: f32,
    /// Angle of the line normal in radians, in `[0, π)`
    pub angle: f64,
    /// Signed distance of the line from the origin, in pixels
    pub radius: f64,
}

/// Result of [`hough_line`]
#[derive(Debug, Clone)]
pub struct HoughTransform {
    /// Vote counts, `angular_bins` rows by `radial_bins` columns
    pub accumulator: PixelBuffer,
    /// Accumulator peaks, sorted descending
    pub peaks: Vec<Peak>,
    /// Origin used for the distances, as (row, col)
    pub origin: (f64, f64),
}

impl HoughTransform {
    /// Angle in radians of accumulator row `row`
    pub fn angle_of(&self, row: usize) -> f64 {
        row as f64 * PI / self.accumulator.rows() as f64
    }

    /// Signed distance of accumulator column `col`
    pub fn radius_of(&self, col: usize) -> f64 {
        col as f64 - (self.accumulator.cols() / 2) as f64
    }

    /// The peaks as lines, strongest first
    pub fn lines(&self) -> Vec<HoughLine> {
        self.peaks
            .iter()
            .map(|p| HoughLine {
                votes: p.value,
                angle: self.angle_of(p.row),
                radius: self.radius_of(p.col),
            })
            .collect()
    }
}

/// Accumulate line votes from the edge pixels of `edges`
///
/// A pixel is an edge pixel when channel 0 is positive. Each vote goes to
/// the radial bin nearest to ρ; votes falling outside the accumulator are
/// dropped.
///
/// Peaks are searched in the accumulator interior only. Vertical image
/// lines have normal angle 0 and vote into accumulator row 0, so they
/// never appear in `peaks` or `lines()`; read them from `accumulator`.
///
/// # Errors
///
/// Returns `FeatureError::InvalidParameters` if either bin count is zero.
pub fn hough_line(edges: &PixelBuffer, options: &HoughOptions) -> FeatureResult<HoughTransform> {
    options.validate()?;

    let na = options.angular_bins;
    let nr = options.radial_bins;
    let origin = options
        .origin
        .unwrap_or(((edges.rows() / 2) as f64, (edges.cols() / 2) as f64));
    let (yc, xc) = origin;
    let offset = (nr / 2) as i64;

    let trig: Vec<(f64, f64)> = (0..na)
        .map(|a| {
            let theta = a as f64 * PI / na as f64;
            (theta.cos(), theta.sin())
        })
        .collect();

    let mut acc = PixelBuffer::new(na, nr, 1)?;
    let mut nedges = 0usize;
    for row in 0..edges.rows() {
        for col in 0..edges.cols() {
            if edges.get_unchecked(row, col, 0) <= 0.0 {
                continue;
            }
            nedges += 1;
            let dy = row as f64 - yc;
            let dx = col as f64 - xc;
            for (a, &(cos, sin)) in trig.iter().enumerate() {
                let bin = (dx * cos + dy * sin).round() as i64 + offset;
                if (0..nr as i64).contains(&bin) {
                    let votes = acc.get_unchecked(a, bin as usize, 0);
                    acc.set_unchecked(a, bin as usize, 0, votes + 1.0);
                }
            }
        }
    }

    let peaks = find_peaks(&acc, options.threshold);
    log::debug!(
        "hough: {} edge pixels, {}x{} accumulator, max votes {}, {} peaks",
        nedges,
        na,
        nr,
        acc.extrema().1,
        peaks.len()
    );

    Ok(HoughTransform {
        accumulator: acc,
        peaks,
        origin,
    })
}

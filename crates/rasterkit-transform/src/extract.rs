//! Sub-pixel region extraction
//!
//! [`extract`] samples an `out_rows x out_cols` window from a source
//! buffer. The window is centred on an arbitrary (possibly fractional)
//! position, may use any positive step between samples, and may be
//! rotated relative to the source grid. Samples between pixel centres
//! are computed with the selected [`Interpolation`].

use crate::error::{TransformError, TransformResult};
use crate::interp::{Cell, Interpolation, bilinear_weights, gradient_weights};
use rasterkit_core::{PixelBuffer, PixelValue};

/// Tolerance below which the fast path treats a parameter as exact
const TINY: f64 = 1.0e-5;

/// Options for [`extract`]
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Window centre as (row, col); the source centre when `None`
    pub center: Option<(f64, f64)>,
    /// Distance between samples on the source, as (row step, col step)
    pub step: (f64, f64),
    /// Angle of the sampling grid relative to the source, anticlockwise,
    /// in radians
    pub angle: f64,
    /// Wrap positions that fall off one side around to the other
    pub wrap: bool,
    /// Value of samples outside the source when not wrapping
    pub fill_value: PixelValue,
    /// Interpolation scheme
    pub interpolation: Interpolation,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            center: None,
            step: (1.0, 1.0),
            angle: 0.0,
            wrap: false,
            fill_value: PixelValue::Scalar(0.0),
            interpolation: Interpolation::Gradient,
        }
    }
}

impl ExtractOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window centre
    pub fn with_center(mut self, row: f64, col: f64) -> Self {
        self.center = Some((row, col));
        self
    }

    /// Use the same step along both axes
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = (step, step);
        self
    }

    /// Set the row and column steps separately
    pub fn with_steps(mut self, row_step: f64, col_step: f64) -> Self {
        self.step = (row_step, col_step);
        self
    }

    /// Set the grid angle in radians
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Enable or disable wraparound
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Set the value used outside the source
    pub fn with_fill_value(mut self, value: impl Into<PixelValue>) -> Self {
        self.fill_value = value.into();
        self
    }

    /// Set the interpolation scheme
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    fn validate(&self) -> TransformResult<()> {
        let (sy, sx) = self.step;
        if !(sy > 0.0 && sx > 0.0 && sy.is_finite() && sx.is_finite()) {
            return Err(TransformError::InvalidParameters(format!(
                "step must be positive, got ({}, {})",
                sy, sx
            )));
        }
        Ok(())
    }
}

/// Extract a resampled window from `src`
///
/// Output pixel `(i, j)` samples the source at the point reached from the
/// centre by `(i - out_rows/2)` row steps and `(j - out_cols/2)` column
/// steps of the rotated grid, using integer halves. Positions outside
/// the source take `fill_value`, or wrap around modulo the source extents
/// when `wrap` is set.
///
/// With no rotation, unit steps, an integral top-left corner and the
/// window inside the source, the result is a direct copy of the
/// sub-region.
///
/// # Errors
///
/// Returns `TransformError::InvalidParameters` for an empty output or a
/// non-positive step, and a core error if `fill_value` has the wrong
/// number of channels.
///
/// # Examples
///
/// ```
/// use rasterkit_core::PixelBuffer;
/// use rasterkit_transform::{ExtractOptions, Interpolation, extract};
///
/// let src = PixelBuffer::from_rows(&[[0.0f32, 10.0], [20.0, 30.0]]).unwrap();
/// let opts = ExtractOptions::new()
///     .with_center(0.5, 0.5)
///     .with_interpolation(Interpolation::Bilinear);
/// let out = extract(&src, 1, 1, &opts).unwrap();
/// assert_eq!(out.get(0, 0, 0), Some(15.0));
/// ```
pub fn extract(
    src: &PixelBuffer,
    out_rows: usize,
    out_cols: usize,
    options: &ExtractOptions,
) -> TransformResult<PixelBuffer> {
    if out_rows == 0 || out_cols == 0 {
        return Err(TransformError::InvalidParameters(format!(
            "output must be non-empty, got {}x{}",
            out_rows, out_cols
        )));
    }
    options.validate()?;
    options.fill_value.check_channels(src.channels())?;

    let (rows, cols, channels) = src.dimensions();
    let (yc, xc) = options
        .center
        .unwrap_or(((rows / 2) as f64, (cols / 2) as f64));
    let half_y = (out_rows / 2) as f64;
    let half_x = (out_cols / 2) as f64;

    let corner = (yc - half_y, xc - half_x);
    if let Some((y0, x0)) = direct_corner(rows, cols, out_rows, out_cols, corner, options) {
        log::debug!(
            "extract: direct copy of {}x{} at ({}, {})",
            out_rows,
            out_cols,
            y0,
            x0
        );
        return Ok(src.region(y0, y0 + out_rows, x0, x0 + out_cols)?);
    }

    let guide = match options.interpolation {
        Interpolation::Gradient => Some(src.mono()),
        _ => None,
    };
    let (cos, sin) = ((-options.angle).cos(), (-options.angle).sin());
    let (sy, sx) = options.step;

    let mut out = PixelBuffer::new(out_rows, out_cols, channels)?;
    for i in 0..out_rows {
        let u = (i as f64 - half_y) * sy;
        for j in 0..out_cols {
            let v = (j as f64 - half_x) * sx;
            let ypos = yc + u * cos - v * sin;
            let xpos = xc + u * sin + v * cos;

            let Some(cell) = locate(ypos, xpos, rows, cols, options.wrap) else {
                for c in 0..channels {
                    out.set_unchecked(i, j, c, options.fill_value.channel(c));
                }
                continue;
            };

            let corners = [
                (cell.ylo, cell.xlo),
                (cell.ylo, cell.xhi),
                (cell.yhi, cell.xlo),
                (cell.yhi, cell.xhi),
            ];
            let weights = match (options.interpolation, &guide) {
                (Interpolation::Nearest, _) => nearest_weights(&cell),
                (Interpolation::Bilinear, _) => bilinear_weights(&cell),
                (Interpolation::Gradient, Some(guide)) => gradient_weights(guide, &cell),
                (Interpolation::Gradient, None) => gradient_weights(src, &cell),
            };
            for c in 0..channels {
                let value: f64 = corners
                    .iter()
                    .zip(weights)
                    .filter(|&(_, w)| w != 0.0)
                    .map(|(&(r, k), w)| w * src.get_unchecked(r, k, c) as f64)
                    .sum();
                out.set_unchecked(i, j, c, value as f32);
            }
        }
    }
    Ok(out)
}

/// Top-left corner of the window when it can be copied directly
fn direct_corner(
    rows: usize,
    cols: usize,
    out_rows: usize,
    out_cols: usize,
    (y0, x0): (f64, f64),
    options: &ExtractOptions,
) -> Option<(usize, usize)> {
    let (sy, sx) = options.step;
    let exact = options.angle.abs() < TINY && (sy - 1.0).abs() < TINY && (sx - 1.0).abs() < TINY;
    let integral = (y0 - y0.round()).abs() < TINY && (x0 - x0.round()).abs() < TINY;
    if !exact || !integral {
        return None;
    }
    let (y0, x0) = (y0.round(), x0.round());
    if y0 < 0.0 || x0 < 0.0 {
        return None;
    }
    let (y0, x0) = (y0 as usize, x0 as usize);
    (y0 + out_rows <= rows && x0 + out_cols <= cols).then_some((y0, x0))
}

/// Cell containing the sample position, or `None` if it lies outside the
/// source and wrapping is off
///
/// Without wrapping, samples in the last row or column reuse that row or
/// column as their far corner.
fn locate(ypos: f64, xpos: f64, rows: usize, cols: usize, wrap: bool) -> Option<Cell> {
    if !wrap && (ypos < 0.0 || ypos >= rows as f64 || xpos < 0.0 || xpos >= cols as f64) {
        return None;
    }
    let (ylo, yhi, dy) = axis(ypos, rows, wrap);
    let (xlo, xhi, dx) = axis(xpos, cols, wrap);
    Some(Cell {
        ylo,
        yhi,
        xlo,
        xhi,
        dy,
        dx,
    })
}

fn axis(pos: f64, n: usize, wrap: bool) -> (usize, usize, f64) {
    let base = pos.floor();
    let frac = pos - base;
    if wrap {
        let lo = (base as i64).rem_euclid(n as i64) as usize;
        (lo, (lo + 1) % n, frac)
    } else {
        let lo = (base as usize).min(n - 1);
        (lo, (lo + 1).min(n - 1), frac)
    }
}

fn nearest_weights(cell: &Cell) -> [f64; 4] {
    let mut w = [0.0; 4];
    let idx = 2 * usize::from(cell.dy >= 0.5) + usize::from(cell.dx >= 0.5);
    w[idx] = 1.0;
    w
}

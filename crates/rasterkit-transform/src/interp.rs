//! Interpolation schemes
//!
//! Each scheme reads the 2x2 cell whose top-left corner is `(ylo, xlo)`
//! and whose far corner is `(yhi, xhi)`; `dy` and `dx` are the fractional
//! offsets of the sample inside that cell.

use crate::error::TransformError;
use rasterkit_core::PixelBuffer;
use std::fmt;
use std::str::FromStr;

/// How samples between pixel centres are computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Value of the closest pixel
    Nearest,
    /// Weighted average of the four surrounding pixels
    Bilinear,
    /// Linear interpolation within the triangle of the 2x2 cell that does
    /// not straddle the stronger diagonal difference (P.R. Smith)
    #[default]
    Gradient,
}

impl Interpolation {
    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Interpolation::Nearest => "nearest",
            Interpolation::Bilinear => "bilinear",
            Interpolation::Gradient => "gradient",
        }
    }

    /// Parse a name, falling back to `Nearest` with a warning when the
    /// name is not recognised
    ///
    /// Use `str::parse` instead when an unknown name must be an error.
    pub fn from_name(name: &str) -> Self {
        name.parse::<Interpolation>().unwrap_or_else(|_| {
            log::warn!("invalid interpolation {:?}; using \"nearest\"", name);
            Interpolation::Nearest
        })
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Interpolation {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearest" => Ok(Interpolation::Nearest),
            "bilinear" => Ok(Interpolation::Bilinear),
            "gradient" => Ok(Interpolation::Gradient),
            _ => Err(TransformError::UnknownInterpolation(s.to_string())),
        }
    }
}

/// Corners and fractional offsets of one sample
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cell {
    pub ylo: usize,
    pub yhi: usize,
    pub xlo: usize,
    pub xhi: usize,
    pub dy: f64,
    pub dx: f64,
}

/// Corner weights `[lo-lo, lo-hi, hi-lo, hi-hi]` for bilinear interpolation
pub(crate) fn bilinear_weights(cell: &Cell) -> [f64; 4] {
    let (dy, dx) = (cell.dy, cell.dx);
    [
        (1.0 - dy) * (1.0 - dx),
        (1.0 - dy) * dx,
        dy * (1.0 - dx),
        dy * dx,
    ]
}

/// Corner weights `[lo-lo, lo-hi, hi-lo, hi-hi]` for gradient interpolation
///
/// `guide` is the single-channel view the diagonal differences are
/// measured on. Ties split the cell along the main diagonal.
pub(crate) fn gradient_weights(guide: &PixelBuffer, cell: &Cell) -> [f64; 4] {
    let (dy, dx) = (cell.dy, cell.dx);
    let at = |r, c| guide.get_unchecked(r, c, 0) as f64;
    let main = (at(cell.ylo, cell.xlo) - at(cell.yhi, cell.xhi)).abs();
    let anti = (at(cell.ylo, cell.xhi) - at(cell.yhi, cell.xlo)).abs();

    if main <= anti {
        // split along lo-lo to hi-hi
        if dx >= dy {
            [1.0 - dx, dx - dy, 0.0, dy]
        } else {
            [1.0 - dy, 0.0, dy - dx, dx]
        }
    } else if dx + dy <= 1.0 {
        // split along lo-hi to hi-lo
        [1.0 - dx - dy, dx, dy, 0.0]
    } else {
        [0.0, 1.0 - dy, 1.0 - dx, dx + dy - 1.0]
    }
}

//! Polygons, stars, boxes and borders
//!
//! Polygons and stars are built from vertices on circles around a centre
//! and drawn as closed outlines. Vertices are `(row, col)` pairs in
//! drawing order; the first vertex closes the shape.

use crate::error::{DrawError, DrawResult};
use crate::line::{draw_line, draw_line_fast};
use rasterkit_core::{PixelBuffer, PixelValue};
use rasterkit_region::fill_outline;
use std::f64::consts::PI;

/// A `(row, col)` position
pub type Vertex = (f64, f64);

/// Options for outlined shapes
#[derive(Debug, Clone)]
pub struct ShapeOptions {
    /// Use Bresenham lines instead of anti-aliased ones
    pub fast: bool,
    /// Flood fill the interior from the centre after drawing
    pub fill: bool,
    /// Channel-sum threshold used by the interior fill
    pub fill_threshold: f32,
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self {
            fast: false,
            fill: false,
            fill_threshold: 100.0,
        }
    }
}

impl ShapeOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Select Bresenham lines
    pub fn with_fast(mut self, fast: bool) -> Self {
        self.fast = fast;
        self
    }

    /// Fill the interior after drawing
    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    /// Set the interior fill threshold
    pub fn with_fill_threshold(mut self, threshold: f32) -> Self {
        self.fill_threshold = threshold;
        self
    }
}

/// Draw a regular polygon inscribed in a circle
///
/// The first vertex lies at angle 0 (directly right of the centre) and
/// the rest follow at `2π / nsides` increments.
///
/// # Returns
///
/// The `nsides` vertices in drawing order.
///
/// # Errors
///
/// Returns `DrawError::InvalidParameters` if `nsides` is zero.
pub fn draw_polygon(
    buf: &mut PixelBuffer,
    center: Vertex,
    radius: f64,
    nsides: usize,
    value: &PixelValue,
    options: &ShapeOptions,
) -> DrawResult<Vec<Vertex>> {
    if nsides == 0 {
        return Err(DrawError::InvalidParameters(
            "polygon needs at least one side".to_string(),
        ));
    }

    let angle = 2.0 * PI / nsides as f64;
    let vertices: Vec<Vertex> = (0..nsides)
        .map(|i| on_circle(center, radius, i as f64 * angle))
        .collect();

    draw_closed(buf, center, &vertices, value, options)?;
    Ok(vertices)
}

/// Draw a star with `npoints` points
///
/// Vertices alternate between `radius` and `inner_radius` at
/// `π / npoints` increments, starting with an outer vertex at angle 0.
/// The inner radius defaults to half the outer one.
///
/// # Returns
///
/// The `2 * npoints` vertices in drawing order.
///
/// # Errors
///
/// Returns `DrawError::InvalidParameters` if `npoints` is zero.
pub fn draw_star(
    buf: &mut PixelBuffer,
    center: Vertex,
    radius: f64,
    npoints: usize,
    inner_radius: Option<f64>,
    value: &PixelValue,
    options: &ShapeOptions,
) -> DrawResult<Vec<Vertex>> {
    if npoints == 0 {
        return Err(DrawError::InvalidParameters(
            "star needs at least one point".to_string(),
        ));
    }

    let inner = inner_radius.unwrap_or(radius / 2.0);
    let angle = PI / npoints as f64;
    let vertices: Vec<Vertex> = (0..2 * npoints)
        .map(|i| {
            let r = if i % 2 == 0 { radius } else { inner };
            on_circle(center, r, i as f64 * angle)
        })
        .collect();

    draw_closed(buf, center, &vertices, value, options)?;
    Ok(vertices)
}

fn on_circle(center: Vertex, r: f64, theta: f64) -> Vertex {
    (center.0 + r * theta.sin(), center.1 + r * theta.cos())
}

fn draw_closed(
    buf: &mut PixelBuffer,
    center: Vertex,
    vertices: &[Vertex],
    value: &PixelValue,
    options: &ShapeOptions,
) -> DrawResult<()> {
    let next = vertices.iter().cycle().skip(1);
    for (&(y0, x0), &(y1, x1)) in vertices.iter().zip(next) {
        if options.fast {
            draw_line_fast(
                buf,
                y0.round() as i32,
                x0.round() as i32,
                y1.round() as i32,
                x1.round() as i32,
                value,
            )?;
        } else {
            draw_line(buf, y0, x0, y1, x1, value)?;
        }
    }

    if options.fill {
        let (yc, xc) = (center.0.round(), center.1.round());
        if buf.contains(yc as i64, xc as i64) {
            fill_outline(buf, yc as usize, xc as usize, value, options.fill_threshold)?;
        }
    }
    Ok(())
}

/// Draw a rectangle with corners (ylo, xlo) and (yhi, xhi)
///
/// The outline is drawn with `border`; when `fill` is given the pixels
/// strictly inside the outline are set to it.
pub fn draw_box(
    buf: &mut PixelBuffer,
    ylo: i32,
    xlo: i32,
    yhi: i32,
    xhi: i32,
    border: &PixelValue,
    fill: Option<&PixelValue>,
) -> DrawResult<()> {
    draw_line_fast(buf, ylo, xlo, ylo, xhi, border)?;
    draw_line_fast(buf, ylo, xhi, yhi, xhi, border)?;
    draw_line_fast(buf, yhi, xhi, yhi, xlo, border)?;
    draw_line_fast(buf, yhi, xlo, ylo, xlo, border)?;
    if let Some(fill) = fill {
        buf.set_region(
            ylo as i64 + 1,
            xlo as i64 + 1,
            yhi as i64,
            xhi as i64,
            fill,
        )?;
    }
    Ok(())
}

/// Set a frame `width` pixels wide around the edge of the buffer
pub fn draw_border(buf: &mut PixelBuffer, value: &PixelValue, width: usize) -> DrawResult<()> {
    let rows = buf.rows() as i64;
    let cols = buf.cols() as i64;
    let w = width as i64;
    buf.set_region(0, 0, w, cols, value)?;
    buf.set_region(rows - w, 0, rows, cols, value)?;
    buf.set_region(0, 0, rows, w, value)?;
    buf.set_region(0, cols - w, rows, cols, value)?;
    Ok(())
}

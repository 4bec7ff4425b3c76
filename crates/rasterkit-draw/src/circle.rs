//! Circle rasterization

use crate::error::{DrawError, DrawResult};
use rasterkit_core::{PixelBuffer, PixelValue};

fn check_radius(r: i32) -> DrawResult<()> {
    if r < 0 {
        return Err(DrawError::InvalidParameters(format!(
            "circle radius must be non-negative, got {}",
            r
        )));
    }
    Ok(())
}

/// Set the eight symmetric points (±y, ±x) and (±x, ±y) around the centre
fn plot_octants(
    buf: &mut PixelBuffer,
    yc: i64,
    xc: i64,
    y: i64,
    x: i64,
    value: &PixelValue,
) -> DrawResult<()> {
    for (dr, dc) in [
        (y, x),
        (y, -x),
        (-y, x),
        (-y, -x),
        (x, y),
        (x, -y),
        (-x, y),
        (-x, -y),
    ] {
        buf.set_pixel_clipped(yc + dr, xc + dc, value)?;
    }
    Ok(())
}

/// Draw a circle with the midpoint (Bresenham) algorithm
///
/// All pixels on the circle are set to `value`; the result is symmetric
/// under reflection about the centre row, column and diagonals.
///
/// # Errors
///
/// Returns an error for a negative radius or a channel mismatch.
pub fn draw_circle_fast(
    buf: &mut PixelBuffer,
    yc: i32,
    xc: i32,
    r: i32,
    value: &PixelValue,
) -> DrawResult<()> {
    check_radius(r)?;
    value.check_channels(buf.channels())?;

    let (yc, xc) = (yc as i64, xc as i64);
    let mut x = 0i64;
    let mut y = r as i64;
    let mut p = 3 - 2 * y;
    while x < y {
        plot_octants(buf, yc, xc, y, x, value)?;
        if p < 0 {
            p += 4 * x + 6;
        } else {
            p += 4 * (x - y) + 6;
            y -= 1;
        }
        x += 1;
    }
    if x == y {
        plot_octants(buf, yc, xc, y, x, value)?;
    }
    Ok(())
}

/// Draw an anti-aliased circle with Wu's algorithm
///
/// For each step along the minor axis the boundary pixel of every octant
/// is set to `value`, its inner neighbour is blended at `1 - opacity`
/// and its outer neighbour at `opacity`, where the opacity measures how
/// far the ideal circle lies from the pixel centre.
///
/// # Errors
///
/// Returns an error for a negative radius or a channel mismatch.
pub fn draw_circle(
    buf: &mut PixelBuffer,
    yc: i32,
    xc: i32,
    r: i32,
    value: &PixelValue,
) -> DrawResult<()> {
    check_radius(r)?;
    value.check_channels(buf.channels())?;

    let (yc, xc) = (yc as i64, xc as i64);
    let rr = (r as f64) * (r as f64);
    let mut x = r as i64;
    let mut y = -1i64;
    let mut prev = 0.0f64;

    while x > y {
        y += 1;
        let d = (rr - (y * y) as f64).sqrt();
        let opacity = d.round() - d;
        if opacity < prev {
            x -= 1;
        }
        let outer = opacity.clamp(0.0, 1.0) as f32;
        let inner = (1.0 - opacity).clamp(0.0, 1.0) as f32;

        // boundary offset and the outward unit step along the radial axis
        for (dr, dc, or, oc) in [
            (y, x, 0, 1),
            (x, y, 1, 0),
            (y, -x, 0, -1),
            (x, -y, 1, 0),
            (-y, x, 0, 1),
            (-x, y, -1, 0),
            (-x, -y, -1, 0),
            (-y, -x, 0, -1),
        ] {
            let (row, col) = (yc + dr, xc + dc);
            buf.set_pixel_clipped(row, col, value)?;
            buf.blend_pixel(row - or, col - oc, value, inner)?;
            buf.blend_pixel(row + or, col + oc, value, outer)?;
        }
        prev = opacity;
    }
    Ok(())
}

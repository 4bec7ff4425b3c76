//! rasterkit-draw - Rasterization for rasterkit
//!
//! This crate draws into [`PixelBuffer`](rasterkit_core::PixelBuffer)s:
//!
//! - **Lines** - Bresenham and Wu anti-aliased
//! - **Circles** - midpoint and Wu anti-aliased
//! - **Shapes** - regular polygons and stars, optionally filled; boxes
//!   and borders
//! - **Markers** - symbols at given positions, e.g. detected peaks
//!
//! Drawing never fails because of coordinates: anything outside the
//! buffer is skipped.
//!
//! # Examples
//!
//! ```
//! use rasterkit_core::{PixelBuffer, PixelValue};
//! use rasterkit_draw::{ShapeOptions, draw_circle_fast, draw_line, draw_polygon};
//!
//! let mut buf = PixelBuffer::new(64, 64, 3).unwrap();
//! let white = PixelValue::Scalar(255.0);
//!
//! draw_line(&mut buf, 2.0, 2.0, 40.5, 61.0, &white).unwrap();
//! draw_circle_fast(&mut buf, 32, 32, 20, &white).unwrap();
//! let vertices = draw_polygon(
//!     &mut buf,
//!     (32.0, 32.0),
//!     10.0,
//!     5,
//!     &white,
//!     &ShapeOptions::new().with_fill(true),
//! )
//! .unwrap();
//! assert_eq!(vertices.len(), 5);
//! ```

pub mod circle;
pub mod error;
pub mod line;
pub mod mark;
pub mod shape;

pub use circle::{draw_circle, draw_circle_fast};
pub use error::{DrawError, DrawResult};
pub use line::{VERTICAL_SLOPE, draw_line, draw_line_fast};
pub use mark::{MarkSymbol, mark_at_position, mark_peaks};
pub use shape::{ShapeOptions, Vertex, draw_border, draw_box, draw_polygon, draw_star};

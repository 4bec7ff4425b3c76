//! rasterkit - Rasterization and region analysis for Rust
//!
//! # Overview
//!
//! rasterkit works on [`PixelBuffer`], a multi-channel `f32` image indexed
//! by (row, column, channel), and provides:
//!
//! - Line, circle and polygon drawing, plain and anti-aliased
//! - Flood fill and connected-component labeling
//! - Resampling of rotated, scaled and wrapped windows
//! - Peak detection and the Hough line transform
//! - Binary PNM and PNG reading and writing
//!
//! # Example
//!
//! ```
//! use rasterkit::{PixelBuffer, PixelValue};
//! use rasterkit::draw::draw_line_fast;
//! use rasterkit::region::{ConnectivityType, label_regions};
//!
//! let mut buf = PixelBuffer::new(16, 16, 1).unwrap();
//! let white = PixelValue::Scalar(255.0);
//! draw_line_fast(&mut buf, 2, 2, 2, 12, &white).unwrap();
//! draw_line_fast(&mut buf, 10, 2, 14, 12, &white).unwrap();
//! let (_, n) = label_regions(&buf, ConnectivityType::EightWay).unwrap();
//! assert_eq!(n, 2);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterkit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rasterkit_draw as draw;
pub use rasterkit_feature as feature;
pub use rasterkit_io as io;
pub use rasterkit_region as region;
pub use rasterkit_transform as transform;

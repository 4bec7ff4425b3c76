//! rasterkit-feature - Feature detection for rasterkit
//!
//! - **Peak detection** - strict local maxima above a threshold
//! - **Hough transform** - straight-line voting with peak extraction
//!
//! # Examples
//!
//! ```
//! use rasterkit_core::PixelBuffer;
//! use rasterkit_feature::{HoughOptions, hough_line};
//!
//! let mut edges = PixelBuffer::new(32, 32, 1).unwrap();
//! for col in 0..32 {
//!     edges.set(20, col, 0, 1.0).unwrap();
//! }
//! let opts = HoughOptions::new().with_radial_bins(64).with_angular_bins(90);
//! let ht = hough_line(&edges, &opts).unwrap();
//! let best = ht.lines()[0];
//! assert_eq!(best.radius, 4.0);
//! ```

pub mod error;
pub mod hough;
pub mod peaks;

pub use error::{FeatureError, FeatureResult};
pub use hough::{HoughLine, HoughOptions, HoughTransform, hough_line};
pub use peaks::{Peak, find_peaks, high_peaks};

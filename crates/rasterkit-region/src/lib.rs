//! rasterkit-region - Region processing for rasterkit
//!
//! This crate provides:
//!
//! - **Seed fill** - Frontier-based flood fill with a similarity threshold
//! - **Connected component labeling** - Single-pass labeling with an
//!   equivalence table, in foreground-only and full-partition variants
//!
//! # Examples
//!
//! ```
//! use rasterkit_core::{PixelBuffer, PixelValue};
//! use rasterkit_region::{ConnectivityType, fill_outline, label_regions};
//!
//! let mut buf = PixelBuffer::new(10, 10, 1).unwrap();
//! buf.set_region(2, 2, 5, 5, &PixelValue::Scalar(1.0)).unwrap();
//! buf.set_region(7, 7, 9, 9, &PixelValue::Scalar(1.0)).unwrap();
//!
//! let (_, n) = label_regions(&buf, ConnectivityType::FourWay).unwrap();
//! assert_eq!(n, 2);
//!
//! let filled = fill_outline(&mut buf, 3, 3, &PixelValue::Scalar(2.0), 0.0).unwrap();
//! assert_eq!(filled, 9);
//! ```

pub mod conncomp;
pub mod error;
pub mod label;
pub mod seedfill;

pub use conncomp::{ConnectivityType, EquivalenceTable};
pub use error::{RegionError, RegionResult};
pub use label::{label_all_regions, label_regions, labelled_region};
pub use seedfill::fill_outline;

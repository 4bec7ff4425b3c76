//! rasterkit-transform - Resampling for rasterkit
//!
//! - [`extract`] - a window of any size, centre, step and rotation
//! - [`Interpolation`] - nearest, bilinear and gradient sampling

mod error;
pub mod extract;
pub mod interp;

pub use error::{TransformError, TransformResult};
pub use extract::{ExtractOptions, extract};
pub use interp::Interpolation;

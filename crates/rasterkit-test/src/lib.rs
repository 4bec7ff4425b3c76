//! rasterkit-test - Regression test framework for rasterkit
//!
//! Supports two modes:
//!
//! - **Compare**: Check computed values and buffers (default)
//! - **Display**: Also write intermediate buffers as PNG for inspection
//!
//! # Usage
//!
//! ```ignore
//! use rasterkit_test::RegParams;
//!
//! let mut rp = RegParams::new("label");
//! rp.compare_values(2.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // rasterkit-test is at crates/rasterkit-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

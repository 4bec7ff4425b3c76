//! rasterkit-io - Reading and writing buffers as image files
//!
//! Supported formats:
//!
//! - **PNM** - binary PGM (P5) and PPM (P6)
//! - **PNG** - 8/16-bit gray, gray+alpha, RGB, RGBA and palette images
//!   (requires the `png-format` feature)
//!
//! Samples are stored as bytes: values are rounded and clamped to
//! `0..=255` on write.

mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format_from_bytes};

use rasterkit_core::PixelBuffer;
use std::fs::{self, File};
use std::io::{BufWriter, Cursor};
use std::path::Path;

#[cfg(feature = "png-format")]
pub use self::png::{read_png, write_png};
#[cfg(feature = "pnm")]
pub use pnm::{read_pnm, write_pnm};

/// Round and clamp a sample to a byte
pub(crate) fn to_byte(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Read an image file, detecting the format from its header
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let bytes = fs::read(path)?;
    read_image_mem(&bytes)
}

/// Decode an image held in memory
pub fn read_image_mem(data: &[u8]) -> IoResult<PixelBuffer> {
    match detect_format_from_bytes(data)? {
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(Cursor::new(data)),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => self::png::read_png(Cursor::new(data)),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            other
        ))),
    }
}

/// Write a buffer to a file in the given format
pub fn write_image<P: AsRef<Path>>(
    buf: &PixelBuffer,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let writer = BufWriter::new(File::create(path)?);
    match format {
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(buf, writer),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => self::png::write_png(buf, writer),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            other
        ))),
    }
}

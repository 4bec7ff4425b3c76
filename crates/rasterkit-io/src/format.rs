//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header.

use crate::{IoError, IoResult};
use std::path::Path;

/// Magic numbers for image format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// Binary PGM
    pub const PGM_BINARY: &[u8] = b"P5";

    /// Binary PPM
    pub const PPM_BINARY: &[u8] = b"P6";
}

/// Supported file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Binary PGM (P5) or PPM (P6)
    Pnm,
    /// PNG
    Png,
}

impl ImageFormat {
    /// Conventional file extension
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Pnm => "pnm",
            ImageFormat::Png => "png",
        }
    }

    /// Format implied by a path's extension, if recognized
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pnm" | "pgm" | "ppm" => Some(ImageFormat::Pnm),
            "png" => Some(ImageFormat::Png),
            _ => None,
        }
    }
}

/// Detect image format from the leading bytes of a file
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    if data.starts_with(magic::PNG) {
        return Ok(ImageFormat::Png);
    }
    if data.starts_with(magic::PGM_BINARY) || data.starts_with(magic::PPM_BINARY) {
        return Ok(ImageFormat::Pnm);
    }

    Err(IoError::UnsupportedFormat(format!(
        "unrecognized header {:02x?}",
        &data[..data.len().min(8)]
    )))
}

//! PNM (Portable Any Map) format support
//!
//! Reads and writes PGM (P5 binary) and PPM (P6 binary). Samples are
//! clamped and rounded to bytes on write; 16-bit files are scaled down
//! to the 0..=255 range on read.

use crate::{IoError, IoResult, to_byte};
use rasterkit_core::PixelBuffer;
use std::io::{BufRead, Read, Write};

/// Read a binary PNM image (P5/P6) from a reader.
///
/// Returns a 1-channel buffer for PGM and a 3-channel buffer for PPM.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<PixelBuffer> {
    let magic = next_token(&mut reader)?;
    let channels = match magic.as_str() {
        "P5" => 1,
        "P6" => 3,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNM variant {}",
                other
            )));
        }
    };

    let cols = parse_header_value(&mut reader, "width")?;
    let rows = parse_header_value(&mut reader, "height")?;
    let maxval = parse_header_value(&mut reader, "maxval")?;
    if maxval == 0 || maxval > 65535 {
        return Err(IoError::InvalidData(format!("maxval {}", maxval)));
    }

    let bytes_per_sample = if maxval > 255 { 2 } else { 1 };
    let nbytes = rows
        .checked_mul(cols)
        .and_then(|n| n.checked_mul(channels))
        .and_then(|n| n.checked_mul(bytes_per_sample))
        .ok_or_else(|| {
            IoError::InvalidData(format!("PNM dimensions {}x{} too large", cols, rows))
        })?;

    // Grown as bytes arrive; the header size is not trusted.
    let mut raw = Vec::new();
    reader.take(nbytes as u64).read_to_end(&mut raw)?;
    if raw.len() != nbytes {
        return Err(IoError::InvalidData(format!(
            "truncated PNM raster: {} of {} bytes",
            raw.len(),
            nbytes
        )));
    }

    let scale = 255.0 / maxval as f32;
    let data = if bytes_per_sample == 1 {
        raw.iter().map(|&b| b as f32 * scale).collect()
    } else {
        raw.chunks_exact(2)
            .map(|s| u16::from_be_bytes([s[0], s[1]]) as f32 * scale)
            .collect()
    };

    Ok(PixelBuffer::from_data(rows, cols, channels, data)?)
}

/// Write a buffer as binary PNM to a writer.
///
/// Chooses P5 for 1-channel and P6 for 3-channel buffers.
pub fn write_pnm<W: Write>(buf: &PixelBuffer, mut writer: W) -> IoResult<()> {
    let magic = match buf.channels() {
        1 => "P5",
        3 => "P6",
        n => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNM cannot hold {} channels",
                n
            )));
        }
    };

    write!(writer, "{}\n{} {}\n255\n", magic, buf.cols(), buf.rows())?;
    let bytes: Vec<u8> = buf.data().iter().map(|&v| to_byte(v)).collect();
    writer.write_all(&bytes)?;
    Ok(())
}

fn parse_header_value<R: BufRead>(reader: &mut R, what: &str) -> IoResult<usize> {
    let token = next_token(reader)?;
    token
        .parse()
        .map_err(|_| IoError::InvalidData(format!("bad PNM {}: {:?}", what, token)))
}

/// Next whitespace-delimited header token, skipping `#` comments
///
/// Consumes exactly one whitespace byte after the token, as required
/// before the raster.
fn next_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    let mut in_comment = false;
    let mut byte = [0u8; 1];

    loop {
        if reader.read(&mut byte)? == 0 {
            if token.is_empty() {
                return Err(IoError::InvalidData("truncated PNM header".to_string()));
            }
            return Ok(token);
        }
        let b = byte[0];
        if in_comment {
            in_comment = b != b'\n';
            continue;
        }
        if b == b'#' && token.is_empty() {
            in_comment = true;
        } else if b.is_ascii_whitespace() {
            if !token.is_empty() {
                return Ok(token);
            }
        } else {
            token.push(b as char);
        }
    }
}

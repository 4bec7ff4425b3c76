//! PNG image format support

use crate::{IoError, IoResult, to_byte};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use rasterkit_core::PixelBuffer;
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
///
/// Palette and sub-byte grayscale images are expanded to 8-bit samples.
/// The channel count follows the color type: gray 1, gray+alpha 2, RGB 3,
/// RGBA 4. 16-bit samples are scaled to the 0..=255 range.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (color_type, bit_depth) = reader.output_color_type();
    let channels = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut raw = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut raw)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let rows = output_info.height as usize;
    let cols = output_info.width as usize;
    let line_size = output_info.line_size;
    let samples_per_row = cols * channels;

    let mut data = Vec::with_capacity(rows * samples_per_row);
    for row in raw.chunks(line_size).take(rows) {
        match bit_depth {
            BitDepth::Eight => {
                data.extend(row[..samples_per_row].iter().map(|&b| b as f32));
            }
            BitDepth::Sixteen => {
                data.extend(
                    row[..samples_per_row * 2]
                        .chunks_exact(2)
                        .map(|s| u16::from_be_bytes([s[0], s[1]]) as f32 / 257.0),
                );
            }
            other => {
                return Err(IoError::UnsupportedFormat(format!(
                    "PNG bit depth {:?} after expansion",
                    other
                )));
            }
        }
    }

    Ok(PixelBuffer::from_data(rows, cols, channels, data)?)
}

/// Write a PNG image
///
/// Samples are rounded and clamped to 8 bits. Buffers with 1 to 4
/// channels map to gray, gray+alpha, RGB and RGBA.
pub fn write_png<W: Write>(buf: &PixelBuffer, writer: W) -> IoResult<()> {
    let color_type = match buf.channels() {
        1 => ColorType::Grayscale,
        2 => ColorType::GrayscaleAlpha,
        3 => ColorType::Rgb,
        4 => ColorType::Rgba,
        n => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNG cannot hold {} channels",
                n
            )));
        }
    };

    let mut encoder = Encoder::new(writer, buf.cols() as u32, buf.rows() as u32);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let data: Vec<u8> = buf.data().iter().map(|&v| to_byte(v)).collect();
    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterkit_core::PixelValue;
    use std::io::Cursor;

    #[test]
    fn test_png_roundtrip_grayscale() {
        let mut buf = PixelBuffer::new(10, 10, 1).unwrap();
        for row in 0..10 {
            for col in 0..10 {
                buf.set(row, col, 0, ((row + col) * 10) as f32).unwrap();
            }
        }

        let mut bytes = Vec::new();
        write_png(&buf, &mut bytes).unwrap();
        let back = read_png(Cursor::new(bytes)).unwrap();

        assert_eq!(back, buf);
    }

    #[test]
    fn test_png_roundtrip_rgb() {
        let mut buf = PixelBuffer::new(5, 5, 3).unwrap();
        buf.set_pixel(0, 0, &PixelValue::from([255.0f32, 0.0, 0.0])).unwrap();
        buf.set_pixel(1, 1, &PixelValue::from([0.0f32, 255.0, 0.0])).unwrap();
        buf.set_pixel(2, 2, &PixelValue::from([0.0f32, 0.0, 255.0])).unwrap();

        let mut bytes = Vec::new();
        write_png(&buf, &mut bytes).unwrap();
        let back = read_png(Cursor::new(bytes)).unwrap();

        assert_eq!(back.dimensions(), (5, 5, 3));
        assert_eq!(back.pixel(0, 0), Some(&[255.0f32, 0.0, 0.0][..]));
        assert_eq!(back.pixel(1, 1), Some(&[0.0f32, 255.0, 0.0][..]));
        assert_eq!(back.pixel(2, 2), Some(&[0.0f32, 0.0, 255.0][..]));
    }

    #[test]
    fn test_png_rejects_five_channels() {
        let buf = PixelBuffer::new(2, 2, 5).unwrap();
        assert!(matches!(
            write_png(&buf, Vec::new()),
            Err(IoError::UnsupportedFormat(_))
        ));
    }
}

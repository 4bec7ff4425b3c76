//! Seed fill regression test
//!
//! Flood fill bounded by drawn outlines, threshold behavior, the no-op
//! guard and exact filling of a uniform region.

use rasterkit_core::{PixelBuffer, PixelValue};
use rasterkit_region::fill_outline;
use rasterkit_test::RegParams;

/// A closed rectangular outline of value 200 on a zero background
fn outlined(rows: usize, cols: usize) -> PixelBuffer {
    let mut buf = PixelBuffer::new(rows, cols, 3).unwrap();
    let edge = PixelValue::Scalar(200.0);
    buf.set_region(5, 5, 6, 25, &edge).unwrap();
    buf.set_region(19, 5, 20, 25, &edge).unwrap();
    buf.set_region(5, 5, 20, 6, &edge).unwrap();
    buf.set_region(5, 24, 20, 25, &edge).unwrap();
    buf
}

#[test]
fn seedfill_reg() {
    let mut rp = RegParams::new("seedfill");

    // --- Test 1: fill the inside of an outline ---
    eprintln!("=== Inside ===");
    let mut buf = outlined(30, 30);
    let red = PixelValue::from([255.0f32, 0.0, 0.0]);
    let n = fill_outline(&mut buf, 10, 10, &red, 10.0).unwrap();
    rp.compare_values((13 * 18) as f64, n as f64, 0.0);
    rp.compare_values(255.0, buf.get(12, 12, 0).unwrap() as f64, 0.0);
    rp.compare_values(0.0, buf.get(2, 2, 0).unwrap() as f64, 0.0);
    rp.compare_values(200.0, buf.get(5, 10, 1).unwrap() as f64, 0.0);
    rp.write_buffer(&buf).unwrap();

    // --- Test 2: fill the outside ---
    eprintln!("=== Outside ===");
    let mut buf = outlined(30, 30);
    let n = fill_outline(&mut buf, 0, 0, &red, 10.0).unwrap();
    rp.compare_values((900 - 15 * 20) as f64, n as f64, 0.0);

    // --- Test 3: a large threshold crosses the outline ---
    eprintln!("=== Threshold above edge ===");
    let mut buf = outlined(30, 30);
    let n = fill_outline(&mut buf, 0, 0, &PixelValue::Scalar(1000.0), 600.0).unwrap();
    rp.compare_values(900.0, n as f64, 0.0);

    // --- Test 4: no-op when the fill value is similar to the seed ---
    eprintln!("=== No-op ===");
    let mut buf = outlined(30, 30);
    let before = buf.clone();
    let n = fill_outline(&mut buf, 0, 0, &PixelValue::Scalar(2.0), 10.0).unwrap();
    rp.compare_values(0.0, n as f64, 0.0);
    rp.compare_buffers(&before, &buf, 0.0);

    // --- Test 5: zero threshold fills exactly a uniform rectangle ---
    eprintln!("=== Exact rectangle ===");
    let mut buf = PixelBuffer::new(10, 10, 1).unwrap();
    buf.set_region(2, 3, 7, 8, &PixelValue::Scalar(100.0)).unwrap();
    let n = fill_outline(&mut buf, 4, 5, &PixelValue::Scalar(250.0), 0.0).unwrap();
    rp.compare_values(25.0, n as f64, 0.0);
    let mut expected = PixelBuffer::new(10, 10, 1).unwrap();
    expected.set_region(2, 3, 7, 8, &PixelValue::Scalar(250.0)).unwrap();
    rp.compare_buffers(&expected, &buf, 0.0);

    // --- Test 6: a scalar fill level is compared with the seed sum as given ---
    eprintln!("=== Scalar level on color ===");
    let mut buf = outlined(30, 30);
    let before = buf.clone();
    let n = fill_outline(&mut buf, 5, 10, &PixelValue::Scalar(600.0), 10.0).unwrap();
    rp.compare_values(0.0, n as f64, 0.0);
    rp.compare_buffers(&before, &buf, 0.0);
    let n = fill_outline(&mut buf, 5, 10, &PixelValue::Scalar(200.0), 10.0).unwrap();
    rp.compare_values((2 * 20 + 2 * 13) as f64, n as f64, 0.0);

    assert!(rp.cleanup(), "seedfill regression test failed");
}

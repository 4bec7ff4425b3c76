//! Peak detection regression test
//!
//! Three separated cones of different heights; the peaks must be their
//! apexes, strongest first.

use rasterkit_core::PixelBuffer;
use rasterkit_feature::{find_peaks, high_peaks};
use rasterkit_test::RegParams;

fn cones(rows: usize, cols: usize, apexes: &[(f64, f64, f64)]) -> PixelBuffer {
    let mut buf = PixelBuffer::new(rows, cols, 1).unwrap();
    for row in 0..rows {
        for col in 0..cols {
            let v = apexes
                .iter()
                .map(|&(r, c, h)| {
                    let d = ((row as f64 - r).powi(2) + (col as f64 - c).powi(2)).sqrt();
                    (h - d).max(0.0)
                })
                .fold(0.0, f64::max);
            buf.set(row, col, 0, v as f32).unwrap();
        }
    }
    buf
}

#[test]
fn peaks_reg() {
    let mut rp = RegParams::new("peaks");
    let buf = cones(50, 50, &[(10.0, 10.0, 8.0), (25.0, 35.0, 12.0), (40.0, 12.0, 6.0)]);
    rp.write_buffer(&buf).unwrap();

    // --- Test 1: one peak per apex ---
    eprintln!("=== Apexes ===");
    let peaks = find_peaks(&buf, 0.0);
    rp.compare_values(3.0, peaks.len() as f64, 0.0);
    let expected = [(12.0, 25, 35), (8.0, 10, 10), (6.0, 40, 12)];
    for (peak, (value, row, col)) in peaks.iter().zip(expected) {
        rp.compare_values(value, peak.value as f64, 1e-6);
        rp.compare_values(row as f64, peak.row as f64, 0.0);
        rp.compare_values(col as f64, peak.col as f64, 0.0);
    }

    // --- Test 2: threshold drops the weak apex ---
    eprintln!("=== Threshold ===");
    rp.compare_values(2.0, find_peaks(&buf, 7.0).len() as f64, 0.0);
    rp.compare_values(0.0, find_peaks(&buf, 12.0).len() as f64, 0.0);

    // --- Test 3: relative selection ---
    eprintln!("=== High peaks ===");
    rp.compare_values(2.0, high_peaks(&peaks, 0.6).len() as f64, 0.0);
    rp.compare_values(3.0, high_peaks(&peaks, 0.5).len() as f64, 0.0);
    rp.compare_values(1.0, high_peaks(&peaks, 1.0).len() as f64, 0.0);

    // --- Test 4: single spike on a flat field ---
    eprintln!("=== Spike ===");
    let mut spike = PixelBuffer::new(10, 10, 1).unwrap();
    spike.set(5, 5, 0, 100.0).unwrap();
    let found = find_peaks(&spike, 50.0);
    rp.compare_values(1.0, found.len() as f64, 0.0);
    rp.compare_values(100.0, found[0].value as f64, 0.0);
    rp.compare_values(5.0, found[0].row as f64, 0.0);
    rp.compare_values(5.0, found[0].col as f64, 0.0);
    rp.compare_values(0.0, find_peaks(&spike, 150.0).len() as f64, 0.0);

    assert!(rp.cleanup(), "peaks regression test failed");
}

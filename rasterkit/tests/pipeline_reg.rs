//! End-to-end regression test
//!
//! Shapes are drawn, filled and labeled; edge lines are recovered with
//! the Hough transform; a resampled window survives a PNM round trip.

use rasterkit::draw::{
    MarkSymbol, ShapeOptions, draw_circle_fast, draw_line_fast, draw_polygon, mark_peaks,
};
use rasterkit::feature::{HoughOptions, high_peaks, hough_line};
use rasterkit::io::{read_image_mem, write_pnm};
use rasterkit::region::{ConnectivityType, fill_outline, label_regions};
use rasterkit::transform::{ExtractOptions, Interpolation, extract};
use rasterkit::{PixelBuffer, PixelValue};
use rasterkit_test::RegParams;
use std::f64::consts::PI;

#[test]
fn pipeline_reg() {
    let mut rp = RegParams::new("pipeline");
    let white = PixelValue::Scalar(255.0);

    // --- Test 1: draw, fill and label ---
    eprintln!("=== Draw and label ===");
    let mut scene = PixelBuffer::new(80, 120, 1).unwrap();
    draw_circle_fast(&mut scene, 40, 30, 20, &white).unwrap();
    fill_outline(&mut scene, 40, 30, &white, 100.0).unwrap();
    let opts = ShapeOptions::new().with_fast(true).with_fill(true);
    draw_polygon(&mut scene, (40.0, 85.0), 22.0, 5, &white, &opts).unwrap();
    rp.write_buffer(&scene).unwrap();

    let (labels, n) = label_regions(&scene, ConnectivityType::EightWay).unwrap();
    rp.compare_values(2.0, n as f64, 0.0);
    let disc = labels.count(labels.get(40, 30).unwrap());
    // πr² ≈ 1257 plus the outline
    rp.compare_values(1257.0, disc as f64, 130.0);
    rp.compare_values(0.0, labels.get(0, 0).unwrap() as f64, 0.0);

    // --- Test 2: recover two edge lines ---
    eprintln!("=== Hough ===");
    let mut edges = PixelBuffer::new(64, 64, 1).unwrap();
    draw_line_fast(&mut edges, 20, 0, 20, 63, &white).unwrap();
    draw_line_fast(&mut edges, 0, 0, 63, 63, &white).unwrap();
    let opts = HoughOptions::new()
        .with_radial_bins(128)
        .with_angular_bins(180);
    let ht = hough_line(&edges, &opts).unwrap();
    let strong = high_peaks(&ht.peaks, 0.95);
    rp.compare_values(2.0, strong.len() as f64, 0.0);
    let lines = ht.lines();
    rp.compare_values(3.0 * PI / 4.0, lines[0].angle, 1e-12);
    rp.compare_values(0.0, lines[0].radius, 0.0);
    rp.compare_values(PI / 2.0, lines[1].angle, 1e-12);
    rp.compare_values(-12.0, lines[1].radius, 0.0);

    let mut acc = ht.accumulator.clone();
    mark_peaks(&mut acc, strong, &PixelValue::Scalar(-1.0), MarkSymbol::Block, 1).unwrap();
    for peak in strong {
        rp.compare_values(-1.0, acc.get(peak.row, peak.col, 0).unwrap() as f64, 0.0);
    }
    rp.write_buffer(&acc).unwrap();

    // --- Test 3: resampled window through PNM ---
    eprintln!("=== Resample and encode ===");
    let opts = ExtractOptions::new()
        .with_center(40.0, 30.0)
        .with_step(0.5)
        .with_interpolation(Interpolation::Nearest);
    let zoom = extract(&scene, 40, 40, &opts).unwrap();
    rp.compare_values(255.0, zoom.get(20, 20, 0).unwrap() as f64, 0.0);
    let mut bytes = Vec::new();
    write_pnm(&zoom, &mut bytes).unwrap();
    let decoded = read_image_mem(&bytes).unwrap();
    rp.compare_buffers(&zoom, &decoded, 0.0);

    assert!(rp.cleanup(), "pipeline regression test failed");
}

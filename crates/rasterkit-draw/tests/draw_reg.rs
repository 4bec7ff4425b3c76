//! Drawing regression test
//!
//! Lines, circles and shapes drawn into multi-channel buffers, checked
//! through their pixel sets.

use rasterkit_core::{PixelBuffer, PixelValue};
use rasterkit_draw::{
    MarkSymbol, ShapeOptions, draw_box, draw_circle, draw_circle_fast, draw_line,
    draw_line_fast, draw_polygon, draw_star, mark_at_position,
};
use rasterkit_test::RegParams;

fn lit_count(buf: &PixelBuffer) -> usize {
    (0..buf.rows())
        .flat_map(|r| (0..buf.cols()).map(move |c| (r, c)))
        .filter(|&(r, c)| buf.channel_sum(r, c).unwrap() > 0.0)
        .count()
}

#[test]
fn draw_reg() {
    let mut rp = RegParams::new("draw");
    let red = PixelValue::from([255.0f32, 0.0, 0.0]);
    let white = PixelValue::Scalar(255.0);

    // --- Test 1: Bresenham fan is reversal symmetric ---
    eprintln!("=== Line fan ===");
    let mut forward = PixelBuffer::new(65, 65, 3).unwrap();
    let mut backward = PixelBuffer::new(65, 65, 3).unwrap();
    for i in 0..16 {
        let (y1, x1) = (4 * i, 64 - 4 * i);
        draw_line_fast(&mut forward, 32, 32, y1, x1, &red).unwrap();
        draw_line_fast(&mut backward, y1, x1, 32, 32, &red).unwrap();
    }
    rp.compare_buffers(&forward, &backward, 0.0);
    rp.write_buffer(&forward).unwrap();

    // --- Test 2: anti-aliased line keeps intensity per column ---
    eprintln!("=== Wu line ===");
    let mut buf = PixelBuffer::new(40, 80, 1).unwrap();
    draw_line(&mut buf, 5.0, 5.0, 30.0, 75.0, &PixelValue::Scalar(100.0)).unwrap();
    let mut worst = 0.0f64;
    for col in 6..75 {
        let total: f32 = (0..40).map(|r| buf.get(r, col, 0).unwrap()).sum();
        worst = worst.max((total as f64 - 100.0).abs());
    }
    rp.compare_values(0.0, worst, 1e-3);
    rp.write_buffer(&buf).unwrap();

    // --- Test 3: circles ---
    eprintln!("=== Circles ===");
    let mut buf = PixelBuffer::new(101, 101, 3).unwrap();
    draw_circle_fast(&mut buf, 50, 50, 40, &white).unwrap();
    let mut max_err = 0.0f64;
    for row in 0..101 {
        for col in 0..101 {
            if buf.get(row, col, 0) == Some(255.0) {
                let d = ((row as f64 - 50.0).powi(2) + (col as f64 - 50.0).powi(2)).sqrt();
                max_err = max_err.max((d - 40.0).abs());
            }
        }
    }
    rp.compare_values(0.0, max_err, 1.0);
    draw_circle(&mut buf, 50, 50, 20, &red).unwrap();
    rp.compare_values(255.0, buf.get(50, 70, 0).unwrap() as f64, 0.0);
    rp.compare_values(0.0, buf.get(50, 70, 1).unwrap() as f64, 0.0);
    rp.write_buffer(&buf).unwrap();

    // --- Test 4: filled polygon and star ---
    eprintln!("=== Shapes ===");
    let mut buf = PixelBuffer::new(100, 100, 3).unwrap();
    let fill = ShapeOptions::new().with_fast(true).with_fill(true);
    let hex = draw_polygon(&mut buf, (30.0, 30.0), 20.0, 6, &white, &fill).unwrap();
    rp.compare_values(6.0, hex.len() as f64, 0.0);
    let filled_hex = lit_count(&buf);
    // area 3·√3/2·r² ≈ 1039, plus about half the outline
    rp.compare_values(1100.0, filled_hex as f64, 100.0);
    let star = draw_star(&mut buf, (70.0, 70.0), 25.0, 5, Some(10.0), &red, &fill).unwrap();
    rp.compare_values(10.0, star.len() as f64, 0.0);
    rp.compare_values(255.0, buf.get(70, 70, 0).unwrap() as f64, 0.0);
    rp.compare_values(0.0, buf.get(70, 70, 2).unwrap() as f64, 0.0);
    rp.write_buffer(&buf).unwrap();

    // --- Test 5: boxes and markers ---
    eprintln!("=== Box and markers ===");
    let mut buf = PixelBuffer::new(30, 30, 1).unwrap();
    draw_box(&mut buf, 5, 5, 24, 24, &PixelValue::Scalar(9.0), None).unwrap();
    rp.compare_values((4 * 19) as f64, lit_count(&buf) as f64, 0.0);
    mark_at_position(&mut buf, 15, 15, &PixelValue::Scalar(3.0), MarkSymbol::Plus, 6).unwrap();
    rp.compare_values((4 * 19 + 13) as f64, lit_count(&buf) as f64, 0.0);

    assert!(rp.cleanup(), "draw regression test failed");
}

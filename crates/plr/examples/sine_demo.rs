//! Segment sin(x) on [0, 7] and print the pieces.
//!
//! Run: `cargo run -p plr --example sine_demo -- 0.0005`

use plr::prelude::*;

fn main() {
    let gamma: f64 = std::env::args()
        .nth(1)
        .map(|s| s.parse().expect("gamma must be a number"))
        .unwrap_or(0.0005);
    let n = 1000;
    let points: Vec<Point> = (0..n)
        .map(|i| {
            let x = 7.0 * i as f64 / (n - 1) as f64;
            point(x, x.sin())
        })
        .collect();

    let mut seg = Segmenter::new(gamma).expect("valid gamma");
    let mut pieces = Vec::new();
    for p in &points {
        if let Some(s) = seg.ingest(*p).expect("ordered input") {
            pieces.push(s);
        }
    }
    pieces.extend(seg.finalize().expect("first finalize"));

    for s in &pieces {
        println!(
            "[{:.4}, {:.4}]  y = {:+.6}·x {:+.6}",
            s.start_x, s.end_x, s.slope, s.intercept
        );
    }
    let model = PiecewiseLinear::try_new(pieces).expect("segments in emission order");
    println!(
        "gamma={gamma} points={} segments={} ratio={:.2} max_err={:.3e}",
        points.len(),
        model.len(),
        model.compression_ratio(points.len()),
        model.max_abs_error(&points)
    );
}

//! The reference demo signal: sin(x) on 1000 evenly spaced x in [0, 7].

use plr::prelude::*;
use plr::Segments;

fn sine(n: usize, x_max: f64) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let x = x_max * i as f64 / (n - 1) as f64;
            point(x, x.sin())
        })
        .collect()
}

#[test]
fn larger_gamma_never_adds_segments() {
    let points = sine(1000, 7.0);
    let counts: Vec<usize> = [0.0005, 0.005, 0.05, 0.5]
        .iter()
        .map(|&g| fit(points.iter().copied(), g).unwrap().len())
        .collect();
    for w in counts.windows(2) {
        assert!(w[0] >= w[1], "segment counts not monotone: {counts:?}");
    }
    assert!(counts[0] > counts[3]);
}

#[test]
fn model_reproduces_signal_within_gamma() {
    let gamma = 0.0005;
    let points = sine(1000, 7.0);
    let model = PiecewiseLinear::try_new(fit(points.iter().copied(), gamma).unwrap()).unwrap();
    assert!(model.len() > 10 && model.len() < 200, "got {}", model.len());
    for p in &points {
        assert!(model.eval(p.x).is_some(), "sample x = {} not covered", p.x);
    }
    assert!(model.max_abs_error(&points) <= gamma + 1e-9);
    assert!(model.compression_ratio(points.len()) > 5.0);
}

#[test]
fn lazy_iterator_agrees_with_batch() {
    let points = sine(300, 7.0);
    let bound = ErrorBound::new(0.01).unwrap();
    let lazy: Result<Vec<_>, _> = Segments::new(points.clone(), bound).collect();
    assert_eq!(lazy.unwrap(), fit(points, 0.01).unwrap());
}

#[test]
fn only_the_trailing_lone_point_is_flagged() {
    // unit-spaced level pairs: real fits shaped like the fallback
    let points = vec![
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(2.0, 10.0),
        point(3.0, 10.0),
        point(4.0, -40.0),
    ];
    let segs = fit(points, 0.5).unwrap();
    assert_eq!(segs.len(), 3);
    let (tail, body) = segs.split_last().unwrap();
    assert!(tail.is_degenerate());
    assert_eq!((tail.start_x, tail.end_x), (4.0, 5.0));
    for s in body {
        assert_eq!(s.end_x - s.start_x, 1.0);
        assert_eq!(s.slope, 0.0);
        assert!(!s.is_degenerate(), "real fit flagged: {s:?}");
    }
}

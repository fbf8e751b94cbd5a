//! Planar primitives behind the error cone.
//!
//! - `Point`: a sample `(x, y)`; `x` is the ordering axis.
//! - `Line`: `y = slope·x + intercept`.
//! - Helpers build lines through two points, offset a point by ±γ, cross two
//!   lines and compare a point against a line. All are pure and O(1).
//!
//! Comparisons are strict: a point lying exactly on a line is neither above
//! nor below it.

use nalgebra::Vector2;

use crate::error::PlrError;

/// A sample `(x, y)`.
pub type Point = Vector2<f64>;

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point(x: f64, y: f64) -> Point {
    Vector2::new(x, y)
}

/// Non-vertical line `y = slope·x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub slope: f64,
    pub intercept: f64,
}

impl Line {
    #[inline]
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Line through `p1` and `p2`. Fails when both share an x-coordinate.
pub(crate) fn line_through(p1: Point, p2: Point) -> Result<Line, PlrError> {
    let dx = p2.x - p1.x;
    if dx == 0.0 {
        return Err(PlrError::DegenerateInput { x: p1.x });
    }
    let slope = (p2.y - p1.y) / dx;
    if !slope.is_finite() {
        return Err(PlrError::DegenerateInput { x: p1.x });
    }
    Ok(Line::new(slope, p1.y - slope * p1.x))
}

/// Top end of the point's γ error bar.
#[inline]
pub(crate) fn shift_up(p: Point, gamma: f64) -> Point {
    p + Vector2::new(0.0, gamma)
}

/// Bottom end of the point's γ error bar.
#[inline]
pub(crate) fn shift_down(p: Point, gamma: f64) -> Point {
    p - Vector2::new(0.0, gamma)
}

/// Crossing point of two lines. Parallel or coincident lines have none.
pub(crate) fn intersect(l1: Line, l2: Line) -> Result<Point, PlrError> {
    let (a, c) = (l1.slope, l1.intercept);
    let (b, d) = (l2.slope, l2.intercept);
    let denom = a - b;
    if denom == 0.0 {
        return Err(PlrError::DegenerateCone { slope: a });
    }
    let x = (d - c) / denom;
    let y = (a * d - b * c) / denom;
    if !(x.is_finite() && y.is_finite()) {
        return Err(PlrError::DegenerateCone { slope: a });
    }
    Ok(Vector2::new(x, y))
}

#[inline]
pub(crate) fn is_above(p: Point, l: &Line) -> bool {
    p.y > l.eval(p.x)
}

#[inline]
pub(crate) fn is_below(p: Point, l: &Line) -> bool {
    p.y < l.eval(p.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_through_two_points() {
        let l = line_through(point(1.0, 3.0), point(3.0, 7.0)).unwrap();
        assert!((l.slope - 2.0).abs() < 1e-12);
        assert!((l.intercept - 1.0).abs() < 1e-12);
        assert!((l.eval(10.0) - 21.0).abs() < 1e-12);
    }

    #[test]
    fn vertical_pair_is_rejected() {
        let err = line_through(point(2.0, 0.0), point(2.0, 1.0)).unwrap_err();
        assert_eq!(err, PlrError::DegenerateInput { x: 2.0 });
    }

    #[test]
    fn shifts_move_only_y() {
        let p = point(4.0, 1.0);
        assert_eq!(shift_up(p, 0.5), point(4.0, 1.5));
        assert_eq!(shift_down(p, 0.5), point(4.0, 0.5));
    }

    #[test]
    fn intersect_crossing_lines() {
        // y = x and y = -x + 2 cross at (1, 1)
        let p = intersect(Line::new(1.0, 0.0), Line::new(-1.0, 2.0)).unwrap();
        assert!((p.x - 1.0).abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn intersect_parallel_is_degenerate_cone() {
        let err = intersect(Line::new(0.5, 0.0), Line::new(0.5, 1.0)).unwrap_err();
        assert!(matches!(err, PlrError::DegenerateCone { .. }));
        let err = intersect(Line::new(0.5, 1.0), Line::new(0.5, 1.0)).unwrap_err();
        assert!(matches!(err, PlrError::DegenerateCone { .. }));
    }

    #[test]
    fn above_below_are_strict() {
        let l = Line::new(1.0, 0.0);
        assert!(is_above(point(1.0, 1.5), &l));
        assert!(is_below(point(1.0, 0.5), &l));
        let on = point(1.0, 1.0);
        assert!(!is_above(on, &l));
        assert!(!is_below(on, &l));
    }
}

use serde::{Deserialize, Serialize};

use crate::geom::Line;

/// One emitted piece: `y = slope·x + intercept` for `x ∈ [start_x, end_x]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start_x: f64,
    pub end_x: f64,
    pub slope: f64,
    pub intercept: f64,
    /// Set only on the flat fallback for a lone trailing point.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    single_point: bool,
}

impl Segment {
    #[inline]
    pub fn new(start_x: f64, end_x: f64, slope: f64, intercept: f64) -> Self {
        Self {
            start_x,
            end_x,
            slope,
            intercept,
            single_point: false,
        }
    }

    /// Unit-width flat segment emitted for a lone trailing point.
    #[inline]
    pub(crate) fn single_point(x: f64, y: f64) -> Self {
        Self {
            single_point: true,
            ..Self::new(x, x + 1.0, 0.0, y)
        }
    }

    #[inline]
    pub fn line(&self) -> Line {
        Line::new(self.slope, self.intercept)
    }

    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Closed-interval membership.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.start_x <= x && x <= self.end_x
    }

    /// True for the flat single-point fallback (it covers no second sample).
    /// A real fit never reports this, whatever its shape.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.single_point
    }
}

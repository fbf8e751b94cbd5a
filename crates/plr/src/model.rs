//! Read side: answer "value at x" from an ordered segment list.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::PlrError;
use crate::geom::Point;
use crate::segment::Segment;

/// Segments in emission order (increasing `start_x`). Serialized as a plain
/// array; deserializing runs the same ordering check as `try_new`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Segment>", into = "Vec<Segment>")]
pub struct PiecewiseLinear {
    segments: Vec<Segment>,
}

impl PiecewiseLinear {
    /// Accepts segments in emission order: `start_x` strictly increasing and
    /// no segment ending before it starts.
    pub fn try_new(segments: Vec<Segment>) -> Result<Self, PlrError> {
        if let Some(index) = segments.iter().position(|s| {
            matches!(s.start_x.partial_cmp(&s.end_x), None | Some(Ordering::Greater))
        }) {
            return Err(PlrError::UnorderedSegments { index });
        }
        if let Some(i) = segments
            .windows(2)
            .position(|w| w[0].start_x.partial_cmp(&w[1].start_x) != Some(Ordering::Less))
        {
            return Err(PlrError::UnorderedSegments { index: i + 1 });
        }
        Ok(Self { segments })
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segment whose closed range holds `x`. When two segments share a
    /// boundary the later one wins. `None` in gaps between segments and
    /// outside the covered range.
    pub fn segment_at(&self, x: f64) -> Option<&Segment> {
        let idx = self.segments.partition_point(|s| s.start_x <= x);
        let seg = self.segments.get(idx.checked_sub(1)?)?;
        seg.contains(x).then_some(seg)
    }

    pub fn eval(&self, x: f64) -> Option<f64> {
        self.segment_at(x).map(|s| s.eval(x))
    }

    /// Input points per segment; 0 for an empty model.
    pub fn compression_ratio(&self, n_points: usize) -> f64 {
        if self.segments.is_empty() {
            return 0.0;
        }
        n_points as f64 / self.segments.len() as f64
    }

    /// Largest |y - model(x)| over the points the model covers.
    pub fn max_abs_error<'a>(&self, points: impl IntoIterator<Item = &'a Point>) -> f64 {
        points
            .into_iter()
            .filter_map(|p| self.eval(p.x).map(|y| (p.y - y).abs()))
            .fold(0.0, f64::max)
    }
}

impl TryFrom<Vec<Segment>> for PiecewiseLinear {
    type Error = PlrError;

    fn try_from(segments: Vec<Segment>) -> Result<Self, Self::Error> {
        Self::try_new(segments)
    }
}

impl From<PiecewiseLinear> for Vec<Segment> {
    fn from(model: PiecewiseLinear) -> Self {
        model.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::point;

    fn model() -> PiecewiseLinear {
        PiecewiseLinear::try_new(vec![
            Segment::new(0.0, 1.0, 1.0, 0.0),
            Segment::new(2.0, 4.0, -1.0, 5.0),
        ])
        .unwrap()
    }

    #[test]
    fn lookup_by_x() {
        let m = model();
        assert_eq!(m.eval(0.5), Some(0.5));
        assert_eq!(m.eval(3.0), Some(2.0));
        assert_eq!(m.eval(4.0), Some(1.0));
        assert_eq!(m.segment_at(2.0).map(|s| s.start_x), Some(2.0));
    }

    #[test]
    fn gaps_and_outside_are_none() {
        let m = model();
        assert_eq!(m.eval(-0.1), None);
        assert_eq!(m.eval(1.5), None);
        assert_eq!(m.eval(4.5), None);
        assert_eq!(PiecewiseLinear::default().eval(0.0), None);
    }

    #[test]
    fn shared_boundary_prefers_later_segment() {
        let m = PiecewiseLinear::try_new(vec![
            Segment::new(0.0, 1.0, 0.0, 0.0),
            Segment::new(1.0, 2.0, 0.0, 7.0),
        ])
        .unwrap();
        assert_eq!(m.eval(1.0), Some(7.0));
    }

    #[test]
    fn ratio_and_error() {
        let m = model();
        assert_eq!(m.compression_ratio(10), 5.0);
        assert_eq!(PiecewiseLinear::default().compression_ratio(10), 0.0);
        let pts = [point(0.5, 0.6), point(3.0, 1.75), point(1.5, 100.0)];
        assert!((m.max_abs_error(&pts) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn decreasing_segments_are_rejected() {
        // what a fit over a grid running from 0 down to -7 produces
        let segs = vec![
            Segment::new(-0.0, -0.2, 1.0, 0.0),
            Segment::new(-0.4, -0.6, 1.0, 0.0),
        ];
        assert_eq!(
            PiecewiseLinear::try_new(segs),
            Err(PlrError::UnorderedSegments { index: 0 })
        );
        let segs = vec![
            Segment::new(2.0, 3.0, 1.0, 0.0),
            Segment::new(0.0, 1.0, 1.0, 0.0),
        ];
        assert_eq!(
            PiecewiseLinear::try_from(segs),
            Err(PlrError::UnorderedSegments { index: 1 })
        );
        let nan = vec![Segment::new(f64::NAN, 1.0, 0.0, 0.0)];
        assert!(PiecewiseLinear::try_new(nan).is_err());
    }

    #[test]
    fn deserialize_checks_order() {
        let json = serde_json::to_string(&model()).unwrap();
        let back: PiecewiseLinear = serde_json::from_str(&json).unwrap();
        assert_eq!(back, model());
        let bad = r#"[{"start_x":2.0,"end_x":3.0,"slope":0.0,"intercept":0.0},
                      {"start_x":0.0,"end_x":1.0,"slope":0.0,"intercept":0.0}]"#;
        let err = serde_json::from_str::<PiecewiseLinear>(bad).unwrap_err();
        assert!(err.to_string().contains("segment 1"));
    }
}

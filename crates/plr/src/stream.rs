//! Iterator and batch front-ends over `Segmenter`.

use crate::bound::ErrorBound;
use crate::error::PlrError;
use crate::geom::Point;
use crate::segment::Segment;
use crate::segmenter::Segmenter;

/// Lazily segments a point iterator, flushing the open segment once the input
/// runs out. Stops after the first error.
pub struct Segments<I> {
    points: I,
    segmenter: Segmenter,
    done: bool,
}

impl<I: Iterator<Item = Point>> Segments<I> {
    pub fn new(points: impl IntoIterator<Item = Point, IntoIter = I>, bound: ErrorBound) -> Self {
        Self {
            points: points.into_iter(),
            segmenter: Segmenter::with_bound(bound),
            done: false,
        }
    }
}

impl<I: Iterator<Item = Point>> Iterator for Segments<I> {
    type Item = Result<Segment, PlrError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        for p in self.points.by_ref() {
            match self.segmenter.ingest(p) {
                Ok(Some(seg)) => return Some(Ok(seg)),
                Ok(None) => {}
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        self.done = true;
        self.segmenter.finalize().transpose()
    }
}

impl<I: Iterator<Item = Point>> std::iter::FusedIterator for Segments<I> {}

/// Segment a whole stream in one call.
pub fn fit<P>(points: P, gamma: f64) -> Result<Vec<Segment>, PlrError>
where
    P: IntoIterator<Item = Point>,
{
    let bound = ErrorBound::new(gamma)?;
    Segments::new(points, bound).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::point;

    #[test]
    fn fit_matches_manual_driving() {
        let pts = vec![point(0.0, 0.0), point(1.0, 0.0), point(2.0, 10.0), point(3.0, 10.5)];
        let segs = fit(pts.iter().copied(), 0.5).unwrap();

        let mut s = Segmenter::new(0.5).unwrap();
        let mut manual = Vec::new();
        for p in pts {
            manual.extend(s.ingest(p).unwrap());
        }
        manual.extend(s.finalize().unwrap());
        assert_eq!(segs, manual);
        assert_eq!(segs.len(), 2);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(fit(Vec::<Point>::new(), 1.0).unwrap().is_empty());
    }

    #[test]
    fn iterator_stops_after_error() {
        let pts = vec![point(0.0, 0.0), point(0.0, 1.0), point(1.0, 1.0)];
        let bound = ErrorBound::new(0.1).unwrap();
        let mut it = Segments::new(pts, bound);
        assert_eq!(it.next(), Some(Err(PlrError::DegenerateInput { x: 0.0 })));
        assert_eq!(it.next(), None);
        assert!(fit(vec![point(0.0, 0.0), point(0.0, 1.0)], 0.1).is_err());
    }

    #[test]
    fn invalid_gamma_surfaces_from_fit() {
        assert!(matches!(
            fit(vec![point(0.0, 0.0)], f64::NAN),
            Err(PlrError::InvalidErrorBound { .. })
        ));
    }
}

//! Greedy streaming segmentation (single pass, O(1) per point).
//!
//! Model
//! - The first two points of a segment fix an error cone: the widest pair of
//!   lines (`lower`, `upper`) that keep both points within ±γ. They cross at a
//!   pivot strictly between the two x-coordinates.
//! - Every later point is absorbed while it lies strictly between the cone
//!   edges. Absorbing narrows the cone by rotating an edge about the pivot onto
//!   the point's error bar, so the pivot never moves within a segment.
//! - The first point outside the cone closes the segment and seeds the next.
//!
//! The emitted line passes through the pivot with the mean of the edge slopes.
//! This is greedy, not an optimal segmentation.

use tracing::{debug, trace};

use crate::bound::ErrorBound;
use crate::error::PlrError;
use crate::geom::{intersect, is_above, is_below, line_through, shift_down, shift_up, Line, Point};
use crate::segment::Segment;

/// Cone of an open segment with at least two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cone {
    /// First point of the segment.
    pub p0: Point,
    /// Most recently absorbed point.
    pub last: Point,
    pub lower: Line,
    pub upper: Line,
    /// Crossing of `lower` and `upper`; fixed for the segment's lifetime.
    pub pivot: Point,
}

impl Cone {
    /// Widest cone admitting both `p0` and `p1` within ±γ.
    pub fn open(p0: Point, p1: Point, gamma: f64) -> Result<Self, PlrError> {
        let lower = line_through(shift_up(p0, gamma), shift_down(p1, gamma))?;
        let upper = line_through(shift_down(p0, gamma), shift_up(p1, gamma))?;
        let pivot = intersect(lower, upper)?;
        Ok(Self {
            p0,
            last: p1,
            lower,
            upper,
            pivot,
        })
    }

    /// Strictly inside both edges.
    #[inline]
    pub fn admits(&self, p: Point) -> bool {
        is_above(p, &self.lower) && is_below(p, &self.upper)
    }

    /// Absorb an admitted point, rotating each edge about the pivot when the
    /// point's error bar cuts into the cone.
    fn absorb(mut self, p: Point, gamma: f64) -> Result<Self, PlrError> {
        let su = shift_up(p, gamma);
        let sl = shift_down(p, gamma);
        if is_below(su, &self.upper) {
            self.upper = line_through(self.pivot, su)?;
        }
        if is_above(sl, &self.lower) {
            self.lower = line_through(self.pivot, sl)?;
        }
        self.last = p;
        Ok(self)
    }

    /// Segment for everything absorbed so far.
    pub fn segment(&self) -> Segment {
        let slope = (self.lower.slope + self.upper.slope) / 2.0;
        let intercept = -slope * self.pivot.x + self.pivot.y;
        Segment::new(self.p0.x, self.last.x, slope, intercept)
    }
}

/// Segmenter state. Each variant carries only what it needs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum State {
    /// Nothing seen yet.
    #[default]
    Empty,
    /// One point buffered; a second one is needed to open the cone.
    Pending { p0: Point },
    /// Cone established, absorbing points.
    Active(Cone),
    /// `finalize` has run; terminal.
    Closed,
}

impl State {
    /// Transition on one input point. Returns the next state and the segment
    /// closed by this point, if any. `self` is untouched on error.
    pub fn step(self, p: Point, gamma: f64) -> Result<(State, Option<Segment>), PlrError> {
        match self {
            State::Empty => Ok((State::Pending { p0: p }, None)),
            State::Pending { p0 } => {
                if p.x == p0.x {
                    return Err(PlrError::DegenerateInput { x: p.x });
                }
                let cone = Cone::open(p0, p, gamma)?;
                trace!(x0 = p0.x, x1 = p.x, pivot_x = cone.pivot.x, "cone opened");
                Ok((State::Active(cone), None))
            }
            State::Active(cone) => {
                if p.x == cone.last.x {
                    return Err(PlrError::DegenerateInput { x: p.x });
                }
                if !cone.admits(p) {
                    let seg = cone.segment();
                    debug!(
                        start_x = seg.start_x,
                        end_x = seg.end_x,
                        slope = seg.slope,
                        "segment closed"
                    );
                    return Ok((State::Pending { p0: p }, Some(seg)));
                }
                Ok((State::Active(cone.absorb(p, gamma)?), None))
            }
            State::Closed => Err(PlrError::SequenceClosed),
        }
    }

    /// Flush at end of stream. The returned state is always `Closed`.
    pub fn finish(self) -> Result<(State, Option<Segment>), PlrError> {
        let seg = match self {
            State::Empty => None,
            State::Pending { p0 } => Some(Segment::single_point(p0.x, p0.y)),
            State::Active(cone) => Some(cone.segment()),
            State::Closed => return Err(PlrError::SequenceClosed),
        };
        trace!(flushed = seg.is_some(), "stream finalized");
        Ok((State::Closed, seg))
    }
}

/// Owns a `State` and the error bound; the streaming entry point.
///
/// ```
/// use plr::{point, Segmenter};
///
/// let mut seg = Segmenter::new(0.01).unwrap();
/// for i in 0..4 {
///     assert!(seg.ingest(point(i as f64, i as f64)).unwrap().is_none());
/// }
/// let last = seg.finalize().unwrap().unwrap();
/// assert!((last.slope - 1.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct Segmenter {
    bound: ErrorBound,
    state: State,
}

impl Segmenter {
    pub fn new(gamma: f64) -> Result<Self, PlrError> {
        Ok(Self::with_bound(ErrorBound::new(gamma)?))
    }

    pub fn with_bound(bound: ErrorBound) -> Self {
        Self {
            bound,
            state: State::Empty,
        }
    }

    #[inline]
    pub fn error_bound(&self) -> ErrorBound {
        self.bound
    }

    #[inline]
    pub fn state(&self) -> &State {
        &self.state
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self.state, State::Closed)
    }

    /// Feed the next point (x strictly increasing). Returns the segment this
    /// point closed, if any. On error the segmenter keeps its prior state.
    pub fn ingest(&mut self, p: Point) -> Result<Option<Segment>, PlrError> {
        let (next, out) = self.state.step(p, self.bound.get())?;
        self.state = next;
        Ok(out)
    }

    /// Flush the open segment. Valid exactly once.
    pub fn finalize(&mut self) -> Result<Option<Segment>, PlrError> {
        let (next, out) = self.state.finish()?;
        self.state = next;
        Ok(out)
    }
}

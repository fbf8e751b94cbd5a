//! Greedy streaming piecewise-linear approximation.
//!
//! Turns an x-ordered stream of samples into line segments such that every
//! absorbed sample lies within ±γ (vertically) of its segment's line.
//!
//! Layout
//! - `geom`: points, lines and the cone primitives.
//! - `segmenter`: the per-point state machine (`State`, `Cone`, `Segmenter`).
//! - `stream`: iterator/batch front-ends (`Segments`, `fit`).
//! - `model`: `PiecewiseLinear`, the query side ("value at x").
//!
//! One `Segmenter` serves one stream. To parallelize, split the stream into
//! disjoint x-ranges and run an independent `Segmenter` per range.

pub mod bound;
pub mod error;
pub mod geom;
pub mod model;
pub mod segment;
pub mod segmenter;
pub mod stream;

pub use bound::ErrorBound;
pub use error::PlrError;
pub use geom::{point, Line, Point};
pub use model::PiecewiseLinear;
pub use segment::Segment;
pub use segmenter::{Cone, Segmenter, State};
pub use stream::{fit, Segments};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports for callers.
pub mod prelude {
    pub use crate::{fit, point, ErrorBound, PiecewiseLinear, PlrError, Point, Segment, Segmenter};
}

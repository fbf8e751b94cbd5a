//! Error type shared by the segmenter and its geometry helpers.

use std::fmt;

/// Errors surfaced while building segments.
///
/// Every variant is deterministic: the same input and bound reproduce it.
/// None of them is transient, so there is nothing to retry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlrError {
    /// Two points share an x-coordinate, so no line passes through both.
    DegenerateInput { x: f64 },
    /// The upper and lower bound lines are parallel or coincident and have no
    /// single crossing point (always the case for a zero error bound).
    DegenerateCone { slope: f64 },
    /// `ingest` or `finalize` was called after the stream was finalized.
    SequenceClosed,
    /// The error bound is negative, NaN or infinite.
    InvalidErrorBound { gamma: f64 },
    /// Segment `index` does not start after its predecessor, or ends before
    /// it starts.
    UnorderedSegments { index: usize },
}

impl fmt::Display for PlrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlrError::DegenerateInput { x } => write!(
                f,
                "degenerate input: two points share x = {x} (x must be strictly increasing)"
            ),
            PlrError::DegenerateCone { slope } => write!(
                f,
                "degenerate cone: bound lines are parallel (slope {slope}); the error bound must be > 0"
            ),
            PlrError::SequenceClosed => write!(f, "sequence already finalized"),
            PlrError::InvalidErrorBound { gamma } => {
                write!(f, "invalid error bound {gamma} (expected a finite value >= 0)")
            }
            PlrError::UnorderedSegments { index } => write!(
                f,
                "segment {index} is out of order (start_x must increase and start_x <= end_x)"
            ),
        }
    }
}

impl std::error::Error for PlrError {}

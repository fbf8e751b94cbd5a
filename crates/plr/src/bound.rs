use crate::error::PlrError;

/// Maximum vertical deviation γ allowed between an absorbed point and its
/// segment's line. Validated once and immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ErrorBound(f64);

impl ErrorBound {
    /// Accepts any finite `gamma >= 0`. Zero is allowed here; it only fails
    /// later, when a cone has to be built from two points.
    pub fn new(gamma: f64) -> Result<Self, PlrError> {
        if gamma.is_finite() && gamma >= 0.0 {
            Ok(Self(gamma))
        } else {
            Err(PlrError::InvalidErrorBound { gamma })
        }
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for ErrorBound {
    type Error = PlrError;

    fn try_from(gamma: f64) -> Result<Self, Self::Error> {
        Self::new(gamma)
    }
}

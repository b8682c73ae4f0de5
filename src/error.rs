//! Error types for curve construction.

use thiserror::Error;

/// Errors that can occur while building a curve.
///
/// Evaluating a curve never fails; these only come up at the boundaries
/// where anchors or interpolators are created.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// An anchor lies to the left of its predecessor.
    #[cfg(feature = "monotonic_check")]
    #[error("Anchor {index} at x = {current} lies left of its predecessor at x = {previous}")]
    UnorderedAnchors {
        index: usize,
        previous: f64,
        current: f64,
    },

    /// An anchor position has a `NaN` or infinite coordinate.
    #[error("Anchor {index} has a non-finite position")]
    NonFinitePosition { index: usize },

    /// No interpolator in the catalog goes by this name.
    #[error("Unknown interpolator: {0:?}")]
    UnknownInterpolator(String),
}

/// Result type for curve construction.
pub type CurveResult<T> = Result<T, CurveError>;

//! The owned catalog sum type.
use crate::interpolator::*;
use crate::interpolators::*;
use crate::{CurveError, CurveResult};
use core::{fmt, str::FromStr};

interpolation_enum!(
    Linear,
    Parabola,
    SingleCurve,
    SingleCurve2,
    DoubleCurve,
    DoubleCurve2,
    DoubleCurve3,
    HalfSine,
    Wave,
);

impl Default for Interpolation {
    fn default() -> Self {
        Self::Linear(Linear::default())
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a display name, e.g. `"Double curve 2"`, with `p = 0`.
impl FromStr for Interpolation {
    type Err = CurveError;

    fn from_str(name: &str) -> CurveResult<Self> {
        Self::with_p(name, 0.0)
    }
}

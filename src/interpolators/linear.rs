use crate::interpolator::*;

/// The identity, `f(t) = t`.
///
/// The shape parameter is kept so `Linear` can be swapped with the other
/// catalog entries, but it has no effect.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Linear {
    p: f64,
}

shape_parameter!(Linear, "Linear");

impl Interpolator for Linear {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    #[inline]
    fn interpolate(&self, t: f64) -> f64 {
        t
    }

    fn as_derivable(&self) -> Option<&dyn Derivable> {
        Some(self)
    }

    fn as_integrable(&self) -> Option<&dyn Integrable> {
        Some(self)
    }
}

impl Derivable for Linear {
    #[inline]
    fn derivative(&self, t: f64) -> f64 {
        linear_derivative(t)
    }
}

impl Integrable for Linear {
    #[inline]
    fn integral(&self, t1: f64, t2: f64) -> f64 {
        linear_integral(t1, t2)
    }
}

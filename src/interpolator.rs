//! Interpolator capability contract.
//!
//! Every interpolator maps a normalized segment parameter `t` in `[0, 1]`
//! to a normalized value with `f(0) = 0` and `f(1) = 1`. Anything beyond
//! that is optional and has to be asked for explicitly through the
//! `as_*` queries on [`Interpolator`]. The curve evaluator falls back to
//! linear behavior (or to the gradient optimizer) when a capability is
//! missing.

/// A normalized interpolation function for one curve segment.
pub trait Interpolator {
    /// Human readable name, e.g. for an editor's dropdown.
    fn name(&self) -> &'static str;

    /// Evaluates the interpolation function at `t`.
    fn interpolate(&self, t: f64) -> f64;

    /// Returns the interpolator as [`Derivable`] if it knows its own
    /// derivative.
    fn as_derivable(&self) -> Option<&dyn Derivable> {
        None
    }

    /// Returns the interpolator as [`Integrable`] if it has a closed form
    /// integral.
    fn as_integrable(&self) -> Option<&dyn Integrable> {
        None
    }

    /// Returns the interpolator as [`Invertible`] if it can solve
    /// `interpolate(t) = y` analytically.
    fn as_invertible(&self) -> Option<&dyn Invertible> {
        None
    }

    /// Normalized positions where the value may have an extremum away from
    /// the segment ends.
    ///
    /// `None` means the function is monotonic between the ends.
    fn extrema_positions(&self) -> Option<&[f64]> {
        None
    }

    /// Normalized positions where the derivative may have an extremum.
    ///
    /// `None` means the derivative is monotonic, so looking at `t = 0` and
    /// `t = 1` is enough.
    fn derivative_extrema_positions(&self) -> Option<&[f64]> {
        None
    }

    /// Normalized positions where the running integral may have an
    /// extremum.
    fn integral_extrema_positions(&self) -> Option<&[f64]> {
        None
    }
}

/// An interpolator that knows its derivative.
pub trait Derivable {
    /// Derivative of [`Interpolator::interpolate`] with respect to `t`.
    fn derivative(&self, t: f64) -> f64;
}

/// An interpolator with a closed form definite integral.
pub trait Integrable {
    /// Integral of [`Interpolator::interpolate`] over `[t1, t2]`.
    ///
    /// The bounds are not restricted to `[0, 1]`; the closed forms are
    /// evaluated as is.
    fn integral(&self, t1: f64, t2: f64) -> f64;
}

/// An interpolator that can be solved for `t`.
pub trait Invertible {
    /// Returns every `t` with `interpolate(t) = y`.
    ///
    /// Periodic shapes yield one root per half cycle. The list is
    /// materialized eagerly and capped, so it is always finite. Roots are
    /// not guaranteed to lie within `[0, 1]`.
    fn inverse(&self, y: f64) -> Vec<f64>;
}

/// An interpolator with a shape parameter `P`.
pub trait Parameterized {
    /// The raw shape parameter.
    fn p(&self) -> f64;

    /// Sets the shape parameter.
    ///
    /// Values outside `[-1, 1]` are accepted and clamped on use.
    fn set_p(&mut self, p: f64);
}

/// Derivative of the identity interpolation.
#[inline]
pub fn linear_derivative(_t: f64) -> f64 {
    1.0
}

/// Integral of the identity interpolation over `[t1, t2]`.
#[inline]
pub fn linear_integral(t1: f64, t2: f64) -> f64 {
    0.5 * t2 * t2 - 0.5 * t1 * t1
}

use super::{clamp_p, is_degenerate, DEGENERATE};
use crate::interpolator::*;
use core::f64::consts::LN_2;

// Exponential ratio, `(e^(k·t) - 1) / (e^k - 1)`.

#[inline]
pub(super) fn exp_ratio(t: f64, k: f64) -> f64 {
    (k * t).exp_m1() / k.exp_m1()
}

#[inline]
pub(super) fn exp_ratio_derivative(t: f64, k: f64) -> f64 {
    k * (k * t).exp() / k.exp_m1()
}

// Power-of-two ratio, `(2^(k·t) - 1) / (2^k - 1)`.

#[inline]
pub(super) fn pow2_ratio(t: f64, k: f64) -> f64 {
    ((k * t).exp2() - 1.0) / (k.exp2() - 1.0)
}

#[inline]
pub(super) fn pow2_ratio_derivative(t: f64, k: f64) -> f64 {
    k * LN_2 * (k * t).exp2() / (k.exp2() - 1.0)
}

/// Maps the shape parameter to the exponent used by the ratio families.
///
/// Positive parameters bend the curve up (fast start), negative ones bend
/// it down.
#[inline]
pub(super) fn ratio_exponent(p: f64) -> f64 {
    -clamp_p(p) * 10.0
}

/// A single exponential bend, `f(t) = (e^(k·t) - 1) / (e^k - 1)` with
/// `k = -10·p`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SingleCurve {
    p: f64,
}

shape_parameter!(SingleCurve, "Single curve");

impl SingleCurve {
    fn primitive(t: f64, k: f64) -> f64 {
        ((k * t).exp() / k - t) / k.exp_m1()
    }
}

impl Interpolator for SingleCurve {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn interpolate(&self, t: f64) -> f64 {
        if is_degenerate(self.p) {
            return DEGENERATE.interpolate(t);
        }
        exp_ratio(t, ratio_exponent(self.p))
    }

    fn as_derivable(&self) -> Option<&dyn Derivable> {
        Some(self)
    }

    fn as_integrable(&self) -> Option<&dyn Integrable> {
        Some(self)
    }
}

impl Derivable for SingleCurve {
    fn derivative(&self, t: f64) -> f64 {
        if is_degenerate(self.p) {
            return DEGENERATE.derivative(t);
        }
        exp_ratio_derivative(t, ratio_exponent(self.p))
    }
}

impl Integrable for SingleCurve {
    fn integral(&self, t1: f64, t2: f64) -> f64 {
        if is_degenerate(self.p) {
            return DEGENERATE.integral(t1, t2);
        }
        let k = ratio_exponent(self.p);
        Self::primitive(t2, k) - Self::primitive(t1, k)
    }
}

/// Like [`SingleCurve`] but with base two,
/// `f(t) = (2^(k·t) - 1) / (2^k - 1)` with `k = -10·p`.
///
/// The bend is gentler than the exponential one for the same parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SingleCurve2 {
    p: f64,
}

shape_parameter!(SingleCurve2, "Single curve 2");

impl SingleCurve2 {
    fn primitive(t: f64, k: f64) -> f64 {
        ((k * t).exp2() / (k * LN_2) - t) / (k.exp2() - 1.0)
    }
}

impl Interpolator for SingleCurve2 {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn interpolate(&self, t: f64) -> f64 {
        if is_degenerate(self.p) {
            return DEGENERATE.interpolate(t);
        }
        pow2_ratio(t, ratio_exponent(self.p))
    }

    fn as_derivable(&self) -> Option<&dyn Derivable> {
        Some(self)
    }

    fn as_integrable(&self) -> Option<&dyn Integrable> {
        Some(self)
    }
}

impl Derivable for SingleCurve2 {
    fn derivative(&self, t: f64) -> f64 {
        if is_degenerate(self.p) {
            return DEGENERATE.derivative(t);
        }
        pow2_ratio_derivative(t, ratio_exponent(self.p))
    }
}

impl Integrable for SingleCurve2 {
    fn integral(&self, t1: f64, t2: f64) -> f64 {
        if is_degenerate(self.p) {
            return DEGENERATE.integral(t1, t2);
        }
        let k = ratio_exponent(self.p);
        Self::primitive(t2, k) - Self::primitive(t1, k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bend_direction() {
        // Positive parameters rise early, negative ones late.
        assert!(SingleCurve::new(0.5).interpolate(0.5) > 0.5);
        assert!(SingleCurve::new(-0.5).interpolate(0.5) < 0.5);
        assert!(SingleCurve2::new(0.5).interpolate(0.5) > 0.5);
        assert!(SingleCurve2::new(-0.5).interpolate(0.5) < 0.5);
    }

    #[test]
    fn mirrored_parameters_are_symmetric() {
        // f_p(t) = 1 - f_-p(1 - t) for both ratio families.
        for &t in &[0.1, 0.3, 0.7, 0.9] {
            assert_relative_eq!(
                SingleCurve::new(0.4).interpolate(t),
                1.0 - SingleCurve::new(-0.4).interpolate(1.0 - t),
                epsilon = 1e-12
            );
            assert_relative_eq!(
                SingleCurve2::new(0.4).interpolate(t),
                1.0 - SingleCurve2::new(-0.4).interpolate(1.0 - t),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn known_value() {
        // k = -3: (e^-1.5 - 1) / (e^-3 - 1)
        let expected = ((-1.5f64).exp() - 1.0) / ((-3.0f64).exp() - 1.0);
        assert_relative_eq!(
            SingleCurve::new(0.3).interpolate(0.5),
            expected,
            epsilon = 1e-12
        );
    }
}

//! S-shaped interpolators built from two mirrored single bends.
//!
//! The first half runs a bend over `[0, 0.5]`, the second half runs the
//! opposite bend over `[0.5, 1]`, so the curve is point symmetric around
//! `(0.5, 0.5)`. The derivative peaks (or bottoms out) at the ends and at
//! the midpoint.
use super::single_curve::{
    exp_ratio, exp_ratio_derivative, pow2_ratio, pow2_ratio_derivative,
    ratio_exponent,
};
use super::{clamp_p, is_degenerate, DEGENERATE, HALVES_EXTREMA};
use crate::interpolator::*;
use core::f64::consts::LN_2;

#[inline]
fn halves(t: f64, k: f64, g: impl Fn(f64, f64) -> f64) -> f64 {
    if t < 0.5 {
        0.5 * g(t * 2.0, k)
    } else {
        0.5 + 0.5 * g(t * 2.0 - 1.0, -k)
    }
}

#[inline]
fn halves_derivative(t: f64, k: f64, g: impl Fn(f64, f64) -> f64) -> f64 {
    if t < 0.5 {
        g(2.0 * t, k)
    } else {
        g(2.0 - 2.0 * t, k)
    }
}

/// Two mirrored [`SingleCurve`](super::SingleCurve) bends.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DoubleCurve {
    p: f64,
}

shape_parameter!(DoubleCurve, "Double curve");

impl DoubleCurve {
    fn primitive(t: f64, k: f64) -> f64 {
        if t < 0.5 {
            ((2.0 * k * t).exp() - 2.0 * k * t) / (4.0 * k * k.exp_m1())
        } else {
            (2.0 * k * ((2.0 * k.exp() - 1.0) * t - k.exp())
                + (k * (2.0 - 2.0 * t)).exp())
                / (4.0 * k.exp_m1() * k)
        }
    }
}

impl Interpolator for DoubleCurve {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn interpolate(&self, t: f64) -> f64 {
        if is_degenerate(self.p) {
            return DEGENERATE.interpolate(t);
        }
        halves(t, ratio_exponent(self.p), exp_ratio)
    }

    fn as_derivable(&self) -> Option<&dyn Derivable> {
        Some(self)
    }

    fn as_integrable(&self) -> Option<&dyn Integrable> {
        Some(self)
    }

    fn derivative_extrema_positions(&self) -> Option<&[f64]> {
        Some(&HALVES_EXTREMA)
    }
}

impl Derivable for DoubleCurve {
    fn derivative(&self, t: f64) -> f64 {
        if is_degenerate(self.p) {
            return DEGENERATE.derivative(t);
        }
        halves_derivative(t, ratio_exponent(self.p), exp_ratio_derivative)
    }
}

impl Integrable for DoubleCurve {
    fn integral(&self, t1: f64, t2: f64) -> f64 {
        if is_degenerate(self.p) {
            return DEGENERATE.integral(t1, t2);
        }
        let k = ratio_exponent(self.p);
        Self::primitive(t2, k) - Self::primitive(t1, k)
    }
}

/// Two mirrored [`SingleCurve2`](super::SingleCurve2) bends.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DoubleCurve2 {
    p: f64,
}

shape_parameter!(DoubleCurve2, "Double curve 2");

impl DoubleCurve2 {
    fn primitive(t: f64, k: f64) -> f64 {
        let denominator = k.exp2() - 1.0;
        if t < 0.5 {
            ((2.0 * k * t).exp2() / (2.0 * k * LN_2) - t) / (2.0 * denominator)
        } else {
            ((4.0 * k.exp2() - 2.0) * t
                + k.exp2() * ((k - 2.0 * k * t).exp2() - 2.0 * k * LN_2)
                    / (k * LN_2))
                / (4.0 * denominator)
        }
    }
}

impl Interpolator for DoubleCurve2 {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn interpolate(&self, t: f64) -> f64 {
        if is_degenerate(self.p) {
            return DEGENERATE.interpolate(t);
        }
        halves(t, ratio_exponent(self.p), pow2_ratio)
    }

    fn as_derivable(&self) -> Option<&dyn Derivable> {
        Some(self)
    }

    fn as_integrable(&self) -> Option<&dyn Integrable> {
        Some(self)
    }

    fn derivative_extrema_positions(&self) -> Option<&[f64]> {
        Some(&HALVES_EXTREMA)
    }
}

impl Derivable for DoubleCurve2 {
    fn derivative(&self, t: f64) -> f64 {
        if is_degenerate(self.p) {
            return DEGENERATE.derivative(t);
        }
        halves_derivative(t, ratio_exponent(self.p), pow2_ratio_derivative)
    }
}

impl Integrable for DoubleCurve2 {
    fn integral(&self, t1: f64, t2: f64) -> f64 {
        if is_degenerate(self.p) {
            return DEGENERATE.integral(t1, t2);
        }
        let k = ratio_exponent(self.p);
        Self::primitive(t2, k) - Self::primitive(t1, k)
    }
}

// Rational bend, `e^k·t / ((e^k - 1)·t + 1)`.

#[inline]
fn rational(t: f64, k: f64) -> f64 {
    k.exp() * t / (k.exp_m1() * t + 1.0)
}

#[inline]
fn rational_derivative(t: f64, k: f64) -> f64 {
    k.exp() / (t * k.exp_m1() + 1.0).powi(2)
}

/// Two mirrored rational bends, `g(t) = e^k·t / ((e^k - 1)·t + 1)` with
/// `k = 7·p`.
///
/// Unlike the exponential variants the rational bend is steepest right at
/// the ends.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DoubleCurve3 {
    p: f64,
}

shape_parameter!(DoubleCurve3, "Double curve 3");

impl DoubleCurve3 {
    #[inline]
    fn exponent(&self) -> f64 {
        clamp_p(self.p) * 7.0
    }

    fn primitive(t: f64, k: f64) -> f64 {
        let e = k.exp();
        let e_m1 = k.exp_m1();
        let denominator = 4.0 * e_m1 * e_m1;
        if t < 0.5 {
            e * (2.0 * t * e_m1 - (2.0 * t * e_m1).ln_1p()) / denominator
        } else {
            let q = (e_m1 * (2.0 - 2.0 * t)).ln_1p();
            (2.0 * t * (e - 2.0) * e_m1 - e * q + 2.0 * e_m1) / denominator
        }
    }
}

impl Interpolator for DoubleCurve3 {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn interpolate(&self, t: f64) -> f64 {
        if is_degenerate(self.p) {
            return DEGENERATE.interpolate(t);
        }
        halves(t, self.exponent(), rational)
    }

    fn as_derivable(&self) -> Option<&dyn Derivable> {
        Some(self)
    }

    fn as_integrable(&self) -> Option<&dyn Integrable> {
        Some(self)
    }

    fn derivative_extrema_positions(&self) -> Option<&[f64]> {
        Some(&HALVES_EXTREMA)
    }
}

impl Derivable for DoubleCurve3 {
    fn derivative(&self, t: f64) -> f64 {
        if is_degenerate(self.p) {
            return DEGENERATE.derivative(t);
        }
        halves_derivative(t, self.exponent(), rational_derivative)
    }
}

impl Integrable for DoubleCurve3 {
    fn integral(&self, t1: f64, t2: f64) -> f64 {
        if is_degenerate(self.p) {
            return DEGENERATE.integral(t1, t2);
        }
        let k = self.exponent();
        Self::primitive(t2, k) - Self::primitive(t1, k)
    }
}

use super::{clamp_p, is_degenerate, DEGENERATE};
use crate::interpolator::*;
use core::f64::consts::SQRT_2;

/// A stretch of the sine wave, `f(t) = sin(b·t) / sin(b)`.
///
/// The phase span `b` grows with `|p|` up to a quarter period at `|p| = 1`.
/// Negative parameters mirror the shape, `f(t) = 1 - g(1 - t)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HalfSine {
    p: f64,
}

shape_parameter!(HalfSine, "Half sine");

impl HalfSine {
    /// Phase span for a clamped parameter.
    #[inline]
    fn span(p: f64) -> f64 {
        let a = p.abs();
        2.0 * (1.0 / (SQRT_2 * a - a + 1.0)).acos()
    }

    fn primitive(t: f64, p: f64) -> f64 {
        let b = Self::span(p);
        if p > 0.0 {
            (1.0 - (b * t).cos()) / (b * b.sin())
        } else {
            (b.cos() - (b - b * t).cos()) / (b * b.sin()) + t
        }
    }
}

#[inline]
fn sine_stretch(t: f64, b: f64) -> f64 {
    (t * b).sin() / b.sin()
}

#[inline]
fn sine_stretch_derivative(t: f64, b: f64) -> f64 {
    b * (b * t).cos() / b.sin()
}

impl Interpolator for HalfSine {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn interpolate(&self, t: f64) -> f64 {
        if is_degenerate(self.p) {
            return DEGENERATE.interpolate(t);
        }
        let p = clamp_p(self.p);
        let b = Self::span(p);
        if p < 0.0 {
            1.0 - sine_stretch(1.0 - t, b)
        } else {
            sine_stretch(t, b)
        }
    }

    fn as_derivable(&self) -> Option<&dyn Derivable> {
        Some(self)
    }

    fn as_integrable(&self) -> Option<&dyn Integrable> {
        Some(self)
    }
}

impl Derivable for HalfSine {
    fn derivative(&self, t: f64) -> f64 {
        if is_degenerate(self.p) {
            return DEGENERATE.derivative(t);
        }
        let p = clamp_p(self.p);
        let b = Self::span(p);
        if p < 0.0 {
            sine_stretch_derivative(1.0 - t, b)
        } else {
            sine_stretch_derivative(t, b)
        }
    }
}

impl Integrable for HalfSine {
    fn integral(&self, t1: f64, t2: f64) -> f64 {
        if is_degenerate(self.p) {
            return DEGENERATE.integral(t1, t2);
        }
        let p = clamp_p(self.p);
        Self::primitive(t2, p) - Self::primitive(t1, p)
    }
}

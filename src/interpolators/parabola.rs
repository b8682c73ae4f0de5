use super::clamp_p;
use crate::interpolator::*;

/// A parabola through `(0, 0)` and `(1, 1)`, `f(t) = -p·t² + (p + 1)·t`.
///
/// Positive `p` bows the curve up, negative `p` bows it down. Within
/// `[-1, 1]` the parabola stays monotonic on the segment. `p = 0` is
/// already linear, so there is no degenerate fallback.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Parabola {
    p: f64,
}

shape_parameter!(Parabola, "Parabola");

impl Parabola {
    fn primitive(&self, t: f64) -> f64 {
        let p = clamp_p(self.p);
        -p * t.powi(3) / 3.0 + 0.5 * (p + 1.0) * t.powi(2)
    }
}

impl Interpolator for Parabola {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    #[inline]
    fn interpolate(&self, t: f64) -> f64 {
        let p = clamp_p(self.p);
        -p * t.powi(2) + (p + 1.0) * t
    }

    fn as_derivable(&self) -> Option<&dyn Derivable> {
        Some(self)
    }

    fn as_integrable(&self) -> Option<&dyn Integrable> {
        Some(self)
    }
}

impl Derivable for Parabola {
    #[inline]
    fn derivative(&self, t: f64) -> f64 {
        let p = clamp_p(self.p);
        -2.0 * p * t + p + 1.0
    }
}

impl Integrable for Parabola {
    fn integral(&self, t1: f64, t2: f64) -> f64 {
        self.primitive(t2) - self.primitive(t1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_form() {
        let parabola = Parabola::new(0.5);
        assert_eq!(parabola.interpolate(0.5), 0.625);
        assert_eq!(parabola.derivative(0.0), 1.5);
        assert_eq!(parabola.derivative(1.0), 0.5);
    }

    #[test]
    fn clamps_parameter() {
        assert_eq!(
            Parabola::new(7.0).interpolate(0.25),
            Parabola::new(1.0).interpolate(0.25)
        );
        assert_eq!(
            Parabola::new(-3.0).integral(0.0, 1.0),
            Parabola::new(-1.0).integral(0.0, 1.0)
        );
    }
}

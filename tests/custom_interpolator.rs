//! Curves over interpolators that only implement part of the contract.

use anchor_curves::prelude::*;
use approx::assert_abs_diff_eq;

/// Values only, every query falls back to a straight line.
#[derive(Clone, Copy, Debug)]
struct Smoothstep;

impl Interpolator for Smoothstep {
    fn name(&self) -> &'static str {
        "Smoothstep"
    }

    fn interpolate(&self, t: f64) -> f64 {
        t * t * (3.0 - 2.0 * t)
    }
}

const BUMP: f64 = 16.0 / 3.0;

/// `t + k·t²·(1 - t)`. The value peaks at `t = 0.75`, the slope at
/// `t = 1/3`.
#[derive(Clone, Copy, Debug)]
struct Bump;

impl Interpolator for Bump {
    fn name(&self) -> &'static str {
        "Bump"
    }

    fn interpolate(&self, t: f64) -> f64 {
        t + BUMP * t * t * (1.0 - t)
    }

    fn as_derivable(&self) -> Option<&dyn Derivable> {
        Some(self)
    }

    fn extrema_positions(&self) -> Option<&[f64]> {
        Some(&[0.75])
    }

    fn derivative_extrema_positions(&self) -> Option<&[f64]> {
        Some(&[1.0 / 3.0])
    }
}

impl Derivable for Bump {
    fn derivative(&self, t: f64) -> f64 {
        1.0 + BUMP * (2.0 * t - 3.0 * t * t)
    }
}

/// `2t² - t`, dipping below zero before it rises to `1`. Its running
/// area bottoms out at `t = 0.5`.
#[derive(Clone, Copy, Debug)]
struct Dip;

impl Interpolator for Dip {
    fn name(&self) -> &'static str {
        "Dip"
    }

    fn interpolate(&self, t: f64) -> f64 {
        2.0 * t * t - t
    }

    fn as_integrable(&self) -> Option<&dyn Integrable> {
        Some(self)
    }

    fn integral_extrema_positions(&self) -> Option<&[f64]> {
        Some(&[0.5])
    }
}

impl Integrable for Dip {
    fn integral(&self, t1: f64, t2: f64) -> f64 {
        let primitive = |t: f64| 2.0 * t.powi(3) / 3.0 - 0.5 * t * t;
        primitive(t2) - primitive(t1)
    }
}

#[test]
fn value_only_falls_back_to_lines() {
    let curve: [Anchor<Smoothstep>; 2] = [
        Anchor::new(0.0, -1.0, Smoothstep),
        Anchor::new(2.0, 1.0, Smoothstep),
    ];

    assert_eq!(curve.value(1.0), 0.0);
    assert_eq!(curve.value(0.5), -0.6875);

    // The secant slope.
    assert_eq!(curve.derivative(0.5), 1.0);
    assert_eq!(curve.min_derivative(), 1.0);
    assert_eq!(curve.max_derivative(), 1.0);

    // The area of the straight line through both anchors.
    assert_eq!(curve.integral(0.0, 2.0), 0.0);
    assert_eq!(curve.integral(0.0, 1.0), -0.5);
    assert_eq!(curve.min_integral(), -0.5);
    assert_eq!(curve.max_integral(), 0.0);
}

#[test]
fn declared_extrema_are_checked() {
    let curve: [Anchor<Bump>; 2] =
        [Anchor::new(0.0, 0.0, Bump), Anchor::new(1.0, 2.0, Bump)];

    assert_abs_diff_eq!(curve.max_value(), 3.0, epsilon = 1e-12);
    assert_eq!(curve.min_value(), 0.0);

    // The declared position and both ends are compared.
    assert_abs_diff_eq!(curve.max_derivative(), 50.0 / 9.0, epsilon = 1e-12);
    assert_abs_diff_eq!(curve.min_derivative(), -26.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn declared_integral_extrema_add_to_the_segment_end() {
    let curve: [Anchor<Dip>; 2] =
        [Anchor::new(0.0, 0.0, Dip), Anchor::new(1.0, 1.0, Dip)];

    // The area ends up at 1/6 but passes through -1/24 on the way.
    assert_abs_diff_eq!(curve.integral(0.0, 1.0), 1.0 / 6.0, epsilon = 1e-15);
    assert_abs_diff_eq!(curve.max_integral(), 1.0 / 6.0, epsilon = 1e-15);
    assert_abs_diff_eq!(curve.min_integral(), -1.0 / 24.0, epsilon = 1e-15);
}

#[test]
fn linear_helpers_match_a_straight_segment() {
    let curve: [Anchor<Smoothstep>; 2] = [
        Anchor::new(0.0, 0.0, Smoothstep),
        Anchor::new(1.0, 1.0, Smoothstep),
    ];

    assert_eq!(curve.integral(0.0, 0.5), linear_integral(0.0, 0.5));
    assert_eq!(curve.derivative(0.5), linear_derivative(0.5));
}

#[test]
fn custom_enum_of_interpolators() {
    #[derive(Clone, Copy, Debug)]
    enum Shape {
        Catalog(Interpolation),
        Smooth(Smoothstep),
    }

    impl Interpolator for Shape {
        fn name(&self) -> &'static str {
            match self {
                Shape::Catalog(i) => i.name(),
                Shape::Smooth(s) => s.name(),
            }
        }

        fn interpolate(&self, t: f64) -> f64 {
            match self {
                Shape::Catalog(i) => i.interpolate(t),
                Shape::Smooth(s) => s.interpolate(t),
            }
        }

        fn as_integrable(&self) -> Option<&dyn Integrable> {
            match self {
                Shape::Catalog(i) => i.as_integrable(),
                Shape::Smooth(s) => s.as_integrable(),
            }
        }
    }

    let curve: AnchorSequence<Shape> = AnchorSequence::new(vec![
        Anchor::new(0.0, 0.0, Shape::Smooth(Smoothstep)),
        Anchor::new(1.0, 1.0, Shape::Catalog(Parabola::new(1.0).into())),
        Anchor::new(2.0, 0.0, Shape::Smooth(Smoothstep)),
    ])
    .unwrap();

    assert_eq!(curve[1].interpolator.name(), "Parabola");
    assert_eq!(curve.value(0.5), 0.75);
    assert_eq!(curve.value(1.5), 0.5);
    // Parabola with `p = 1` encloses 2/3, the straight line 1/2.
    assert_abs_diff_eq!(
        curve.integral(0.0, 2.0),
        2.0 / 3.0 + 0.5,
        epsilon = 1e-12
    );
}

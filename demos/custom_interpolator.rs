//! Plugging a custom interpolator into a curve.
//!
//! `Smoothstep` only provides values. `Bump` also knows its derivative and
//! integral and where its value peaks, so the curve can use them for
//! exact extrema.

use anchor_curves::prelude::*;

struct Smoothstep;

impl Interpolator for Smoothstep {
    fn name(&self) -> &'static str {
        "Smoothstep"
    }

    fn interpolate(&self, t: f64) -> f64 {
        t * t * (3.0 - 2.0 * t)
    }
}

/// `t + k·t²·(1 - t)`, overshooting to `1.5` at `t = 0.75` before it
/// settles back to `1`.
struct Bump;

const BUMP: f64 = 16.0 / 3.0;

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

    fn as_integrable(&self) -> Option<&dyn Integrable> {
        Some(self)
    }

    fn extrema_positions(&self) -> Option<&[f64]> {
        Some(&[0.75])
    }
}

impl Derivable for Bump {
    fn derivative(&self, t: f64) -> f64 {
        1.0 + BUMP * (2.0 * t - 3.0 * t * t)
    }
}

impl Integrable for Bump {
    fn integral(&self, t1: f64, t2: f64) -> f64 {
        let primitive = |t: f64| {
            0.5 * t * t + BUMP * (t.powi(3) / 3.0 - t.powi(4) / 4.0)
        };
        primitive(t2) - primitive(t1)
    }
}

/// A curve mixing both shapes.
enum Shape {
    Smooth(Smoothstep),
    Bump(Bump),
}

impl Interpolator for Shape {
    fn name(&self) -> &'static str {
        match self {
            Shape::Smooth(s) => s.name(),
            Shape::Bump(b) => b.name(),
        }
    }

    fn interpolate(&self, t: f64) -> f64 {
        match self {
            Shape::Smooth(s) => s.interpolate(t),
            Shape::Bump(b) => b.interpolate(t),
        }
    }

    fn as_derivable(&self) -> Option<&dyn Derivable> {
        match self {
            Shape::Smooth(s) => s.as_derivable(),
            Shape::Bump(b) => b.as_derivable(),
        }
    }

    fn as_integrable(&self) -> Option<&dyn Integrable> {
        match self {
            Shape::Smooth(s) => s.as_integrable(),
            Shape::Bump(b) => b.as_integrable(),
        }
    }

    fn extrema_positions(&self) -> Option<&[f64]> {
        match self {
            Shape::Smooth(s) => s.extrema_positions(),
            Shape::Bump(b) => b.extrema_positions(),
        }
    }
}

fn main() {
    let curve: [Anchor<Shape>; 3] = [
        Anchor::new(0.0, 0.0, Shape::Smooth(Smoothstep)),
        Anchor::new(1.0, 1.0, Shape::Smooth(Smoothstep)),
        Anchor::new(3.0, 2.0, Shape::Bump(Bump)),
    ];

    for x in [0.5, 1.0, 2.0, 2.5, 3.0] {
        println!(
            "value({:.1}) = {:.4}   derivative({:.1}) = {:.4}",
            x,
            curve.value(x),
            x,
            curve.derivative(x)
        );
    }

    // Smoothstep has no derivative, so its segment reports the secant.
    println!(
        "slope range: [{}, {}]",
        curve.min_derivative(),
        curve.max_derivative()
    );
    // The declared peak of `Bump` raises the maximum above the last anchor.
    println!("value range: [{}, {}]", curve.min_value(), curve.max_value());
    println!("area: {:.4}", curve.integral(0.0, 3.0));
}

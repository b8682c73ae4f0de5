//! The interpolator catalog.
//!
//! | Interpolator     | Derivative | Integral | Inverse | Derivative extrema |
//! |------------------|:----------:|:--------:|:-------:|:------------------:|
//! | [`Linear`]       | ✓          | ✓        |         |                    |
//! | [`Parabola`]     | ✓          | ✓        |         |                    |
//! | [`SingleCurve`]  | ✓          | ✓        |         |                    |
//! | [`SingleCurve2`] | ✓          | ✓        |         |                    |
//! | [`DoubleCurve`]  | ✓          | ✓        |         | ✓                  |
//! | [`DoubleCurve2`] | ✓          | ✓        |         | ✓                  |
//! | [`DoubleCurve3`] | ✓          | ✓        |         | ✓                  |
//! | [`HalfSine`]     | ✓          | ✓        |         |                    |
//! | [`Wave`]         | ✓          | ✓        | ✓       | ✓                  |
//!
//! Every shape parameter is clamped to `[-1, 1]` before use. Except for
//! [`Parabola`] and [`Wave`], a parameter within [`EPSILON`] of zero falls
//! back to [`Linear`] since the closed forms divide by it.
use crate::EPSILON;

mod double_curve;
mod half_sine;
mod linear;
mod parabola;
mod single_curve;
mod wave;

pub use double_curve::{DoubleCurve, DoubleCurve2, DoubleCurve3};
pub use half_sine::HalfSine;
pub use linear::Linear;
pub use parabola::Parabola;
pub use single_curve::{SingleCurve, SingleCurve2};
pub use wave::Wave;

/// Stand-in for shapes whose parameter is too close to zero.
const DEGENERATE: Linear = Linear::new(0.0);

/// Extrema of the derivative for shapes made of two mirrored halves.
const HALVES_EXTREMA: [f64; 3] = [0.0, 0.5, 1.0];

#[inline]
fn clamp_p(p: f64) -> f64 {
    num_traits::clamp(p, -1.0, 1.0)
}

#[inline]
fn is_degenerate(p: f64) -> bool {
    p.abs() < EPSILON
}

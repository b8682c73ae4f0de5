//! Piecewise curves through anchor points.
//!
//! A curve is an ordered list of [`Anchor`]s. Each anchor carries the
//! [`Interpolator`] that shapes the segment *ending* at it, tuned by a
//! single shape parameter `p` in `[-1, 1]`. The [`Curve`] trait answers
//! the questions an envelope or response curve editor needs to ask:
//!
//! * the value and the slope at any `x`,
//! * the area between two `x`,
//! * the global minimum and maximum of the value, the slope and the
//!   running area.
//!
//! Nine interpolators ship in [`interpolators`] and are collected in the
//! owned, `Copy` sum type [`Interpolation`], which is the default
//! interpolator type of [`Anchor`] and [`AnchorSequence`].
//!
//! Interpolators opt into extra capabilities (derivative, integral,
//! inverse and known extrema positions). Where one is missing the curve
//! falls back to linear behavior, or to a [gradient search](optimize)
//! for integral extrema.
//!
//! # Example
//! ```
//! use anchor_curves::prelude::*;
//!
//! let curve: AnchorSequence = AnchorSequence::new(vec![
//!     Anchor::new(0.0, 0.0, Linear::default()),
//!     Anchor::new(1.0, 1.0, DoubleCurve::new(0.6)),
//!     Anchor::new(3.0, -0.5, Wave::new(0.9)),
//! ])?;
//!
//! assert_eq!(curve.value(0.0), 0.0);
//! // Beyond the last anchor the curve holds its value.
//! assert_eq!(curve.value(5.0), -0.5);
//! assert_eq!(curve.max_value(), 1.0);
//! assert!(curve.min_integral() <= 0.0);
//! # Ok::<(), CurveError>(())
//! ```
//!
//! # Custom Interpolators
//!
//! Anything implementing [`Interpolator`] can shape a segment. Use it as
//! the type parameter of [`Anchor`], or wrap several kinds in your own
//! enum.
//!
//! ```
//! use anchor_curves::prelude::*;
//!
//! struct Smoothstep;
//!
//! impl Interpolator for Smoothstep {
//!     fn name(&self) -> &'static str {
//!         "Smoothstep"
//!     }
//!
//!     fn interpolate(&self, t: f64) -> f64 {
//!         t * t * (3.0 - 2.0 * t)
//!     }
//! }
//!
//! let curve: [Anchor<Smoothstep>; 2] = [
//!     Anchor::new(0.0, 0.0, Smoothstep),
//!     Anchor::new(1.0, 2.0, Smoothstep),
//! ];
//!
//! assert_eq!(curve.value(0.5), 1.0);
//! // Without a closed form the integral assumes a straight line.
//! assert_eq!(curve.integral(0.0, 1.0), 1.0);
//! ```
//!
//! # Cargo Features
#![doc = document_features::document_features!()]

#[macro_use]
mod interpolation_macros;

pub mod anchor;
pub mod curve;
pub mod error;
pub mod interpolation;
pub mod interpolator;
pub mod interpolators;
pub mod optimize;

pub use anchor::{Anchor, AnchorSequence, Point};
pub use curve::{find_segment, Curve};
pub use error::{CurveError, CurveResult};
pub use interpolation::Interpolation;
pub use interpolator::{
    linear_derivative, linear_integral, Derivable, Integrable, Interpolator,
    Invertible, Parameterized,
};
pub use optimize::{
    gradient_ascent, gradient_ascent_with, gradient_descent,
    gradient_descent_with, GradientOptions,
};

/// Tolerance below which a width counts as zero.
///
/// Segments narrower than this are treated as vertical jumps and shape
/// parameters closer than this to zero fall back to a straight line.
pub const EPSILON: f64 = 1.0e-7;

#[inline]
pub(crate) fn almost_zero(value: f64) -> bool {
    value.abs() <= EPSILON
}

/// Everything needed to build and query a curve.
pub mod prelude {
    pub use crate::{
        interpolators::*, linear_derivative, linear_integral, Anchor,
        AnchorSequence, Curve, CurveError, CurveResult, Derivable,
        Integrable, Interpolation, Interpolator, Invertible, Parameterized,
        Point,
    };
}

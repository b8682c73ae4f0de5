//! Evaluation of a curve given as a slice of anchors.
//!
//! Everything here works on plain `[Anchor<I>]` and never fails. Edge
//! cases resolve to defined numbers:
//!
//! * An empty slice has value `0`, derivative `-∞` and integral `0`.
//! * Outside the anchor range the curve holds the value of the nearest
//!   end anchor.
//! * A segment narrower than [`EPSILON`](crate::EPSILON) is a jump: its
//!   value is the left anchor's `y` and its derivative is `±∞`.
use crate::{
    almost_zero,
    anchor::Anchor,
    interpolator::{linear_derivative, linear_integral, Interpolator},
    optimize::{gradient_ascent, gradient_descent},
};

/// Learning rate of the gradient search for integral extrema.
const GRADIENT_RATE: f64 = 0.1;

/// Finds the anchors surrounding `x`.
///
/// Returns `(previous, next)` where `previous` is the last anchor left of
/// `x` and `next` the first anchor at or right of it. Left of the first
/// anchor both are the first anchor; right of the last both are the last.
/// `None` for an empty slice.
pub fn find_segment<I>(
    anchors: &[Anchor<I>],
    x: f64,
) -> Option<(&Anchor<I>, &Anchor<I>)> {
    let mut previous = anchors.first()?;
    let mut next = anchors.last()?;

    for anchor in anchors {
        if anchor.position.x < x {
            previous = anchor;
        } else {
            next = anchor;
            break;
        }
    }

    Some((previous, next))
}

/// Queries on a piecewise curve.
///
/// Implemented for `[Anchor<I>]`, so it is available on `Vec<Anchor<I>>`
/// and [`AnchorSequence`](crate::AnchorSequence) as well.
///
/// # Examples
/// ```
/// use anchor_curves::prelude::*;
///
/// let curve = vec![
///     Anchor::<Interpolation>::new(0.0, 0.0, Linear::default()),
///     Anchor::new(1.0, 1.0, Parabola::new(0.5)),
///     Anchor::new(2.0, 0.0, Linear::default()),
/// ];
///
/// assert_eq!(curve.value(0.5), 0.625);
/// assert_eq!(curve.max_value(), 1.0);
/// ```
pub trait Curve {
    /// The curve's value at `x`.
    fn value(&self, x: f64) -> f64;

    /// The slope of the curve at `x`.
    fn derivative(&self, x: f64) -> f64;

    /// The signed area under the curve between `t1` and `t2`.
    ///
    /// Only the part of `[t1, t2]` covered by anchors contributes. Swapping
    /// the bounds negates the result.
    fn integral(&self, t1: f64, t2: f64) -> f64;

    /// The smallest value the curve takes. `+∞` without anchors.
    fn min_value(&self) -> f64;

    /// The largest value the curve takes. `-∞` without anchors.
    fn max_value(&self) -> f64;

    /// The smallest slope over all segments. `+∞` without segments.
    fn min_derivative(&self) -> f64;

    /// The largest slope over all segments. `-∞` without segments.
    fn max_derivative(&self) -> f64;

    /// The smallest running area measured from the first anchor.
    ///
    /// Never positive since the area at the first anchor is `0`.
    fn min_integral(&self) -> f64;

    /// The largest running area measured from the first anchor.
    ///
    /// Never negative since the area at the first anchor is `0`.
    fn max_integral(&self) -> f64;
}

impl<I: Interpolator> Curve for [Anchor<I>] {
    fn value(&self, x: f64) -> f64 {
        let Some((previous, next)) = find_segment(self, x) else {
            return 0.0;
        };

        let difference = next.position - previous.position;

        if almost_zero(difference.x) {
            return previous.position.y;
        }

        let t = (x - previous.position.x) / difference.x;

        previous.position.y + difference.y * next.interpolator.interpolate(t)
    }

    fn derivative(&self, x: f64) -> f64 {
        let Some((previous, next)) = find_segment(self, x) else {
            return f64::NEG_INFINITY;
        };

        let difference = next.position - previous.position;

        if almost_zero(difference.x) {
            return jump(difference.y);
        }

        let t = (x - previous.position.x) / difference.x;
        let derivative = match next.interpolator.as_derivable() {
            Some(derivable) => derivable.derivative(t),
            None => linear_derivative(t),
        };

        derivative * difference.y / difference.x
    }

    fn integral(&self, t1: f64, t2: f64) -> f64 {
        if t2 < t1 {
            return -self.integral(t2, t1);
        }

        let mut area = 0.0;

        for segment in self.windows(2) {
            let start = segment[0].position;
            let end = &segment[1];

            if end.position.x < t1 || start.x > t2 {
                continue;
            }

            let clipped_start = start.x.max(t1).min(t2);
            let clipped_end = end.position.x.max(t1).min(t2);
            let clipped_width = clipped_end - clipped_start;

            if almost_zero(clipped_width) {
                continue;
            }

            let difference = end.position - start;
            let from = (clipped_start - start.x) / difference.x;
            let to = (clipped_end - start.x) / difference.x;

            let normalized = match end.interpolator.as_integrable() {
                Some(integrable) => integrable.integral(from, to),
                None => linear_integral(from, to),
            };

            area += normalized * difference.x * difference.y
                + clipped_width * start.y;
        }

        area
    }

    fn min_value(&self) -> f64 {
        extreme_value(self, Extremum::Min)
    }

    fn max_value(&self) -> f64 {
        extreme_value(self, Extremum::Max)
    }

    fn min_derivative(&self) -> f64 {
        extreme_derivative(self, Extremum::Min)
    }

    fn max_derivative(&self) -> f64 {
        extreme_derivative(self, Extremum::Max)
    }

    fn min_integral(&self) -> f64 {
        extreme_integral(self, Extremum::Min)
    }

    fn max_integral(&self) -> f64 {
        extreme_integral(self, Extremum::Max)
    }
}

#[inline]
fn jump(height: f64) -> f64 {
    if height > 0.0 {
        f64::INFINITY
    } else {
        f64::NEG_INFINITY
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Extremum {
    Min,
    Max,
}

/// Running minimum or maximum.
struct Extreme {
    kind: Extremum,
    value: f64,
}

impl Extreme {
    fn new(kind: Extremum, value: f64) -> Self {
        Self { kind, value }
    }

    /// Starts at the identity of the comparison, `+∞` resp. `-∞`.
    fn unbounded(kind: Extremum) -> Self {
        let value = match kind {
            Extremum::Min => f64::INFINITY,
            Extremum::Max => f64::NEG_INFINITY,
        };
        Self::new(kind, value)
    }

    fn offer(&mut self, candidate: f64) {
        let improves = match self.kind {
            Extremum::Min => candidate < self.value,
            Extremum::Max => candidate > self.value,
        };

        if improves {
            self.value = candidate;
        }
    }
}

fn extreme_value<I: Interpolator>(anchors: &[Anchor<I>], kind: Extremum) -> f64 {
    let mut extreme = Extreme::unbounded(kind);

    if let Some(first) = anchors.first() {
        extreme.offer(first.position.y);
    }

    for segment in anchors.windows(2) {
        let start = segment[0].position;
        let end = &segment[1];

        extreme.offer(end.position.y);

        if let Some(positions) = end.interpolator.extrema_positions() {
            let height = end.position.y - start.y;

            for &t in positions {
                extreme.offer(start.y + height * end.interpolator.interpolate(t));
            }
        }
    }

    extreme.value
}

fn extreme_derivative<I: Interpolator>(anchors: &[Anchor<I>], kind: Extremum) -> f64 {
    let mut extreme = Extreme::unbounded(kind);

    for segment in anchors.windows(2) {
        let difference = segment[1].position - segment[0].position;

        if almost_zero(difference.x) {
            if difference.y != 0.0 {
                extreme.offer(jump(difference.y));
            }
            continue;
        }

        let slope = difference.y / difference.x;
        let interpolator = &segment[1].interpolator;

        match interpolator.as_derivable() {
            Some(derivable) => {
                extreme.offer(derivable.derivative(0.0) * slope);
                extreme.offer(derivable.derivative(1.0) * slope);

                let positions = interpolator
                    .derivative_extrema_positions()
                    .unwrap_or_default();

                for &t in positions {
                    extreme.offer(derivable.derivative(t) * slope);
                }
            }
            None => extreme.offer(slope),
        }
    }

    extreme.value
}

fn extreme_integral<I: Interpolator>(anchors: &[Anchor<I>], kind: Extremum) -> f64 {
    // The area at the first anchor.
    let mut extreme = Extreme::new(kind, 0.0);
    let mut height = 0.0;

    for segment in anchors.windows(2) {
        let start = segment[0].position;
        let interpolator = &segment[1].interpolator;
        let difference = segment[1].position - start;

        if almost_zero(difference.x) {
            continue;
        }

        // Area from the segment start to `t`, given the normalized
        // integral of the interpolator over `[0, t]`.
        let area = |normalized: f64, t: f64| {
            normalized * difference.x * difference.y
                + t * difference.x * start.y
        };
        // The integrand changes sign inside the segment.
        let crosses_zero = difference.y * start.y < 0.0;
        // Where the interpolator reaches the zero line.
        let level = -start.y / difference.y;

        let segment_area = match interpolator.as_integrable() {
            Some(integrable) => {
                let area_at = |t: f64| area(integrable.integral(0.0, t), t);

                extreme.offer(height + area_at(1.0));

                let positions = interpolator
                    .integral_extrema_positions()
                    .unwrap_or_default();

                for &t in positions {
                    extreme.offer(height + area_at(t));
                }

                if crosses_zero {
                    match interpolator.as_invertible() {
                        Some(invertible) => {
                            for t in invertible.inverse(level) {
                                if (0.0..=1.0).contains(&t) {
                                    extreme.offer(height + area_at(t));
                                }
                            }
                        }
                        None => {
                            let t = match kind {
                                Extremum::Min => gradient_descent(
                                    area_at,
                                    0.0,
                                    1.0,
                                    GRADIENT_RATE,
                                ),
                                Extremum::Max => gradient_ascent(
                                    area_at,
                                    0.0,
                                    1.0,
                                    GRADIENT_RATE,
                                ),
                            };
                            extreme.offer(height + area_at(t));
                        }
                    }
                }

                area_at(1.0)
            }
            None => {
                extreme.offer(height + area(0.5, 1.0));

                if crosses_zero && (0.0..=1.0).contains(&level) {
                    extreme.offer(height + area(0.5 * level * level, level));
                }

                area(0.5, 1.0)
            }
        };

        height += segment_area;
    }

    extreme.value
}

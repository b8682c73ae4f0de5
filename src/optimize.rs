//! Gradient based search for local extrema of scalar functions.
//!
//! The curve evaluator uses this when a segment's running integral has an
//! extremum inside the segment but the interpolator can not be inverted in
//! closed form. The search is local: it follows the forward difference
//! gradient from the midpoint of the interval and finds *a* stationary
//! point, not necessarily the global one.
use core::num::NonZeroU16;
use lerp::Lerp;
use num_traits::{Float, FromPrimitive};

const DEFAULT_MAX_STEPS: u16 = 1024;
const DEFAULT_STEP: f64 = 1.0e-6;
const DEFAULT_TOLERANCE: f64 = 1.0e-7;

/// Options for [`gradient_descent_with()`] and [`gradient_ascent_with()`].
#[derive(Clone, Debug, PartialEq)]
pub struct GradientOptions<T> {
    /// Upper bound on the number of steps. Defaults to `1024`.
    pub max_steps: Option<NonZeroU16>,
    /// Step of the forward difference. Defaults to `1e-6`.
    pub step: Option<T>,
    /// The search stops once the gradient is at most this large. Defaults
    /// to `1e-7`.
    pub tolerance: Option<T>,
}

impl<T> Default for GradientOptions<T> {
    fn default() -> Self {
        Self {
            max_steps: None,
            step: None,
            tolerance: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Descent,
    Ascent,
}

/// Looks for a local minimum of `function` in `[lower, upper]`.
///
/// Starts at the midpoint and moves against the gradient, scaled by
/// `rate`, until the gradient vanishes or the step budget runs out. The
/// result is always clamped to `[lower, upper]`; running out of steps is
/// not an error, the last estimate is returned.
///
/// # Examples
/// ```
/// use anchor_curves::gradient_descent;
///
/// let x = gradient_descent(|x: f64| (x - 0.3).powi(2), 0.0, 1.0, 0.1);
///
/// assert!((x - 0.3).abs() < 1e-6);
/// ```
pub fn gradient_descent<T, F>(function: F, lower: T, upper: T, rate: T) -> T
where
    T: Float + FromPrimitive + Lerp<T>,
    F: Fn(T) -> T,
{
    gradient_descent_with(function, lower, upper, rate, &GradientOptions::default())
}

/// Like [`gradient_descent()`], with explicit [`GradientOptions`].
pub fn gradient_descent_with<T, F>(
    function: F,
    lower: T,
    upper: T,
    rate: T,
    options: &GradientOptions<T>,
) -> T
where
    T: Float + FromPrimitive + Lerp<T>,
    F: Fn(T) -> T,
{
    climb(function, lower, upper, rate, Direction::Descent, options)
}

/// Looks for a local maximum of `function` in `[lower, upper]`.
///
/// The mirror image of [`gradient_descent()`].
pub fn gradient_ascent<T, F>(function: F, lower: T, upper: T, rate: T) -> T
where
    T: Float + FromPrimitive + Lerp<T>,
    F: Fn(T) -> T,
{
    gradient_ascent_with(function, lower, upper, rate, &GradientOptions::default())
}

/// Like [`gradient_ascent()`], with explicit [`GradientOptions`].
pub fn gradient_ascent_with<T, F>(
    function: F,
    lower: T,
    upper: T,
    rate: T,
    options: &GradientOptions<T>,
) -> T
where
    T: Float + FromPrimitive + Lerp<T>,
    F: Fn(T) -> T,
{
    climb(function, lower, upper, rate, Direction::Ascent, options)
}

fn climb<T, F>(
    function: F,
    lower: T,
    upper: T,
    rate: T,
    direction: Direction,
    options: &GradientOptions<T>,
) -> T
where
    T: Float + FromPrimitive + Lerp<T>,
    F: Fn(T) -> T,
{
    let max_steps = options
        .max_steps
        .map_or(DEFAULT_MAX_STEPS, NonZeroU16::get);
    let step = options
        .step
        .unwrap_or_else(|| T::from_f64(DEFAULT_STEP).unwrap());
    let tolerance = options
        .tolerance
        .unwrap_or_else(|| T::from_f64(DEFAULT_TOLERANCE).unwrap());

    let mut x = lower.lerp(upper, T::from_f64(0.5).unwrap());

    for _ in 0..max_steps {
        let gradient = (function(x + step) - function(x)) / step;

        if gradient.abs() <= tolerance {
            break;
        }

        x = match direction {
            Direction::Descent => x - gradient * rate,
            Direction::Ascent => x + gradient * rate,
        };
    }

    // Not `Float::clamp()`, a NaN estimate is passed through as is.
    if x < lower {
        lower
    } else if x > upper {
        upper
    } else {
        x
    }
}

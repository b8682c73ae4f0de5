use super::clamp_p;
use crate::interpolator::*;
use core::f64::consts::{PI, TAU};

/// Upper bound on the number of cycles [`Wave::inverse()`] walks.
const MAX_INVERSE_CYCLES: usize = 1000;

/// Number of distinct cycle counts, `0.5` up to `50.5`.
const CYCLE_COUNTS: usize = 51;

/// Where the derivative peaks for each cycle count: both ends plus the
/// first rising and the first falling quarter cycle, `1/(4c)` and
/// `3/(4c)`. The falling one lies past the end for a single half cycle
/// and is pulled back to `1`.
static DERIVATIVE_EXTREMA: [[f64; 4]; CYCLE_COUNTS] = quarter_cycles();

const fn quarter_cycles() -> [[f64; 4]; CYCLE_COUNTS] {
    let mut table = [[0.0; 4]; CYCLE_COUNTS];
    let mut i = 0;
    while i < CYCLE_COUNTS {
        let cycles = i as f64 + 0.5;
        let falling = 0.75 / cycles;
        table[i] = [
            0.0,
            0.25 / cycles,
            if falling < 1.0 { falling } else { 1.0 },
            1.0,
        ];
        i += 1;
    }
    table
}

/// An oscillation with an odd number of half cycles.
///
/// `p ≥ 0` gives a raised cosine, `p < 0` a triangle wave. The cycle count
/// is `round((1 - |p|)·50) + 0.5` (ties to even), so small `|p|` oscillates
/// the most and the extra half cycle ends the wave at `f(1) = 1`.
///
/// `p = 0` is a valid, maximally oscillating wave and has no linear
/// fallback.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Wave {
    p: f64,
}

shape_parameter!(Wave, "Wave");

impl Wave {
    /// Number of cycles over `[0, 1]`.
    #[inline]
    pub fn cycles(&self) -> f64 {
        ((1.0 - clamp_p(self.p).abs()) * 50.0).round_ties_even() + 0.5
    }

    /// `true` if the wave is a triangle rather than a sine.
    #[inline]
    pub fn is_triangle(&self) -> bool {
        self.p < 0.0
    }
}

fn sine_wave(phase: f64) -> f64 {
    (1.0 - phase.cos()) / 2.0
}

fn sine_wave_primitive(t: f64, cycles: f64) -> f64 {
    t / 2.0 - (TAU * cycles * t).sin() / (4.0 * PI * cycles)
}

fn triangle_wave(t: f64, width: f64) -> f64 {
    let m = t % width;
    if m < width / 2.0 {
        2.0 * m / width
    } else {
        2.0 - 2.0 * m / width
    }
}

/// The slope of the triangle wave, i.e. a square wave.
///
/// At a peak the slope of the rising side is returned, so `t = 1`, which
/// always ends a rising half cycle, reports the slope it is reached with.
fn triangle_wave_derivative(t: f64, cycles: f64) -> f64 {
    if (t * cycles).fract() <= 0.5 {
        2.0 * cycles
    } else {
        -2.0 * cycles
    }
}

/// Whole periods contribute half their width each; the partial period is
/// integrated piecewise.
fn triangle_wave_primitive(t: f64, width: f64) -> f64 {
    let m = t % width;
    // Count the periods from the remainder so both agree when `t` sits
    // right at a period boundary.
    let periods = ((t - m) / width).round();
    let partial = if m < width / 2.0 {
        m * m / width
    } else {
        2.0 * m - m * m / width - width / 2.0
    };
    periods * width * 0.5 + partial
}

/// Repeats the two roots of the first cycle until they run past `1`.
fn cycle_roots(mut x1: f64, mut x2: f64, width: f64) -> Vec<f64> {
    let mut roots = vec![x1, x2];
    for _ in 0..MAX_INVERSE_CYCLES {
        x1 += width;
        if x1 > 1.0 {
            break;
        }
        roots.push(x1);

        x2 += width;
        if x2 > 1.0 {
            break;
        }
        roots.push(x2);
    }
    roots
}

impl Interpolator for Wave {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn interpolate(&self, t: f64) -> f64 {
        let cycles = self.cycles();
        if self.is_triangle() {
            triangle_wave(t, 1.0 / cycles)
        } else {
            sine_wave(t * cycles * TAU)
        }
    }

    fn as_derivable(&self) -> Option<&dyn Derivable> {
        Some(self)
    }

    fn as_integrable(&self) -> Option<&dyn Integrable> {
        Some(self)
    }

    fn as_invertible(&self) -> Option<&dyn Invertible> {
        Some(self)
    }

    fn derivative_extrema_positions(&self) -> Option<&[f64]> {
        // `cycles()` is always a whole number plus one half.
        Some(&DERIVATIVE_EXTREMA[self.cycles() as usize])
    }
}

impl Derivable for Wave {
    fn derivative(&self, t: f64) -> f64 {
        let cycles = self.cycles();
        if self.is_triangle() {
            triangle_wave_derivative(t, cycles)
        } else {
            (t * cycles * TAU).sin() / 2.0 * cycles * TAU
        }
    }
}

impl Integrable for Wave {
    fn integral(&self, t1: f64, t2: f64) -> f64 {
        let cycles = self.cycles();
        if self.is_triangle() {
            let width = 1.0 / cycles;
            triangle_wave_primitive(t2, width) - triangle_wave_primitive(t1, width)
        } else {
            sine_wave_primitive(t2, cycles) - sine_wave_primitive(t1, cycles)
        }
    }
}

impl Invertible for Wave {
    /// Both waves only cover `[0, 1]`, so any other `y` has no roots.
    fn inverse(&self, y: f64) -> Vec<f64> {
        if !(0.0..=1.0).contains(&y) {
            return Vec::new();
        }
        let width = 1.0 / self.cycles();
        if self.is_triangle() {
            cycle_roots(width * y / 2.0, width * (2.0 - y) / 2.0, width)
        } else {
            cycle_roots(
                width * (1.0 - 2.0 * y).acos() / TAU,
                width * (2.0 * y - 1.0).acos() / TAU + width / 2.0,
                width,
            )
        }
    }
}

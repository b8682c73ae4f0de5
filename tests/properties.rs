//! Properties every catalog interpolator and every curve must have.

use anchor_curves::prelude::*;
use anchor_curves::EPSILON;
use proptest::prelude::*;

/// Shape parameters away from zero, where the closed forms are well
/// conditioned.
fn shape() -> impl Strategy<Value = f64> {
    prop_oneof![-1.0..=-0.05, 0.05..=1.0]
}

fn catalog_index() -> impl Strategy<Value = usize> {
    0..Interpolation::ALL_NAMES.len()
}

fn interpolation(
    p: impl Strategy<Value = f64>,
) -> impl Strategy<Value = Interpolation> {
    (catalog_index(), p).prop_map(|(index, p)| {
        Interpolation::with_p(Interpolation::ALL_NAMES[index], p).unwrap()
    })
}

/// Two to six anchors with increasing `x`.
fn curve() -> impl Strategy<Value = Vec<Anchor>> {
    prop::collection::vec((0.1..2.0, -5.0..5.0, interpolation(shape())), 2..7)
        .prop_map(|points| {
            let mut x = 0.0;
            points
                .into_iter()
                .map(|(width, y, interpolation)| {
                    let anchor = Anchor::new(x, y, interpolation);
                    x += width;
                    anchor
                })
                .collect()
        })
}

fn is_triangle(interpolation: &Interpolation) -> bool {
    matches!(interpolation, Interpolation::Wave(wave) if wave.is_triangle())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ends_are_fixed(interpolation in interpolation(-2.0..=2.0)) {
        prop_assert!(interpolation.interpolate(0.0).abs() <= 1e-9);
        prop_assert!((interpolation.interpolate(1.0) - 1.0).abs() <= 1e-9);
    }

    #[test]
    fn derivative_matches_central_difference(
        interpolation in interpolation(shape()),
        t in prop_oneof![0.02..0.48, 0.52..0.98],
    ) {
        // The triangle wave has kinks everywhere.
        prop_assume!(!is_triangle(&interpolation));

        let h = 1.0e-6;
        let numeric = (interpolation.interpolate(t + h)
            - interpolation.interpolate(t - h))
            / (2.0 * h);
        let exact = interpolation.as_derivable().unwrap().derivative(t);

        prop_assert!(
            (numeric - exact).abs() <= 1.0e-4 * exact.abs().max(1.0),
            "{}: {} vs {}", interpolation, numeric, exact
        );
    }

    #[test]
    fn integral_matches_trapezoid_rule(interpolation in interpolation(shape())) {
        const STEPS: usize = 40_000;

        let trapezoid = (0..STEPS)
            .map(|i| {
                let t0 = i as f64 / STEPS as f64;
                let t1 = (i + 1) as f64 / STEPS as f64;
                let (y0, y1) =
                    (interpolation.interpolate(t0), interpolation.interpolate(t1));
                0.5 * (y0 + y1)
            })
            .sum::<f64>()
            / STEPS as f64;
        let exact = interpolation.as_integrable().unwrap().integral(0.0, 1.0);

        prop_assert!(
            (trapezoid - exact).abs() <= 1.0e-6,
            "{}: {} vs {}", interpolation, trapezoid, exact
        );
    }

    #[test]
    fn near_zero_shape_is_linear(
        index in catalog_index(),
        p in -0.5 * EPSILON..0.5 * EPSILON,
        t in 0.0..=1.0,
    ) {
        let name = Interpolation::ALL_NAMES[index];
        // Neither has a singularity at `p = 0`.
        prop_assume!(name != Parabola::NAME && name != Wave::NAME);

        let interpolation = Interpolation::with_p(name, p).unwrap();

        prop_assert_eq!(interpolation.interpolate(t), t);
        prop_assert_eq!(
            interpolation.as_derivable().unwrap().derivative(t),
            linear_derivative(t)
        );
        prop_assert_eq!(
            interpolation.as_integrable().unwrap().integral(0.0, t),
            linear_integral(0.0, t)
        );
    }

    #[test]
    fn integral_is_additive(
        curve in curve(),
        mut splits in prop::array::uniform3(0.0..1.0),
    ) {
        splits.sort_by(f64::total_cmp);
        let end = curve[curve.len() - 1].position.x;
        let [a, b, c] = splits.map(|s| s * end);

        let whole = curve.integral(a, c);
        let parts = curve.integral(a, b) + curve.integral(b, c);

        prop_assert!((whole - parts).abs() <= 1.0e-5, "{} vs {}", whole, parts);
    }

    #[test]
    fn extrema_bound_the_curve(curve in curve(), s in 0.0..1.0) {
        let x = s * curve[curve.len() - 1].position.x;
        let value = curve.value(x);

        prop_assert!(curve.min_value() - 1.0e-9 <= value);
        prop_assert!(value <= curve.max_value() + 1.0e-9);
        prop_assert!(curve.min_integral() <= 0.0);
        prop_assert!(curve.max_integral() >= 0.0);
    }

    #[test]
    fn wave_inverse_recovers_t(p in -1.0..=1.0, t in 0.0..0.999) {
        let wave = Wave::new(p);
        let y = wave.interpolate(t);
        let roots = wave.inverse(y);

        prop_assert!(
            roots.iter().any(|root| (root - t).abs() <= 1.0e-6),
            "no root near {} for y = {} (p = {})", t, y, p
        );
        for root in roots.iter().filter(|root| (0.0..=1.0).contains(*root)) {
            prop_assert!((wave.interpolate(*root) - y).abs() <= 1.0e-9);
        }
    }
}

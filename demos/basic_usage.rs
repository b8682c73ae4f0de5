//! Basic usage example for anchor-curves

use anchor_curves::prelude::*;

fn main() -> CurveResult<()> {
    println!("=== Basic Curve Evaluation Example ===\n");

    // Example 1: Building a curve from anchors
    let mut curve: AnchorSequence = AnchorSequence::new(vec![
        Anchor::new(0.0, 0.0, Linear::default()),
        Anchor::new(1.0, 1.0, Parabola::new(0.5)),
        Anchor::new(2.0, 0.25, DoubleCurve::new(0.7)),
        Anchor::new(4.0, -0.5, HalfSine::new(-0.4)),
    ])?;

    println!("Value and slope:");
    for x in [0.0, 0.5, 1.0, 1.5, 2.0, 3.0, 4.0] {
        println!(
            "  value({:.1}) = {:7.4}   derivative({:.1}) = {:7.4}",
            x,
            curve.value(x),
            x,
            curve.derivative(x)
        );
    }

    // Example 2: Areas
    println!("\nIntegrals:");
    println!("  integral(0, 4)   = {:.4}", curve.integral(0.0, 4.0));
    println!("  integral(1, 3)   = {:.4}", curve.integral(1.0, 3.0));
    println!("  integral(3, 1)   = {:.4}", curve.integral(3.0, 1.0));

    // Example 3: Global extrema, e.g. to fit an editor's view
    println!("\nExtrema:");
    println!(
        "  value      [{:.4}, {:.4}]",
        curve.min_value(),
        curve.max_value()
    );
    println!(
        "  derivative [{:.4}, {:.4}]",
        curve.min_derivative(),
        curve.max_derivative()
    );
    println!(
        "  integral   [{:.4}, {:.4}]",
        curve.min_integral(),
        curve.max_integral()
    );

    // Example 4: Tweaking shape parameters in place
    println!("\nSwapping every interpolator for a wave:");
    for interpolation in curve.interpolators_mut() {
        *interpolation = Interpolation::from(Wave::new(0.9));
    }
    println!("  value(3.0) = {:.4}", curve.value(3.0));
    println!(
        "  integral   [{:.4}, {:.4}]",
        curve.min_integral(),
        curve.max_integral()
    );

    // Example 5: Picking interpolators by name
    println!("\nCatalog:");
    for name in Interpolation::ALL_NAMES {
        let interpolation: Interpolation = name.parse()?;
        println!(
            "  {:<16} f(0.25) = {:.4}",
            interpolation,
            Interpolation::with_p(name, 0.6)?.interpolate(0.25)
        );
        debug_assert_eq!(interpolation.p(), 0.0);
    }

    // Example 6: Error handling
    println!("\nError handling:");
    match curve.push(Anchor::new(3.0, 0.0, Linear::default())) {
        Ok(()) => println!("  Pushed"),
        Err(e) => println!("  Error: {}", e),
    }
    match "Triple curve".parse::<Interpolation>() {
        Ok(interpolation) => println!("  Parsed {}", interpolation),
        Err(e) => println!("  Error: {}", e),
    }

    Ok(())
}

//! Behavioural properties of the root finder and the quadrature rules.
#![allow(unused_results, reason = "Unnecessary for tests")]

use std::cell::Cell;

use algohub_core::prelude::*;
use approx::assert_abs_diff_eq;
use proptest::prelude::*;

fn square_error<I: Integration>(rule: &I, n: usize) -> f64 {
    (rule.calculate(|x: f64| x * x, 0.0, 1.0, n).unwrap() - 1.0 / 3.0).abs()
}

#[test]
fn root_of_shifted_line() {
    assert_eq!(find_root(|x: f64| x - 5.0, 0.0, 10.0).unwrap(), 5.0);
}

#[test]
fn iteration_cap_is_exact() {
    let evaluations = Cell::new(0);
    let f = |x: f64| {
        evaluations.set(evaluations.get() + 1);
        x * x * x - x - 2.0
    };
    let config = BisectionConfig::new(1e-15, 5).unwrap();
    let est = bisect(f, 1.0, 2.0, &config).unwrap();
    assert_eq!(est.iterations, 5);
    assert_eq!(est.termination, Termination::IterationLimit);
    // Two endpoint evaluations plus one per halving.
    assert_eq!(evaluations.get(), 7);
    assert_abs_diff_eq!(est.upper - est.lower, 1.0 / 32.0);
}

#[test]
fn trapezoid_exact_on_lines() {
    for n in [1, 2, 3, 7, 100, 1000] {
        let area = TrapezoidalIntegration
            .calculate(|x: f64| 2.0 * x + 1.0, 0.0, 4.0, n)
            .unwrap();
        assert_abs_diff_eq!(area, 20.0, epsilon = 1e-10);
    }
}

#[test]
fn midpoint_error_strictly_decreases() {
    let mut previous = f64::INFINITY;
    for n in 1..=1000 {
        let err = square_error(&RectangularIntegration, n);
        assert!(err < previous, "error did not shrink at n={n}");
        previous = err;
    }
}

#[test]
fn rules_agree_as_panels_grow() {
    let f = |x: f64| x.sin() * (-x).exp();
    let exact = 0.5 * (1.0 + (-std::f64::consts::PI).exp());
    let mut previous_gap = f64::INFINITY;
    for n in [4, 16, 64, 256, 1024] {
        let trap = TrapezoidalIntegration
            .calculate(f, 0.0, std::f64::consts::PI, n)
            .unwrap();
        let mid = RectangularIntegration
            .calculate(f, 0.0, std::f64::consts::PI, n)
            .unwrap();
        let gap = (trap - mid).abs();
        assert!(gap < previous_gap, "gap did not shrink at n={n}");
        previous_gap = gap;

        // Midpoint error is roughly half of the trapezoid error, with opposite sign.
        assert!((mid - exact).abs() < (trap - exact).abs());
    }
    assert!(previous_gap < 1e-5);
}

#[test]
fn zero_panels_rejected() {
    let f = |x: f64| x;
    assert_eq!(
        TrapezoidalIntegration.calculate(f, 0.0, 1.0, 0),
        Err(NumericError::InvalidSubdivision)
    );
    assert_eq!(
        RectangularIntegration.calculate(f, 0.0, 1.0, 0),
        Err(NumericError::InvalidSubdivision)
    );
}

proptest! {
    #[test]
    fn bound_order_does_not_matter(
        root in -50.0_f64..50.0,
        slope in prop_oneof![-10.0_f64..-0.1, 0.1_f64..10.0],
        below in 0.5_f64..100.0,
        above in 0.5_f64..100.0,
    ) {
        let f = |x: f64| slope * (x - root);
        let lo = root - below;
        let hi = root + above;
        let forward = find_root(f, lo, hi).unwrap();
        let backward = find_root(f, hi, lo).unwrap();
        prop_assert_eq!(forward, backward);
        prop_assert!((forward - root).abs() < 1e-3);
    }

    #[test]
    fn same_sign_is_rejected_without_iterating(
        offset in 0.1_f64..100.0,
        a in -100.0_f64..100.0,
        b in -100.0_f64..100.0,
    ) {
        let evaluations = Cell::new(0);
        let f = |x: f64| {
            evaluations.set(evaluations.get() + 1);
            x * x + offset
        };
        prop_assert_eq!(find_root(f, a, b), Err(NumericError::InvalidBracket));
        prop_assert_eq!(evaluations.get(), 2);
    }

    #[test]
    fn rules_are_linear_in_the_integrand(
        scale in -5.0_f64..5.0,
        shift in -5.0_f64..5.0,
        n in 1_usize..200,
    ) {
        let base = |x: f64| x.cos();
        for rule in [Quadrature::Trapezoidal, Quadrature::Rectangular] {
            let plain = rule.calculate(base, 0.0, 2.0, n).unwrap();
            let scaled = rule.calculate(|x: f64| scale * base(x) + shift, 0.0, 2.0, n).unwrap();
            prop_assert!((scaled - (scale * plain + 2.0 * shift)).abs() < 1e-9);
        }
    }
}

use approx::assert_abs_diff_eq;
use periodic_spline_editor::{evaluate, Knot, LinearSolveError, PeriodicSpline, SplineError};

const WIDTH: f64 = 800.0;

fn knots() -> Vec<Knot> {
    vec![
        Knot::new(420.0, 140.0),
        Knot::new(15.0, 130.0),
        Knot::new(260.0, 175.0),
        Knot::new(610.0, 120.0),
        Knot::new(120.0, 160.0),
        Knot::new(760.0, 150.0),
    ]
}

fn slope_left(spline: &PeriodicSpline, x: f64, eps: f64) -> f64 {
    (spline.evaluate(x) - spline.evaluate(x - eps)) / eps
}

fn slope_right(spline: &PeriodicSpline, x: f64, eps: f64) -> f64 {
    (spline.evaluate(x + eps) - spline.evaluate(x)) / eps
}

#[test]
fn test_curve_is_periodic() {
    let spline = PeriodicSpline::fit(&knots(), WIDTH).expect("lösbar");
    for i in 0..200 {
        let x = i as f64 * 13.3 - 900.0;
        assert_abs_diff_eq!(spline.evaluate(x), spline.evaluate(x + WIDTH), epsilon = 1e-9);
        assert_abs_diff_eq!(spline.evaluate(x), spline.evaluate(x - 2.0 * WIDTH), epsilon = 1e-9);
    }
}

#[test]
fn test_curve_interpolates_every_knot() {
    let knots = knots();
    let spline = PeriodicSpline::fit(&knots, WIDTH).expect("lösbar");
    for knot in &knots {
        assert_abs_diff_eq!(spline.evaluate(knot.x), knot.y, epsilon = 1e-9);
    }
}

#[test]
fn test_first_derivative_is_continuous_at_every_knot() {
    let spline = PeriodicSpline::fit(&knots(), WIDTH).expect("lösbar");
    let eps = 1e-5;
    for knot in spline.knots() {
        let left = slope_left(&spline, knot.x, eps);
        let right = slope_right(&spline, knot.x, eps);
        assert_abs_diff_eq!(left, right, epsilon = 1e-3);
    }
}

#[test]
fn test_first_derivative_is_continuous_across_wrap() {
    let spline = PeriodicSpline::fit(&knots(), WIDTH).expect("lösbar");
    let eps = 1e-5;
    assert_abs_diff_eq!(
        slope_left(&spline, 0.0, eps),
        slope_right(&spline, 0.0, eps),
        epsilon = 1e-3
    );
    assert_abs_diff_eq!(spline.evaluate(WIDTH - 1e-7), spline.evaluate(0.0), epsilon = 1e-4);
}

#[test]
fn test_derivatives_match_slopes_of_curve() {
    let spline = PeriodicSpline::fit(&knots(), WIDTH).expect("lösbar");
    let eps = 1e-5;
    for (knot, k) in spline.knots().iter().zip(spline.derivatives()) {
        let central = (spline.evaluate(knot.x + eps) - spline.evaluate(knot.x - eps)) / (2.0 * eps);
        assert_abs_diff_eq!(central, *k, epsilon = 1e-4);
    }
}

#[test]
fn test_duplicate_x_keeps_first_knot() {
    let knots = [
        Knot::new(100.0, 10.0),
        Knot::new(400.0, 90.0),
        Knot::new(100.0, 60.0),
    ];
    let spline = PeriodicSpline::fit(&knots, WIDTH).expect("lösbar");
    assert_eq!(spline.knot_count(), 2);
    assert_abs_diff_eq!(spline.evaluate(100.0), 10.0, epsilon = 1e-12);
}

#[test]
fn test_single_knot_is_insufficient_without_panic() {
    let single = [Knot::new(10.0, 10.0)];
    assert_eq!(
        evaluate(&single, WIDTH, 5.0),
        Err(SplineError::InsufficientKnots { found: 1 })
    );
}

#[test]
fn test_knot_order_does_not_change_curve() {
    let mut reversed = knots();
    reversed.reverse();
    let a = PeriodicSpline::fit(&knots(), WIDTH).expect("lösbar");
    let b = PeriodicSpline::fit(&reversed, WIDTH).expect("lösbar");
    for i in 0..80 {
        let x = i as f64 * 10.0;
        assert_abs_diff_eq!(a.evaluate(x), b.evaluate(x), epsilon = 1e-9);
    }
}

#[test]
fn test_many_knots_stay_finite() {
    let knots: Vec<Knot> = (0..200)
        .map(|i| Knot::new(i as f64 * 4.0, 150.0 + 30.0 * (i as f64 * 0.3).sin()))
        .collect();
    let spline = PeriodicSpline::fit(&knots, WIDTH).expect("lösbar");
    let ys = spline.evaluate_batch(&(0..800).map(f64::from).collect::<Vec<_>>());
    assert!(ys.iter().all(|y| y.is_finite()));
}

/// Zwei Knots im Abstand 1e-13: x verschieden, aber numerisch nicht trennbar.
fn near_coincident_knots() -> Vec<Knot> {
    vec![
        Knot::new(10.0, 20.0),
        Knot::new(10.0 + 1e-13, 20.0),
        Knot::new(40.0, 80.0),
        Knot::new(70.0, 30.0),
    ]
}

#[test]
fn test_near_coincident_knots_fail_with_solver_error() {
    let knots = near_coincident_knots();
    assert!(matches!(
        PeriodicSpline::fit(&knots, 100.0),
        Err(SplineError::InternalSolver(LinearSolveError::Singular { .. }))
    ));
    assert!(matches!(
        evaluate(&knots, 100.0, 25.0),
        Err(SplineError::InternalSolver(_))
    ));
}

#[test]
fn test_small_gap_still_solves() {
    let mut knots = near_coincident_knots();
    knots[1] = Knot::new(10.0 + 1e-6, 20.0);
    let value = evaluate(&knots, 100.0, 25.0).expect("lösbar");
    assert!(value.is_finite());
}

#[test]
fn test_knot_beyond_width_is_hit_at_folded_position() {
    let knots = [
        Knot::new(10.0, 40.0),
        Knot::new(130.0, 90.0),
        Knot::new(60.0, 20.0),
    ];
    let spline = PeriodicSpline::fit(&knots, 100.0).expect("lösbar");
    assert_abs_diff_eq!(spline.evaluate(130.0), 90.0, epsilon = 1e-9);
    assert_abs_diff_eq!(spline.evaluate(30.0), 90.0, epsilon = 1e-9);
}

#[test]
fn test_non_finite_x_gives_nan() {
    let spline = PeriodicSpline::fit(&knots(), WIDTH).expect("lösbar");
    assert!(spline.evaluate(f64::NAN).is_nan());
    assert!(spline.evaluate(f64::INFINITY).is_nan());
}

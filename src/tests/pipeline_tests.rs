//! End-to-end tests of the plot facade
//!
//! Exercises the full pipeline the presentation layer sees: three raw
//! strings in, plot data or a user-facing error out.

use crate::{DEFAULT_SAMPLE_COUNT, DomainErrorPolicy, Plot, UserError, compute_plot};

#[test]
fn test_sine_plot_tracks_the_curve() {
    let data = compute_plot("sin(x)", "0", "6.28").unwrap();

    assert_eq!(data.points.len(), DEFAULT_SAMPLE_COUNT);
    assert_eq!(data.formula, "sin(x)");

    // Endpoints span the requested domain exactly
    assert_eq!(data.points.first().unwrap().0, 0.0);
    assert_eq!(data.points.last().unwrap().0, 6.28);

    // y = sin(x) at x = 0
    assert!(data.points[0].1.abs() < 1e-12);

    // Near x = pi/2 the curve is close to 1
    let (_, y_near_peak) = data
        .points
        .iter()
        .min_by(|a, b| {
            let da = (a.0 - std::f64::consts::FRAC_PI_2).abs();
            let db = (b.0 - std::f64::consts::FRAC_PI_2).abs();
            da.partial_cmp(&db).unwrap()
        })
        .unwrap();
    assert!((y_near_peak - 1.0).abs() < 0.01);

    // Every y lies on the sine of its x
    for &(x, y) in &data.points {
        assert!((y - x.sin()).abs() < 1e-12);
    }
}

#[test]
fn test_empty_fields_checked_first() {
    assert_eq!(compute_plot("", "0", "1"), Err(UserError::EmptyFields));
    assert_eq!(compute_plot("x", "", "1"), Err(UserError::EmptyFields));
    assert_eq!(compute_plot("x", "0", ""), Err(UserError::EmptyFields));
    assert_eq!(compute_plot("  ", "0", "1"), Err(UserError::EmptyFields));
    // Empty fields win over other errors
    assert_eq!(compute_plot("", "abc", "1"), Err(UserError::EmptyFields));
}

#[test]
fn test_limits_must_be_numeric() {
    assert_eq!(
        compute_plot("x", "abc", "1"),
        Err(UserError::LimitsNotNumeric)
    );
    assert_eq!(
        compute_plot("x", "0", "2,5"),
        Err(UserError::LimitsNotNumeric)
    );
    // Non-numeric limits are reported before formula errors
    assert_eq!(
        compute_plot("foo(x)", "abc", "1"),
        Err(UserError::LimitsNotNumeric)
    );
}

#[test]
fn test_limits_must_be_ordered() {
    assert_eq!(compute_plot("x", "5", "1"), Err(UserError::InvalidLimits));
    assert_eq!(compute_plot("x", "1", "1"), Err(UserError::InvalidLimits));
    assert!(compute_plot("x", "-5", "5").is_ok());
}

#[test]
fn test_unknown_identifier_is_invalid_function() {
    let err = compute_plot("foo(x)", "0", "1").unwrap_err();
    match err {
        UserError::InvalidFunction { detail } => {
            assert!(detail.contains("foo"), "detail was: {}", detail);
        }
        other => panic!("expected InvalidFunction, got {:?}", other),
    }
}

#[test]
fn test_syntax_error_is_invalid_function() {
    assert!(matches!(
        compute_plot("2 +* x", "0", "1").unwrap_err(),
        UserError::InvalidFunction { .. }
    ));
    assert!(matches!(
        compute_plot("sin x", "0", "1").unwrap_err(),
        UserError::InvalidFunction { .. }
    ));
    assert!(matches!(
        compute_plot("(x + 1", "0", "1").unwrap_err(),
        UserError::InvalidFunction { .. }
    ));
}

#[test]
fn test_domain_error_aborts_by_default() {
    // 50 samples over [-1, 1] skip x = 0, so pick a range that hits it
    let err = compute_plot("1/x", "0", "1").unwrap_err();
    match err {
        UserError::InvalidFunction { detail } => {
            assert!(detail.contains("division by zero"), "detail: {}", detail);
        }
        other => panic!("expected InvalidFunction, got {:?}", other),
    }
}

#[test]
fn test_omit_policy_keeps_partial_plot() {
    let data = Plot::new()
        .samples(11)
        .on_domain_error(DomainErrorPolicy::OmitFailures)
        .compute("sqrt(x)", "-1", "1")
        .unwrap();

    // Samples at negative x are dropped, non-negative ones survive
    assert!(!data.points.is_empty());
    assert!(data.points.iter().all(|&(x, _)| x >= 0.0));
    for &(x, y) in &data.points {
        assert!((y - x.sqrt()).abs() < 1e-12);
    }
}

#[test]
fn test_formula_is_normalized_for_display() {
    let data = compute_plot("E^X", "0", "1").unwrap();
    assert_eq!(data.formula, "exp(x)");

    let data = compute_plot("2*x+1", "0", "1").unwrap();
    assert_eq!(data.formula, "2 * x + 1");
}

#[test]
fn test_whitespace_tolerated_everywhere() {
    let data = compute_plot("  x ^ 2 ", " -1 ", " 1 ").unwrap();
    assert_eq!(data.points.len(), DEFAULT_SAMPLE_COUNT);
    assert_eq!(data.formula, "x^2");
}

#[test]
fn test_constant_formula_plots_flat_line() {
    let data = compute_plot("pi", "0", "1").unwrap();
    for &(_, y) in &data.points {
        assert_eq!(y, std::f64::consts::PI);
    }
}

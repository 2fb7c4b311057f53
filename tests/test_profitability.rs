//! Profitability calculator: reference values, guarded edge cases and
//! invariants over the input space.

use nichescout::domain::error::DomainError;
use nichescout::domain::values::profitability::{compute, compute_default};
use proptest::prelude::*;

#[test]
fn test_reference_example_ultra_pro() {
    let m = compute(10.50, 2.00, 3.0).unwrap().rounded();
    assert_eq!(m.total_cost, 12.50);
    assert_eq!(m.target_selling_price, 37.50);
    assert_eq!(m.projected_profit, 25.00);
    assert_eq!(m.margin_percent, 66.67);
}

#[test]
fn test_default_markup_matches_explicit_three() {
    let a = compute_default(4.20, 1.50).unwrap();
    let b = compute(4.20, 1.50, 3.0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_zero_costs_give_all_zero_metrics() {
    for markup in [0.5, 1.0, 3.0, 10.0] {
        let m = compute(0.0, 0.0, markup).unwrap();
        assert_eq!(m.total_cost, 0.0);
        assert_eq!(m.target_selling_price, 0.0);
        assert_eq!(m.projected_profit, 0.0);
        assert_eq!(m.margin_percent, 0.0);
        assert!(!m.margin_percent.is_nan());
    }
}

#[test]
fn test_negative_shipping_names_field() {
    let err = compute(10.0, -1.0, 3.0).unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput { .. }));
    assert_eq!(err.field(), Some("shipping_cost"));
}

#[test]
fn test_negative_price_names_field() {
    let err = compute(-0.01, 1.0, 3.0).unwrap_err();
    assert_eq!(err.field(), Some("unit_price"));
}

#[test]
fn test_non_positive_markup_rejected() {
    assert_eq!(compute(1.0, 1.0, 0.0).unwrap_err().field(), Some("markup_factor"));
    assert_eq!(compute(1.0, 1.0, -3.0).unwrap_err().field(), Some("markup_factor"));
}

#[test]
fn test_nan_inputs_rejected() {
    assert_eq!(compute(f64::NAN, 1.0, 3.0).unwrap_err().field(), Some("unit_price"));
    assert_eq!(compute(1.0, f64::INFINITY, 3.0).unwrap_err().field(), Some("shipping_cost"));
    assert_eq!(compute(1.0, 1.0, f64::NAN).unwrap_err().field(), Some("markup_factor"));
}

#[test]
fn test_overflowing_total_cost_rejected() {
    let err = compute(1e308, 1e308, 3.0).unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput { .. }));
    assert_eq!(err.field(), Some("unit_price"));
}

#[test]
fn test_overflowing_target_price_rejected() {
    let err = compute(10.0, 0.0, 1e308).unwrap_err();
    assert_eq!(err.field(), Some("markup_factor"));
}

#[test]
fn test_markup_below_one_yields_loss() {
    let m = compute(10.0, 0.0, 0.5).unwrap();
    assert_eq!(m.target_selling_price, 5.0);
    assert_eq!(m.projected_profit, -5.0);
    assert_eq!(m.margin_percent, -100.0);
}

#[test]
fn test_margin_independent_of_price_under_fixed_markup() {
    let cheap = compute(0.99, 0.01, 3.0).unwrap().rounded();
    let pricey = compute(999.0, 1.0, 3.0).unwrap().rounded();
    assert_eq!(cheap.margin_percent, 66.67);
    assert_eq!(pricey.margin_percent, 66.67);
}

proptest! {
    #[test]
    fn prop_price_covers_cost_and_margin_bounded(
        price in 0.0f64..100_000.0,
        shipping in 0.0f64..10_000.0,
        markup in 1.0001f64..100.0,
    ) {
        let m = compute(price, shipping, markup).unwrap();
        prop_assert!(m.target_selling_price >= m.total_cost);
        prop_assert!(m.margin_percent >= 0.0);
        prop_assert!(m.margin_percent < 100.0);
    }

    #[test]
    fn prop_profit_is_total_times_markup_minus_one(
        price in 0.0f64..10_000.0,
        shipping in 0.0f64..1_000.0,
        markup in 0.1f64..20.0,
    ) {
        let m = compute(price, shipping, markup).unwrap();
        let expected = m.total_cost * (markup - 1.0);
        prop_assert!((m.projected_profit - expected).abs() <= 1e-6 * m.total_cost.max(1.0) * markup);
    }

    #[test]
    fn prop_negative_shipping_always_rejected(
        price in 0.0f64..1_000.0,
        shipping in -1_000.0f64..-0.0001,
    ) {
        let err = compute(price, shipping, 3.0).unwrap_err();
        prop_assert_eq!(err.field(), Some("shipping_cost"));
    }
}

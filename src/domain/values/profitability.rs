//! Profitability under a fixed markup rule.
//!
//! Given a unit cost and a shipping cost, the target selling price is the
//! total landed cost multiplied by the markup factor:
//!
//! - `total_cost = unit_price + shipping_cost`
//! - `target_selling_price = total_cost × markup`
//! - `projected_profit = target_selling_price − total_cost`
//! - `margin_percent = profit / target_selling_price × 100` (0 when the price is 0)
//!
//! Each field is derived from the unrounded value of the previous one.
//! Rounding to cents happens once, at the display boundary ([`ProfitabilityMetrics::rounded`]).

use crate::domain::error::DomainError;
use crate::domain::values::markup::DEFAULT_MARKUP_FACTOR;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilityMetrics {
    pub total_cost: f64,
    pub target_selling_price: f64,
    pub projected_profit: f64,
    /// Profit as a share of the selling price.
    pub margin_percent: f64,
    /// Profit as a share of the total cost.
    pub roi_percent: f64,
}

impl ProfitabilityMetrics {
    /// Copy with every field rounded to 2 decimal places.
    pub fn rounded(&self) -> Self {
        Self {
            total_cost: round2(self.total_cost),
            target_selling_price: round2(self.target_selling_price),
            projected_profit: round2(self.projected_profit),
            margin_percent: round2(self.margin_percent),
            roi_percent: round2(self.roi_percent),
        }
    }
}

/// Round half away from zero to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute profitability for one product.
///
/// Fails with [`DomainError::InvalidInput`] naming the offending field when a
/// cost is negative or not finite, or when the markup is not strictly positive.
pub fn compute(
    unit_price: f64,
    shipping_cost: f64,
    markup_factor: f64,
) -> Result<ProfitabilityMetrics, DomainError> {
    ensure_cost("unit_price", unit_price)?;
    ensure_cost("shipping_cost", shipping_cost)?;
    if !markup_factor.is_finite() || markup_factor <= 0.0 {
        return Err(DomainError::invalid(
            "markup_factor",
            format!("must be a finite number greater than 0, got {markup_factor}"),
        ));
    }

    let total_cost = unit_price + shipping_cost;
    if !total_cost.is_finite() {
        return Err(DomainError::invalid(
            "unit_price",
            format!("total cost overflows ({unit_price} + {shipping_cost})"),
        ));
    }
    let target_selling_price = total_cost * markup_factor;
    if !target_selling_price.is_finite() {
        return Err(DomainError::invalid(
            "markup_factor",
            format!("target price overflows ({total_cost} x {markup_factor})"),
        ));
    }
    let projected_profit = target_selling_price - total_cost;
    // Guarding on the price also covers a positive cost that underflows after markup.
    let margin_percent = if target_selling_price > 0.0 {
        projected_profit / target_selling_price * 100.0
    } else {
        0.0
    };
    let roi_percent = if total_cost > 0.0 {
        projected_profit / total_cost * 100.0
    } else {
        0.0
    };

    Ok(ProfitabilityMetrics {
        total_cost,
        target_selling_price,
        projected_profit,
        margin_percent,
        roi_percent,
    })
}

/// [`compute`] with the default 3× markup.
pub fn compute_default(
    unit_price: f64,
    shipping_cost: f64,
) -> Result<ProfitabilityMetrics, DomainError> {
    compute(unit_price, shipping_cost, DEFAULT_MARKUP_FACTOR)
}

fn ensure_cost(field: &str, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() {
        return Err(DomainError::invalid(field, format!("must be a finite number, got {value}")));
    }
    if value < 0.0 {
        return Err(DomainError::invalid(field, format!("must not be negative, got {value}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_half_away_from_zero() {
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(12.5), 12.5);
    }

    #[test]
    fn test_raw_values_are_unrounded() {
        let m = compute(1.0, 0.0, 3.0).unwrap();
        assert!((m.margin_percent - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(m.rounded().margin_percent, 66.67);
    }

    #[test]
    fn test_roi_under_default_markup() {
        let m = compute_default(4.20, 1.50).unwrap().rounded();
        assert_eq!(m.roi_percent, 200.0);
    }
}

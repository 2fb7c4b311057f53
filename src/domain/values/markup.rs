use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Multiplier applied to total cost to derive the target selling price.
pub const DEFAULT_MARKUP_FACTOR: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct MarkupFactor(f64);

impl MarkupFactor {
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(DomainError::invalid(
                "markup_factor",
                format!("must be a finite number greater than 0, got {value}"),
            ));
        }
        Ok(MarkupFactor(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for MarkupFactor {
    fn default() -> Self {
        MarkupFactor(DEFAULT_MARKUP_FACTOR)
    }
}

impl TryFrom<f64> for MarkupFactor {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        MarkupFactor::new(value)
    }
}

impl From<MarkupFactor> for f64 {
    fn from(m: MarkupFactor) -> Self {
        m.0
    }
}

impl fmt::Display for MarkupFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

impl FromStr for MarkupFactor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches(['x', 'X']);
        let value: f64 = trimmed
            .parse()
            .map_err(|_| format!("Invalid markup factor: '{s}'. Use a number such as 3 or 2.5x"))?;
        MarkupFactor::new(value).map_err(|e| e.to_string())
    }
}

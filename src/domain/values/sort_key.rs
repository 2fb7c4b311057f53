use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Optional ordering applied to a ranked batch.
///
/// Without one the ranker keeps the source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Margin percent, highest first
    Margin,
    /// Projected profit, highest first
    Profit,
    /// Supplier rating, highest first
    Rating,
    /// Total cost, cheapest first
    Cost,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Margin => write!(f, "margin"),
            Self::Profit => write!(f, "profit"),
            Self::Rating => write!(f, "rating"),
            Self::Cost => write!(f, "cost"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "margin" => Ok(Self::Margin),
            "profit" => Ok(Self::Profit),
            "rating" => Ok(Self::Rating),
            "cost" => Ok(Self::Cost),
            _ => Err(format!(
                "Invalid sort key: '{}'. Use 'margin', 'profit', 'rating' or 'cost'",
                s
            )),
        }
    }
}

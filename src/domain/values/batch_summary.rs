use crate::domain::entities::ranked_product::RankedProduct;
use crate::domain::values::profitability::round2;
use serde::Serialize;

/// Aggregate view over one ranked batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub count: usize,
    pub average_margin_percent: f64,
    pub total_projected_profit: f64,
    /// Product with the highest projected profit; the earliest wins ties.
    pub best_profit_id: Option<String>,
}

impl BatchSummary {
    pub fn from_ranked(products: &[RankedProduct]) -> Self {
        if products.is_empty() {
            return Self {
                count: 0,
                average_margin_percent: 0.0,
                total_projected_profit: 0.0,
                best_profit_id: None,
            };
        }

        let count = products.len();
        let margin_sum: f64 = products.iter().map(|p| p.metrics.margin_percent).sum();
        let total_profit: f64 = products.iter().map(|p| p.metrics.projected_profit).sum();

        let mut best: Option<&RankedProduct> = None;
        for p in products {
            match best {
                Some(b) if b.metrics.projected_profit >= p.metrics.projected_profit => {}
                _ => best = Some(p),
            }
        }

        Self {
            count,
            average_margin_percent: round2(margin_sum / count as f64),
            total_projected_profit: round2(total_profit),
            best_profit_id: best.map(|p| p.id().to_string()),
        }
    }
}

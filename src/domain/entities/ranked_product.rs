use crate::domain::entities::candidate_product::CandidateProduct;
use crate::domain::values::profitability::ProfitabilityMetrics;
use crate::domain::values::source_label::SourceLabel;
use serde::{Deserialize, Serialize};

/// A candidate annotated with its (display-rounded) profitability and origin.
///
/// Serializes flat, matching the shape consumers of the analyze endpoint
/// expect: product fields, metric fields and `source` side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedProduct {
    #[serde(flatten)]
    pub product: CandidateProduct,
    #[serde(flatten)]
    pub metrics: ProfitabilityMetrics,
    pub source: SourceLabel,
}

impl RankedProduct {
    pub fn id(&self) -> &str {
        &self.product.id
    }

    pub fn niche_tag(&self) -> &str {
        &self.product.niche_tag
    }

    pub fn margin_percent(&self) -> f64 {
        self.metrics.margin_percent
    }
}

//! Ranking: score every candidate in a batch and annotate it.
//!
//! By default the output mirrors the input one-to-one and in order. Sorting,
//! filtering by margin and truncation are all opt-in through [`RankerConfig`].

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::domain::entities::candidate_product::CandidateProduct;
use crate::domain::entities::ranked_product::RankedProduct;
use crate::domain::error::DomainError;
use crate::domain::values::markup::MarkupFactor;
use crate::domain::values::profitability::{compute, ProfitabilityMetrics};
use crate::domain::values::sort_key::SortKey;
use crate::domain::values::source_label::SourceLabel;

#[derive(Debug, Clone, Default)]
pub struct RankerConfig {
    pub markup: MarkupFactor,
    /// Reorder the batch by this key. `None` keeps source order.
    pub sort_key: Option<SortKey>,
    /// Fail with [`DomainError::EmptyBatch`] instead of returning nothing.
    pub require_non_empty: bool,
    /// Drop products whose margin falls below this percentage.
    pub min_margin_percent: Option<f64>,
    /// Keep at most this many products (applied after sorting).
    pub limit: Option<usize>,
}

pub struct ProductRanker {
    config: RankerConfig,
}

impl ProductRanker {
    pub fn new(config: RankerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Rank a batch with the configured markup.
    pub fn rank(
        &self,
        candidates: &[CandidateProduct],
        source: SourceLabel,
    ) -> Result<Vec<RankedProduct>, DomainError> {
        self.rank_with_markup(candidates, self.config.markup, source)
    }

    /// Rank a batch with an explicit markup, keeping every other setting.
    pub fn rank_with_markup(
        &self,
        candidates: &[CandidateProduct],
        markup: MarkupFactor,
        source: SourceLabel,
    ) -> Result<Vec<RankedProduct>, DomainError> {
        if candidates.is_empty() && self.config.require_non_empty {
            return Err(DomainError::EmptyBatch(format!(
                "no {source} candidates to rank"
            )));
        }

        let mut seen = HashSet::with_capacity(candidates.len());
        let mut scored: Vec<(&CandidateProduct, ProfitabilityMetrics)> =
            Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if !seen.insert(candidate.id.as_str()) {
                return Err(DomainError::invalid(
                    "id",
                    format!("duplicate identifier '{}' in batch", candidate.id),
                ));
            }
            if !candidate.supplier_rating.is_finite() {
                return Err(DomainError::invalid(
                    "supplier_rating",
                    format!(
                        "must be a finite number, got {} (product '{}')",
                        candidate.supplier_rating, candidate.id
                    ),
                ));
            }
            let metrics = compute(candidate.unit_price, candidate.shipping_cost, markup.value())
                .map_err(|e| match e {
                    DomainError::InvalidInput { field, reason } => DomainError::InvalidInput {
                        field,
                        reason: format!("{reason} (product '{}')", candidate.id),
                    },
                    other => other,
                })?;
            scored.push((candidate, metrics));
        }

        // Order and filter on raw values; rounding is for output only.
        if let Some(key) = self.config.sort_key {
            scored.sort_by(|a, b| compare(key, a, b));
        }
        if let Some(min) = self.config.min_margin_percent {
            scored.retain(|(_, m)| m.margin_percent >= min);
        }
        if let Some(limit) = self.config.limit {
            scored.truncate(limit);
        }

        tracing::debug!(
            source = %source,
            markup = %markup,
            input = candidates.len(),
            output = scored.len(),
            "ranked batch"
        );

        Ok(scored
            .into_iter()
            .map(|(candidate, metrics)| RankedProduct {
                product: candidate.clone(),
                metrics: metrics.rounded(),
                source,
            })
            .collect())
    }
}

fn compare(
    key: SortKey,
    (a, ma): &(&CandidateProduct, ProfitabilityMetrics),
    (b, mb): &(&CandidateProduct, ProfitabilityMetrics),
) -> Ordering {
    match key {
        SortKey::Margin => mb.margin_percent.total_cmp(&ma.margin_percent),
        SortKey::Profit => mb.projected_profit.total_cmp(&ma.projected_profit),
        SortKey::Rating => b.supplier_rating.total_cmp(&a.supplier_rating),
        SortKey::Cost => ma.total_cost.total_cmp(&mb.total_cost),
    }
}

//! Analyze use case: fetch candidates for a niche (or fall back to the
//! synthetic catalog) and rank them.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::fallback::FallbackGenerator;
use crate::application::rank::ProductRanker;
use crate::domain::entities::candidate_product::CandidateProduct;
use crate::domain::entities::ranked_product::RankedProduct;
use crate::domain::error::DomainError;
use crate::domain::ports::product_source::{ProductSource, SourceError};
use crate::domain::values::batch_summary::BatchSummary;
use crate::domain::values::source_label::SourceLabel;

/// What to do when the source succeeds but returns no products.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyResultPolicy {
    /// Treat an empty result like a failure and serve the synthetic catalog
    #[default]
    Fallback,
    /// Return the empty live result as-is
    Accept,
}

/// Result of analyzing one niche.
#[derive(Debug, Clone, Serialize)]
pub struct NicheAnalysis {
    pub id: String,
    pub niche: String,
    pub source: SourceLabel,
    pub generated_at: DateTime<Utc>,
    pub products: Vec<RankedProduct>,
    pub summary: BatchSummary,
}

/// Classified result of a single source call.
#[derive(Debug)]
pub enum FetchOutcome {
    Live(Vec<CandidateProduct>),
    Empty,
    Failed(SourceError),
}

impl From<Result<Vec<CandidateProduct>, SourceError>> for FetchOutcome {
    fn from(result: Result<Vec<CandidateProduct>, SourceError>) -> Self {
        match result {
            Ok(products) if products.is_empty() => FetchOutcome::Empty,
            Ok(products) => FetchOutcome::Live(products),
            Err(e) => FetchOutcome::Failed(e),
        }
    }
}

pub struct AnalyzeNicheUseCase {
    source: Arc<dyn ProductSource>,
    fallback: FallbackGenerator,
    ranker: ProductRanker,
    empty_policy: EmptyResultPolicy,
}

impl AnalyzeNicheUseCase {
    pub fn new(
        source: Arc<dyn ProductSource>,
        fallback: FallbackGenerator,
        ranker: ProductRanker,
        empty_policy: EmptyResultPolicy,
    ) -> Self {
        Self {
            source,
            fallback,
            ranker,
            empty_policy,
        }
    }

    pub fn ranker(&self) -> &ProductRanker {
        &self.ranker
    }

    pub async fn execute(&self, niche: &str) -> Result<NicheAnalysis, DomainError> {
        let (candidates, label) = self.gather(niche).await;
        let products = self.ranker.rank(&candidates, label)?;
        let summary = BatchSummary::from_ranked(&products);

        tracing::info!(
            niche,
            source = %label,
            products = products.len(),
            "niche analyzed"
        );

        Ok(NicheAnalysis {
            id: uuid::Uuid::new_v4().to_string(),
            niche: niche.to_string(),
            source: label,
            generated_at: Utc::now(),
            products,
            summary,
        })
    }

    /// Fetch from the source, substituting the synthetic catalog on failure
    /// (and on an empty result, depending on policy).
    async fn gather(&self, niche: &str) -> (Vec<CandidateProduct>, SourceLabel) {
        tracing::debug!(source = self.source.name(), niche, "fetching candidates");

        match FetchOutcome::from(self.source.fetch(niche).await) {
            FetchOutcome::Live(products) => {
                // Results carry the query niche regardless of how the source tagged them.
                let products = products
                    .into_iter()
                    .map(|p| CandidateProduct {
                        niche_tag: niche.to_string(),
                        ..p
                    })
                    .collect();
                (products, SourceLabel::Live)
            }
            FetchOutcome::Empty => match self.empty_policy {
                EmptyResultPolicy::Accept => (Vec::new(), SourceLabel::Live),
                EmptyResultPolicy::Fallback => {
                    tracing::warn!(
                        source = self.source.name(),
                        niche,
                        "source returned no products, using fallback catalog"
                    );
                    (self.fallback.generate(niche), SourceLabel::Fallback)
                }
            },
            FetchOutcome::Failed(e) => {
                tracing::warn!(
                    source = self.source.name(),
                    niche,
                    error = %e,
                    "source unavailable, using fallback catalog"
                );
                (self.fallback.generate(niche), SourceLabel::Fallback)
            }
        }
    }
}

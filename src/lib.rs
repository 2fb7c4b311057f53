pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::analyze::{AnalyzeNicheUseCase, EmptyResultPolicy, NicheAnalysis};
use crate::application::fallback::FallbackGenerator;
use crate::application::rank::{ProductRanker, RankerConfig};
use crate::config::AppConfig;
use crate::domain::entities::candidate_product::CandidateProduct;
use crate::domain::entities::ranked_product::RankedProduct;
use crate::domain::error::DomainError;
use crate::domain::ports::product_source::ProductSource;
use crate::domain::values::profitability::{self, ProfitabilityMetrics};
use crate::domain::values::source_label::SourceLabel;
use std::sync::Arc;

/// Engine facade. Build once at startup and share by reference.
pub struct NicheScout {
    analyze_uc: AnalyzeNicheUseCase,
    fallback: FallbackGenerator,
}

impl NicheScout {
    pub fn new(config: &AppConfig) -> Result<Self, DomainError> {
        let source = config.source.build()?;
        Self::with_source(config, source)
    }

    pub fn with_source(
        config: &AppConfig,
        source: Arc<dyn ProductSource>,
    ) -> Result<Self, DomainError> {
        let ranker_config = config.engine.ranker_config()?;
        Ok(Self::with_ranker(
            ranker_config,
            config.engine.empty_result_policy,
            source,
        ))
    }

    pub fn with_ranker(
        ranker_config: RankerConfig,
        empty_policy: EmptyResultPolicy,
        source: Arc<dyn ProductSource>,
    ) -> Self {
        let fallback = FallbackGenerator::new();
        Self {
            analyze_uc: AnalyzeNicheUseCase::new(
                source,
                fallback,
                ProductRanker::new(ranker_config),
                empty_policy,
            ),
            fallback,
        }
    }

    pub async fn analyze(&self, niche: &str) -> Result<NicheAnalysis, DomainError> {
        self.analyze_uc.execute(niche).await
    }

    pub fn rank(
        &self,
        candidates: &[CandidateProduct],
        source: SourceLabel,
    ) -> Result<Vec<RankedProduct>, DomainError> {
        self.analyze_uc.ranker().rank(candidates, source)
    }

    /// Display-rounded metrics for one product at the configured markup.
    pub fn profitability(
        &self,
        unit_price: f64,
        shipping_cost: f64,
    ) -> Result<ProfitabilityMetrics, DomainError> {
        let markup = self.analyze_uc.ranker().config().markup;
        profitability::compute(unit_price, shipping_cost, markup.value()).map(|m| m.rounded())
    }

    pub fn fallback_catalog(&self, niche: &str) -> Vec<CandidateProduct> {
        self.fallback.generate(niche)
    }
}

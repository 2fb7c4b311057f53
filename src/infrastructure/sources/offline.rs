use crate::domain::entities::candidate_product::CandidateProduct;
use crate::domain::ports::product_source::{ProductSource, SourceError};

/// Stand-in used when no source credential is configured.
pub struct OfflineSource;

#[async_trait::async_trait]
impl ProductSource for OfflineSource {
    fn name(&self) -> &str {
        "offline"
    }

    async fn fetch(&self, _niche: &str) -> Result<Vec<CandidateProduct>, SourceError> {
        Err(SourceError::MissingCredential(
            "no source token configured".into(),
        ))
    }
}

//! Product source port.
//!
//! A [`ProductSource`] turns a niche string into raw candidate products.
//! Three outcomes matter to the caller:
//!
//! - `Ok` with candidates: live data
//! - `Ok` with an empty list: the source worked but found nothing
//! - `Err(SourceError)`: the source could not be used at all
//!
//! Callers never branch on the error variant; it only feeds the logs.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::candidate_product::CandidateProduct;

#[derive(Debug, Error)]
pub enum SourceError {
    /// No credential configured for the source
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// HTTP, timeout or connection failure
    #[error("Network error: {0}")]
    Network(String),

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}

#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Human-readable name of this source.
    fn name(&self) -> &str;

    /// Fetch candidate products for a niche.
    async fn fetch(&self, niche: &str) -> Result<Vec<CandidateProduct>, SourceError>;
}

//! Runtime configuration.
//!
//! Loaded from an optional TOML file, then overridden by environment
//! variables. Missing sections and keys take their defaults.
//!
//! ```toml
//! [engine]
//! markup_factor = 3.0
//! sort_key = "margin"
//! strict = false
//! empty_result_policy = "fallback"
//!
//! [source]
//! endpoint = "https://scraper.example/datasets/products"
//! api_token = "..."
//! timeout_secs = 10
//! max_items = 5
//! ```

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::analyze::EmptyResultPolicy;
use crate::application::rank::RankerConfig;
use crate::domain::error::DomainError;
use crate::domain::ports::product_source::ProductSource;
use crate::domain::values::markup::{MarkupFactor, DEFAULT_MARKUP_FACTOR};
use crate::domain::values::sort_key::SortKey;
use crate::infrastructure::sources::http_catalog::{HttpCatalogSource, DEFAULT_MAX_ITEMS};
use crate::infrastructure::sources::offline::OfflineSource;

pub const ENV_MARKUP_FACTOR: &str = "NICHESCOUT_MARKUP_FACTOR";
pub const ENV_SORT: &str = "NICHESCOUT_SORT";
pub const ENV_STRICT: &str = "NICHESCOUT_STRICT";
pub const ENV_SOURCE_ENDPOINT: &str = "NICHESCOUT_SOURCE_ENDPOINT";
pub const ENV_SOURCE_TOKEN: &str = "NICHESCOUT_SOURCE_TOKEN";
pub const ENV_SOURCE_TIMEOUT_SECS: &str = "NICHESCOUT_SOURCE_TIMEOUT_SECS";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub source: SourceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub markup_factor: f64,
    pub sort_key: Option<SortKey>,
    /// Reject empty batches instead of returning an empty result.
    pub strict: bool,
    pub empty_result_policy: EmptyResultPolicy,
    pub min_margin_percent: Option<f64>,
    pub limit: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            markup_factor: DEFAULT_MARKUP_FACTOR,
            sort_key: None,
            strict: false,
            empty_result_policy: EmptyResultPolicy::default(),
            min_margin_percent: None,
            limit: None,
        }
    }
}

impl EngineConfig {
    /// Validate into the ranker's settings.
    pub fn ranker_config(&self) -> Result<RankerConfig, DomainError> {
        let markup = MarkupFactor::new(self.markup_factor)
            .map_err(|e| DomainError::Config(format!("engine.markup_factor: {e}")))?;
        if let Some(min) = self.min_margin_percent {
            if !min.is_finite() {
                return Err(DomainError::Config(format!(
                    "engine.min_margin_percent must be finite, got {min}"
                )));
            }
        }
        Ok(RankerConfig {
            markup,
            sort_key: self.sort_key,
            require_non_empty: self.strict,
            min_margin_percent: self.min_margin_percent,
            limit: self.limit,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
    pub api_token: Option<String>,
    pub timeout_secs: u64,
    pub max_items: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_token: None,
            timeout_secs: 10,
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}

impl SourceConfig {
    /// Build the configured source. Without both an endpoint and a
    /// non-empty token this is the [`OfflineSource`].
    pub fn build(&self) -> Result<Arc<dyn ProductSource>, DomainError> {
        let token = self.api_token.as_deref().filter(|t| !t.trim().is_empty());
        match (self.endpoint.as_deref(), token) {
            (Some(endpoint), Some(token)) => {
                let source = HttpCatalogSource::new(
                    endpoint.to_string(),
                    token.to_string(),
                    Duration::from_secs(self.timeout_secs),
                    self.max_items,
                )
                .map_err(|e| DomainError::Config(e.to_string()))?;
                Ok(Arc::new(source))
            }
            _ => {
                tracing::debug!("no source endpoint/token configured, running offline");
                Ok(Arc::new(OfflineSource))
            }
        }
    }
}

impl AppConfig {
    /// Read a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, DomainError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DomainError::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&contents)
            .map_err(|e| DomainError::Config(format!("invalid TOML in {}: {e}", path.display())))
    }

    /// Load from `path` (defaults when `None`) and apply process
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, DomainError> {
        let mut config = match path {
            Some(p) => {
                tracing::debug!("Loading config from {}", p.display());
                Self::from_file(p)?
            }
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the environment in production).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(ENV_MARKUP_FACTOR) {
            self.engine.markup_factor = val
                .trim()
                .parse()
                .map_err(|_| DomainError::Config(format!("{ENV_MARKUP_FACTOR}: not a number: '{val}'")))?;
            tracing::debug!("Override markup_factor from env: {}", self.engine.markup_factor);
        }
        if let Some(val) = lookup(ENV_SORT) {
            self.engine.sort_key = Some(
                val.parse()
                    .map_err(|e: String| DomainError::Config(format!("{ENV_SORT}: {e}")))?,
            );
        }
        if let Some(val) = lookup(ENV_STRICT) {
            self.engine.strict = val
                .trim()
                .parse()
                .map_err(|_| DomainError::Config(format!("{ENV_STRICT}: expected true/false, got '{val}'")))?;
        }
        if let Some(val) = lookup(ENV_SOURCE_ENDPOINT) {
            self.source.endpoint = Some(val);
        }
        if let Some(val) = lookup(ENV_SOURCE_TOKEN) {
            self.source.api_token = Some(val);
        }
        if let Some(val) = lookup(ENV_SOURCE_TIMEOUT_SECS) {
            self.source.timeout_secs = val.trim().parse().map_err(|_| {
                DomainError::Config(format!("{ENV_SOURCE_TIMEOUT_SECS}: not a whole number: '{val}'"))
            })?;
        }
        Ok(())
    }
}

use thiserror::Error;

use crate::domain::ports::product_source::SourceError;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input for `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Empty batch: {0}")]
    EmptyBatch(String),

    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        DomainError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field for `InvalidInput`, `None` otherwise.
    pub fn field(&self) -> Option<&str> {
        match self {
            DomainError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<SourceError> for DomainError {
    fn from(e: SourceError) -> Self {
        DomainError::SourceUnavailable(e.to_string())
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a batch of candidates came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceLabel {
    /// Data returned by the configured external source
    Live,
    /// Synthetic catalog served when the source is unavailable
    Fallback,
}

impl fmt::Display for SourceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live => write!(f, "live"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

impl FromStr for SourceLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "fallback" | "mock" => Ok(Self::Fallback),
            _ => Err(format!(
                "Invalid source label: '{}'. Use 'live' or 'fallback'",
                s
            )),
        }
    }
}

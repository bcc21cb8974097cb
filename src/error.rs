use std::time::Duration;
use thiserror::Error;

/// Errors raised inside the card-compare service.
///
/// Catalog lookups never produce these; absence is expressed with `Option`
/// or an empty `Vec`. Every variant here is absorbed at the generator or
/// handler boundary and replaced with a deterministic answer.
#[derive(Debug, Error)]
pub enum CardCompareError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No valid credential found in {0}")]
    MissingCredential(String),

    #[error("Upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Upstream response was malformed: {0}")]
    MalformedResponse(String),

    #[error("Text generation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl CardCompareError {
    /// Whether retrying the same upstream request could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::UpstreamStatus { status, .. } => *status == 429 || *status >= 500,
            Self::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, CardCompareError>;

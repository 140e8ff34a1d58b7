// Error types for provider lookups

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single provider request.
///
/// Every variant is handled the same way by the aggregator: logged, then treated as
/// "no result from this provider".
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("{0}")]
    NoMatch(String),

    #[error("malformed response from {url}: {reason}")]
    Malformed { url: String, reason: String },
}

impl ProviderError {
    pub fn no_match(message: impl Into<String>) -> Self {
        Self::NoMatch(message.into())
    }

    pub fn malformed(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// True when the provider answered but nothing satisfied the filters
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch(_))
    }
}

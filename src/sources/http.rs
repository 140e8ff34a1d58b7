// Shared HTTP client utilities

use crate::error::ProviderError;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

/// User-Agent string for all HTTP requests
const USER_AGENT: &str = concat!("plugfind/", env!("CARGO_PKG_VERSION"));

lazy_static::lazy_static! {
    /// Shared HTTP client with proper User-Agent
    static ref CLIENT: Client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to create HTTP client");
}

/// Get a reference to the shared HTTP client
pub fn client() -> &'static Client {
    &CLIENT
}

/// Fetch JSON from a URL and deserialize it
///
/// Transport failures, non-success statuses and bodies that do not decode into `T`
/// map onto the matching `ProviderError` variant.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, ProviderError> {
    let response: Response = client()
        .get(url)
        .send()
        .await
        .map_err(|source| ProviderError::Network {
            url: url.to_string(),
            source,
        })?;

    if !response.status().is_success() {
        return Err(ProviderError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|source| ProviderError::Network {
            url: url.to_string(),
            source,
        })?;

    serde_json::from_slice(&body).map_err(|e| ProviderError::malformed(url, e.to_string()))
}

/// Percent-encode a value for use in a path segment or query string
pub fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Join a configured base URL with a path, tolerating a trailing slash on the base
pub fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

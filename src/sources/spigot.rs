// Spigot source implementation (via Spiget API)

use crate::config::Endpoint;
use crate::constants;
use crate::error::ProviderError;
use crate::sources::http;
use crate::sources::model::{ProviderResult, SearchQuery, Suggestion};
use crate::sources::search::{self, MatchMode, Searchable};
use crate::sources::source_trait::PluginProvider;
use async_trait::async_trait;
use log::debug;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SearchHit {
    id: i64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct Resource {
    name: String,
    #[serde(default)]
    tag: Option<String>,
}

impl Searchable for SearchHit {
    fn search_name(&self) -> &str {
        &self.name
    }
}

/// SpigotMC resources carry no usable server-version metadata, so results are never
/// filtered by version or software.
pub struct SpigotSource {
    endpoint: Endpoint,
    match_mode: MatchMode,
}

impl SpigotSource {
    pub fn new(endpoint: Endpoint, match_mode: MatchMode) -> Self {
        Self {
            endpoint,
            match_mode,
        }
    }

    async fn search(
        &self,
        name: &str,
        size: Option<usize>,
    ) -> Result<Vec<SearchHit>, ProviderError> {
        let mut url = http::join(
            &self.endpoint.api_url,
            &format!("search/resources/{}", http::encode(name)),
        );
        if let Some(size) = size {
            url.push_str(&format!("?size={}", size));
        }

        http::fetch_json(&url).await
    }

    async fn fetch_resource(&self, resource_id: i64) -> Result<Resource, ProviderError> {
        let url = http::join(
            &self.endpoint.api_url,
            &format!("resources/{}", resource_id),
        );
        http::fetch_json(&url).await
    }

    fn normalize(
        &self,
        resource_id: i64,
        resource: &Resource,
        query: &SearchQuery,
    ) -> ProviderResult {
        let download_url = http::join(
            &self.endpoint.api_url,
            &format!("resources/{}/download", resource_id),
        );

        ProviderResult::new(
            self.platform(),
            resource.name.clone(),
            http::join(
                &self.endpoint.site_url,
                &format!("resources/{}/", resource_id),
            ),
            resource.tag.as_deref(),
            constants::SPIGOT_COLOR,
            query,
            constants::SPIGOT_VERSION_NOTE,
            &download_url,
        )
    }
}

#[async_trait]
impl PluginProvider for SpigotSource {
    fn name(&self) -> &'static str {
        "spigot"
    }

    fn platform(&self) -> &'static str {
        "SpigotMC"
    }

    async fn lookup(&self, query: &SearchQuery) -> Result<ProviderResult, ProviderError> {
        let hits = self.search(&query.plugin_name, None).await?;
        let hit = search::select_hit(hits, &query.plugin_name, self.match_mode).ok_or_else(|| {
            ProviderError::no_match(format!(
                "No SpigotMC resource named '{}'",
                query.plugin_name
            ))
        })?;
        debug!("Spiget hit for '{}': {}", query.plugin_name, hit.id);

        let resource = self.fetch_resource(hit.id).await?;
        Ok(self.normalize(hit.id, &resource, query))
    }

    async fn suggest(&self, partial: &str) -> Result<Vec<Suggestion>, ProviderError> {
        let hits = self
            .search(partial, Some(constants::PROVIDER_SUGGESTION_LIMIT))
            .await?;
        Ok(hits
            .iter()
            .take(constants::PROVIDER_SUGGESTION_LIMIT)
            .map(|h| Suggestion::from_name(&h.name, self.platform()))
            .collect())
    }
}

// Modrinth source implementation

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
struct SearchResponse {
    hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    project_id: String,
    slug: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Version {
    #[serde(default)]
    version_number: Option<String>,
    files: Vec<VersionFile>,
}

#[derive(Debug, Deserialize)]
struct VersionFile {
    url: String,
}

impl Searchable for SearchHit {
    fn search_name(&self) -> &str {
        &self.title
    }
}

pub struct ModrinthSource {
    endpoint: Endpoint,
    match_mode: MatchMode,
}

impl ModrinthSource {
    pub fn new(endpoint: Endpoint, match_mode: MatchMode) -> Self {
        Self {
            endpoint,
            match_mode,
        }
    }

    async fn search(
        &self,
        name: &str,
        limit: Option<usize>,
    ) -> Result<Vec<SearchHit>, ProviderError> {
        let mut url = http::join(
            &self.endpoint.api_url,
            &format!("search?query={}", http::encode(name)),
        );
        if let Some(limit) = limit {
            url.push_str(&format!("&limit={}", limit));
        }

        let response: SearchResponse = http::fetch_json(&url).await?;
        Ok(response.hits)
    }

    /// Versions of a project, filtered server-side by loader and game version
    async fn fetch_versions(
        &self,
        project_id: &str,
        query: &SearchQuery,
    ) -> Result<Vec<Version>, ProviderError> {
        let mut url = http::join(
            &self.endpoint.api_url,
            &format!(
                "project/{}/version?game_versions={}",
                http::encode(project_id),
                http::encode(&json_list(&query.game_version))
            ),
        );
        if let Some(software) = query.software {
            url.push_str(&format!("&loaders={}", http::encode(&json_list(software.loader()))));
        }

        http::fetch_json(&url).await
    }

    /// Normalize a search hit and its matching version to our common format
    fn normalize(
        &self,
        hit: &SearchHit,
        version: &Version,
        query: &SearchQuery,
    ) -> Result<ProviderResult, ProviderError> {
        let file = version.files.first().ok_or_else(|| {
            ProviderError::malformed(
                &self.endpoint.api_url,
                format!(
                    "version '{}' of '{}' has no files",
                    version.version_number.as_deref().unwrap_or("?"),
                    hit.slug
                ),
            )
        })?;

        Ok(ProviderResult::new(
            self.platform(),
            hit.title.clone(),
            http::join(&self.endpoint.site_url, &format!("plugin/{}", hit.slug)),
            hit.description.as_deref(),
            constants::MODRINTH_COLOR,
            query,
            query.game_version.clone(),
            &file.url,
        ))
    }
}

/// Modrinth expects list filters as JSON arrays (e.g., `["1.20.1"]`)
fn json_list(value: &str) -> String {
    serde_json::Value::from(vec![value]).to_string()
}

#[async_trait]
impl PluginProvider for ModrinthSource {
    fn name(&self) -> &'static str {
        "modrinth"
    }

    fn platform(&self) -> &'static str {
        "Modrinth"
    }

    async fn lookup(&self, query: &SearchQuery) -> Result<ProviderResult, ProviderError> {
        let hits = self.search(&query.plugin_name, None).await?;
        let hit = search::select_hit(hits, &query.plugin_name, self.match_mode).ok_or_else(|| {
            ProviderError::no_match(format!(
                "No Modrinth project named '{}'",
                query.plugin_name
            ))
        })?;
        debug!("Modrinth hit for '{}': {}", query.plugin_name, hit.slug);

        let versions = self.fetch_versions(&hit.project_id, query).await?;
        let version = versions.first().ok_or_else(|| {
            ProviderError::no_match(format!(
                "No Modrinth version of '{}' for Minecraft {}",
                hit.slug, query.game_version
            ))
        })?;

        self.normalize(&hit, version, query)
    }

    async fn suggest(&self, partial: &str) -> Result<Vec<Suggestion>, ProviderError> {
        let hits = self
            .search(partial, Some(constants::PROVIDER_SUGGESTION_LIMIT))
            .await?;
        Ok(hits
            .iter()
            .take(constants::PROVIDER_SUGGESTION_LIMIT)
            .map(|h| Suggestion::from_name(&h.title, self.platform()))
            .collect())
    }
}

// Hangar source implementation (PaperMC plugin repository)

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
    result: Vec<Project>,
}

#[derive(Debug, Deserialize)]
struct Project {
    name: String,
    #[serde(default)]
    slug: Option<String>,
    namespace: Namespace,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Namespace {
    owner: String,
    #[serde(default)]
    slug: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Version {
    name: String,
    #[serde(rename = "minecraftVersions")]
    minecraft_versions: Vec<String>,
    platforms: Vec<String>,
}

/// The versions endpoint answers either with a bare list or with a paginated page
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VersionList {
    Bare(Vec<Version>),
    Paged { result: Vec<Version> },
}

impl VersionList {
    fn into_vec(self) -> Vec<Version> {
        match self {
            VersionList::Bare(versions) => versions,
            VersionList::Paged { result } => result,
        }
    }
}

impl Searchable for Project {
    fn search_name(&self) -> &str {
        &self.name
    }
}

impl Project {
    fn slug(&self) -> Option<&str> {
        self.slug.as_deref().or(self.namespace.slug.as_deref())
    }
}

impl Version {
    /// Requires the exact game version and, when given, the upper-cased platform
    fn supports(&self, query: &SearchQuery) -> bool {
        let game_version_ok = self
            .minecraft_versions
            .iter()
            .any(|v| v == &query.game_version);
        let platform_ok = match query.software {
            Some(software) => {
                let platform = software.platform();
                self.platforms.iter().any(|p| p == &platform)
            }
            None => true,
        };
        game_version_ok && platform_ok
    }
}

pub struct HangarSource {
    endpoint: Endpoint,
    match_mode: MatchMode,
}

impl HangarSource {
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
    ) -> Result<Vec<Project>, ProviderError> {
        let mut url = http::join(
            &self.endpoint.api_url,
            &format!("projects/search?query={}", http::encode(name)),
        );
        if let Some(limit) = limit {
            url.push_str(&format!("&limit={}", limit));
        }

        let response: SearchResponse = http::fetch_json(&url).await?;
        Ok(response.result)
    }

    async fn fetch_versions(&self, owner: &str, slug: &str) -> Result<Vec<Version>, ProviderError> {
        let url = http::join(
            &self.endpoint.api_url,
            &format!(
                "projects/{}/{}/versions",
                http::encode(owner),
                http::encode(slug)
            ),
        );
        let versions: VersionList = http::fetch_json(&url).await?;
        Ok(versions.into_vec())
    }

    fn normalize(
        &self,
        project: &Project,
        slug: &str,
        version: &Version,
        query: &SearchQuery,
    ) -> ProviderResult {
        let owner = &project.namespace.owner;
        let download_url = http::join(
            &self.endpoint.api_url,
            &format!(
                "projects/{}/{}/versions/{}/download",
                http::encode(owner),
                http::encode(slug),
                http::encode(&version.name)
            ),
        );

        ProviderResult::new(
            self.platform(),
            project.name.clone(),
            http::join(&self.endpoint.site_url, &format!("{}/{}", owner, slug)),
            project.description.as_deref(),
            constants::HANGAR_COLOR,
            query,
            query.game_version.clone(),
            &download_url,
        )
    }
}

#[async_trait]
impl PluginProvider for HangarSource {
    fn name(&self) -> &'static str {
        "hangar"
    }

    fn platform(&self) -> &'static str {
        "Hangar"
    }

    async fn lookup(&self, query: &SearchQuery) -> Result<ProviderResult, ProviderError> {
        let projects = self.search(&query.plugin_name, None).await?;
        let project =
            search::select_hit(projects, &query.plugin_name, self.match_mode).ok_or_else(|| {
                ProviderError::no_match(format!("No Hangar project named '{}'", query.plugin_name))
            })?;

        let slug = project.slug().ok_or_else(|| {
            ProviderError::malformed(
                &self.endpoint.api_url,
                format!("project '{}' has no slug", project.name),
            )
        })?;
        debug!(
            "Hangar hit for '{}': {}/{}",
            query.plugin_name, project.namespace.owner, slug
        );

        let versions = self.fetch_versions(&project.namespace.owner, slug).await?;
        let version = versions.iter().find(|v| v.supports(query)).ok_or_else(|| {
            ProviderError::no_match(format!(
                "No Hangar version of '{}/{}' supports {} {}",
                project.namespace.owner,
                slug,
                query
                    .software
                    .map(|s| s.platform())
                    .unwrap_or_else(|| "Minecraft".to_string()),
                query.game_version
            ))
        })?;

        Ok(self.normalize(&project, slug, version, query))
    }

    async fn suggest(&self, partial: &str) -> Result<Vec<Suggestion>, ProviderError> {
        let projects = self
            .search(partial, Some(constants::PROVIDER_SUGGESTION_LIMIT))
            .await?;
        Ok(projects
            .iter()
            .take(constants::PROVIDER_SUGGESTION_LIMIT)
            .map(|p| Suggestion::from_name(&p.name, self.platform()))
            .collect())
    }
}

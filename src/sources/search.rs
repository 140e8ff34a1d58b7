// Search hit selection for plugin sources

use serde::Deserialize;

/// Trait for items that can be searched
pub trait Searchable {
    /// Get the name to compare against the search query
    fn search_name(&self) -> &str;
}

/// How a search hit is picked from a provider's result list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// First hit whose name equals the query, ignoring case
    #[default]
    Exact,
    /// Whatever the provider lists first
    FirstHit,
}

impl std::str::FromStr for MatchMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exact" => Ok(MatchMode::Exact),
            "first-hit" | "first" => Ok(MatchMode::FirstHit),
            other => anyhow::bail!(
                "Unknown match mode '{}'. Expected 'exact' or 'first-hit'",
                other
            ),
        }
    }
}

/// Pick the hit to use for a query, preserving provider order for ties
pub fn select_hit<T: Searchable>(results: Vec<T>, query: &str, mode: MatchMode) -> Option<T> {
    match mode {
        MatchMode::FirstHit => results.into_iter().next(),
        MatchMode::Exact => {
            let query_lower = query.trim().to_lowercase();
            results
                .into_iter()
                .find(|r| r.search_name().to_lowercase() == query_lower)
        }
    }
}

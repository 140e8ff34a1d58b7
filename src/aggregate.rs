// Aggregation of lookups across every provider

use crate::sources::{PluginProvider, ProviderRegistry, ProviderResult, SearchQuery};
use futures::future::join_all;
use log::{debug, warn};
use std::sync::Arc;

/// Results of one query, in provider order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateReply {
    pub query: SearchQuery,
    pub results: Vec<ProviderResult>,
}

impl AggregateReply {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Fallback text shown when no provider found the plugin
    pub fn not_found_message(&self) -> String {
        match self.query.software {
            Some(software) => format!(
                "❌ No plugin found named **{}** for {} {}.",
                self.query.plugin_name,
                software.label(),
                self.query.game_version
            ),
            None => format!(
                "❌ No plugin found named **{}** for version {}.",
                self.query.plugin_name, self.query.game_version
            ),
        }
    }
}

/// Look the query up on every provider
///
/// Lookups run concurrently; results keep the registry order whatever order they
/// complete in. A failing provider is logged and left out.
pub async fn resolve(registry: &ProviderRegistry, query: &SearchQuery) -> AggregateReply {
    let lookups = registry
        .providers()
        .iter()
        .map(|provider| lookup_one(provider, query));

    let results = join_all(lookups).await.into_iter().flatten().collect();

    AggregateReply {
        query: query.clone(),
        results,
    }
}

async fn lookup_one(
    provider: &Arc<dyn PluginProvider>,
    query: &SearchQuery,
) -> Option<ProviderResult> {
    match provider.lookup(query).await {
        Ok(result) => {
            debug!("[{}] resolved '{}'", provider.name(), query.plugin_name);
            Some(result)
        }
        Err(e) if e.is_no_match() => {
            debug!("[{}] {}", provider.name(), e);
            None
        }
        Err(e) => {
            warn!("{} error: {}", provider.platform(), e);
            None
        }
    }
}

// Autocomplete suggestions merged from every provider

use crate::constants;
use crate::sources::{ProviderRegistry, Suggestion};
use futures::future::join_all;
use log::warn;
use std::collections::HashSet;

/// Suggest plugin names for a partially typed name
///
/// Providers are asked concurrently and their candidates concatenated in registry
/// order. Duplicate values keep their first occurrence; the list never exceeds
/// `MAX_SUGGESTIONS`. A provider that fails contributes nothing.
pub async fn suggest(registry: &ProviderRegistry, partial: &str) -> Vec<Suggestion> {
    let partial = partial.trim();
    if partial.is_empty() {
        return Vec::new();
    }

    let requests = registry.providers().iter().map(|provider| async move {
        match provider.suggest(partial).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                warn!("{} suggestion error: {}", provider.platform(), e);
                Vec::new()
            }
        }
    });

    let candidates = join_all(requests).await.into_iter().flat_map(|batch| {
        batch
            .into_iter()
            .take(constants::PROVIDER_SUGGESTION_LIMIT)
    });

    merge(candidates)
}

/// Dedupe by value (first wins) and cap the list
fn merge(candidates: impl IntoIterator<Item = Suggestion>) -> Vec<Suggestion> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|s| seen.insert(s.value.clone()))
        .take(constants::MAX_SUGGESTIONS)
        .collect()
}

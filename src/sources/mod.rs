// Sources module for plugin provider implementations

use std::sync::Arc;

use crate::config::Config;

pub mod hangar;
pub mod http;
pub mod model;
pub mod modrinth;
pub mod search;
pub mod source_trait;
pub mod spigot;

pub use hangar::HangarSource;
pub use modrinth::ModrinthSource;
pub use spigot::SpigotSource;

// Re-export the trait and types
pub use model::{ProviderResult, SearchQuery, Software, Suggestion};
pub use search::MatchMode;
pub use source_trait::PluginProvider;

/// Registry for plugin providers, kept in display order
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn PluginProvider>>,
}

impl ProviderRegistry {
    /// Build the three providers from configuration
    /// Order: modrinth > hangar > spigot
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self {
            providers: Vec::new(),
        };

        registry.register(Arc::new(ModrinthSource::new(
            config.modrinth(),
            config.match_mode,
        )));
        registry.register(Arc::new(HangarSource::new(
            config.hangar(),
            config.match_mode,
        )));
        registry.register(Arc::new(SpigotSource::new(
            config.spiget(),
            config.match_mode,
        )));

        registry
    }

    /// Registry over an explicit provider list; order is kept as given
    #[cfg(test)]
    pub fn with_providers(providers: Vec<Arc<dyn PluginProvider>>) -> Self {
        Self { providers }
    }

    fn register(&mut self, provider: Arc<dyn PluginProvider>) {
        self.providers.push(provider);
    }

    /// Providers in the order their results are displayed
    pub fn providers(&self) -> &[Arc<dyn PluginProvider>] {
        &self.providers
    }
}

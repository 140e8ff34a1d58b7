// Trait definition for plugin providers

use crate::error::ProviderError;
use crate::sources::model::{ProviderResult, SearchQuery, Suggestion};

/// Trait for plugin providers (Modrinth, Hangar, Spigot)
#[async_trait::async_trait]
pub trait PluginProvider: Send + Sync {
    /// Look a plugin up and normalize it for display
    ///
    /// # Arguments
    /// * `query` - Plugin name, optional server software and Minecraft version
    ///
    /// # Returns
    /// A `ProviderResult`, or the reason this provider has nothing to show
    async fn lookup(&self, query: &SearchQuery) -> Result<ProviderResult, ProviderError>;

    /// Suggest plugin names starting from a partial name (at most five)
    async fn suggest(&self, partial: &str) -> Result<Vec<Suggestion>, ProviderError>;

    /// Get the source name (e.g., "modrinth", "hangar", "spigot")
    fn name(&self) -> &'static str;

    /// Display name of the platform (e.g., "Modrinth", "SpigotMC")
    fn platform(&self) -> &'static str;
}

// Plugin command: look a plugin up on Modrinth, Hangar and SpigotMC

use async_trait::async_trait;
use log::info;

use crate::aggregate;
use crate::autocomplete;
use crate::commands::{Command, Context, Invocation};
use crate::render::Reply;
use crate::sources::{SearchQuery, Software, Suggestion};

pub struct PluginCommand;

impl PluginCommand {
    fn query(invocation: &Invocation) -> anyhow::Result<SearchQuery> {
        let name = invocation.require("name")?;
        let version = invocation.require("version")?;
        let software = invocation
            .get("software")
            .map(str::parse::<Software>)
            .transpose()?;

        Ok(SearchQuery::new(name, software, version))
    }
}

#[async_trait]
impl Command for PluginCommand {
    fn name(&self) -> &'static str {
        "plugin"
    }

    fn description(&self) -> &'static str {
        "Search for a Minecraft plugin across Modrinth, Hangar, and SpigotMC"
    }

    async fn execute(&self, ctx: &Context, invocation: &Invocation) -> anyhow::Result<Reply> {
        let query = Self::query(invocation)?;
        info!(
            "Looking up '{}' ({}) for Minecraft {}",
            query.plugin_name,
            query.software.map(|s| s.label()).unwrap_or("any software"),
            query.game_version
        );

        let aggregate = aggregate::resolve(&ctx.providers, &query).await;
        info!(
            "Found '{}' on {} provider(s)",
            query.plugin_name,
            aggregate.results.len()
        );

        Ok(Reply::from(&aggregate))
    }

    async fn autocomplete(&self, ctx: &Context, focused: &str, partial: &str) -> Vec<Suggestion> {
        if focused != "name" {
            return Vec::new();
        }
        autocomplete::suggest(&ctx.providers, partial).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_from_options() {
        let invocation = Invocation::new("plugin")
            .option("name", "WorldEdit")
            .option("software", "Paper")
            .option("version", "1.20.1");

        let query = PluginCommand::query(&invocation).unwrap();
        assert_eq!(
            query,
            SearchQuery::new("WorldEdit", Some(Software::Paper), "1.20.1")
        );
    }

    #[test]
    fn test_query_software_optional() {
        let invocation = Invocation::new("plugin")
            .option("name", "WorldEdit")
            .option("version", "1.20.1");

        assert_eq!(PluginCommand::query(&invocation).unwrap().software, None);
    }

    #[test]
    fn test_query_rejects_unknown_software() {
        let invocation = Invocation::new("plugin")
            .option("name", "WorldEdit")
            .option("software", "forge")
            .option("version", "1.20.1");

        assert!(PluginCommand::query(&invocation).is_err());
    }
}

// Normalized request and result model shared by every provider

use crate::constants;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server software a plugin has to run on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Software {
    Paper,
    Spigot,
    Bungeecord,
    Waterfall,
}

impl Software {
    /// Loader tag as used by Modrinth (e.g., "paper")
    pub fn loader(&self) -> &'static str {
        match self {
            Software::Paper => "paper",
            Software::Spigot => "spigot",
            Software::Bungeecord => "bungeecord",
            Software::Waterfall => "waterfall",
        }
    }

    /// Platform tag as used by Hangar (e.g., "PAPER")
    pub fn platform(&self) -> String {
        self.loader().to_uppercase()
    }

    /// Human readable name for display
    pub fn label(&self) -> &'static str {
        match self {
            Software::Paper => "Paper",
            Software::Spigot => "Spigot",
            Software::Bungeecord => "BungeeCord",
            Software::Waterfall => "Waterfall",
        }
    }
}

impl fmt::Display for Software {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.loader())
    }
}

impl FromStr for Software {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "paper" => Ok(Software::Paper),
            "spigot" => Ok(Software::Spigot),
            "bungeecord" => Ok(Software::Bungeecord),
            "waterfall" => Ok(Software::Waterfall),
            other => anyhow::bail!(
                "Unsupported software '{}'. Supported: paper, spigot, bungeecord, waterfall",
                other
            ),
        }
    }
}

/// One plugin lookup request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub plugin_name: String,
    pub software: Option<Software>,
    pub game_version: String,
}

impl SearchQuery {
    pub fn new(
        plugin_name: impl Into<String>,
        software: Option<Software>,
        game_version: impl Into<String>,
    ) -> Self {
        Self {
            plugin_name: plugin_name.into(),
            software,
            game_version: game_version.into(),
        }
    }
}

/// Labelled value shown on a result card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub label: String,
    pub value: String,
}

impl Field {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A plugin found on one provider, normalized for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderResult {
    pub platform: String,
    pub title: String,
    pub url: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<Field>,
}

impl ProviderResult {
    /// Build a result with the standard field layout:
    /// Platform, Software (when requested), Version, Download.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        platform: &str,
        title: impl Into<String>,
        url: impl Into<String>,
        description: Option<&str>,
        color: u32,
        query: &SearchQuery,
        version_note: impl Into<String>,
        download_url: &str,
    ) -> Self {
        let mut fields = vec![Field::new("Platform", platform)];
        if let Some(software) = query.software {
            fields.push(Field::new("Software", software.label()));
        }
        fields.push(Field::new("Version", version_note));
        fields.push(Field::new("Download", format!("[Click here]({})", download_url)));

        Self {
            platform: platform.to_string(),
            title: title.into(),
            url: url.into(),
            description: description_or_default(description),
            color,
            fields,
        }
    }

    #[cfg(test)]
    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

/// Autocomplete candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub label: String,
    pub value: String,
}

impl Suggestion {
    /// Suggest a plugin name, labelled with the provider it came from
    pub fn from_name(name: &str, platform: &str) -> Self {
        Self {
            label: clip(&format!("{} ({})", name, platform)),
            value: clip(name),
        }
    }
}

/// Fall back to the placeholder text for empty or missing descriptions
pub fn description_or_default(description: Option<&str>) -> String {
    match description.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => constants::NO_DESCRIPTION.to_string(),
    }
}

fn clip(text: &str) -> String {
    text.chars().take(constants::MAX_CHOICE_LENGTH).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(software: Option<Software>) -> SearchQuery {
        SearchQuery::new("WorldEdit", software, "1.20.1")
    }

    #[test]
    fn test_software_tags() {
        assert_eq!(Software::Paper.loader(), "paper");
        assert_eq!(Software::Waterfall.platform(), "WATERFALL");
        assert_eq!(Software::Bungeecord.label(), "BungeeCord");
    }

    #[test]
    fn test_software_from_str() {
        assert_eq!("Paper".parse::<Software>().unwrap(), Software::Paper);
        assert_eq!(" spigot ".parse::<Software>().unwrap(), Software::Spigot);
        assert!("forge".parse::<Software>().is_err());
    }

    #[test]
    fn test_description_default() {
        assert_eq!(description_or_default(None), "No description.");
        assert_eq!(description_or_default(Some("  ")), "No description.");
        assert_eq!(description_or_default(Some("Edits worlds")), "Edits worlds");
    }

    #[test]
    fn test_result_fields_without_software() {
        let result = ProviderResult::new(
            "Modrinth",
            "WorldEdit",
            "https://modrinth.com/plugin/worldedit",
            None,
            0x1bd96a,
            &query(None),
            "1.20.1",
            "https://cdn.example/we.jar",
        );

        let labels: Vec<&str> = result.fields.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["Platform", "Version", "Download"]);
        assert_eq!(result.description, "No description.");
        assert_eq!(
            result.field("Download"),
            Some("[Click here](https://cdn.example/we.jar)")
        );
    }

    #[test]
    fn test_result_fields_with_software() {
        let result = ProviderResult::new(
            "Hangar",
            "WorldEdit",
            "https://hangar.papermc.io/EngineHub/WorldEdit",
            Some("Edits worlds"),
            0xffcc00,
            &query(Some(Software::Paper)),
            "1.20.1",
            "https://hangar.example/download",
        );

        let labels: Vec<&str> = result.fields.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["Platform", "Software", "Version", "Download"]);
        assert_eq!(result.field("Software"), Some("Paper"));
    }

    #[test]
    fn test_suggestion_clipped() {
        let long = "x".repeat(150);
        let suggestion = Suggestion::from_name(&long, "Modrinth");
        assert_eq!(suggestion.value.chars().count(), 100);
        assert_eq!(suggestion.label.chars().count(), 100);
    }
}

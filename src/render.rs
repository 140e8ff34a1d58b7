// Chat reply payloads built from lookup results

use crate::aggregate::AggregateReply;
use crate::constants;
use crate::sources::{ProviderResult, Suggestion};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub title: String,
    pub url: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
}

impl From<&ProviderResult> for Embed {
    fn from(result: &ProviderResult) -> Self {
        Self {
            title: result.title.clone(),
            url: result.url.clone(),
            description: result.description.clone(),
            color: result.color,
            fields: result
                .fields
                .iter()
                .map(|f| EmbedField {
                    name: f.label.clone(),
                    value: f.value.clone(),
                    inline: true,
                })
                .collect(),
        }
    }
}

/// Message sent back for a command
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// Text visible only to the user who ran the command
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            flags: Some(constants::EPHEMERAL_FLAG),
            ..Self::text(content)
        }
    }

    pub fn is_ephemeral(&self) -> bool {
        self.flags
            .is_some_and(|flags| flags & constants::EPHEMERAL_FLAG != 0)
    }
}

impl From<&AggregateReply> for Reply {
    /// One embed per result, or the "not found" text when there are none
    fn from(aggregate: &AggregateReply) -> Self {
        if aggregate.is_empty() {
            return Reply::text(aggregate.not_found_message());
        }

        Reply {
            embeds: aggregate.results.iter().map(Embed::from).collect(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub name: String,
    pub value: String,
}

/// Answer to an autocomplete interaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AutocompleteReply {
    pub choices: Vec<Choice>,
}

impl From<Vec<Suggestion>> for AutocompleteReply {
    fn from(suggestions: Vec<Suggestion>) -> Self {
        Self {
            choices: suggestions
                .into_iter()
                .map(|s| Choice {
                    name: s.label,
                    value: s.value,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{SearchQuery, Software};
    use serde_json::json;

    fn aggregate(results: Vec<ProviderResult>) -> AggregateReply {
        AggregateReply {
            query: SearchQuery::new("WorldEdit", Some(Software::Paper), "1.20.1"),
            results,
        }
    }

    #[test]
    fn test_empty_aggregate_renders_fallback_text() {
        let reply = Reply::from(&aggregate(Vec::new()));

        assert!(reply.embeds.is_empty());
        assert_eq!(
            reply.content.as_deref(),
            Some("❌ No plugin found named **WorldEdit** for Paper 1.20.1.")
        );
        assert_eq!(
            serde_json::to_value(&reply).unwrap(),
            json!({ "content": "❌ No plugin found named **WorldEdit** for Paper 1.20.1." })
        );
    }

    #[test]
    fn test_results_render_as_embeds() {
        let query = SearchQuery::new("WorldEdit", Some(Software::Paper), "1.20.1");
        let result = ProviderResult::new(
            "Modrinth",
            "WorldEdit",
            "https://modrinth.com/plugin/worldedit",
            Some("In-game map editor"),
            0x1bd96a,
            &query,
            "1.20.1",
            "https://cdn.modrinth.com/we.jar",
        );

        let reply = Reply::from(&aggregate(vec![result]));
        assert!(reply.content.is_none());
        assert!(!reply.is_ephemeral());

        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value["embeds"][0]["title"], "WorldEdit");
        assert_eq!(value["embeds"][0]["color"], 0x1bd96a);
        assert_eq!(value["embeds"][0]["fields"][0], json!({ "name": "Platform", "value": "Modrinth", "inline": true }));
        assert_eq!(value["embeds"][0]["fields"][1]["value"], "Paper");
        assert_eq!(value["embeds"][0]["fields"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_ephemeral_flag() {
        let reply = Reply::ephemeral("nope");
        assert!(reply.is_ephemeral());
        assert_eq!(serde_json::to_value(&reply).unwrap()["flags"], 64);
    }

    #[test]
    fn test_autocomplete_choices() {
        let reply = AutocompleteReply::from(vec![Suggestion::from_name("WorldEdit", "Hangar")]);
        assert_eq!(
            serde_json::to_value(&reply).unwrap(),
            json!({ "choices": [{ "name": "WorldEdit (Hangar)", "value": "WorldEdit" }] })
        );
    }
}

// Chat commands and their dispatcher

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error};

use crate::constants;
use crate::render::{AutocompleteReply, Reply};
use crate::sources::{ProviderRegistry, Suggestion};

pub mod plugin;

pub use plugin::PluginCommand;

/// State shared by every command invocation
pub struct Context {
    pub providers: ProviderRegistry,
}

/// A command as invoked by a user, with its options by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub options: BTreeMap<String, String>,
}

impl Invocation {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            options: BTreeMap::new(),
        }
    }

    pub fn option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.options
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn require(&self, name: &str) -> anyhow::Result<&str> {
        self.get(name)
            .ok_or_else(|| anyhow::anyhow!("Missing required option '{}'", name))
    }
}

/// Partially typed option the user wants completions for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteRequest {
    pub command: String,
    pub focused: String,
    pub partial: String,
}

/// A chat command: runs on invocation and may complete its options
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    async fn execute(&self, ctx: &Context, invocation: &Invocation) -> anyhow::Result<Reply>;

    async fn autocomplete(
        &self,
        _ctx: &Context,
        _focused: &str,
        _partial: &str,
    ) -> Vec<Suggestion> {
        Vec::new()
    }
}

/// Registry for chat commands
pub struct CommandRegistry {
    commands: HashMap<&'static str, Arc<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            commands: HashMap::new(),
        };

        registry.register(Arc::new(PluginCommand));

        registry
    }

    fn register(&mut self, command: Arc<dyn Command>) {
        self.commands.insert(command.name(), command);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Command>> {
        self.commands.get(name)
    }

    /// Registered commands sorted by name
    pub fn all(&self) -> Vec<&Arc<dyn Command>> {
        let mut commands: Vec<_> = self.commands.values().collect();
        commands.sort_by_key(|c| c.name());
        commands
    }
}

// Global registry instance
lazy_static::lazy_static! {
    pub static ref COMMANDS: CommandRegistry = CommandRegistry::new();
}

/// Route an invocation to its command
///
/// Unknown commands are ignored (`None`). A failing command produces the generic
/// ephemeral error reply instead of propagating.
pub async fn dispatch(ctx: &Context, invocation: &Invocation) -> Option<Reply> {
    let Some(command) = COMMANDS.get(&invocation.command) else {
        debug!("Ignoring unknown command '{}'", invocation.command);
        return None;
    };

    match command.execute(ctx, invocation).await {
        Ok(reply) => Some(reply),
        Err(e) => {
            error!("Command '{}' failed: {:#}", invocation.command, e);
            Some(Reply::ephemeral(constants::GENERIC_ERROR_REPLY))
        }
    }
}

/// Route an autocomplete request to its command; unknown commands get no choices
pub async fn autocomplete(ctx: &Context, request: &AutocompleteRequest) -> AutocompleteReply {
    match COMMANDS.get(&request.command) {
        Some(command) => command
            .autocomplete(ctx, &request.focused, &request.partial)
            .await
            .into(),
        None => AutocompleteReply::default(),
    }
}

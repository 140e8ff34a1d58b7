// Constants module for shared string constants

pub const CONFIG_FILE: &str = "plugfind.toml";

pub const MODRINTH_API_URL: &str = "https://api.modrinth.com/v2";
pub const MODRINTH_SITE_URL: &str = "https://modrinth.com";
pub const HANGAR_API_URL: &str = "https://hangar.papermc.io/api/v1";
pub const HANGAR_SITE_URL: &str = "https://hangar.papermc.io";
pub const SPIGET_API_URL: &str = "https://api.spiget.org/v2";
pub const SPIGOT_SITE_URL: &str = "https://www.spigotmc.org";

pub const MODRINTH_COLOR: u32 = 0x1bd96a;
pub const HANGAR_COLOR: u32 = 0xffcc00;
pub const SPIGOT_COLOR: u32 = 0x00afff;

pub const NO_DESCRIPTION: &str = "No description.";
pub const SPIGOT_VERSION_NOTE: &str = "Not filtered (manual check required)";
pub const GENERIC_ERROR_REPLY: &str = "❌ An error occurred while executing this command.";

/// Raw candidates requested from each provider for autocomplete.
pub const PROVIDER_SUGGESTION_LIMIT: usize = 5;

/// Upper bound on autocomplete choices accepted by the chat platform.
pub const MAX_SUGGESTIONS: usize = 25;

/// Upper bound on the length of a single choice name or value.
pub const MAX_CHOICE_LENGTH: usize = 100;

/// Message flag marking a reply visible only to the invoking user.
pub const EPHEMERAL_FLAG: u64 = 1 << 6;

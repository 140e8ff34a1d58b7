// CLI module for handling command-line interface

use clap::{Parser, Subcommand};

use crate::sources::{MatchMode, Software};

#[derive(Parser)]
#[command(name = "plugfind")]
#[command(about = "Look up Minecraft plugins on Modrinth, Hangar and SpigotMC")]
pub struct Cli {
    /// How search hits are picked (overrides config and PLUGFIND_MATCH_MODE)
    #[arg(long, global = true, value_enum)]
    pub match_mode: Option<MatchMode>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the plugin command for a name and Minecraft version
    Search {
        name: String,
        version: String,
        #[arg(long, value_enum)]
        software: Option<Software>,
        /// Print the raw reply payload as JSON
        #[arg(long)]
        json: bool,
    },
    /// Autocomplete a partially typed plugin name
    Suggest {
        partial: String,
        /// Print the raw autocomplete payload as JSON
        #[arg(long)]
        json: bool,
    },
    /// List registered chat commands
    Commands,
}

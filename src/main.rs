mod aggregate;
mod autocomplete;
mod cli;
mod commands;
mod config;
mod constants;
mod error;
mod render;
mod sources;
mod ui;

use clap::Parser;
use cli::Cli;
use config::Config;
use sources::ProviderRegistry;

use commands::{AutocompleteRequest, Context, Invocation};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Cli::parse()).await {
        ui::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load()?;
    if let Some(mode) = cli.match_mode {
        config.match_mode = mode;
    }

    let ctx = Context {
        providers: ProviderRegistry::from_config(&config),
    };

    match cli.command {
        cli::Commands::Search {
            name,
            version,
            software,
            json,
        } => {
            let mut invocation = Invocation::new("plugin")
                .option("name", name)
                .option("version", version);
            if let Some(software) = software {
                invocation = invocation.option("software", software.to_string());
            }

            let pb = ui::spinner("Searching Modrinth, Hangar and SpigotMC...");
            let reply = commands::dispatch(&ctx, &invocation).await;
            ui::clear_spinner(&pb);

            let reply =
                reply.ok_or_else(|| anyhow::anyhow!("The plugin command is not registered"))?;
            if json {
                ui::json(&reply)?;
            } else {
                ui::reply(&reply);
            }
            if reply.is_ephemeral() {
                anyhow::bail!("Plugin command failed; see the log for details");
            }
        }
        cli::Commands::Suggest { partial, json } => {
            let request = AutocompleteRequest {
                command: "plugin".to_string(),
                focused: "name".to_string(),
                partial,
            };
            let reply = commands::autocomplete(&ctx, &request).await;
            if json {
                ui::json(&reply)?;
            } else {
                ui::choices(&reply);
            }
        }
        cli::Commands::Commands => {
            ui::commands(&commands::COMMANDS.all());
        }
    }

    Ok(())
}

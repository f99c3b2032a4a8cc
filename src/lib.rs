pub mod cache;
pub mod cli;
pub mod clients;
pub mod config;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use state::SharedState;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    config.validate()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Some(Commands::Destinations {
            input,
            output,
            images,
        }) => {
            if let Some(n) = images {
                config.enrichment.images_per_destination = n;
                config.validate()?;
            }
            let state = SharedState::new(config)?;
            cli::cmd_enrich_destinations(&state, &input, output.as_deref()).await
        }

        Some(Commands::Activities {
            input,
            output,
            images,
        }) => {
            if let Some(n) = images {
                config.enrichment.images_per_activity = n;
                config.validate()?;
            }
            let state = SharedState::new(config)?;
            cli::cmd_enrich_activities(&state, &input, output.as_deref()).await
        }

        Some(Commands::Providers) => {
            let state = SharedState::new(config)?;
            cli::cmd_providers(&state);
            Ok(())
        }

        Some(Commands::Init) => {
            if Config::create_default_if_missing()? {
                println!("✓ Config file created. Edit config.toml and run again.");
            } else {
                println!("config.toml already exists, leaving it untouched.");
            }
            Ok(())
        }

        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

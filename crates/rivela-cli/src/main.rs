//! Rivela CLI - Emotion-aware personal finance analysis
//!
//! Usage:
//!   rivela analyze "Why can't I save?" --income 3000 --variable 600 --energy 8 --stress 8
//!   rivela archetype --energy 2 --stress 9
//!   rivela convert --amount 600
//!   rivela serve --port 3000

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

/// Default log level for a RIVELA_ENV value
fn env_log_level(rivela_env: Option<&str>) -> &'static str {
    match rivela_env {
        Some("development") => "debug",
        Some("production") => "warn",
        _ => "info",
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > RIVELA_ENV > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        let rivela_env = std::env::var("RIVELA_ENV").ok();
        EnvFilter::new(env_log_level(rivela_env.as_deref()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Analyze(args) => {
            let mut engine = commands::build_engine(config_path, cli.seed)?;
            commands::cmd_analyze(&mut engine, &args)
        }
        Commands::Archetype { energy, stress } => commands::cmd_archetype(energy, stress),
        Commands::Archetypes => commands::cmd_archetypes(),
        Commands::Convert { amount, json } => {
            let mut engine = commands::build_engine(config_path, cli.seed)?;
            commands::cmd_convert(&mut engine, amount, json)
        }
        Commands::Personas => commands::cmd_personas(),
        Commands::Config => commands::cmd_config(config_path),
        Commands::Serve {
            port,
            host,
            no_auth,
        } => {
            let engine = commands::build_engine(config_path, cli.seed)?;
            commands::cmd_serve(engine, &host, port, no_auth).await
        }
    }
}

//! Main entry point for the translator-critic CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use translator_critic::cli::commands::{self, Commands};
use translator_critic::{AppConfig, CredentialSource, StaticCredential};

/// Translator & Critic - translate with one model, grade with another
#[derive(Parser, Debug)]
#[command(name = "translator-critic", version, about, long_about = None)]
struct Args {
    /// API key (optional, defaults to re-reading API_KEY on every call)
    #[arg(long)]
    api_key: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON configuration file (defaults to environment variables)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let debug = args.verbose || matches!(args.command, Some(Commands::Server { debug: true, .. }));
    let log_level = if debug { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("translator_critic={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match &args.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::from_env()?,
    };

    let credential = args
        .api_key
        .map(|key| Arc::new(StaticCredential::new(key)) as Arc<dyn CredentialSource>);

    // Execute command
    match args.command {
        Some(Commands::Server { host, port, .. }) => {
            commands::handle_server(config, credential, host, port).await?;
        }
        Some(Commands::Translate { text, language }) => {
            commands::handle_translate(config, credential, text, language).await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}

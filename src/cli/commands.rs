//! CLI command definitions and handlers

use clap::Subcommand;
use std::sync::Arc;
use tracing::info;

use crate::core::client::{LlmClient, ModelGateway};
use crate::core::config::AppConfig;
use crate::core::credential::{CredentialSource, EnvCredential};
use crate::core::orchestrator::Orchestrator;

/// Commands for the translator-critic tool
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web form server
    Server {
        /// Bind address (default: config or 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Listen port (default: config or 3000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Enable debug mode
        #[arg(long)]
        debug: bool,
    },

    /// Translate one text and print the judge's evaluation
    Translate {
        /// Text to translate (empty if omitted)
        #[arg(short, long)]
        text: Option<String>,

        /// Target language (default: Английский)
        #[arg(short, long)]
        language: Option<String>,
    },
}

/// Build the HTTP gateway, preferring an explicit credential over the environment
pub fn build_gateway(
    config: &AppConfig,
    credential: Option<Arc<dyn CredentialSource>>,
) -> anyhow::Result<Arc<dyn ModelGateway>> {
    let credential: Arc<dyn CredentialSource> = match credential {
        Some(credential) => credential,
        None => Arc::new(EnvCredential::new(config.credential_var.clone())),
    };
    Ok(Arc::new(LlmClient::new(config, credential)?))
}

/// Handle server command
pub async fn handle_server(
    mut config: AppConfig,
    credential: Option<Arc<dyn CredentialSource>>,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    use crate::server::api::run_server;

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let gateway = build_gateway(&config, credential)?;

    info!("Starting HTTP server on {}:{}", config.host, config.port);
    println!("🚀 Server starting on http://{}:{}", config.host, config.port);

    run_server(config, Some(gateway)).await?;

    Ok(())
}

/// Handle one-shot translate command
pub async fn handle_translate(
    config: AppConfig,
    credential: Option<Arc<dyn CredentialSource>>,
    text: Option<String>,
    language: Option<String>,
) -> anyhow::Result<()> {
    let gateway = build_gateway(&config, credential)?;
    let orchestrator = Orchestrator::from_config(gateway, &config);

    let result = orchestrator.run_submission(text, language).await;

    println!("Оригинал: {}", result.original);
    println!("Язык: {}", result.language);
    println!("\nПеревод:\n{}", result.translated);
    println!("\nОценка:\n{}", result.evaluation);

    Ok(())
}

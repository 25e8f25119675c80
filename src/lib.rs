//! Translator & Critic - translate text with one model, grade it with another
//!
//! This library provides the outbound model gateway, the translate-then-judge
//! orchestrator and the HTML form server built on top of them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod server;

// Re-export key types for convenience
pub use core::{
    client::{LlmClient, ModelGateway},
    config::AppConfig,
    credential::{CredentialSource, EnvCredential, StaticCredential},
    errors::AppError,
    models::{ModelRequest, ModelResult, SubmissionResult},
    orchestrator::Orchestrator,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

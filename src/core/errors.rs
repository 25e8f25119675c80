//! Error types for construction and startup
//!
//! Outbound model calls never surface these: their failures are folded into
//! [`crate::core::models::ModelResult`] instead.

use thiserror::Error;

/// Errors raised while building the gateway or starting the server
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What is wrong
        message: String,
    },

    /// Invalid bind address
    #[error("Invalid address: {0}")]
    AddrError(#[from] std::net::AddrParseError),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for startup operations
pub type Result<T> = std::result::Result<T, AppError>;

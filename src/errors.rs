// src/errors.rs

//! Crate-wide error type.
//!
//! These errors cover configuration and CLI plumbing only. Failures of the
//! external control program never surface here; they are folded into a
//! [`CommandResult`](crate::exec::CommandResult) at the bridge boundary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;

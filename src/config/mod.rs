// src/config/mod.rs

//! Configuration loading and validation for vula-bridge.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk, or fall back to defaults (`loader.rs`).
//! - Validate and type the raw values (`validate.rs`).
//! - Parse the small duration strings used for timeouts (`duration.rs`).

pub mod duration;
pub mod loader;
pub mod model;
pub mod validate;

pub use duration::parse_duration;
pub use loader::{load_and_validate, load_from_path, load_with_overrides};
pub use model::{
    BridgeSettings, ConfigFile, ConfigOverrides, RawBridgeSection, RawConfigFile, StopSection,
    TerminalSection,
};

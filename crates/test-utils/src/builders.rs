#![allow(dead_code)]

use std::path::Path;

use vula_bridge::config::{ConfigFile, RawConfigFile};
use vula_bridge::types::StopMechanism;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn binary_path(mut self, path: impl AsRef<Path>) -> Self {
        self.config.bridge.binary_path = path.as_ref().display().to_string();
        self
    }

    pub fn timeout(mut self, timeout: &str) -> Self {
        self.config.bridge.timeout = timeout.to_string();
        self
    }

    pub fn stop_mechanism(mut self, mechanism: StopMechanism) -> Self {
        self.config.stop.mechanism = mechanism;
        self
    }

    pub fn service_manager(mut self, path: impl AsRef<Path>) -> Self {
        self.config.stop.service_manager = path.as_ref().display().to_string();
        self
    }

    pub fn stop_unit(mut self, unit: &str) -> Self {
        self.config.stop.unit = unit.to_string();
        self
    }

    pub fn terminal_program(mut self, path: impl AsRef<Path>) -> Self {
        self.config.terminal.program = path.as_ref().display().to_string();
        self
    }

    pub fn hold(mut self, hold: bool) -> Self {
        self.config.terminal.hold = hold;
        self
    }

    pub fn descriptor_args(mut self, args: &[&str]) -> Self {
        self.config.terminal.descriptor_args = args.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn verification_key_args(mut self, args: &[&str]) -> Self {
        self.config.terminal.verification_key_args =
            args.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

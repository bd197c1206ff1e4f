// src/config/validate.rs

use std::path::PathBuf;

use crate::config::duration::parse_duration;
use crate::config::model::{BridgeSettings, ConfigFile, RawConfigFile};
use crate::errors::{BridgeError, Result};
use crate::types::StopMechanism;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = BridgeError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        let bridge = validate_bridge(&raw)?;
        validate_stop(&raw)?;
        validate_terminal(&raw)?;
        Ok(ConfigFile::new_unchecked(bridge, raw.stop, raw.terminal))
    }
}

fn validate_bridge(cfg: &RawConfigFile) -> Result<BridgeSettings> {
    let binary_path = cfg.bridge.binary_path.trim();
    if binary_path.is_empty() {
        return Err(BridgeError::ConfigError(
            "[bridge].binary_path must not be empty".to_string(),
        ));
    }

    let timeout = parse_duration(&cfg.bridge.timeout).map_err(|e| {
        BridgeError::ConfigError(format!("invalid [bridge].timeout: {e}"))
    })?;
    if timeout.is_zero() {
        return Err(BridgeError::ConfigError(
            "[bridge].timeout must be greater than zero".to_string(),
        ));
    }

    Ok(BridgeSettings {
        binary_path: PathBuf::from(binary_path),
        timeout,
    })
}

fn validate_stop(cfg: &RawConfigFile) -> Result<()> {
    // The mechanism itself is strongly typed and checked during
    // deserialization; only the service manager fields need checking here.
    if cfg.stop.mechanism == StopMechanism::ServiceManager {
        if cfg.stop.service_manager.trim().is_empty() {
            return Err(BridgeError::ConfigError(
                "[stop].service_manager must not be empty when mechanism = \"service-manager\""
                    .to_string(),
            ));
        }
        if cfg.stop.unit.trim().is_empty() {
            return Err(BridgeError::ConfigError(
                "[stop].unit must not be empty when mechanism = \"service-manager\"".to_string(),
            ));
        }
    }
    Ok(())
}

fn validate_terminal(cfg: &RawConfigFile) -> Result<()> {
    if cfg.terminal.program.trim().is_empty() {
        return Err(BridgeError::ConfigError(
            "[terminal].program must not be empty".to_string(),
        ));
    }
    Ok(())
}

// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::types::StopMechanism;

pub const DEFAULT_BINARY_PATH: &str = "/usr/bin/vula";
pub const DEFAULT_TIMEOUT: &str = "30s";
pub const DEFAULT_SERVICE_MANAGER: &str = "/bin/systemctl";
pub const DEFAULT_STOP_UNIT: &str = "vula.slice";
pub const DEFAULT_TERMINAL: &str = "gnome-terminal";

/// Validated configuration used by the rest of the crate.
///
/// Construct it from a [`RawConfigFile`] via `TryFrom`, which performs the
/// semantic checks in `validate.rs`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub bridge: BridgeSettings,
    pub stop: StopSection,
    pub terminal: TerminalSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        bridge: BridgeSettings,
        stop: StopSection,
        terminal: TerminalSection,
    ) -> Self {
        Self {
            bridge,
            stop,
            terminal,
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(
            BridgeSettings::default(),
            StopSection::default(),
            TerminalSection::default(),
        )
    }
}

/// Typed `[bridge]` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeSettings {
    /// Filesystem path to the `vula` control executable.
    pub binary_path: PathBuf,
    /// Upper bound for wait-and-capture invocations.
    pub timeout: Duration,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            binary_path: PathBuf::from(DEFAULT_BINARY_PATH),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [bridge]
/// binary_path = "/usr/local/bin/vula"
/// timeout = "10s"
///
/// [stop]
/// mechanism = "control-binary"
///
/// [terminal]
/// program = "gnome-terminal"
/// descriptor_args = ["--maximize"]
/// ```
///
/// All sections are optional and have defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    #[serde(default)]
    pub bridge: RawBridgeSection,

    #[serde(default)]
    pub stop: StopSection,

    #[serde(default)]
    pub terminal: TerminalSection,
}

/// `[bridge]` section, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBridgeSection {
    #[serde(default = "default_binary_path")]
    pub binary_path: String,

    /// Duration string such as `"30s"` or `"500ms"`.
    #[serde(default = "default_timeout")]
    pub timeout: String,
}

fn default_binary_path() -> String {
    DEFAULT_BINARY_PATH.to_string()
}

fn default_timeout() -> String {
    DEFAULT_TIMEOUT.to_string()
}

impl Default for RawBridgeSection {
    fn default() -> Self {
        Self {
            binary_path: default_binary_path(),
            timeout: default_timeout(),
        }
    }
}

/// `[stop]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StopSection {
    #[serde(default)]
    pub mechanism: StopMechanism,

    /// Service manager executable, used with `mechanism = "service-manager"`.
    #[serde(default = "default_service_manager")]
    pub service_manager: String,

    /// Unit handed to `<service_manager> stop`.
    #[serde(default = "default_stop_unit")]
    pub unit: String,
}

fn default_service_manager() -> String {
    DEFAULT_SERVICE_MANAGER.to_string()
}

fn default_stop_unit() -> String {
    DEFAULT_STOP_UNIT.to_string()
}

impl Default for StopSection {
    fn default() -> Self {
        Self {
            mechanism: StopMechanism::default(),
            service_manager: default_service_manager(),
            unit: default_stop_unit(),
        }
    }
}

/// `[terminal]` section, used by the interactive sub-mode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TerminalSection {
    /// Terminal emulator launcher.
    #[serde(default = "default_terminal")]
    pub program: String,

    /// Keep the shell open after the inner command finishes (`; exec bash`).
    #[serde(default = "default_hold")]
    pub hold: bool,

    /// Extra launcher arguments for the verification key window.
    #[serde(default)]
    pub verification_key_args: Vec<String>,

    /// Extra launcher arguments for the descriptor window.
    #[serde(default = "default_descriptor_args")]
    pub descriptor_args: Vec<String>,
}

fn default_terminal() -> String {
    DEFAULT_TERMINAL.to_string()
}

fn default_hold() -> bool {
    true
}

fn default_descriptor_args() -> Vec<String> {
    vec!["--maximize".to_string()]
}

impl Default for TerminalSection {
    fn default() -> Self {
        Self {
            program: default_terminal(),
            hold: default_hold(),
            verification_key_args: Vec::new(),
            descriptor_args: default_descriptor_args(),
        }
    }
}

/// Values given on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub binary_path: Option<String>,
    pub timeout: Option<String>,
    pub stop_mechanism: Option<StopMechanism>,
}

impl ConfigOverrides {
    /// Apply the overrides to a raw config before validation.
    pub fn apply(&self, raw: &mut RawConfigFile) {
        if let Some(ref path) = self.binary_path {
            raw.bridge.binary_path = path.clone();
        }
        if let Some(ref timeout) = self.timeout {
            raw.bridge.timeout = timeout.clone();
        }
        if let Some(mechanism) = self.stop_mechanism {
            raw.stop.mechanism = mechanism;
        }
    }
}

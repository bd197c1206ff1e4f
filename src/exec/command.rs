// src/exec/command.rs

//! The fixed set of control actions and their resolved argv.
//!
//! The action -> argv mapping is static. Configuration only supplies the
//! executable paths (`binary_path`, the service manager) and the unit name;
//! nothing here is assembled from user input.

use std::fmt;
use std::path::PathBuf;

use crate::config::ConfigFile;
use crate::types::{InvocationMode, StopMechanism};

/// A control action offered by the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlCommand {
    Start,
    Stop,
    Repair,
    Rediscover,
    Status,
    ShowVerificationKey,
    ShowDescriptor,
}

impl ControlCommand {
    pub const ALL: [ControlCommand; 7] = [
        ControlCommand::Start,
        ControlCommand::Stop,
        ControlCommand::Repair,
        ControlCommand::Rediscover,
        ControlCommand::Status,
        ControlCommand::ShowVerificationKey,
        ControlCommand::ShowDescriptor,
    ];

    /// Short stable name, used in logs and on the CLI.
    pub fn name(self) -> &'static str {
        match self {
            ControlCommand::Start => "start",
            ControlCommand::Stop => "stop",
            ControlCommand::Repair => "repair",
            ControlCommand::Rediscover => "rediscover",
            ControlCommand::Status => "status",
            ControlCommand::ShowVerificationKey => "show-key",
            ControlCommand::ShowDescriptor => "show-descriptor",
        }
    }

    /// Start and Stop are fire-and-forget; everything else is awaited.
    pub fn mode(self) -> InvocationMode {
        match self {
            ControlCommand::Start | ControlCommand::Stop => InvocationMode::Detached,
            _ => InvocationMode::Capture,
        }
    }

    /// Whether the command has a terminal-window form.
    pub fn is_interactive(self) -> bool {
        matches!(
            self,
            ControlCommand::ShowVerificationKey | ControlCommand::ShowDescriptor
        )
    }

    /// Arguments passed to the control binary.
    fn control_args(self) -> &'static [&'static str] {
        match self {
            ControlCommand::Start => &["start"],
            ControlCommand::Stop => &["stop"],
            ControlCommand::Repair => &["repair"],
            ControlCommand::Rediscover => &["rediscover"],
            ControlCommand::Status => &["status"],
            ControlCommand::ShowVerificationKey => &["verify", "my-vk"],
            ControlCommand::ShowDescriptor => &["verify", "my-descriptor"],
        }
    }
}

impl fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully resolved external process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub mode: InvocationMode,
}

impl Invocation {
    /// Resolve the argv for `command` under `cfg`.
    pub fn resolve(command: ControlCommand, cfg: &ConfigFile) -> Self {
        let mode = command.mode();

        if command == ControlCommand::Stop && cfg.stop.mechanism == StopMechanism::ServiceManager {
            return Self {
                program: PathBuf::from(&cfg.stop.service_manager),
                args: vec!["stop".to_string(), cfg.stop.unit.clone()],
                mode,
            };
        }

        Self {
            program: cfg.bridge.binary_path.clone(),
            args: command
                .control_args()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            mode,
        }
    }

    /// Single-line, shell-quoted rendering (`/usr/bin/vula verify my-vk`).
    pub fn command_line(&self) -> String {
        let program = self.program.to_string_lossy();
        std::iter::once(program.as_ref())
            .chain(self.args.iter().map(String::as_str))
            .map(shell_quote)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Quote a word for `sh`, leaving plain words untouched.
pub fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_./:=@%+,-".contains(c));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

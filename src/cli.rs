// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::parse_duration;
use crate::exec::ControlCommand;
use crate::types::StopMechanism;

/// Command-line arguments for `vula-bridge`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "vula-bridge",
    version,
    about = "Start, stop and query the vula daemon, relaying its output.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `VulaBridge.toml` in the current working directory if it
    /// exists, otherwise built-in defaults.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Path to the vula control executable (overrides `[bridge].binary_path`).
    #[arg(long, value_name = "PATH", global = true)]
    pub binary_path: Option<String>,

    /// Timeout for commands whose output is captured, e.g. `10s`
    /// (overrides `[bridge].timeout`).
    #[arg(long, value_name = "DURATION", global = true)]
    pub timeout: Option<String>,

    /// How `stop` reaches the daemon: `service-manager` or `control-binary`
    /// (overrides `[stop].mechanism`).
    #[arg(long, value_name = "MECHANISM", global = true)]
    pub stop_mechanism: Option<StopMechanism>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `VULA_BRIDGE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    /// Print the resolved invocation but don't run anything.
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub action: Action,
}

/// Indicator actions.
#[derive(Debug, Clone, Subcommand)]
pub enum Action {
    /// Start the vula daemon (fire-and-forget).
    Start,
    /// Stop the vula daemon (fire-and-forget).
    Stop,
    /// Switch the daemon on or off.
    Toggle {
        #[arg(value_enum)]
        state: ToggleState,
    },
    /// Run `vula repair`.
    Repair,
    /// Run `vula rediscover`.
    Rediscover,
    /// Run `vula status` and print its output.
    Status {
        /// Re-run every DURATION (e.g. `5s`) until Ctrl-C.
        #[arg(long, value_name = "DURATION", value_parser = parse_duration_arg)]
        watch: Option<Duration>,
    },
    /// Show this host's verification key in a terminal window.
    ShowKey,
    /// Show this host's descriptor in a terminal window.
    ShowDescriptor,
}

impl Action {
    /// The control command this action runs.
    pub fn command(&self) -> ControlCommand {
        match self {
            Action::Start => ControlCommand::Start,
            Action::Stop => ControlCommand::Stop,
            Action::Toggle { state } => match state {
                ToggleState::On => ControlCommand::Start,
                ToggleState::Off => ControlCommand::Stop,
            },
            Action::Repair => ControlCommand::Repair,
            Action::Rediscover => ControlCommand::Rediscover,
            Action::Status { .. } => ControlCommand::Status,
            Action::ShowKey => ControlCommand::ShowVerificationKey,
            Action::ShowDescriptor => ControlCommand::ShowDescriptor,
        }
    }
}

/// Target state for `toggle`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ToggleState {
    On,
    Off,
}

impl ToggleState {
    pub fn is_on(self) -> bool {
        self == ToggleState::On
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn parse_duration_arg(s: &str) -> Result<Duration, String> {
    let d = parse_duration(s)?;
    if d.is_zero() {
        return Err("duration must be greater than zero".to_string());
    }
    Ok(d)
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

// src/exec/bridge.rs

use tracing::{debug, warn};

use crate::config::ConfigFile;
use crate::exec::backend::{BridgeFuture, ControlBackend};
use crate::exec::command::{ControlCommand, Invocation};
use crate::exec::result::{CommandError, CommandResult};
use crate::exec::runner::{run_captured, spawn_detached};
use crate::exec::terminal::{ShellTerminalLauncher, TerminalLauncher, TerminalRequest};
use crate::types::{FailureKind, InvocationMode};

/// Runs control commands against the configured `vula` executable.
///
/// One call starts exactly one external process (or one terminal launch).
/// There are no retries and no deduplication of overlapping calls.
#[derive(Debug, Clone)]
pub struct CommandBridge<L: TerminalLauncher = ShellTerminalLauncher> {
    config: ConfigFile,
    launcher: L,
}

impl CommandBridge<ShellTerminalLauncher> {
    /// Bridge using the terminal settings from `config`.
    pub fn from_config(config: ConfigFile) -> Self {
        let launcher = ShellTerminalLauncher::from_config(&config.terminal);
        Self::new(config, launcher)
    }
}

impl<L: TerminalLauncher> CommandBridge<L> {
    pub fn new(config: ConfigFile, launcher: L) -> Self {
        Self { config, launcher }
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Resolved argv for `command`.
    pub fn invocation(&self, command: ControlCommand) -> Invocation {
        Invocation::resolve(command, &self.config)
    }

    /// Run `command` in its own mode (detached or wait-and-capture).
    pub async fn execute(&self, command: ControlCommand) -> CommandResult {
        let invocation = self.invocation(command);
        debug!(command = command.name(), invocation = %invocation, "executing control command");

        match invocation.mode {
            InvocationMode::Detached => spawn_detached(command, &invocation),
            InvocationMode::Capture => {
                run_captured(command, &invocation, self.config.bridge.timeout).await
            }
        }
    }

    /// Open a terminal window running `command`.
    ///
    /// Success only means the terminal launched; the inner command is not
    /// awaited. Commands without an interactive form fail with
    /// `LaunchFailure`.
    pub async fn execute_interactive(&self, command: ControlCommand) -> CommandResult {
        if !command.is_interactive() {
            warn!(command = command.name(), "command has no interactive form");
            return CommandError::new(
                FailureKind::LaunchFailure,
                format!("'{command}' cannot be run in a terminal window"),
            )
            .into();
        }

        let request = self.terminal_request(command);
        debug!(command = command.name(), line = %request.command_line, "launching terminal");

        match self.launcher.launch(&request) {
            Ok(()) => CommandResult::success(None, String::new()),
            Err(err) => err.into(),
        }
    }

    /// Terminal request for an interactive command.
    pub fn terminal_request(&self, command: ControlCommand) -> TerminalRequest {
        let extra_args = match command {
            ControlCommand::ShowDescriptor => self.config.terminal.descriptor_args.clone(),
            ControlCommand::ShowVerificationKey => {
                self.config.terminal.verification_key_args.clone()
            }
            _ => Vec::new(),
        };

        TerminalRequest {
            command,
            command_line: self.invocation(command).command_line(),
            extra_args,
        }
    }
}

impl<L: TerminalLauncher> ControlBackend for CommandBridge<L> {
    fn execute(&self, command: ControlCommand) -> BridgeFuture<'_> {
        Box::pin(CommandBridge::execute(self, command))
    }

    fn execute_interactive(&self, command: ControlCommand) -> BridgeFuture<'_> {
        Box::pin(CommandBridge::execute_interactive(self, command))
    }
}

// src/exec/terminal.rs

//! Terminal-window launches for the interactive sub-mode.
//!
//! The bridge does not know how to open a terminal; it hands a
//! [`TerminalRequest`] to a [`TerminalLauncher`]. [`ShellTerminalLauncher`]
//! is the default, producing
//! `<program> [extra args] -- bash -c "<command line>; exec bash"`.

use std::path::PathBuf;

use crate::config::TerminalSection;
use crate::exec::command::{ControlCommand, Invocation};
use crate::exec::result::CommandError;
use crate::exec::runner::launch_detached;
use crate::types::InvocationMode;

/// What to show in a terminal window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalRequest {
    pub command: ControlCommand,
    /// Shell-quoted control command line to run inside the terminal.
    pub command_line: String,
    /// Launcher arguments placed before `--` (e.g. `--maximize`).
    pub extra_args: Vec<String>,
}

/// Strategy for opening a terminal window that runs a command.
///
/// Implementations must return once the terminal process is launched; they
/// must not wait for the inner command.
pub trait TerminalLauncher: Send + Sync {
    fn launch(&self, request: &TerminalRequest) -> Result<(), CommandError>;
}

/// Launches `program -- bash -c "<cmd>; exec bash"`.
#[derive(Debug, Clone)]
pub struct ShellTerminalLauncher {
    program: PathBuf,
    hold: bool,
}

impl ShellTerminalLauncher {
    pub fn new(program: impl Into<PathBuf>, hold: bool) -> Self {
        Self {
            program: program.into(),
            hold,
        }
    }

    pub fn from_config(cfg: &TerminalSection) -> Self {
        Self::new(&cfg.program, cfg.hold)
    }

    /// The terminal process invocation for `request`.
    pub fn invocation(&self, request: &TerminalRequest) -> Invocation {
        let script = if self.hold {
            format!("{}; exec bash", request.command_line)
        } else {
            request.command_line.clone()
        };

        let mut args = request.extra_args.clone();
        args.extend(["--", "bash", "-c"].map(String::from));
        args.push(script);

        Invocation {
            program: self.program.clone(),
            args,
            mode: InvocationMode::Detached,
        }
    }
}

impl TerminalLauncher for ShellTerminalLauncher {
    fn launch(&self, request: &TerminalRequest) -> Result<(), CommandError> {
        launch_detached(request.command.name(), &self.invocation(request))
    }
}

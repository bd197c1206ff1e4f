// src/exec/mod.rs

//! Process execution layer (the command bridge).
//!
//! - [`command`] maps each [`ControlCommand`] to a fixed argv.
//! - [`runner`] spawns processes in detached or wait-and-capture mode.
//! - [`terminal`] opens terminal windows for the interactive sub-mode.
//! - [`bridge`] ties these together behind `execute` / `execute_interactive`.
//! - [`backend`] provides the `ControlBackend` trait that the indicator uses,
//!   and which tests can replace with a fake implementation.

pub mod backend;
pub mod bridge;
pub mod command;
pub mod result;
pub mod runner;
pub mod terminal;

pub use backend::{BridgeFuture, ControlBackend};
pub use bridge::CommandBridge;
pub use command::{ControlCommand, Invocation};
pub use result::{CommandError, CommandResult};
pub use terminal::{ShellTerminalLauncher, TerminalLauncher, TerminalRequest};

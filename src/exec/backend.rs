// src/exec/backend.rs

//! Pluggable bridge abstraction.
//!
//! The indicator talks to a `ControlBackend` instead of a concrete
//! [`CommandBridge`](crate::exec::CommandBridge), so tests can swap in a fake
//! that returns scripted results without spawning processes.

use std::future::Future;
use std::pin::Pin;

use crate::exec::command::ControlCommand;
use crate::exec::result::CommandResult;

/// Boxed future returned by [`ControlBackend`] methods.
pub type BridgeFuture<'a> = Pin<Box<dyn Future<Output = CommandResult> + Send + 'a>>;

/// Trait abstracting how control commands are executed.
///
/// Both methods are infallible by contract: every failure is reported as an
/// unsuccessful [`CommandResult`].
pub trait ControlBackend: Send {
    fn execute(&self, command: ControlCommand) -> BridgeFuture<'_>;

    fn execute_interactive(&self, command: ControlCommand) -> BridgeFuture<'_>;
}

// src/indicator/runtime.rs

use std::fmt;

use tracing::{info, warn};

use crate::exec::{CommandResult, ControlBackend, ControlCommand};
use crate::indicator::core::{DisplayState, StateChange};
use crate::indicator::messages::Notification;

/// Everything the host needs after one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub result: CommandResult,
    pub notification: Notification,
    pub change: StateChange,
}

/// Async shell around [`DisplayState`].
///
/// Owns the bridge and the display state; the state is only ever mutated
/// here, on the task that drives the indicator.
pub struct Indicator<B: ControlBackend> {
    backend: B,
    state: DisplayState,
}

impl<B: ControlBackend> fmt::Debug for Indicator<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Indicator")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<B: ControlBackend> Indicator<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: DisplayState::new(),
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Switch item: `true` starts the daemon, `false` stops it.
    pub async fn toggle(&mut self, on: bool) -> ActionOutcome {
        let command = if on {
            ControlCommand::Start
        } else {
            ControlCommand::Stop
        };
        self.activate(command).await
    }

    /// Run one menu action and fold its result into the display state.
    ///
    /// Verification key and descriptor open in a terminal window; every
    /// other action goes through `execute`.
    pub async fn activate(&mut self, command: ControlCommand) -> ActionOutcome {
        let result = if command.is_interactive() {
            self.backend.execute_interactive(command).await
        } else {
            self.backend.execute(command).await
        };

        let step = self.state.step(command, &result);

        if result.succeeded() {
            info!(
                command = command.name(),
                change = ?step.change,
                enabled = self.state.enabled(),
                "action completed"
            );
        } else {
            warn!(
                command = command.name(),
                kind = ?result.failure_kind(),
                error = result.error_message().unwrap_or_default(),
                "action failed; display state unchanged"
            );
        }

        ActionOutcome {
            result,
            notification: step.notification,
            change: step.change,
        }
    }
}

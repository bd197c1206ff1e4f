// src/indicator/core.rs

//! Pure display-state machine.
//!
//! Consumes `(ControlCommand, CommandResult)` pairs and produces the updated
//! state plus the notification to show. No Tokio, no processes, no IO.
//!
//! States: Disabled (initial) and Enabled.
//! - Disabled -> Enabled on a successful `Start`.
//! - Enabled -> Disabled on a successful `Stop`.
//! - Failed results never change `enabled`.

use crate::exec::{CommandResult, ControlCommand};
use crate::indicator::messages::Notification;
use crate::indicator::{ICON_ACTIVE, ICON_IDLE};

/// The UI-visible state: toggle/icon plus the most recent message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    enabled: bool,
    last_message: String,
}

/// Effect of one step on `enabled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    Enabled,
    Disabled,
    Unchanged,
}

/// Result of feeding one command outcome into the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorStep {
    pub notification: Notification,
    pub change: StateChange,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Text of the last notification produced, empty before any action.
    pub fn last_message(&self) -> &str {
        &self.last_message
    }

    pub fn icon_name(&self) -> &'static str {
        if self.enabled { ICON_ACTIVE } else { ICON_IDLE }
    }

    /// Apply the outcome of `command`.
    pub fn step(&mut self, command: ControlCommand, result: &CommandResult) -> IndicatorStep {
        let notification = Notification::for_result(command, result);
        self.last_message = notification.body.clone();

        let change = match (command, result.succeeded(), self.enabled) {
            (ControlCommand::Start, true, false) => {
                self.enabled = true;
                StateChange::Enabled
            }
            (ControlCommand::Stop, true, true) => {
                self.enabled = false;
                StateChange::Disabled
            }
            _ => StateChange::Unchanged,
        };

        IndicatorStep {
            notification,
            change,
        }
    }
}

// src/indicator/messages.rs

//! User-facing text for each action outcome.

use std::fmt;

use crate::exec::{CommandResult, ControlCommand};
use crate::indicator::ansi::strip_ansi;

pub const NOTIFICATION_TITLE: &str = "Vula Notification";

/// A notification for the host to render. The bridge never renders these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            title: NOTIFICATION_TITLE.to_string(),
            body: body.into(),
        }
    }

    /// Notification for the outcome of `command`.
    ///
    /// Successful runs relay the captured output (ANSI escapes stripped) or,
    /// when there is none, a fixed confirmation. Failures wrap the error
    /// message.
    pub fn for_result(command: ControlCommand, result: &CommandResult) -> Self {
        if result.succeeded() {
            let output = strip_ansi(result.output());
            let output = output.trim();
            if output.is_empty() {
                Self::new(confirmation(command))
            } else {
                Self::new(output)
            }
        } else {
            let reason = result.error_message().unwrap_or("unknown error");
            Self::new(format!(
                "An error occurred while {}: {reason}",
                activity(command)
            ))
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.body)
    }
}

fn confirmation(command: ControlCommand) -> &'static str {
    match command {
        ControlCommand::Start => "Vula started",
        ControlCommand::Stop => "Vula stopped",
        ControlCommand::Repair => "Vula repaired",
        ControlCommand::Rediscover => "Rediscovery requested",
        ControlCommand::Status => "Vula reported no status",
        ControlCommand::ShowVerificationKey => "Verification key opened in a terminal",
        ControlCommand::ShowDescriptor => "Descriptor opened in a terminal",
    }
}

fn activity(command: ControlCommand) -> &'static str {
    match command {
        ControlCommand::Start => "starting Vula",
        ControlCommand::Stop => "stopping Vula",
        ControlCommand::Repair => "repairing Vula",
        ControlCommand::Rediscover => "rediscovering",
        ControlCommand::Status => "getting Vula status",
        ControlCommand::ShowVerificationKey => "getting Vula verification-key",
        ControlCommand::ShowDescriptor => "getting Vula descriptor",
    }
}

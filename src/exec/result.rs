// src/exec/result.rs

use std::fmt;

use crate::types::FailureKind;

/// Why an invocation failed, with a message fit for showing to a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandError {
    kind: FailureKind,
    message: String,
}

impl CommandError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CommandError {}

/// Normalized outcome of one control command invocation.
///
/// Created once per invocation and never mutated afterwards; fields are only
/// reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    succeeded: bool,
    exit_code: Option<i32>,
    output: String,
    error: Option<CommandError>,
}

impl CommandResult {
    pub fn success(exit_code: Option<i32>, output: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            exit_code,
            output: output.into(),
            error: None,
        }
    }

    pub fn failure(error: CommandError) -> Self {
        Self::failure_with_output(error, None, String::new())
    }

    /// A failure that still carries whatever the process printed.
    pub fn failure_with_output(
        error: CommandError,
        exit_code: Option<i32>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            succeeded: false,
            exit_code,
            output: output.into(),
            error: Some(error),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    /// Exit code of a waited-for process. `None` for detached spawns, launch
    /// failures, timeouts and signal terminations.
    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    /// Captured stdout, verbatim. Empty for detached spawns.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn error(&self) -> Option<&CommandError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(CommandError::message)
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.error.as_ref().map(CommandError::kind)
    }
}

impl From<CommandError> for CommandResult {
    fn from(error: CommandError) -> Self {
        CommandResult::failure(error)
    }
}

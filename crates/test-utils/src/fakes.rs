use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use vula_bridge::exec::{
    BridgeFuture, CommandError, CommandResult, ControlBackend, ControlCommand, TerminalLauncher,
    TerminalRequest,
};
use vula_bridge::types::FailureKind;

/// One call received by [`FakeBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Call {
    pub command: ControlCommand,
    pub interactive: bool,
}

/// A fake bridge that:
/// - records every call
/// - returns a scripted result per command (success with no output otherwise).
///
/// Clones share the same call log and script.
#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    calls: Arc<Mutex<Vec<Call>>>,
    results: Arc<Mutex<HashMap<ControlCommand, CommandResult>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, command: ControlCommand, result: CommandResult) -> &Self {
        self.results.lock().unwrap().insert(command, result);
        self
    }

    pub fn fail(&self, command: ControlCommand, kind: FailureKind, message: &str) -> &Self {
        self.respond(command, CommandError::new(kind, message).into())
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, command: ControlCommand, interactive: bool) -> CommandResult {
        self.calls.lock().unwrap().push(Call {
            command,
            interactive,
        });
        self.results
            .lock()
            .unwrap()
            .get(&command)
            .cloned()
            .unwrap_or_else(|| CommandResult::success(None, String::new()))
    }
}

impl ControlBackend for FakeBackend {
    fn execute(&self, command: ControlCommand) -> BridgeFuture<'_> {
        let result = self.record(command, false);
        Box::pin(async move { result })
    }

    fn execute_interactive(&self, command: ControlCommand) -> BridgeFuture<'_> {
        let result = self.record(command, true);
        Box::pin(async move { result })
    }
}

/// A terminal launcher that records requests instead of opening windows.
#[derive(Debug, Clone, Default)]
pub struct RecordingLauncher {
    requests: Arc<Mutex<Vec<TerminalRequest>>>,
    failure: Option<CommandError>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            requests: Arc::default(),
            failure: Some(CommandError::new(FailureKind::LaunchFailure, message)),
        }
    }

    pub fn requests(&self) -> Vec<TerminalRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl TerminalLauncher for RecordingLauncher {
    fn launch(&self, request: &TerminalRequest) -> Result<(), CommandError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

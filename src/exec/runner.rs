// src/exec/runner.rs

//! Process runners for the two invocation modes.
//!
//! Neither runner returns an `Err`: every failure is classified into a
//! [`CommandResult`] so callers never have to handle a process error.

use std::process::{Output, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

use crate::exec::command::{ControlCommand, Invocation};
use crate::exec::result::{CommandError, CommandResult};
use crate::types::FailureKind;

/// Fire-and-forget: spawn `invocation` and return as soon as it launched.
///
/// The child is reaped by a background task that logs its exit status.
pub fn spawn_detached(command: ControlCommand, invocation: &Invocation) -> CommandResult {
    match launch_detached(command.name(), invocation) {
        Ok(()) => CommandResult::success(None, String::new()),
        Err(err) => err.into(),
    }
}

/// Spawn `invocation` with all stdio detached and reap it in the background.
///
/// Shared by detached control commands and terminal launches. `label` is only
/// used for logging.
pub fn launch_detached(label: &'static str, invocation: &Invocation) -> Result<(), CommandError> {
    let mut cmd = build_command(invocation);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    let mut child = launch(&mut cmd, invocation).map_err(|err| {
        let message = format!("{err:#}");
        warn!(command = label, error = %message, "failed to launch detached process");
        CommandError::new(FailureKind::LaunchFailure, message)
    })?;

    info!(
        command = label,
        program = %invocation.program.display(),
        pid = ?child.id(),
        "spawned detached process"
    );

    tokio::spawn(async move {
        match child.wait().await {
            Ok(status) => debug!(
                command = label,
                exit_code = ?status.code(),
                success = status.success(),
                "detached process exited"
            ),
            Err(e) => warn!(command = label, error = %e, "failed to reap detached process"),
        }
    });

    Ok(())
}

/// Wait-and-capture: run `invocation`, wait at most `limit`, capture stdout.
///
/// The child runs in its own process group. On timeout, or when the returned
/// future is dropped, the whole group is killed so nothing the control
/// command started outlives it; `kill_on_drop` covers the child itself.
pub async fn run_captured(
    command: ControlCommand,
    invocation: &Invocation,
    limit: Duration,
) -> CommandResult {
    let started = Instant::now();
    info!(
        command = command.name(),
        program = %invocation.program.display(),
        "running control command"
    );

    let mut cmd = build_command(invocation);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    #[cfg(unix)]
    cmd.process_group(0);

    let child = match launch(&mut cmd, invocation) {
        Ok(child) => child,
        Err(err) => {
            let message = format!("{err:#}");
            warn!(command = command.name(), error = %message, "failed to launch control command");
            return CommandError::new(FailureKind::LaunchFailure, message).into();
        }
    };
    let mut group = ProcessGroupGuard::new(command, child.id());

    let output = match tokio::time::timeout(limit, child.wait_with_output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            warn!(command = command.name(), error = %e, "failed waiting for control command");
            return CommandError::new(
                FailureKind::LaunchFailure,
                format!("waiting for '{}': {e}", invocation.command_line()),
            )
            .into();
        }
        Err(_elapsed) => {
            warn!(
                command = command.name(),
                timeout_ms = limit.as_millis() as u64,
                "control command timed out; killing process group"
            );
            drop(group);
            return CommandError::new(
                FailureKind::Timeout,
                format!(
                    "'{}' did not finish within {:?}",
                    invocation.command_line(),
                    limit
                ),
            )
            .into();
        }
    };
    group.disarm();

    let result = classify(invocation, output);
    info!(
        command = command.name(),
        exit_code = ?result.exit_code(),
        success = result.succeeded(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "control command finished"
    );
    result
}

/// Turn a finished process into a result.
///
/// A failing exit status takes precedence over decoding; the stdout of a
/// failed run is kept (lossily decoded) for diagnostics.
fn classify(invocation: &Invocation, output: Output) -> CommandResult {
    let code = output.status.code();

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);

        let mut message = match code {
            Some(c) => format!("'{}' exited with status {c}", invocation.command_line()),
            None => format!("'{}' was terminated by a signal", invocation.command_line()),
        };
        let detail = stderr.trim();
        if !detail.is_empty() {
            message.push_str(": ");
            message.push_str(detail);
        }

        return CommandResult::failure_with_output(
            CommandError::new(FailureKind::NonZeroExit, message),
            code,
            stdout,
        );
    }

    match String::from_utf8(output.stdout) {
        Ok(text) => CommandResult::success(code, text),
        Err(e) => CommandResult::failure_with_output(
            CommandError::new(
                FailureKind::DecodeFailure,
                format!(
                    "output of '{}' is not valid UTF-8: {e}",
                    invocation.command_line()
                ),
            ),
            code,
            String::new(),
        ),
    }
}

/// Kills the process group led by a capture child when dropped, unless the
/// child finished normally first.
struct ProcessGroupGuard {
    command: ControlCommand,
    pgid: Option<u32>,
}

impl ProcessGroupGuard {
    fn new(command: ControlCommand, pgid: Option<u32>) -> Self {
        Self { command, pgid }
    }

    fn disarm(&mut self) {
        self.pgid = None;
    }
}

impl Drop for ProcessGroupGuard {
    fn drop(&mut self) {
        if let Some(pgid) = self.pgid.take() {
            kill_process_group(self.command, pgid);
        }
    }
}

#[cfg(unix)]
fn kill_process_group(command: ControlCommand, pgid: u32) {
    // SAFETY: killpg only sends a signal; `pgid` is the group created for our
    // own child via `process_group(0)`.
    let rc = unsafe { libc::killpg(pgid as libc::pid_t, libc::SIGKILL) };
    if rc == 0 {
        debug!(command = command.name(), pgid, "killed process group");
    } else {
        let err = std::io::Error::last_os_error();
        debug!(command = command.name(), pgid, error = %err, "process group already gone");
    }
}

#[cfg(not(unix))]
fn kill_process_group(_command: ControlCommand, _pgid: u32) {}

fn build_command(invocation: &Invocation) -> Command {
    let mut cmd = Command::new(&invocation.program);
    cmd.args(&invocation.args);
    cmd
}

fn launch(cmd: &mut Command, invocation: &Invocation) -> Result<Child> {
    cmd.spawn()
        .with_context(|| format!("launching '{}'", invocation.command_line()))
}

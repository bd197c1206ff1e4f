use std::str::FromStr;

use serde::Deserialize;

/// How the `stop` action reaches the daemon.
///
/// - `ServiceManager`: `<service_manager> stop <unit>` (e.g.
///   `/bin/systemctl stop vula.slice`). This is the default.
/// - `ControlBinary`: `<binary_path> stop`.
///
/// `systemctl` and `binary` are accepted as shorthands, both in the config
/// file and on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StopMechanism {
    #[default]
    #[serde(alias = "systemctl")]
    ServiceManager,
    #[serde(alias = "binary")]
    ControlBinary,
}

impl FromStr for StopMechanism {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "service-manager" | "systemctl" => Ok(StopMechanism::ServiceManager),
            "control-binary" | "binary" => Ok(StopMechanism::ControlBinary),
            other => Err(format!(
                "invalid stop mechanism: {other} (expected \"service-manager\" or \"control-binary\")"
            )),
        }
    }
}

/// How a resolved invocation is run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationMode {
    /// Spawn and return immediately; output is not captured.
    Detached,
    /// Spawn, wait (bounded by the configured timeout) and capture stdout.
    Capture,
}

/// Classification of a failed invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The executable could not be started (missing, not executable, ...).
    LaunchFailure,
    /// The process ran but exited unsuccessfully.
    NonZeroExit,
    /// Captured stdout was not valid UTF-8.
    DecodeFailure,
    /// The process did not finish within the configured timeout.
    Timeout,
}

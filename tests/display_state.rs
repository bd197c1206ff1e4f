// tests/display_state.rs

mod common;
use crate::common::fakes::{Call, FakeBackend};
use crate::common::init_tracing;

use vula_bridge::exec::{CommandError, CommandResult, ControlCommand};
use vula_bridge::indicator::{
    DisplayState, Extension, ICON_ACTIVE, ICON_IDLE, Indicator, StateChange,
};
use vula_bridge::types::FailureKind;

fn ok() -> CommandResult {
    CommandResult::success(None, String::new())
}

fn launch_failure(message: &str) -> CommandResult {
    CommandError::new(FailureKind::LaunchFailure, message).into()
}

#[test]
fn initial_state_is_disabled() {
    let state = DisplayState::new();
    assert!(!state.enabled());
    assert_eq!(state.last_message(), "");
    assert_eq!(state.icon_name(), ICON_IDLE);
}

#[test]
fn start_then_stop_round_trips_the_toggle() {
    let mut state = DisplayState::new();

    let step = state.step(ControlCommand::Start, &ok());
    assert_eq!(step.change, StateChange::Enabled);
    assert!(state.enabled());
    assert_eq!(state.icon_name(), ICON_ACTIVE);
    assert_eq!(state.last_message(), "Vula started");

    let step = state.step(ControlCommand::Stop, &ok());
    assert_eq!(step.change, StateChange::Disabled);
    assert!(!state.enabled());
    assert_eq!(state.last_message(), "Vula stopped");
}

#[test]
fn failed_start_leaves_state_disabled() {
    let mut state = DisplayState::new();

    let step = state.step(ControlCommand::Start, &launch_failure("permission denied"));

    assert_eq!(step.change, StateChange::Unchanged);
    assert!(!state.enabled());
    assert_eq!(
        state.last_message(),
        "An error occurred while starting Vula: permission denied"
    );
    assert_eq!(step.notification.body, state.last_message());
}

#[test]
fn failed_stop_leaves_state_enabled() {
    let mut state = DisplayState::new();
    state.step(ControlCommand::Start, &ok());

    let step = state.step(ControlCommand::Stop, &launch_failure("no systemctl"));

    assert_eq!(step.change, StateChange::Unchanged);
    assert!(state.enabled());
}

#[test]
fn repeated_start_is_unchanged() {
    let mut state = DisplayState::new();
    state.step(ControlCommand::Start, &ok());

    let step = state.step(ControlCommand::Start, &ok());

    assert_eq!(step.change, StateChange::Unchanged);
    assert!(state.enabled());
}

#[test]
fn status_output_becomes_the_message_without_ansi() {
    let mut state = DisplayState::new();
    let result = CommandResult::success(Some(0), "\u{1b}[0;32mactive\u{1b}[0m: 3 peers\n");

    let step = state.step(ControlCommand::Status, &result);

    assert_eq!(step.change, StateChange::Unchanged);
    assert_eq!(state.last_message(), "active: 3 peers");
    // The result itself keeps the raw bytes.
    assert!(result.output().starts_with('\u{1b}'));
}

#[test]
fn empty_output_falls_back_to_confirmation() {
    let mut state = DisplayState::new();
    state.step(ControlCommand::Repair, &CommandResult::success(Some(0), "\n"));
    assert_eq!(state.last_message(), "Vula repaired");
}

#[tokio::test]
async fn indicator_routes_interactive_commands_to_the_terminal() {
    init_tracing();
    let backend = FakeBackend::new();
    let mut indicator = Indicator::new(backend.clone());

    indicator.activate(ControlCommand::ShowVerificationKey).await;
    indicator.activate(ControlCommand::ShowDescriptor).await;
    indicator.activate(ControlCommand::Status).await;

    assert_eq!(
        backend.calls(),
        vec![
            Call {
                command: ControlCommand::ShowVerificationKey,
                interactive: true
            },
            Call {
                command: ControlCommand::ShowDescriptor,
                interactive: true
            },
            Call {
                command: ControlCommand::Status,
                interactive: false
            },
        ]
    );
}

#[tokio::test]
async fn indicator_toggle_drives_state_from_backend_results() {
    init_tracing();
    let backend = FakeBackend::new();
    backend.fail(ControlCommand::Start, FailureKind::LaunchFailure, "vula not installed");
    let mut indicator = Indicator::new(backend.clone());

    let outcome = indicator.toggle(true).await;
    assert!(!outcome.result.succeeded());
    assert!(!indicator.state().enabled());
    assert!(outcome.notification.body.contains("vula not installed"));

    backend.respond(ControlCommand::Start, ok());
    let outcome = indicator.toggle(true).await;
    assert_eq!(outcome.change, StateChange::Enabled);
    assert!(indicator.state().enabled());

    let outcome = indicator.toggle(false).await;
    assert_eq!(outcome.change, StateChange::Disabled);
    assert!(!indicator.state().enabled());
}

#[tokio::test]
async fn extension_lifecycle_is_idempotent() {
    init_tracing();
    let backend = FakeBackend::new();
    let mut built = 0;
    let mut extension = Extension::new(|| {
        built += 1;
        backend.clone()
    });

    assert!(extension.activate(ControlCommand::Status).await.is_none());

    assert!(extension.enable());
    assert!(!extension.enable());
    assert!(extension.is_enabled());

    let outcome = extension.toggle(true).await.expect("enabled extension");
    assert_eq!(outcome.change, StateChange::Enabled);
    assert!(extension.indicator().unwrap().state().enabled());

    assert!(extension.disable());
    assert!(!extension.disable());
    assert!(extension.toggle(false).await.is_none());

    // A fresh enable starts from the initial state again.
    assert!(extension.enable());
    assert!(!extension.indicator().unwrap().state().enabled());

    drop(extension);
    assert_eq!(built, 2);
    assert_eq!(backend.calls().len(), 1);
}

#[cfg(unix)]
mod with_stub_binary {
    use super::*;
    use crate::common::builders::ConfigFileBuilder;
    use crate::common::stub::StubDir;

    use vula_bridge::exec::CommandBridge;
    use vula_bridge::types::StopMechanism;

    #[tokio::test]
    async fn start_then_stop_with_real_processes() {
        init_tracing();
        let stubs = StubDir::new();
        let vula = stubs.script("vula", "exit 0");
        let cfg = ConfigFileBuilder::new()
            .binary_path(&vula)
            .stop_mechanism(StopMechanism::ControlBinary)
            .build();
        let mut indicator = Indicator::new(CommandBridge::from_config(cfg));

        indicator.toggle(true).await;
        assert!(indicator.state().enabled());

        indicator.toggle(false).await;
        assert!(!indicator.state().enabled());
    }

    #[tokio::test]
    async fn start_with_missing_binary_stays_disabled() {
        init_tracing();
        let stubs = StubDir::new();
        let cfg = ConfigFileBuilder::new()
            .binary_path(stubs.missing("vula"))
            .build();
        let mut indicator = Indicator::new(CommandBridge::from_config(cfg));

        let outcome = indicator.toggle(true).await;

        assert_eq!(outcome.result.failure_kind(), Some(FailureKind::LaunchFailure));
        assert!(!indicator.state().enabled());
        assert!(
            indicator
                .state()
                .last_message()
                .starts_with("An error occurred while starting Vula:")
        );
    }
}

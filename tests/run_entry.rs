// tests/run_entry.rs

#![cfg(unix)]

mod common;
use crate::common::builders::ConfigFileBuilder;
use crate::common::fakes::FakeBackend;
use crate::common::stub::{StubDir, wait_for_file};
use crate::common::{init_tracing, with_timeout};

use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use vula_bridge::cli::CliArgs;
use vula_bridge::errors::BridgeError;
use vula_bridge::exec::{CommandBridge, CommandResult, ControlCommand};
use vula_bridge::indicator::Extension;
use vula_bridge::{run, watch_status};

fn args(list: &[&str]) -> CliArgs {
    CliArgs::try_parse_from(std::iter::once("vula-bridge").chain(list.iter().copied()))
        .expect("valid arguments")
}

#[tokio::test]
async fn dry_run_never_spawns() {
    init_tracing();
    let stubs = StubDir::new();
    let missing = stubs.missing("vula");

    let ok = run(args(&[
        "show-descriptor",
        "--dry-run",
        "--binary-path",
        missing.to_str().unwrap(),
    ]))
    .await
    .unwrap();

    assert!(ok);
}

#[tokio::test]
async fn status_succeeds_against_a_working_binary() {
    init_tracing();
    let stubs = StubDir::new();
    let vula = stubs.script("vula", "echo 'vula is running'");

    let ok = run(args(&["status", "--binary-path", vula.to_str().unwrap()]))
        .await
        .unwrap();

    assert!(ok);
}

#[tokio::test]
async fn failed_action_is_reported_not_raised() {
    init_tracing();
    let stubs = StubDir::new();
    let vula = stubs.script("vula", "exit 4");

    let ok = run(args(&["repair", "--binary-path", vula.to_str().unwrap()]))
        .await
        .unwrap();

    assert!(!ok);
}

#[tokio::test]
async fn invalid_timeout_is_a_config_error() {
    init_tracing();

    let err = run(args(&["status", "--timeout", "whenever"]))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("timeout"), "{err}");
}

async fn shutdown_after(delay: Duration) -> io::Result<()> {
    tokio::time::sleep(delay).await;
    Ok(())
}

#[tokio::test]
async fn status_watch_polls_on_every_tick_until_shutdown() {
    init_tracing();
    let fake = FakeBackend::new();
    fake.respond(
        ControlCommand::Status,
        CommandResult::success(Some(0), "running\n".to_string()),
    );
    let handle = fake.clone();
    let mut extension = Extension::new(move || handle.clone());
    extension.enable();

    let ok = with_timeout(watch_status(
        &mut extension,
        Duration::from_millis(30),
        shutdown_after(Duration::from_millis(200)),
    ))
    .await
    .unwrap();

    assert!(ok);
    let calls = fake.calls();
    assert!(calls.len() >= 3, "expected several polls, got {}", calls.len());
    assert!(
        calls
            .iter()
            .all(|c| c.command == ControlCommand::Status && !c.interactive)
    );
    let state = extension.indicator().unwrap().state();
    assert_eq!(state.last_message(), "running");
}

#[tokio::test]
async fn shutdown_abandons_a_slow_status_poll() {
    init_tracing();
    let stubs = StubDir::new();
    let marker = stubs.path().join("marker");
    let vula = stubs.script(
        "vula",
        &format!("(sleep 1; echo polled > '{}')", marker.display()),
    );
    let cfg = ConfigFileBuilder::new()
        .binary_path(&vula)
        .timeout("20s")
        .build();
    let mut extension = Extension::new(move || CommandBridge::from_config(cfg.clone()));
    extension.enable();

    let started = Instant::now();
    let ok = with_timeout(watch_status(
        &mut extension,
        Duration::from_secs(10),
        shutdown_after(Duration::from_millis(200)),
    ))
    .await
    .unwrap();

    assert!(
        started.elapsed() < Duration::from_millis(900),
        "shutdown took {:?}",
        started.elapsed()
    );
    assert!(ok, "no poll completed, so nothing failed");

    let leaked = wait_for_file(&marker, Duration::from_millis(1500)).await;
    assert_eq!(leaked, None, "abandoned poll kept running");
}

#[tokio::test]
async fn shutdown_signal_error_is_propagated() {
    init_tracing();
    let fake = FakeBackend::new();
    let mut extension = Extension::new(move || fake.clone());
    extension.enable();

    let err = with_timeout(watch_status(
        &mut extension,
        Duration::from_millis(30),
        async { Err::<(), _>(io::Error::other("signal handler unavailable")) },
    ))
    .await
    .unwrap_err();

    assert!(matches!(err, BridgeError::IoError(_)), "{err:?}");
}

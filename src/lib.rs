// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod indicator;
pub mod logging;
pub mod types;

use std::future::Future;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::cli::{Action, CliArgs};
use crate::config::{ConfigFile, ConfigOverrides, load_with_overrides};
use crate::errors::Result;
use crate::exec::{CommandBridge, ControlBackend, ControlCommand, Invocation};
use crate::indicator::{ActionOutcome, Extension};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (file + CLI overrides)
/// - the command bridge
/// - the extension lifecycle and indicator
/// - Ctrl-C handling for `status --watch`
///
/// Returns whether the requested action succeeded.
pub async fn run(args: CliArgs) -> Result<bool> {
    let overrides = ConfigOverrides {
        binary_path: args.binary_path.clone(),
        timeout: args.timeout.clone(),
        stop_mechanism: args.stop_mechanism,
    };
    let cfg = load_with_overrides(args.config.as_deref(), &overrides)?;
    let command = args.action.command();

    if args.dry_run {
        print_dry_run(&cfg, command);
        return Ok(true);
    }

    let mut extension = Extension::new(move || CommandBridge::from_config(cfg.clone()));
    extension.enable();

    let succeeded = match args.action {
        Action::Status {
            watch: Some(interval),
        } => watch_status(&mut extension, interval, tokio::signal::ctrl_c()).await?,
        Action::Toggle { state } => report(extension.toggle(state.is_on()).await),
        _ => report(extension.activate(command).await),
    };

    extension.disable();
    Ok(succeeded)
}

/// Re-run `status` every `interval` until `shutdown` resolves.
///
/// `shutdown` is raced against both the wait for the next tick and the poll
/// itself, so an in-flight `vula status` is abandoned (and its process group
/// killed) as soon as shutdown is requested. `run` passes Ctrl-C.
///
/// Returns whether the last completed poll succeeded.
pub async fn watch_status<B, F, S>(
    extension: &mut Extension<B, F>,
    interval: Duration,
    shutdown: S,
) -> Result<bool>
where
    B: ControlBackend,
    F: FnMut() -> B,
    S: Future<Output = std::io::Result<()>>,
{
    info!(?interval, "watching vula status; press Ctrl-C to stop");

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(shutdown);

    let mut last_ok = true;
    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            res = &mut shutdown => {
                res?;
                info!("shutdown requested; stopping status watch");
                return Ok(last_ok);
            }
        }

        tokio::select! {
            outcome = extension.activate(ControlCommand::Status) => {
                last_ok = report(outcome);
            }
            res = &mut shutdown => {
                res?;
                info!("shutdown requested during status poll; abandoning it");
                return Ok(last_ok);
            }
        }
    }
}

/// Render an action outcome on the terminal.
fn report(outcome: Option<ActionOutcome>) -> bool {
    match outcome {
        Some(outcome) if outcome.result.succeeded() => {
            println!("{}", outcome.notification.body);
            true
        }
        Some(outcome) => {
            eprintln!("{}", outcome.notification);
            false
        }
        None => {
            eprintln!("vula extension is not enabled");
            false
        }
    }
}

/// Print the resolved configuration and invocation without running anything.
fn print_dry_run(cfg: &ConfigFile, command: ControlCommand) {
    println!("vula-bridge dry-run");
    println!("  bridge.binary_path = {}", cfg.bridge.binary_path.display());
    println!("  bridge.timeout = {:?}", cfg.bridge.timeout);
    println!("  stop.mechanism = {:?}", cfg.stop.mechanism);
    println!();

    let invocation = Invocation::resolve(command, cfg);
    println!("action: {command}");
    println!("  mode: {:?}", invocation.mode);
    println!("  invocation: {invocation}");

    if command.is_interactive() {
        let bridge = CommandBridge::from_config(cfg.clone());
        let request = bridge.terminal_request(command);
        let terminal = bridge.launcher().invocation(&request);
        println!("  terminal: {terminal}");
    }

    debug!("dry-run complete (no execution)");
}

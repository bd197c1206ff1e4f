// tests/command_mapping.rs

mod common;
use crate::common::builders::ConfigFileBuilder;
use crate::common::fakes::RecordingLauncher;

use std::path::PathBuf;

use vula_bridge::exec::command::shell_quote;
use vula_bridge::exec::{
    CommandBridge, ControlCommand, Invocation, ShellTerminalLauncher, TerminalRequest,
};
use vula_bridge::types::{InvocationMode, StopMechanism};

fn argv(inv: &Invocation) -> Vec<String> {
    std::iter::once(inv.program.display().to_string())
        .chain(inv.args.iter().cloned())
        .collect()
}

#[test]
fn control_binary_commands_use_fixed_arguments() {
    let cfg = ConfigFileBuilder::new()
        .binary_path("/usr/local/bin/vula")
        .build();

    let expected: [(ControlCommand, &[&str]); 6] = [
        (ControlCommand::Start, &["start"]),
        (ControlCommand::Repair, &["repair"]),
        (ControlCommand::Rediscover, &["rediscover"]),
        (ControlCommand::Status, &["status"]),
        (ControlCommand::ShowVerificationKey, &["verify", "my-vk"]),
        (ControlCommand::ShowDescriptor, &["verify", "my-descriptor"]),
    ];

    for (command, args) in expected {
        let inv = Invocation::resolve(command, &cfg);
        assert_eq!(inv.program, PathBuf::from("/usr/local/bin/vula"), "{command}");
        assert_eq!(inv.args, args.to_vec(), "{command}");
    }
}

#[test]
fn start_and_stop_are_detached_everything_else_captures() {
    for command in ControlCommand::ALL {
        let expected = match command {
            ControlCommand::Start | ControlCommand::Stop => InvocationMode::Detached,
            _ => InvocationMode::Capture,
        };
        assert_eq!(command.mode(), expected, "{command}");
    }
}

#[test]
fn stop_goes_through_service_manager_by_default() {
    let cfg = ConfigFileBuilder::new().build();
    let inv = Invocation::resolve(ControlCommand::Stop, &cfg);

    assert_eq!(argv(&inv), vec!["/bin/systemctl", "stop", "vula.slice"]);
    assert_eq!(inv.mode, InvocationMode::Detached);
}

#[test]
fn stop_can_use_the_control_binary() {
    let cfg = ConfigFileBuilder::new()
        .binary_path("/usr/bin/vula")
        .stop_mechanism(StopMechanism::ControlBinary)
        .build();
    let inv = Invocation::resolve(ControlCommand::Stop, &cfg);

    assert_eq!(argv(&inv), vec!["/usr/bin/vula", "stop"]);
}

#[test]
fn only_key_and_descriptor_are_interactive() {
    let interactive: Vec<_> = ControlCommand::ALL
        .into_iter()
        .filter(|c| c.is_interactive())
        .collect();
    assert_eq!(
        interactive,
        vec![
            ControlCommand::ShowVerificationKey,
            ControlCommand::ShowDescriptor
        ]
    );
}

#[test]
fn command_line_quotes_only_when_needed() {
    assert_eq!(shell_quote("/usr/bin/vula"), "/usr/bin/vula");
    assert_eq!(shell_quote("my-vk"), "my-vk");
    assert_eq!(shell_quote("/opt/my tools/vula"), "'/opt/my tools/vula'");
    assert_eq!(shell_quote("it's"), r"'it'\''s'");
    assert_eq!(shell_quote(""), "''");

    let cfg = ConfigFileBuilder::new()
        .binary_path("/opt/my tools/vula")
        .build();
    let inv = Invocation::resolve(ControlCommand::ShowDescriptor, &cfg);
    assert_eq!(inv.command_line(), "'/opt/my tools/vula' verify my-descriptor");
}

#[test]
fn shell_terminal_keeps_shell_open_when_holding() {
    let launcher = ShellTerminalLauncher::new("gnome-terminal", true);
    let request = TerminalRequest {
        command: ControlCommand::ShowVerificationKey,
        command_line: "/usr/bin/vula verify my-vk".to_string(),
        extra_args: vec![],
    };

    let inv = launcher.invocation(&request);
    assert_eq!(
        argv(&inv),
        vec![
            "gnome-terminal",
            "--",
            "bash",
            "-c",
            "/usr/bin/vula verify my-vk; exec bash"
        ]
    );
    assert_eq!(inv.mode, InvocationMode::Detached);
}

#[test]
fn shell_terminal_without_hold_runs_command_only() {
    let launcher = ShellTerminalLauncher::new("xterm", false);
    let request = TerminalRequest {
        command: ControlCommand::ShowDescriptor,
        command_line: "/usr/bin/vula verify my-descriptor".to_string(),
        extra_args: vec!["--maximize".to_string()],
    };

    let inv = launcher.invocation(&request);
    assert_eq!(
        argv(&inv),
        vec![
            "xterm",
            "--maximize",
            "--",
            "bash",
            "-c",
            "/usr/bin/vula verify my-descriptor"
        ]
    );
}

#[test]
fn terminal_requests_carry_per_command_arguments() {
    let cfg = ConfigFileBuilder::new()
        .binary_path("/usr/bin/vula")
        .verification_key_args(&["--title", "vk"])
        .build();
    let bridge = CommandBridge::new(cfg, RecordingLauncher::new());

    let vk = bridge.terminal_request(ControlCommand::ShowVerificationKey);
    assert_eq!(vk.command_line, "/usr/bin/vula verify my-vk");
    assert_eq!(vk.extra_args, vec!["--title", "vk"]);

    // Descriptor windows are maximized by default.
    let descriptor = bridge.terminal_request(ControlCommand::ShowDescriptor);
    assert_eq!(descriptor.extra_args, vec!["--maximize"]);
}

// src/indicator/mod.rs

//! Host-side adapter around the command bridge.
//!
//! This module ties together:
//! - the single piece of UI-visible state ([`DisplayState`])
//! - the Disabled/Enabled state machine driven by bridge results
//! - the notification text shown for each action
//! - the enable/disable lifecycle of the indicator
//!
//! The pure, synchronous state machine lives in [`core`]; the async shell
//! that calls the bridge is [`runtime`]. Rendering (icons, menus,
//! notification popups) is left entirely to the host.

pub mod ansi;
pub mod core;
pub mod extension;
pub mod messages;
pub mod runtime;

pub use self::core::{DisplayState, IndicatorStep, StateChange};
pub use extension::Extension;
pub use messages::Notification;
pub use runtime::{ActionOutcome, Indicator};

/// Icon shown while the daemon is considered stopped.
pub const ICON_IDLE: &str = "vula";
/// Icon shown while the daemon is considered running.
pub const ICON_ACTIVE: &str = "vula-active";

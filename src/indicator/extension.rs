// src/indicator/extension.rs

//! Enable/disable lifecycle.
//!
//! The host calls [`Extension::enable`] / [`Extension::disable`]; the
//! extension owns the live [`Indicator`] in between. There is no global.

use tracing::{debug, info};

use crate::exec::{ControlBackend, ControlCommand};
use crate::indicator::runtime::{ActionOutcome, Indicator};

/// Owns at most one indicator, built by `factory` on each enable.
pub struct Extension<B, F>
where
    B: ControlBackend,
    F: FnMut() -> B,
{
    factory: F,
    indicator: Option<Indicator<B>>,
}

impl<B, F> Extension<B, F>
where
    B: ControlBackend,
    F: FnMut() -> B,
{
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            indicator: None,
        }
    }

    /// Create the indicator. Returns `false` if it already existed.
    pub fn enable(&mut self) -> bool {
        if self.indicator.is_some() {
            debug!("extension already enabled");
            return false;
        }
        self.indicator = Some(Indicator::new((self.factory)()));
        info!("vula extension enabled");
        true
    }

    /// Drop the indicator. Returns `false` if there was none.
    pub fn disable(&mut self) -> bool {
        match self.indicator.take() {
            Some(_) => {
                info!("vula extension disabled");
                true
            }
            None => {
                debug!("extension already disabled");
                false
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.indicator.is_some()
    }

    pub fn indicator(&self) -> Option<&Indicator<B>> {
        self.indicator.as_ref()
    }

    /// Forward to [`Indicator::activate`]; `None` while disabled.
    pub async fn activate(&mut self, command: ControlCommand) -> Option<ActionOutcome> {
        match self.indicator.as_mut() {
            Some(indicator) => Some(indicator.activate(command).await),
            None => None,
        }
    }

    /// Forward to [`Indicator::toggle`]; `None` while disabled.
    pub async fn toggle(&mut self, on: bool) -> Option<ActionOutcome> {
        match self.indicator.as_mut() {
            Some(indicator) => Some(indicator.toggle(on).await),
            None => None,
        }
    }
}

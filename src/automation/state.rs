//! Automation run state.
//!
//! # States
//! - Stopped: initial state, and where the loop ends up after `stop`
//! - Running: the loop is cycling
//!
//! # State Transitions
//! ```text
//! Stopped → Running: start() after accounts load successfully
//! Running → Stopped: stop(), observed at the next loop-top check
//! ```

use std::sync::Arc;

use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutomationState {
    #[default]
    Stopped,
    Running,
}

impl AutomationState {
    pub fn is_running(self) -> bool {
        self == AutomationState::Running
    }
}

/// Cloneable control handle for a running automation.
///
/// Handed to signal handling so the loop can be stopped from outside without
/// sharing any other state.
#[derive(Debug, Clone)]
pub struct AutomationHandle {
    state: Arc<watch::Sender<AutomationState>>,
}

impl AutomationHandle {
    pub(crate) fn new() -> Self {
        let (tx, _) = watch::channel(AutomationState::Stopped);
        Self {
            state: Arc::new(tx),
        }
    }

    pub fn state(&self) -> AutomationState {
        *self.state.borrow()
    }

    /// Request a stop. Returns true if the state changed.
    ///
    /// Calling this while already stopped is a no-op.
    pub fn stop(&self) -> bool {
        let changed = self.state.send_if_modified(|state| {
            if state.is_running() {
                *state = AutomationState::Stopped;
                true
            } else {
                false
            }
        });
        if changed {
            tracing::info!("Automation stop requested");
        }
        changed
    }

    /// Stopped → Running. Returns false if already running.
    pub(crate) fn try_start(&self) -> bool {
        self.state.send_if_modified(|state| {
            if state.is_running() {
                false
            } else {
                *state = AutomationState::Running;
                true
            }
        })
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<AutomationState> {
        self.state.subscribe()
    }
}

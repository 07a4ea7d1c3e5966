//! Shutdown coordination.

use std::process::ExitCode;

use crate::automation::AutomationHandle;
use crate::lifecycle::signals::Signal;

/// Why the process is exiting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShutdownReason {
    /// An interrupt or terminate signal arrived.
    Signal(Signal),
    /// The automation returned on its own (stopped or single cycle done).
    Finished,
    /// Startup or the automation failed with an error.
    Failed(String),
    /// The automation task panicked.
    Crashed(String),
}

impl ShutdownReason {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ShutdownReason::Signal(_) | ShutdownReason::Finished => ExitCode::SUCCESS,
            ShutdownReason::Failed(_) | ShutdownReason::Crashed(_) => ExitCode::FAILURE,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ShutdownReason::Signal(_) | ShutdownReason::Finished)
    }
}

/// Stop the automation and log why.
///
/// Safe to call whether or not the loop is still running.
pub fn shutdown(handle: &AutomationHandle, reason: &ShutdownReason) -> ExitCode {
    handle.stop();

    match reason {
        ShutdownReason::Signal(signal) => {
            tracing::info!(signal = %signal, "Shutdown signal received, stopping")
        }
        ShutdownReason::Finished => tracing::info!("Automation finished"),
        ShutdownReason::Failed(error) => tracing::error!(error = %error, "Fatal error, stopping"),
        ShutdownReason::Crashed(error) => {
            tracing::error!(error = %error, "Automation task crashed, stopping")
        }
    }

    reason.exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automation::AutomationState;

    #[test]
    fn test_exit_codes() {
        assert!(ShutdownReason::Signal(Signal::Interrupt).is_success());
        assert!(ShutdownReason::Finished.is_success());
        assert!(!ShutdownReason::Failed("bad config".into()).is_success());
        assert!(!ShutdownReason::Crashed("panic".into()).is_success());
    }

    #[test]
    fn test_shutdown_stops_handle() {
        let handle = AutomationHandle::new();
        handle.try_start();

        shutdown(&handle, &ShutdownReason::Signal(Signal::Terminate));
        assert_eq!(handle.state(), AutomationState::Stopped);

        // Already stopped.
        shutdown(&handle, &ShutdownReason::Finished);
        assert_eq!(handle.state(), AutomationState::Stopped);
    }
}

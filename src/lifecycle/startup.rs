//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the API client from validated configuration
//! - Wire directory, dispatcher and token source into an `Automation`
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Accounts are not read here; `start` loads them so a missing file
//!   leaves the automation `Stopped`

use thiserror::Error;

use crate::accounts::FileTokenSource;
use crate::api::{ApiClient, ApiError};
use crate::automation::Automation;
use crate::config::PulseConfig;
use crate::nodes::RemoteNodeService;
use crate::resilience::RetryPolicy;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to initialise API client: {0}")]
    Api(#[from] ApiError),
}

/// Build the production automation from configuration.
pub fn build(config: &PulseConfig) -> Result<Automation<RemoteNodeService>, StartupError> {
    let retry = RetryPolicy::from(&config.retries);
    let client = ApiClient::new(&config.api, retry)?;

    tracing::info!(
        base_url = %client.base_url(),
        timeout_secs = config.api.request_timeout_secs,
        max_retries = retry.max_retries(),
        retry_delay_ms = retry.delay().as_millis() as u64,
        "API client ready"
    );

    let source = FileTokenSource::new(&config.accounts.path);
    Ok(Automation::new(
        RemoteNodeService::new(client),
        source,
        config.automation.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automation::AutomationState;

    #[test]
    fn test_build_from_defaults() {
        let automation = build(&PulseConfig::default()).unwrap();
        assert_eq!(automation.state(), AutomationState::Stopped);
        assert_eq!(automation.service().client().base_url(), "http://127.0.0.1:3000");
    }

    #[test]
    fn test_bad_base_url_fails() {
        let mut config = PulseConfig::default();
        config.api.base_url = "::nope::".into();
        assert!(matches!(build(&config), Err(StartupError::Api(_))));
    }
}

//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the pinger.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for node-pulse.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PulseConfig {
    /// Remote API settings (base URL, timeout).
    pub api: ApiConfig,

    /// Retry configuration for outbound requests.
    pub retries: RetryConfig,

    /// Automation loop timing and display settings.
    pub automation: AutomationConfig,

    /// Where bearer tokens are loaded from.
    pub accounts: AccountsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Remote API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// User-Agent header sent with every request.
    pub user_agent: String,

    /// Honour HTTP(S)_PROXY environment variables.
    pub system_proxy: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            request_timeout_secs: 30,
            user_agent: format!("node-pulse/{}", env!("CARGO_PKG_VERSION")),
            system_proxy: true,
        }
    }
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Retry configuration.
///
/// Retries are unconditional and evenly spaced: no status filtering,
/// no jitter, no exponential growth.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Retries after the initial attempt.
    pub max_retries: u32,

    /// Fixed delay between attempts in milliseconds.
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            delay_ms: 5_000,
        }
    }
}

/// Automation loop configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AutomationConfig {
    /// Minutes between the end of one cycle and the start of the next.
    pub interval_minutes: u64,

    /// Pause after a failed health check, in milliseconds.
    pub unhealthy_delay_ms: u64,

    /// Characters of the token shown in log lines.
    pub token_preview_len: usize,

    /// Characters of the node id shown in log lines.
    pub node_preview_len: usize,
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            interval_minutes: 5,
            unhealthy_delay_ms: 10_000,
            token_preview_len: 10,
            node_preview_len: 8,
        }
    }
}

impl AutomationConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_minutes.saturating_mul(60))
    }

    pub fn unhealthy_delay(&self) -> Duration {
        Duration::from_millis(self.unhealthy_delay_ms)
    }
}

/// Token source configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AccountsConfig {
    /// Newline-delimited token file.
    pub path: String,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            path: "data.txt".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of the human-readable format.
    pub json: bool,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PulseConfig::default();
        assert_eq!(config.api.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.retries.max_retries, 3);
        assert_eq!(config.retries.delay_ms, 5_000);
        assert_eq!(config.automation.unhealthy_delay(), Duration::from_secs(10));
        assert_eq!(config.automation.interval(), Duration::from_secs(300));
        assert_eq!(config.automation.token_preview_len, 10);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: PulseConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://api.example.net"

            [automation]
            interval_minutes = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://api.example.net");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.automation.interval(), Duration::from_secs(120));
        assert_eq!(config.accounts.path, "data.txt");
    }
}

//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Stamp every line with a second-granularity local timestamp
//! - Configure log level from config, overridable by `RUST_LOG`
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for production, pretty format for interactive use
//! - Console only; nothing is persisted

use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Build the filter: `RUST_LOG` wins, otherwise the configured level for this crate.
pub fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("node_pulse={},warn", config.log_level).into())
}

/// Install the global subscriber. Returns false if one was already set.
pub fn init(config: &ObservabilityConfig) -> bool {
    let registry = tracing_subscriber::registry().with(env_filter(config));
    let timer = ChronoLocal::new(TIMESTAMP_FORMAT.to_string());

    let result = if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_timer(timer))
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_timer(timer),
            )
            .try_init()
    };

    result.is_ok()
}

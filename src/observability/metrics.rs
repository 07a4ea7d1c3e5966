//! Metrics collection and exposition.
//!
//! # Metrics
//! - `node_pulse_pings_total` (counter): node pings by outcome
//! - `node_pulse_retries_total` (counter): request retries by call
//! - `node_pulse_health_checks_total` (counter): health checks by result
//! - `node_pulse_cycle_duration_seconds` (histogram): full cycle latency
//!
//! Without an installed recorder every call here is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its HTTP listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to start metrics endpoint"),
    }
}

pub fn record_ping(success: bool) {
    let outcome = if success { "success" } else { "failure" };
    metrics::counter!("node_pulse_pings_total", "outcome" => outcome).increment(1);
}

pub fn record_retry(call: &str) {
    metrics::counter!("node_pulse_retries_total", "call" => call.to_string()).increment(1);
}

pub fn record_health(healthy: bool) {
    let healthy = if healthy { "true" } else { "false" };
    metrics::counter!("node_pulse_health_checks_total", "healthy" => healthy).increment(1);
}

pub fn record_cycle(started: Instant, accounts: usize) {
    metrics::histogram!("node_pulse_cycle_duration_seconds")
        .record(started.elapsed().as_secs_f64());
    metrics::gauge!("node_pulse_accounts").set(accounts as f64);
}

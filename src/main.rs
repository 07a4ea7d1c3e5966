//! node-pulse binary.
//!
//! Loads configuration, builds the automation and runs it until a signal
//! arrives. SIGINT/SIGTERM exit 0; a failed or panicked automation exits 1.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::task::JoinHandle;

use node_pulse::automation::AutomationError;
use node_pulse::config::loader::{load_config, ConfigError};
use node_pulse::config::validation::validate_config;
use node_pulse::config::PulseConfig;
use node_pulse::lifecycle::{self, startup, ShutdownReason};
use node_pulse::observability::{logging, metrics};

#[derive(Parser, Debug)]
#[command(name = "node-pulse", version)]
#[command(about = "Ping every node of every account on a fixed interval", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Token file, one bearer token per line
    #[arg(short, long)]
    accounts: Option<String>,

    /// API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Minutes between cycles
    #[arg(short, long)]
    interval: Option<u64>,

    /// Run a single cycle and exit
    #[arg(long)]
    once: bool,
}

impl Cli {
    /// File (or defaults), then flags, then validation.
    fn resolve_config(&self) -> Result<PulseConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => PulseConfig::default(),
        };

        if let Some(accounts) = &self.accounts {
            config.accounts.path = accounts.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(interval) = self.interval {
            config.automation.interval_minutes = interval;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("node-pulse: configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    logging::init(&config.observability);
    tracing::info!("node-pulse v{} starting", env!("CARGO_PKG_VERSION"));

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let automation = match startup::build(&config) {
        Ok(automation) => Arc::new(automation),
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return ExitCode::FAILURE;
        }
    };
    let handle = automation.handle();

    let task: JoinHandle<Result<(), AutomationError>> = if cli.once {
        tokio::spawn(async move { automation.run_once().await.map(|_| ()) })
    } else {
        let interval = config.automation.interval();
        tokio::spawn(async move { automation.start(interval).await })
    };

    let reason = supervise(task).await;
    lifecycle::shutdown(&handle, &reason)
}

/// Wait for the automation task to end or a signal to arrive.
async fn supervise(mut task: JoinHandle<Result<(), AutomationError>>) -> ShutdownReason {
    let signal = tokio::select! {
        joined = &mut task => return from_join(joined),
        signal = lifecycle::wait_for_signal() => signal,
    };

    match signal {
        Ok(signal) => ShutdownReason::Signal(signal),
        Err(e) => {
            tracing::warn!(error = %e, "Signal handling unavailable, waiting for automation");
            from_join(task.await)
        }
    }
}

fn from_join(joined: Result<Result<(), AutomationError>, tokio::task::JoinError>) -> ShutdownReason {
    match joined {
        Ok(Ok(())) => ShutdownReason::Finished,
        Ok(Err(e)) => ShutdownReason::Failed(e.to_string()),
        Err(e) => ShutdownReason::Crashed(e.to_string()),
    }
}

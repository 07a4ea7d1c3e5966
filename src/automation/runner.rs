//! The automation loop.
//!
//! # Responsibilities
//! - Load accounts once, then cycle until stopped
//! - Gate every cycle on the API health check
//! - Walk accounts and their nodes strictly in order, logging each ping
//! - Keep one account's failure from touching any other account
//!
//! # Design Decisions
//! - Single cooperative loop; no fan-out across accounts or nodes
//! - Stop is observed at the loop top; pauses wake early, requests do not
//! - Unhealthy backoff is a fixed pause, not exponential

use std::time::{Duration, Instant};

use chrono::Utc;
use reqwest::header::InvalidHeaderValue;
use thiserror::Error;
use tokio::sync::watch;
use tracing::Instrument;
use uuid::Uuid;

use crate::accounts::{preview, ClaimsDisplay, Token, TokenSource, TokenSourceError};
use crate::automation::report::{self, AccountReport, AccountView, CycleReport, PingOutcome};
use crate::automation::state::{AutomationHandle, AutomationState};
use crate::config::AutomationConfig;
use crate::nodes::NodeService;
use crate::observability::metrics;

/// Errors that end `start` or `run_once`.
#[derive(Debug, Error)]
pub enum AutomationError {
    #[error("failed to load accounts: {0}")]
    TokenLoad(#[from] TokenSourceError),
}

/// Errors confined to a single account within a cycle.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("token {token} is not a valid bearer credential: {source}")]
    InvalidCredential {
        token: String,
        #[source]
        source: InvalidHeaderValue,
    },
}

/// Health-gated, sequential ping loop over every account's nodes.
pub struct Automation<S> {
    service: S,
    source: Box<dyn TokenSource>,
    settings: AutomationConfig,
    handle: AutomationHandle,
}

impl<S: NodeService> Automation<S> {
    pub fn new(service: S, source: impl TokenSource + 'static, settings: AutomationConfig) -> Self {
        Self {
            service,
            source: Box::new(source),
            settings,
            handle: AutomationHandle::new(),
        }
    }

    /// Control handle for stopping the loop from elsewhere.
    pub fn handle(&self) -> AutomationHandle {
        self.handle.clone()
    }

    pub fn state(&self) -> AutomationState {
        self.handle.state()
    }

    pub fn stop(&self) -> bool {
        self.handle.stop()
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Load accounts and cycle every `interval` until stopped.
    ///
    /// Returns `Ok(())` once the loop observes a stop, or immediately with a
    /// warning if the automation is already running. A token load failure
    /// leaves the state `Stopped`.
    pub async fn start(&self, interval: Duration) -> Result<(), AutomationError> {
        if self.state().is_running() {
            tracing::warn!("Automation already running");
            return Ok(());
        }

        let tokens = self.load_tokens()?;

        if !self.handle.try_start() {
            tracing::warn!("Automation already running");
            return Ok(());
        }

        tracing::info!(
            accounts = tokens.len(),
            interval_secs = interval.as_secs(),
            "Automation started"
        );

        let mut state = self.handle.subscribe();
        loop {
            let running = state.borrow_and_update().is_running();
            if !running {
                break;
            }

            if !self.service.health_check().await {
                let delay = self.settings.unhealthy_delay();
                tracing::warn!(delay_secs = delay.as_secs(), "API unhealthy, skipping cycle");
                pause(&mut state, delay).await;
                continue;
            }

            let report = self.run_cycle(&tokens).await;
            tracing::debug!(cycle_id = %report.cycle_id, "Sleeping until next cycle");
            pause(&mut state, interval).await;
        }

        tracing::info!("Automation stopped");
        Ok(())
    }

    /// A single health-gated cycle. `None` when the API is unhealthy.
    pub async fn run_once(&self) -> Result<Option<CycleReport>, AutomationError> {
        let tokens = self.load_tokens()?;
        if !self.service.health_check().await {
            tracing::warn!("API unhealthy, skipping cycle");
            return Ok(None);
        }
        Ok(Some(self.run_cycle(&tokens).await))
    }

    /// One pass over `tokens`, in order.
    pub async fn run_cycle(&self, tokens: &[Token]) -> CycleReport {
        let cycle_id = Uuid::new_v4();
        let span = tracing::info_span!("cycle", id = %cycle_id);

        async move {
            let started = Instant::now();
            let mut report = CycleReport::new(cycle_id);

            for token in tokens {
                match self.process_account(token).await {
                    Ok(account) => report.accounts.push(account),
                    Err(e) => {
                        tracing::error!(
                            token = %token.preview(self.settings.token_preview_len),
                            error = %e,
                            "Account processing failed"
                        );
                        report.failed_accounts += 1;
                    }
                }
            }

            report.duration = started.elapsed();
            metrics::record_cycle(started, tokens.len());
            tracing::info!(
                accounts = tokens.len(),
                nodes = report.nodes(),
                succeeded = report.succeeded(),
                failed = report.failed(),
                failed_accounts = report.failed_accounts,
                duration_ms = report.duration.as_millis() as u64,
                "Cycle complete"
            );
            report
        }
        .instrument(span)
        .await
    }

    async fn process_account(&self, token: &Token) -> Result<AccountReport, AccountError> {
        let claims = token.claims();
        let account = AccountView {
            token: token.preview(self.settings.token_preview_len),
            claims: ClaimsDisplay::from(claims.as_ref()),
        };

        match &claims {
            None => tracing::debug!(token = %account.token, "Token claims not decodable"),
            Some(c) if c.is_expired_at(Utc::now()) => tracing::warn!(
                token = %account.token,
                expires = %account.claims.expires_at,
                "Token has expired, using it as-is"
            ),
            Some(_) => {}
        }

        let credential = token
            .credential()
            .map_err(|source| AccountError::InvalidCredential {
                token: account.token.clone(),
                source,
            })?;

        let nodes = self.service.get_nodes(&credential).await;
        if nodes.is_empty() {
            tracing::info!(token = %account.token, user = %account.claims.user_id, "No nodes for account");
        }

        let mut outcomes = Vec::with_capacity(nodes.len());
        for node in &nodes {
            let success = self.service.ping_node(&credential, node.id()).await;
            let outcome = PingOutcome {
                node_id: node.id().to_string(),
                node: preview(node.id(), self.settings.node_preview_len),
                success,
            };
            report::log_outcome(&account, &outcome);
            metrics::record_ping(success);
            outcomes.push(outcome);
        }

        Ok(AccountReport { account, outcomes })
    }

    fn load_tokens(&self) -> Result<Vec<Token>, AutomationError> {
        match self.source.load() {
            Ok(tokens) => {
                tracing::info!(source = %self.source.describe(), accounts = tokens.len(), "Accounts loaded");
                Ok(tokens)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load accounts");
                Err(e.into())
            }
        }
    }
}

/// Sleep for `delay`, waking early if the automation is stopped.
async fn pause(state: &mut watch::Receiver<AutomationState>, delay: Duration) {
    tokio::select! {
        _ = tokio::time::sleep(delay) => {}
        _ = state.wait_for(|s| !s.is_running()) => {}
    }
}

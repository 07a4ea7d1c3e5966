//! Cycle results and outcome logging.

use std::time::Duration;

use uuid::Uuid;

use crate::accounts::ClaimsDisplay;

/// How an account is shown in log lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountView {
    /// Truncated token.
    pub token: String,
    pub claims: ClaimsDisplay,
}

/// Result of pinging one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingOutcome {
    pub node_id: String,
    /// Truncated node id.
    pub node: String,
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountReport {
    pub account: AccountView,
    pub outcomes: Vec<PingOutcome>,
}

/// Everything one pass over the accounts produced.
#[derive(Debug, Clone)]
pub struct CycleReport {
    pub cycle_id: Uuid,
    pub accounts: Vec<AccountReport>,
    /// Accounts that errored before any node was pinged.
    pub failed_accounts: usize,
    pub duration: Duration,
}

impl CycleReport {
    pub fn new(cycle_id: Uuid) -> Self {
        Self {
            cycle_id,
            accounts: Vec::new(),
            failed_accounts: 0,
            duration: Duration::ZERO,
        }
    }

    pub fn nodes(&self) -> usize {
        self.accounts.iter().map(|a| a.outcomes.len()).sum()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes().filter(|o| o.success).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes().filter(|o| !o.success).count()
    }

    fn outcomes(&self) -> impl Iterator<Item = &PingOutcome> {
        self.accounts.iter().flat_map(|a| a.outcomes.iter())
    }
}

/// Emit the outcome line for one ping: `info` on success, `error` otherwise.
pub fn log_outcome(account: &AccountView, outcome: &PingOutcome) {
    if outcome.success {
        tracing::info!(
            outcome = "success",
            token = %account.token,
            user = %account.claims.user_id,
            issued = %account.claims.issued_at,
            expires = %account.claims.expires_at,
            node = %outcome.node,
            "Ping succeeded"
        );
    } else {
        tracing::error!(
            outcome = "failure",
            token = %account.token,
            user = %account.claims.user_id,
            issued = %account.claims.issued_at,
            expires = %account.claims.expires_at,
            node = %outcome.node,
            "Ping failed"
        );
    }
}

//! Node liveness pings.

use std::sync::Arc;

use reqwest::Method;
use serde_json::{json, Value};

use crate::accounts::Credential;
use crate::api::{ping_path, status_is_ok, ApiClient};

/// Issues the per-node ping call.
#[derive(Debug, Clone)]
pub struct PingDispatcher {
    client: Arc<ApiClient>,
}

impl PingDispatcher {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Ping one node. True iff the API answers `{"status": "ok"}`.
    pub async fn ping_node(&self, credential: &Credential, node_id: &str) -> bool {
        let path = ping_path(node_id);
        let headers = credential.headers();
        let body: Value = json!({});

        match self
            .client
            .request(Method::POST, &path, Some(&body), Some(&headers))
            .await
        {
            Ok(response) => {
                let ok = status_is_ok(&response);
                if !ok {
                    tracing::debug!(endpoint = %path, response = %response, "Ping not acknowledged");
                }
                ok
            }
            Err(e) => {
                tracing::error!(endpoint = %path, error = %e, "Ping request failed");
                false
            }
        }
    }
}

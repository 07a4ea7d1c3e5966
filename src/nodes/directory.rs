//! Node discovery per account.

use std::sync::Arc;

use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

use crate::accounts::Credential;
use crate::api::{ApiClient, NODES_PATH};
use crate::nodes::Node;

/// Accepted shapes of the node list response.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NodeList {
    Bare(Vec<Node>),
    Wrapped {
        #[serde(alias = "nodes")]
        data: Vec<Node>,
    },
}

impl From<NodeList> for Vec<Node> {
    fn from(list: NodeList) -> Self {
        match list {
            NodeList::Bare(nodes) | NodeList::Wrapped { data: nodes } => nodes,
        }
    }
}

/// Resolves an account to its nodes. Never cached.
#[derive(Debug, Clone)]
pub struct NodeDirectory {
    client: Arc<ApiClient>,
}

impl NodeDirectory {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Fetch the account's nodes; any failure yields an empty list.
    pub async fn get_nodes(&self, credential: &Credential) -> Vec<Node> {
        let headers = credential.headers();
        let body = match self
            .client
            .request(Method::GET, NODES_PATH, None, Some(&headers))
            .await
        {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(endpoint = NODES_PATH, error = %e, "Failed to fetch nodes");
                return Vec::new();
            }
        };

        match parse_nodes(body) {
            Some(nodes) => nodes,
            None => {
                tracing::error!(endpoint = NODES_PATH, "Unexpected node list payload");
                Vec::new()
            }
        }
    }
}

/// Decode a node list payload, or `None` if it has neither accepted shape.
pub fn parse_nodes(body: Value) -> Option<Vec<Node>> {
    serde_json::from_value::<NodeList>(body).ok().map(Into::into)
}

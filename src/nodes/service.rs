//! The remote operations the automation loop depends on.

use std::sync::Arc;

use async_trait::async_trait;

use crate::accounts::Credential;
use crate::api::ApiClient;
use crate::nodes::{Node, NodeDirectory, PingDispatcher};

/// Health, discovery and ping, as seen by the automation loop.
///
/// Every method absorbs its own failures: errors surface as `false` or an
/// empty list, never as `Err`.
#[async_trait]
pub trait NodeService: Send + Sync {
    async fn health_check(&self) -> bool;

    async fn get_nodes(&self, credential: &Credential) -> Vec<Node>;

    async fn ping_node(&self, credential: &Credential, node_id: &str) -> bool;
}

/// `NodeService` backed by the HTTP API.
#[derive(Debug, Clone)]
pub struct RemoteNodeService {
    client: Arc<ApiClient>,
    directory: NodeDirectory,
    dispatcher: PingDispatcher,
}

impl RemoteNodeService {
    pub fn new(client: ApiClient) -> Self {
        let client = Arc::new(client);
        Self {
            directory: NodeDirectory::new(client.clone()),
            dispatcher: PingDispatcher::new(client.clone()),
            client,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[async_trait]
impl NodeService for RemoteNodeService {
    async fn health_check(&self) -> bool {
        self.client.health_check().await
    }

    async fn get_nodes(&self, credential: &Credential) -> Vec<Node> {
        self.directory.get_nodes(credential).await
    }

    async fn ping_node(&self, credential: &Credential, node_id: &str) -> bool {
        self.dispatcher.ping_node(credential, node_id).await
    }
}

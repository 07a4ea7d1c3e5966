//! Node discovery and liveness pings.
//!
//! # Data Flow
//! ```text
//! Credential
//!     → directory.rs (GET /api/v1/nodes → Vec<Node>)
//!     → ping.rs (POST /api/v1/nodes/{id}/ping → bool)
//! ```
//!
//! # Design Decisions
//! - Nodes are transient; fetched fresh every cycle
//! - Both operations swallow errors after logging them

pub mod directory;
pub mod ping;
pub mod service;

use serde::{Deserialize, Serialize};

pub use directory::NodeDirectory;
pub use ping::PingDispatcher;
pub use service::{NodeService, RemoteNodeService};

/// A remote node, identified by its public key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Node {
    #[serde(rename = "pubKey", alias = "pub_key", alias = "publicKey")]
    pub pub_key: String,
}

impl Node {
    pub fn new(pub_key: impl Into<String>) -> Self {
        Self {
            pub_key: pub_key.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.pub_key
    }
}

//! Remote API access.
//!
//! # Endpoints
//! ```text
//! GET  /health                       unauthenticated, {"status": "ok"}
//! GET  /api/v1/nodes                 bearer, list of {"pubKey": ...}
//! POST /api/v1/nodes/{nodeId}/ping   bearer, {"status": "ok"}
//! ```

pub mod client;
pub mod error;

use serde_json::Value;

pub use client::ApiClient;
pub use error::ApiError;

pub const HEALTH_PATH: &str = "/health";
pub const NODES_PATH: &str = "/api/v1/nodes";
pub const PING_ROUTE: &str = "/api/v1/nodes/{nodeId}/ping";

/// Ping path for a node, with the id encoded as a single path segment.
pub fn ping_path(node_id: &str) -> String {
    // byte_serialize escapes a literal '+' as %2B, so every '+' left is a space.
    let encoded: String = url::form_urlencoded::byte_serialize(node_id.as_bytes()).collect();
    format!("{}/{}/ping", NODES_PATH, encoded.replace('+', "%20"))
}

/// Route template for `path`, with node ids collapsed.
///
/// Used wherever the path becomes a metric label.
pub fn route_of(path: &str) -> &str {
    match path.strip_prefix(NODES_PATH) {
        Some(rest) if rest.starts_with('/') && rest.ends_with("/ping") => PING_ROUTE,
        _ => path,
    }
}

/// True iff the body's `status` field is the string `"ok"`.
pub fn status_is_ok(body: &Value) -> bool {
    body.get("status").and_then(Value::as_str) == Some("ok")
}

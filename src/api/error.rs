//! API client error definitions.

use thiserror::Error;

/// Longest response body kept in an error message.
const MAX_BODY_CHARS: usize = 500;

/// Errors that can occur while talking to the remote API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL does not parse.
    #[error("invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Connection, timeout or body read failure.
    #[error("{method} {endpoint} failed: {source}")]
    Transport {
        method: String,
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("{method} {endpoint} returned {status}: {body}")]
    Status {
        method: String,
        endpoint: String,
        status: u16,
        body: String,
    },
}

impl ApiError {
    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Transport { source, .. } if source.is_timeout())
    }
}

/// Compact, bounded rendering of a response body for error messages.
pub(crate) fn serialize_body(raw: &str) -> String {
    let compact = match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => value.to_string(),
        Err(_) => raw.trim().to_string(),
    };
    if compact.chars().count() > MAX_BODY_CHARS {
        let head: String = compact.chars().take(MAX_BODY_CHARS).collect();
        format!("{}...", head)
    } else {
        compact
    }
}

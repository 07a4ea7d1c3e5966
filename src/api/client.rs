//! HTTP client for the remote node API.
//!
//! # Responsibilities
//! - Issue requests against the configured base URL with a fixed timeout
//! - Normalize transport failures and non-2xx answers into `ApiError`
//! - Retry every failed request through the configured `RetryPolicy`
//! - Provide the unauthenticated health probe

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Method};
use serde_json::Value;
use url::Url;

use crate::api::error::{serialize_body, ApiError};
use crate::api::{route_of, status_is_ok, HEALTH_PATH};
use crate::config::ApiConfig;
use crate::observability::metrics;
use crate::resilience::RetryPolicy;

/// Remote API client with bounded automatic retry.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl ApiClient {
    /// Create a new client.
    pub fn new(config: &ApiConfig, retry: RetryPolicy) -> Result<Self, ApiError> {
        Url::parse(&config.base_url).map_err(|source| ApiError::InvalidBaseUrl {
            url: config.base_url.clone(),
            source,
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.as_str())
            .default_headers(headers);
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build().map_err(ApiError::Build)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Perform a request, retrying on any failure.
    ///
    /// Returns the decoded JSON body. An empty body decodes to `Value::Null`
    /// and a non-JSON body to `Value::String`.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        headers: Option<&HeaderMap>,
    ) -> Result<Value, ApiError> {
        let url = self.endpoint(path);
        let label = format!("{} {}", method, route_of(path));

        let method = &method;
        let url = url.as_str();
        self.retry
            .run(&label, move |_| self.send_once(method, url, path, body, headers))
            .await
    }

    async fn send_once(
        &self,
        method: &Method,
        url: &str,
        path: &str,
        body: Option<&Value>,
        headers: Option<&HeaderMap>,
    ) -> Result<Value, ApiError> {
        let transport = |source: reqwest::Error| ApiError::Transport {
            method: method.to_string(),
            endpoint: path.to_string(),
            source,
        };

        let mut request = self.http.request(method.clone(), url);
        if let Some(headers) = headers {
            request = request.headers(headers.clone());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        let text = response.text().await.map_err(transport)?;

        if !status.is_success() {
            return Err(ApiError::Status {
                method: method.to_string(),
                endpoint: path.to_string(),
                status: status.as_u16(),
                body: serialize_body(&text),
            });
        }

        tracing::debug!(method = %method, endpoint = %path, status = %status, "Request succeeded");
        Ok(parse_body(&text))
    }

    /// Probe `GET /health`. Never fails; any error reads as unhealthy.
    pub async fn health_check(&self) -> bool {
        let healthy = match self.request(Method::GET, HEALTH_PATH, None, None).await {
            Ok(body) => {
                let ok = status_is_ok(&body);
                if !ok {
                    let status = body.get("status").cloned().unwrap_or_default();
                    tracing::warn!(status = %status, "API reported unhealthy status");
                }
                ok
            }
            Err(e) => {
                tracing::error!(error = %e, "Health check failed");
                false
            }
        };
        metrics::record_health(healthy);
        healthy
    }
}

fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_body_variants() {
        assert_eq!(parse_body(""), Value::Null);
        assert_eq!(parse_body("  \n"), Value::Null);
        assert_eq!(parse_body(r#"{"status":"ok"}"#), json!({"status": "ok"}));
        assert_eq!(parse_body("pong"), Value::String("pong".into()));
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = ApiConfig {
            base_url: "https://nodes.example/".into(),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config, RetryPolicy::none()).unwrap();
        assert_eq!(client.endpoint("/health"), "https://nodes.example/health");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = ApiConfig {
            base_url: "not a url".into(),
            ..ApiConfig::default()
        };
        let err = ApiClient::new(&config, RetryPolicy::none()).unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
    }
}

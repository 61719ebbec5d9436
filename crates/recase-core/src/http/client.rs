//! API client for the snake_case backend
//!
//! An explicitly constructed client object: base URL and credentials live as
//! instance fields, created once at startup and passed by reference, instead
//! of ambient module-level state. Every outbound JSON body goes through
//! `to_snake_case` before dispatch and every inbound JSON body through
//! `to_camel_case` after receipt, so application code only ever sees the
//! camelCase format.

use reqwest::header::AUTHORIZATION;
use reqwest::{Client as ReqwestClient, Method, Request};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::convert::{to_camel_case, to_snake_case};
use crate::http::HttpError;
use crate::{Error, Result};

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL all endpoint paths are resolved against
    base_url: Url,
    /// Bearer token attached to every request, if configured
    bearer_token: Option<String>,
    /// Request timeout in seconds
    timeout_secs: u64,
}

impl ApiClientConfig {
    /// Create a configuration for the given base URL.
    ///
    /// The base URL keeps its path segments when endpoint paths are joined
    /// onto it, so `https://api.example.com/v1` and `students` resolve to
    /// `https://api.example.com/v1/students`.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        // Url::join drops the last segment of a base without a trailing slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            base_url,
            bearer_token: None,
            timeout_secs: 30,
        })
    }

    /// Attach a bearer token to every request
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Override the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// API client that transcodes key casing at the wire boundary
pub struct ApiClient {
    /// Underlying reqwest client
    client: ReqwestClient,
    /// Client configuration
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a new API client from a configuration
    pub fn new(config: ApiClientConfig) -> Result<Self> {
        let client = ReqwestClient::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::HttpRequest {
                message: format!("Failed to create HTTP client: {}", e),
                source: Some(Box::new(e)),
            })?;

        Ok(Self { client, config })
    }

    /// GET an endpoint and return its body in application format
    pub async fn get(&self, path: &str) -> Result<Value> {
        self.execute(Method::GET, path, None).await
    }

    /// POST an application-format body and return the response body
    /// in application format
    pub async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.execute(Method::POST, path, Some(body)).await
    }

    /// PUT an application-format body and return the response body
    /// in application format
    pub async fn put(&self, path: &str, body: &Value) -> Result<Value> {
        self.execute(Method::PUT, path, Some(body)).await
    }

    /// DELETE an endpoint and return its body in application format
    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.execute(Method::DELETE, path, None).await
    }

    /// Execute a request, converting the body on the way out and back in
    async fn execute(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value> {
        let request = self.build_request(method, path, body)?;
        debug!(method = %request.method(), url = %request.url(), "dispatching request");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(HttpError::from_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::from_response(response).await.into());
        }

        let text = response.text().await.map_err(|e| Error::Http {
            message: format!("Failed to read response body: {}", e),
            status_code: Some(status.as_u16()),
            source: Some(anyhow::anyhow!(e)),
        })?;

        // Some endpoints (DELETE, 204) legitimately return no body.
        if text.is_empty() {
            return Ok(Value::Null);
        }

        let wire_body: Value = serde_json::from_str(&text)?;
        debug!(status = status.as_u16(), "converting response body to application format");
        Ok(to_camel_case(&wire_body))
    }

    /// Build a request with auth applied and the body in wire format
    fn build_request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Request> {
        let url = self.endpoint_url(path)?;
        let mut builder = self.client.request(method, url);

        if let Some(token) = &self.config.bearer_token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        if let Some(body) = body {
            builder = builder.json(&to_snake_case(body));
        }

        builder.build().map_err(|e| Error::HttpRequest {
            message: format!("Failed to build request: {}", e),
            source: Some(Box::new(e)),
        })
    }

    /// Resolve an endpoint path against the configured base URL
    fn endpoint_url(&self, path: &str) -> Result<Url> {
        let url = self.config.base_url.join(path.trim_start_matches('/'))?;
        Ok(url)
    }
}

//! Shared HTTP plumbing for the backend adapters.
//!
//! Builds endpoint URLs under a configurable base URL, maps transport failures
//! and non-success statuses into `ServiceError`, and decodes JSON bodies.

use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::ports::{ServiceError, ServiceOperation};

/// Errors raised while building the HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ClientBuildError {
    #[error("invalid backend base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Configuration for the backend client.
#[derive(Debug, Clone)]
pub struct BackendClientConfig {
    /// Base URL, e.g. `http://localhost:8000` or `https://host/api`.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl BackendClientConfig {
    /// Creates a configuration with a 30 second timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP client bound to one backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl BackendClient {
    /// Creates a client for the configured backend.
    pub fn new(config: BackendClientConfig) -> Result<Self, ClientBuildError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ClientBuildError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientBuildError::InvalidBaseUrl {
                url: config.base_url,
                reason: "URL cannot carry a path".to_string(),
            });
        }

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url,
            timeout: config.timeout,
        })
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds an endpoint URL by appending path segments to the base URL.
    ///
    /// Segments are percent-encoded, so opaque ids are safe to pass.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Returns the underlying reqwest client.
    pub fn http(&self) -> &Client {
        &self.client
    }

    /// Sends a request and rejects non-success statuses.
    ///
    /// On failure the response body is read as diagnostic text.
    pub async fn send(
        &self,
        operation: ServiceOperation,
        request: RequestBuilder,
    ) -> Result<Response, ServiceError> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ServiceError::transport(
                    operation,
                    format!("request timed out after {}s", self.timeout.as_secs()),
                )
            } else if e.is_connect() {
                ServiceError::transport(operation, format!("connection failed: {}", e))
            } else {
                ServiceError::transport(operation, e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%operation, status = status.as_u16(), "backend returned an error status");
        Err(ServiceError::status(operation, status.as_u16(), body))
    }

    /// Decodes a JSON response body.
    pub async fn read_json<T: DeserializeOwned>(
        operation: ServiceOperation,
        response: Response,
    ) -> Result<T, ServiceError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ServiceError::parse(operation, e.to_string()))
    }
}

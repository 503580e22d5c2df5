/*
[INPUT]:  HTTP configuration (base URL, timeouts) and request descriptors
[OUTPUT]: Normalized responses or normalized failures
[POS]:    HTTP layer - request executor, one round trip per call
[UPDATE]: When adding connection options or changing response handling
*/

use std::time::{Duration, Instant};

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::http::response::status_phrase;
use crate::http::{ApiResponse, KettikError, RequestDescriptor, ResponseBody, Result};

/// Backend used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "KETTIK_API_BASE";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Total request timeout; `None` leaves requests unbounded
    pub timeout: Option<Duration>,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    /// Defaults, with the base URL taken from `KETTIK_API_BASE` when set
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(BASE_URL_ENV) {
            Ok(base_url) if !base_url.trim().is_empty() => config.with_base_url(base_url.trim()),
            _ => config,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Request executor for the Kettik backend
#[derive(Debug, Clone)]
pub struct KettikClient {
    http_client: Client,
    base_url: String,
}

impl KettikClient {
    /// Create a new client configured from the environment
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::from_env())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        // fail early on a malformed base URL
        Url::parse(&config.base_url)?;

        // no cookie store: only explicit Authorization headers authenticate
        let mut builder = Client::builder().connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URLs pass through; anything else is appended to the base URL
    pub fn resolve_url(&self, path: &str) -> Result<Url> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Ok(Url::parse(path)?);
        }
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    /// Send one request and normalize the outcome.
    ///
    /// Any status outside 200-299 is returned as [`KettikError::Api`] with a
    /// message taken from the body (`error`, `detail`, `message`) or the
    /// status phrase.
    #[tracing::instrument(skip_all, fields(method = %descriptor.method, path = %descriptor.path))]
    pub async fn execute(&self, descriptor: &RequestDescriptor) -> Result<ApiResponse> {
        let url = self.resolve_url(&descriptor.path)?;

        let mut headers = descriptor.headers.clone();
        let body = match &descriptor.payload {
            Some(payload) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                Some(serde_json::to_string(payload)?)
            }
            None => descriptor.body.clone(),
        };

        let mut builder = self
            .http_client
            .request(descriptor.method.clone(), url.clone())
            .headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        debug!(%url, "sending request");
        let started = Instant::now();
        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let body = ResponseBody::from_text(&text);
        if !status.is_success() {
            let message = body
                .error_message()
                .unwrap_or_else(|| status_phrase(status));
            warn!(status = status.as_u16(), elapsed_ms, %message, "request failed");
            return Err(KettikError::api_error(status, message));
        }

        debug!(status = status.as_u16(), elapsed_ms, "request completed");
        Ok(ApiResponse { status, body })
    }
}

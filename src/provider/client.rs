//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout, User-Agent and bearer token
//! - Exponential backoff retry logic (max 3 retries)
//! - Status code to ProviderError mapping (404, 401/403, 429, 5xx)

use crate::error::ProviderError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("release-lines/", env!("CARGO_PKG_VERSION"));

/// Maximum number of retry attempts
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (in milliseconds)
const BASE_DELAY_MS: u64 = 100;

/// HTTP client wrapper with retry logic
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    max_retries: u32,
    base_delay: Duration,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, None)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(
        timeout: Duration,
        user_agent: &str,
        token: Option<&str>,
    ) -> Result<Self, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        if let Some(token) = token {
            let mut value =
                HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                    ProviderError::authentication("HTTP client", "token contains invalid characters")
                })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| {
                ProviderError::network_error(
                    "",
                    "HTTP client",
                    format!("failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self {
            client,
            max_retries: MAX_RETRIES,
            base_delay: Duration::from_millis(BASE_DELAY_MS),
        })
    }

    /// Create a client with default timeout and User-Agent and an optional token
    pub fn with_token(token: Option<&str>) -> Result<Self, ProviderError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, token)
    }

    /// Set the maximum number of retries
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the first backoff delay (doubled on every retry)
    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    /// Perform a GET request with retry logic and error context
    pub async fn get_with_context(
        &self,
        url: &str,
        repository: &str,
        provider: &str,
    ) -> Result<Response, ProviderError> {
        let mut last_error = None;
        let mut delay = self.base_delay;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                debug!(url, attempt, ?delay, "retrying request");
                tokio::time::sleep(delay).await;
                delay *= 2;
            }

            let response = match self.client.get(url).send().await {
                Ok(response) => response,
                Err(e) => {
                    last_error = Some(if e.is_timeout() {
                        ProviderError::timeout(repository, provider)
                    } else {
                        ProviderError::network_error(repository, provider, e.to_string())
                    });
                    continue;
                }
            };

            match classify_status(&response, repository, provider) {
                Ok(()) => return Ok(response),
                Err(e) if e.is_transient() => {
                    warn!(url, status = %response.status(), "request failed, will retry");
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ProviderError::network_error(repository, provider, "unknown error")
        }))
    }

    /// Perform a GET request and parse the JSON response
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        repository: &str,
        provider: &str,
    ) -> Result<T, ProviderError> {
        let response = self.get_with_context(url, repository, provider).await?;

        response.json::<T>().await.map_err(|e| {
            ProviderError::invalid_response(
                repository,
                provider,
                format!("failed to parse JSON: {}", e),
            )
        })
    }
}

/// Map an HTTP status to success or a provider error
fn classify_status(
    response: &Response,
    repository: &str,
    provider: &str,
) -> Result<(), ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    match status {
        StatusCode::NOT_FOUND => Err(ProviderError::repository_not_found(repository, provider)),
        StatusCode::TOO_MANY_REQUESTS => Err(ProviderError::rate_limit_exceeded(provider)),
        // GitHub answers 403 both for exhausted quotas and for denied access
        StatusCode::FORBIDDEN if rate_limit_exhausted(response) => {
            Err(ProviderError::rate_limit_exceeded(provider))
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ProviderError::authentication(
            provider,
            format!("HTTP {}", status),
        )),
        s if s.is_server_error() => Err(ProviderError::network_error(
            repository,
            provider,
            format!("HTTP {}", status),
        )),
        _ => Err(ProviderError::invalid_response(
            repository,
            provider,
            format!("unexpected status HTTP {}", status),
        )),
    }
}

fn rate_limit_exhausted(response: &Response) -> bool {
    response
        .headers()
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim() == "0")
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new().expect("failed to create default HTTP client")
    }
}

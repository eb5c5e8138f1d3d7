//! Answer Service HTTP Provider
//!
//! Implements the `AnswerProvider` and `IngestProvider` ports against the
//! answer service's JSON API. One request per call; the provider holds no
//! state beyond the injected client and endpoint configuration.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use rqc_application::ports::providers::{AnswerProvider, IngestProvider};
use rqc_domain::error::{Error, Result};
use rqc_domain::value_objects::{AnswerResult, IngestReceipt, Query};

use crate::constants::{
    CONTENT_TYPE_JSON, ERROR_MSG_REQUEST_FAILED, ERROR_MSG_REQUEST_TIMEOUT, INGEST_ENDPOINT_PATH,
    QUERY_ENDPOINT_PATH,
};
use crate::utils::HttpResponseUtils;

/// HTTP provider for the answer service
///
/// Receives the HTTP client via constructor injection so the caller owns
/// connection pooling and TLS setup.
///
/// ## Example
///
/// ```rust,no_run
/// use rqc_providers::http::HttpAnswerProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder()
///         .timeout(Duration::from_secs(30))
///         .build()?;
///     let provider = HttpAnswerProvider::new(
///         "http://127.0.0.1:8000".to_string(),
///         Duration::from_secs(30),
///         client,
///     );
///     Ok(())
/// }
/// ```
pub struct HttpAnswerProvider {
    base_url: String,
    timeout: Duration,
    http_client: Client,
}

impl HttpAnswerProvider {
    /// Create a new answer service provider
    ///
    /// # Arguments
    /// * `base_url` - Service base URL; a trailing slash is tolerated
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(base_url: String, timeout: Duration, http_client: Client) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            timeout,
            http_client,
        }
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configured request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Issue one POST and route the response through the shared checker
    async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        payload: &serde_json::Value,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "dispatching request");

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::network_with_source(ERROR_MSG_REQUEST_TIMEOUT, e)
                } else {
                    Error::network_with_source(ERROR_MSG_REQUEST_FAILED, e)
                }
            })?;

        HttpResponseUtils::check_and_parse(response, path).await
    }
}

#[async_trait]
impl AnswerProvider for HttpAnswerProvider {
    async fn ask(&self, query: &Query) -> Result<AnswerResult> {
        let payload = serde_json::json!({ "query": query.as_str() });
        self.post_json(QUERY_ENDPOINT_PATH, &payload).await
    }

    fn provider_name(&self) -> &str {
        "http"
    }
}

#[async_trait]
impl IngestProvider for HttpAnswerProvider {
    async fn ingest(&self, source_name: &str, text: &str) -> Result<IngestReceipt> {
        let payload = serde_json::json!({
            "source_name": source_name,
            "text": text,
        });
        self.post_json(INGEST_ENDPOINT_PATH, &payload).await
    }

    fn provider_name(&self) -> &str {
        "http"
    }
}

impl std::fmt::Debug for HttpAnswerProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpAnswerProvider")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

//! HTTP Response Utilities
//!
//! Helper functions for processing responses from the answer service.
//! A round trip counts as successful only when the status indicates success
//! AND the payload decodes; everything else becomes a domain error carrying
//! the most specific user-visible message available.

use crate::constants::ERROR_DETAIL_FIELD;
use rqc_domain::error::{Error, Result};
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Utilities for processing HTTP responses
///
/// Failure payloads from the service optionally carry a `detail` string;
/// when present it is the user-visible error message, otherwise a
/// status-coded fallback is used.
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and decode the typed payload
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `endpoint` - Endpoint label for error messages
    ///
    /// # Returns
    /// The decoded payload on success, or an appropriate error
    pub async fn check_and_parse<T: DeserializeOwned>(
        response: Response,
        endpoint: &str,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_detail(&body).unwrap_or_else(|| {
                format!("{endpoint} request failed ({})", status.as_u16())
            });
            return Err(Error::network(message));
        }

        response.json::<T>().await.map_err(|e| {
            Error::malformed_response(format!("{endpoint} response did not decode: {e}"))
        })
    }
}

/// Pull the service-provided detail message out of a failure body, if any
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get(ERROR_DETAIL_FIELD)?
        .as_str()
        .map(str::to_string)
}

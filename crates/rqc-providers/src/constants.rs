//! Provider Constants
//!
//! Constants specific to provider implementations. Domain constants live in
//! rqc-domain; configuration constants in rqc-infrastructure.

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// HTTP request timeout in seconds (default, overridable via config)
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// ANSWER SERVICE ENDPOINTS
// ============================================================================

/// Query endpoint path, relative to the configured base URL
pub const QUERY_ENDPOINT_PATH: &str = "/query";

/// Ingestion endpoint path, relative to the configured base URL
pub const INGEST_ENDPOINT_PATH: &str = "/ingest";

// ============================================================================
// ERROR MESSAGES
// ============================================================================

/// Failure-payload field carrying the service's error message
pub const ERROR_DETAIL_FIELD: &str = "detail";

/// Shown when a request exceeds the configured timeout
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request to the answer service timed out";

/// Shown when the transport fails without a more specific message
pub const ERROR_MSG_REQUEST_FAILED: &str = "Could not reach the answer service";

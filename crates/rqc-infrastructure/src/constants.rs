//! Infrastructure layer constants
//!
//! Constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `rqc_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "rqc.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "rqc";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "RQC";

// ============================================================================
// API DEFAULTS
// ============================================================================

/// Default answer service base URL
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default request timeout in seconds
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// LOGGING DEFAULTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable consulted for log filtering
pub const LOG_FILTER_ENV: &str = "RQC_LOG";

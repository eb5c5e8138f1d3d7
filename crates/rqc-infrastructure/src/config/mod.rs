//! Configuration
//!
//! Typed configuration for the console plus the loader that merges it from
//! defaults, an optional TOML file, and `RQC_*` environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{ApiConfig, AppConfig, LoggingConfig};

//! Infrastructure Layer - RAG Query Console
//!
//! Cross-cutting technical concerns: configuration loading and structured
//! logging. Nothing here knows about queries or citations; it hands a
//! validated [`config::AppConfig`] to whoever wires the application up.

pub mod config;
pub mod constants;
pub mod logging;

pub use config::{AppConfig, ConfigLoader};
pub use logging::init_logging;

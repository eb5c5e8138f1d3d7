//! Provider Utilities
//!
//! Shared helpers for processing HTTP responses. These are utilities, not
//! ports.

pub mod http_response;

pub use http_response::HttpResponseUtils;

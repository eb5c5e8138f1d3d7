//! # RAG Query Console
//!
//! A citation-aware client for a retrieval-augmented question-answering
//! service: submit a question, get back a generated answer with bracketed
//! citation markers, and see exactly the source passages the answer cites.
//!
//! This crate provides the main public API for the console. It re-exports
//! the layer crates and hosts the terminal presentation adapters.
//!
//! ## Architecture
//!
//! The codebase follows Clean Architecture principles:
//!
//! - `domain` - Core types, citation resolution, errors
//! - `application` - Use cases, ports, request lifecycle
//! - `providers` - HTTP transport to the answer service
//! - `infrastructure` - Configuration and logging
//! - `console` - Terminal presenter and notifier adapters
//!
//! ## Example
//!
//! ```ignore
//! use rqc::domain::value_objects::resolve_cited_sources;
//!
//! let cited = resolve_cited_sources(&result.answer, &result.sources)?;
//! ```

/// Terminal presentation adapters
pub mod console;

/// Domain layer - core types and citation resolution
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use rqc_domain::*;
}

/// Application layer - use cases and ports
pub mod application {
    pub use rqc_application::*;
}

/// Provider layer - transport implementations
pub mod providers {
    pub use rqc_providers::*;
}

/// Infrastructure layer - configuration and logging
pub mod infrastructure {
    pub use rqc_infrastructure::*;
}

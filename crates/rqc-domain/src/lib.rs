//! Domain Layer - RAG Query Console
//!
//! Core types and business rules for the citation-grounded Q&A client.
//! This crate is pure: no I/O, no async runtime, no transport concerns.
//!
//! ## Contents
//!
//! - `value_objects` - Query, answer payloads, citation resolution, request
//!   lifecycle
//! - `error` - The workspace-wide error type and `Result` alias
//! - `constants` - Domain constants shared with the upper layers
//!
//! ## Dependencies
//!
//! Serialization (`serde`), error derivation (`thiserror`), and the citation
//! marker pattern (`regex`). Nothing else.

pub mod constants;
pub mod error;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{
    AnswerResult, IngestReceipt, Query, RequestLifecycle, RequestPhase, SourceEntry,
    extract_citations, resolve_cited_sources,
};

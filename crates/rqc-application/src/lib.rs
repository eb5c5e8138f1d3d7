//! Application Layer - RAG Query Console
//!
//! This crate orchestrates one query or ingestion round trip at a time:
//! validation gate, busy/idle handling, transport dispatch, citation
//! resolution, and the handoff to presentation.
//!
//! ## Architecture
//!
//! The application layer:
//! - Contains use case implementations (application services)
//! - Defines ports (interfaces) for external dependencies
//! - Orchestrates domain value objects and the lifecycle state machine
//! - Has no dependencies on infrastructure or transport frameworks
//!
//! ## Ports (Interfaces)
//!
//! - `ports::providers` - Transport contracts ([`AnswerProvider`],
//!   [`IngestProvider`])
//! - `ports::presentation` - Presentation and notification collaborators
//!
//! ## Dependencies
//!
//! This crate depends only on `rqc-domain` and pure async plumbing
//! (`tokio`, `async-trait`, `tracing`).

pub mod busy;
pub mod ports;
pub mod use_cases;

pub use busy::BusyFlag;
pub use ports::{AnswerPresenter, AnswerProvider, IngestProvider, Notifier, Severity};
pub use use_cases::{IngestService, QueryService};

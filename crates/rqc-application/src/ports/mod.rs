//! Application Ports
//!
//! Contracts for everything outside the orchestration core: the transport
//! that reaches the answer service, and the presentation/notification
//! collaborators that render results. Implementations are injected by
//! constructor; the application layer never names a concrete one.

/// Presentation and notification collaborator ports
pub mod presentation;
/// Transport provider ports
pub mod providers;

pub use presentation::{AnswerPresenter, Notifier, Severity};
pub use providers::{AnswerProvider, IngestProvider};

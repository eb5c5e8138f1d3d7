//! Presentation and Notification Ports
//!
//! The orchestrator hands rendered data to these collaborators and never
//! looks back: layout, styling, and auto-dismiss timing are theirs. The
//! core only guarantees the data contract.

use rqc_domain::value_objects::SourceEntry;

/// Severity of a transient user notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Neutral information
    Info,
    /// Completed operation
    Success,
    /// Rejected input, nothing was sent
    Warning,
    /// Failed round trip
    Error,
}

/// Answer Presentation Interface
///
/// Receives either a neutral pending state (at the start of every cycle) or
/// a fully resolved `(answer, cited sources, elapsed seconds)` triple. An
/// empty cited slice means the answer referenced nothing renderable and the
/// sources section should be omitted; that is a presentation decision, not
/// an error.
pub trait AnswerPresenter: Send + Sync {
    /// Reset any previously displayed result to a pending presentation
    fn show_pending(&self);

    /// Render a resolved answer
    fn show_answer(&self, answer: &str, cited: &[SourceEntry], elapsed_secs: f64);
}

/// Transient Notification Interface
///
/// One message per failure (or ingest acknowledgement); display duration
/// and stacking are owned by the implementation.
pub trait Notifier: Send + Sync {
    /// Show a transient notification
    fn notify(&self, message: &str, severity: Severity);
}

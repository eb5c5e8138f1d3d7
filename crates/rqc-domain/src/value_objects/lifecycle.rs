//! Request Lifecycle State Machine
//!
//! One request round trip moves through
//! `Idle -> InFlight -> {Succeeded | Failed} -> Idle`. A lifecycle value is
//! created fresh for every user action and returned by the orchestrator's
//! entry point, so the transition history of a cycle can be inspected in
//! isolation instead of living in a free-floating flag.

use serde::Serialize;

/// Phase of one request round trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RequestPhase {
    /// No request in progress
    Idle,
    /// Request issued, response not yet received
    InFlight,
    /// Response received, parsed, and handed to presentation
    Succeeded,
    /// Transport, decode, or resolution failure
    Failed,
}

/// Value Object: Request Lifecycle
///
/// Tracks the current phase of one round trip plus the full phase history.
/// Transitions are recorded, not policed: the orchestrator is the only
/// writer and drives them in a fixed order.
///
/// ## Example
///
/// ```rust
/// use rqc_domain::value_objects::{RequestLifecycle, RequestPhase};
///
/// let mut lifecycle = RequestLifecycle::new();
/// lifecycle.begin();
/// lifecycle.succeed();
/// lifecycle.settle();
///
/// assert_eq!(lifecycle.phase(), RequestPhase::Idle);
/// assert!(lifecycle.succeeded());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestLifecycle {
    phase: RequestPhase,
    history: Vec<RequestPhase>,
}

impl RequestLifecycle {
    /// Create a fresh lifecycle at `Idle`
    ///
    /// Any residual state from a previous cycle is simply not carried:
    /// each user action gets a new value.
    pub fn new() -> Self {
        Self {
            phase: RequestPhase::Idle,
            history: vec![RequestPhase::Idle],
        }
    }

    /// Enter `InFlight` at the point the request is issued
    pub fn begin(&mut self) {
        self.transition(RequestPhase::InFlight);
    }

    /// Record a successful round trip
    pub fn succeed(&mut self) {
        self.transition(RequestPhase::Succeeded);
    }

    /// Record a failed round trip
    pub fn fail(&mut self) {
        self.transition(RequestPhase::Failed);
    }

    /// Return to `Idle` after a terminal phase
    ///
    /// Runs on success and failure alike; the cycle always ends ready for
    /// the next invocation.
    pub fn settle(&mut self) {
        self.transition(RequestPhase::Idle);
    }

    /// Current phase
    pub fn phase(&self) -> RequestPhase {
        self.phase
    }

    /// Every phase this cycle has passed through, in order
    pub fn history(&self) -> &[RequestPhase] {
        &self.history
    }

    /// Whether this cycle reached `Succeeded`
    pub fn succeeded(&self) -> bool {
        self.history.contains(&RequestPhase::Succeeded)
    }

    /// Whether this cycle reached `Failed`
    pub fn failed(&self) -> bool {
        self.history.contains(&RequestPhase::Failed)
    }

    /// Whether this cycle ever left `Idle`
    pub fn dispatched(&self) -> bool {
        self.history.contains(&RequestPhase::InFlight)
    }

    fn transition(&mut self, next: RequestPhase) {
        self.phase = next;
        self.history.push(next);
    }
}

impl Default for RequestLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

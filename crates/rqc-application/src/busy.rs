//! Busy/Idle Flag
//!
//! The single piece of state shared between a service and its invoking
//! layer. The service writes it at entry and exit of `InFlight`; the caller
//! reads it to gate new invocations while a request is outstanding. The
//! services themselves never queue overlapping requests.

use std::sync::atomic::{AtomicBool, Ordering};

/// Shared busy/idle flag for gating re-entrant invocations
///
/// Engaged before a request is issued and released unconditionally once the
/// cycle completes, on the success and failure paths alike.
pub struct BusyFlag {
    engaged: AtomicBool,
}

impl BusyFlag {
    /// Create a new flag in the idle state
    pub fn new() -> Self {
        Self {
            engaged: AtomicBool::new(false),
        }
    }

    /// Mark a request as in flight
    pub fn engage(&self) {
        self.engaged.store(true, Ordering::SeqCst);
    }

    /// Mark the cycle as complete, making the invoking controls usable again
    pub fn release(&self) {
        self.engaged.store(false, Ordering::SeqCst);
    }

    /// Whether a request is currently in flight
    pub fn is_busy(&self) -> bool {
        self.engaged.load(Ordering::SeqCst)
    }
}

impl Default for BusyFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BusyFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BusyFlag")
            .field("is_busy", &self.is_busy())
            .finish()
    }
}

//! Domain layer constants
//!
//! Constants that are part of the domain logic and are used by the
//! application layer. Transport-specific constants live in `rqc-providers`.

// ============================================================================
// CITATION DOMAIN CONSTANTS
// ============================================================================

/// Citation marker pattern: an open bracket, one or more decimal digits,
/// a close bracket. Brackets without a digits-only interior are not markers.
pub const CITATION_MARKER_PATTERN: &str = r"\[(\d+)\]";

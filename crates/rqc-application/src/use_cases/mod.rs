//! Application Use Cases
//!
//! One service per user-facing operation. Both follow the same
//! orchestration shape: validate, engage the busy flag, enter `InFlight`,
//! await the transport, route the outcome, release the busy flag
//! unconditionally, settle the lifecycle back to `Idle`.

/// Document ingestion round trip
pub mod ingest_service;
/// Query round trip with citation resolution
pub mod query_service;

pub use ingest_service::IngestService;
pub use query_service::{QueryService, round_elapsed_secs};

//! Ingestion Acknowledgement Value Objects

use serde::{Deserialize, Serialize};

/// Value Object: Ingest Receipt
///
/// Acknowledgement returned by the ingestion endpoint after a document
/// submission is accepted. The `message` is shown to the user verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngestReceipt {
    /// Human-readable acknowledgement from the service
    pub message: String,
}

//! Transport Provider Ports

use async_trait::async_trait;
use rqc_domain::error::Result;
use rqc_domain::value_objects::{AnswerResult, IngestReceipt, Query};

/// Answer Service Interface
///
/// Defines the contract for the transport that carries one query to the
/// answer-generation endpoint and returns its payload. A call resolves only
/// when the transport settles; the orchestrator suspends at this boundary.
///
/// Success means both a transport-level success status and a decodable
/// payload. Anything else comes back as a domain error carrying the most
/// specific user-visible message available.
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    /// Submit one query and return the generated answer with its catalog
    async fn ask(&self, query: &Query) -> Result<AnswerResult>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}

/// Document Ingestion Interface
///
/// Same transport shape as [`AnswerProvider`], no resolution stage: submits
/// a named document body and returns the service's acknowledgement.
#[async_trait]
pub trait IngestProvider: Send + Sync {
    /// Submit one document for ingestion
    async fn ingest(&self, source_name: &str, text: &str) -> Result<IngestReceipt>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}

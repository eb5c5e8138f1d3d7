//! Ingest Service Use Case
//!
//! Document submission follows the query orchestration shape with no
//! resolution stage: validate both fields, one round trip, acknowledge via
//! the notifier, busy flag released on both paths.

use crate::busy::BusyFlag;
use crate::ports::presentation::{Notifier, Severity};
use crate::ports::providers::IngestProvider;
use rqc_domain::error::{Error, Result};
use rqc_domain::value_objects::RequestLifecycle;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Ingest service - submits one document per cycle
pub struct IngestService {
    provider: Arc<dyn IngestProvider>,
    notifier: Arc<dyn Notifier>,
    busy: Arc<BusyFlag>,
}

impl IngestService {
    /// Create a new ingest service with injected collaborators
    pub fn new(
        provider: Arc<dyn IngestProvider>,
        notifier: Arc<dyn Notifier>,
        busy: Arc<BusyFlag>,
    ) -> Self {
        Self {
            provider,
            notifier,
            busy,
        }
    }

    /// The busy flag gating re-entrant submission
    pub fn busy(&self) -> &BusyFlag {
        &self.busy
    }

    /// Submit one document and drive the full request lifecycle
    pub async fn submit(&self, source_name: &str, text: &str) -> RequestLifecycle {
        let mut lifecycle = RequestLifecycle::new();

        let (name, body) = match validate_submission(source_name, text) {
            Ok(fields) => fields,
            Err(err) => {
                debug!(error = %err, "ingestion rejected before dispatch");
                self.notifier.notify(&err.to_string(), Severity::Warning);
                return lifecycle;
            }
        };

        self.busy.engage();
        lifecycle.begin();

        info!(
            provider = self.provider.provider_name(),
            source = name,
            text_chars = body.len(),
            "submitting document"
        );

        match self.provider.ingest(name, body).await {
            Ok(receipt) => {
                lifecycle.succeed();
                info!(source = name, "document ingested");
                self.notifier.notify(&receipt.message, Severity::Success);
            }
            Err(err) => {
                lifecycle.fail();
                warn!(error = %err, "ingestion failed");
                self.notifier.notify(&err.to_string(), Severity::Error);
            }
        }

        self.busy.release();
        lifecycle.settle();
        lifecycle
    }
}

/// Validate an ingestion submission, returning the trimmed fields
fn validate_submission<'a>(source_name: &'a str, text: &'a str) -> Result<(&'a str, &'a str)> {
    let name = source_name.trim();
    let body = text.trim();

    if name.is_empty() || body.is_empty() {
        return Err(Error::validation(
            "Both a source name and document text are required",
        ));
    }

    Ok((name, body))
}

impl std::fmt::Debug for IngestService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IngestService")
            .field("provider", &self.provider.provider_name())
            .field("busy", &self.busy)
            .finish()
    }
}

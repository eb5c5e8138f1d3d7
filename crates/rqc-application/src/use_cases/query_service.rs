//! Query Service Use Case
//!
//! The request orchestrator: drives one asynchronous round trip to the
//! answer service, resolves citations against the returned catalog, and
//! hands the result to presentation. Errors of every kind converge here
//! into exactly one user-visible notification; the lifecycle always comes
//! back to `Idle`.

use crate::busy::BusyFlag;
use crate::ports::presentation::{AnswerPresenter, Notifier, Severity};
use crate::ports::providers::AnswerProvider;
use rqc_domain::error::Result;
use rqc_domain::value_objects::{Query, RequestLifecycle, resolve_cited_sources};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Round an elapsed duration in seconds to two decimal places
pub fn round_elapsed_secs(secs: f64) -> f64 {
    (secs * 100.0).round() / 100.0
}

/// Query service - orchestrates one answer round trip at a time
pub struct QueryService {
    provider: Arc<dyn AnswerProvider>,
    presenter: Arc<dyn AnswerPresenter>,
    notifier: Arc<dyn Notifier>,
    busy: Arc<BusyFlag>,
}

impl QueryService {
    /// Create a new query service with injected collaborators
    pub fn new(
        provider: Arc<dyn AnswerProvider>,
        presenter: Arc<dyn AnswerPresenter>,
        notifier: Arc<dyn Notifier>,
        busy: Arc<BusyFlag>,
    ) -> Self {
        Self {
            provider,
            presenter,
            notifier,
            busy,
        }
    }

    /// The busy flag gating re-entrant submission
    ///
    /// The invoking layer must not call [`submit`](Self::submit) again while
    /// this reads busy; overlapping submissions are unsupported.
    pub fn busy(&self) -> &BusyFlag {
        &self.busy
    }

    /// Submit one question and drive the full request lifecycle
    ///
    /// Returns the lifecycle of this cycle so callers can inspect what
    /// happened. Empty input never reaches the transport: it produces one
    /// validation notification and a lifecycle that never left `Idle`.
    pub async fn submit(&self, raw_query: &str) -> RequestLifecycle {
        let mut lifecycle = RequestLifecycle::new();

        let query = match Query::parse(raw_query) {
            Ok(query) => query,
            Err(err) => {
                debug!(error = %err, "query rejected before dispatch");
                self.notifier.notify(&err.to_string(), Severity::Warning);
                return lifecycle;
            }
        };

        self.busy.engage();
        lifecycle.begin();
        self.presenter.show_pending();
        let started = Instant::now();

        info!(
            provider = self.provider.provider_name(),
            query_chars = query.as_str().len(),
            "submitting query"
        );

        match self.run_cycle(&query, started).await {
            Ok(elapsed_secs) => {
                lifecycle.succeed();
                info!(elapsed_secs, "query answered");
            }
            Err(err) => {
                lifecycle.fail();
                warn!(error = %err, "query failed");
                self.notifier.notify(&err.to_string(), Severity::Error);
            }
        }

        // Runs on both paths: the invoking controls come back regardless of
        // how the cycle ended.
        self.busy.release();
        lifecycle.settle();
        lifecycle
    }

    async fn run_cycle(&self, query: &Query, started: Instant) -> Result<f64> {
        let result = self.provider.ask(query).await?;
        let elapsed_secs = round_elapsed_secs(started.elapsed().as_secs_f64());

        let cited = resolve_cited_sources(&result.answer, &result.sources)?;
        self.presenter.show_answer(&result.answer, &cited, elapsed_secs);

        Ok(elapsed_secs)
    }
}

impl std::fmt::Debug for QueryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryService")
            .field("provider", &self.provider.provider_name())
            .field("busy", &self.busy)
            .finish()
    }
}

//! Recording fakes shared by the use-case tests

use async_trait::async_trait;
use rqc_application::busy::BusyFlag;
use rqc_application::ports::presentation::{AnswerPresenter, Notifier, Severity};
use rqc_application::ports::providers::{AnswerProvider, IngestProvider};
use rqc_domain::error::Result;
use rqc_domain::value_objects::{AnswerResult, IngestReceipt, Query, SourceEntry};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// What the presenter was asked to render, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Pending,
    Answer {
        answer: String,
        cited_ids: Vec<i64>,
        elapsed_secs: f64,
    },
}

#[derive(Default)]
pub struct RecordingPresenter {
    pub rendered: Mutex<Vec<Rendered>>,
}

impl AnswerPresenter for RecordingPresenter {
    fn show_pending(&self) {
        self.rendered.lock().unwrap().push(Rendered::Pending);
    }

    fn show_answer(&self, answer: &str, cited: &[SourceEntry], elapsed_secs: f64) {
        self.rendered.lock().unwrap().push(Rendered::Answer {
            answer: answer.to_string(),
            cited_ids: cited.iter().map(|s| s.id).collect(),
            elapsed_secs,
        });
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Mutex<Vec<(String, Severity)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.messages
            .lock()
            .unwrap()
            .push((message.to_string(), severity));
    }
}

/// Answer provider returning one queued response, observing the busy flag
/// at the moment of the call
pub struct StubAnswerProvider {
    response: Mutex<Option<Result<AnswerResult>>>,
    pub calls: AtomicUsize,
    busy: Arc<BusyFlag>,
    pub busy_during_call: Mutex<Vec<bool>>,
}

impl StubAnswerProvider {
    pub fn new(response: Result<AnswerResult>, busy: Arc<BusyFlag>) -> Self {
        Self {
            response: Mutex::new(Some(response)),
            calls: AtomicUsize::new(0),
            busy,
            busy_during_call: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AnswerProvider for StubAnswerProvider {
    async fn ask(&self, _query: &Query) -> Result<AnswerResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.busy_during_call
            .lock()
            .unwrap()
            .push(self.busy.is_busy());
        self.response
            .lock()
            .unwrap()
            .take()
            .expect("stub response already consumed")
    }

    fn provider_name(&self) -> &str {
        "stub"
    }
}

/// Ingest provider returning one queued response, recording its arguments
pub struct StubIngestProvider {
    response: Mutex<Option<Result<IngestReceipt>>>,
    pub calls: AtomicUsize,
    pub submitted: Mutex<Vec<(String, String)>>,
    busy: Arc<BusyFlag>,
    pub busy_during_call: Mutex<Vec<bool>>,
}

impl StubIngestProvider {
    pub fn new(response: Result<IngestReceipt>, busy: Arc<BusyFlag>) -> Self {
        Self {
            response: Mutex::new(Some(response)),
            calls: AtomicUsize::new(0),
            submitted: Mutex::new(Vec::new()),
            busy,
            busy_during_call: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl IngestProvider for StubIngestProvider {
    async fn ingest(&self, source_name: &str, text: &str) -> Result<IngestReceipt> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.submitted
            .lock()
            .unwrap()
            .push((source_name.to_string(), text.to_string()));
        self.busy_during_call
            .lock()
            .unwrap()
            .push(self.busy.is_busy());
        self.response
            .lock()
            .unwrap()
            .take()
            .expect("stub response already consumed")
    }

    fn provider_name(&self) -> &str {
        "stub"
    }
}

/// Build a two-entry catalog with an answer citing both
pub fn cited_answer() -> AnswerResult {
    AnswerResult {
        answer: "Vectors are indexed [2] and searched [1].".to_string(),
        sources: vec![
            SourceEntry {
                id: 1,
                text: "search passage".to_string(),
            },
            SourceEntry {
                id: 2,
                text: "index passage".to_string(),
            },
            SourceEntry {
                id: 3,
                text: "uncited passage".to_string(),
            },
        ],
    }
}

//! Terminal Presentation Adapters
//!
//! Thin implementations of the presentation ports: answers render to
//! stdout, notifications go to stderr with a severity tag. No logic beyond
//! formatting lives here; the orchestrator owns the data contract.

use rqc_application::ports::presentation::{AnswerPresenter, Notifier, Severity};
use rqc_domain::value_objects::SourceEntry;

/// Render a resolved answer as terminal text
///
/// The sources section is omitted entirely when nothing was cited.
pub fn render_answer(answer: &str, cited: &[SourceEntry], elapsed_secs: f64) -> String {
    let mut out = String::new();
    out.push_str(answer.trim_end());
    out.push('\n');

    if !cited.is_empty() {
        out.push_str("\nSources:\n");
        for entry in cited {
            out.push_str(&format!("  [{}] {}\n", entry.id, entry.text));
        }
    }

    out.push_str(&format!("\nAnswered in {elapsed_secs:.2}s\n"));
    out
}

/// Tag shown before a notification message
pub fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "info",
        Severity::Success => "ok",
        Severity::Warning => "warning",
        Severity::Error => "error",
    }
}

/// Presenter writing answers to stdout
#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    /// Create a new console presenter
    pub fn new() -> Self {
        Self
    }
}

impl AnswerPresenter for ConsolePresenter {
    fn show_pending(&self) {
        // Keep stdout clean for the final answer.
        eprintln!("Thinking...");
    }

    fn show_answer(&self, answer: &str, cited: &[SourceEntry], elapsed_secs: f64) {
        print!("{}", render_answer(answer, cited, elapsed_secs));
    }
}

/// Notifier writing severity-tagged lines to stderr
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    /// Create a new console notifier
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        eprintln!("[{}] {}", severity_tag(severity), message);
    }
}

//! RAG Query Console - Entry Point
//!
//! Binary entry point for the console. Wires configuration, logging, the
//! HTTP provider, and the use-case services, then dispatches one command.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `rqc ask <question>` | Submit a question, print the answer with its cited sources |
//! | `rqc ingest --name <n> --text <t>` | Submit inline text for ingestion |
//! | `rqc ingest --name <n> --file <path>` | Submit a file's contents for ingestion |

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};

use rqc::console::{ConsoleNotifier, ConsolePresenter};
use rqc_application::busy::BusyFlag;
use rqc_application::use_cases::{IngestService, QueryService};
use rqc_domain::error::{Error, Result};
use rqc_infrastructure::config::ConfigLoader;
use rqc_infrastructure::logging::init_logging;
use rqc_providers::http::HttpAnswerProvider;

/// Command line interface for the RAG Query Console
#[derive(Parser, Debug)]
#[command(name = "rqc")]
#[command(about = "RAG Query Console - Citation-aware Q&A client")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask a question and print the answer with its cited sources
    Ask {
        /// The question to submit
        question: String,
    },
    /// Submit a document to the answer service's index
    Ingest {
        /// Name the document is ingested under
        #[arg(long)]
        name: String,

        /// Inline document text
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,

        /// Read document text from a file
        #[arg(long)]
        file: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("[error] {err}");
            ExitCode::FAILURE
        }
    }
}

/// Wire the stack and dispatch one command
///
/// Returns whether the request cycle succeeded. Cycle failures have
/// already been shown to the user by the notifier; only wiring errors
/// propagate out of here.
async fn run(cli: Cli) -> Result<bool> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;

    let timeout = Duration::from_secs(config.api.timeout_secs);
    let http_client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::internal(format!("Failed to create HTTP client: {e}")))?;

    let provider = Arc::new(HttpAnswerProvider::new(
        config.api.base_url.clone(),
        timeout,
        http_client,
    ));
    let presenter = Arc::new(ConsolePresenter::new());
    let notifier = Arc::new(ConsoleNotifier::new());

    let lifecycle = match cli.command {
        Command::Ask { question } => {
            let service = QueryService::new(
                provider,
                presenter,
                notifier,
                Arc::new(BusyFlag::new()),
            );
            service.submit(&question).await
        }
        Command::Ingest { name, text, file } => {
            let body = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(path)?,
                (None, None) => {
                    return Err(Error::validation(
                        "Provide the document text with --text or --file",
                    ));
                }
            };

            let service = IngestService::new(provider, notifier, Arc::new(BusyFlag::new()));
            service.submit(&name, &body).await
        }
    };

    Ok(lifecycle.succeeded())
}

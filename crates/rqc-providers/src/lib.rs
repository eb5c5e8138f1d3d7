//! Provider Implementations - RAG Query Console
//!
//! Concrete implementations of the application-layer transport ports.
//! Today that is a single HTTP provider speaking JSON to the answer
//! service; the ports keep the orchestration core unaware of reqwest.

pub mod constants;
pub mod http;
pub mod utils;

pub use http::HttpAnswerProvider;

//! HTTP Transport Providers

pub mod answer_api;

pub use answer_api::HttpAnswerProvider;

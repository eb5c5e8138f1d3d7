//! Answer Payload Value Objects
//!
//! Wire-level value objects for the response to a query: the generated
//! answer text and its unordered catalog of candidate source passages.

use serde::{Deserialize, Serialize};

/// Value Object: Source Catalog Entry
///
/// One candidate passage returned alongside an answer. The `id` is the
/// lookup key that citation markers in the answer text refer to; uniqueness
/// is not guaranteed by contract and is not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceEntry {
    /// Identifier referenced by `[n]` markers in the answer text
    pub id: i64,
    /// The passage text
    pub text: String,
}

/// Value Object: Answer Result
///
/// The full response to one query. `answer` may contain zero or more
/// citation markers of the form `[n]`; `sources` is the catalog those
/// markers are resolved against.
///
/// ## Example
///
/// ```rust
/// use rqc_domain::value_objects::AnswerResult;
///
/// let result: AnswerResult = serde_json::from_str(
///     r#"{"answer": "Rust is memory safe [1].",
///         "sources": [{"id": 1, "text": "Rust guarantees memory safety."}]}"#,
/// ).unwrap();
/// assert_eq!(result.sources.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerResult {
    /// Generated answer text, possibly containing `[n]` citation markers
    pub answer: String,
    /// Unordered catalog of candidate source passages
    pub sources: Vec<SourceEntry>,
}

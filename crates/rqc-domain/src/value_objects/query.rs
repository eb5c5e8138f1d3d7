//! Validated Query Value Object
//!
//! A query is the free-text question the user submits. Validation happens
//! here, before any transport concern is involved: empty or whitespace-only
//! input never reaches the network layer.

use crate::error::{Error, Result};
use std::fmt;

/// Value Object: Validated Query
///
/// Holds the trimmed question text. Construction through [`Query::parse`]
/// is the validation gate for the whole request cycle.
///
/// ## Example
///
/// ```rust
/// use rqc_domain::value_objects::Query;
///
/// let query = Query::parse("  What is a vector index?  ").unwrap();
/// assert_eq!(query.as_str(), "What is a vector index?");
///
/// assert!(Query::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Parse raw user input into a query
    ///
    /// Trims leading/trailing whitespace and rejects empty input with a
    /// validation error, distinct from any network failure.
    pub fn parse<S: AsRef<str>>(raw: S) -> Result<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(Error::validation("Please enter a question"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the query text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the query, returning the owned text
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

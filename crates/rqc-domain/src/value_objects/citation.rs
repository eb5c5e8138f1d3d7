//! Citation Extraction and Source Resolution
//!
//! Pure functions mapping `(answer text, source catalog)` to the subset of
//! the catalog the answer actually cites. No side effects, deterministic.
//!
//! A citation marker is a bracketed integer literal (`[3]`). Matches are
//! scanned left to right; `[]` or `[a]` are not markers. Ids are parsed as
//! `i64`; a digit run outside that range is an error, never a truncation,
//! since dropping a citation would corrupt the displayed evidence trail.

use crate::constants::CITATION_MARKER_PATTERN;
use crate::error::{Error, Result};
use crate::value_objects::answer::SourceEntry;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static CITATION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(CITATION_MARKER_PATTERN).expect("citation marker pattern is valid"));

/// Extract the distinct citation ids referenced in answer text
///
/// Returns ids in order of first appearance, duplicates removed. Repeated
/// markers are fine; a marker whose digits overflow `i64` is not.
///
/// ## Example
///
/// ```rust
/// use rqc_domain::value_objects::citation::extract_citations;
///
/// let ids = extract_citations("First [3], then [1], then [3] again [10].").unwrap();
/// assert_eq!(ids, vec![3, 1, 10]);
/// ```
pub fn extract_citations(answer: &str) -> Result<Vec<i64>> {
    let mut seen = HashSet::new();
    let mut ordered = Vec::new();

    for captures in CITATION_MARKER.captures_iter(answer) {
        let digits = &captures[1];
        let id: i64 = digits
            .parse()
            .map_err(|_| Error::citation(format!("citation id out of range: [{digits}]")))?;
        if seen.insert(id) {
            ordered.push(id);
        }
    }

    Ok(ordered)
}

/// Resolve the sources actually cited by an answer
///
/// Filters `catalog` down to the entries whose `id` appears in the answer's
/// citation set. Output order is the catalog's order, not citation order.
/// A cited id with no catalog entry is not an error; it simply yields no
/// renderable source.
pub fn resolve_cited_sources(answer: &str, catalog: &[SourceEntry]) -> Result<Vec<SourceEntry>> {
    let cited: HashSet<i64> = extract_citations(answer)?.into_iter().collect();

    Ok(catalog
        .iter()
        .filter(|entry| cited.contains(&entry.id))
        .cloned()
        .collect())
}

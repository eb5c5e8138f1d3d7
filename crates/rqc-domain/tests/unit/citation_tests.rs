//! Unit tests for citation extraction and source resolution

use rqc_domain::value_objects::citation::{extract_citations, resolve_cited_sources};
use rqc_domain::value_objects::SourceEntry;
use rqc_domain::Error;

fn catalog(ids: &[i64]) -> Vec<SourceEntry> {
    ids.iter()
        .map(|id| SourceEntry {
            id: *id,
            text: format!("passage {id}"),
        })
        .collect()
}

#[test]
fn test_extract_distinct_ids_in_first_occurrence_order() {
    let ids = extract_citations("A claim [3]. Another [1], repeated [3], and [10].").unwrap();

    assert_eq!(ids, vec![3, 1, 10]);
}

#[test]
fn test_extract_no_markers() {
    let ids = extract_citations("No citations anywhere in this answer.").unwrap();

    assert!(ids.is_empty());
}

#[test]
fn test_extract_ignores_malformed_brackets() {
    let ids = extract_citations("Empty [] and alpha [a] and mixed [1a] are not markers, [2] is.")
        .unwrap();

    assert_eq!(ids, vec![2]);
}

#[test]
fn test_extract_adjacent_markers() {
    let ids = extract_citations("Dense citing [1][2][1][3].").unwrap();

    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_extract_multi_digit_and_zero() {
    let ids = extract_citations("Zero [0] and large [1234567].").unwrap();

    assert_eq!(ids, vec![0, 1_234_567]);
}

#[test]
fn test_extract_overflow_is_an_error() {
    // 20 digits, beyond i64::MAX
    let result = extract_citations("Suspicious [99999999999999999999] marker.");

    match result {
        Err(Error::Citation { message }) => {
            assert!(message.contains("99999999999999999999"));
        }
        other => panic!("expected citation error, got {other:?}"),
    }
}

#[test]
fn test_resolve_preserves_catalog_order() {
    let sources = catalog(&[5, 1, 3]);
    let cited = resolve_cited_sources("See [1] and also [3].", &sources).unwrap();

    let cited_ids: Vec<i64> = cited.iter().map(|s| s.id).collect();
    assert_eq!(cited_ids, vec![1, 3]);
}

#[test]
fn test_resolve_catalog_order_beats_citation_order() {
    let sources = catalog(&[1, 2, 3]);
    // Cited in reverse order; output must still follow the catalog.
    let cited = resolve_cited_sources("First [3], then [2], then [1].", &sources).unwrap();

    let cited_ids: Vec<i64> = cited.iter().map(|s| s.id).collect();
    assert_eq!(cited_ids, vec![1, 2, 3]);
}

#[test]
fn test_resolve_no_markers_yields_empty() {
    let sources = catalog(&[1, 2, 3]);
    let cited = resolve_cited_sources("An answer without references.", &sources).unwrap();

    assert!(cited.is_empty());
}

#[test]
fn test_resolve_dangling_citation_is_not_an_error() {
    let sources = catalog(&[1, 3]);
    let cited = resolve_cited_sources("Cites [1], [3] and missing [99].", &sources).unwrap();

    let cited_ids: Vec<i64> = cited.iter().map(|s| s.id).collect();
    assert_eq!(cited_ids, vec![1, 3]);
}

#[test]
fn test_resolve_duplicate_catalog_ids_all_match() {
    let mut sources = catalog(&[1, 2]);
    sources.push(SourceEntry {
        id: 1,
        text: "duplicate passage".to_string(),
    });

    let cited = resolve_cited_sources("Only [1].", &sources).unwrap();

    // Matching, not uniqueness enforcement: both id-1 entries survive.
    assert_eq!(cited.len(), 2);
    assert!(cited.iter().all(|s| s.id == 1));
}

#[test]
fn test_resolve_empty_catalog() {
    let cited = resolve_cited_sources("Cites [1].", &[]).unwrap();

    assert!(cited.is_empty());
}

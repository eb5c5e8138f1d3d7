//! Unit tests for the Query value object

use rqc_domain::value_objects::Query;
use rqc_domain::Error;

#[test]
fn test_query_parse_trims_whitespace() {
    let query = Query::parse("  What is a vector index?  ").unwrap();

    assert_eq!(query.as_str(), "What is a vector index?");
}

#[test]
fn test_query_parse_rejects_empty() {
    let result = Query::parse("");

    assert!(matches!(result, Err(Error::Validation { .. })));
}

#[test]
fn test_query_parse_rejects_whitespace_only() {
    let result = Query::parse(" \t \n  ");

    assert!(matches!(result, Err(Error::Validation { .. })));
}

#[test]
fn test_query_validation_message_is_user_facing() {
    let err = Query::parse("   ").unwrap_err();

    assert_eq!(err.to_string(), "Please enter a question");
}

#[test]
fn test_query_display_and_into_string() {
    let query = Query::parse("why is the sky blue").unwrap();

    assert_eq!(query.to_string(), "why is the sky blue");
    assert_eq!(query.into_string(), "why is the sky blue");
}

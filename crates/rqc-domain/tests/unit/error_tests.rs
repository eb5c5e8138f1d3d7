//! Unit tests for error types

use rqc_domain::{Error, Result};

#[test]
fn test_validation_error_display() {
    let err = Error::validation("Please enter a question");

    assert_eq!(err.to_string(), "Please enter a question");
}

#[test]
fn test_network_error_display_uses_message() {
    let err = Error::network("Could not process the document");

    assert_eq!(err.to_string(), "Could not process the document");
}

#[test]
fn test_network_error_with_source_preserves_chain() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    let err = Error::network_with_source("answer service unreachable", io);

    assert_eq!(err.to_string(), "answer service unreachable");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_citation_error_display() {
    let err = Error::citation("citation id out of range: [99999999999999999999]");

    assert!(err.to_string().starts_with("Citation error:"));
}

#[test]
fn test_json_error_conversion() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: Error = parse_err.into();

    assert!(matches!(err, Error::Json { .. }));
}

#[test]
fn test_io_error_conversion() {
    fn read_missing() -> Result<String> {
        Ok(std::fs::read_to_string("/definitely/not/a/real/path")?)
    }

    assert!(matches!(read_missing(), Err(Error::Io { .. })));
}

#[test]
fn test_configuration_error_display() {
    let err = Error::configuration("timeout cannot be 0");

    assert_eq!(err.to_string(), "Configuration error: timeout cannot be 0");
}

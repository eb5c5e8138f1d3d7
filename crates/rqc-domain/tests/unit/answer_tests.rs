//! Unit tests for answer payload value objects

use rqc_domain::value_objects::{AnswerResult, IngestReceipt, SourceEntry};

#[test]
fn test_answer_result_deserializes_wire_shape() {
    let json = r#"{
        "answer": "Rust is memory safe [1] and fast [2].",
        "sources": [
            {"id": 1, "text": "Rust guarantees memory safety."},
            {"id": 2, "text": "Rust compiles to native code."}
        ]
    }"#;

    let result: AnswerResult = serde_json::from_str(json).expect("deserialization should succeed");

    assert_eq!(result.answer, "Rust is memory safe [1] and fast [2].");
    assert_eq!(result.sources.len(), 2);
    assert_eq!(result.sources[0].id, 1);
    assert_eq!(result.sources[1].text, "Rust compiles to native code.");
}

#[test]
fn test_answer_result_round_trip() {
    let result = AnswerResult {
        answer: "See [7].".to_string(),
        sources: vec![SourceEntry {
            id: 7,
            text: "passage".to_string(),
        }],
    };

    let json = serde_json::to_string(&result).expect("serialization should succeed");
    let deserialized: AnswerResult =
        serde_json::from_str(&json).expect("deserialization should succeed");

    assert_eq!(result, deserialized);
}

#[test]
fn test_answer_result_empty_sources() {
    let json = r#"{"answer": "I could not find an answer.", "sources": []}"#;

    let result: AnswerResult = serde_json::from_str(json).expect("deserialization should succeed");

    assert!(result.sources.is_empty());
}

#[test]
fn test_ingest_receipt_deserializes() {
    let receipt: IngestReceipt =
        serde_json::from_str(r#"{"message": "Ingested 12 chunks"}"#).unwrap();

    assert_eq!(receipt.message, "Ingested 12 chunks");
}

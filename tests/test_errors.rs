//! Tests for error types.

use message_formatting::{Error, FormatterOptions, MessageFormatter, ParsedMessage};

#[test]
fn test_invalid_options_error() {
    let error = Error::InvalidOptions("database marker #0 is blank".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid formatter options: database marker #0 is blank"
    );
}

#[test]
fn test_json_decode_error() {
    let inner = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
    let error = Error::JsonDecode(inner);
    assert!(error.to_string().contains("JSON"));
}

#[test]
fn test_formatter_rejects_blank_marker() {
    let options = FormatterOptions::builder().database_markers([""]).build();
    let err = MessageFormatter::new(options).unwrap_err();
    assert!(matches!(err, Error::InvalidOptions(_)));
}

#[test]
fn test_formatter_rejects_missing_markers() {
    let options = FormatterOptions::builder()
        .database_markers(Vec::<String>::new())
        .build();
    let err = MessageFormatter::new(options).unwrap_err();
    assert!(err.to_string().contains("no markers"));
}

#[test]
fn test_options_from_malformed_json() {
    let err = FormatterOptions::from_json("{not json").unwrap_err();
    assert!(matches!(err, Error::JsonDecode(_)));
}

#[test]
fn test_options_from_json_validates() {
    let err = FormatterOptions::from_json(r#"{"databaseMarkers": ["   "]}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidOptions(_)));
}

#[test]
fn test_parsed_message_from_bad_json() {
    let err = ParsedMessage::from_json(r#"{"segments": [{"type": "heading"}]}"#).unwrap_err();
    assert!(matches!(err, Error::JsonDecode(_)));
}

#[test]
fn test_parsed_message_rejects_metadata_of_another_kind() {
    let err = ParsedMessage::from_json(
        r#"{"segments":[{"type":"bold","content":"x","metadata":{"number":3,"businessName":"Evil"}}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::JsonDecode(_)));
    assert!(err.to_string().contains("bold segment cannot carry"));
}

#[test]
fn test_parsed_message_rejects_numbered_list_without_number() {
    let err = ParsedMessage::from_json(
        r#"{"segments":[{"type":"numbered_list","content":"y","metadata":{}}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::JsonDecode(_)));
    assert!(err.to_string().contains("missing its number"));
}

#[test]
fn test_parsed_message_accepts_matching_metadata() {
    let msg = ParsedMessage::from_json(
        r#"{"segments":[{"type":"numbered_list","content":"y","metadata":{"number":4}},{"type":"database_indicator","content":"","metadata":{"businessName":"Acme"}},{"type":"text","content":"z"}]}"#,
    )
    .unwrap();
    assert_eq!(msg.segments()[0].number(), Some(4));
    assert_eq!(msg.database_business_names(), vec!["Acme"]);
    assert_eq!(msg.to_plain_text(), "4. y(from our database)z");
}

//! Tests for the error taxonomy.

use super::error::Error;

#[test]
fn test_error_display() {
    let err = Error::Decode("missing top-level key 'nodes'".to_string());
    assert_eq!(err.to_string(), "Decode error: missing top-level key 'nodes'");
}

#[test]
fn test_error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_error_from_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Json(_)));
}

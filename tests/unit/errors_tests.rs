/*!
 * Tests for error types
 */

use std::error::Error;
use std::io;
use std::path::PathBuf;
use ohms2mkv::errors::{AppError, IndexError, MappingError};

/// Test that mapping errors name the field and point
#[test]
fn test_mapping_error_display_shouldNameFieldAndPoint() {
    let error = MappingError::MissingField { field: "title", point: 4 };
    assert_eq!(error.to_string(), "Point 4 is missing required field <title>");

    let error = MappingError::InvalidField { field: "time", point: 2, value: "1.5".to_string() };
    assert_eq!(error.to_string(), "Point 2 has invalid <time> value: \"1.5\"");
}

/// Test that errors convert into the application error
#[test]
fn test_app_error_from_componentErrors_shouldWrap() {
    let error: AppError = MappingError::MissingField { field: "time", point: 1 }.into();
    assert!(matches!(error, AppError::Mapping(_)));
    assert!(error.to_string().starts_with("Mapping error:"));

    let error: AppError = IndexError::Malformed("unclosed element <ROOT>".to_string()).into();
    assert!(matches!(error, AppError::Index(_)));
}

/// Test that I/O errors keep their source and path
#[test]
fn test_io_errors_shouldExposeSourceAndPath() {
    let error = AppError::Write {
        path: PathBuf::from("/tmp/out.xml"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(error.to_string().contains("/tmp/out.xml"));
    assert!(error.source().is_some());

    let error = IndexError::Read {
        path: PathBuf::from("in.xml"),
        source: io::Error::new(io::ErrorKind::NotFound, "gone"),
    };
    assert!(error.to_string().contains("in.xml"));
}

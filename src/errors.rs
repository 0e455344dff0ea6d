/*!
 * Error types for the ohms2mkv application.
 *
 * This module contains custom error types for the reading, mapping and
 * writing stages of a conversion, using the thiserror crate for ergonomic
 * error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an OHMS index document
#[derive(Error, Debug)]
pub enum IndexError {
    /// The index file could not be read
    #[error("Failed to read index file {path:?}: {source}")]
    Read {
        /// Path of the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The document is not well-formed XML
    #[error("Malformed index XML: {0}")]
    Malformed(String),

    /// The document at a known path is not well-formed XML
    #[error("Malformed index XML in {path:?}: {message}")]
    MalformedFile {
        /// Path of the offending file
        path: PathBuf,
        /// Parser diagnostic
        message: String,
    },
}

/// Errors that can occur while mapping index points to chapters
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MappingError {
    /// A required element is absent on a point
    #[error("Point {point} is missing required field <{field}>")]
    MissingField {
        /// Tag name of the missing element
        field: &'static str,
        /// 1-based position of the point in the document
        point: usize,
    },

    /// A field is present but its value cannot be used
    #[error("Point {point} has invalid <{field}> value: {value:?}")]
    InvalidField {
        /// Tag name of the offending element
        field: &'static str,
        /// 1-based position of the point in the document
        point: usize,
        /// Raw text of the element
        value: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from reading the index
    #[error("Index error: {0}")]
    Index(#[from] IndexError),

    /// Error from mapping points to chapters
    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),

    /// The output file could not be written
    #[error("Failed to write chapters file {path:?}: {source}")]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/*!
 * # ohms2mkv - OHMS index to Matroska chapters
 * 
 * A Rust library for turning OHMS (Oral History Metadata Synchronizer)
 * index documents into Matroska chapter XML, so the indexed points of an
 * oral history interview become navigable chapters in an MKV file.
 * 
 * ## Features
 * 
 * - Parse OHMS index XML into a generic element tree
 * - One chapter per indexed point, with primary and alternate titles
 * - Language names resolved to ISO 639-3 codes, `und` when unknown
 * - Optional swap of primary and alternate language roles
 * - Atomic output writes: no partial chapters file on failure
 * 
 * ## Architecture
 * 
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `ohms_index`: Index reading and XML tree traversal
 * - `chapter_mapper`: Point to chapter mapping and timestamp formatting
 * - `chapter_writer`: Matroska chapter XML rendering and output
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language name and code utilities
 * - `errors`: Custom error types for the application
 * 
 * ## License
 * 
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod ohms_index;
pub mod chapter_mapper;
pub mod chapter_writer;
pub mod app_controller;
pub mod language_utils;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use chapter_mapper::{ChapterDisplay, ChapterRecord, LanguagePair, format_time_start, map_chapters};
pub use chapter_writer::{render_chapters, write_chapters};
pub use ohms_index::{OhmsIndex, XmlElement};
pub use language_utils::{resolve_language_name, language_code_or_undetermined, UNDETERMINED_LANGUAGE};
pub use errors::{AppError, IndexError, MappingError};

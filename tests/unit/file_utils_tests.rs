/*!
 * Tests for file utility functions
 */

use std::fs;
use std::path::Path;
use anyhow::Result;
use ohms2mkv::file_utils::{FileManager, DEFAULT_OUTPUT_SUFFIX};
use crate::common;

/// Test that a trailing .xml is replaced by the suffix
#[test]
fn test_default_output_path_withXmlInput_shouldReplaceExtension() {
    let output = FileManager::default_output_path("/data/ohms/interview.xml", DEFAULT_OUTPUT_SUFFIX);
    assert_eq!(output, Path::new("/data/ohms/interview-MKV-Chapters.xml"));

    let output = FileManager::default_output_path("INTERVIEW.XML", DEFAULT_OUTPUT_SUFFIX);
    assert_eq!(output, Path::new("INTERVIEW-MKV-Chapters.xml"));
}

/// Test that only the trailing .xml is replaced
#[test]
fn test_default_output_path_withXmlInDirectory_shouldOnlyTouchEnd() {
    let output = FileManager::default_output_path("exports.xml/index.xml", DEFAULT_OUTPUT_SUFFIX);
    assert_eq!(output, Path::new("exports.xml/index-MKV-Chapters.xml"));
}

/// Test that inputs without .xml get the suffix appended
#[test]
fn test_default_output_path_withOtherExtension_shouldAppendSuffix() {
    let output = FileManager::default_output_path("index.ohms", DEFAULT_OUTPUT_SUFFIX);
    assert_eq!(output, Path::new("index.ohms-MKV-Chapters.xml"));
}

/// Test that a custom suffix is honored
#[test]
fn test_default_output_path_withCustomSuffix_shouldUseIt() {
    let output = FileManager::default_output_path("a/b.xml", ".chapters.xml");
    assert_eq!(output, Path::new("a/b.chapters.xml"));
}

/// Test that atomic writes replace existing content
#[test]
fn test_write_atomically_withExistingFile_shouldReplaceContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "out.xml", "old content")?;

    FileManager::write_atomically(&path, "new content")?;

    assert_eq!(fs::read_to_string(&path)?, "new content");
    // No temporary files are left behind
    assert_eq!(fs::read_dir(temp_dir.path())?.count(), 1);
    Ok(())
}

/// Test that missing parent directories are created
#[test]
fn test_ensure_dir_withMissingDirectory_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("a").join("b");

    FileManager::ensure_dir(&nested)?;

    assert!(nested.is_dir());
    Ok(())
}

/*!
 * Tests for OHMS index reading
 */

use anyhow::Result;
use ohms2mkv::errors::IndexError;
use ohms2mkv::ohms_index::{OhmsIndex, parse_document};
use crate::common;

/// Test that points are found in document order
#[test]
fn test_points_withBilingualIndex_shouldReturnAllInOrder() -> Result<()> {
    let index = OhmsIndex::parse(common::BILINGUAL_INDEX)?;
    let points = index.points();

    assert_eq!(points.len(), 3);
    let times: Vec<&str> = points.iter().filter_map(|p| p.child_text("time")).collect();
    assert_eq!(times, vec!["0", "3661", "36000"]);

    Ok(())
}

/// Test that document-level language names are read
#[test]
fn test_language_names_withBilingualIndex_shouldBeRead() -> Result<()> {
    let index = OhmsIndex::parse(common::BILINGUAL_INDEX)?;

    assert_eq!(index.primary_language_name(), Some("English"));
    assert_eq!(index.alternate_language_name(), Some("Spanish"));

    Ok(())
}

/// Test that absent or empty language names read as None
#[test]
fn test_language_names_withMissingOrEmpty_shouldBeNone() -> Result<()> {
    let index = OhmsIndex::parse(common::MONOLINGUAL_INDEX)?;
    assert_eq!(index.primary_language_name(), None);
    assert_eq!(index.alternate_language_name(), None);

    let xml = common::index_with_points(Some("  "), Some(""), &[]);
    let index = OhmsIndex::parse(&xml)?;
    assert_eq!(index.primary_language_name(), None);
    assert_eq!(index.alternate_language_name(), None);

    Ok(())
}

/// Test that entities and CDATA end up in element text
#[test]
fn test_parse_document_withEntitiesAndCdata_shouldDecodeText() -> Result<()> {
    let index = OhmsIndex::parse(common::BILINGUAL_INDEX)?;
    let points = index.points();

    assert_eq!(points[1].child_text("title"), Some("Childhood & family"));
    assert_eq!(points[2].child_text("title"), Some("Moving <north>"));
    assert_eq!(points[0].child_text("title_alt"), Some("Introducción"));

    Ok(())
}

/// Test that namespace prefixes and tag case are ignored when matching
#[test]
fn test_find_withPrefixedAndUppercaseTags_shouldMatch() -> Result<()> {
    let root = parse_document(
        r#"<o:ROOT xmlns:o="urn:ohms"><o:Point><o:TIME>5</o:TIME></o:Point></o:ROOT>"#,
    )?;

    assert_eq!(root.name, "ROOT");
    let points = root.find_all("point");
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].child_text("time"), Some("5"));

    Ok(())
}

/// Test that self-closing elements are kept as empty elements
#[test]
fn test_parse_document_withEmptyElement_shouldKeepIt() -> Result<()> {
    let root = parse_document("<point><time>1</time><title_alt/></point>")?;

    assert_eq!(root.children.len(), 2);
    assert_eq!(root.child_text("title_alt"), Some(""));

    Ok(())
}

/// Test that malformed documents are rejected
#[test]
fn test_parse_document_withMalformedXml_shouldFail() {
    let cases = [
        "<ROOT><point></ROOT>",
        "<ROOT><point>",
        "",
        "just text",
        "<ROOT/><ROOT/>",
        "<ROOT>&bogus;</ROOT>",
    ];

    for case in cases {
        let result = parse_document(case);
        assert!(
            matches!(result, Err(IndexError::Malformed(_))),
            "expected malformed error for {:?}, got {:?}",
            case,
            result
        );
    }
}

/// Test that reading a missing file reports the path
#[test]
fn test_from_file_withMissingFile_shouldReportReadError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("missing.xml");

    match OhmsIndex::from_file(&missing) {
        Err(IndexError::Read { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected read error, got {:?}", other),
    }

    Ok(())
}

/// Test that a malformed file reports its path
#[test]
fn test_from_file_withMalformedFile_shouldReportPath() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "broken.xml", "<ROOT><point>")?;

    match OhmsIndex::from_file(&file) {
        Err(IndexError::MalformedFile { path, .. }) => assert_eq!(path, file),
        other => panic!("expected malformed file error, got {:?}", other),
    }

    Ok(())
}

use std::path::Path;

use log::debug;
use quick_xml::escape::escape;

use crate::chapter_mapper::ChapterRecord;
use crate::errors::AppError;
use crate::file_utils::FileManager;

// @module: Matroska chapter XML output

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
const INDENT: &str = "  ";

/// Append `<tag>value</tag>` on its own line at the given depth
fn push_element(out: &mut String, depth: usize, tag: &str, value: &str) {
    out.push_str(&INDENT.repeat(depth));
    out.push_str(&format!("<{}>{}</{}>\n", tag, escape(value), tag));
}

fn push_open(out: &mut String, depth: usize, tag: &str) {
    out.push_str(&INDENT.repeat(depth));
    out.push_str(&format!("<{}>\n", tag));
}

fn push_close(out: &mut String, depth: usize, tag: &str) {
    out.push_str(&INDENT.repeat(depth));
    out.push_str(&format!("</{}>\n", tag));
}

fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

fn push_chapter_atom(out: &mut String, chapter: &ChapterRecord) {
    push_open(out, 2, "ChapterAtom");
    push_element(out, 3, "ChapterUID", &chapter.uid.to_string());
    push_element(out, 3, "ChapterTimeStart", &chapter.time_start);
    push_element(out, 3, "ChapterFlagHidden", flag(chapter.hidden));
    push_element(out, 3, "ChapterFlagEnabled", flag(chapter.enabled));

    for display in &chapter.displays {
        push_open(out, 3, "ChapterDisplay");
        push_element(out, 4, "ChapterString", &display.text);
        push_element(out, 4, "ChapterLanguage", &display.language);
        push_close(out, 3, "ChapterDisplay");
    }

    push_close(out, 2, "ChapterAtom");
}

/// Render chapters as a Matroska chapter XML document
///
/// The document always holds exactly one ordered, visible, default
/// edition with UID 1. Element order inside each atom is fixed.
pub fn render_chapters(chapters: &[ChapterRecord]) -> String {
    let mut out = String::from(XML_DECLARATION);

    push_open(&mut out, 0, "Chapters");
    push_open(&mut out, 1, "EditionEntry");
    push_element(&mut out, 2, "EditionFlagOrdered", flag(true));
    push_element(&mut out, 2, "EditionFlagHidden", flag(false));
    push_element(&mut out, 2, "EditionFlagDefault", flag(true));
    push_element(&mut out, 2, "EditionUID", "1");

    for chapter in chapters {
        push_chapter_atom(&mut out, chapter);
    }

    push_close(&mut out, 1, "EditionEntry");
    push_close(&mut out, 0, "Chapters");
    out
}

/// Write a rendered chapter document to `path`
///
/// The destination is replaced in one step; a failed write leaves any
/// existing file untouched.
pub fn write_chapters<P: AsRef<Path>>(path: P, document: &str) -> Result<(), AppError> {
    let path = path.as_ref();
    FileManager::write_atomically(path, document).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Wrote {} bytes to {:?}", document.len(), path);
    Ok(())
}

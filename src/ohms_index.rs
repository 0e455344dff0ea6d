use std::fs;
use std::path::Path;

use log::debug;
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::errors::IndexError;

// @module: OHMS index loading

/// Tag name of an indexed point
pub const POINT_TAG: &str = "point";
/// Tag name of the document's primary language
pub const LANGUAGE_TAG: &str = "language";
/// Tag name of the document's alternate transcript language
pub const ALT_LANGUAGE_TAG: &str = "transcript_alt_lang";

// @struct: Generic XML element node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    // @field: Local tag name, namespace prefix removed
    pub name: String,

    // @field: Direct text content, untrimmed
    pub text: String,

    // @field: Child elements in document order
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Check the tag name, ignoring ASCII case
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Text content with surrounding whitespace removed
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    /// First descendant with the given tag name, in document order
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        for child in &self.children {
            if child.is_named(name) {
                return Some(child);
            }
            if let Some(found) = child.find(name) {
                return Some(found);
            }
        }
        None
    }

    /// All descendants with the given tag name, in document order
    pub fn find_all(&self, name: &str) -> Vec<&XmlElement> {
        let mut found = Vec::new();
        self.collect_named(name, &mut found);
        found
    }

    fn collect_named<'a>(&'a self, name: &str, found: &mut Vec<&'a XmlElement>) {
        for child in &self.children {
            if child.is_named(name) {
                found.push(child);
            }
            child.collect_named(name, found);
        }
    }

    /// Trimmed text of the first descendant with the given tag name
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.find(name).map(XmlElement::text)
    }
}

/// Parse a complete XML document into an element tree
pub fn parse_document(source: &str) -> Result<XmlElement, IndexError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut reader = Reader::from_str(source);

    let mut open: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                open.push(XmlElement::new(element_name(e.local_name().as_ref())));
            }
            Ok(Event::Empty(e)) => {
                let element = XmlElement::new(element_name(e.local_name().as_ref()));
                attach(&mut open, &mut root, element)?;
            }
            Ok(Event::End(_)) => {
                let element = open
                    .pop()
                    .ok_or_else(|| IndexError::Malformed("unexpected closing tag".to_string()))?;
                attach(&mut open, &mut root, element)?;
            }
            Ok(Event::Text(e)) => {
                append_text(&mut open, &String::from_utf8_lossy(e.as_ref()))?;
            }
            Ok(Event::CData(e)) => {
                append_text(&mut open, &String::from_utf8_lossy(&e))?;
            }
            Ok(Event::GeneralRef(e)) => {
                let entity = String::from_utf8_lossy(e.as_ref());
                let resolved = resolve_entity(&entity).ok_or_else(|| {
                    IndexError::Malformed(format!("unknown entity reference &{};", entity))
                })?;
                append_text(&mut open, &resolved)?;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(IndexError::Malformed(format!(
                    "{} (at byte {})",
                    e,
                    reader.error_position()
                )));
            }
            _ => {}
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(IndexError::Malformed(format!(
            "unclosed element <{}>",
            unclosed.name
        )));
    }

    root.ok_or_else(|| IndexError::Malformed("document has no root element".to_string()))
}

fn element_name(local: &[u8]) -> String {
    String::from_utf8_lossy(local).into_owned()
}

fn attach(
    open: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), IndexError> {
    match open.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_some() => {
            return Err(IndexError::Malformed(format!(
                "multiple root elements, found <{}> after the first",
                element.name
            )));
        }
        None => *root = Some(element),
    }
    Ok(())
}

fn append_text(open: &mut [XmlElement], text: &str) -> Result<(), IndexError> {
    match open.last_mut() {
        Some(current) => current.text.push_str(text),
        None if text.trim().is_empty() => {}
        None => {
            return Err(IndexError::Malformed(
                "text content outside the root element".to_string(),
            ));
        }
    }
    Ok(())
}

fn resolve_entity(entity: &str) -> Option<String> {
    match entity {
        "apos" => return Some("'".to_string()),
        "quot" => return Some("\"".to_string()),
        "lt" => return Some("<".to_string()),
        "gt" => return Some(">".to_string()),
        "amp" => return Some("&".to_string()),
        _ => {}
    }

    let code = if let Some(hex) = entity.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok()?
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse::<u32>().ok()?
    } else {
        return None;
    };

    char::from_u32(code).map(|c| c.to_string())
}

/// A parsed OHMS index document
#[derive(Debug, Clone)]
pub struct OhmsIndex {
    root: XmlElement,
}

impl OhmsIndex {
    /// Parse an index from XML text
    pub fn parse(source: &str) -> Result<Self, IndexError> {
        let root = parse_document(source)?;
        Ok(Self { root })
    }

    /// Read and parse an index file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, IndexError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| IndexError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let index = Self::parse(&content).map_err(|e| match e {
            IndexError::Malformed(message) => IndexError::MalformedFile {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;

        debug!(
            "Loaded index {:?} with {} point(s)",
            path,
            index.points().len()
        );
        Ok(index)
    }

    /// All `point` elements in document order
    pub fn points(&self) -> Vec<&XmlElement> {
        self.root.find_all(POINT_TAG)
    }

    /// Name of the interview's primary language, if given
    pub fn primary_language_name(&self) -> Option<&str> {
        self.root.child_text(LANGUAGE_TAG).filter(|name| !name.is_empty())
    }

    /// Name of the alternate transcript language, if given
    pub fn alternate_language_name(&self) -> Option<&str> {
        self.root
            .child_text(ALT_LANGUAGE_TAG)
            .filter(|name| !name.is_empty())
    }
}
